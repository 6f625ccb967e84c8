//! Output generation for search and featurization results.
//!
//! # Submodules
//!
//! - [`json`]: writes any serializable result to a dated JSON file
//! - [`table`]: renders results as plain text for the terminal
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── 2026-10-16/
//!     ├── headlines-coronavirus.json
//!     ├── everything-bitcoin.json
//!     └── sources.json
//! ```

pub mod json;
pub mod table;
