//! JSON output for search and featurization results.
//!
//! Files are grouped by the local date of the run:
//! ```text
//! output_dir/
//! └── 2026-10-16/
//!     └── headlines-coronavirus.json
//! ```
//! Writing the same name twice on one day overwrites the earlier file.

use crate::error::Result;
use crate::utils::{ensure_writable_dir, slugify_title};
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `value` to `{dir}/{YYYY-MM-DD}/{slug(name)}.json`.
///
/// # Arguments
///
/// * `value` - Anything serializable: an `ArticleSet`, a `SourceSet`, a
///   `FeatureRecord` or a batch of featurized rows
/// * `dir` - Base output directory; created if missing
/// * `name` - Human-readable name, slugified for the file name
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(dir = %dir.display(), name = %name))]
pub async fn write_json<T: Serialize>(value: &T, dir: &Path, name: &str) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(value)?;

    let dated_dir = dir.join(Local::now().date_naive().format("%Y-%m-%d").to_string());
    if let Err(e) = ensure_writable_dir(&dated_dir).await {
        error!(dir = %dated_dir.display(), error = %e, "Output directory is not usable");
        return Err(e);
    }

    let path = dated_dir.join(format!("{}.json", slugify_title(name)));
    info!(path = %path.display(), bytes = json.len(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, ArticleSet};

    #[tokio::test]
    async fn test_write_json_layout_and_content() {
        let root = tempfile::tempdir().unwrap();
        let set = ArticleSet {
            total_results: 1,
            articles: vec![Article {
                title: Some("Markets rally".to_string()),
                ..Default::default()
            }],
        };

        let path = write_json(&set, root.path(), "Headlines: Markets!").await.unwrap();

        assert_eq!(path.file_name().unwrap(), "headlines-markets.json");
        let day = path.parent().unwrap();
        assert_eq!(day.parent().unwrap(), root.path());
        assert_eq!(
            day.file_name().unwrap().to_string_lossy(),
            Local::now().date_naive().format("%Y-%m-%d").to_string()
        );

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["total_results"], 1);
        assert_eq!(written["articles"][0]["title"], "Markets rally");
    }
}
