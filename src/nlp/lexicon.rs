//! Word lists behind the default analyzers.
//!
//! Everything here is static data looked up through lazily built maps;
//! the first lookup pays for construction, later ones are plain hashing.

use crate::models::EntityLabel;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Closed-class words and irregular forms with a fixed Penn Treebank tag.
const CLOSED_CLASS: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "a", "an", "the", "this", "these", "those", "every", "each", "some", "any", "no",
            "all", "both", "another", "either", "neither", "half",
        ],
    ),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
    ("WP", &["who", "whom", "what", "whoever"]),
    ("WP$", &["whose"]),
    ("WDT", &["which", "whatever", "whichever"]),
    ("WRB", &["when", "where", "why", "how", "whenever", "wherever"]),
    (
        "MD",
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ca",
            "wo", "'ll", "'d",
        ],
    ),
    ("TO", &["to"]),
    ("CC", &["and", "or", "but", "nor", "plus", "&"]),
    (
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "about", "into", "over", "after",
            "before", "between", "under", "against", "during", "without", "through", "within",
            "among", "since", "until", "upon", "across", "behind", "beyond", "toward", "towards",
            "near", "despite", "per", "via", "than", "because", "although", "though", "if",
            "while", "whether", "unless", "as", "like", "that", "amid", "around", "onto",
            "throughout", "whereas", "below", "above", "beside", "besides", "inside", "outside",
        ],
    ),
    ("EX", &["there"]),
    ("RP", &["up", "down", "out", "off"]),
    (
        "RB",
        &[
            "not", "n't", "never", "also", "very", "too", "just", "only", "even", "still",
            "already", "often", "always", "sometimes", "now", "then", "here", "again", "ago",
            "almost", "quite", "rather", "really", "perhaps", "maybe", "however", "soon",
            "later", "yet", "instead", "together", "thus", "therefore", "meanwhile", "away",
            "back", "forward", "so", "else", "ever", "once", "twice", "far", "indeed",
            "nevertheless", "otherwise", "abroad", "overseas", "anyway", "much",
        ],
    ),
    ("JJR", &["more", "less", "better", "worse", "fewer", "further", "greater", "higher", "lower", "larger", "smaller", "bigger"]),
    ("JJS", &["most", "least", "best", "worst", "greatest", "highest", "lowest", "largest", "smallest", "biggest"]),
    (
        "CD",
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand",
            "million", "billion", "trillion", "dozen", "dozens", "hundreds", "thousands",
            "millions", "billions",
        ],
    ),
    ("VBZ", &["is", "has", "does", "'s"]),
    ("VBP", &["are", "am", "have", "do", "'re", "'m", "'ve"]),
    ("VBD", &["was", "were", "had", "did"]),
    ("VB", &["be"]),
    ("VBN", &["been", "done"]),
    ("VBG", &["being", "having", "doing"]),
    ("NNS", &["people", "men", "women", "children", "police", "data", "media", "news"]),
    ("UH", &["yes", "oh", "hello", "please", "ok", "okay"]),
];

/// Irregular past tense (VBD) and past participle (VBN) forms.
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("say", "said", "said"),
    ("make", "made", "made"),
    ("go", "went", "gone"),
    ("take", "took", "taken"),
    ("come", "came", "come"),
    ("see", "saw", "seen"),
    ("know", "knew", "known"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("find", "found", "found"),
    ("think", "thought", "thought"),
    ("tell", "told", "told"),
    ("become", "became", "become"),
    ("show", "showed", "shown"),
    ("leave", "left", "left"),
    ("feel", "felt", "felt"),
    ("bring", "brought", "brought"),
    ("begin", "began", "begun"),
    ("keep", "kept", "kept"),
    ("hold", "held", "held"),
    ("write", "wrote", "written"),
    ("stand", "stood", "stood"),
    ("hear", "heard", "heard"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("run", "ran", "run"),
    ("pay", "paid", "paid"),
    ("sit", "sat", "sat"),
    ("speak", "spoke", "spoken"),
    ("lead", "led", "led"),
    ("grow", "grew", "grown"),
    ("lose", "lost", "lost"),
    ("fall", "fell", "fallen"),
    ("send", "sent", "sent"),
    ("build", "built", "built"),
    ("understand", "understood", "understood"),
    ("draw", "drew", "drawn"),
    ("break", "broke", "broken"),
    ("spend", "spent", "spent"),
    ("rise", "rose", "risen"),
    ("drive", "drove", "driven"),
    ("buy", "bought", "bought"),
    ("wear", "wore", "worn"),
    ("choose", "chose", "chosen"),
    ("seek", "sought", "sought"),
    ("throw", "threw", "thrown"),
    ("catch", "caught", "caught"),
    ("deal", "dealt", "dealt"),
    ("win", "won", "won"),
    ("fight", "fought", "fought"),
    ("sell", "sold", "sold"),
    ("fly", "flew", "flown"),
    ("eat", "ate", "eaten"),
    ("forget", "forgot", "forgotten"),
    ("strike", "struck", "struck"),
    ("steal", "stole", "stolen"),
    ("shake", "shook", "shaken"),
    ("freeze", "froze", "frozen"),
    ("hide", "hid", "hidden"),
    ("ride", "rode", "ridden"),
    ("bear", "bore", "born"),
    ("shoot", "shot", "shot"),
    ("teach", "taught", "taught"),
    ("sleep", "slept", "slept"),
    ("feed", "fed", "fed"),
    ("flee", "fled", "fled"),
    ("swim", "swam", "swum"),
    ("tear", "tore", "torn"),
    ("wake", "woke", "woken"),
    ("withdraw", "withdrew", "withdrawn"),
    ("undertake", "undertook", "undertaken"),
    ("overtake", "overtook", "overtaken"),
    ("sink", "sank", "sunk"),
    ("sing", "sang", "sung"),
    ("drink", "drank", "drunk"),
    ("forgive", "forgave", "forgiven"),
    ("light", "lit", "lit"),
];

/// Verbs whose past form equals the base form.
const INVARIANT_VERBS: &[&str] = &[
    "put", "set", "let", "cut", "hit", "hurt", "shut", "cost", "quit", "spread", "split",
    "bid", "beat", "cast", "bet", "upset",
];

/// Regular (and irregular) verb base forms.
const VERB_BASES: &[&str] = &[
    "accept", "add", "agree", "allow", "announce", "appear", "apply", "approve", "argue",
    "arrive", "ask", "attack", "avoid", "ban", "believe", "belong", "blame", "borrow", "call",
    "cancel", "care", "carry", "cause", "celebrate", "change", "charge", "check", "claim",
    "climb", "close", "collect", "compare", "complain", "complete", "confirm", "consider",
    "contain", "continue", "cook", "cover", "create", "cross", "cry", "damage", "decide",
    "decline", "deliver", "deny", "depend", "describe", "design", "destroy", "develop", "die",
    "disappear", "discover", "discuss", "drop", "earn", "end", "enjoy", "enter", "escape",
    "establish", "estimate", "examine", "expand", "expect", "explain", "express", "face",
    "fail", "finish", "fire", "fix", "focus", "follow", "force", "form", "fund", "gain",
    "grab", "guess", "happen", "hate", "help", "hire", "hope", "identify", "ignore",
    "imagine", "improve", "include", "increase", "indicate", "introduce", "invest",
    "investigate", "invite", "involve", "join", "jump", "kill", "launch", "learn", "like",
    "limit", "listen", "live", "look", "love", "manage", "mark", "matter", "mention", "miss",
    "move", "need", "note", "notice", "obtain", "offer", "open", "order", "own", "pass",
    "perform", "pick", "place", "plan", "play", "point", "prefer", "prepare", "present",
    "prevent", "produce", "promise", "protect", "prove", "provide", "publish", "pull", "push",
    "raise", "reach", "receive", "recognize", "record", "reduce", "refuse", "reject", "relate",
    "release", "rely", "remain", "remember", "remove", "repeat", "replace", "reply", "report",
    "represent", "require", "rescue", "respond", "rest", "return", "reveal", "rule", "save",
    "seem", "serve", "settle", "share", "shift", "shop", "sign", "slow", "smile", "solve",
    "start", "stay", "step", "stop", "study", "suffer", "suggest", "supply", "support",
    "suppose", "surge", "surprise", "survive", "talk", "target", "test", "thank", "touch",
    "track", "trade", "train", "travel", "treat", "try", "turn", "urge", "use", "vote",
    "wait", "walk", "want", "warn", "wash", "watch", "welcome", "wish", "wonder", "work",
    "worry", "climb", "soar", "plunge", "tumble", "slide", "jump", "rally", "recover",
    "struggle", "benefit", "impose", "lift", "ease", "boost", "hit", "acquire", "merge",
    "invest", "resign", "elect", "appoint", "arrest", "charge", "sue", "testify", "vow",
    "pledge", "criticize", "praise", "condemn", "threaten", "negotiate", "sanction",
    "predict", "forecast", "expect", "beat", "miss", "post", "file", "close", "open",
];

/// Words that are as often nouns as verbs; they default to a noun tag and
/// only become verbs in verb contexts.
const NOUN_VERBS: &[&str] = &[
    "answer", "attack", "ban", "call", "cause", "change", "charge", "claim", "cost", "cover",
    "cut", "damage", "deal", "decline", "drop", "end", "estimate", "face", "fall", "fire",
    "fund", "help", "hope", "increase", "launch", "limit", "look", "love", "mark", "need",
    "note", "offer", "order", "place", "plan", "play", "point", "present", "promise", "push",
    "raise", "record", "release", "report", "rest", "return", "rise", "rule", "run", "share",
    "shift", "shop", "sign", "start", "step", "stop", "study", "supply", "support", "surge",
    "surprise", "talk", "test", "trade", "travel", "turn", "use", "vote", "wait", "walk",
    "watch", "win", "wish", "work", "worry", "break", "rally", "benefit", "boost", "post",
    "file", "forecast", "target", "slide", "plunge",
];

const NOUNS: &[&str] = &[
    "time", "year", "way", "day", "man", "thing", "woman", "life", "child", "world", "school",
    "state", "family", "student", "group", "country", "problem", "hand", "part", "case",
    "week", "company", "system", "program", "question", "government", "number", "night",
    "home", "water", "room", "mother", "area", "money", "story", "fact", "month", "lot",
    "right", "book", "eye", "job", "word", "business", "issue", "side", "kind", "head",
    "house", "service", "friend", "father", "power", "hour", "game", "line", "member", "law",
    "car", "city", "community", "name", "president", "team", "minute", "idea", "kid", "body",
    "information", "parent", "office", "door", "health", "person", "art", "war", "history",
    "party", "result", "morning", "reason", "research", "girl", "guy", "moment", "air",
    "teacher", "education", "phone", "price", "market", "economy", "stock", "investor",
    "bank", "industry", "sector", "profit", "revenue", "growth", "rate", "inflation",
    "interest", "tax", "budget", "agreement", "election", "policy", "court", "judge",
    "officer", "official", "leader", "minister", "virus", "pandemic", "vaccine", "death",
    "hospital", "patient", "doctor", "percent", "quarter", "analyst", "sale", "product",
    "device", "technology", "software", "user", "customer", "employee", "worker", "crisis",
    "storm", "weather", "climate", "energy", "oil", "gas", "campaign", "today", "tonight",
    "yesterday", "tomorrow", "weekend", "decade", "century", "season", "earnings", "dollar",
    "currency", "debt", "loan", "mortgage", "housing", "property", "job", "unemployment",
    "wage", "salary", "strike", "union", "border", "trade", "tariff", "sanction", "troops",
    "army", "attack", "conflict", "peace", "deal", "talks", "summit", "vote", "poll",
    "voter", "candidate", "bill", "legislation", "regulation", "regulator", "lawsuit",
    "trial", "case", "suspect", "victim", "crime", "shooting", "fire", "flood", "earthquake",
    "disease", "infection", "outbreak", "variant", "dose", "mask", "lockdown", "restriction",
    "rule", "measure", "plan", "proposal", "decision", "statement", "interview", "spokesperson",
    "spokesman", "spokeswoman", "chief", "executive", "director", "chair", "board", "firm",
    "startup", "shareholder", "share", "value", "cost", "supply", "demand", "chain",
    "shortage", "factory", "plant", "store", "shop", "consumer", "household", "income",
    "spending", "report", "study", "survey", "data", "model", "platform", "app", "network",
    "internet", "chip", "computer", "screen", "battery", "vehicle", "train", "flight",
    "airline", "airport", "road", "bridge", "building", "site", "region", "province",
    "capital", "nation", "population", "citizen", "resident", "town", "village", "island",
    "coast", "river", "sea", "ocean", "forest", "land", "food", "farm", "farmer", "crop",
    "coronavirus", "covid", "omicron", "delta", "press", "release", "update", "news",
];

const ADJECTIVES: &[&str] = &[
    "new", "good", "high", "old", "great", "big", "small", "large", "little", "long", "short",
    "young", "important", "few", "bad", "same", "able", "last", "early", "late", "public",
    "private", "national", "international", "local", "economic", "political", "social",
    "federal", "global", "major", "strong", "weak", "full", "free", "real", "hard", "easy",
    "low", "whole", "clear", "sure", "true", "false", "certain", "recent", "current",
    "former", "final", "main", "top", "open", "possible", "available", "likely", "special",
    "difficult", "different", "similar", "significant", "serious", "human", "military",
    "financial", "foreign", "general", "common", "poor", "rich", "safe", "dead", "black",
    "white", "red", "green", "blue", "first", "second", "third", "next", "previous",
    "several", "many", "other", "own", "such", "key", "senior", "junior", "chief", "annual",
    "daily", "weekly", "monthly", "quarterly", "domestic", "corporate", "digital", "online",
    "critical", "urgent", "huge", "massive", "tiny", "fresh", "sharp", "steady", "stable",
    "volatile", "positive", "negative", "healthy", "sick", "happy", "sad", "angry", "afraid",
    "excellent", "terrible", "awful", "wonderful", "amazing", "beautiful", "ugly", "nice",
    "fine", "wrong", "right", "best", "worst", "better", "worse", "fair", "unfair", "cheap",
    "expensive", "fast", "slow", "quick", "hot", "cold", "warm", "cool", "dry", "wet",
];

/// Endings that mark a word as a given tag when nothing else matched.
/// Checked in order; the first hit wins.
pub const SUFFIX_TAGS: &[(&str, &str)] = &[
    ("ness", "NN"),
    ("ment", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ship", "NN"),
    ("ity", "NN"),
    ("ism", "NN"),
    ("ance", "NN"),
    ("ence", "NN"),
    ("hood", "NN"),
    ("ist", "NN"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ive", "JJ"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("less", "JJ"),
    ("ical", "JJ"),
    ("ial", "JJ"),
    ("al", "JJ"),
    ("ic", "JJ"),
    ("ish", "JJ"),
    ("ary", "JJ"),
    ("ly", "RB"),
    ("ize", "VB"),
    ("ise", "VB"),
    ("ify", "VB"),
    ("ing", "VBG"),
    ("ed", "VBD"),
    ("er", "NN"),
    ("or", "NN"),
];

static CLOSED_CLASS_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (tag, words) in CLOSED_CLASS {
        for word in *words {
            map.insert(*word, *tag);
        }
    }
    map
});

static IRREGULAR_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (base, past, participle) in IRREGULAR_VERBS {
        map.insert(*participle, "VBN");
        // `come`, `run`: the base reading wins over the participle
        map.insert(*base, "VB");
        // a shared past/participle form is read as past; context may flip it
        map.insert(*past, "VBD");
    }
    map
});

static VERB_BASE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    VERB_BASES
        .iter()
        .chain(INVARIANT_VERBS)
        .chain(IRREGULAR_VERBS.iter().map(|(base, _, _)| base))
        .copied()
        .collect()
});

static INVARIANT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INVARIANT_VERBS.iter().copied().collect());
static NOUN_VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NOUN_VERBS.iter().copied().collect());
static NOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NOUNS.iter().copied().collect());
static ADJECTIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ADJECTIVES.iter().copied().collect());

pub fn closed_class(word: &str) -> Option<&'static str> {
    CLOSED_CLASS_MAP.get(word).copied()
}

/// Tag for an irregular verb form (`went` -> VBD, `gone` -> VBN).
pub fn irregular_verb(word: &str) -> Option<&'static str> {
    IRREGULAR_MAP.get(word).copied()
}

pub fn is_verb_base(word: &str) -> bool {
    VERB_BASE_SET.contains(word)
}

pub fn is_invariant_verb(word: &str) -> bool {
    INVARIANT_SET.contains(word)
}

pub fn is_noun_verb(word: &str) -> bool {
    NOUN_VERB_SET.contains(word)
}

pub fn is_noun(word: &str) -> bool {
    NOUN_SET.contains(word)
}

pub fn is_adjective(word: &str) -> bool {
    ADJECTIVE_SET.contains(word)
}

/// Recover a known verb base from an inflected form with the given suffix
/// (`-s`, `-ed`, `-ing`), undoing e-drop, y->i and consonant doubling.
pub fn verb_base_of(word: &str, suffix: &str) -> Option<String> {
    let stem = word.strip_suffix(suffix)?;
    if stem.len() < 2 {
        return None;
    }
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    if let Some(s) = stem.strip_suffix('i') {
        candidates.push(format!("{s}y"));
    }
    if suffix == "s" {
        if let Some(s) = stem.strip_suffix('e') {
            candidates.push(s.to_string());
        }
    }
    if let Some(s) = undouble(stem) {
        candidates.push(s.to_string());
    }
    candidates.into_iter().find(|c| is_verb_base(c))
}

/// `stem` without its final letter when that letter is doubled
/// (`stopp` -> `stop`, `bigg` -> `big`). Stems shorter than three
/// characters are left alone.
pub fn undouble(stem: &str) -> Option<&str> {
    let mut rev = stem.char_indices().rev();
    let (cut, last) = rev.next()?;
    let (_, before) = rev.next()?;
    rev.next()?;
    (last == before).then(|| &stem[..cut])
}

/// Singular of a regular plural when the singular is a known noun.
pub fn noun_singular_of(word: &str) -> Option<String> {
    let candidates = [
        word.strip_suffix("ies").map(|s| format!("{s}y")),
        word.strip_suffix("es").map(str::to_string),
        word.strip_suffix('s').map(str::to_string),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|c| is_noun(c) || is_noun_verb(c))
}

// ---------------------------------------------------------------------------
// Named-entity gazetteer
// ---------------------------------------------------------------------------

const GAZETTEER: &[(EntityLabel, &[&str])] = &[
    (
        EntityLabel::Org,
        &[
            "Apple", "Google", "Alphabet", "Microsoft", "Amazon", "Meta", "Facebook", "Tesla",
            "Netflix", "Twitter", "IBM", "Intel", "Nvidia", "Samsung", "Sony", "Toyota", "Ford",
            "Boeing", "Airbus", "Walmart", "Pfizer", "Moderna", "AstraZeneca", "Reuters",
            "Bloomberg", "NASA", "NATO", "WHO", "EU", "UN", "FBI", "CIA", "IMF", "OPEC",
            "Congress", "Senate", "Parliament", "Shopify", "BlackBerry", "Rogers", "Bell",
            "Telus", "RBC", "TD", "CIBC", "BMO", "Scotiabank", "CBC", "BBC", "CNN", "Uber",
            "OpenAI", "Disney", "Goldman Sachs", "JPMorgan", "Morgan Stanley", "Federal Reserve",
            "Bank of Canada", "Bank of England", "European Central Bank", "World Bank",
            "World Health Organization", "European Union", "United Nations", "Supreme Court",
            "White House", "Pentagon", "Kremlin", "New York Times", "Wall Street Journal",
            "Associated Press", "Statistics Canada", "Health Canada", "TSX", "Nasdaq",
        ],
    ),
    (
        EntityLabel::Gpe,
        &[
            "Canada", "United States", "U.S.", "US", "USA", "America", "China", "Japan",
            "India", "Russia", "Ukraine", "Germany", "France", "Britain", "U.K.", "UK",
            "England", "Scotland", "Ireland", "Italy", "Spain", "Mexico", "Brazil",
            "Australia", "Israel", "Iran", "Iraq", "Syria", "Egypt", "South Africa", "Nigeria",
            "Kenya", "Turkey", "Saudi Arabia", "North Korea", "South Korea", "Korea", "Taiwan",
            "Hong Kong", "Singapore", "Pakistan", "Afghanistan", "Venezuela", "Argentina",
            "Poland", "Sweden", "Norway", "Netherlands", "Belgium", "Switzerland", "Austria",
            "Greece", "Portugal", "Toronto", "Montreal", "Vancouver", "Ottawa", "Calgary",
            "Edmonton", "Winnipeg", "Halifax", "Quebec", "Ontario", "Alberta", "Manitoba",
            "Saskatchewan", "British Columbia", "Nova Scotia", "New York", "Washington",
            "London", "Paris", "Berlin", "Beijing", "Tokyo", "Moscow", "Kyiv", "Kiev",
            "Los Angeles", "San Francisco", "Chicago", "Boston", "Seattle", "Texas",
            "California", "Florida", "Brussels", "Geneva", "Rome", "Madrid", "Sydney", "Delhi",
            "New Delhi", "Mumbai", "Shanghai", "Dubai", "Jerusalem", "Gaza", "Wuhan",
        ],
    ),
    (
        EntityLabel::Norp,
        &[
            "Canadian", "Canadians", "American", "Americans", "Chinese", "Japanese", "Indian",
            "Russian", "Russians", "Ukrainian", "Ukrainians", "German", "French", "British",
            "Israeli", "Palestinian", "Palestinians", "Iranian", "European", "Europeans",
            "African", "Asian", "Muslim", "Muslims", "Christian", "Christians", "Jewish",
            "Democrat", "Democrats", "Republican", "Republicans", "Liberal", "Liberals",
            "Conservative", "Conservatives",
        ],
    ),
    (
        EntityLabel::Loc,
        &[
            "Europe", "Asia", "Africa", "North America", "South America", "Middle East",
            "Arctic", "Antarctica", "Atlantic", "Pacific", "Wall Street", "Silicon Valley",
            "Latin America",
        ],
    ),
];

static GAZETTEER_MAP: Lazy<HashMap<&'static str, EntityLabel>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (label, names) in GAZETTEER {
        for name in *names {
            map.insert(*name, *label);
        }
    }
    map
});

/// Label of a known entity name (exact, case-sensitive).
pub fn gazetteer(name: &str) -> Option<EntityLabel> {
    GAZETTEER_MAP.get(name).copied()
}

/// Longest gazetteer entry, in words.
pub const GAZETTEER_MAX_WORDS: usize = 4;

/// Closing words of organisation names.
const ORG_SUFFIXES: &[&str] = &[
    "Inc", "Inc.", "Corp", "Corp.", "Corporation", "Co", "Co.", "Company", "Ltd", "Ltd.",
    "LLC", "PLC", "Plc", "Group", "Holdings", "Bank", "University", "College", "Institute",
    "Association", "Agency", "Ministry", "Department", "Party", "Council", "Committee",
    "Commission", "Court", "Bureau", "Foundation", "Federation", "Union", "Organization",
    "Organisation", "League", "Society", "Board", "Authority", "Airlines", "Motors",
    "Technologies", "Systems", "Capital", "Partners", "Services", "Media", "News",
];

/// Head words that make a connector-joined name an organisation
/// (`University of Toronto`, `Bank of Montreal`).
const ORG_HEADS: &[&str] = &[
    "University", "Bank", "Department", "Ministry", "Institute", "Museum", "Council", "Board",
    "Association", "Society", "Agency", "Committee", "Commission", "Court", "Bureau",
    "Office", "College", "School", "Federation", "Union", "Organization", "League", "Party",
    "Church", "House", "Chamber",
];

/// Words that introduce a person's name without being part of it.
const PERSON_TITLES: &[&str] = &[
    "Mr", "Mr.", "Mrs", "Mrs.", "Ms", "Ms.", "Dr", "Dr.", "Prof", "Prof.", "Sir", "Dame",
    "President", "Prime", "Minister", "Premier", "Senator", "Sen.", "Rep.", "Governor",
    "Gov.", "Mayor", "Chancellor", "King", "Queen", "Prince", "Princess", "Pope", "Judge",
    "Justice", "General", "Gen.", "Chief", "CEO", "Secretary", "Chairman", "Chairwoman",
    "Officer", "Detective", "Coach", "Vice", "Deputy", "Leader", "Ambassador",
];

const FIRST_NAMES: &[&str] = &[
    "Justin", "Joe", "Donald", "Barack", "Hillary", "Kamala", "Elon", "Jeff", "Bill", "Tim",
    "Mark", "Sundar", "Satya", "Jerome", "Janet", "Chrystia", "Pierre", "Jagmeet", "Doug",
    "Jason", "John", "James", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara",
    "Susan", "Jessica", "Sarah", "Karen", "Emmanuel", "Angela", "Olaf", "Boris", "Rishi",
    "Vladimir", "Volodymyr", "Xi", "Narendra", "Anthony", "Tedros", "Theresa", "Jacinda",
    "Steve", "Paul", "Peter", "Andrew", "Daniel", "Matthew", "Anna", "Maria", "Laura",
    "Emily", "Emma", "Olivia", "Sophie", "Catherine", "Christine", "Ursula", "Nancy",
];

const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.",
    "Aug.", "Sept.", "Sep.", "Oct.", "Nov.", "Dec.",
];

const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// Lowercase words that are dates on their own.
const RELATIVE_DAYS: &[&str] = &["today", "yesterday", "tomorrow"];

/// Lowercase words that make a following period word a date
/// (`last week`, `this year`).
const PERIOD_DETERMINERS: &[&str] = &["this", "last", "next", "past", "coming"];
const PERIOD_WORDS: &[&str] = &["week", "month", "year", "weekend", "quarter", "decade", "season"];

const SCALE_WORDS: &[&str] = &["hundred", "thousand", "million", "billion", "trillion"];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth",
];

pub fn is_org_suffix(word: &str) -> bool {
    ORG_SUFFIXES.contains(&word)
}

pub fn is_org_head(word: &str) -> bool {
    ORG_HEADS.contains(&word)
}

pub fn is_person_title(word: &str) -> bool {
    PERSON_TITLES.contains(&word)
}

pub fn is_first_name(word: &str) -> bool {
    FIRST_NAMES.contains(&word)
}

pub fn is_month(word: &str) -> bool {
    MONTHS.contains(&word)
}

pub fn is_weekday(word: &str) -> bool {
    WEEKDAYS.contains(&word)
}

pub fn is_relative_day(lower: &str) -> bool {
    RELATIVE_DAYS.contains(&lower)
}

pub fn is_period_determiner(lower: &str) -> bool {
    PERIOD_DETERMINERS.contains(&lower)
}

pub fn is_period_word(lower: &str) -> bool {
    PERIOD_WORDS.contains(&lower)
}

pub fn is_scale_word(lower: &str) -> bool {
    SCALE_WORDS.contains(&lower)
}

pub fn is_ordinal_word(lower: &str) -> bool {
    ORDINAL_WORDS.contains(&lower)
}

/// Abbreviations whose trailing period belongs to the word.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "inc", "corp", "co", "ltd", "vs",
    "etc", "gen", "sen", "rep", "gov", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "no", "approx", "dept", "est", "mt", "ft",
];

pub fn is_abbreviation(lower: &str) -> bool {
    ABBREVIATIONS.contains(&lower)
}

// ---------------------------------------------------------------------------
// Sentiment lexicon
// ---------------------------------------------------------------------------

/// Word -> (polarity, subjectivity).
const SENTIMENT: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("love", 0.5, 0.6),
    ("beautiful", 0.85, 1.0),
    ("strong", 0.43, 0.73),
    ("positive", 0.23, 0.55),
    ("success", 0.3, 0.3),
    ("successful", 0.75, 0.95),
    ("win", 0.8, 0.4),
    ("gain", 0.2, 0.3),
    ("gains", 0.2, 0.3),
    ("growth", 0.2, 0.2),
    ("improve", 0.3, 0.4),
    ("improved", 0.3, 0.4),
    ("recovery", 0.2, 0.3),
    ("rally", 0.3, 0.4),
    ("surge", 0.2, 0.4),
    ("boost", 0.3, 0.4),
    ("record", 0.1, 0.2),
    ("optimistic", 0.5, 0.7),
    ("confident", 0.5, 0.8),
    ("safe", 0.5, 0.5),
    ("secure", 0.4, 0.6),
    ("stable", 0.2, 0.4),
    ("healthy", 0.5, 0.5),
    ("fair", 0.7, 0.9),
    ("easy", 0.43, 0.83),
    ("free", 0.4, 0.8),
    ("important", 0.4, 1.0),
    ("interesting", 0.5, 0.5),
    ("popular", 0.6, 0.8),
    ("new", 0.136, 0.454),
    ("fresh", 0.3, 0.5),
    ("clear", 0.1, 0.38),
    ("top", 0.5, 0.5),
    ("rich", 0.375, 0.625),
    ("helpful", 0.5, 0.5),
    ("welcome", 0.8, 0.9),
    ("hope", 0.3, 0.6),
    ("support", 0.2, 0.3),
    ("agree", 0.3, 0.4),
    ("benefit", 0.3, 0.3),
    ("profit", 0.2, 0.3),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("weak", -0.375, 0.625),
    ("negative", -0.3, 0.4),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("fear", -0.5, 0.7),
    ("fears", -0.5, 0.7),
    ("worry", -0.4, 0.7),
    ("worried", -0.4, 0.8),
    ("concern", -0.2, 0.5),
    ("concerns", -0.2, 0.5),
    ("crisis", -0.5, 0.5),
    ("collapse", -0.6, 0.5),
    ("crash", -0.6, 0.5),
    ("decline", -0.3, 0.3),
    ("drop", -0.2, 0.3),
    ("fall", -0.2, 0.3),
    ("loss", -0.4, 0.4),
    ("losses", -0.4, 0.4),
    ("lose", -0.4, 0.4),
    ("fail", -0.5, 0.5),
    ("failed", -0.5, 0.5),
    ("failure", -0.5, 0.5),
    ("risk", -0.2, 0.4),
    ("risky", -0.4, 0.7),
    ("threat", -0.4, 0.5),
    ("dangerous", -0.6, 0.9),
    ("deadly", -0.6, 0.7),
    ("dead", -0.2, 0.4),
    ("death", -0.4, 0.4),
    ("deaths", -0.4, 0.4),
    ("kill", -0.5, 0.5),
    ("killed", -0.5, 0.5),
    ("attack", -0.5, 0.5),
    ("war", -0.5, 0.5),
    ("violence", -0.6, 0.6),
    ("scandal", -0.6, 0.7),
    ("fraud", -0.7, 0.7),
    ("corrupt", -0.8, 0.9),
    ("illegal", -0.5, 0.5),
    ("wrong", -0.5, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("serious", -0.33, 0.67),
    ("severe", -0.5, 0.7),
    ("critical", -0.1, 0.6),
    ("shortage", -0.3, 0.4),
    ("expensive", -0.5, 0.7),
    ("sick", -0.71, 0.86),
    ("ill", -0.5, 0.6),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("unfair", -0.5, 0.9),
    ("ugly", -0.7, 1.0),
    ("volatile", -0.2, 0.6),
    ("uncertain", -0.2, 0.6),
    ("uncertainty", -0.2, 0.5),
    ("slump", -0.4, 0.4),
    ("plunge", -0.4, 0.4),
    ("tumble", -0.3, 0.4),
    ("recession", -0.5, 0.4),
    ("inflation", -0.1, 0.3),
    ("layoffs", -0.4, 0.4),
    ("lawsuit", -0.2, 0.3),
    ("outbreak", -0.3, 0.3),
    ("pandemic", -0.2, 0.3),
    ("criticize", -0.4, 0.6),
    ("criticized", -0.4, 0.6),
    ("condemn", -0.6, 0.7),
    ("condemned", -0.6, 0.7),
    ("reject", -0.3, 0.4),
    ("rejected", -0.3, 0.4),
    ("warn", -0.2, 0.4),
    ("warned", -0.2, 0.4),
    ("warning", -0.2, 0.4),
];

/// Word -> multiplier applied to the next sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("most", 1.4),
    ("more", 1.2),
    ("deeply", 1.4),
    ("slightly", 0.5),
    ("somewhat", 0.6),
    ("barely", 0.4),
    ("fairly", 0.8),
];

const NEGATIONS: &[&str] = &["not", "n't", "never", "no", "without", "nor", "cannot"];

static SENTIMENT_MAP: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    SENTIMENT
        .iter()
        .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
        .collect()
});

static INTENSIFIER_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIERS.iter().copied().collect());

pub fn sentiment(lower: &str) -> Option<(f64, f64)> {
    SENTIMENT_MAP.get(lower).copied()
}

pub fn intensity(lower: &str) -> Option<f64> {
    INTENSIFIER_MAP.get(lower).copied()
}

pub fn is_negation(lower: &str) -> bool {
    NEGATIONS.contains(&lower)
}
