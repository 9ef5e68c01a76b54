// Single source of truth for all default values.

// --- Discovery ---
pub const DEFAULT_MAX_CANDIDATES: usize = 20;
pub const DEFAULT_INDEX_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_PARALLEL_SCORING_MIN_BATCH: usize = 8;

// --- Keywords ---
pub const DEFAULT_MIN_KEYWORD_CHARS: usize = 4;
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

// --- Consensus ---
pub const DEFAULT_AUTO_MERGE: f64 = 0.8;
pub const DEFAULT_ASK_USER: f64 = 0.6;
pub const DEFAULT_AUTO_SEPARATE: f64 = 0.4;

// --- Insights ---
pub const DEFAULT_INSIGHTS_WINDOW: usize = 100;
pub const DEFAULT_NUDGE_STEP: f64 = 0.05;
pub const DEFAULT_ERROR_TOLERANCE: f64 = 0.2;
pub const DEFAULT_MIN_SAMPLES: usize = 5;
pub const DEFAULT_MIN_THRESHOLD_GAP: f64 = 0.05;

// --- Learned re-validation ---
pub const DEFAULT_LEARN_MIN_VOTES: i64 = 5;
pub const DEFAULT_LEARN_STEP: f64 = 0.1;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
