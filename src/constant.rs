/// Application name used for the configuration file location
pub const APP_NAME: &str = "Redline";

/// Unchanged lines of context shown on each side of a diff hunk
pub const DIFF_CONTEXT_LINES: usize = 3;

/// Artificial latency for simulated assistant replies, in milliseconds
pub const AI_RESPONSE_DELAY_MS: u64 = 800;

/// App related Magic Numbers
pub const MAX_RECENT_DOCUMENTS: usize = 10;
