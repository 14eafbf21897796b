use serde::{Deserialize, Serialize};

/// Content of the single context entry returned when both documents
/// normalize to the same line sequence. Its line number is 0.
pub const NO_CHANGES_SENTINEL: &str = "No changes detected";

/// One display entry of a computed diff preview.
///
/// Line numbers are 1-based positions in the normalized original document;
/// added lines only exist in the proposed document and carry none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// Line present identically in both documents
    Context { content: String, line_number: usize },
    Removed { content: String, line_number: usize },
    Added { content: String },
    /// Gap between hunks
    Elision,
}

impl DiffEntry {
    pub fn is_change(&self) -> bool {
        matches!(self, DiffEntry::Removed { .. } | DiffEntry::Added { .. })
    }
}

/// A contiguous run of a line's text, marked changed or unchanged.
/// Concatenating a side's spans reproduces that side's line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDiffSpan {
    pub text: String,
    pub changed: bool,
}

/// A removed line and the added line immediately following it, rendered
/// together with character-level highlighting. Rendering-only; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedChange {
    pub removed_line_number: usize,
    pub removed_spans: Vec<SubDiffSpan>,
    pub added_spans: Vec<SubDiffSpan>,
}

/// Render-ready row derived from the display entry sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffRow {
    Context { content: String, line_number: usize },
    Removed { content: String, line_number: usize },
    Added { content: String },
    Paired(PairedChange),
    Elision,
}
