//! Line-based diff and patch preview engine.
//!
//! [`DiffPreview::compute`] normalizes the two document bodies into
//! comparison lines, aligns them with a greedy first-available matcher,
//! groups the result into context-padded hunks, and reports added/removed
//! line counts taken from the full pre-hunk sequence. [`DiffPreview::rows`]
//! pairs adjacent removed/added lines for side-by-side rendering with
//! character-level span highlighting. The whole pipeline is pure and total
//! over string inputs.

mod cache;
mod hunks;
mod matcher;
mod normalize;
mod pairing;
mod types;

pub use cache::PreviewCache;
pub use pairing::sub_diff;
pub use types::{DiffEntry, DiffRow, NO_CHANGES_SENTINEL, PairedChange, SubDiffSpan};

use serde::{Deserialize, Serialize};

/// A computed, render-ready diff between an original and a proposed document
/// body. Derived state only; recomputed from scratch for every input pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPreview {
    /// Hunked display sequence, interleaved with elision markers
    pub entries: Vec<DiffEntry>,
    /// Added lines in the full diff, independent of hunk-context clamping
    pub added_count: usize,
    /// Removed lines in the full diff, independent of hunk-context clamping
    pub removed_count: usize,
}

impl DiffPreview {
    pub fn compute(original: &str, proposed: &str) -> Self {
        let original_lines = normalize::normalize_lines(original);
        let proposed_lines = normalize::normalize_lines(proposed);

        let alignment = matcher::align(&original_lines, &proposed_lines);
        let full = matcher::entries(&alignment, &original_lines, &proposed_lines);

        // Counts come from the un-hunked sequence so context trimming never
        // hides a change from the summary.
        let added_count = full
            .iter()
            .filter(|e| matches!(e, DiffEntry::Added { .. }))
            .count();
        let removed_count = full
            .iter()
            .filter(|e| matches!(e, DiffEntry::Removed { .. }))
            .count();

        Self {
            entries: hunks::group(full),
            added_count,
            removed_count,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.added_count + self.removed_count > 0
    }

    /// Render rows with removed/added pairs joined for side-by-side display
    pub fn rows(&self) -> Vec<DiffRow> {
        pairing::pair_rows(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_yield_the_sentinel_entry() {
        let preview = DiffPreview::compute("<p>A</p><p>B</p>", "<p>A</p><p>B</p>");
        assert_eq!(
            preview.entries,
            vec![DiffEntry::Context {
                content: NO_CHANGES_SENTINEL.to_string(),
                line_number: 0,
            }]
        );
        assert!(!preview.has_changes());
        assert_eq!(preview.added_count, 0);
        assert_eq!(preview.removed_count, 0);
    }

    #[test]
    fn single_line_replacement() {
        let preview = DiffPreview::compute("<p>A</p><p>B</p>", "<p>A</p><p>C</p>");
        assert_eq!(
            preview.entries,
            vec![
                DiffEntry::Context {
                    content: "<p>A</p>".to_string(),
                    line_number: 1,
                },
                DiffEntry::Removed {
                    content: "<p>B</p>".to_string(),
                    line_number: 2,
                },
                DiffEntry::Added {
                    content: "<p>C</p>".to_string(),
                },
            ]
        );
        assert_eq!(preview.added_count, 1);
        assert_eq!(preview.removed_count, 1);

        // The replacement renders as one paired row with the tag shell
        // unchanged and only the letter highlighted
        let rows = preview.rows();
        match &rows[1] {
            DiffRow::Paired(pair) => {
                let changed: Vec<&str> = pair
                    .removed_spans
                    .iter()
                    .chain(&pair.added_spans)
                    .filter(|s| s.changed)
                    .map(|s| s.text.as_str())
                    .collect();
                assert_eq!(changed, vec!["B", "C"]);
            }
            other => panic!("expected paired row, got {:?}", other),
        }
    }

    #[test]
    fn counts_survive_hunk_clamping() {
        // Two edits far enough apart to form separate hunks, with long
        // unchanged stretches that the display elides
        let original: String = (0..40).map(|i| format!("<p>line {}</p>", i)).collect();
        let proposed: String = (0..40)
            .map(|i| {
                if i == 5 || i == 30 {
                    format!("<p>edited {}</p>", i)
                } else {
                    format!("<p>line {}</p>", i)
                }
            })
            .collect();

        let preview = DiffPreview::compute(&original, &proposed);
        assert_eq!(preview.added_count, 2);
        assert_eq!(preview.removed_count, 2);

        // Three hunks: one per removal, plus the trailing additions (the
        // greedy matcher sorts every addition past the original entries)
        let elisions = preview
            .entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Elision))
            .count();
        assert_eq!(elisions, 2);

        // Elided display still carries every change entry
        let shown_changes = preview.entries.iter().filter(|e| e.is_change()).count();
        assert_eq!(shown_changes, 4);
        assert!(preview.entries.len() < 40, "uninvolved regions are elided");
    }

    #[test]
    fn whitespace_only_differences_are_not_changes() {
        let preview = DiffPreview::compute("<p>A</p>\n  <p>B</p>", "<p>A</p><p>B</p>\n");
        assert!(!preview.has_changes());
    }

    #[test]
    fn empty_original_reports_every_line_added() {
        let preview = DiffPreview::compute("", "<p>A</p><p>B</p>");
        assert_eq!(preview.added_count, 2);
        assert_eq!(preview.removed_count, 0);
    }
}
