use super::types::{DiffEntry, NO_CHANGES_SENTINEL};
use crate::constant::DIFF_CONTEXT_LINES;

/// Collapse a full diff entry sequence into context-padded display hunks.
///
/// Runs of changes whose gap fits inside a shared context window merge into a
/// single hunk; each hunk is padded with up to [`DIFF_CONTEXT_LINES`] context
/// entries per side (clamped to the sequence bounds), and hunks are separated
/// by an [`DiffEntry::Elision`] marker. Identical documents collapse to the
/// single sentinel context entry.
pub fn group(entries: Vec<DiffEntry>) -> Vec<DiffEntry> {
    let change_indices: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_change())
        .map(|(idx, _)| idx)
        .collect();

    if change_indices.is_empty() {
        return vec![DiffEntry::Context {
            content: NO_CHANGES_SENTINEL.to_string(),
            line_number: 0,
        }];
    }

    // Two changes belong to the same hunk when their surrounding context
    // windows would touch or overlap.
    let merge_gap = DIFF_CONTEXT_LINES * 2 + 1;
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut start = change_indices[0];
    let mut end = change_indices[0];
    for &idx in &change_indices[1..] {
        if idx - end <= merge_gap {
            end = idx;
        } else {
            ranges.push((start, end));
            start = idx;
            end = idx;
        }
    }
    ranges.push((start, end));

    let mut display = Vec::new();
    for (n, &(start, end)) in ranges.iter().enumerate() {
        if n > 0 {
            display.push(DiffEntry::Elision);
        }
        let from = start.saturating_sub(DIFF_CONTEXT_LINES);
        let to = (end + DIFF_CONTEXT_LINES).min(entries.len() - 1);
        display.extend(entries[from..=to].iter().cloned());
    }

    display
}
