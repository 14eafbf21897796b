use super::types::{DiffEntry, DiffRow, PairedChange, SubDiffSpan};

/// Group display entries into render rows, pairing each removed line with the
/// added line immediately following it so the two render side by side with
/// character-level highlighting. Everything else passes through unchanged.
pub fn pair_rows(entries: &[DiffEntry]) -> Vec<DiffRow> {
    let mut rows = Vec::new();
    let mut i = 0usize;

    while i < entries.len() {
        match &entries[i] {
            DiffEntry::Context {
                content,
                line_number,
            } => {
                rows.push(DiffRow::Context {
                    content: content.clone(),
                    line_number: *line_number,
                });
                i += 1;
            }
            DiffEntry::Removed {
                content,
                line_number,
            } => {
                if let Some(DiffEntry::Added { content: added }) = entries.get(i + 1) {
                    let (removed_spans, added_spans) = sub_diff(content, added);
                    rows.push(DiffRow::Paired(PairedChange {
                        removed_line_number: *line_number,
                        removed_spans,
                        added_spans,
                    }));
                    i += 2;
                } else {
                    rows.push(DiffRow::Removed {
                        content: content.clone(),
                        line_number: *line_number,
                    });
                    i += 1;
                }
            }
            DiffEntry::Added { content } => {
                rows.push(DiffRow::Added {
                    content: content.clone(),
                });
                i += 1;
            }
            DiffEntry::Elision => {
                rows.push(DiffRow::Elision);
                i += 1;
            }
        }
    }

    rows
}

/// Character-level sub-diff of a paired line via common-prefix/common-suffix
/// extraction. Returns the span lists for the old and new side; concatenating
/// either side's span texts reproduces that side's line exactly.
pub fn sub_diff(old: &str, new: &str) -> (Vec<SubDiffSpan>, Vec<SubDiffSpan>) {
    if old == new {
        return (
            vec![unchanged_span(old)],
            vec![unchanged_span(new)],
        );
    }

    let old_chars: Vec<char> = old.chars().collect();
    let new_chars: Vec<char> = new.chars().collect();

    let min_len = old_chars.len().min(new_chars.len());
    let mut prefix = 0usize;
    while prefix < min_len && old_chars[prefix] == new_chars[prefix] {
        prefix += 1;
    }

    // The suffix may not consume characters already claimed by the prefix
    let max_suffix = (old_chars.len() - prefix).min(new_chars.len() - prefix);
    let mut suffix = 0usize;
    while suffix < max_suffix
        && old_chars[old_chars.len() - 1 - suffix] == new_chars[new_chars.len() - 1 - suffix]
    {
        suffix += 1;
    }

    (
        side_spans(&old_chars, prefix, suffix),
        side_spans(&new_chars, prefix, suffix),
    )
}

fn unchanged_span(text: &str) -> SubDiffSpan {
    SubDiffSpan {
        text: text.to_string(),
        changed: false,
    }
}

/// Build [prefix, middle, suffix] spans for one side, omitting empty spans
fn side_spans(chars: &[char], prefix: usize, suffix: usize) -> Vec<SubDiffSpan> {
    let mut spans = Vec::new();

    if prefix > 0 {
        spans.push(SubDiffSpan {
            text: chars[..prefix].iter().collect(),
            changed: false,
        });
    }

    let middle: String = chars[prefix..chars.len() - suffix].iter().collect();
    if !middle.is_empty() {
        spans.push(SubDiffSpan {
            text: middle,
            changed: true,
        });
    }

    if suffix > 0 {
        spans.push(SubDiffSpan {
            text: chars[chars.len() - suffix..].iter().collect(),
            changed: false,
        });
    }

    spans
}
