use super::types::DiffEntry;

/// How one line of either document was classified by the matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Original line `orig` matched proposed line `new` exactly
    Match { orig: usize, new: usize },
    Removed { orig: usize },
    Added { new: usize },
}

/// Greedy first-available line alignment.
///
/// Each original line, in order, claims the first unmatched proposed line
/// with identical text; unclaimed original lines are removals and unclaimed
/// proposed lines are additions. This is intentionally NOT a minimal
/// edit-distance diff: duplicated or reordered lines can misalign, and hunk
/// boundaries downstream depend on exactly this behavior, so do not swap in
/// an LCS-based matcher.
pub fn align(original: &[String], proposed: &[String]) -> Vec<Alignment> {
    let mut matched = vec![false; proposed.len()];
    let mut alignment = Vec::with_capacity(original.len() + proposed.len());

    for (i, line) in original.iter().enumerate() {
        let hit = proposed
            .iter()
            .enumerate()
            .find(|&(j, candidate)| !matched[j] && candidate == line);

        match hit {
            Some((j, _)) => {
                matched[j] = true;
                alignment.push(Alignment::Match { orig: i, new: j });
            }
            None => alignment.push(Alignment::Removed { orig: i }),
        }
    }

    for (j, taken) in matched.iter().enumerate() {
        if !taken {
            alignment.push(Alignment::Added { new: j });
        }
    }

    // Interleave by original position; additions sort by a synthetic key past
    // the end of the original so they land after the removals they follow.
    // The sort is stable, so additions keep their proposed-document order.
    let original_len = original.len();
    alignment.sort_by_key(|entry| match *entry {
        Alignment::Match { orig, .. } | Alignment::Removed { orig } => orig,
        Alignment::Added { new } => original_len + new,
    });

    alignment
}

/// Materialize display entries from an alignment over the normalized lines
pub fn entries(
    alignment: &[Alignment],
    original: &[String],
    proposed: &[String],
) -> Vec<DiffEntry> {
    alignment
        .iter()
        .map(|entry| match *entry {
            Alignment::Match { orig, .. } => DiffEntry::Context {
                content: original[orig].clone(),
                line_number: orig + 1,
            },
            Alignment::Removed { orig } => DiffEntry::Removed {
                content: original[orig].clone(),
                line_number: orig + 1,
            },
            Alignment::Added { new } => DiffEntry::Added {
                content: proposed[new].clone(),
            },
        })
        .collect()
}
