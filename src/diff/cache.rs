use super::DiffPreview;
use xxhash_rust::xxh64::xxh64;

/// Memo of the most recently computed preview, keyed by xxh64 hashes of the
/// two input bodies. The pipeline recomputes from scratch on every input
/// change; this only spares a caller re-running it on every re-render of the
/// same (original, proposed) pair.
#[derive(Debug, Default)]
pub struct PreviewCache {
    last: Option<((u64, u64), DiffPreview)>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a preview for exactly this input pair is already cached
    pub fn contains(&self, original: &str, proposed: &str) -> bool {
        match &self.last {
            Some((key, _)) => *key == Self::key(original, proposed),
            None => false,
        }
    }

    /// Return the cached preview for this input pair, computing it on a miss
    pub fn get_or_compute(&mut self, original: &str, proposed: &str) -> &DiffPreview {
        let key = Self::key(original, proposed);
        let slot = self
            .last
            .get_or_insert_with(|| (key, DiffPreview::compute(original, proposed)));
        if slot.0 != key {
            *slot = (key, DiffPreview::compute(original, proposed));
        }
        &slot.1
    }

    fn key(original: &str, proposed: &str) -> (u64, u64) {
        (
            xxh64(original.as_bytes(), 0),
            xxh64(proposed.as_bytes(), 0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_remembers_the_last_input_pair() {
        let mut cache = PreviewCache::new();
        assert!(!cache.contains("<p>A</p>", "<p>B</p>"));

        let preview = cache.get_or_compute("<p>A</p>", "<p>B</p>").clone();
        assert!(cache.contains("<p>A</p>", "<p>B</p>"));
        assert_eq!(cache.get_or_compute("<p>A</p>", "<p>B</p>"), &preview);
    }

    #[test]
    fn new_inputs_replace_the_cached_preview() {
        let mut cache = PreviewCache::new();
        cache.get_or_compute("<p>A</p>", "<p>B</p>");

        let preview = cache.get_or_compute("<p>A</p>", "<p>A</p>");
        assert_eq!(preview.added_count, 0);
        assert!(!cache.contains("<p>A</p>", "<p>B</p>"));
        assert!(cache.contains("<p>A</p>", "<p>A</p>"));
    }
}
