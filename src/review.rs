//! Accept/reject resolution over a pending proposed document body.

use crate::diff::DiffPreview;
use chrono::{DateTime, Utc};

/// A proposed replacement body awaiting resolution, with its precomputed
/// diff preview against the committed content
#[derive(Debug, Clone)]
pub struct PendingProposal {
    pub proposed: String,
    pub preview: DiffPreview,
    pub created_at: DateTime<Utc>,
}

/// Owns the committed document body and at most one pending proposal.
///
/// The diff preview is computed once when a proposal is staged and reused
/// across re-renders until the proposal is resolved.
#[derive(Debug, Clone, Default)]
pub struct ReviewSession {
    committed: String,
    pending: Option<PendingProposal>,
}

impl ReviewSession {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            committed: content.into(),
            pending: None,
        }
    }

    /// The live document body
    pub fn content(&self) -> &str {
        &self.committed
    }

    /// Replace the live document body. Any pending proposal was computed
    /// against the old baseline and is discarded.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.committed = content.into();
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&PendingProposal> {
        self.pending.as_ref()
    }

    /// Preview of the currently pending proposal, if any
    pub fn preview(&self) -> Option<&DiffPreview> {
        self.pending.as_ref().map(|p| &p.preview)
    }

    /// Stage a proposed body, computing its preview against the committed
    /// content. Replaces any earlier unresolved proposal.
    pub fn propose(&mut self, proposed: impl Into<String>) -> &DiffPreview {
        let proposed = proposed.into();
        let preview = DiffPreview::compute(&self.committed, &proposed);
        let pending = self.pending.insert(PendingProposal {
            proposed,
            preview,
            created_at: Utc::now(),
        });
        &pending.preview
    }

    /// Commit the pending proposal as the live content and clear it.
    /// Without a pending proposal this is a no-op, not an error.
    pub fn accept(&mut self) -> &str {
        if let Some(pending) = self.pending.take() {
            self.committed = pending.proposed;
        }
        &self.committed
    }

    /// Discard the pending proposal, leaving the live content untouched
    pub fn reject(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_commits_the_proposed_body_byte_for_byte() {
        let mut session = ReviewSession::new("<p>old</p>");
        let proposed = "<p>new</p>\n<p>trailing  whitespace </p>";
        session.propose(proposed);

        let committed = session.accept().to_string();
        assert_eq!(committed, proposed);
        assert_eq!(session.content(), proposed);
        assert!(session.pending().is_none());
    }

    #[test]
    fn reject_leaves_committed_content_unchanged() {
        let mut session = ReviewSession::new("<p>old</p>");
        session.propose("<p>new</p>");

        session.reject();
        assert_eq!(session.content(), "<p>old</p>");
        assert!(session.pending().is_none());
    }

    #[test]
    fn accept_without_pending_proposal_is_a_no_op() {
        let mut session = ReviewSession::new("<p>old</p>");
        assert_eq!(session.accept(), "<p>old</p>");
        assert_eq!(session.content(), "<p>old</p>");
    }

    #[test]
    fn propose_returns_the_computed_preview() {
        let mut session = ReviewSession::new("<p>A</p><p>B</p>");
        let preview = session.propose("<p>A</p><p>C</p>");
        assert_eq!(preview.added_count, 1);
        assert_eq!(preview.removed_count, 1);

        // Staged preview is reused, not recomputed, on later reads
        assert_eq!(session.preview().map(|p| p.added_count), Some(1));
    }

    #[test]
    fn new_proposal_replaces_the_old_one() {
        let mut session = ReviewSession::new("<p>base</p>");
        session.propose("<p>first</p>");
        session.propose("<p>second</p>");

        assert_eq!(session.accept(), "<p>second</p>");
    }

    #[test]
    fn set_content_invalidates_the_pending_proposal() {
        let mut session = ReviewSession::new("<p>base</p>");
        session.propose("<p>draft</p>");

        session.set_content("<p>rewritten baseline</p>");
        assert!(session.preview().is_none());
        assert_eq!(session.accept(), "<p>rewritten baseline</p>");
    }
}
