//! Redline: a change-review engine for document drafts.
//!
//! Pairs a line-based diff preview (hunk grouping, paired changes, inline
//! span highlighting) with accept/reject resolution and a simulated
//! keyword-matched writing assistant. The diff pipeline is a pure function of
//! the two document bodies; rendering is left entirely to the consumer.

pub mod assistant;
pub mod config;
pub mod constant;
pub mod diff;
pub mod messages;
pub mod review;
