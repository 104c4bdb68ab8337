pub mod github;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::repo::RepoRef;

/// An open issue as fetched from the tracker. Never mutated after fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub labels: Vec<String>,
}

impl Issue {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}

/// A timeline link from another item (usually a pull request) to an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossReference {
    /// Merging the referencing item closes the issue.
    pub will_close_target: bool,
}

/// Everything the pipeline needs from the hosted issue tracker.
pub trait IssueTracker {
    /// Repository associated with the current working directory.
    fn resolve_repository(&self) -> Result<RepoRef>;

    /// Issues carrying `label` in `repo`.
    fn list_issues_by_label(&self, repo: &RepoRef, label: &str) -> Result<Vec<Issue>>;

    /// Up to the 10 most recent cross-referencing events for issue `number`.
    fn query_cross_references(&self, repo: &RepoRef, number: u64) -> Result<Vec<CrossReference>>;
}
