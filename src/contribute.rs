use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filter;
use crate::repo::RepoRef;
use crate::report;
use crate::selector::{self, Selection, Shuffler};
use crate::tracker::{Issue, IssueTracker};

pub const HELP_WANTED_LABEL: &str = "help wanted";
pub const GOOD_FIRST_ISSUE_LABEL: &str = "good first issue";

/// Priority labels, fetched in this order. Earlier lists win on duplicates.
pub const PRIORITY_LABELS: [&str; 2] = [HELP_WANTED_LABEL, GOOD_FIRST_ISSUE_LABEL];

/// Result of a successful run. Finding nothing is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found { repo: RepoRef, issue: Issue },
    NotFound,
}

impl Outcome {
    pub fn render(&self) -> String {
        match self {
            Outcome::Found { repo, issue } => report::render_found(repo, issue),
            Outcome::NotFound => report::render_not_found(),
        }
    }
}

/// Whether any recent cross-referencing item will close `issue` when merged.
pub fn has_closing_pull_request<T: IssueTracker>(
    tracker: &T,
    repo: &RepoRef,
    issue: &Issue,
) -> Result<bool> {
    let refs = tracker.query_cross_references(repo, issue.number)?;
    Ok(refs.iter().any(|r| r.will_close_target))
}

pub struct Contributor<T, S> {
    tracker: T,
    shuffler: S,
}

impl<T: IssueTracker, S: Shuffler> Contributor<T, S> {
    pub fn new(tracker: T, shuffler: S) -> Self {
        Self { tracker, shuffler }
    }

    /// Use `requested` when given, otherwise ask the tracker for the
    /// repository of the working directory.
    pub fn resolve_repo(&self, requested: Option<&str>) -> Result<RepoRef> {
        match requested {
            Some(repo) => repo.parse(),
            None => self.tracker.resolve_repository(),
        }
    }

    pub fn fetch_candidates(&self, repo: &RepoRef, now: DateTime<Utc>) -> Result<Vec<Issue>> {
        let mut lists = Vec::with_capacity(PRIORITY_LABELS.len());
        for label in PRIORITY_LABELS {
            lists.push(self.tracker.list_issues_by_label(repo, label)?);
        }
        let candidates = filter::filter_candidates(lists, now);
        debug!(count = candidates.len(), "candidates after filtering");
        Ok(candidates)
    }

    pub fn run(&mut self, requested: Option<&str>) -> Result<Outcome> {
        self.run_at(requested, Utc::now())
    }

    /// Full pipeline with an explicit notion of "now" for the staleness check.
    pub fn run_at(&mut self, requested: Option<&str>, now: DateTime<Utc>) -> Result<Outcome> {
        let repo = self.resolve_repo(requested)?;
        info!(%repo, "looking for an issue to suggest");

        let candidates = self.fetch_candidates(&repo, now)?;
        let order = self.shuffler.permutation(candidates.len());

        let tracker = &self.tracker;
        let selection = selector::select(&candidates, &order, |issue| {
            has_closing_pull_request(tracker, &repo, issue)
        });

        match selection {
            Selection::Chosen(issue) => Ok(Outcome::Found { repo, issue }),
            Selection::ExhaustedClean => Ok(Outcome::NotFound),
            Selection::ExhaustedWithError(e) => Err(Error::ScanFailed(Box::new(e))),
        }
    }
}
