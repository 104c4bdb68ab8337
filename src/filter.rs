use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::tracker::Issue;

/// Label that unconditionally disqualifies an issue.
pub const BLOCKED_LABEL: &str = "blocked";

/// Issues older than this are not suggested. Fixed hours, not calendar years.
pub const STALE_AFTER_HOURS: i64 = 8760;

pub fn stale_after() -> Duration {
    Duration::hours(STALE_AFTER_HOURS)
}

/// Append every issue from `lists` whose number is not yet in `seen`.
///
/// Lists are consumed in order, so the first occurrence of a number wins.
/// The updated `seen` set is handed back to the caller.
pub fn merge_unique(
    mut seen: HashSet<u64>,
    lists: impl IntoIterator<Item = Vec<Issue>>,
) -> (Vec<Issue>, HashSet<u64>) {
    let mut merged = Vec::new();
    for issue in lists.into_iter().flatten() {
        if seen.insert(issue.number) {
            merged.push(issue);
        }
    }
    (merged, seen)
}

pub fn is_blocked(issue: &Issue) -> bool {
    issue.has_label(BLOCKED_LABEL)
}

/// Strictly older than the threshold. An issue exactly at the boundary is kept.
pub fn is_stale(issue: &Issue, now: DateTime<Utc>) -> bool {
    now - issue.created_at > stale_after()
}

/// Build the candidate set: dedup by number, then drop blocked and stale issues.
/// Output order is first-seen order.
pub fn filter_candidates(
    lists: impl IntoIterator<Item = Vec<Issue>>,
    now: DateTime<Utc>,
) -> Vec<Issue> {
    let (merged, _) = merge_unique(HashSet::new(), lists);
    merged
        .into_iter()
        .filter(|issue| !is_blocked(issue) && !is_stale(issue, now))
        .collect()
}
