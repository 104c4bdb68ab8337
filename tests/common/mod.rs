#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};

use gh_contribute::error::{Error, Result};
use gh_contribute::repo::RepoRef;
use gh_contribute::selector::Shuffler;
use gh_contribute::tracker::{CrossReference, Issue, IssueTracker};

pub fn make_issue(number: u64, title: &str, url: &str, created_at: DateTime<Utc>) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        url: url.to_string(),
        created_at,
        labels: vec![],
    }
}

pub fn day_old(number: u64, title: &str) -> Issue {
    make_issue(
        number,
        title,
        &format!("url{number}"),
        Utc::now() - Duration::days(1),
    )
}

/// Outcome of a cross-reference lookup for one issue.
#[derive(Debug, Clone, Copy)]
pub enum Lookup {
    Claimed,
    Unclaimed,
    Fails,
}

/// In-memory tracker for driving the pipeline without `gh`.
#[derive(Default)]
pub struct FakeTracker {
    pub ambient: Option<RepoRef>,
    pub by_label: HashMap<String, Vec<Issue>>,
    pub lookups: HashMap<u64, Lookup>,
    pub checked: RefCell<Vec<u64>>,
}

impl FakeTracker {
    pub fn with_label(mut self, label: &str, issues: Vec<Issue>) -> Self {
        self.by_label.insert(label.to_string(), issues);
        self
    }

    pub fn with_lookup(mut self, number: u64, lookup: Lookup) -> Self {
        self.lookups.insert(number, lookup);
        self
    }
}

impl IssueTracker for FakeTracker {
    fn resolve_repository(&self) -> Result<RepoRef> {
        self.ambient
            .clone()
            .ok_or_else(|| Error::Resolution("no ambient repository".into()))
    }

    fn list_issues_by_label(&self, _repo: &RepoRef, label: &str) -> Result<Vec<Issue>> {
        Ok(self.by_label.get(label).cloned().unwrap_or_default())
    }

    fn query_cross_references(&self, _repo: &RepoRef, number: u64) -> Result<Vec<CrossReference>> {
        self.checked.borrow_mut().push(number);
        match self.lookups.get(&number).copied().unwrap_or(Lookup::Unclaimed) {
            Lookup::Claimed => Ok(vec![
                CrossReference {
                    will_close_target: false,
                },
                CrossReference {
                    will_close_target: true,
                },
            ]),
            Lookup::Unclaimed => Ok(vec![]),
            Lookup::Fails => Err(Error::Lookup(format!("issue #{number}: HTTP 502"))),
        }
    }
}

/// Visits candidates in a predetermined order.
pub struct FixedOrder(pub Vec<usize>);

impl Shuffler for FixedOrder {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        self.0.iter().copied().filter(|&i| i < len).collect()
    }
}

/// Write an executable shell script standing in for `gh`.
#[cfg(unix)]
pub fn write_fake_gh(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("gh");
    std::fs::write(&path, format!("#!/bin/sh\n{script}")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Point the binary at a fake `gh` through a config file. Returns the config path.
pub fn write_config(dir: &Path, gh_binary: &Path) -> PathBuf {
    let path = dir.join("contribute.toml");
    std::fs::write(
        &path,
        format!("gh_binary = {:?}\n", gh_binary.to_string_lossy()),
    )
    .unwrap();
    path
}
