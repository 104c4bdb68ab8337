use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A repository scoped as `OWNER/NAME`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((owner, name)) if is_segment(owner) && is_segment(name) => {
                Ok(RepoRef::new(owner, name))
            }
            _ => Err(Error::Resolution(format!(
                "invalid repository {trimmed:?} (expected OWNER/NAME)"
            ))),
        }
    }
}

fn is_segment(s: &str) -> bool {
    !s.is_empty() && !s.contains('/') && !s.contains(char::is_whitespace)
}

/// Parse the output of `gh repo view`.
///
/// Only the first line is considered; it must have the shape `field: value`,
/// and the value (everything after the first colon, trimmed) must be an
/// `OWNER/NAME` pair.
pub fn parse_repo_view(output: &str) -> Result<RepoRef> {
    let first_line = output.lines().next().unwrap_or_default();
    if first_line.trim().is_empty() {
        return Err(Error::Resolution("`gh repo view` produced no output".to_string()));
    }

    let (_field, value) = first_line.split_once(':').ok_or_else(|| {
        Error::Resolution(format!(
            "unexpected `gh repo view` output: {first_line:?} (expected `field: value`)"
        ))
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Resolution(format!(
            "unexpected `gh repo view` output: {first_line:?} has no value"
        )));
    }

    value.parse()
}
