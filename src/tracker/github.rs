use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::gh::{CommandGhClient, GhClient};
use crate::repo::{self, RepoRef};

use super::{CrossReference, Issue, IssueTracker};

const ISSUE_FIELDS: &str = "number,title,labels,url,createdAt";
const ISSUE_LIMIT: &str = "100";

const CROSS_REFERENCE_QUERY: &str = r#"
    query($owner: String!, $name: String!, $number: Int!) {
      repository(owner: $owner, name: $name) {
        issue(number: $number) {
          timelineItems(last: 10, itemTypes: [CROSS_REFERENCED_EVENT]) {
            edges {
              node {
                ... on CrossReferencedEvent { willCloseTarget }
              }
            }
          }
        }
      }
    }
"#;

#[derive(Debug, Deserialize)]
struct GhLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GhIssue {
    number: u64,
    title: String,
    url: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    labels: Vec<GhLabel>,
}

pub struct GitHubTracker {
    client: Box<dyn GhClient>,
}

impl GitHubTracker {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Box::new(CommandGhClient::new(config.gh_binary.clone())),
        }
    }

    pub fn with_client(client: Box<dyn GhClient>) -> Self {
        Self { client }
    }

    fn parse_issue(gh: GhIssue) -> Issue {
        Issue {
            number: gh.number,
            title: gh.title,
            url: gh.url,
            created_at: gh.created_at,
            labels: gh.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

// --- GraphQL response types ---

#[derive(Debug, Deserialize)]
struct GqlResponse {
    data: GqlData,
}

#[derive(Debug, Deserialize)]
struct GqlData {
    repository: GqlRepository,
}

#[derive(Debug, Deserialize)]
struct GqlRepository {
    issue: GqlIssue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GqlIssue {
    timeline_items: GqlTimelineConnection,
}

#[derive(Debug, Deserialize)]
struct GqlTimelineConnection {
    #[serde(default)]
    edges: Vec<GqlTimelineEdge>,
}

#[derive(Debug, Deserialize)]
struct GqlTimelineEdge {
    node: GqlCrossReferencedEvent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GqlCrossReferencedEvent {
    #[serde(default)]
    will_close_target: bool,
}

impl IssueTracker for GitHubTracker {
    fn resolve_repository(&self) -> Result<RepoRef> {
        let output = self.client.run(&["repo", "view"])?;
        let repo = repo::parse_repo_view(&output)?;
        debug!(%repo, "resolved repository from working directory");
        Ok(repo)
    }

    fn list_issues_by_label(&self, repo: &RepoRef, label: &str) -> Result<Vec<Issue>> {
        let repo_arg = repo.to_string();
        let json = self.client.run(&[
            "issue",
            "list",
            "--label",
            label,
            "--repo",
            &repo_arg,
            "--json",
            ISSUE_FIELDS,
            "--limit",
            ISSUE_LIMIT,
        ])?;

        let issues: Vec<GhIssue> = serde_json::from_str(&json).map_err(|e| {
            Error::Fetch(format!("failed to parse issues labeled {label:?}: {e}"))
        })?;

        let issues: Vec<Issue> = issues.into_iter().map(Self::parse_issue).collect();
        debug!(label, count = issues.len(), "fetched labeled issues");
        Ok(issues)
    }

    fn query_cross_references(&self, repo: &RepoRef, number: u64) -> Result<Vec<CrossReference>> {
        let number_arg = number.to_string();
        let response = self
            .client
            .graphql(
                CROSS_REFERENCE_QUERY,
                &[("owner", repo.owner.as_str()), ("name", repo.name.as_str())],
                &[("number", number_arg.as_str())],
            )
            .map_err(|e| Error::Lookup(format!("issue #{number}: {e}")))?;

        let parsed: GqlResponse = serde_json::from_str(&response).map_err(|e| {
            Error::Lookup(format!("failed to parse timeline of issue #{number}: {e}"))
        })?;

        Ok(parsed
            .data
            .repository
            .issue
            .timeline_items
            .edges
            .into_iter()
            .map(|edge| CrossReference {
                will_close_target: edge.node.will_close_target,
            })
            .collect())
    }
}
