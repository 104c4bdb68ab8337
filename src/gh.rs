use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Abstraction over `gh` CLI execution for testability.
pub trait GhClient {
    /// Run `gh` with `args` and return its stdout.
    fn run(&self, args: &[&str]) -> Result<String>;

    /// Run a GraphQL query via `gh api graphql`.
    ///
    /// `variables` are passed with `-f` (always strings); `typed_variables`
    /// with `-F` so that gh converts numbers and booleans.
    fn graphql(
        &self,
        query: &str,
        variables: &[(&str, &str)],
        typed_variables: &[(&str, &str)],
    ) -> Result<String> {
        let query_arg = format!("query={query}");
        let mut owned: Vec<String> = vec!["api".into(), "graphql".into(), "-f".into(), query_arg];
        for (key, value) in variables {
            owned.push("-f".into());
            owned.push(format!("{key}={value}"));
        }
        for (key, value) in typed_variables {
            owned.push("-F".into());
            owned.push(format!("{key}={value}"));
        }
        let refs: Vec<&str> = owned.iter().map(|s| s.as_str()).collect();
        self.run(&refs)
    }
}

/// Real `gh` CLI client. One attempt per call, no timeout.
pub struct CommandGhClient {
    binary: String,
}

impl CommandGhClient {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl GhClient for CommandGhClient {
    fn run(&self, args: &[&str]) -> Result<String> {
        let path = which::which(&self.binary).map_err(|e| Error::ToolNotFound {
            binary: self.binary.clone(),
            reason: e.to_string(),
        })?;

        debug!(binary = %path.display(), ?args, "running gh");
        let output = Command::new(&path)
            .args(args)
            .output()
            .map_err(|e| Error::ExternalCall(format!("{}: {e}", path.display())))?;

        if output.status.success() {
            String::from_utf8(output.stdout)
                .map_err(|e| Error::ExternalCall(format!("invalid utf8 from gh: {e}")))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::ExternalCall(format!(
                "`gh {}` exited with {}, stderr: {}",
                args.iter().take(2).copied().collect::<Vec<_>>().join(" "),
                output.status,
                stderr.trim()
            )))
        }
    }
}
