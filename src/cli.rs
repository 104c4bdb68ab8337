use clap::Parser;

/// Suggest an issue to work on in a given repository
#[derive(Parser, Debug, Clone)]
#[command(name = "gh-contribute", version, about)]
pub struct Cli {
    /// Repository to contribute to (OWNER/NAME)
    pub repository: Option<String>,

    /// Repository to contribute to; takes precedence over the positional argument
    #[arg(short = 'R', long = "repo")]
    pub repo: Option<String>,

    /// Path to config file (default: .gh-contribute.toml if present)
    #[arg(long)]
    pub config: Option<String>,
}

impl Cli {
    /// Repository requested on the command line, if any. The flag wins.
    pub fn requested_repo(&self) -> Option<&str> {
        self.repo.as_deref().or(self.repository.as_deref())
    }
}
