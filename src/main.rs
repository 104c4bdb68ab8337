use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gh_contribute::cli::Cli;
use gh_contribute::config::Config;
use gh_contribute::contribute::Contributor;
use gh_contribute::selector::RandomShuffler;
use gh_contribute::tracker::github::GitHubTracker;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GH_CONTRIBUTE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    debug!(?config, "config loaded");

    let tracker = GitHubTracker::new(&config);
    let mut contributor = Contributor::new(tracker, RandomShuffler::new());

    match contributor.run(config.repo.as_deref()) {
        Ok(outcome) => print!("{}", outcome.render()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
