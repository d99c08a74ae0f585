//! listfeed: syndication feeds from the git history of a curated list
//!
//! This binary mines the commit history of one tracked file and writes the
//! accumulated additions and removals as Atom, JSON Feed and RSS documents.

use clap::Parser;
use tracing::error;

use listfeed::Config;

fn main() {
    let config = Config::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = listfeed::run(&config) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
