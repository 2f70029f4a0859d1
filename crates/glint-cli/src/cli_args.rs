use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit:     ",
    env!("GLINT_COMMIT_HASH"),
    "\ntag:        ",
    env!("GLINT_GIT_TAG"),
    "\nbuild time: ",
    env!("GLINT_BUILD_TIME"),
);

#[derive(Parser, Debug)]
#[command(
    name = "glint",
    version,
    long_version = LONG_VERSION,
    about = "Checks the helper call-count convention in Go packages"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log progress to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Compare each helper's encoded call count with its actual call sites
    #[command(visible_alias = "hp")]
    Helpers,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
