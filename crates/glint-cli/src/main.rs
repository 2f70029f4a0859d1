//! glint CLI: helper call-count convention checker for Go packages.
//!
//! This binary provides the `glint` command. `glint helpers` (alias `hp`)
//! checks every package under the current directory. See `glint --help`.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let formatter: Box<dyn glint_output::OutputFormatter> = if cli.json {
        Box::new(glint_output::json::JsonFormatter)
    } else {
        Box::new(glint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Helpers => commands::helpers::run(&*formatter),
    };

    std::process::exit(exit_code);
}
