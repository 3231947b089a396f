//! Entry point: argument parsing, logger/color init, subcommand dispatch,
//! and exit-code mapping.

use clap::error::ErrorKind;
use clap::Parser;

use unused_finder::cli::{Cli, Command};
use unused_finder::{commands, logger};

const EXIT_USAGE_ERROR: i32 = 64;
const EXIT_ENVIRONMENT_ERROR: i32 = 1;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage/help/version text for us.
            err.print().ok();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE_ERROR,
            };
            std::process::exit(code);
        }
    };

    let (verbose, no_color) = match &cli.command {
        Command::Assets(args) => (args.common.verbose, args.common.no_color),
        Command::UnusedCode(args) => (args.common.verbose, args.common.no_color),
    };
    logger::init_logger(verbose, no_color);

    let result = match &cli.command {
        Command::Assets(args) => commands::assets::run(args),
        Command::UnusedCode(args) => commands::unused_code::run(args),
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(EXIT_ENVIRONMENT_ERROR);
        }
    }
}
