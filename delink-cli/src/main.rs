//! Main entry point for the delink CLI.
//!
//! delink collapses a symbolic link into the file it points to: after a
//! successful run the link path holds the real file and the old target
//! entry is gone. The core logic lives in the `delink` library; this
//! binary only parses arguments, wires up logging, and maps errors to
//! exit codes.

mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use delink::Logger;
use error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = delink::init_logger(cli.verbose, cli.quiet);

    // Handle errors and set exit code
    match run(&cli, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli, logger: &Logger) -> Result<(), CliError> {
    let path = cli.target().ok_or_else(|| {
        CliError::InvalidArguments(
            "no path given (use --file <PATH> or a positional argument)".to_string(),
        )
    })?;

    logger.reversing(path);

    let validated = delink::validate(path)?;
    let resolved = delink::reverse(&validated)?;

    logger.reversed(&resolved, path);
    Ok(())
}
