use bqurl_core::config;
use bqurl_core::logging::{self, LogOptions};
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let cfg = match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("bqurl error: {:#}", err);
            std::process::exit(1);
        }
    };

    // Fall back to stderr if the state dir is unusable.
    if logging::init_logging(LogOptions::from(&cfg)).is_err() {
        logging::init_logging_stderr();
    }
    tracing::debug!("loaded config: {:?}", cfg);

    if let Err(err) = cli.command.run(&cfg) {
        eprintln!("bqurl error: {:#}", err);
        std::process::exit(cli::exit_code(&err));
    }
}
