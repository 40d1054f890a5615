//! CLI for inspecting BigQuery connection URLs.

mod commands;

use anyhow::Result;
use bqurl_core::config::{BqurlConfig, OutputFormat};
use bqurl_core::{ErrorKind, TranslateError};
use clap::{Parser, Subcommand, ValueEnum};

use commands::{run_params, run_parse};

/// Top-level CLI for bqurl.
#[derive(Debug, Parser)]
#[command(name = "bqurl")]
#[command(about = "Translate BigQuery connection URLs into connection settings and job configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Translate a connection URL and print the resulting settings.
    Parse {
        /// Connection URL, e.g. bigquery://project/dataset?location=EU.
        url: String,
        /// Project to bind onto the default dataset when the URL has no host.
        #[arg(long, value_name = "PROJECT")]
        project: Option<String>,
        /// Output format (overrides the config file).
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List query parameters understood in connection URLs and how each is handled.
    Params,
}

/// Exit status for parameters that are recognized but not supported yet.
pub const EXIT_NOT_IMPLEMENTED: i32 = 3;

/// Process exit status for a failed command: [`EXIT_NOT_IMPLEMENTED`] when the
/// URL used a not-yet-supported parameter, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TranslateError>().map(TranslateError::kind) {
        Some(ErrorKind::NotImplemented) => EXIT_NOT_IMPLEMENTED,
        _ => 1,
    }
}

impl CliCommand {
    pub fn run(self, cfg: &BqurlConfig) -> Result<()> {
        match self {
            CliCommand::Parse {
                url,
                project,
                format,
            } => {
                let format = format.map(OutputFormat::from).unwrap_or(cfg.output_format);
                let fallback = project.as_deref().or(cfg.default_project.as_deref());
                run_parse(&url, fallback, format, cfg)?
            }
            CliCommand::Params => run_params(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
