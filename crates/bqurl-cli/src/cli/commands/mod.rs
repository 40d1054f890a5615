//! CLI command handlers.

mod params;
mod parse;

pub use params::run_params;
pub use parse::run_parse;
