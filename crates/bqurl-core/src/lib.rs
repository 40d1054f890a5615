//! Translate BigQuery connection URLs into connection settings and a query
//! job configuration.
//!
//! ```
//! use bqurl_core::translate::translate_str;
//!
//! let settings = translate_str("bigquery://proj/ds?location=EU&dry_run=true").unwrap();
//! assert_eq!(settings.project_id.as_deref(), Some("proj"));
//! assert_eq!(settings.job_config.unwrap().dry_run, Some(true));
//! ```

pub mod config;
pub mod error;
pub mod job_config;
pub mod logging;
pub mod params;
pub mod translate;
pub mod url_model;

pub use error::{ErrorKind, TranslateError, ValueError};
pub use job_config::QueryJobConfig;
pub use translate::{translate, translate_str, translate_with, ConnectionSettings, TranslateOptions};
pub use url_model::ParsedUrl;
