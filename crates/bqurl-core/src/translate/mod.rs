//! URL → connection settings translation.
//!
//! [`translate`] reads connection scalars from the host, the first path
//! segment and the `location`, `arraysize` and `credentials_path` query
//! parameters, then runs every other query parameter through the
//! classification table in [`crate::params`]. The first rejected parameter
//! aborts the whole call.

use serde::Serialize;

use crate::config::BqurlConfig;
use crate::error::{TranslateError, ValueError};
use crate::job_config::{DatasetReference, QueryJobConfig};
use crate::params::{self, convert, ParamPolicy};
use crate::url_model::ParsedUrl;

/// Query parameter for the job location.
pub const LOCATION: &str = "location";
/// Query parameter for the fetch batch size.
pub const ARRAYSIZE: &str = "arraysize";
/// Query parameter for the service-account key file.
pub const CREDENTIALS_PATH: &str = "credentials_path";

const CONNECTION_SCALARS: [&str; 3] = [LOCATION, ARRAYSIZE, CREDENTIALS_PATH];

/// Everything a connection URL says about how to connect and how to run queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionSettings {
    pub project_id: Option<String>,
    pub location: Option<String>,
    pub dataset_id: Option<String>,
    pub array_size: Option<usize>,
    pub credentials_path: Option<String>,
    /// `None` when the URL requested no job configuration at all.
    pub job_config: Option<QueryJobConfig>,
}

/// The six translated values, in the order
/// `(project_id, location, dataset_id, array_size, credentials_path, job_config)`.
pub type SettingsParts = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<usize>,
    Option<String>,
    Option<QueryJobConfig>,
);

impl ConnectionSettings {
    pub fn into_parts(self) -> SettingsParts {
        (
            self.project_id,
            self.location,
            self.dataset_id,
            self.array_size,
            self.credentials_path,
            self.job_config,
        )
    }

    /// Resolves the project to connect to and binds it onto the deferred
    /// default dataset.
    ///
    /// The URL host wins; `fallback` (e.g. the project of the loaded
    /// credentials) is used only when the URL named none.
    pub fn resolve_project(&mut self, fallback: Option<&str>) -> Option<String> {
        let project = self
            .project_id
            .clone()
            .or_else(|| fallback.map(str::to_string))?;
        if let Some(job_config) = self.job_config.as_mut() {
            if job_config.resolve_default_project(&project) {
                tracing::debug!("bound default dataset to project {}", project);
            }
        }
        Some(project)
    }
}

/// Knobs that change how translation reports, never what it accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateOptions {
    /// Log ignored, unrecognized query parameters at warn level instead of debug.
    pub warn_unknown_params: bool,
}

impl From<&BqurlConfig> for TranslateOptions {
    fn from(cfg: &BqurlConfig) -> Self {
        Self {
            warn_unknown_params: cfg.warn_unknown_params,
        }
    }
}

pub fn translate(url: &ParsedUrl) -> Result<ConnectionSettings, TranslateError> {
    translate_with(url, TranslateOptions::default())
}

/// Tokenizes `input` and translates it.
pub fn translate_str(input: &str) -> Result<ConnectionSettings, TranslateError> {
    let url = ParsedUrl::parse(input)?;
    translate(&url)
}

pub fn translate_with(
    url: &ParsedUrl,
    options: TranslateOptions,
) -> Result<ConnectionSettings, TranslateError> {
    let project_id = non_empty(url.host());
    let dataset_id = url.dataset().map(str::to_string);

    let location = url.query_value(LOCATION).map(str::to_string);
    let array_size = url
        .query_value(ARRAYSIZE)
        .map(convert::parse_usize)
        .transpose()
        .map_err(|source| invalid(ARRAYSIZE, source))?;
    let credentials_path = url.query_value(CREDENTIALS_PATH).map(str::to_string);

    let mut job_config = dataset_id.as_ref().map(|_| QueryJobConfig::default());

    for (name, value) in url.query() {
        if CONNECTION_SCALARS.contains(&name.as_str()) {
            continue;
        }
        let Some(spec) = params::lookup(name) else {
            if options.warn_unknown_params {
                tracing::warn!("ignoring unrecognized connection parameter {}", name);
            } else {
                tracing::debug!("ignoring unrecognized connection parameter {}", name);
            }
            continue;
        };
        match spec.policy {
            ParamPolicy::Disallowed => {
                return Err(TranslateError::Disallowed { param: spec.name })
            }
            ParamPolicy::NotImplemented => {
                return Err(TranslateError::NotImplemented { param: spec.name })
            }
            ParamPolicy::Convert(converter) => {
                let setting = converter(value).map_err(|source| invalid(spec.name, source))?;
                tracing::debug!("{} = {:?}", spec.name, setting);
                setting.apply(job_config.get_or_insert_with(QueryJobConfig::default));
            }
        }
    }

    if let (Some(job_config), Some(dataset_id)) = (job_config.as_mut(), dataset_id.as_deref()) {
        job_config.default_dataset = Some(DatasetReference::deferred(dataset_id));
    }

    Ok(ConnectionSettings {
        project_id,
        location,
        dataset_id,
        array_size,
        credentials_path,
        job_config,
    })
}

/// Host as an owned string; an empty host means no project.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

fn invalid(param: &'static str, source: ValueError) -> TranslateError {
    TranslateError::InvalidValue { param, source }
}
