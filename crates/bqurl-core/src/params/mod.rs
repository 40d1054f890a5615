//! Query parameter classification.
//!
//! Every job-level parameter name the URL may carry is listed once in
//! [`PARAMS`] with its policy:
//!
//! - [`ParamPolicy::Convert`]: parsed and set on the job configuration.
//! - [`ParamPolicy::Disallowed`]: understood by the service but never accepted
//!   from a URL, either because the URL already carries the value elsewhere
//!   (`dataset_id`, `project_id`, `default_dataset`) or because it changes
//!   query semantics behind the caller's back (`use_legacy_sql`, ...).
//! - [`ParamPolicy::NotImplemented`]: structured values with no faithful flat
//!   string form yet.
//!
//! Names not listed here are not job parameters and are left to the caller.

pub mod convert;

use std::fmt;

use crate::error::ValueError;
use crate::job_config::JobSetting;

/// Converts a raw query value into a job setting.
pub type Converter = fn(&str) -> Result<JobSetting, ValueError>;

#[derive(Clone, Copy)]
pub enum ParamPolicy {
    Convert(Converter),
    Disallowed,
    NotImplemented,
}

impl ParamPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            ParamPolicy::Convert(_) => "supported",
            ParamPolicy::Disallowed => "disallowed",
            ParamPolicy::NotImplemented => "not implemented",
        }
    }
}

impl fmt::Debug for ParamPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamPolicy::Convert(_) => f.write_str("Convert(..)"),
            ParamPolicy::Disallowed => f.write_str("Disallowed"),
            ParamPolicy::NotImplemented => f.write_str("NotImplemented"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub policy: ParamPolicy,
}

const fn converted(name: &'static str, converter: Converter) -> ParamSpec {
    ParamSpec {
        name,
        policy: ParamPolicy::Convert(converter),
    }
}

const fn disallowed(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        policy: ParamPolicy::Disallowed,
    }
}

const fn not_implemented(name: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        policy: ParamPolicy::NotImplemented,
    }
}

pub static PARAMS: &[ParamSpec] = &[
    converted("clustering_fields", convert::clustering_fields),
    converted("create_disposition", convert::create_disposition),
    converted("destination", convert::destination),
    converted(
        "destination_encryption_configuration",
        convert::destination_encryption_configuration,
    ),
    converted("dry_run", convert::dry_run),
    converted("labels", convert::labels),
    converted("maximum_bytes_billed", convert::maximum_bytes_billed),
    converted("priority", convert::priority),
    converted("schema_update_options", convert::schema_update_options),
    converted("use_query_cache", convert::use_query_cache),
    converted("write_disposition", convert::write_disposition),
    disallowed("use_legacy_sql"),
    disallowed("allow_large_results"),
    disallowed("flatten_results"),
    disallowed("maximum_billing_tier"),
    disallowed("default_dataset"),
    disallowed("dataset_id"),
    disallowed("project_id"),
    not_implemented("query_parameters"),
    not_implemented("table_definitions"),
    not_implemented("time_partitioning"),
    not_implemented("udf_resources"),
];

/// Looks up a parameter by its exact (case-sensitive) name.
pub fn lookup(name: &str) -> Option<&'static ParamSpec> {
    PARAMS.iter().find(|spec| spec.name == name)
}

/// Names carrying the given policy, in table order.
pub fn names_with(predicate: fn(&ParamPolicy) -> bool) -> impl Iterator<Item = &'static str> {
    PARAMS
        .iter()
        .filter(move |spec| predicate(&spec.policy))
        .map(|spec| spec.name)
}

pub fn supported_names() -> impl Iterator<Item = &'static str> {
    names_with(|p| matches!(p, ParamPolicy::Convert(_)))
}

pub fn disallowed_names() -> impl Iterator<Item = &'static str> {
    names_with(|p| matches!(p, ParamPolicy::Disallowed))
}

pub fn not_implemented_names() -> impl Iterator<Item = &'static str> {
    names_with(|p| matches!(p, ParamPolicy::NotImplemented))
}
