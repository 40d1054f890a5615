//! String-to-value converters for job configuration parameters.
//!
//! Each converter takes the raw (already percent-decoded) query value and
//! returns a [`JobSetting`] or the reason the value was rejected. Nothing is
//! trimmed or defaulted.

use std::collections::BTreeMap;

use crate::error::ValueError;
use crate::job_config::{
    CreateDisposition, EncryptionConfiguration, JobSetting, QueryPriority, SchemaUpdateOption,
    TableReference, Token, WriteDisposition,
};

/// Parses `true` / `false`, ignoring ASCII case.
pub fn parse_bool(value: &str) -> Result<bool, ValueError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ValueError::NotBoolean(value.to_string()))
    }
}

pub fn parse_i64(value: &str) -> Result<i64, ValueError> {
    value
        .parse::<i64>()
        .map_err(|_| ValueError::NotInteger(value.to_string()))
}

pub fn parse_usize(value: &str) -> Result<usize, ValueError> {
    value
        .parse::<usize>()
        .map_err(|_| ValueError::NotInteger(value.to_string()))
}

/// Splits on commas, keeping every piece as-is.
pub fn parse_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// Parses `key:value[,key:value...]`.
///
/// Each pair needs exactly one colon and a non-empty key. Values may be empty.
pub fn parse_labels(value: &str) -> Result<BTreeMap<String, String>, ValueError> {
    let mut labels = BTreeMap::new();
    for pair in value.split(',') {
        let (key, val) = pair
            .split_once(':')
            .filter(|(key, val)| !key.is_empty() && !val.contains(':'))
            .ok_or_else(|| ValueError::MalformedLabel(value.to_string()))?;
        labels.insert(key.to_string(), val.to_string());
    }
    Ok(labels)
}

/// Parses `project.dataset.table`; all three parts are required.
pub fn parse_table_reference(value: &str) -> Result<TableReference, ValueError> {
    let parts: Vec<&str> = value.split('.').collect();
    match parts.as_slice() {
        [project, dataset, table]
            if !project.is_empty() && !dataset.is_empty() && !table.is_empty() =>
        {
            Ok(TableReference {
                project_id: project.to_string(),
                dataset_id: dataset.to_string(),
                table_id: table.to_string(),
            })
        }
        _ => Err(ValueError::NotFullyQualified(value.to_string())),
    }
}

pub fn parse_tokens<T: Token>(value: &str) -> Result<Vec<T>, ValueError> {
    value.split(',').map(T::parse_token).collect()
}

pub(super) fn clustering_fields(value: &str) -> Result<JobSetting, ValueError> {
    Ok(JobSetting::ClusteringFields(parse_list(value)))
}

pub(super) fn create_disposition(value: &str) -> Result<JobSetting, ValueError> {
    CreateDisposition::parse_token(value).map(JobSetting::CreateDisposition)
}

pub(super) fn destination(value: &str) -> Result<JobSetting, ValueError> {
    parse_table_reference(value).map(JobSetting::Destination)
}

pub(super) fn destination_encryption_configuration(
    value: &str,
) -> Result<JobSetting, ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty);
    }
    Ok(JobSetting::DestinationEncryptionConfiguration(
        EncryptionConfiguration {
            kms_key_name: value.to_string(),
        },
    ))
}

pub(super) fn dry_run(value: &str) -> Result<JobSetting, ValueError> {
    parse_bool(value).map(JobSetting::DryRun)
}

pub(super) fn labels(value: &str) -> Result<JobSetting, ValueError> {
    parse_labels(value).map(JobSetting::Labels)
}

pub(super) fn maximum_bytes_billed(value: &str) -> Result<JobSetting, ValueError> {
    parse_i64(value).map(JobSetting::MaximumBytesBilled)
}

pub(super) fn priority(value: &str) -> Result<JobSetting, ValueError> {
    QueryPriority::parse_token(value).map(JobSetting::Priority)
}

pub(super) fn schema_update_options(value: &str) -> Result<JobSetting, ValueError> {
    parse_tokens::<SchemaUpdateOption>(value).map(JobSetting::SchemaUpdateOptions)
}

pub(super) fn use_query_cache(value: &str) -> Result<JobSetting, ValueError> {
    parse_bool(value).map(JobSetting::UseQueryCache)
}

pub(super) fn write_disposition(value: &str) -> Result<JobSetting, ValueError> {
    WriteDisposition::parse_token(value).map(JobSetting::WriteDisposition)
}
