//! Query job configuration populated from a connection URL.
//!
//! [`QueryJobConfig`] mirrors the subset of the service's query job settings
//! that can be expressed as flat URL parameters. Every field is optional and
//! only set when the URL supplied it.

mod types;

pub use types::{
    CreateDisposition, DatasetReference, EncryptionConfiguration, QueryPriority,
    SchemaUpdateOption, TableReference, Token, WriteDisposition,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryJobConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clustering_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_disposition: Option<CreateDisposition>,
    #[serde(
        default,
        rename = "destinationTable",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination: Option<TableReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_encryption_configuration: Option<EncryptionConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_bytes_billed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<QueryPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_update_options: Option<Vec<SchemaUpdateOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_query_cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_disposition: Option<WriteDisposition>,
    /// Dataset used for unqualified table names in the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dataset: Option<DatasetReference>,
}

impl QueryJobConfig {
    /// Binds `project` onto a default dataset whose project is still unknown.
    ///
    /// Returns true if the reference was updated. A project that is already
    /// set is never overridden.
    pub fn resolve_default_project(&mut self, project: &str) -> bool {
        match self.default_dataset.as_mut() {
            Some(dataset) if dataset.project_id.is_none() => {
                dataset.project_id = Some(project.to_string());
                true
            }
            _ => false,
        }
    }

    /// Default dataset as `project.dataset`, once its project is known.
    pub fn default_dataset_qualified(&self) -> Option<String> {
        let dataset = self.default_dataset.as_ref()?;
        let project = dataset.project_id.as_deref()?;
        Some(format!("{}.{}", project, dataset.dataset_id))
    }
}

/// One converted URL parameter, ready to be applied to a [`QueryJobConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSetting {
    ClusteringFields(Vec<String>),
    CreateDisposition(CreateDisposition),
    Destination(TableReference),
    DestinationEncryptionConfiguration(EncryptionConfiguration),
    DryRun(bool),
    Labels(BTreeMap<String, String>),
    MaximumBytesBilled(i64),
    Priority(QueryPriority),
    SchemaUpdateOptions(Vec<SchemaUpdateOption>),
    UseQueryCache(bool),
    WriteDisposition(WriteDisposition),
}

impl JobSetting {
    pub fn apply(self, config: &mut QueryJobConfig) {
        match self {
            JobSetting::ClusteringFields(v) => config.clustering_fields = Some(v),
            JobSetting::CreateDisposition(v) => config.create_disposition = Some(v),
            JobSetting::Destination(v) => config.destination = Some(v),
            JobSetting::DestinationEncryptionConfiguration(v) => {
                config.destination_encryption_configuration = Some(v)
            }
            JobSetting::DryRun(v) => config.dry_run = Some(v),
            JobSetting::Labels(v) => config.labels = Some(v),
            JobSetting::MaximumBytesBilled(v) => config.maximum_bytes_billed = Some(v),
            JobSetting::Priority(v) => config.priority = Some(v),
            JobSetting::SchemaUpdateOptions(v) => config.schema_update_options = Some(v),
            JobSetting::UseQueryCache(v) => config.use_query_cache = Some(v),
            JobSetting::WriteDisposition(v) => config.write_disposition = Some(v),
        }
    }
}
