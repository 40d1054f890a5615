//! Value types carried by [`QueryJobConfig`](super::QueryJobConfig).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Closed set of string tokens accepted for an enumerated setting.
pub trait Token: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive match against [`Token::ALL`].
    fn parse_token(value: &str) -> Result<Self, ValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ValueError::UnknownToken {
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(Token::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Whether the job may create the destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateDisposition {
    CreateIfNeeded,
    CreateNever,
}

impl Token for CreateDisposition {
    const ALL: &'static [Self] = &[Self::CreateIfNeeded, Self::CreateNever];

    fn as_str(&self) -> &'static str {
        match self {
            Self::CreateIfNeeded => "CREATE_IF_NEEDED",
            Self::CreateNever => "CREATE_NEVER",
        }
    }
}

/// What happens to existing rows in the destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteDisposition {
    WriteAppend,
    WriteTruncate,
    WriteEmpty,
}

impl Token for WriteDisposition {
    const ALL: &'static [Self] = &[Self::WriteAppend, Self::WriteTruncate, Self::WriteEmpty];

    fn as_str(&self) -> &'static str {
        match self {
            Self::WriteAppend => "WRITE_APPEND",
            Self::WriteTruncate => "WRITE_TRUNCATE",
            Self::WriteEmpty => "WRITE_EMPTY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryPriority {
    Interactive,
    Batch,
}

impl Token for QueryPriority {
    const ALL: &'static [Self] = &[Self::Interactive, Self::Batch];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Interactive => "INTERACTIVE",
            Self::Batch => "BATCH",
        }
    }
}

/// Schema changes the job is allowed to make to the destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaUpdateOption {
    AllowFieldAddition,
    AllowFieldRelaxation,
}

impl Token for SchemaUpdateOption {
    const ALL: &'static [Self] = &[Self::AllowFieldAddition, Self::AllowFieldRelaxation];

    fn as_str(&self) -> &'static str {
        match self {
            Self::AllowFieldAddition => "ALLOW_FIELD_ADDITION",
            Self::AllowFieldRelaxation => "ALLOW_FIELD_RELAXATION",
        }
    }
}

macro_rules! token_from_str_and_display {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Token>::parse_token(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

token_from_str_and_display!(
    CreateDisposition,
    WriteDisposition,
    QueryPriority,
    SchemaUpdateOption
);

/// Fully-qualified table: `project.dataset.table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl fmt::Display for TableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

/// Dataset reference whose project may still be unknown.
///
/// A dataset taken from the URL path is stored with `project_id: None`; the
/// project is bound later by whoever holds the authenticated client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub dataset_id: String,
}

impl DatasetReference {
    /// Reference to `dataset_id` with the project left unresolved.
    pub fn deferred(dataset_id: impl Into<String>) -> Self {
        Self {
            project_id: None,
            dataset_id: dataset_id.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.project_id.is_some()
    }
}

/// Customer-managed key used to encrypt the destination table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionConfiguration {
    pub kms_key_name: String,
}
