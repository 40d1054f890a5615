//! Error types for URL translation.
//!
//! Every failure is one of two kinds: a bad value (including parameters that
//! may never be set through the URL) or a parameter whose conversion is not
//! supported yet. Callers branch on [`TranslateError::kind`].

/// Why a raw query-parameter string could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("expected an integer, got {0:?}")]
    NotInteger(String),
    #[error("expected `true` or `false`, got {0:?}")]
    NotBoolean(String),
    #[error("unknown value {value:?}, expected one of: {expected}")]
    UnknownToken { value: String, expected: String },
    #[error("expected comma-separated `key:value` pairs, got {0:?}")]
    MalformedLabel(String),
    #[error("expected a fully-qualified `project.dataset.table` reference, got {0:?}")]
    NotFullyQualified(String),
    #[error("value must not be empty")]
    Empty,
}

/// Broad classification of a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The URL carries a malformed or disallowed value. Fix the URL.
    Value,
    /// The parameter is recognized but cannot be expressed in a URL yet.
    NotImplemented,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid connection URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid value for `{param}`: {source}")]
    InvalidValue {
        param: &'static str,
        #[source]
        source: ValueError,
    },
    #[error("`{param}` cannot be set through the connection URL")]
    Disallowed { param: &'static str },
    #[error("`{param}` is not supported in the connection URL yet")]
    NotImplemented { param: &'static str },
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::NotImplemented { .. } => ErrorKind::NotImplemented,
            TranslateError::InvalidUrl(_)
            | TranslateError::InvalidValue { .. }
            | TranslateError::Disallowed { .. } => ErrorKind::Value,
        }
    }

    /// Name of the offending query parameter, if the error is tied to one.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            TranslateError::InvalidUrl(_) => None,
            TranslateError::InvalidValue { param, .. }
            | TranslateError::Disallowed { param }
            | TranslateError::NotImplemented { param } => Some(*param),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let e = TranslateError::Disallowed {
            param: "use_legacy_sql",
        };
        assert_eq!(e.kind(), ErrorKind::Value);
        let e = TranslateError::NotImplemented {
            param: "udf_resources",
        };
        assert_eq!(e.kind(), ErrorKind::NotImplemented);
        let e = TranslateError::InvalidValue {
            param: "dry_run",
            source: ValueError::NotBoolean("maybe".to_string()),
        };
        assert_eq!(e.kind(), ErrorKind::Value);
        assert_eq!(e.param(), Some("dry_run"));
    }

    #[test]
    fn display_names_parameter() {
        let e = TranslateError::InvalidValue {
            param: "maximum_bytes_billed",
            source: ValueError::NotInteger("lots".to_string()),
        };
        let msg = e.to_string();
        assert!(msg.contains("maximum_bytes_billed"));
        assert!(msg.contains("lots"));
    }
}
