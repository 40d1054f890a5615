//! Connection URL model.
//!
//! A connection URL has the form
//!
//! ```text
//! bigquery://<project>/<dataset>?<key>=<value>[&<key>=<value>...]
//! ```
//!
//! [`ParsedUrl`] holds the parts the translator reads: host, path segments and
//! the query parameters. Query values are percent-decoded, a repeated key
//! keeps its last value and a key with a blank value counts as not supplied.

mod path;

pub use path::dataset_from_path;

use std::collections::BTreeMap;
use url::Url;

/// Tokenized connection URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: String,
    host: Option<String>,
    path_segments: Vec<String>,
    query: BTreeMap<String, String>,
}

impl ParsedUrl {
    /// Builds a URL model from already-tokenized parts.
    ///
    /// Later entries in `query` override earlier ones with the same name;
    /// entries with an empty value are dropped.
    pub fn new<S, Q, K, V>(scheme: &str, host: Option<&str>, path_segments: S, query: Q) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        Q: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            scheme: scheme.to_string(),
            host: host.map(str::to_string),
            path_segments: path_segments.into_iter().map(Into::into).collect(),
            query: non_blank(query.into_iter().map(|(k, v)| (k.into(), v.into()))),
        }
    }

    /// Tokenizes a connection URL string.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(input)?;
        Ok(Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            path_segments: path::path_segments(url),
            query: non_blank(url.query_pairs().into_owned()),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host as written in the URL; may be empty.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Dataset identifier from the first non-empty path segment.
    pub fn dataset(&self) -> Option<&str> {
        dataset_from_path(&self.path_segments)
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

fn non_blank(pairs: impl Iterator<Item = (String, String)>) -> BTreeMap<String, String> {
    pairs.filter(|(_, value)| !value.is_empty()).collect()
}

impl std::str::FromStr for ParsedUrl {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_url() {
        let u = ParsedUrl::parse("bigquery://some-project/some-dataset?location=EU&arraysize=10")
            .unwrap();
        assert_eq!(u.scheme(), "bigquery");
        assert_eq!(u.host(), Some("some-project"));
        assert_eq!(u.dataset(), Some("some-dataset"));
        assert_eq!(u.query_value("location"), Some("EU"));
        assert_eq!(u.query_value("arraysize"), Some("10"));
        assert_eq!(u.query().len(), 2);
    }

    #[test]
    fn parse_empty_url() {
        for raw in ["bigquery://", "bigquery:///"] {
            let u = ParsedUrl::parse(raw).unwrap();
            assert!(u.host().map_or(true, str::is_empty), "{raw}");
            assert_eq!(u.dataset(), None, "{raw}");
            assert!(u.query().is_empty(), "{raw}");
        }
    }

    #[test]
    fn query_values_are_decoded() {
        let u = ParsedUrl::parse("bigquery:///?credentials_path=%2Fsome%2Fpath%2Fto.json&labels=a%3Ab")
            .unwrap();
        assert_eq!(u.query_value("credentials_path"), Some("/some/path/to.json"));
        assert_eq!(u.query_value("labels"), Some("a:b"));
    }

    #[test]
    fn repeated_key_keeps_last() {
        let u = ParsedUrl::parse("bigquery:///?priority=BATCH&priority=INTERACTIVE").unwrap();
        assert_eq!(u.query_value("priority"), Some("INTERACTIVE"));

        let u = ParsedUrl::new(
            "bigquery",
            None,
            Vec::<String>::new(),
            [("dry_run", "false"), ("dry_run", "true")],
        );
        assert_eq!(u.query_value("dry_run"), Some("true"));
    }

    #[test]
    fn blank_values_are_dropped() {
        let u = ParsedUrl::parse("bigquery://p/ds?dry_run=&use_legacy_sql=&location=EU").unwrap();
        assert_eq!(u.query_value("dry_run"), None);
        assert_eq!(u.query_value("use_legacy_sql"), None);
        assert_eq!(u.query().len(), 1);

        let u = ParsedUrl::new("bigquery", None, Vec::<String>::new(), [("priority", "")]);
        assert!(u.query().is_empty());
    }

    #[test]
    fn invalid_url() {
        assert!(ParsedUrl::parse("not a url").is_err());
        assert!("://missing-scheme".parse::<ParsedUrl>().is_err());
    }
}
