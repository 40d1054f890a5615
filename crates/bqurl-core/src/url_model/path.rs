//! Path-segment helpers.

use url::Url;

/// Splits a URL path into its segments, keeping empty ones.
///
/// Returns an empty list for an empty path or a URL that cannot be a base.
pub(crate) fn path_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| segments.map(str::to_string).collect())
        .unwrap_or_default()
}

/// The dataset identifier carried by the path: its first non-empty segment.
///
/// Returns `None` for an empty or root-only path. Empty segments are skipped
/// (`//dataset` yields `dataset`) and later segments are ignored, so a
/// trailing slash (`/dataset/`) still yields `dataset`.
pub fn dataset_from_path(segments: &[String]) -> Option<&str> {
    segments.iter().map(String::as_str).find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(url: &str) -> Vec<String> {
        path_segments(&Url::parse(url).unwrap())
    }

    #[test]
    fn first_segment() {
        let s = segments("bigquery://proj/some-dataset");
        assert_eq!(dataset_from_path(&s), Some("some-dataset"));
        let s = segments("bigquery://proj/some-dataset/");
        assert_eq!(dataset_from_path(&s), Some("some-dataset"));
        let s = segments("bigquery://proj/a/b/c");
        assert_eq!(dataset_from_path(&s), Some("a"));
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(dataset_from_path(&segments("bigquery://")), None);
        assert_eq!(dataset_from_path(&segments("bigquery:///")), None);
        assert_eq!(dataset_from_path(&segments("bigquery://proj/")), None);
        assert_eq!(dataset_from_path(&[]), None);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let s = segments("bigquery://proj//ds");
        assert_eq!(s, ["", "ds"]);
        assert_eq!(dataset_from_path(&s), Some("ds"));
        assert_eq!(dataset_from_path(&segments("bigquery://proj///")), None);
    }

    #[test]
    fn with_query() {
        let s = segments("bigquery://proj/ds?location=EU");
        assert_eq!(dataset_from_path(&s), Some("ds"));
    }
}
