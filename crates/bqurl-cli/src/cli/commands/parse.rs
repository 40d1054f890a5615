//! `bqurl parse <url>` – translate a connection URL and print the result.

use anyhow::Result;
use bqurl_core::config::{BqurlConfig, OutputFormat};
use bqurl_core::job_config::Token;
use bqurl_core::{translate_with, ConnectionSettings, ParsedUrl, TranslateOptions};

pub fn run_parse(
    url: &str,
    fallback_project: Option<&str>,
    format: OutputFormat,
    cfg: &BqurlConfig,
) -> Result<()> {
    let settings = parse_settings(url, fallback_project, cfg)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
        OutputFormat::Text => print!("{}", render_text(&settings)),
    }
    Ok(())
}

pub(crate) fn parse_settings(
    url: &str,
    fallback_project: Option<&str>,
    cfg: &BqurlConfig,
) -> Result<ConnectionSettings> {
    let parsed = ParsedUrl::parse(url).map_err(bqurl_core::TranslateError::from)?;
    let mut settings = translate_with(&parsed, TranslateOptions::from(cfg))?;
    if let Some(project) = settings.resolve_project(fallback_project) {
        tracing::debug!("resolved project {} for {}", project, url);
    }
    Ok(settings)
}

fn line(out: &mut String, key: &str, value: Option<String>) {
    let value = value.unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("{:<38} {}\n", key, value));
}

fn join<T: Token>(items: &[T]) -> String {
    items.iter().map(Token::as_str).collect::<Vec<_>>().join(",")
}

pub(crate) fn render_text(settings: &ConnectionSettings) -> String {
    let mut out = String::new();
    line(&mut out, "project_id", settings.project_id.clone());
    line(&mut out, "location", settings.location.clone());
    line(&mut out, "dataset_id", settings.dataset_id.clone());
    line(&mut out, "arraysize", settings.array_size.map(|n| n.to_string()));
    line(&mut out, "credentials_path", settings.credentials_path.clone());

    let Some(job) = &settings.job_config else {
        line(&mut out, "job_config", None);
        return out;
    };
    line(&mut out, "clustering_fields", job.clustering_fields.as_ref().map(|f| f.join(",")));
    line(&mut out, "create_disposition", job.create_disposition.map(|d| d.to_string()));
    line(&mut out, "destination", job.destination.as_ref().map(|t| t.to_string()));
    line(
        &mut out,
        "destination_encryption_configuration",
        job.destination_encryption_configuration
            .as_ref()
            .map(|e| e.kms_key_name.clone()),
    );
    line(&mut out, "dry_run", job.dry_run.map(|b| b.to_string()));
    line(
        &mut out,
        "labels",
        job.labels.as_ref().map(|labels| {
            labels
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect::<Vec<_>>()
                .join(",")
        }),
    );
    line(&mut out, "maximum_bytes_billed", job.maximum_bytes_billed.map(|n| n.to_string()));
    line(&mut out, "priority", job.priority.map(|p| p.to_string()));
    line(
        &mut out,
        "schema_update_options",
        job.schema_update_options.as_deref().map(join),
    );
    line(&mut out, "use_query_cache", job.use_query_cache.map(|b| b.to_string()));
    line(&mut out, "write_disposition", job.write_disposition.map(|d| d.to_string()));
    line(
        &mut out,
        "default_dataset",
        job.default_dataset.as_ref().map(|d| {
            job.default_dataset_qualified()
                .unwrap_or_else(|| d.dataset_id.clone())
        }),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_settings_binds_fallback_project() {
        let cfg = BqurlConfig::default();
        let settings = parse_settings("bigquery:///ds?dry_run=true", Some("fallback"), &cfg).unwrap();
        let job = settings.job_config.unwrap();
        assert_eq!(job.default_dataset_qualified().as_deref(), Some("fallback.ds"));
    }

    #[test]
    fn parse_settings_keeps_translate_error() {
        let cfg = BqurlConfig::default();
        let err = parse_settings("bigquery:///?udf_resources=x", None, &cfg).unwrap_err();
        let inner = err.downcast_ref::<bqurl_core::TranslateError>().unwrap();
        assert_eq!(inner.kind(), bqurl_core::ErrorKind::NotImplemented);

        let err = parse_settings("not a url", None, &cfg).unwrap_err();
        assert!(err.downcast_ref::<bqurl_core::TranslateError>().is_some());
    }

    #[test]
    fn render_text_without_job() {
        let cfg = BqurlConfig::default();
        let settings = parse_settings("bigquery://proj?location=EU", None, &cfg).unwrap();
        let text = render_text(&settings);
        assert!(text.contains("project_id"));
        assert!(text.contains("proj"));
        assert!(text.lines().any(|l| l.starts_with("job_config") && l.ends_with('-')));
    }

    #[test]
    fn render_text_with_job() {
        let cfg = BqurlConfig::default();
        let settings = parse_settings(
            "bigquery://proj/ds?schema_update_options=ALLOW_FIELD_ADDITION,ALLOW_FIELD_RELAXATION&labels=a:b",
            None,
            &cfg,
        )
        .unwrap();
        let text = render_text(&settings);
        assert!(text.contains("ALLOW_FIELD_ADDITION,ALLOW_FIELD_RELAXATION"));
        assert!(text.contains("a:b"));
        assert!(text.contains("proj.ds"));
    }
}
