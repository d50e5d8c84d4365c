use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert!(cfg.api_token.is_none());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.max_concurrent_queries, 8);
    assert_eq!(cfg.export_path.to_str(), Some("empresas_resultado.csv"));
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("DENUE_API_TOKEN", "abc-123");
    map.insert("DENUE_BASE_URL", "http://localhost:9999/consulta");
    map.insert("DENUE_REQUEST_TIMEOUT_SECS", "5");
    map.insert("DENUE_MAX_CONCURRENT_QUERIES", "2");
    map.insert("DENUE_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_token.as_deref(), Some("abc-123"));
    assert_eq!(cfg.base_url, "http://localhost:9999/consulta");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.max_concurrent_queries, 2);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn blank_token_counts_as_missing() {
    let mut map = HashMap::new();
    map.insert("DENUE_API_TOKEN", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_token.is_none());
}

#[test]
fn build_app_config_fails_with_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("DENUE_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DENUE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(DENUE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_concurrency() {
    let mut map = HashMap::new();
    map.insert("DENUE_MAX_CONCURRENT_QUERIES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DENUE_MAX_CONCURRENT_QUERIES"),
        "expected InvalidEnvVar(DENUE_MAX_CONCURRENT_QUERIES), got: {result:?}"
    );
}

#[test]
fn resolve_token_prefers_explicit_value() {
    let mut map = HashMap::new();
    map.insert("DENUE_API_TOKEN", "from-env");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.resolve_token(Some("from-flag")).unwrap(), "from-flag");
    assert_eq!(cfg.resolve_token(Some("  ")).unwrap(), "from-env");
    assert_eq!(cfg.resolve_token(None).unwrap(), "from-env");
}

#[test]
fn resolve_token_fails_when_absent() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let err = cfg.resolve_token(None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "DENUE_API_TOKEN"));
}

#[test]
fn debug_output_redacts_token() {
    let mut map = HashMap::new();
    map.insert("DENUE_API_TOKEN", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
