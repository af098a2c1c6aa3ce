use super::*;

#[test]
fn defaults_to_local_api_and_demo_login() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.api.timeout, Duration::from_secs(30));
    assert_eq!(cfg.auth_mode, AuthMode::LocalDemo);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_values(Some("https://wms.example/api/ "), None).unwrap();
    assert_eq!(cfg.api.base_url, "https://wms.example/api");
}

#[test]
fn empty_base_url_is_rejected() {
    assert_eq!(ClientConfig::from_values(Some(" / "), None), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn auth_mode_parses_case_insensitively() {
    assert_eq!(parse_auth_mode(Some("Remote")).unwrap(), AuthMode::Remote);
    assert_eq!(parse_auth_mode(Some("DEMO")).unwrap(), AuthMode::LocalDemo);
    assert_eq!(parse_auth_mode(Some("")).unwrap(), AuthMode::LocalDemo);
}

#[test]
fn unknown_auth_mode_is_an_error() {
    let err = ClientConfig::from_values(None, Some("ldap")).unwrap_err();
    assert_eq!(err, ConfigError::UnknownAuthMode("ldap".to_owned()));
    assert!(err.to_string().contains("ldap"));
}

#[test]
fn build_env_config_uses_fixed_timeout() {
    let cfg = ClientConfig::from_build_env();
    assert_eq!(cfg.api.timeout, REQUEST_TIMEOUT);
    assert_eq!(cfg.login_delay, DEMO_LOGIN_DELAY);
}
