//! Tests for request configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        budget_millions = 120.5
        formation = "4-3-3"
        style = "defend"

        [locks]
        "M. Salah" = "RW"
        "V. van Dijk" = "CB"

        [age_band]
        min = 20
        max = 28

        [solver]
        time_limit_seconds = 30
    "#;

    let config = RequestConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.budget_millions, 120.5);
    assert_eq!(config.formation, "4-3-3");
    assert_eq!(config.style, Style::Defend);
    assert_eq!(config.locks.len(), 2);
    assert_eq!(config.locks["M. Salah"], Role::RW);
    assert_eq!(
        config.age_band,
        Some(AgeBandConfig::Range { min: 20, max: 28 })
    );
    assert_eq!(config.solver.time_limit_seconds, Some(30));
}

#[test]
fn test_defaults() {
    let config = RequestConfig::from_toml_str("").unwrap();
    assert_eq!(config.budget_millions, 80.0);
    assert_eq!(config.formation, "4-3-3");
    assert_eq!(config.style, Style::Attack);
    assert!(config.locks.is_empty());
    assert!(config.age_band.is_none());
    assert!(config.solver.time_limit_seconds.is_none());
}

#[test]
fn test_unknown_field_rejected() {
    assert!(RequestConfig::from_toml_str("bud_get = 3").is_err());
}

#[test]
fn test_into_request_converts_millions_to_eur() {
    let request = RequestConfig::new()
        .with_budget_millions(80.0)
        .into_request()
        .unwrap();
    assert_eq!(request.budget_eur, 80_000_000.0);
}

#[test]
fn test_into_request_parses_formation_and_locks() {
    let request = RequestConfig::new()
        .with_formation("3-5-2")
        .with_lock("M. Salah", Role::RW)
        .into_request()
        .unwrap();
    assert_eq!(request.formation, Formation::new(3, 5, 2));
    assert_eq!(request.locks.role_for("M. Salah"), Some(Role::RW));
}

#[test]
fn test_age_band_preset_resolution() {
    let config = RequestConfig::from_toml_str(r#"age_band = "28-32""#).unwrap();
    let request = config.into_request().unwrap();
    assert_eq!(request.age_band, Some(AgeBand::new(28, 32)));

    assert_eq!(age_band_preset("U20"), Some(AgeBand::new(12, 20)));
    assert_eq!(age_band_preset("<45"), Some(AgeBand::new(12, 45)));
    assert_eq!(age_band_preset("veterans-only"), None);
}

#[test]
fn test_unknown_preset_is_invalid() {
    let config = RequestConfig::from_toml_str(r#"age_band = "veterans-only""#).unwrap();
    let err = config.into_request().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_inverted_age_range_is_invalid() {
    let config = RequestConfig::new().with_age_band(AgeBandConfig::Range { min: 30, max: 20 });
    assert!(config.into_request().is_err());
}

#[test]
fn test_bad_formation_is_invalid() {
    let config = RequestConfig::new().with_formation("four-four-two");
    let err = config.into_request().unwrap_err();
    assert!(err.to_string().contains("formation"));
}

#[test]
fn test_negative_budget_is_invalid() {
    let config = RequestConfig::new().with_budget_millions(-1.0);
    assert!(config.into_request().is_err());
}

#[test]
fn test_time_limit_becomes_duration() {
    let config = RequestConfig::from_toml_str("[solver]\ntime_limit_seconds = 5").unwrap();
    let request = config.into_request().unwrap();
    assert_eq!(request.time_limit, Some(Duration::from_secs(5)));
}
