//! Tests for configuration loading and validation.

use kaizen_core::config::{defaults, KaizenConfig, WellnessConfig};
use kaizen_core::errors::{ConfigError, KaizenError};

// ── Defaults ──

#[test]
fn empty_toml_yields_defaults() {
    let config = KaizenConfig::from_toml("").unwrap();

    assert_eq!(config.wellness.sleep_quality_weight, defaults::DEFAULT_SLEEP_QUALITY_WEIGHT);
    assert_eq!(config.wellness.steps_weight, defaults::DEFAULT_STEPS_WEIGHT);
    assert_eq!(config.wellness.exercise_weight, defaults::DEFAULT_EXERCISE_WEIGHT);
    assert_eq!(config.wellness.stand_weight, defaults::DEFAULT_STAND_WEIGHT);
    assert_eq!(config.wellness.steps_target, defaults::DEFAULT_STEPS_TARGET);
    assert_eq!(config.wellness.exercise_target_minutes, 30.0);
    assert_eq!(config.wellness.stand_target_hours, 12.0);
}

#[test]
fn default_struct_matches_empty_toml() {
    let from_toml = KaizenConfig::from_toml("").unwrap();
    assert_eq!(from_toml, KaizenConfig::default());
}

// ── Overrides ──

#[test]
fn partial_override_keeps_other_defaults() {
    let toml = r#"
        [wellness]
        steps_target = 12000.0
        stand_weight = 0.2
    "#;
    let config = KaizenConfig::from_toml(toml).unwrap();

    assert_eq!(config.wellness.steps_target, 12000.0);
    assert_eq!(config.wellness.stand_weight, 0.2);
    assert_eq!(config.wellness.sleep_quality_weight, defaults::DEFAULT_SLEEP_QUALITY_WEIGHT);
    assert_eq!(config.wellness.exercise_target_minutes, 30.0);
}

// ── Validation ──

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = KaizenConfig::from_toml("wellness = nonsense").unwrap_err();
    assert!(matches!(err, KaizenError::Config(ConfigError::Parse(_))));
}

#[test]
fn negative_weight_is_rejected() {
    let toml = r#"
        [wellness]
        steps_weight = -0.25
    "#;
    let err = KaizenConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, KaizenError::Config(ConfigError::InvalidWeights { .. })));
}

#[test]
fn all_zero_weights_are_rejected() {
    let toml = r#"
        [wellness]
        sleep_quality_weight = 0.0
        steps_weight = 0.0
        exercise_weight = 0.0
        stand_weight = 0.0
    "#;
    let err = KaizenConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, KaizenError::Config(ConfigError::InvalidWeights { .. })));
}

#[test]
fn zero_target_is_rejected() {
    let toml = r#"
        [wellness]
        steps_target = 0.0
    "#;
    let err = KaizenConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, KaizenError::Config(ConfigError::InvalidTarget { .. })));
}

#[test]
fn single_zero_weight_is_allowed() {
    let toml = r#"
        [wellness]
        steps_weight = 0.0
    "#;
    let config = KaizenConfig::from_toml(toml).unwrap();
    assert_eq!(config.wellness.steps_weight, 0.0);
    assert!(config.wellness.validate().is_ok());
}

#[test]
fn validate_reports_nan_weight() {
    let config = WellnessConfig {
        exercise_weight: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidWeights { .. })));
}
