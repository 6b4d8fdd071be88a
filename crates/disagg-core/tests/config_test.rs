//! Tests for the configuration system.

use std::sync::Mutex;

use disagg_core::config::{ConfigOverrides, DisaggConfig, Interpolation, OutputMode};
use disagg_core::errors::ConfigError;
use disagg_core::types::Dimension;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_disagg_env_vars() {
    for key in [
        "DISAGG_POE",
        "DISAGG_THREADS",
        "DISAGG_PARALLEL",
        "DISAGG_DISTANCE_FILTER",
        "DISAGG_OUTPUT",
        "DISAGG_INTERPOLATION",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_disagg_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("disagg.toml"),
        r#"
[engine]
poe = 0.05
threads = 2
parallel = false
"#,
    )
    .unwrap();

    std::env::set_var("DISAGG_THREADS", "8");

    let overrides = ConfigOverrides {
        poe: Some(0.02),
        ..Default::default()
    };

    let config = DisaggConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat the project file.
    assert_eq!(config.engine.poe, Some(0.02));
    // Env beats the project file.
    assert_eq!(config.engine.threads, Some(8));
    // Project file beats defaults.
    assert_eq!(config.engine.parallel, Some(false));

    clear_disagg_env_vars();
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_disagg_env_vars();

    let dir = tempdir();
    let config = DisaggConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.engine.effective_poe(), 0.1);
    assert_eq!(config.engine.effective_output(), OutputMode::Normalized);
    assert_eq!(config.engine.effective_interpolation(), Interpolation::Linear);
    assert!(!config.engine.effective_parallel());
    assert!(!config.engine.effective_distance_filter());
    assert!(config.bins.latitude.is_none());
}

#[test]
fn test_env_output_and_interpolation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_disagg_env_vars();

    let dir = tempdir();
    std::env::set_var("DISAGG_OUTPUT", "raw");
    std::env::set_var("DISAGG_INTERPOLATION", "log_log");

    let config = DisaggConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.engine.output, Some(OutputMode::Raw));
    assert_eq!(config.engine.interpolation, Some(Interpolation::LogLog));

    clear_disagg_env_vars();
}

#[test]
fn test_overrides_cover_interpolation_and_distance_filter() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_disagg_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("disagg.toml"),
        r#"
[engine]
interpolation = "linear"
distance_filter = false
"#,
    )
    .unwrap();
    std::env::set_var("DISAGG_DISTANCE_FILTER", "false");

    let overrides = ConfigOverrides {
        interpolation: Some(Interpolation::LogLog),
        distance_filter: Some(true),
        ..Default::default()
    };
    let config = DisaggConfig::load(dir.path(), Some(&overrides)).unwrap();
    assert_eq!(config.engine.effective_interpolation(), Interpolation::LogLog);
    assert!(config.engine.effective_distance_filter());

    clear_disagg_env_vars();
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_disagg_env_vars();

    let dir = tempdir();
    std::env::set_var("DISAGG_THREADS", "many");

    let config = DisaggConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.engine.threads, None);

    clear_disagg_env_vars();
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_disagg_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("disagg.toml"), "this is not valid toml {{{{").unwrap();

    match DisaggConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_poe_outside_unit_interval_rejected() {
    let config = DisaggConfig::from_toml("[engine]\npoe = 1.5\n").unwrap();
    match DisaggConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "engine.poe"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_zero_threads_rejected() {
    let config = DisaggConfig::from_toml("[engine]\nthreads = 0\n").unwrap();
    assert!(DisaggConfig::validate(&config).is_err());
}

#[test]
fn test_zero_normalization_factor_rejected() {
    let config = DisaggConfig::from_toml("[engine]\noutput = { normalized_by = 0.0 }\n").unwrap();
    assert!(DisaggConfig::validate(&config).is_err());
}

#[test]
fn test_bins_from_toml() {
    let config = DisaggConfig::from_toml(
        r#"
[bins]
latitude = [0.0, 1.0, 2.0]
longitude = [0.0, 1.0, 2.0]
magnitude = [5.0, 6.0, 7.0]
epsilon = [-3.0, 0.0, 3.0]
distance = [0.0, 100.0, 200.0]
"#,
    )
    .unwrap();

    assert_eq!(config.bins.edges(Dimension::Magnitude), Some(&[5.0, 6.0, 7.0][..]));
    assert_eq!(config.bins.edges(Dimension::Distance), Some(&[0.0, 100.0, 200.0][..]));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = DisaggConfig::from_toml("[engine]\npoe = 0.02\nfuture_knob = true\n").unwrap();
    assert_eq!(config.engine.poe, Some(0.02));
}

#[test]
fn test_toml_round_trip() {
    let mut config = DisaggConfig::default();
    config.engine.poe = Some(0.02);
    config.engine.output = Some(OutputMode::NormalizedBy(4.0));
    config.bins.magnitude = Some(vec![5.0, 6.0, 7.0]);

    let text = config.to_toml().unwrap();
    let parsed = DisaggConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}
