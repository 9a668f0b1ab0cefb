use crate::config::{
    Config, DEFAULT_TICK_INTERVAL_MS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

use std::{fs, path::PathBuf, time::Duration};

/// WHAT: Defaults match the demo window and clock
/// WHY: A missing config file must produce the documented behavior
#[test]
fn given_no_config_when_using_defaults_then_documented_values() {
    // Given/When: Default config
    let config = Config::default();

    // Then: 400x600 always-on-top window, one-second "time" ticks, any free port
    assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
    assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
    assert!(config.window.always_on_top);
    assert_eq!(config.clock.interval_ms, DEFAULT_TICK_INTERVAL_MS);
    assert_eq!(config.clock.interval(), Duration::from_secs(1));
    assert_eq!(config.clock.event_name, "time");
    assert_eq!(config.server.port, 0);
    assert!(config.server.assets_dir.is_none());
    assert!(!config.tray.attach_window);
    assert_eq!(config.tray.window_offset, 5);
}

/// WHAT: Partial TOML fills the rest from defaults
/// WHY: Users only write the settings they change
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_toml_when_parsing_then_missing_fields_defaulted() {
    // Given: Only a couple of fields set
    let toml = r#"
        [clock]
        interval_ms = 250

        [tray]
        attach_window = true
    "#;

    // When: Parsing
    let config = Config::from_toml_str(toml).unwrap();

    // Then: Set fields kept, everything else default
    assert_eq!(config.clock.interval(), Duration::from_millis(250));
    assert_eq!(config.clock.event_name, "time");
    assert!(config.tray.attach_window);
    assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
    assert_eq!(config.server.port, 0);
}

/// WHAT: Invalid TOML is a config error
/// WHY: A broken file must fail loudly at startup
#[test]
fn given_invalid_toml_when_parsing_then_config_error() {
    // Given/When: Garbage input
    let result = Config::from_toml_str("[window\nwidth = ");

    // Then: ConfigError
    assert!(matches!(result, Err(crate::AppError::ConfigError { .. })));
}

/// WHAT: A zero interval is clamped
/// WHY: A zero sleep would spin the clock loop
#[test]
#[allow(clippy::unwrap_used)]
fn given_zero_interval_when_reading_then_one_millisecond() {
    // Given: interval_ms = 0
    let config = Config::from_toml_str("[clock]\ninterval_ms = 0\n").unwrap();

    // When/Then: Clamped to 1ms
    assert_eq!(config.clock.interval(), Duration::from_millis(1));
}

/// WHAT: Saved config loads back identically
/// WHY: Atomic save must write a complete, parseable file
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_config_when_saved_and_read_then_identical() {
    // Given: A customised config and a scratch directory
    let dir: PathBuf = std::env::temp_dir().join(format!("tray-demo-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");

    let mut config = Config::default();
    config.window.title = "Clock".to_string();
    config.server.port = 34115;
    config.server.assets_dir = Some(PathBuf::from("frontend/dist"));

    // When: Saving then reading back
    config.save_to(&path).unwrap();
    let loaded = Config::from_toml_str(&fs::read_to_string(&path).unwrap()).unwrap();

    // Then: Same values, no temp file left behind
    assert_eq!(loaded, config);
    assert!(!path.with_extension("toml.tmp").exists());

    fs::remove_dir_all(&dir).unwrap();
}
