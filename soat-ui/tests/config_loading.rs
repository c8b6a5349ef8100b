//! Loads configuration files from disk, complementing the inline-string
//! tests inside config.rs.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use soat_ui::{
    components::WindowPreferences,
    config::{AppConfig, ConfigError, ConfigOverrides, WindowConfig},
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_file() {
    let config = AppConfig::load(&fixture("soat-quotes.toml")).expect("fixture should load");

    assert_eq!(config.log_level, "soat_core=trace,info");
    assert!(!config.log_stdout);
    assert_eq!(config.log_file, None);
    assert_eq!(
        config.window,
        WindowConfig {
            width: 1024.0,
            height: 768.0
        }
    );
}

#[test]
fn test_explicit_path_is_used_over_default_lookup() {
    let path = fixture("soat-quotes.toml");
    let config = AppConfig::load_or_default(Some(&path)).unwrap();

    assert_eq!(config.window.width, 1024.0);
}

#[test]
fn test_type_mismatch_reports_parse_error_with_path() {
    let path = fixture("broken.toml");

    match AppConfig::load(&path) {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_cli_overrides_apply_on_top_of_file() {
    let mut config = AppConfig::load(&fixture("soat-quotes.toml")).unwrap();

    config.apply_overrides(ConfigOverrides {
        log_level: Some("warn".to_string()),
        log_file: None,
        quiet: false,
    });

    assert_eq!(config.log_level, "warn");
    // quiet=false never turns stdout back on
    assert!(!config.log_stdout);
}

#[test]
fn test_window_preferences_follow_config() {
    let config = AppConfig::load(&fixture("soat-quotes.toml")).unwrap();
    let preferences = WindowPreferences::from(config.window);

    assert_eq!(preferences.size.width, gpui::px(1024.0));
    assert_eq!(preferences.size.height, gpui::px(768.0));
}
