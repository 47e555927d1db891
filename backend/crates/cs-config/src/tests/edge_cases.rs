use crate::{Config, ConfigSection};
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guards) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert_eq!(error.section(), None);
    assert_that!(format!("{}", error), contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_invalid_log_level_in_toml_when_load_then_defaults_to_info() {
    // Given
    let (temp, _guards) = setup_config_dir();
    write_config(
        &temp,
        r#"
              [logging]
              level = "chatty"
          "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(log::LevelFilter::Info));
}

#[test]
#[serial]
fn given_log_file_with_traversal_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _file = EnvGuard::set("CS_LOG_FILE", "../../etc/evil.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let error = result.unwrap_err();
    assert_eq!(error.section(), Some(ConfigSection::Logging));
    assert_that!(format!("{}", error), contains_substring(".."));
}

#[test]
#[serial]
fn given_colored_env_zero_when_load_then_colored_disabled() {
    // Given
    let _env = setup_config_dir();
    let _colored = EnvGuard::set("CS_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.colored, eq(false));
}
