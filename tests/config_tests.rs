//! Configuration module tests

use marking_api::config::settings::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASS, DEFAULT_DB_PORT, DEFAULT_DB_USER,
};
use marking_api::config::source::read_override_file;
use marking_api::config::{ConfigSource, Settings};
use marking_api::ConfigError;
use secrecy::ExposeSecret;
use std::collections::HashMap;
use std::io::Write;

const DB_VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_USER", "DB_PASS", "DB_NAME"];

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn source(env: &[(&str, &str)], file: &[(&str, &str)]) -> ConfigSource {
    let env = to_map(env);
    ConfigSource::new(move |key| env.get(key).cloned(), to_map(file))
}

/// Database fields rendered as strings, in `DB_VARS` order
fn db_fields(settings: &Settings) -> [String; 5] {
    let db = settings.database();
    [
        db.host.clone(),
        db.port.to_string(),
        db.user.clone(),
        db.password.expose_secret().to_string(),
        db.name.clone(),
    ]
}

fn defaults() -> [String; 5] {
    [
        DEFAULT_DB_HOST.to_string(),
        DEFAULT_DB_PORT.to_string(),
        DEFAULT_DB_USER.to_string(),
        DEFAULT_DB_PASS.to_string(),
        DEFAULT_DB_NAME.to_string(),
    ]
}

fn env_value(var: &str) -> &'static str {
    match var {
        "DB_PORT" => "4406",
        "DB_HOST" => "db.env.internal",
        "DB_USER" => "env_user",
        "DB_PASS" => "env_secret",
        _ => "env_db",
    }
}

fn file_value(var: &str) -> &'static str {
    match var {
        "DB_PORT" => "5506",
        "DB_HOST" => "db.file.internal",
        "DB_USER" => "file_user",
        "DB_PASS" => "file_secret",
        _ => "file_db",
    }
}

#[test]
fn test_literal_defaults() {
    let settings = Settings::from_source(&source(&[], &[])).unwrap();
    let db = settings.database();

    assert_eq!(db.host, "127.0.0.1");
    assert_eq!(db.port, 3306);
    assert_eq!(db.user, "root");
    assert_eq!(db.password.expose_secret(), "password");
    assert_eq!(db.name, "hackathon_db");
}

#[test]
fn test_each_variable_layers_independently() {
    for (index, var) in DB_VARS.iter().enumerate() {
        // (set in env, set in file)
        for (in_env, in_file) in [(false, false), (false, true), (true, false), (true, true)] {
            let env: Vec<(&str, &str)> = if in_env { vec![(*var, env_value(var))] } else { vec![] };
            let file: Vec<(&str, &str)> = if in_file { vec![(*var, file_value(var))] } else { vec![] };

            let settings = Settings::from_source(&source(&env, &file)).unwrap();
            let fields = db_fields(&settings);

            let expected = if in_env {
                env_value(var).to_string()
            } else if in_file {
                file_value(var).to_string()
            } else {
                defaults()[index].clone()
            };

            assert_eq!(fields[index], expected, "{} env={} file={}", var, in_env, in_file);

            // Every other field keeps its default
            for (other, value) in fields.iter().enumerate() {
                if other != index {
                    assert_eq!(value, &defaults()[other], "{} leaked into {}", var, DB_VARS[other]);
                }
            }
        }
    }
}

#[test]
fn test_all_variables_combined() {
    let env = [("DB_HOST", "env-host"), ("DB_PASS", "env-pass")];
    let file = [
        ("DB_HOST", "file-host"),
        ("DB_PORT", "3310"),
        ("DB_USER", "file-user"),
    ];

    let settings = Settings::from_source(&source(&env, &file)).unwrap();
    assert_eq!(
        db_fields(&settings),
        [
            "env-host".to_string(),
            "3310".to_string(),
            "file-user".to_string(),
            "env-pass".to_string(),
            "hackathon_db".to_string(),
        ]
    );
}

#[test]
fn test_non_numeric_port_names_field() {
    let result = Settings::from_source(&source(&[("DB_PORT", "abc")], &[]));

    match result {
        Err(ConfigError::InvalidValue { field, value, .. }) => {
            assert_eq!(field, "DB_PORT");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected invalid value error, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_port_in_file_names_field() {
    let err = Settings::from_source(&source(&[], &[("DB_PORT", "three")])).unwrap_err();
    assert_eq!(err.field(), "DB_PORT");
    assert!(err.to_string().contains("DB_PORT"));
}

#[test]
fn test_env_value_masks_bad_file_value() {
    let settings =
        Settings::from_source(&source(&[("DB_PORT", "3307")], &[("DB_PORT", "abc")])).unwrap();
    assert_eq!(settings.database().port, 3307);
}

#[test]
fn test_zero_port_rejected() {
    let err = Settings::from_source(&source(&[("SERVER_PORT", "0")], &[])).unwrap_err();
    assert_eq!(err.field(), "SERVER_PORT");
}

#[test]
fn test_invalid_log_format_rejected() {
    let err = Settings::from_source(&source(&[("LOG_FORMAT", "xml")], &[])).unwrap_err();
    assert_eq!(err.field(), "LOG_FORMAT");
}

#[test]
fn test_invalid_cors_flag_rejected() {
    let err = Settings::from_source(&source(&[("CORS_ENABLED", "maybe")], &[])).unwrap_err();
    assert_eq!(err.field(), "CORS_ENABLED");
}

#[test]
fn test_allowed_origins_list() {
    let settings = Settings::from_source(&source(
        &[("ALLOWED_ORIGINS", "http://localhost:5173, http://127.0.0.1:8080")],
        &[],
    ))
    .unwrap();

    let security = settings.security();
    assert_eq!(
        security.allowed_origins,
        vec!["http://localhost:5173".to_string(), "http://127.0.0.1:8080".to_string()]
    );
    assert!(!security.allows_any_origin());
}

#[test]
fn test_override_file_parsing() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# local overrides").unwrap();
    writeln!(file, "DB_HOST=db.local").unwrap();
    writeln!(file, "DB_PORT=3307").unwrap();
    writeln!(file, "SOMETHING_ELSE=ignored").unwrap();
    file.flush().unwrap();

    let pairs = read_override_file(file.path()).unwrap();
    assert_eq!(pairs.get("DB_HOST").map(String::as_str), Some("db.local"));

    let settings = Settings::from_source(&ConfigSource::new(|_| None, pairs)).unwrap();
    assert_eq!(settings.database().host, "db.local");
    assert_eq!(settings.database().port, 3307);
    assert_eq!(settings.database().name, "hackathon_db");
}

#[test]
fn test_unparsable_line_keeps_surrounding_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DB_HOST=db.local").unwrap();
    writeln!(file, "oops no equals").unwrap();
    writeln!(file, "DB_NAME=grades").unwrap();
    file.flush().unwrap();

    let pairs = read_override_file(file.path()).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs.get("DB_HOST").map(String::as_str), Some("db.local"));
    assert_eq!(pairs.get("DB_NAME").map(String::as_str), Some("grades"));

    let settings = Settings::from_source(&ConfigSource::new(|_| None, pairs)).unwrap();
    assert_eq!(settings.database().host, "db.local");
    assert_eq!(settings.database().name, "grades");
}

#[test]
fn test_lowercase_override_keys_apply() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "db_user=grader").unwrap();
    file.flush().unwrap();

    let pairs = read_override_file(file.path()).unwrap();
    let settings = Settings::from_source(&ConfigSource::new(|_| None, pairs)).unwrap();
    assert_eq!(settings.database().user, "grader");
}

#[test]
fn test_load_from_layers_process_env_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "SERVER_PORT=9200").unwrap();
    writeln!(file, "not a pair").unwrap();
    writeln!(file, "DB_NAME=from_file_db").unwrap();
    file.flush().unwrap();

    // Only this test touches the process environment in this binary
    std::env::set_var("SERVER_PORT", "9100");
    let loaded = Settings::load_from(&path);
    std::env::remove_var("SERVER_PORT");

    let settings = loaded.unwrap();
    assert_eq!(settings.server().port, 9100);
    assert_eq!(settings.database().name, "from_file_db");
    assert_eq!(settings.database().host, "127.0.0.1");
    assert!(std::env::var("DB_NAME").is_err());
}

#[test]
fn test_missing_override_file_is_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let pairs = read_override_file(&dir.path().join(".env")).unwrap();
    assert!(pairs.is_empty());
}
