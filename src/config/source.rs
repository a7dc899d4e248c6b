//! Layered configuration sources
//!
//! Values are looked up in the process environment first, then in the
//! `.env` override file, then fall back to the compiled-in default. Keys are
//! matched without regard to case.

use crate::utils::error::ConfigError;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Key/value source for settings
pub struct ConfigSource {
    env: EnvLookup,
    overrides: HashMap<String, String>,
}

impl ConfigSource {
    /// Build a source from an environment lookup and override-file pairs
    pub fn new<F>(env: F, overrides: HashMap<String, String>) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        let overrides = overrides
            .into_iter()
            .map(|(key, value)| (key.to_ascii_uppercase(), value))
            .collect();

        Self {
            env: Box::new(env),
            overrides,
        }
    }

    /// Source backed by the real process environment and the given override file
    pub fn from_process(override_file: &Path) -> Result<Self, ConfigError> {
        let overrides = read_override_file(override_file)?;
        Ok(Self::new(process_var, overrides))
    }

    /// Raw value for a key, environment first
    pub fn get(&self, key: &str) -> Option<String> {
        (self.env)(key)
            .or_else(|| (self.env)(&key.to_ascii_lowercase()))
            .or_else(|| self.overrides.get(&key.to_ascii_uppercase()).cloned())
    }

    /// String value or default
    pub fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parsed value or default; a present but unparsable value is an error
    pub fn parse<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
                field: key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        }
    }
}

/// Process environment lookup; an exact match wins over a differently cased one
fn process_var(key: &str) -> Option<String> {
    std::env::var(key).ok().or_else(|| {
        std::env::vars()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

/// Read `KEY=VALUE` pairs from an override file without touching the process environment
///
/// A missing file yields an empty map. Lines that do not parse are skipped with
/// a warning; only a file that cannot be opened or read is an error.
pub fn read_override_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.is_file() {
        debug!("No override file at {}", path.display());
        return Ok(HashMap::new());
    }

    let file_error = |reason: String| ConfigError::OverrideFile {
        path: path.to_path_buf(),
        reason,
    };

    let mut pairs = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(|e| file_error(e.to_string()))? {
        match item {
            Ok((key, value)) => {
                pairs.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                warn!(
                    "Skipping unparsable line in {}: {:?} (at index {})",
                    path.display(),
                    line,
                    index
                );
            }
            Err(e) => return Err(file_error(e.to_string())),
        }
    }

    debug!("Loaded {} entries from {}", pairs.len(), path.display());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(env: &[(&str, &str)], file: &[(&str, &str)]) -> ConfigSource {
        let env: HashMap<String, String> = env.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let file = file.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ConfigSource::new(move |key| env.get(key).cloned(), file)
    }

    #[test]
    fn test_environment_wins_over_file() {
        let source = source(&[("DB_HOST", "env-host")], &[("DB_HOST", "file-host")]);
        assert_eq!(source.string("DB_HOST", "default"), "env-host");
    }

    #[test]
    fn test_file_wins_over_default() {
        let source = source(&[], &[("DB_NAME", "from_file")]);
        assert_eq!(source.string("DB_NAME", "hackathon_db"), "from_file");
        assert_eq!(source.string("DB_USER", "root"), "root");
    }

    #[test]
    fn test_parse_reports_field() {
        let source = source(&[("DB_PORT", "abc")], &[]);
        let err = source.parse::<u16>("DB_PORT", 3306).unwrap_err();
        assert_eq!(err.field(), "DB_PORT");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let source = source(&[("DB_PORT", " 3307 ")], &[]);
        assert_eq!(source.parse::<u16>("DB_PORT", 3306).unwrap(), 3307);
    }

    #[test]
    fn test_keys_match_without_case() {
        let source = source(&[("server_port", "9001")], &[("db_host", "file-host")]);
        assert_eq!(source.string("DB_HOST", "default"), "file-host");
        assert_eq!(source.parse::<u16>("SERVER_PORT", 8000).unwrap(), 9001);
    }

    #[test]
    fn test_missing_override_file_is_empty() {
        let pairs = read_override_file(Path::new("/definitely/not/here/.env")).unwrap();
        assert!(pairs.is_empty());
    }
}
