//! Layered configuration
//!
//! Values are resolved in order: built-in defaults, then a TOML file, then
//! `MINI_WORDLE_*` environment variables. Command-line flags are applied on
//! top by the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "MINI_WORDLE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Enforce hard mode from the first guess
    pub hard_mode: bool,
    /// Show the elapsed-time counter
    pub timer_mode: bool,
    /// Seed for target selection; random when unset
    pub seed: Option<u64>,
    /// Custom answer pool instead of the embedded one
    pub wordlist: Option<PathBuf>,
    /// How long the short-entry warning stays up
    pub short_entry_ms: u64,
    /// How long the hard-mode warning stays up
    pub hard_mode_ms: u64,
    /// Write logs here instead of stderr (or nowhere, in the TUI)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hard_mode: false,
            timer_mode: false,
            seed: None,
            wordlist: None,
            short_entry_ms: 3000,
            hard_mode_ms: 1000,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

impl Config {
    /// Load configuration from `path` (or `$MINI_WORDLE_CONFIG`) and the
    /// process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if an
    /// environment override does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an explicit environment lookup
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = path
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).filter(|p| !p.is_empty()).map(PathBuf::from));

        let mut cfg = match file {
            Some(file) => Self::from_file(&file)?,
            None => Self::default(),
        };
        cfg.apply_env(env)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML config file; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let var = |key: &str| env(key).filter(|v| !v.is_empty());

        if let Some(v) = var("MINI_WORDLE_HARD") {
            self.hard_mode = parse_bool("MINI_WORDLE_HARD", &v)?;
        }
        if let Some(v) = var("MINI_WORDLE_TIMER") {
            self.timer_mode = parse_bool("MINI_WORDLE_TIMER", &v)?;
        }
        if let Some(v) = var("MINI_WORDLE_SEED") {
            let seed = v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MINI_WORDLE_SEED",
                value: v.clone(),
            })?;
            self.seed = Some(seed);
        }
        if let Some(v) = var("MINI_WORDLE_WORDLIST") {
            self.wordlist = Some(PathBuf::from(v));
        }
        Ok(())
    }

    /// Check values that parse but make no sense
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroDuration` for a zero warning duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_entry_ms == 0 {
            return Err(ConfigError::ZeroDuration("short_entry_ms"));
        }
        if self.hard_mode_ms == 0 {
            return Err(ConfigError::ZeroDuration("hard_mode_ms"));
        }
        Ok(())
    }

    #[must_use]
    pub const fn short_entry_duration(&self) -> Duration {
        Duration::from_millis(self.short_entry_ms)
    }

    #[must_use]
    pub const fn hard_mode_duration(&self) -> Duration {
        Duration::from_millis(self.hard_mode_ms)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn defaults() {
        let cfg = Config::load_with(None, env_from(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.short_entry_duration(), Duration::from_secs(3));
        assert_eq!(cfg.hard_mode_duration(), Duration::from_secs(1));
    }

    #[test]
    fn file_overrides_defaults() {
        let file = config_file("hard_mode = true\nseed = 9\nshort_entry_ms = 500\n");
        let cfg = Config::load_with(Some(file.path()), env_from(&[])).unwrap();

        assert!(cfg.hard_mode);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.short_entry_ms, 500);
        assert_eq!(cfg.hard_mode_ms, 1000);
    }

    #[test]
    fn config_path_from_env() {
        let file = config_file("timer_mode = true\n");
        let path = file.path().to_string_lossy().into_owned();
        let cfg = Config::load_with(None, env_from(&[(CONFIG_ENV, &path)])).unwrap();
        assert!(cfg.timer_mode);
    }

    #[test]
    fn env_overrides_file() {
        let file = config_file("hard_mode = true\nseed = 9\n");
        let env = env_from(&[
            ("MINI_WORDLE_HARD", "off"),
            ("MINI_WORDLE_SEED", "123"),
            ("MINI_WORDLE_WORDLIST", "words.txt"),
        ]);
        let cfg = Config::load_with(Some(file.path()), env).unwrap();

        assert!(!cfg.hard_mode);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.wordlist, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn empty_env_values_ignored() {
        let cfg = Config::load_with(None, env_from(&[("MINI_WORDLE_SEED", "")])).unwrap();
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn bad_env_value_rejected() {
        let err = Config::load_with(None, env_from(&[("MINI_WORDLE_SEED", "abc")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "MINI_WORDLE_SEED",
                ..
            }
        ));

        let err = Config::load_with(None, env_from(&[("MINI_WORDLE_HARD", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn unknown_key_rejected() {
        let file = config_file("hardmode = true\n");
        let err = Config::load_with(Some(file.path()), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_duration_rejected() {
        let file = config_file("hard_mode_ms = 0\n");
        let err = Config::load_with(Some(file.path()), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDuration("hard_mode_ms")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err =
            Config::load_with(Some(Path::new("/no/such/config.toml")), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
