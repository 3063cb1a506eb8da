//! Runtime configuration from environment variables.
//!
//! - `TERM_TETRIS_LOG`: log file path; logging is off when unset or empty
//! - `TERM_TETRIS_SEED`: u64 seed for the piece randomizer; entropy when unset
//!
//! Log verbosity follows the usual `RUST_LOG` directives.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const LOG_PATH_VAR: &str = "TERM_TETRIS_LOG";
pub const SEED_VAR: &str = "TERM_TETRIS_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Config {
    /// Create from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup, e.g. a map in tests
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let seed = match lookup(SEED_VAR).map(|s| s.trim().to_string()) {
            Some(s) if !s.is_empty() => Some(
                s.parse::<u64>()
                    .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {s:?}"))?,
            ),
            _ => None,
        };

        Ok(Self { log_path, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_log_path_and_seed() {
        let config =
            Config::from_lookup(lookup(&[(LOG_PATH_VAR, " game.log "), (SEED_VAR, "42")])).unwrap();
        assert_eq!(config.log_path, Some(PathBuf::from("game.log")));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(LOG_PATH_VAR, "  "), (SEED_VAR, "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn bad_seed_is_an_error() {
        let err = Config::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));
    }
}
