//! Runtime configuration for the `tuitris` binary.
//!
//! Game rules are fixed constants in `tuitris_types`; only the shell around the
//! engine is configurable. Environment variables are read first, then command
//! line flags override them.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_HIGHSCORE_PATH: &str = "TUITRIS_HIGHSCORE_PATH";
pub const ENV_SEED: &str = "TUITRIS_SEED";
pub const ENV_LOG_PATH: &str = "TUITRIS_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "TUITRIS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub highscore_path: PathBuf,
    /// Fixed piece sequence; `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Tracing output file. Logging is off without one.
    pub log_path: Option<PathBuf>,
    /// `EnvFilter` directives.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let highscore_path = lookup(ENV_HIGHSCORE_PATH)
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or(defaults.highscore_path);

        // An unparsable seed falls back to the clock rather than failing.
        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(ENV_LOG_PATH).and_then(non_empty).map(PathBuf::from);

        let log_filter = lookup(ENV_LOG_FILTER)
            .and_then(non_empty)
            .unwrap_or(defaults.log_filter);

        Self {
            highscore_path,
            seed,
            log_path,
            log_filter,
        }
    }

    /// Apply command line flags (program name already stripped).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--highscores" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --highscores"))?;
                    self.highscore_path = PathBuf::from(v);
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(PathBuf::from(v));
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_from_env_vars() {
        let config = Config::from_lookup(lookup(&[
            (ENV_HIGHSCORE_PATH, "/tmp/scores.json"),
            (ENV_SEED, " 42 "),
            (ENV_LOG_PATH, "tuitris.log"),
            (ENV_LOG_FILTER, "debug"),
        ]));

        assert_eq!(config.highscore_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, Some(PathBuf::from("tuitris.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_or_invalid_env_falls_back() {
        let config = Config::from_lookup(lookup(&[
            (ENV_HIGHSCORE_PATH, "  "),
            (ENV_SEED, "not-a-number"),
            (ENV_LOG_PATH, ""),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_args_override_env() {
        let config = Config::from_lookup(lookup(&[(ENV_SEED, "1")]))
            .apply_args(&args(&["--seed", "7", "--highscores", "s.json", "--log", "t.log"]))
            .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.highscore_path, PathBuf::from("s.json"));
        assert_eq!(config.log_path, Some(PathBuf::from("t.log")));
    }

    #[test]
    fn test_bad_args() {
        let err = Config::default().apply_args(&args(&["--seed"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --seed"));

        let err = Config::default().apply_args(&args(&["--seed", "x"])).unwrap_err();
        assert!(err.to_string().contains("invalid --seed value"));

        let err = Config::default().apply_args(&args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument: --fast"));
    }

    #[test]
    fn test_seed_or_clock_prefers_configured_seed() {
        let config = Config {
            seed: Some(99),
            ..Config::default()
        };
        assert_eq!(config.seed_or_clock(), 99);
    }
}
