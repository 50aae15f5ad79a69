//! Session configuration: board dimensions and the initial tick interval.

use crate::error::{EngineError, Result};

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 30;
pub const DEFAULT_INTERVAL_MS: u64 = 200;

/// Bounds and granularity a front-end should offer for the speed control.
/// The engine itself accepts any interval.
pub const MIN_INTERVAL_MS: u64 = 50;
pub const MAX_INTERVAL_MS: u64 = 1000;
pub const INTERVAL_STEP_MS: u64 = 50;

pub const ENV_ROWS: &str = "LIFE_ROWS";
pub const ENV_COLS: &str = "LIFE_COLS";
pub const ENV_INTERVAL_MS: &str = "LIFE_INTERVAL_MS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub interval_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by `LIFE_ROWS`, `LIFE_COLS` and `LIFE_INTERVAL_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`LifeConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            rows: parse_positive(ENV_ROWS, lookup(ENV_ROWS), defaults.rows as u64)? as usize,
            cols: parse_positive(ENV_COLS, lookup(ENV_COLS), defaults.cols as u64)? as usize,
            interval_ms: parse_positive(
                ENV_INTERVAL_MS,
                lookup(ENV_INTERVAL_MS),
                defaults.interval_ms,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

fn parse_positive(var: &'static str, value: Option<String>, default: u64) -> Result<u64> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => {
            log::debug!("{var} overridden to {parsed}");
            Ok(parsed)
        }
        _ => Err(EngineError::InvalidEnv { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_match_the_classic_board() {
        let config = LifeConfig::default();
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 30);
        assert_eq!(config.interval_ms, 200);
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = LifeConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = LifeConfig::from_lookup(lookup_from(&[
            (ENV_ROWS, "8"),
            (ENV_COLS, " 12 "),
            (ENV_INTERVAL_MS, "350"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            LifeConfig {
                rows: 8,
                cols: 12,
                interval_ms: 350
            }
        );
    }

    #[test]
    fn zero_or_garbage_is_rejected() {
        let err = LifeConfig::from_lookup(lookup_from(&[(ENV_ROWS, "0")])).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidEnv {
                var: ENV_ROWS,
                value: "0".into()
            }
        );

        let err = LifeConfig::from_lookup(lookup_from(&[(ENV_INTERVAL_MS, "fast")])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEnv { var: ENV_INTERVAL_MS, .. }));
    }

    #[test]
    fn validate_rejects_empty_dimensions() {
        let config = LifeConfig {
            cols: 0,
            ..LifeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(EngineError::EmptyBoard { rows: 20, cols: 0 })
        );
    }
}
