//! Runtime configuration, read once from the environment.
//!
//! There are no command-line flags. Unset or unparsable values fall back to
//! their defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    /// Sleep between generations
    pub frame_interval: Duration,
    /// Directory that receives `tui-life.log`
    pub log_dir: PathBuf,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(FRAME_MS),
            log_dir: env::temp_dir(),
        }
    }
}

impl LifeConfig {
    /// `TUI_LIFE_FRAME_MS` and `TUI_LIFE_LOG_DIR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let frame_interval = lookup("TUI_LIFE_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame_interval);

        let log_dir = lookup("TUI_LIFE_LOG_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            frame_interval,
            log_dir,
        }
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
    fn empty_environment_uses_defaults() {
        assert_eq!(LifeConfig::from_lookup(lookup(&[])), LifeConfig::default());
    }

    #[test]
    fn frame_interval_override() {
        let config = LifeConfig::from_lookup(lookup(&[("TUI_LIFE_FRAME_MS", " 100 ")]));
        assert_eq!(config.frame_interval, Duration::from_millis(100));
    }

    #[test]
    fn bad_frame_interval_falls_back() {
        for bad in ["0", "-5", "fast", ""] {
            let config = LifeConfig::from_lookup(lookup(&[("TUI_LIFE_FRAME_MS", bad)]));
            assert_eq!(config.frame_interval, Duration::from_millis(FRAME_MS));
        }
    }

    #[test]
    fn log_dir_override() {
        let config = LifeConfig::from_lookup(lookup(&[("TUI_LIFE_LOG_DIR", "/var/log/life")]));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/life"));

        let blank = LifeConfig::from_lookup(lookup(&[("TUI_LIFE_LOG_DIR", "  ")]));
        assert_eq!(blank.log_dir, env::temp_dir());
    }
}
