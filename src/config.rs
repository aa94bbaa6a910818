use std::env;
use std::time::Duration;

use crate::runner::{ModelRunner, DEFAULT_PROGRAM, DEFAULT_TIMEOUT};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub runner_program: String,
    pub runner_timeout: Duration,
}

impl AppConfig {
    /// Reads `PORT`, `MODEL_RUNNER` and `RUNNER_TIMEOUT_MS`, falling back to
    /// defaults when a variable is unset or does not parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let runner_program = lookup("MODEL_RUNNER")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        let runner_timeout = lookup("RUNNER_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            port,
            runner_program,
            runner_timeout,
        }
    }

    pub fn runner(&self) -> ModelRunner {
        ModelRunner::new(&self.runner_program, self.runner_timeout)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.runner_program, "ollama");
        assert_eq!(config.runner_timeout, Duration::from_secs(60));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9100"),
            ("MODEL_RUNNER", "/opt/bin/ollama"),
            ("RUNNER_TIMEOUT_MS", "1500"),
        ]);
        assert_eq!(config.port, 9100);
        assert_eq!(config.runner().program(), "/opt/bin/ollama");
        assert_eq!(config.runner().timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("MODEL_RUNNER", "  "),
            ("RUNNER_TIMEOUT_MS", "-1"),
        ]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.runner_program, "ollama");
        assert_eq!(config.runner_timeout, Duration::from_secs(60));
    }
}
