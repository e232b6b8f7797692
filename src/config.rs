use std::env;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub board_id: u64,
    pub project_key: String,
}

/// Reads variables through a lookup function so tests don't touch the
/// process environment.
struct Vars<F> {
    lookup: F,
    missing: Vec<&'static str>,
}

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn new(lookup: F) -> Self {
        Self {
            lookup,
            missing: Vec::new(),
        }
    }

    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&mut self, name: &'static str) -> String {
        match self.optional(name) {
            Some(value) => value,
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    fn finish(self) -> Result<(), ConfigError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(self.missing))
        }
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

impl JiraConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut vars = Vars::new(lookup);
        let base_url = vars.required("JIRA_BASE_URL");
        let email = vars.required("JIRA_API_EMAIL");
        let api_token = vars.required("JIRA_API_TOKEN");
        let timeout = vars.optional("JIRA_TIMEOUT_SECS");
        vars.finish()?;

        let timeout_secs = match timeout {
            Some(value) => parse_number("JIRA_TIMEOUT_SECS", &value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            email,
            api_token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl BoardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut vars = Vars::new(lookup);
        let board_id = vars.required("JIRA_BOARD_ID");
        let project_key = vars.required("JIRA_BOARD_PROJECT_KEY");
        vars.finish()?;

        Ok(Self {
            board_id: parse_number("JIRA_BOARD_ID", &board_id)?,
            project_key,
        })
    }
}

/// `USE_CLOCKIFY` switches on the time-tracking cross reference.
pub fn time_tracking_enabled() -> bool {
    env::var("USE_CLOCKIFY").is_ok_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn reads_jira_config() {
        let config = JiraConfig::from_lookup(lookup(&[
            ("JIRA_BASE_URL", "https://example.atlassian.net/"),
            ("JIRA_API_EMAIL", "me@example.com"),
            ("JIRA_API_TOKEN", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://example.atlassian.net");
        assert_eq!(config.email, "me@example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn lists_every_missing_variable() {
        let err = JiraConfig::from_lookup(lookup(&[("JIRA_API_EMAIL", "me@example.com")])).unwrap_err();

        assert_eq!(err, ConfigError::Missing(vec!["JIRA_BASE_URL", "JIRA_API_TOKEN"]));
        assert_eq!(
            err.to_string(),
            "missing required environment variables: JIRA_BASE_URL, JIRA_API_TOKEN"
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_BASE_URL", "  "),
            ("JIRA_API_EMAIL", "me@example.com"),
            ("JIRA_API_TOKEN", "secret"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing(vec!["JIRA_BASE_URL"]));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let err = JiraConfig::from_lookup(lookup(&[
            ("JIRA_BASE_URL", "https://example.atlassian.net"),
            ("JIRA_API_EMAIL", "me@example.com"),
            ("JIRA_API_TOKEN", "secret"),
            ("JIRA_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { name: "JIRA_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn reads_board_config() {
        let config = BoardConfig::from_lookup(lookup(&[
            ("JIRA_BOARD_ID", "42"),
            ("JIRA_BOARD_PROJECT_KEY", "ABC"),
        ]))
        .unwrap();

        assert_eq!(config.board_id, 42);
        assert_eq!(config.project_key, "ABC");

        let err = BoardConfig::from_lookup(lookup(&[("JIRA_BOARD_ID", "forty-two")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["JIRA_BOARD_PROJECT_KEY"]));
    }
}
