use itertools::Itertools;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;
use tokio::process::Command;

const CLOCKIFY_COMMAND: &str = "clockify-cli";
const CLOCKIFY_ARGS: [&str; 3] = ["report", "yesterday", "--json"];

static ISSUE_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("valid issue key pattern"));

#[derive(Error, Debug)]
pub enum TimeTrackingError {
    #[error("Error running: {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("Error running: {command} {stderr}")]
    Failed { command: String, stderr: String },
    #[error("Failed to decode time report: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    pub description: String,
}

/// Issue keys written as `[ABC-123]` in a time entry description. Only
/// literal square brackets are recognised.
pub fn extract_issue_keys(description: &str) -> Vec<String> {
    ISSUE_KEY_PATTERN
        .captures_iter(description)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Keys mentioned across a report, first occurrence order.
pub fn issue_keys_in_report(report: &str) -> Result<Vec<String>, TimeTrackingError> {
    let entries: Option<Vec<TimeEntry>> = serde_json::from_str(report)?;

    Ok(entries
        .unwrap_or_default()
        .iter()
        .flat_map(|entry| extract_issue_keys(&entry.description))
        .unique()
        .collect())
}

/// Runs the Clockify CLI for yesterday's report and returns the issue keys
/// worked on.
pub async fn fetch_issues_worked_on() -> Result<Vec<String>, TimeTrackingError> {
    let command_line = std::iter::once(CLOCKIFY_COMMAND)
        .chain(CLOCKIFY_ARGS)
        .join(" ");
    tracing::debug!(command = %command_line, "running time report");

    let output = Command::new(CLOCKIFY_COMMAND)
        .args(CLOCKIFY_ARGS)
        .stdin(std::process::Stdio::null())
        .output()
        .await
        .map_err(|source| TimeTrackingError::Spawn {
            command: command_line.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(TimeTrackingError::Failed {
            command: command_line,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let keys = issue_keys_in_report(&String::from_utf8_lossy(&output.stdout))?;
    tracing::info!(keys = keys.len(), "time report parsed");
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bracketed_keys() {
        assert_eq!(
            extract_issue_keys("[ABC-1] login page, pairing on [ABC-22]"),
            vec!["ABC-1", "ABC-22"]
        );
        assert!(extract_issue_keys("standup ABC-1").is_empty());
        assert_eq!(extract_issue_keys("[] empty"), vec![""]);
    }

    #[test]
    fn collects_unique_keys_from_report() {
        let report = r#"[
            { "description": "[ABC-1] api" },
            { "description": "meeting" },
            { "description": "[ABC-2] ui [ABC-1]" },
            { "id": "no description" }
        ]"#;

        assert_eq!(issue_keys_in_report(report).unwrap(), vec!["ABC-1", "ABC-2"]);
    }

    #[test]
    fn null_report_has_no_keys() {
        assert!(issue_keys_in_report("null").unwrap().is_empty());
        assert!(matches!(
            issue_keys_in_report("not json"),
            Err(TimeTrackingError::Decode(_))
        ));
    }
}
