use crate::config::ConfigError;
use crate::jira_client::JiraError;
use crate::time_tracking::TimeTrackingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Jira(#[from] JiraError),
    #[error(transparent)]
    TimeTracking(#[from] TimeTrackingError),
    #[error("Board {0} has no unreleased versions")]
    NoUnreleasedVersion(u64),
}
