mod buckets;
mod config;
mod duration;
mod error;
mod jira_client;
mod models;
mod release;
mod sprint;
mod standup;
mod time_tracking;
mod version;
mod xbar;

use clap::{Parser, Subcommand};
use config::*;
use error::ReportError;
use jira_client::*;

#[derive(Parser, Debug)]
#[command(name = "jira-xbar", about = "Jira reports for xbar and standup notes")]
struct Cli {
    #[command(subcommand)]
    report: Report,
}

#[derive(Subcommand, Debug)]
enum Report {
    /// Issues assigned to you in the open sprint, grouped by status.
    CurrentSprint,
    /// Markdown notes: done since the last standup, in review, doing, blocked.
    StandupNotes {
        /// Days to look back instead of the default (Friday on Mondays, yesterday otherwise).
        #[arg(long, env = "JIRA_STANDUP_OFFSET")]
        offset: Option<u64>,
    },
    /// The board's lowest unreleased version, grouped by status.
    LatestRelease,
    /// Compact view of the lowest unreleased version.
    ReleaseSummary,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.report).await {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::debug!(error = ?e, "report failed");
            eprintln!("{}", error_message(&e));
            std::process::exit(1);
        }
    }
}

async fn run(report: Report) -> Result<String, ReportError> {
    let jira_config = JiraConfig::from_env()?;
    let jira_client = JiraClient::new(&jira_config)?;

    match report {
        Report::CurrentSprint => sprint::current_sprint(&jira_client).await,
        Report::StandupNotes { offset } => {
            let today = chrono::Local::now().date_naive();
            let cutoff = standup::local_midnight(standup::cutoff_date(today, offset)?);
            let worked_on = if time_tracking_enabled() {
                time_tracking::fetch_issues_worked_on().await?
            } else {
                Vec::new()
            };
            standup::standup_notes(&jira_client, cutoff, &worked_on).await
        }
        Report::LatestRelease => {
            let board = BoardConfig::from_env()?;
            let release = release::fetch_latest_release(&jira_client, &board).await?;
            Ok(release::render_dashboard(&release))
        }
        Report::ReleaseSummary => {
            let board = BoardConfig::from_env()?;
            let release = release::fetch_latest_release(&jira_client, &board).await?;
            Ok(release::render_summary(&release))
        }
    }
}

/// The single line written to stderr when a report fails.
fn error_message(e: &ReportError) -> String {
    format!("Error: {e}")
}
