use crate::config::ConfigError;
use crate::error::ReportError;
use crate::jira_client::JiraClient;
use crate::models::JiraIssue;
use chrono::{DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

pub const DONE_JQL: &str =
    "assignee in (currentUser()) AND status = Done AND resolved >= -3d ORDER BY created DESC";
pub const REVIEW_JQL: &str =
    "assignee in (currentUser()) AND issuetype != Epic AND status = Review ORDER BY created DESC";
pub const DOING_JQL: &str = r#"assignee in (currentUser()) AND status = "In Progress" AND "Flagged[Checkboxes]" IS NULL AND issuetype != Epic ORDER BY rank ASC"#;
pub const BLOCKED_JQL: &str =
    r#"assignee in (currentUser()) AND "Flagged[Checkboxes]" = Impediment ORDER BY created DESC"#;
pub const SELECTED_JQL: &str = r#"assignee in (currentUser()) AND status = "Selected for Development" AND "Flagged[Checkboxes]" IS NULL AND issuetype != Epic ORDER BY rank ASC"#;

/// Selected for Development issues appended to "Up next".
const SELECTED_LIMIT: usize = 3;

/// The first day whose resolutions still count as "since the last standup".
/// Mondays look back to Friday.
pub fn cutoff_date(today: NaiveDate, offset_days: Option<u64>) -> Result<NaiveDate, ConfigError> {
    let days = offset_days.unwrap_or(match today.weekday() {
        Weekday::Mon => 3,
        _ => 1,
    });
    today
        .checked_sub_days(Days::new(days))
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "JIRA_STANDUP_OFFSET",
            value: days.to_string(),
        })
}

/// Midnight of `date` in the local timezone.
pub fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Jira writes offsets without a colon (`+0000`).
fn parse_jira_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

pub fn resolved_after(issue: &JiraIssue, cutoff: DateTime<Utc>) -> bool {
    issue
        .fields
        .resolution_date
        .as_deref()
        .and_then(parse_jira_datetime)
        .is_some_and(|resolved| resolved.with_timezone(&Utc) > cutoff)
}

pub fn issue_to_log(issue: &JiraIssue, base_url: &str, show_creator: bool) -> String {
    let mut line = format!(
        " * {} [{}]({}/browse/{})",
        issue.fields.summary, issue.key, base_url, issue.key
    );

    if show_creator {
        if let Some(creator) = &issue.fields.creator {
            line.push(' ');
            line.push_str(&creator.display_name);
        }
    }

    if let Some(resolution) = issue.fields.resolution.as_ref().filter(|r| r.name != "Done" && !r.name.is_empty()) {
        line.push_str(&format!(" *{}*", resolution.name));
    }

    line
}

#[derive(Debug, Default)]
pub struct Standup {
    pub done: Vec<JiraIssue>,
    pub in_review: Vec<JiraIssue>,
    pub worked_on: Vec<JiraIssue>,
    pub up_next: Vec<JiraIssue>,
    pub blocked: Vec<JiraIssue>,
}

impl Standup {
    /// Splits in-progress work by whether the time report mentions it.
    pub fn assemble(
        done: Vec<JiraIssue>,
        in_review: Vec<JiraIssue>,
        doing: Vec<JiraIssue>,
        selected: Vec<JiraIssue>,
        blocked: Vec<JiraIssue>,
        worked_on_keys: &[String],
    ) -> Self {
        let (worked_on, mut up_next): (Vec<_>, Vec<_>) = doing
            .into_iter()
            .partition(|issue| worked_on_keys.contains(&issue.key));
        up_next.extend(selected.into_iter().take(SELECTED_LIMIT));

        Self {
            done,
            in_review,
            worked_on,
            up_next,
            blocked,
        }
    }

    pub fn render(&self, base_url: &str) -> String {
        let mut buffer = String::new();
        let mut write_line = |line: &str| {
            buffer.push_str(line);
            buffer.push('\n');
        };

        if !self.done.is_empty() {
            write_line("*Done ✅*");
            for issue in &self.done {
                write_line(&issue_to_log(issue, base_url, false));
            }
        }

        if !self.in_review.is_empty() {
            write_line("");
            write_line("*In review 🔬*");
            for issue in &self.in_review {
                write_line(&issue_to_log(issue, base_url, true));
            }
        }

        if !self.worked_on.is_empty() {
            write_line("");
            write_line("*Worked on ⏳*");
            for issue in &self.worked_on {
                write_line(&issue_to_log(issue, base_url, false));
            }
        }

        if !self.up_next.is_empty() {
            write_line("");
            write_line("*Up next ⏩*");
            for issue in &self.up_next {
                write_line(&issue_to_log(issue, base_url, false));
            }
        }

        if !self.blocked.is_empty() {
            write_line("");
            write_line("*Blocked issues ❗️*");
            for issue in &self.blocked {
                write_line(&issue_to_log(issue, base_url, false));
            }
            write_line("");
        }

        buffer.push('\n');
        buffer
    }
}

pub async fn standup_notes(
    jira_client: &JiraClient,
    cutoff: DateTime<Utc>,
    worked_on_keys: &[String],
) -> Result<String, ReportError> {
    tracing::debug!(%cutoff, "collecting standup notes");

    let done = jira_client
        .search_issues(DONE_JQL)
        .await?
        .issues
        .into_iter()
        .filter(|issue| resolved_after(issue, cutoff))
        .collect();
    let in_review = jira_client.search_issues(REVIEW_JQL).await?.issues;
    let doing = jira_client.search_issues(DOING_JQL).await?.issues;
    let blocked = jira_client.search_issues(BLOCKED_JQL).await?.issues;
    let selected = jira_client.search_issues(SELECTED_JQL).await?.issues;

    let standup = Standup::assemble(done, in_review, doing, selected, blocked, worked_on_keys);
    Ok(standup.render(jira_client.base_url()))
}
