use crate::buckets::{earns_trophy, Bucket, Buckets, StatusBucket};
use crate::duration::{browse_url, format_duration};
use crate::error::ReportError;
use crate::jira_client::JiraClient;
use crate::models::JiraIssue;
use crate::xbar::{Menu, MenuItem};

pub const SPRINT_JQL: &str = r#"Sprint in openSprints() AND assignee = currentUser() AND "Flagged[Checkboxes]" IS NULL ORDER BY priority DESC, Rank ASC"#;

pub async fn current_sprint(jira_client: &JiraClient) -> Result<String, ReportError> {
    let issues: Vec<JiraIssue> = jira_client
        .search_issues(SPRINT_JQL)
        .await?
        .issues
        .into_iter()
        .filter(|issue| !issue.is_flagged())
        .collect();
    Ok(render_sprint(&issues))
}

fn count_indicator(bucket: &Bucket) -> String {
    match bucket.kind {
        StatusBucket::ToDo => format!("🧾{}", bucket.len()),
        StatusBucket::InProgress => format!("⏳{}", bucket.len()),
        StatusBucket::Review => format!("🔬{}", bucket.len()),
        StatusBucket::Done => format!("✅ {}", bucket.len()),
    }
}

fn header(bucket: &Bucket) -> String {
    let totals = format!(
        "{} / {}",
        format_duration(bucket.time_spent()),
        format_duration(bucket.time_estimate())
    );
    match bucket.kind {
        StatusBucket::ToDo => format!("🧾 To Do - {}", format_duration(bucket.time_estimate())),
        StatusBucket::InProgress => format!("⏳ In Progress - {totals}"),
        StatusBucket::Review => format!("🔬 In Review - {totals}"),
        StatusBucket::Done => format!("✅ Done - {totals}"),
    }
}

pub fn issue_line(issue: &JiraIssue) -> MenuItem {
    let mut text = format!("{} {} - ", issue.fields.summary, issue.key);

    if issue.time_spent() > 0 {
        text = format!("{text} {} /", format_duration(issue.time_spent()));
    }
    if issue.time_estimate() > 0 {
        text = format!("{text} {}", format_duration(issue.time_estimate()));
    }
    if earns_trophy(issue) {
        text = format!("{text} 🏆");
    }

    MenuItem::text(text).href(browse_url(issue))
}

pub fn render_sprint(issues: &[JiraIssue]) -> String {
    let buckets = Buckets::partition(issues);

    let title = buckets
        .non_empty()
        .map(count_indicator)
        .collect::<Vec<_>>()
        .join(" / ");

    let mut menu = Menu::new();
    menu.line(title).separator();

    for bucket in buckets.non_empty() {
        menu.line(header(bucket))
            .separator()
            .extend(bucket.issues.iter().map(|issue| issue_line(issue)))
            .separator();
    }

    menu.render()
}
