use crate::buckets::{Buckets, StatusBucket};
use crate::config::BoardConfig;
use crate::duration::browse_url;
use crate::error::ReportError;
use crate::jira_client::JiraClient;
use crate::models::{JiraIssue, JiraVersion};
use crate::version::compare_versions;
use crate::xbar::{Menu, MenuItem};

pub struct Release {
    pub version: JiraVersion,
    pub issues: Vec<JiraIssue>,
}

pub fn release_query(project_key: &str, version_id: u64) -> String {
    format!(r#"project = "{project_key}" AND fixVersion = {version_id} ORDER BY created DESC"#)
}

/// The lowest unreleased version of the board, together with its issues.
pub async fn fetch_latest_release(
    jira_client: &JiraClient,
    board: &BoardConfig,
) -> Result<Release, ReportError> {
    let mut versions: Vec<JiraVersion> = jira_client
        .unreleased_versions(board.board_id)
        .await?
        .values
        .into_iter()
        .filter(|version| !version.released)
        .collect();
    versions.sort_by(|a, b| compare_versions(&a.name, &b.name));

    let version = versions
        .into_iter()
        .next()
        .ok_or(ReportError::NoUnreleasedVersion(board.board_id))?;
    tracing::info!(version = %version.name, id = version.id, "latest unreleased version");

    let issues = jira_client
        .search_issues(&release_query(&board.project_key, version.id))
        .await?
        .issues;

    Ok(Release { version, issues })
}

pub fn release_line(issue: &JiraIssue) -> MenuItem {
    let assignee = issue
        .fields
        .assignee
        .as_ref()
        .map(|assignee| assignee.display_name.as_str())
        .unwrap_or("Unassigned");

    MenuItem::text(format!(
        "{} {} {} {}",
        issue.fields.summary,
        issue.key,
        issue.status(),
        assignee
    ))
    .href(browse_url(issue))
}

fn release_lines<'a>(issues: &'a [&'a JiraIssue]) -> impl Iterator<Item = MenuItem> + 'a {
    issues.iter().map(|issue| release_line(issue))
}

pub fn render_dashboard(release: &Release) -> String {
    let buckets = Buckets::partition(&release.issues);

    let indicators = buckets
        .non_empty()
        .filter_map(|bucket| match bucket.kind {
            StatusBucket::ToDo => Some(format!("🧾{}", bucket.len())),
            StatusBucket::InProgress => Some(format!("⏳{}", bucket.len())),
            StatusBucket::Review => Some(format!("🔬{}", bucket.len())),
            StatusBucket::Done => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut menu = Menu::new();
    menu.push(MenuItem::text(format!("{} {}", release.version.name, indicators)).dropdown(false))
        .separator();

    for bucket in buckets.non_empty() {
        let title = match bucket.kind {
            StatusBucket::ToDo => "To Do 🧾",
            StatusBucket::InProgress => "In Progress ⏳",
            StatusBucket::Review => "Review 🔬",
            StatusBucket::Done => "Done ✅ ",
        };
        menu.line(title).separator().extend(release_lines(&bucket.issues));
        if bucket.kind != StatusBucket::Done {
            menu.separator();
        }
    }

    menu.render()
}

/// The compact variant: in-progress and review counts in the title, and
/// every section printed even when empty.
pub fn render_summary(release: &Release) -> String {
    let buckets = Buckets::partition(&release.issues);
    let in_progress = buckets.get(StatusBucket::InProgress);
    let review = buckets.get(StatusBucket::Review);
    let done = buckets.get(StatusBucket::Done);

    let progress_count = if in_progress.is_empty() {
        String::new()
    } else {
        format!("P:{}", in_progress.len())
    };

    let mut menu = Menu::new();
    menu.push(
        MenuItem::text(format!(
            "{} {} R:{}",
            release.version.name,
            progress_count,
            review.len()
        ))
        .dropdown(false),
    )
    .separator()
    .line("In Progress")
    .separator()
    .extend(release_lines(&in_progress.issues))
    .line("Review")
    .separator()
    .extend(release_lines(&review.issues))
    .separator()
    .line("Done")
    .separator()
    .extend(release_lines(&done.issues));

    menu.render()
}
