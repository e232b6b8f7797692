use crate::models::JiraIssue;

/// Formats seconds as whole hours, adding minutes only when there are any.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}

/// Browsable link derived from the issue's watchers API URL.
pub fn browse_url(issue: &JiraIssue) -> String {
    issue
        .fields
        .watches
        .self_url
        .replacen("rest/api/2/", "", 1)
        .replacen("/watchers", "", 1)
        .replacen("/issue/", "/browse/", 1)
}
