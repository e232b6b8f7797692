use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JiraUser {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct IssueListResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
}

impl JiraIssue {
    pub fn status(&self) -> &str {
        &self.fields.status.name
    }

    pub fn time_spent(&self) -> u64 {
        self.fields.time_spent.unwrap_or(0)
    }

    pub fn time_estimate(&self) -> u64 {
        self.fields.time_estimate.unwrap_or(0)
    }

    /// Jira sends the flag as `null` or as a list of checkbox options.
    pub fn is_flagged(&self) -> bool {
        match &self.fields.flagged {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Array(options)) => !options.is_empty(),
            Some(_) => true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueFields {
    pub summary: String,
    pub status: JiraStatus,
    pub assignee: Option<JiraUser>,
    pub creator: Option<JiraUser>,
    pub resolution: Option<JiraResolution>,
    #[serde(rename = "resolutiondate")]
    pub resolution_date: Option<String>,
    #[serde(rename = "aggregatetimeoriginalestimate")]
    pub time_estimate: Option<u64>,
    #[serde(rename = "aggregatetimespent")]
    pub time_spent: Option<u64>,
    /// Flagged.
    #[serde(rename = "customfield_10021")]
    pub flagged: Option<serde_json::Value>,
    pub watches: JiraWatches,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraStatus {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraResolution {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraWatches {
    #[serde(rename = "self")]
    pub self_url: String,
}

#[derive(Debug, Deserialize)]
pub struct VersionListResponse {
    #[serde(default)]
    pub values: Vec<JiraVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraVersion {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub released: bool,
}
