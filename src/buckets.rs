use crate::models::JiraIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    ToDo,
    InProgress,
    Review,
    Done,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 4] = [
        StatusBucket::ToDo,
        StatusBucket::InProgress,
        StatusBucket::Review,
        StatusBucket::Done,
    ];

    /// Anything that isn't In Progress, Review or Done is To Do.
    pub fn of(issue: &JiraIssue) -> Self {
        match issue.status() {
            "In Progress" => StatusBucket::InProgress,
            "Review" => StatusBucket::Review,
            "Done" => StatusBucket::Done,
            _ => StatusBucket::ToDo,
        }
    }
}

#[derive(Debug)]
pub struct Bucket<'a> {
    pub kind: StatusBucket,
    pub issues: Vec<&'a JiraIssue>,
}

impl<'a> Bucket<'a> {
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn time_spent(&self) -> u64 {
        self.issues.iter().map(|issue| issue.time_spent()).sum()
    }

    pub fn time_estimate(&self) -> u64 {
        self.issues.iter().map(|issue| issue.time_estimate()).sum()
    }
}

/// Issues split by status, in To Do / In Progress / Review / Done order.
#[derive(Debug)]
pub struct Buckets<'a> {
    buckets: [Bucket<'a>; 4],
}

impl<'a> Buckets<'a> {
    pub fn partition(issues: &'a [JiraIssue]) -> Self {
        let mut buckets = StatusBucket::ALL.map(|kind| Bucket {
            kind,
            issues: Vec::new(),
        });

        for issue in issues {
            let kind = StatusBucket::of(issue);
            if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.kind == kind) {
                bucket.issues.push(issue);
            }
        }

        Self { buckets }
    }

    pub fn get(&self, kind: StatusBucket) -> &Bucket<'a> {
        match kind {
            StatusBucket::ToDo => &self.buckets[0],
            StatusBucket::InProgress => &self.buckets[1],
            StatusBucket::Review => &self.buckets[2],
            StatusBucket::Done => &self.buckets[3],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bucket<'a>> {
        self.buckets.iter()
    }

    pub fn non_empty(&self) -> impl Iterator<Item = &Bucket<'a>> {
        self.iter().filter(|bucket| !bucket.is_empty())
    }
}

/// Done and delivered within the original estimate.
pub fn earns_trophy(issue: &JiraIssue) -> bool {
    StatusBucket::of(issue) == StatusBucket::Done && issue.time_spent() <= issue.time_estimate()
}
