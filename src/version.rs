use std::cmp::Ordering;

fn segments(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|segment| segment.trim().parse().unwrap_or(0))
        .collect()
}

/// Orders dot-separated versions numerically, segment by segment.
/// A missing or non-numeric segment counts as zero, so `1` equals `1.0`.
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left = segments(left);
    let right = segments(right);
    let length = left.len().max(right.len());

    (0..length)
        .map(|i| {
            let a = left.get(i).copied().unwrap_or(0);
            let b = right.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_segments_as_numbers() {
        assert_eq!(compare_versions("1.2", "1.10"), Ordering::Less);
        assert_eq!(compare_versions("1", "1.0"), Ordering::Equal);
        assert_eq!(compare_versions("2.0.1", "2.0"), Ordering::Greater);
        assert_eq!(compare_versions("10.0", "9.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.0.0.0.1", "1"), Ordering::Greater);
    }

    #[test]
    fn sorts_release_names() {
        let mut names = vec!["1.10", "1.2", "1.2.1", "0.9"];
        names.sort_by(|a, b| compare_versions(a, b));
        assert_eq!(names, vec!["0.9", "1.2", "1.2.1", "1.10"]);
    }
}
