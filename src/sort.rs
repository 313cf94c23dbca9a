//! Sorting collections of version strings.

use crate::{cmp_versions, compare_version_strings, parse_version};

/// Sort version strings in ascending order, in place.
///
/// The sort is stable. Every comparison parses both sides afresh.
///
/// # Example
/// ```
/// let mut versions = vec!["1.0-2", "1:0.1", "1.0-1ubuntu1", "0.9"];
/// ubuntuversion::sort(&mut versions);
/// assert_eq!(versions, vec!["0.9", "1.0-1ubuntu1", "1.0-2", "1:0.1"]);
/// ```
pub fn sort<S: AsRef<str>>(versions: &mut [S]) {
    // Binary insertion rather than slice::sort_by: fields that differ in text
    // but compare equal ("01" and "1") make ties non-transitive, and the std
    // sorts may panic on orders that are not total.
    for i in 1..versions.len() {
        let (sorted, rest) = versions.split_at(i);
        let candidate = rest[0].as_ref();
        let pos =
            sorted.partition_point(|v| !compare_version_strings(candidate, v.as_ref()));
        versions[pos..=i].rotate_right(1);
    }
}

/// Find the greatest version in a collection.
///
/// Returns `None` for an empty collection. If several versions compare
/// equal, the last of them is returned.
///
/// # Example
/// ```
/// let versions = ["3.0.2-0ubuntu1.15", "3.0.13-0ubuntu3.1", "3.0.13-0ubuntu3"];
/// assert_eq!(ubuntuversion::latest(&versions), Some(&"3.0.13-0ubuntu3.1"));
/// ```
pub fn latest<S: AsRef<str>>(versions: &[S]) -> Option<&S> {
    versions
        .iter()
        .max_by(|a, b| cmp_versions(&parse_version(a.as_ref()), &parse_version(b.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort() {
        let mut versions = vec![
            "openssl-3.0.13-0ubuntu3.1",
            "openssl-3.0.2-0ubuntu1.15",
            "openssl-3.0.2-0ubuntu1.10",
            "openssl-3.0.2-0ubuntu1",
        ];
        sort(&mut versions);
        assert_eq!(
            versions,
            vec![
                "openssl-3.0.2-0ubuntu1",
                "openssl-3.0.2-0ubuntu1.10",
                "openssl-3.0.2-0ubuntu1.15",
                "openssl-3.0.13-0ubuntu3.1",
            ]
        );
    }

    #[test]
    fn test_sort_epoch() {
        let mut versions = vec!["2:1.0", "1:9.9", "10.0-1"];
        sort(&mut versions);
        assert_eq!(versions, vec!["10.0-1", "1:9.9", "2:1.0"]);
    }

    #[test]
    fn test_sort_owned() {
        let mut versions: Vec<String> = ["1.10", "1.9", "1.9.1", "1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort(&mut versions);
        assert_eq!(versions, vec!["1", "1.9", "1.9.1", "1.10"]);
    }

    #[test]
    fn test_sort_ties_preserved() {
        let mut versions = vec!["1.0-1", "1.0-1"];
        sort(&mut versions);
        assert_eq!(versions, vec!["1.0-1", "1.0-1"]);

        // Stable: "01" and "1" tie, so they keep their input order.
        let mut versions = vec!["2", "01", "1", "0"];
        sort(&mut versions);
        assert_eq!(versions, vec!["0", "01", "1", "2"]);
        let mut versions = vec!["2", "1", "01", "0"];
        sort(&mut versions);
        assert_eq!(versions, vec!["0", "1", "01", "2"]);
    }

    #[test]
    fn test_sort_non_transitive_ties() {
        let mut versions = vec!["1-3", "01-2", "1-1", "01-1"];
        sort(&mut versions);
        let mut expected = vec!["01-1", "01-2", "1-1", "1-3"];
        let mut actual = versions.clone();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_sort_empty() {
        let mut versions: Vec<&str> = vec![];
        sort(&mut versions);
        assert!(versions.is_empty());
    }

    #[test]
    fn test_latest() {
        assert_eq!(latest(&["1.0", "1.0-1", "0.9"]), Some(&"1.0-1"));
        assert_eq!(latest(&["1:0.1", "9.9"]), Some(&"1:0.1"));
        assert_eq!(latest::<&str>(&[]), None);
    }

    #[test]
    fn test_latest_ties() {
        let versions = ["01", "1"];
        let found = latest(&versions).unwrap();
        assert!(std::ptr::eq(found, &versions[1]));
    }
}
