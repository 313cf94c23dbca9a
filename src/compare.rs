//! Ordering of Ubuntu versions.
//!
//! Each of the upstream, Debian and Ubuntu parts is compared as a sequence of
//! runs of digits and non-digits: digit runs numerically, everything else
//! byte by byte.

use std::cmp::Ordering;

use num_bigint::BigUint;

use crate::{parse_version, UbuntuVersion};

static RUN_REGEX: &lazy_regex::Lazy<lazy_regex::Regex> = lazy_regex::regex!(r"[0-9]+|[^0-9]+");

fn is_digit_run(run: &str) -> bool {
    run.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn compare_run(a: &str, b: &str) -> Ordering {
    if is_digit_run(a) && is_digit_run(b) {
        if let (Ok(a), Ok(b)) = (a.parse::<BigUint>(), b.parse::<BigUint>()) {
            return a.cmp(&b);
        }
    }
    a.cmp(b)
}

/// Compare two version fields.
///
/// When all runs present on both sides are equal, the side with fewer runs
/// sorts first.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
/// use ubuntuversion::compare_field;
/// assert_eq!(compare_field("3.0.2", "3.0.13"), Ordering::Less);
/// assert_eq!(compare_field("1", "1.0"), Ordering::Less);
/// assert_eq!(compare_field("007", "7"), Ordering::Equal);
/// ```
pub fn compare_field(a: &str, b: &str) -> Ordering {
    let mut a_runs = RUN_REGEX.find_iter(a).map(|m| m.as_str());
    let mut b_runs = RUN_REGEX.find_iter(b).map(|m| m.as_str());
    loop {
        match (a_runs.next(), b_runs.next()) {
            (Some(a), Some(b)) => match compare_run(a, b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Whether field `a` sorts strictly before field `b`.
pub fn field_less(a: &str, b: &str) -> bool {
    compare_field(a, b) == Ordering::Less
}

/// Whether `a` sorts strictly before `b`.
///
/// Epochs are compared first. After that, the first of the upstream, Debian
/// and Ubuntu parts whose text differs decides, even if [`compare_field`]
/// considers the two texts equal.
pub fn compare_versions(a: &UbuntuVersion, b: &UbuntuVersion) -> bool {
    if a.epoch != b.epoch {
        return a.epoch < b.epoch;
    }
    [
        (&a.upstream, &b.upstream),
        (&a.debian, &b.debian),
        (&a.ubuntu, &b.ubuntu),
    ]
    .into_iter()
    .find(|(a, b)| a != b)
    .is_some_and(|(a, b)| field_less(a, b))
}

/// Parse both strings and check whether `a` sorts strictly before `b`.
///
/// # Example
/// ```
/// use ubuntuversion::compare_version_strings;
/// assert!(compare_version_strings(
///     "openssl-3.0.2-0ubuntu1.15",
///     "openssl-3.0.13-0ubuntu3.1"
/// ));
/// assert!(compare_version_strings("1:9.9", "2:1.0"));
/// ```
pub fn compare_version_strings(a: &str, b: &str) -> bool {
    compare_versions(&parse_version(a), &parse_version(b))
}

/// Three-way comparison built on [`compare_versions`].
pub fn cmp_versions(a: &UbuntuVersion, b: &UbuntuVersion) -> Ordering {
    if compare_versions(a, b) {
        Ordering::Less
    } else if compare_versions(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
