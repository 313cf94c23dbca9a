//! Ubuntu package version type
//!
//! This crate can be used for dissecting, comparing and sorting Ubuntu/Debian
//! style package version strings such as `1:3.0.13-0ubuntu3.1`.
//!
//! Parsing is lenient: any string yields a version, malformed parts simply
//! fall back to defaults.
//!
//! # Example
//! ```
//! use ubuntuversion::UbuntuVersion;
//! let v: UbuntuVersion = "2:1.0-3ubuntu4".parse().unwrap();
//! assert_eq!(v.epoch, 2);
//! assert_eq!(v.upstream, "1.0");
//! assert_eq!(v.debian, "3");
//! assert_eq!(v.ubuntu, "4");
//! ```

use std::convert::Infallible;
use std::num::IntErrorKind;
use std::str::FromStr;

pub mod compare;
pub mod sort;

pub use compare::{
    cmp_versions, compare_field, compare_version_strings, compare_versions, field_less,
};
pub use sort::{latest, sort};

const UBUNTU_MARKER: &str = "ubuntu";

/// A parsed Ubuntu version string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UbuntuVersion {
    /// Epoch, 0 when absent or not a number, saturating at `u32::MAX`.
    pub epoch: u32,

    /// Upstream version.
    pub upstream: String,

    /// Debian revision, without the Ubuntu part.
    pub debian: String,

    /// Ubuntu revision, the text following the first `ubuntu` in the revision.
    pub ubuntu: String,
}

impl From<&str> for UbuntuVersion {
    fn from(text: &str) -> Self {
        let (epoch, rest) = match text.split_once(':') {
            Some((e, rest)) => (parse_epoch(e), rest),
            None => (0, text),
        };

        let (upstream, revision) = match rest.split_once('-') {
            Some((upstream, revision)) => (upstream, Some(revision)),
            None => (rest, None),
        };

        let (debian, ubuntu) = match revision {
            Some(revision) => revision.split_once(UBUNTU_MARKER).unwrap_or((revision, "")),
            None => ("", ""),
        };

        UbuntuVersion {
            epoch,
            upstream: upstream.to_string(),
            debian: debian.to_string(),
            ubuntu: ubuntu.to_string(),
        }
    }
}

impl FromStr for UbuntuVersion {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(UbuntuVersion::from(text))
    }
}

fn parse_epoch(text: &str) -> u32 {
    text.parse().unwrap_or_else(|e: std::num::ParseIntError| {
        if *e.kind() == IntErrorKind::PosOverflow {
            log::debug!("Epoch {:?} out of range, using {}", text, u32::MAX);
            u32::MAX
        } else {
            log::debug!("Invalid epoch {:?} ({}), assuming 0", text, e);
            0
        }
    })
}

/// Parse a version string into its components.
///
/// This never fails; see [`UbuntuVersion`] for how each field is derived.
///
/// # Example
/// ```
/// use ubuntuversion::parse_version;
/// let v = parse_version("14-20240412-0ubuntu1");
/// assert_eq!(v.upstream, "14");
/// assert_eq!(v.debian, "20240412-0");
/// assert_eq!(v.ubuntu, "1");
/// ```
pub fn parse_version(version: &str) -> UbuntuVersion {
    UbuntuVersion::from(version)
}
