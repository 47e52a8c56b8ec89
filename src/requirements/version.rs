//! Release-version parsing and comparison.
//!
//! Installed packages report versions such as `1.21.0rc1`, `2.0.1+cu118`
//! or `1!2.0.post3`. Only the release segment (the *base version*) takes
//! part in comparisons, and segments compare numerically so `1.9 < 1.10`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::parser::VersionSpec;

// Optional leading `v`, optional epoch, then the dotted release segment.
static RELEASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[vV]?(?:\d+!)?(\d+(?:\.\d+)*)").unwrap());

/// The numeric release segment of a version string.
///
/// Trailing zero segments are insignificant: `1.0` and `1.0.0` are equal.
#[derive(Debug, Clone)]
pub struct BaseVersion {
    release: Vec<u64>,
}

impl BaseVersion {
    /// Extract the base version from a reported version string.
    ///
    /// Returns `None` when the string has no leading numeric release segment.
    pub fn parse(version: &str) -> Option<Self> {
        let caps = RELEASE_REGEX.captures(version.trim())?;
        let release = caps[1]
            .split('.')
            .map(|s| s.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Self { release })
    }

    /// The release components in order.
    pub fn components(&self) -> &[u64] {
        &self.release
    }

    fn significant(&self) -> &[u64] {
        let len = self
            .release
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.release[..len]
    }
}

impl PartialEq for BaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for BaseVersion {}

impl PartialOrd for BaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.significant().cmp(other.significant())
    }
}

impl fmt::Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.release.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Whether an installed version string satisfies a requirement.
///
/// Both sides are reduced to their base versions first. A side that has no
/// parseable release segment never satisfies a constraint, except that an
/// exact requirement still matches an identical raw string.
pub fn satisfies(installed: &str, spec: &VersionSpec) -> bool {
    match spec {
        VersionSpec::Any => true,
        VersionSpec::Exact(required) => {
            match (BaseVersion::parse(installed), BaseVersion::parse(required)) {
                (Some(have), Some(want)) => have == want,
                _ => installed.trim() == required.trim(),
            }
        }
        VersionSpec::Range { min, max } => {
            let Some(have) = BaseVersion::parse(installed) else {
                return false;
            };
            let Some(low) = BaseVersion::parse(min) else {
                return false;
            };
            if have < low {
                return false;
            }
            match max {
                Some(max) => BaseVersion::parse(max).is_some_and(|high| have <= high),
                None => true,
            }
        }
    }
}
