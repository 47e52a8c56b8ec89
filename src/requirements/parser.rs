//! Requirement parsing from environment dependency entries.
//!
//! Conda dependency strings come in a handful of shapes:
//!
//! - `numpy=1.21.0` - an exact version
//! - `pandas>=1.4,<=1.5` - an inclusive range
//! - `matplotlib>=3.5` - a lower bound
//! - `conda-forge::ffmpeg=5.1.2` - channel-qualified
//! - `jupyterlab` - any version
//!
//! Parsing is lenient: anything that doesn't split cleanly is kept as a
//! bare name with no version constraint.

use std::fmt;

use tracing::trace;

use crate::config::Dependency;

/// Version constraint attached to a requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    /// Any installed version is acceptable.
    Any,
    /// The base version must equal this version.
    Exact(String),
    /// The base version must be at least `min` and, if given, at most `max`.
    Range { min: String, max: Option<String> },
}

impl VersionSpec {
    /// Whether this spec constrains the version at all.
    pub fn is_constrained(&self) -> bool {
        !matches!(self, VersionSpec::Any)
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Any => write!(f, "any"),
            VersionSpec::Exact(v) => write!(f, "{}", v),
            VersionSpec::Range { min, max: None } => write!(f, ">= {}", min),
            VersionSpec::Range {
                min,
                max: Some(max),
            } => write!(f, ">= {} and <= {}", min, max),
        }
    }
}

/// Requirements keyed by package name, in declaration order.
///
/// Declaring the same package twice keeps its first position but the last
/// declared constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    entries: Vec<(String, VersionSpec)>,
}

impl Requirements {
    /// Create an empty requirements set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a requirement.
    pub fn insert(&mut self, name: impl Into<String>, spec: VersionSpec) {
        let name = name.into();
        if let Some(existing) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = spec;
        } else {
            self.entries.push((name, spec));
        }
    }

    /// Remove a requirement, returning its spec if it was present.
    pub fn remove(&mut self, name: &str) -> Option<VersionSpec> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Look up a requirement by package name.
    pub fn get(&self, name: &str) -> Option<&VersionSpec> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Iterate requirements in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionSpec)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the requirements set from environment dependency entries.
///
/// Nested sections such as `pip:` lists are skipped.
pub fn parse_requirements<'a, I>(dependencies: I) -> Requirements
where
    I: IntoIterator<Item = &'a Dependency>,
{
    let mut requirements = Requirements::new();
    for dep in dependencies {
        match dep {
            Dependency::Spec(line) => {
                if let Some((name, spec)) = parse_entry(line) {
                    requirements.insert(name, spec);
                }
            }
            Dependency::Nested(_) => trace!("Skipping nested dependency section"),
        }
    }
    requirements
}

/// Parse a single dependency string.
///
/// Returns `None` for entries whose package name contains a hyphen; those
/// are distribution names that don't map onto an importable module.
pub fn parse_entry(line: &str) -> Option<(String, VersionSpec)> {
    let line = line.trim();
    let (pkg, spec) = split_entry(line).unwrap_or((line, VersionSpec::Any));

    if pkg.contains('-') {
        trace!("Skipping dependency '{}'", line);
        return None;
    }

    let name = pkg.rsplit("::").next().unwrap_or(pkg).trim();
    Some((name.to_string(), spec))
}

fn split_entry(line: &str) -> Option<(&str, VersionSpec)> {
    if line.contains(">=") {
        let (pkg, versions) = split_exactly_once(line, ">=")?;
        let spec = match versions.split_once(",<=") {
            Some((min, max)) => VersionSpec::Range {
                min: min.trim().to_string(),
                max: Some(max.trim().to_string()),
            },
            None => VersionSpec::Range {
                min: versions.trim().to_string(),
                max: None,
            },
        };
        Some((pkg.trim(), spec))
    } else {
        let (pkg, version) = split_exactly_once(line, "=")?;
        Some((pkg.trim(), VersionSpec::Exact(version.trim().to_string())))
    }
}

/// Split on `sep` only when it occurs exactly once.
fn split_exactly_once<'a>(line: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let (head, tail) = line.split_once(sep)?;
    if tail.contains(sep) {
        return None;
    }
    Some((head, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(line: &str) -> Option<(String, VersionSpec)> {
        parse_entry(line)
    }

    #[test]
    fn exact_version() {
        assert_eq!(
            spec("numpy=1.21.0"),
            Some(("numpy".into(), VersionSpec::Exact("1.21.0".into())))
        );
    }

    #[test]
    fn range_with_upper_bound() {
        assert_eq!(
            spec("pandas>=1.4,<=1.5"),
            Some((
                "pandas".into(),
                VersionSpec::Range {
                    min: "1.4".into(),
                    max: Some("1.5".into())
                }
            ))
        );
    }

    #[test]
    fn lower_bound_only() {
        assert_eq!(
            spec("matplotlib>=3.5"),
            Some((
                "matplotlib".into(),
                VersionSpec::Range {
                    min: "3.5".into(),
                    max: None
                }
            ))
        );
    }

    #[test]
    fn bare_name_has_no_constraint() {
        assert_eq!(spec("jupyterlab"), Some(("jupyterlab".into(), VersionSpec::Any)));
    }

    #[test]
    fn hyphenated_entries_are_skipped() {
        assert_eq!(spec("scikit-learn>=1.0,<=1.2"), None);
        assert_eq!(spec("python-dotenv"), None);
        assert_eq!(spec("conda-forge::ffmpeg=5.1.2"), None);
    }

    #[test]
    fn channel_prefix_is_stripped() {
        assert_eq!(
            spec("defaults::ffmpeg=5.1.2"),
            Some(("ffmpeg".into(), VersionSpec::Exact("5.1.2".into())))
        );
        assert_eq!(
            spec("a::b::geopandas"),
            Some(("geopandas".into(), VersionSpec::Any))
        );
    }

    #[test]
    fn multiple_equals_fall_back_to_any() {
        assert_eq!(
            spec("numpy=1.21=py39"),
            Some(("numpy=1.21=py39".into(), VersionSpec::Any))
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(
            spec("  python = 3.10 "),
            Some(("python".into(), VersionSpec::Exact("3.10".into())))
        );
    }

    #[test]
    fn parse_requirements_skips_nested_sections() {
        let deps = vec![
            Dependency::Spec("python=3.10".into()),
            Dependency::Nested(serde_yaml::from_str("pip: [requests]").unwrap()),
            Dependency::Spec("numpy>=1.21".into()),
        ];
        let reqs = parse_requirements(&deps);
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs.get("python"), Some(&VersionSpec::Exact("3.10".into())));
        assert!(reqs.get("requests").is_none());
    }

    #[test]
    fn duplicate_names_keep_last_spec_first_position() {
        let deps = vec![
            Dependency::Spec("numpy=1.0".into()),
            Dependency::Spec("pandas".into()),
            Dependency::Spec("numpy=2.0".into()),
        ];
        let reqs = parse_requirements(&deps);
        let names: Vec<_> = reqs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["numpy", "pandas"]);
        assert_eq!(reqs.get("numpy"), Some(&VersionSpec::Exact("2.0".into())));
    }

    #[test]
    fn remove_returns_spec() {
        let mut reqs = Requirements::new();
        reqs.insert("python", VersionSpec::Exact("3.10".into()));
        assert_eq!(reqs.remove("python"), Some(VersionSpec::Exact("3.10".into())));
        assert_eq!(reqs.remove("python"), None);
        assert!(reqs.is_empty());
    }

    #[test]
    fn spec_display() {
        assert_eq!(VersionSpec::Exact("1.2".into()).to_string(), "1.2");
        let range = VersionSpec::Range {
            min: "1.0".into(),
            max: Some("1.2".into()),
        };
        assert_eq!(range.to_string(), ">= 1.0 and <= 1.2");
        let lower = VersionSpec::Range {
            min: "1.0".into(),
            max: None,
        };
        assert_eq!(lower.to_string(), ">= 1.0");
    }
}
