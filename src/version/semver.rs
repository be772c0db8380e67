use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::version::error::VersionError;

/// A parsed semantic version that remembers the string it was parsed from.
///
/// Equality and ordering follow semver precedence on the parsed value, so
/// `v1.2.0`, `1.2` and `1.2.0+build.7` all compare equal while
/// [`SemanticVersion::original`] still returns what the tag or build
/// pipeline actually said.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    original: String,
    parsed: Version,
}

impl SemanticVersion {
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let parsed = parse_version(input).map_err(|source| VersionError::Parse {
            input: input.to_string(),
            source,
        })?;
        Ok(Self {
            original: input.to_string(),
            parsed,
        })
    }

    /// The version string exactly as it was given
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn parsed(&self) -> &Version {
        &self.parsed
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parsed.cmp_precedence(&other.parsed)
    }
}

/// Parse a version string into a semver::Version, normalizing tag-style input.
///
/// Strips a leading `v`/`V` and pads partial versions with zeros.
/// Pre-release and build suffixes are kept as-is.
///
/// Examples:
/// - "v1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2.3-rc.1" -> Version(1, 2, 3, pre: rc.1)
pub fn parse_version(version: &str) -> Result<Version, semver::Error> {
    let version = version.strip_prefix(['v', 'V']).unwrap_or(version);
    let (core, suffix) = match version.find(['-', '+']) {
        Some(idx) => version.split_at(idx),
        None => (version, ""),
    };
    let parts: Vec<&str> = core.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        _ => version.to_string(),
    };
    Version::parse(&normalized)
}
