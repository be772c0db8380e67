//! The version record compared by the checker

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

use crate::config::{BUILD_TIME_FORMAT, DEFAULT_VERSION};
use crate::version::error::VersionError;
use crate::version::semver::SemanticVersion;

const TAG_REF_PREFIX: &str = "refs/tags/";

/// A released (or running) version together with the commit it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    semantic_version: SemanticVersion,
    commit: String,
    git_ref: String,
    build_time: DateTime<Utc>,
}

impl VersionInfo {
    /// Creates a version from a tag name, failing if the name is not a
    /// semantic version. The ref is always `refs/tags/<version>`.
    pub fn new(
        version: &str,
        commit: &str,
        build_time: DateTime<Utc>,
    ) -> Result<Self, VersionError> {
        let semantic_version = SemanticVersion::parse(version)?;
        Ok(Self {
            git_ref: tag_ref(version),
            semantic_version,
            commit: commit.to_string(),
            build_time,
        })
    }

    /// Creates a version from values injected at build time.
    ///
    /// Never fails: an unparseable version becomes [`DEFAULT_VERSION`] and an
    /// unparseable build time becomes the Unix epoch. The commit is kept as
    /// given, and so is the ref unless it is empty, in which case it is
    /// derived from the resolved version.
    pub fn new_or_default(version: &str, commit: &str, git_ref: &str, build_time: &str) -> Self {
        let semantic_version = SemanticVersion::parse(version).unwrap_or_else(|e| {
            debug!("Falling back to {}: {}", DEFAULT_VERSION, e);
            default_semantic_version()
        });

        let build_time = parse_build_time(build_time).unwrap_or_else(|| {
            debug!("Unparseable build time {:?}, using epoch", build_time);
            DateTime::<Utc>::UNIX_EPOCH
        });

        let git_ref = if git_ref.is_empty() {
            tag_ref(semantic_version.original())
        } else {
            git_ref.to_string()
        };

        Self {
            semantic_version,
            commit: commit.to_string(),
            git_ref,
            build_time,
        }
    }

    pub fn semantic_version(&self) -> &SemanticVersion {
        &self.semantic_version
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    pub fn build_time(&self) -> DateTime<Utc> {
        self.build_time
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            semantic_version: default_semantic_version(),
            commit: String::new(),
            git_ref: tag_ref(DEFAULT_VERSION),
            build_time: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

fn tag_ref(version: &str) -> String {
    format!("{}{}", TAG_REF_PREFIX, version)
}

fn default_semantic_version() -> SemanticVersion {
    SemanticVersion::parse(DEFAULT_VERSION).expect("DEFAULT_VERSION is a valid version")
}

/// Accepts RFC 3339 or the report format (`BUILD_TIME_FORMAT`)
fn parse_build_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    DateTime::parse_from_rfc3339(input)
        .map(|time| time.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(input, BUILD_TIME_FORMAT).map(|t| t.and_utc()))
        .ok()
}
