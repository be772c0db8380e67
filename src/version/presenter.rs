//! Human-readable version reports

use std::fmt;

use crate::config::{BUILD_TIME_FORMAT, CheckerConfig};
use crate::version::types::VersionInfo;

/// Body used when the running version is not behind the latest tag
pub const UP_TO_DATE_MESSAGE: &str = "You are using the latest version!\n";

/// Formatted report plus the links that go with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub repository_url: String,
    pub update_url: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

/// Renders reports for one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presenter {
    host: String,
    owner: String,
    repo: String,
}

impl Presenter {
    pub fn new(host: &str, owner: &str, repo: &str) -> Self {
        Self {
            host: host.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(&config.host, &config.owner, &config.repo)
    }

    /// `https://<host>/<owner>/<repo>`
    pub fn repository_url(&self) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, self.repo)
    }

    /// Release page of the given version
    pub fn update_url(&self, version: &VersionInfo) -> String {
        format!(
            "{}/releases/{}",
            self.repository_url(),
            version.semantic_version().original()
        )
    }

    pub fn present_current(&self, version: &VersionInfo) -> Report {
        Report {
            output: self.describe("Current", version),
            repository_url: self.repository_url(),
            update_url: self.update_url(version),
        }
    }

    /// Compares `current` against `latest`.
    ///
    /// Returns `true` with a report on `latest` when `current` is strictly
    /// older. Equal and newer versions both count as up to date, and the
    /// update URL then points at the current release.
    pub fn present_comparison(
        &self,
        current: &VersionInfo,
        latest: &VersionInfo,
    ) -> (bool, Report) {
        let outdated = current.semantic_version() < latest.semantic_version();
        let (output, update_url) = if outdated {
            (self.describe("Latest", latest), self.update_url(latest))
        } else {
            (UP_TO_DATE_MESSAGE.to_string(), self.update_url(current))
        };

        (
            outdated,
            Report {
                output,
                repository_url: self.repository_url(),
                update_url,
            },
        )
    }

    fn describe(&self, label: &str, version: &VersionInfo) -> String {
        format!(
            "{} version data for {}\n\
             Version:\t{}\n\
             Git commit:\t{}\n\
             Git Ref:\t{}\n\
             Date:\t{}\n",
            label,
            self.repo,
            version.semantic_version(),
            version.commit(),
            version.git_ref(),
            version.build_time().format(BUILD_TIME_FORMAT)
        )
    }
}
