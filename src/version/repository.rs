//! Source of the latest published version of a repository

#[cfg(test)]
use mockall::automock;

use crate::version::error::CheckError;
use crate::version::types::VersionInfo;

/// Pagination options forwarded verbatim to the tag listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListOptions {
    /// Query parameters for the options that are set
    pub fn query(&self) -> Vec<(&'static str, String)> {
        [("page", self.page), ("per_page", self.per_page)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
            .collect()
    }
}

/// Trait for fetching the latest released version of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the version behind the most recent tag
    ///
    /// # Returns
    /// * `Ok(VersionInfo)` - Tag name, commit SHA and committer date of the latest tag
    /// * `Err(CheckError::NoTags)` - The repository has no tags
    /// * `Err(CheckError)` - If either request or decoding fails
    async fn get_latest_version(&self, options: &ListOptions) -> Result<VersionInfo, CheckError>;
}
