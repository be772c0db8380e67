use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: semver::Error,
    },
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("repository has no tags")]
    NoTags,

    #[error("unable to find this commit: {0}")]
    CommitNotFound(String),

    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Network error during {context}: {source}")]
    Network {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response during {context}: {message}")]
    InvalidResponse {
        context: &'static str,
        message: String,
    },

    #[error("Failed to decode response during {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidVersion(#[from] VersionError),
}
