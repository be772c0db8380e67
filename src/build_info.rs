//! Version metadata injected at compile time
//!
//! Set these environment variables when building to embed the release the
//! binary was built from:
//!
//! ```text
//! GVC_BUILD_VERSION=v1.2.3 \
//! GVC_BUILD_COMMIT=$(git rev-parse HEAD) \
//! GVC_BUILD_REF=$(git symbolic-ref -q HEAD || echo refs/tags/v1.2.3) \
//! GVC_BUILD_TIME="$(date -u '+%a %b %e %H:%M:%S UTC %Y')" \
//! cargo build --release
//! ```
//!
//! Missing or malformed values never fail the build or the program; see
//! [`VersionInfo::new_or_default`].

use crate::version::types::VersionInfo;

const VERSION: Option<&str> = option_env!("GVC_BUILD_VERSION");
const COMMIT: Option<&str> = option_env!("GVC_BUILD_COMMIT");
const GIT_REF: Option<&str> = option_env!("GVC_BUILD_REF");
const BUILD_TIME: Option<&str> = option_env!("GVC_BUILD_TIME");

/// The version this binary was built as
pub fn current_version() -> VersionInfo {
    VersionInfo::new_or_default(
        VERSION.unwrap_or_default(),
        COMMIT.unwrap_or_default(),
        GIT_REF.unwrap_or_default(),
        BUILD_TIME.unwrap_or_default(),
    )
}
