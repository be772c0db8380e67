//! One update check: fetch the latest version, then compare

use tracing::info;

use crate::version::error::CheckError;
use crate::version::presenter::{Presenter, Report};
use crate::version::repository::{ListOptions, VersionSource};
use crate::version::types::VersionInfo;

/// Runs a single check cycle against `source`.
///
/// Returns whether `current` is outdated along with the report to show.
/// Errors from the source are returned unchanged.
pub async fn check_for_update<S: VersionSource + ?Sized>(
    source: &S,
    presenter: &Presenter,
    current: &VersionInfo,
    options: &ListOptions,
) -> Result<(bool, Report), CheckError> {
    let latest = source.get_latest_version(options).await?;
    let (outdated, report) = presenter.present_comparison(current, &latest);

    info!(
        current = %current.semantic_version(),
        latest = %latest.semantic_version(),
        outdated,
        "Version check finished"
    );

    Ok((outdated, report))
}
