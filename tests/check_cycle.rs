//! End-to-end check cycles against a mock GitHub API

mod helper;

use chrono::{TimeZone, Utc};

use github_version_checker::version::checker::check_for_update;
use github_version_checker::version::error::CheckError;
use github_version_checker::version::presenter::{Presenter, UP_TO_DATE_MESSAGE};
use github_version_checker::version::repository::{ListOptions, VersionSource};
use helper::github::{OWNER, REPO};
use helper::{MockGitHub, version_days_from_now};

fn presenter() -> Presenter {
    Presenter::new("github.com", OWNER, REPO)
}

#[tokio::test]
async fn reports_outdated_when_newer_tag_exists() {
    let mut github = MockGitHub::start().await;
    let tags = github
        .with_tags(&[("v1.2.0", "c0ffee"), ("v1.1.0", "bada55")])
        .await;
    let commit = github.with_commit("c0ffee", "2024-06-01T08:00:00Z").await;

    let current = version_days_from_now("v1.0.0", -1);
    let (outdated, report) = check_for_update(
        &github.repository(),
        &presenter(),
        &current,
        &ListOptions::default(),
    )
    .await
    .unwrap();

    tags.assert_async().await;
    commit.assert_async().await;
    assert!(outdated);
    assert_eq!(
        report.output,
        "Latest version data for hello\n\
         Version:\tv1.2.0\n\
         Git commit:\tc0ffee\n\
         Git Ref:\trefs/tags/v1.2.0\n\
         Date:\tSat Jun  1 08:00:00 UTC 2024\n"
    );
    assert_eq!(report.repository_url, "https://github.com/octocat/hello");
    assert_eq!(
        report.update_url,
        "https://github.com/octocat/hello/releases/v1.2.0"
    );
}

#[tokio::test]
async fn reports_up_to_date_when_ahead_of_latest_tag() {
    let mut github = MockGitHub::start().await;
    github.with_tags(&[("v1.2.0", "c0ffee")]).await;
    github.with_commit("c0ffee", "2024-06-01T08:00:00Z").await;

    let current = version_days_from_now("v10.0.0", 1);
    let (outdated, report) = check_for_update(
        &github.repository(),
        &presenter(),
        &current,
        &ListOptions::default(),
    )
    .await
    .unwrap();

    assert!(!outdated);
    assert_eq!(report.output, UP_TO_DATE_MESSAGE);
    assert_eq!(
        report.update_url,
        "https://github.com/octocat/hello/releases/v10.0.0"
    );
}

#[tokio::test]
async fn picks_highest_version_from_unordered_listing() {
    let mut github = MockGitHub::start().await;
    github
        .with_tags(&[("v1.9.0", "old"), ("v1.10.0", "new"), ("snapshot", "zzz")])
        .await;
    let commit = github.with_commit("new", "2025-02-03T04:05:06Z").await;

    let latest = github
        .repository()
        .get_latest_version(&ListOptions::default())
        .await
        .unwrap();

    commit.assert_async().await;
    assert_eq!(latest.semantic_version().original(), "v1.10.0");
    assert_eq!(latest.commit(), "new");
    assert_eq!(
        latest.build_time(),
        Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap()
    );
}

#[tokio::test]
async fn fails_with_no_tags_for_untagged_repository() {
    let mut github = MockGitHub::start().await;
    github.with_tags(&[]).await;

    let result = check_for_update(
        &github.repository(),
        &presenter(),
        &version_days_from_now("v1.0.0", 0),
        &ListOptions::default(),
    )
    .await;

    assert!(matches!(result, Err(CheckError::NoTags)));
}

#[tokio::test]
async fn build_metadata_on_latest_tag_does_not_mark_outdated() {
    let mut github = MockGitHub::start().await;
    github.with_tags(&[("v1.0.0+build.7", "c0ffee")]).await;
    github.with_commit("c0ffee", "2024-06-01T08:00:00Z").await;

    let (outdated, report) = check_for_update(
        &github.repository(),
        &presenter(),
        &version_days_from_now("v1.0.0", 0),
        &ListOptions::default(),
    )
    .await
    .unwrap();

    assert!(!outdated);
    assert_eq!(report.output, UP_TO_DATE_MESSAGE);
}
