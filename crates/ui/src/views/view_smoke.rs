use skillforge_core::model::{LessonId, SkillId};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog_overview() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Start Exploring"), "missing hero cta in {html}");
    assert!(html.contains("Cloud Computing"), "missing category in {html}");
    assert!(html.contains("Sara Lindqvist"), "missing testimonial in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn explorer_view_smoke_renders_skill_cards() {
    let mut harness = setup_view_harness(ViewKind::Explore);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Rust Fundamentals"), "missing skill in {html}");
    assert!(
        html.contains("Kubernetes Operations"),
        "missing skill in {html}"
    );
    assert!(html.contains("Search skills"), "missing search box in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn explorer_view_smoke_shows_progress_bar_after_completion() {
    let mut harness = setup_view_harness(ViewKind::Explore);
    harness
        .progress
        .complete_lesson(
            &LessonId::new("rust-1"),
            &SkillId::new("rust-fundamentals"),
        )
        .await;

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("33%"), "missing percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn explorer_view_smoke_survives_corrupt_progress_record() {
    let mut harness = setup_view_harness(ViewKind::Explore);
    harness.repo.set_raw("{not even close to json");

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Rust Fundamentals"), "missing skill in {html}");
    assert!(!html.contains("Something went wrong"), "unexpected error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_outline_and_content() {
    let mut harness = setup_view_harness(ViewKind::Lesson("rust-fundamentals".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Getting Started with Rust"),
        "missing outline entry in {html}"
    );
    assert!(
        html.contains("Installing the Toolchain"),
        "missing lesson heading in {html}"
    );
    assert!(
        html.contains("Mark as Complete"),
        "missing complete button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_marks_completed_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson("rust-fundamentals".to_string()));
    harness
        .progress
        .complete_lesson(
            &LessonId::new("rust-1"),
            &SkillId::new("rust-fundamentals"),
        )
        .await;

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Completed"), "missing completed state in {html}");
    assert!(html.contains("33% complete"), "missing course percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_unknown_skill_renders_retry() {
    let mut harness = setup_view_harness(ViewKind::Lesson("no-such-skill".to_string()));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("That skill does not exist."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
