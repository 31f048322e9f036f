use dioxus::prelude::ReadableExt;
use storage::InMemorySource;

use super::test_harness::{SAMPLE_DOC, setup_view_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(InMemorySource::new(SAMPLE_DOC));
    harness.load().await;

    let html = harness.render();
    assert!(html.contains("Question 1"), "missing question label in {html}");
    assert!(html.contains("of 2"), "missing total label in {html}");
    assert!(html.contains("What is 2 + 2?"), "missing question text in {html}");
    assert!(html.contains("Module 2"), "missing module option in {html}");
    assert!(html.contains("0%"), "missing progress in {html}");
    assert!(!html.contains("feedback__title"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_answer_shows_feedback_and_progress() {
    let mut harness = setup_view_harness(InMemorySource::new(SAMPLE_DOC));
    harness.load().await;

    harness.dispatch(QuizIntent::Answer(0));
    let html = harness.render();
    assert!(html.contains("Incorrect!"), "missing feedback in {html}");
    assert!(html.contains("Two plus two is four."), "missing explanation in {html}");
    assert!(html.contains("50%"), "missing progress in {html}");
    assert!(html.contains("option-btn selected incorrect"), "missing wrong pick in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Capital of France?"), "missing second question in {html}");
    assert!(!html.contains("Incorrect!"), "stale feedback in {html}");

    let vm = harness.handles.vm();
    let answered = vm
        .peek()
        .as_ref()
        .map(|quiz| quiz.session().progress().answered_count);
    assert_eq!(answered, Some(1));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_module_switch_resets_progress() {
    let mut harness = setup_view_harness(InMemorySource::new(SAMPLE_DOC));
    harness.load().await;

    harness.dispatch(QuizIntent::Answer(1));
    harness.dispatch(QuizIntent::SelectModule("Module 2".to_string()));
    let html = harness.render();
    assert!(html.contains("Largest planet?"), "missing module 2 question in {html}");
    assert!(html.contains("of 1"), "missing total label in {html}");
    assert!(html.contains("0%"), "progress not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_show_answer_opens_modal() {
    let mut harness = setup_view_harness(InMemorySource::new(SAMPLE_DOC));
    harness.load().await;

    harness.dispatch(QuizIntent::ShowAnswer);
    let html = harness.render();
    assert!(html.contains("answer-modal"), "missing modal in {html}");
    assert!(html.contains("B. 4"), "missing answer label in {html}");

    harness.dispatch(QuizIntent::HideAnswer);
    let html = harness.render();
    assert!(!html.contains("answer-modal"), "modal still open in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_with_retry() {
    let mut harness = setup_view_harness(InMemorySource::unavailable());
    harness.load().await;

    let html = harness.render();
    assert!(html.contains("Failed to load quiz data"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Question 1"), "unexpected question in {html}");

    harness.source.set_document(SAMPLE_DOC).expect("serve document");
    harness.retry().await;

    let html = harness.render();
    assert!(html.contains("What is 2 + 2?"), "retry did not load quiz: {html}");
    assert!(!html.contains("Failed to load quiz data"), "stale error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_malformed_data_error() {
    let mut harness = setup_view_harness(InMemorySource::new("[1, 2, 3]"));
    harness.load().await;

    let html = harness.render();
    assert!(html.contains("malformed"), "missing invalid data error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_document_has_no_question() {
    let mut harness = setup_view_harness(InMemorySource::new("{}"));
    harness.load().await;

    let html = harness.render();
    assert!(html.contains("No modules available."), "missing empty state in {html}");
    assert!(!html.contains("Question 1"), "unexpected question in {html}");
}
