use std::time::Duration;

use dioxus::prelude::{Code, Key};
use quiz_core::model::{HighScore, QuestionBank, QuizSettings};
use services::{HIGH_SCORE_KEY, LOAD_ERROR_MESSAGE, QuizIntent};
use storage::repository::KeyValueStore;

use crate::vm::option_key_intent;

use super::test_harness::{setup_view_harness, setup_view_harness_with_settings};

const BUILTIN_ANSWERS: [usize; 6] = [1, 2, 1, 1, 0, 1];

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(QuestionBank::builtin()).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("declare in JavaScript?"), "missing prompt in {html}");
    assert!(html.contains("A changeable variable"), "missing option in {html}");
    assert!(html.contains("An array"), "missing option in {html}");
    assert!(
        html.contains(r#"aria-label="Option: A changeable variable""#),
        "missing option label in {html}"
    );
    assert!(html.contains("30s"), "missing countdown in {html}");
    assert!(html.contains("width: 16.67%;"), "missing progress in {html}");
    assert!(!html.contains("next-btn"), "continue shown early in {html}");
    assert!(!html.contains("Quiz Complete!"), "results shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_marks_wrong_and_right_options() {
    let mut harness = setup_view_harness(QuestionBank::builtin()).await;
    harness.rebuild();

    harness.send(QuizIntent::Select(0)).await;
    let html = harness.render();

    assert!(html.contains("option incorrect"), "missing incorrect mark in {html}");
    assert!(html.contains("option correct"), "missing correct mark in {html}");
    assert!(html.contains("next-btn"), "missing continue in {html}");
    assert!(!html.contains("countdown-seconds"), "countdown still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_perfect_run_shows_results_and_saves() {
    let mut harness = setup_view_harness(QuestionBank::builtin()).await;
    harness.rebuild();

    for answer in BUILTIN_ANSWERS {
        harness.send(QuizIntent::Select(answer)).await;
        harness.send(QuizIntent::Continue).await;
    }
    let html = harness.render();

    assert!(html.contains("Quiz Complete!"), "missing results in {html}");
    assert!(html.contains(">100<"), "missing percentage in {html}");
    assert!(html.contains("Outstanding!"), "missing feedback in {html}");
    assert!(html.contains("New high score"), "missing banner in {html}");
    assert!(!html.contains("quiz-container"), "question still shown in {html}");

    assert_eq!(harness.high_scores.load().await.unwrap(), HighScore::new(6));
    assert_eq!(
        harness.storage.kv.get(HIGH_SCORE_KEY).await.unwrap().as_deref(),
        Some("6")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restart_returns_to_first_question() {
    let mut harness = setup_view_harness(QuestionBank::builtin()).await;
    harness.rebuild();

    for _ in BUILTIN_ANSWERS {
        harness.send(QuizIntent::Select(3)).await;
        harness.send(QuizIntent::Continue).await;
    }
    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing results in {html}");
    assert!(!html.contains("New high score"), "banner shown for zero in {html}");

    harness.send(QuizIntent::Restart).await;
    let html = harness.render();
    assert!(!html.contains("Quiz Complete!"), "results still shown in {html}");
    assert!(html.contains("quiz-container"), "missing question in {html}");
    assert!(html.contains("30s"), "countdown not restarted in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_for_empty_bank() {
    let mut harness = setup_view_harness(QuestionBank::default()).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains(LOAD_ERROR_MESSAGE), "missing error in {html}");
    assert!(!html.contains("countdown-seconds"), "countdown shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_honours_configured_countdown() {
    let settings = QuizSettings::new(10, true).unwrap();
    let mut harness = setup_view_harness_with_settings(QuestionBank::builtin(), settings).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("10s"), "missing configured countdown in {html}");
    assert!(html.contains(">6<"), "missing total in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_enter_key_selects_option() {
    let mut harness = setup_view_harness(QuestionBank::builtin()).await;
    harness.rebuild();

    let intent = option_key_intent(1, &Key::Enter, Code::Enter).expect("enter activates");
    harness.send(intent).await;
    let html = harness.render();

    assert!(html.contains("option correct"), "missing correct mark in {html}");
    assert!(!html.contains("option incorrect"), "unexpected incorrect mark in {html}");
    assert!(html.contains("next-btn"), "missing continue in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_each_question_gets_a_full_first_second() {
    let mut harness = setup_view_harness(QuestionBank::builtin()).await;
    harness.rebuild();
    harness.drive_async().await;

    // Answer part way through the first question's tick period.
    tokio::time::advance(Duration::from_millis(700)).await;
    harness.send(QuizIntent::Select(1)).await;
    harness.send(QuizIntent::Continue).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(">2<"), "second question not loaded in {html}");
    assert!(html.contains("30s"), "missing fresh countdown in {html}");

    // Past the first question's next whole second, but not a full second into the second.
    tokio::time::advance(Duration::from_millis(500)).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("30s"), "countdown ticked early in {html}");

    tokio::time::advance(Duration::from_millis(600)).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("29s"), "countdown did not tick in {html}");
}
