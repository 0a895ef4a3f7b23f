// End-to-end tests for the contact form overlay

use crate::common::harness::PortfolioTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use folio::services::contact::SubmitError;
use std::time::Duration;

fn fill_form(harness: &mut PortfolioTestHarness) {
    harness.type_text("Ada Lovelace").unwrap();
    harness.press(KeyCode::Tab).unwrap();
    harness.type_text("ada@example.com").unwrap();
    harness.press(KeyCode::Tab).unwrap();
    harness.type_text("Analytical engines").unwrap();
    harness.press(KeyCode::Tab).unwrap();
    harness.type_text("Shall we talk?").unwrap();
}

fn open_form() -> PortfolioTestHarness {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.type_text("c").unwrap();
    assert!(harness.app().contact().is_open());
    harness
}

#[test]
fn test_form_shows_placeholders() {
    let mut harness = open_form();
    harness.render().unwrap();

    harness.assert_screen_contains("Send a Message");
    harness.assert_screen_contains("john@example.com");
    harness.assert_screen_contains("Tell me about your project...");
}

#[test]
fn test_enter_on_message_submits() {
    let mut harness = open_form();
    fill_form(&mut harness);
    harness.press(KeyCode::Enter).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Message sent successfully!");
    let sent = harness.submitter().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ada Lovelace");
    assert_eq!(sent[0].message, "Shall we talk?");
    // Fields are cleared after success
    harness.assert_screen_contains("John Doe");

    harness.advance_time(Duration::from_secs(5));
    harness.render().unwrap();
    harness.assert_screen_not_contains("Message sent successfully!");
}

#[test]
fn test_failure_keeps_input_and_shows_message() {
    let mut harness = open_form();
    harness
        .submitter()
        .fail_with(SubmitError::Rejected("Form not found".to_string()));
    fill_form(&mut harness);
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Form not found");
    harness.assert_screen_contains("Ada Lovelace");
    assert!(harness.submitter().sent().is_empty());
}

#[test]
fn test_validation_happens_before_sending() {
    let mut harness = open_form();
    harness.type_text("Ada").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Please fill in your email");
    assert!(harness.submitter().sent().is_empty());
}

#[test]
fn test_typing_q_in_form_does_not_quit() {
    let mut harness = open_form();
    harness.type_text("q").unwrap();
    assert!(!harness.should_quit());
    harness.press(KeyCode::Esc).unwrap();
    assert!(!harness.app().contact().is_open());
}
