// End-to-end tests for the journey modal

use crate::common::harness::PortfolioTestHarness;
use crossterm::event::KeyCode;
use std::time::Duration;

fn open_journey() -> PortfolioTestHarness {
    let mut harness = PortfolioTestHarness::new(120, 40).unwrap();
    harness.type_text("j").unwrap();
    assert!(harness.app().journey().is_open());
    harness
}

#[test]
fn test_opens_at_origin() {
    let mut harness = open_journey();
    harness.render().unwrap();

    harness.assert_screen_contains("Journey Through Time");
    harness.assert_screen_contains("1/6 Unlocked");
    harness.assert_screen_contains("The Origin");
    harness.assert_screen_contains("Stop 1 of 6");
    harness.assert_screen_not_contains("New Chapter Unlocked!");
}

#[test]
fn test_travel_unlocks_and_announces() {
    let mut harness = open_journey();
    harness.press(KeyCode::Right).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("2/6 Unlocked");
    harness.assert_screen_contains("The Pivot");
    harness.assert_screen_contains("New Chapter Unlocked!");
    harness.assert_screen_contains("Stop 2 of 6");

    harness.advance_time(Duration::from_secs(2));
    harness.render().unwrap();
    harness.assert_screen_not_contains("New Chapter Unlocked!");
    harness.assert_screen_contains("The Pivot");
}

#[test]
fn test_revisit_does_not_announce() {
    let mut harness = open_journey();
    harness.press(KeyCode::Right).unwrap();
    harness.advance_time(Duration::from_secs(3));
    harness.press(KeyCode::Left).unwrap();
    harness.press(KeyCode::Right).unwrap();
    harness.render().unwrap();

    harness.assert_screen_not_contains("New Chapter Unlocked!");
    harness.assert_screen_contains("2/6 Unlocked");
}

#[test]
fn test_digit_and_end_jump() {
    let mut harness = open_journey();
    harness.type_text("4").unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("Startup Mode");
    harness.assert_screen_contains("Founding Engineer");

    harness.press(KeyCode::End).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("Security Chapter");
    harness.assert_screen_contains("3/6 Unlocked");

    // Out of range digit is ignored
    harness.type_text("9").unwrap();
    assert_eq!(harness.app().journey().current(), 5);
}

#[test]
fn test_escape_closes_and_keeps_progress() {
    let mut harness = open_journey();
    harness.type_text("3").unwrap();
    harness.press(KeyCode::Esc).unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("Journey Through Time");

    harness.type_text("j").unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("2/6 Unlocked");
    harness.assert_screen_contains("First Victory");
}
