// End-to-end tests for the floating command terminal

use crate::common::harness::PortfolioTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use folio::config::{BackgroundKind, Config};
use std::time::Duration;

fn open_terminal() -> PortfolioTestHarness {
    let mut harness = PortfolioTestHarness::new(120, 40).unwrap();
    harness.type_text("t").unwrap();
    assert!(harness.app().terminal().is_open());
    harness
}

fn run(harness: &mut PortfolioTestHarness, command: &str) {
    harness.type_text(command).unwrap();
    harness.press(KeyCode::Enter).unwrap();
}

#[test]
fn test_welcome_banner_on_empty_scrollback() {
    let mut harness = open_terminal();
    harness.render().unwrap();
    harness.assert_screen_contains("Welcome to Pratik's Interactive Terminal!");
    harness.assert_screen_contains("Type 'help' to see available commands.");
    harness.assert_screen_contains("visitor@folio:~$");
}

#[test]
fn test_help_lists_commands() {
    let mut harness = open_terminal();
    run(&mut harness, "help");
    harness.render().unwrap();

    harness.assert_screen_contains("Available commands:");
    harness.assert_screen_contains("matrix     - Enter the matrix");
    harness.assert_screen_not_contains("Welcome to Pratik's Interactive Terminal!");
}

#[test]
fn test_unknown_command_shows_error_with_raw_input() {
    let mut harness = open_terminal();
    run(&mut harness, "sudo make me a sandwich");
    harness.render().unwrap();

    harness.assert_screen_contains("Command not found: sudo make me a sandwich");
    let entries = harness.app().terminal().scrollback();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_error);
}

#[test]
fn test_clear_brings_back_the_banner() {
    let mut harness = open_terminal();
    run(&mut harness, "coffee");
    run(&mut harness, "CLEAR");
    harness.render().unwrap();

    assert!(harness.app().terminal().scrollback().is_empty());
    harness.assert_screen_contains("Welcome to Pratik's Interactive Terminal!");
}

#[test]
fn test_history_recall_with_arrows() {
    let mut harness = open_terminal();
    run(&mut harness, "about");
    run(&mut harness, "skills");

    harness.press(KeyCode::Up).unwrap();
    assert_eq!(harness.app().terminal().input(), "skills");
    harness.press(KeyCode::Up).unwrap();
    harness.press(KeyCode::Up).unwrap();
    assert_eq!(harness.app().terminal().input(), "about");
    harness.press(KeyCode::Down).unwrap();
    assert_eq!(harness.app().terminal().input(), "skills");
    harness.press(KeyCode::Down).unwrap();
    assert_eq!(harness.app().terminal().input(), "");
}

#[test]
fn test_matrix_rain_lasts_five_seconds() {
    let mut harness = open_terminal();
    run(&mut harness, "matrix");
    assert!(harness.app().terminal().matrix_active());

    harness.advance_time(Duration::from_millis(4_900));
    assert!(harness.app().terminal().matrix_active());

    harness.advance_time(Duration::from_millis(200));
    assert!(!harness.app().terminal().matrix_active());
    harness.render().unwrap();
    harness.assert_screen_contains("Entering the matrix...");
}

#[test]
fn test_resume_command_opens_configured_url() {
    let mut config = Config {
        background: BackgroundKind::None,
        ..Config::default()
    };
    config.links.resume_url = "https://example.com/cv.pdf".to_string();
    let mut harness = PortfolioTestHarness::with_config(120, 40, config).unwrap();
    harness.type_text("t").unwrap();
    run(&mut harness, "resume");

    assert_eq!(harness.opened_urls(), ["https://example.com/cv.pdf"]);
}

#[test]
fn test_minimize_and_close() {
    let mut harness = open_terminal();
    harness.press(KeyCode::F(2)).unwrap();
    assert!(harness.app().terminal().is_minimized());
    harness.render().unwrap();
    harness.assert_screen_contains("F2 restore");

    // Minimized terminal leaves page keys alone
    harness.press(KeyCode::PageDown).unwrap();
    assert!(harness.app().scroll().offset() > 0);

    harness.press(KeyCode::F(2)).unwrap();
    assert!(!harness.app().terminal().is_minimized());
    harness.render().unwrap();
    harness.assert_screen_contains("F2 minimize");

    harness.press(KeyCode::Esc).unwrap();
    assert!(!harness.app().terminal().is_open());
    harness.render().unwrap();
    harness.assert_screen_not_contains("F2 minimize");
}

#[test]
fn test_enhanced_ctrl_m_minimizes() {
    // Reported as Char('m') + CONTROL once keyboard enhancement is pushed
    let mut harness = open_terminal();
    harness
        .send_key(KeyCode::Char('m'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.app().terminal().is_minimized());
}

#[test]
fn test_plain_enter_submits_instead_of_minimizing() {
    let mut harness = open_terminal();
    harness.type_text("about").unwrap();
    harness.press(KeyCode::Enter).unwrap();
    assert!(!harness.app().terminal().is_minimized());
    assert_eq!(harness.app().terminal().history(), ["about"]);
}

#[test]
fn test_open_on_start() {
    let mut config = Config {
        background: BackgroundKind::None,
        ..Config::default()
    };
    config.terminal.open_on_start = true;
    config.terminal.prompt = "guest@box".to_string();
    let mut harness = PortfolioTestHarness::with_config(120, 40, config).unwrap();
    harness.render().unwrap();

    assert!(harness.app().terminal().is_open());
    harness.assert_screen_contains("guest@box$");
}
