// End-to-end tests for page scrolling, the nav bar and the progress bar

use crate::common::harness::PortfolioTestHarness;
use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
use folio::content::Section;
use std::time::Duration;

#[test]
fn test_first_screen_shows_hero_and_nav() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Pratik Desai");
    harness.assert_screen_contains("Senior Software Engineer");
    harness.assert_screen_contains("1 About");
    harness.assert_screen_contains("6 Contact");
    harness.assert_screen_contains("t terminal");
    assert_eq!(harness.app().active_section(), None);
}

#[test]
fn test_number_keys_jump_to_sections() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.type_text("2").unwrap();
    harness.render().unwrap();

    let top = harness.app().page().section_top(Section::Experience).unwrap();
    assert_eq!(harness.app().scroll().offset(), top);
    assert_eq!(harness.app().active_section(), Some(Section::Experience));
    // Section heading is the first page row, just under the nav bar
    assert!(harness.get_screen_row(2).contains("02. Experience"));
}

#[test]
fn test_footer_carries_current_year() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::End).unwrap();
    harness.render().unwrap();

    let year = harness.app().current_year();
    harness.assert_screen_contains(&format!("© {year} Pratik Desai. All rights reserved."));
    assert_eq!(
        harness.app().scroll().offset(),
        harness.app().scroll().max_offset()
    );
}

#[test]
fn test_progress_bar_eases_toward_scroll() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.press(KeyCode::End).unwrap();
    let early = harness.app().scroll().eased_progress();
    assert!(early < 1.0);

    harness.advance_time(Duration::from_secs(3));
    assert_eq!(harness.app().scroll().eased_progress(), 1.0);
    harness.render().unwrap();
    let bar = harness.buffer();
    let filled = (0..100)
        .filter(|&x| bar[(x, 0)].fg == harness.app().theme().progress_fg)
        .count();
    assert_eq!(filled, 100);
}

#[test]
fn test_mouse_wheel_scrolls() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.mouse(MouseEventKind::ScrollDown, 5, 10).unwrap();
    harness.mouse(MouseEventKind::ScrollDown, 5, 10).unwrap();
    assert_eq!(harness.app().scroll().offset(), 6);
    harness.mouse(MouseEventKind::ScrollUp, 5, 10).unwrap();
    assert_eq!(harness.app().scroll().offset(), 3);
}

#[test]
fn test_resize_rewraps_page() {
    let mut harness = PortfolioTestHarness::new(120, 30).unwrap();
    let wide = harness.app().page().height();
    harness.resize(50, 30).unwrap();
    harness.render().unwrap();

    assert!(harness.app().page().height() > wide);
    harness.assert_screen_contains("Pratik Desai");
}

#[test]
fn test_resume_key_and_quit() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness.type_text("r").unwrap();
    assert_eq!(harness.opened_urls().len(), 1);

    harness.type_text("q").unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut harness = PortfolioTestHarness::new(100, 30).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_tiny_terminal_renders() {
    let mut harness = PortfolioTestHarness::new(10, 2).unwrap();
    harness.render().unwrap();
    harness.resize(0, 0).unwrap();
    harness.render().unwrap();
}
