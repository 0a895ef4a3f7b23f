// End-to-end tests for the animated backgrounds

use crate::common::harness::PortfolioTestHarness;
use crossterm::event::{KeyCode, MouseEventKind};
use folio::config::{BackgroundKind, Config};
use folio::fx::Background;
use std::time::Duration;

fn harness_with(background: BackgroundKind) -> PortfolioTestHarness {
    let config = Config {
        background,
        ..Config::default()
    };
    PortfolioTestHarness::with_config(100, 30, config).unwrap()
}

#[test]
fn test_starfield_shows_rocket_and_milestone() {
    let mut harness = harness_with(BackgroundKind::Starfield);
    harness.advance_time(Duration::from_millis(50));
    harness.render().unwrap();

    harness.assert_screen_contains("🚀");
    harness.assert_screen_contains("Starting Point");
}

#[test]
fn test_rocket_climbs_when_scrolling() {
    let mut harness = harness_with(BackgroundKind::Starfield);
    harness.render().unwrap();
    let (_, start_row) = harness.find_text("🚀").unwrap();

    harness.press(KeyCode::End).unwrap();
    harness.advance_time(Duration::from_secs(3));
    harness.render().unwrap();
    let (_, end_row) = harness.find_text("🚀").unwrap();
    assert!(end_row < start_row);
}

#[test]
fn test_starfield_population_matches_viewport() {
    let harness = harness_with(BackgroundKind::Starfield);
    match harness.app().animation().background() {
        // 100x30 cells = 800x480 px, one star per 3000 px²
        Background::Starfield(stars) => assert_eq!(stars.stars().len(), 128),
        other => panic!("unexpected background {other:?}"),
    }
}

#[test]
fn test_particles_follow_pointer_and_have_no_rocket() {
    let mut harness = harness_with(BackgroundKind::Particles);
    harness.mouse(MouseEventKind::Moved, 40, 10).unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("🚀");

    match harness.app().animation().background() {
        Background::Particles(field) => {
            let (x, y) = field.pointer().unwrap();
            assert_eq!(x, 40.0 * 8.0 + 4.0);
            assert_eq!(y, 10.0 * 16.0 + 8.0);
        }
        other => panic!("unexpected background {other:?}"),
    }
}

#[test]
fn test_no_background_never_animates() {
    let harness = harness_with(BackgroundKind::None);
    assert!(!harness.app().animation().is_running());
}

#[test]
fn test_rocket_sits_where_exhaust_is_emitted() {
    use folio::fx::starfield::rocket_position;
    use folio::fx::{cells_to_px, px_to_cell};

    let mut harness = harness_with(BackgroundKind::Starfield);
    harness.press(KeyCode::PageDown).unwrap();
    harness.press(KeyCode::PageDown).unwrap();
    harness.advance_time(Duration::from_secs(3));
    harness.render().unwrap();

    let progress = match harness.app().animation().background() {
        Background::Starfield(stars) => stars.progress(),
        other => panic!("unexpected background {other:?}"),
    };
    assert!(progress > 0.0 && progress < 100.0);

    // The starfield's viewport is the whole screen
    let (_, height_px) = cells_to_px(100, 30);
    let (x, y) = rocket_position(progress, height_px);
    let (col, row) = px_to_cell(x, y).unwrap();
    let page = harness.app().page_area();
    let row = row.clamp(page.y, page.bottom() - 1);

    assert_eq!(harness.find_text("🚀"), Some((col, row)));
}
