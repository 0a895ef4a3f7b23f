//! Decorative background animation.
//!
//! Simulations run in virtual pixels and are painted through the `Surface`
//! trait. On screen, one terminal cell stands for a block of
//! `CELL_WIDTH_PX` x `CELL_HEIGHT_PX` pixels.

pub mod cell_surface;
pub mod engine;
pub mod frame_clock;
pub mod particles;
pub mod starfield;
pub mod surface;

pub use cell_surface::CellSurface;
pub use engine::{AnimationLoop, Background};
pub use surface::{ColorStop, Rgba, Surface};

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Pixel size of a `cols` x `rows` cell area.
pub fn cells_to_px(cols: u16, rows: u16) -> (f64, f64) {
    (cols as f64 * CELL_WIDTH_PX, rows as f64 * CELL_HEIGHT_PX)
}

/// Pixel position of the centre of cell (`col`, `row`).
pub fn cell_center_px(col: u16, row: u16) -> (f64, f64) {
    (
        (col as f64 + 0.5) * CELL_WIDTH_PX,
        (row as f64 + 0.5) * CELL_HEIGHT_PX,
    )
}

/// Cell holding pixel (`x`, `y`), if it is not left of or above the origin.
pub fn px_to_cell(x: f64, y: f64) -> Option<(u16, u16)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / CELL_WIDTH_PX).floor();
    let row = (y / CELL_HEIGHT_PX).floor();
    if col > u16::MAX as f64 || row > u16::MAX as f64 {
        return None;
    }
    Some((col as u16, row as u16))
}
