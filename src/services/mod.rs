//! Services and external integrations
//!
//! Code that touches the outside world (clock, terminal, filesystem,
//! network, desktop) lives here behind small seams.

pub mod contact;
pub mod launcher;
pub mod log_dirs;
pub mod terminal_modes;
pub mod time_source;
pub mod timer;
pub mod tracing_setup;
