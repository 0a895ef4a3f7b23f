//! Terminal mode management
//!
//! Tracks raw mode, the alternate screen, mouse capture, keyboard
//! enhancement and the hidden cursor so the terminal can be restored
//! exactly on exit or panic.
//!
//! Keyboard enhancement lets Ctrl+M arrive as its own key instead of a
//! carriage return. Terminals without it still have F2 for the same action.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use std::io::{stdout, Write};

/// Tracks which terminal modes have been enabled and provides cleanup.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    mouse_capture: bool,
    keyboard_enhancement: bool,
    cursor_hidden: bool,
}

/// Flags pushed when the terminal supports the kitty keyboard protocol.
pub fn keyboard_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
}

impl TerminalModes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable all terminal modes.
    ///
    /// Mouse capture is optional: without it the pointer-driven effects
    /// simply never see a pointer. On error, already-enabled modes are undone.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::new();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e.into());
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        match supports_keyboard_enhancement() {
            Ok(true) => {
                let flags = keyboard_flags();
                if let Err(e) = stdout().execute(PushKeyboardEnhancementFlags(flags)) {
                    tracing::warn!("Failed to enable keyboard enhancement: {}", e);
                } else {
                    modes.keyboard_enhancement = true;
                    tracing::debug!("Enabled keyboard enhancement flags: {:?}", flags);
                }
            }
            Ok(false) => tracing::info!("Keyboard enhancement not supported by terminal"),
            Err(e) => tracing::warn!("Failed to query keyboard enhancement support: {}", e),
        }

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        if let Err(e) = stdout().execute(EnableMouseCapture) {
            tracing::warn!("Failed to enable mouse capture: {}", e);
        } else {
            modes.mouse_capture = true;
            tracing::debug!("Enabled mouse capture");
        }

        if stdout().execute(Hide).is_ok() {
            modes.cursor_hidden = true;
        }

        Ok(modes)
    }

    /// Restore terminal to original state by disabling all enabled modes.
    ///
    /// Safe to call multiple times.
    pub fn undo(&mut self) {
        if self.keyboard_enhancement {
            let _ = stdout().execute(PopKeyboardEnhancementFlags);
            self.keyboard_enhancement = false;
            tracing::debug!("Popped keyboard enhancement flags");
        }

        if self.mouse_capture {
            let _ = stdout().execute(DisableMouseCapture);
            self.mouse_capture = false;
            tracing::debug!("Disabled mouse capture");
        }

        if self.cursor_hidden {
            let _ = stdout().execute(Show);
            self.cursor_hidden = false;
        }

        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }

        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
            tracing::debug!("Left alternate screen");
        }

        let _ = stdout().flush();
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture
    }

    pub fn keyboard_enhancement_enabled(&self) -> bool {
        self.keyboard_enhancement
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state without tracking.
///
/// For panic hooks, where the `TerminalModes` instance isn't reachable.
pub fn emergency_cleanup() {
    let _ = stdout().execute(PopKeyboardEnhancementFlags);
    let _ = stdout().execute(DisableMouseCapture);
    let _ = stdout().execute(Show);
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().flush();
}
