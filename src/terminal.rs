mod banner;
mod chime;
mod controls;
mod view;

pub use banner::print_welcome;
pub use chime::Chime;
pub use controls::{CrosstermKeys, KeySource, TerminalControls};
pub use view::TerminalView;

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Keeps the terminal in raw mode so single key presses are delivered.
///
/// Raw mode is restored on drop, including during unwinding.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to switch the terminal to raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::error!("Failed to restore the terminal: {e}");
        }
    }
}
