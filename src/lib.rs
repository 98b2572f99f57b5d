#![warn(clippy::all)]

mod config;
mod grid;
mod neighborhood;
mod simulation;
mod terminal;
mod utils;

pub use config::{Arguments, Config};
pub use grid::{next_state, Frame, Grid, Population, ALIVE_GLYPH, DEAD_GLYPH, RANDOM_SENTINEL, ROW_SEPARATOR};
pub use neighborhood::Neighborhood;
pub use simulation::{Controls, LoopState, Observer, Outcome, SimulationLoop, StopReason, Wait};
pub use terminal::{
    print_welcome, Chime, CrosstermKeys, KeySource, RawModeGuard, TerminalControls, TerminalView,
};
pub use utils::{NiceInt, Pacer};
