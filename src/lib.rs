mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod player;
mod ship;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{BitGrid, BitGridError};
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use ui::*;
