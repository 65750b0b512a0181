pub mod app;
pub mod camera;
pub mod cell;
pub mod config;
pub mod engine;
pub mod events;
pub mod grid;
pub mod io;
pub mod layout;
pub mod pattern;
pub mod rules;

/// Number of columns in the board
pub const WIDTH: usize = 16;

/// Number of rows in the board
pub const HEIGHT: usize = 20;

pub type GridCoord = usize;
pub type PixelOffset = u32;
pub type Generation = u64;
