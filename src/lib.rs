//! Bitmask grid viewer: a 128x128 cell grid with a click-to-inspect sidebar.

pub mod app;
pub mod config;
pub mod font;
pub mod frame_clock;
pub mod graphics;
pub mod grid;
pub mod input;
pub mod layout;
