//! Terminal rendering layer for the mark grid.
//!
//! Renders into a simple framebuffer that is flushed to the terminal as a
//! full frame. The grid is tiny and repaints on input, so there is no need
//! for diff/dirty-rect machinery.
//!
//! Goals:
//! - Keep `core` and `engine` free of any I/O
//! - Make the view pure and unit-testable (framebuffer in, framebuffer out)

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use mark_match_core as core;
pub use mark_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridScene, GridView, Viewport};
pub use renderer::TerminalRenderer;
