//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the view maps game state and the
//! current button layout into a styled-cell framebuffer, and the renderer
//! flushes diffed frames to the terminal. The view is pure and tested; the
//! renderer owns all terminal I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, HEADER_ROWS};
pub use renderer::TerminalRenderer;
