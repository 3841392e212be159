//! Core module - pure game logic with no external dependencies
//!
//! Round state, expression evaluation, and button placement. It has zero
//! dependencies on UI, timers, or I/O, so everything here is deterministic
//! and unit-testable.

pub mod eval;
pub mod layout;
pub mod rng;
pub mod round;

// Re-export commonly used types
pub use eval::{evaluate, EvalError};
pub use layout::{generate, in_bounds, slots_overlap, ButtonSlot, Canvas, Layout, LayoutParams};
pub use rng::SimpleRng;
pub use round::Game;
