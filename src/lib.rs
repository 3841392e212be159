//! calc-rush: a terminal calculator game.
//!
//! Compose an expression that hits the target number before the countdown
//! runs out - while every button press scatters the keypad to fresh random
//! positions. `core` holds the pure game logic, `term` the crossterm view,
//! `input` the key mapping.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
