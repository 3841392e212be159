//! Round controller - owns the complete game state.
//!
//! One `Game` value holds the target, countdown, score, expression and status
//! message, mutated only through its operations. Views read it through
//! accessors. Layout regeneration is signaled through a consumed flag so the
//! host can rebuild button positions exactly once per state-affecting event.

use crate::core::eval::{evaluate, format_number};
use crate::core::rng::SimpleRng;
use crate::types::{GameAction, Operator, ROUND_SECS_MAX, ROUND_SECS_MIN, TARGET_MAX, TARGET_MIN};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    target: u32,
    /// Seconds remaining in the current round.
    time_left: u32,
    timer_active: bool,
    score: u32,
    expression: String,
    message: String,
    rng: SimpleRng,
    /// Set by every state-affecting operation, consumed by the host.
    layout_requested: bool,
    started: bool,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            target: 0,
            time_left: 0,
            timer_active: false,
            score: 0,
            expression: "0".to_string(),
            message: "Get started!".to_string(),
            rng: SimpleRng::new(seed),
            layout_requested: false,
            started: false,
        }
    }

    /// Start the game: draws the first target and arms the countdown.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.start_round();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn timer_active(&self) -> bool {
        self.timer_active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the pending layout-regeneration request, if any.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    /// Dispatch a button press or key action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Digit(d) => self.push_digit(d),
            GameAction::Op(op) => self.push_operator(op),
            GameAction::Submit => self.submit(),
            GameAction::Clear => self.clear(),
        }
    }

    /// Begin a fresh round: new target, new countdown. Score is untouched.
    pub fn start_round(&mut self) {
        self.target = self.rng.next_between(TARGET_MIN, TARGET_MAX);
        let duration = self.rng.next_between(ROUND_SECS_MIN, ROUND_SECS_MAX);
        self.time_left = duration;
        self.timer_active = true;
        self.message = round_prompt(self.target, duration);
        self.layout_requested = true;
    }

    /// Append a digit; a lone "0" display is replaced rather than extended.
    pub fn push_digit(&mut self, digit: u8) {
        let d = char::from_digit(digit as u32 % 10, 10).unwrap_or('0');
        if self.expression == "0" {
            self.expression.clear();
        }
        self.expression.push(d);
        self.layout_requested = true;
    }

    /// Append an operator symbol. No shape validation; a malformed
    /// expression surfaces at submit time.
    pub fn push_operator(&mut self, op: Operator) {
        self.expression.push(op.symbol());
        self.layout_requested = true;
    }

    /// Reset the expression to "0".
    pub fn clear(&mut self) {
        self.expression = "0".to_string();
        self.layout_requested = true;
    }

    /// Evaluate the expression against the target.
    ///
    /// An exact match scores a point and immediately rolls into a new round,
    /// so the celebration message is superseded by the next prompt before a
    /// render can show it. A non-finite result (division by zero) can never
    /// equal an integer target and lands on the "Try again" path.
    pub fn submit(&mut self) {
        match evaluate(&self.expression) {
            Err(_) => {
                self.message = "Invalid expression!".to_string();
            }
            Ok(result) => {
                if result == self.target as f64 {
                    self.score += 1;
                    self.message = "🎉 Perfect! Here's a new target!".to_string();
                    self.timer_active = false;
                    self.start_round();
                } else {
                    self.message = format!(
                        "Try again! You got {}, but need {}",
                        format_number(result),
                        self.target
                    );
                }
            }
        }
        self.expression = "0".to_string();
        self.layout_requested = true;
    }

    /// Advance the countdown by one second.
    ///
    /// No-op unless the timer is active with time remaining. Hitting zero
    /// rolls straight into a new round; the timer stays armed across the
    /// rollover.
    pub fn tick(&mut self) {
        if !self.timer_active || self.time_left == 0 {
            return;
        }

        self.time_left -= 1;
        if self.time_left > 0 {
            self.message = round_prompt(self.target, self.time_left);
        } else {
            self.message = "Time's up! Here's a new target!".to_string();
            self.expression = "0".to_string();
            self.start_round();
        }
    }
}

fn round_prompt(target: u32, seconds: u32) -> String {
    format!("Get to {}! Time left: {}s", target, seconds)
}
