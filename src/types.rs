//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Target number range (inclusive).
pub const TARGET_MIN: u32 = 1;
pub const TARGET_MAX: u32 = 100;

/// Round duration range in seconds (inclusive).
pub const ROUND_SECS_MIN: u32 = 10;
pub const ROUND_SECS_MAX: u32 = 30;

/// Number of calculator buttons on the board.
pub const BUTTON_COUNT: usize = 16;

/// Countdown granularity (milliseconds).
pub const TICK_MS: u64 = 1000;

/// Arithmetic operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Keypad order: +, -, *, / at layout indices 10..14.
pub const OPERATORS: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

/// One calculator button identity.
///
/// Each layout index maps to a fixed identity: digits in keypad order
/// 1..9 then 0 at indices 0..10, operators at 10..14, "=" at 14, "C" at 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(u8),
    Op(Operator),
    Equals,
    Clear,
}

impl Button {
    /// Button identity for a layout slot index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=8 => Some(Button::Digit(index as u8 + 1)),
            9 => Some(Button::Digit(0)),
            10..=13 => Some(Button::Op(OPERATORS[index - 10])),
            14 => Some(Button::Equals),
            15 => Some(Button::Clear),
            _ => None,
        }
    }

    /// Label drawn on the button face.
    pub fn label(&self) -> char {
        match self {
            Button::Digit(d) => char::from_digit(*d as u32, 10).unwrap_or('?'),
            Button::Op(op) => op.symbol(),
            Button::Equals => '=',
            Button::Clear => 'C',
        }
    }

    /// The game action a press of this button produces.
    pub fn action(&self) -> GameAction {
        match self {
            Button::Digit(d) => GameAction::Digit(*d),
            Button::Op(op) => GameAction::Op(*op),
            Button::Equals => GameAction::Submit,
            Button::Clear => GameAction::Clear,
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Digit(u8),
    Op(Operator),
    Submit,
    Clear,
}
