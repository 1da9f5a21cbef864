//! Move notation: the 18 face turns of a 3×3 cube.

use super::face::Face;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How far a face turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Turn {
    /// Quarter turn clockwise (`R`).
    Clockwise,
    /// Quarter turn counter-clockwise (`R'`).
    CounterClockwise,
    /// Half turn (`R2`).
    Double,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Double => Self::Double,
        }
    }

    /// Notation suffix.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::CounterClockwise => "'",
            Self::Double => "2",
        }
    }

    pub const fn is_quarter(self) -> bool {
        !matches!(self, Self::Double)
    }
}

/// Errors produced when reading a move token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("empty move token")]
    Empty,

    #[error("unknown face in move token '{token}'")]
    UnknownFace { token: String },

    #[error("unknown modifier in move token '{token}'")]
    UnknownModifier { token: String },
}

/// A single face turn.
///
/// Serializes as its notation string (`"R'"`).
///
/// # Example
///
/// ```rust
/// use cube_trainer::core::{Face, Move, Turn};
///
/// let mv: Move = "R'".parse().unwrap();
/// assert_eq!(mv, Move::new(Face::R, Turn::CounterClockwise));
/// assert_eq!(mv.inverse().to_string(), "R");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    face: Face,
    turn: Turn,
}

impl Move {
    /// Every move, grouped by face.
    pub const ALL: [Move; 18] = {
        let mut all = [Move::new(Face::U, Turn::Clockwise); 18];
        let mut i = 0;
        while i < 18 {
            let face = Face::ALL[i / 3];
            let turn = Turn::ALL[i % 3];
            all[i] = Move::new(face, turn);
            i += 1;
        }
        all
    };

    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub const fn face(self) -> Face {
        self.face
    }

    pub const fn turn(self) -> Turn {
        self.turn
    }

    /// The move that undoes this one on any state.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let first = chars.next().ok_or(MoveParseError::Empty)?;
        let face = Face::from_letter(first).ok_or_else(|| MoveParseError::UnknownFace {
            token: token.to_string(),
        })?;

        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" => Turn::CounterClockwise,
            "2" => Turn::Double,
            _ => {
                return Err(MoveParseError::UnknownModifier {
                    token: token.to_string(),
                })
            }
        };

        Ok(Self::new(face, turn))
    }
}

impl TryFrom<String> for Move {
    type Error = MoveParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}
