use std::{fmt, str::FromStr, sync::Arc};

use crate::{Face, cube::CubeState, error::MoveError, face_map::FaceMap};

/// Single letters the interactive front end keeps for itself (help, solve,
/// new cube, scramble, close). The engine rejects them as "not a move" so
/// they never collide with the face letters.
pub const RESERVED_COMMANDS: [char; 5] = ['h', 's', 'n', 'x', 'c'];

/// A parsed, validated move: a face plus how many clockwise quarter turns to
/// give it. Built per input line and consumed immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveToken {
    face: Face,
    turns: u8,
}

impl MoveToken {
    /// Grammar: one face letter out of `t f d r l b`, optionally followed by
    /// a repeat count `1`, `2`, or `3`. Reserved command letters come back as
    /// [`MoveError::ReservedCommand`]; everything else that fails is
    /// [`MoveError::InvalidMove`].
    pub fn parse(text: &str) -> Result<MoveToken, MoveError> {
        let trimmed = text.trim();
        let invalid = || MoveError::InvalidMove(text.to_owned());

        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let rest = chars.as_str();

        let Some(face) = Face::from_letter(letter) else {
            if rest.is_empty() && RESERVED_COMMANDS.contains(&letter) {
                return Err(MoveError::ReservedCommand(letter));
            }

            return Err(invalid());
        };

        let turns = match rest {
            "" | "1" => 1,
            "2" => 2,
            "3" => 3,
            _ => return Err(invalid()),
        };

        Ok(MoveToken { face, turns })
    }

    pub fn new(face: Face, turns: u8) -> Option<MoveToken> {
        (1..=3).contains(&turns).then_some(MoveToken { face, turns })
    }

    pub fn face(self) -> Face {
        self.face
    }

    pub fn turns(self) -> u8 {
        self.turns
    }

    /// The token undoing this one: same face, complementary turn count.
    pub fn inverse(self) -> MoveToken {
        MoveToken {
            face: self.face,
            turns: 4 - self.turns,
        }
    }
}

impl FromStr for MoveToken {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<MoveToken, MoveError> {
        MoveToken::parse(s)
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.turns == 1 {
            write!(f, "{}", self.face.letter())
        } else {
            write!(f, "{}{}", self.face.letter(), self.turns)
        }
    }
}

/// Applies moves to cube states by walking the face map's cycles. Stateless
/// apart from the shared read-only table; it borrows each state for the
/// duration of one call and keeps nothing.
#[derive(Clone, Debug)]
pub struct MoveEngine {
    map: Arc<FaceMap>,
}

impl MoveEngine {
    pub fn new(map: Arc<FaceMap>) -> MoveEngine {
        MoveEngine { map }
    }

    pub fn face_map(&self) -> &FaceMap {
        &self.map
    }

    /// Applies one move, returning the permuted state. Pure: the same state
    /// and token always produce the same result, and the input is never
    /// half-mutated because the work happens on the returned copy.
    pub fn apply(&self, state: &CubeState, token: MoveToken) -> CubeState {
        let mut next = state.clone();

        for _ in 0..token.turns {
            for cycle in self.map.cycles(token.face) {
                let carried = next.facelets[cycle[cycle.len() - 1]];

                for i in (1..cycle.len()).rev() {
                    next.facelets[cycle[i]] = next.facelets[cycle[i - 1]];
                }

                next.facelets[cycle[0]] = carried;
            }
        }

        next
    }
}
