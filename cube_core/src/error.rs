use thiserror::Error;

/// Fatal face-mapping problems. All of these surface while loading the
/// mapping document, before any move is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("face mapping document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{0}` is not one of the six face letters")]
    UnknownFace(String),
    #[error("no mapping entry for face `{0}`")]
    MissingFace(char),
    #[error("face `{face}`: cycle index {index} is outside [0, 54)")]
    IndexOutOfRange { face: char, index: usize },
    #[error("face `{face}`: index {index} appears in more than one cycle")]
    OverlappingCycles { face: char, index: usize },
    #[error("face `{face}`: cycles move {count} facelets, a quarter turn moves exactly 20")]
    WrongCoverage { face: char, count: usize },
    #[error("face `{face}`: cycles move facelet {index}, which a turn of this face must leave fixed")]
    MovesPinnedFacelet { face: char, index: usize },
    #[error("face `{face}`: a cycle of length {len} cannot come from a quarter turn")]
    NotAQuarterTurn { face: char, len: usize },
}

/// Fatal cube-snapshot problems, surfaced while loading the saved state.
#[derive(Debug, Error)]
pub enum MalformedStateError {
    #[error("cube snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cube snapshot holds {0} facelets, expected 54")]
    WrongLength(usize),
    #[error("`{0}` is not a legal facelet label")]
    IllegalLabel(String),
}

/// Recoverable per-token problems. The cube state is untouched when one of
/// these is reported.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("`{0}` is not a valid move")]
    InvalidMove(String),
    #[error("`{0}` is a front-end command, not a move")]
    ReservedCommand(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not one of the six face letters")]
pub struct UnknownFaceError(pub char);
