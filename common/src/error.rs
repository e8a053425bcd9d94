use std::error::Error;
use std::fmt;

/// Failure conditions surfaced by the game core.
///
/// `InvalidArgument` and `NotFound` are expected, recoverable-by-caller
/// conditions. `CorruptState` marks persisted board text that no longer
/// parses and is kept separate from client-input errors so diagnostics can
/// tell bad requests apart from data corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidArgument(String),
    NotFound(String),
    CorruptState(String),
    Internal(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidArgument(message)
            | GameError::NotFound(message)
            | GameError::CorruptState(message)
            | GameError::Internal(message) => write!(f, "{}", message),
        }
    }
}

impl Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_message() {
        let err = GameError::NotFound("Game with ID 7 not found".to_string());
        assert_eq!(err.to_string(), "Game with ID 7 not found");
    }
}
