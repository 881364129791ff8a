use thiserror::Error;

/// Game-specific error types.
///
/// Simulation operations never fail with these; rejected actions are
/// reported as `false`/`None`. Errors only surface at the edges: command
/// parsing, configuration loading and the command line.
#[derive(Debug, Error)]
pub enum GameError {
    /// Failed to parse text input (companion command, CLI value)
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Input was well-formed but outside the accepted range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Configuration file could not be used
    #[error("Configuration error: {0}")]
    Config(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}
