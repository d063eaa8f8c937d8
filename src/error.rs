//! Error types surfaced to the UI shell

use std::fmt;

/// Failures when driving a session from the UI shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Start was requested before a character was picked
    NoCharacterSelected,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoCharacterSelected => {
                write!(f, "Please select a character to start the game!")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Failures when loading or validating [`crate::Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// Values parsed but describe an unplayable configuration
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}
