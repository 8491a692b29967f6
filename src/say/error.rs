use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SayError {
    #[error("parse error for {input:?}: {reason}")]
    Parse { input: String, reason: &'static str },
    #[error("unsupported say category: {0}")]
    UnsupportedCategory(String),
    #[error("unknown say {kind}: {value}")]
    UnknownArgument { kind: &'static str, value: String },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("nothing to say: no segment resolved")]
    NothingToSay,
    #[error("playback failed: {0}")]
    Playback(String),
}

impl SayError {
    pub fn parse<S: Into<String>>(input: S, reason: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }

    pub fn unknown_argument<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self::UnknownArgument {
            kind,
            value: value.into(),
        }
    }

    pub fn playback<S: Into<String>>(message: S) -> Self {
        Self::Playback(message.into())
    }

    /// Stable label for logs and telemetry.
    pub fn kind(&self) -> &'static str {
        match self {
            SayError::Parse { .. } => "parse",
            SayError::UnsupportedCategory(_) => "unsupported_category",
            SayError::UnknownArgument { .. } => "unknown_argument",
            SayError::Config(_) => "config",
            SayError::MalformedRequest(_) => "malformed_request",
            SayError::NothingToSay => "nothing_to_say",
            SayError::Playback(_) => "playback",
        }
    }
}
