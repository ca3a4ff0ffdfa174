use std::fmt;

#[derive(Debug)]
pub enum ComposeError {
    InvalidInput(InvalidInput),
    Synthesis(SynthesisError),
}

/// Input rejected before any synthesis runs. Always carries a specific,
/// actionable message for the caller.
#[derive(Debug, PartialEq)]
pub enum InvalidInput {
    NoEnabledObjects,
    TooManyTracks { count: usize, max: usize },
    NoTracks,
    EmptyLyrics,
    DurationOutOfRange { seconds: f64 },
}

/// Unexpected numeric failure inside the pipeline. Logged with full
/// context at the boundary; callers only see a generic message.
#[derive(Debug, PartialEq)]
pub enum SynthesisError {
    NonFiniteSample { stage: &'static str, index: usize },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidInput(e) => write!(f, "Invalid input: {e}"),
            // Internals stay out of the caller-facing message.
            ComposeError::Synthesis(_) => write!(f, "Internal synthesis failure"),
        }
    }
}

impl std::error::Error for ComposeError {}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NoEnabledObjects => {
                write!(f, "At least one object must be enabled")
            }
            InvalidInput::TooManyTracks { count, max } => {
                write!(f, "Too many tracks ({count}, max {max})")
            }
            InvalidInput::NoTracks => write!(f, "No tracks to mix"),
            InvalidInput::EmptyLyrics => write!(f, "Lyrics cannot be empty"),
            InvalidInput::DurationOutOfRange { seconds } => {
                write!(f, "Duration must be between 1 and 60 seconds, got {seconds}")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::NonFiniteSample { stage, index } => {
                write!(f, "Non-finite sample at index {index} during {stage}")
            }
        }
    }
}

impl std::error::Error for SynthesisError {}

impl From<InvalidInput> for ComposeError {
    fn from(e: InvalidInput) -> Self {
        ComposeError::InvalidInput(e)
    }
}

impl From<SynthesisError> for ComposeError {
    fn from(e: SynthesisError) -> Self {
        ComposeError::Synthesis(e)
    }
}
