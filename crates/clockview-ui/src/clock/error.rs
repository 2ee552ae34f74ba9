use std::fmt;

/// Errors raised by the clock widget.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// A style option holds a value the clock cannot be drawn with.
    ///
    /// Raised while resolving a [`ClockStyle`](super::ClockStyle); no widget is
    /// constructed from a rejected configuration.
    Configuration {
        option: &'static str,
        reason: String,
    },
    /// A numeral index outside `[0, 11]` was looked up.
    Lookup { index: usize },
}

impl ClockError {
    pub(crate) fn config(option: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration { option, reason: reason.into() }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::Configuration { option, reason } => {
                write!(f, "invalid clock style option `{option}`: {reason}")
            }
            ClockError::Lookup { index } => {
                write!(f, "numeral index {index} is outside 0..12")
            }
        }
    }
}

impl std::error::Error for ClockError {}
