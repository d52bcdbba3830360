use std::fmt::{self, Display};
use std::io;

/// Error type for every failure the formatter can produce.
///
/// Syntax errors carry a resolved (line, character) location so callers can
/// report them the way a compiler would; I/O errors carry a message naming
/// the operation and path that failed.
#[derive(Debug)]
pub enum FormatError {
    /// Open, read, write, or stat failure on a file or a standard stream.
    Io {
        message: String,
        source: io::Error,
    },
    /// Malformed JSON input, with the location resolved from the parser's
    /// reported position (first line is 1).
    Syntax {
        line: usize,
        character: usize,
        message: String,
    },
    /// Re-encoding a parsed value failed. Should not happen for a value that
    /// was itself successfully decoded, but is surfaced rather than ignored.
    Serialize(serde_json::Error),
    /// The offset locator was asked about a position past the end of input.
    OutOfRange { offset: usize },
    /// Directory traversal failure (permissions, broken link, ...).
    Walk(walkdir::Error),
}

impl FormatError {
    pub(crate) fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { message, source } => write!(f, "{}: {}", message, source),
            Self::Syntax {
                line,
                character,
                message,
            } => write!(
                f,
                "Cannot parse JSON schema due to a syntax error at line {}, character {}: {}",
                line, character, message
            ),
            Self::Serialize(err) => write!(f, "cannot serialize value: {}", err),
            Self::OutOfRange { offset } => {
                write!(f, "couldn't find offset {} within the input", offset)
            }
            Self::Walk(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::Walk(err) => Some(err),
            Self::Syntax { .. } | Self::OutOfRange { .. } => None,
        }
    }
}

impl From<walkdir::Error> for FormatError {
    fn from(err: walkdir::Error) -> Self {
        Self::Walk(err)
    }
}
