use std::{error::Error, fmt, fmt::Formatter, io, path::PathBuf};

#[derive(Debug)]
pub enum FontError {
    /// The font source could not be opened or read.
    InputNotFound { path: PathBuf, source: io::Error },
    /// A bitmap pattern packs to a value that does not fit in one byte.
    OversizedPattern { line: usize, pattern: String },
    /// The compiled font could not be written to its destination.
    OutputWriteFailure { path: PathBuf, source: io::Error },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InputNotFound { path, .. } => {
                write!(f, "could not read font source '{}'", path.display())
            }
            FontError::OversizedPattern { line, pattern } => {
                write!(
                    f,
                    "line {line}: bitmap pattern `{pattern}` ({} pixels) does not fit in a single byte",
                    pattern.chars().count(),
                )
            }
            FontError::OutputWriteFailure { path, .. } => {
                write!(f, "could not write compiled font to '{}'", path.display())
            }
        }
    }
}

impl Error for FontError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FontError::InputNotFound { source, .. } => Some(source),
            FontError::OversizedPattern { .. } => None,
            FontError::OutputWriteFailure { source, .. } => Some(source),
        }
    }
}

pub type FontResult<T> = Result<T, FontError>;
