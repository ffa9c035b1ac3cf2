//! Error types

use std::fmt;

/// Error returned from shaping and glyph metric queries
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ShapingError {
    BadFace,
    BadGlyphIndex,
    EmptyText,
    MissingAdvance(u16),
    MissingAxis(String),
}

impl fmt::Display for ShapingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapingError::BadFace => write!(f, "font face could not be parsed"),
            ShapingError::BadGlyphIndex => write!(f, "glyph index out of range"),
            ShapingError::EmptyText => write!(f, "cannot shape empty text"),
            ShapingError::MissingAdvance(glyph) => {
                write!(f, "no horizontal advance for glyph {}", glyph)
            }
            ShapingError::MissingAxis(tag) => {
                write!(f, "font has no '{}' variation axis", tag)
            }
        }
    }
}

impl std::error::Error for ShapingError {}

/// Error returned from rule generation
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum GenerateError {
    Shaping(ShapingError),
    SearchLimit { overhanger: String, max_context: usize },
}

impl From<ShapingError> for GenerateError {
    fn from(error: ShapingError) -> Self {
        GenerateError::Shaping(error)
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Shaping(err) => write!(f, "shaping: {}", err),
            GenerateError::SearchLimit {
                overhanger,
                max_context,
            } => write!(
                f,
                "context search for '{}' did not terminate within {} letters",
                overhanger, max_context
            ),
        }
    }
}

impl std::error::Error for GenerateError {}
