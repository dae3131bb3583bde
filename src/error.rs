use std::fmt::{Display, Formatter};

/// A position in the source text. Rows and columns start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub(crate) fn new(row: u32, col: u32) -> Self {
        Position { row, col }
    }

    /// Compute the position of a byte offset into `text`.
    pub(crate) fn from_offset(text: &str, offset: usize) -> Self {
        let mut row = 1;
        let mut col = 1;
        for (i, c) in text.char_indices() {
            if i >= offset {
                break;
            }
            if c == '\n' {
                row += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        Position { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl From<xmlparser::TextPos> for Position {
    #[inline]
    fn from(pos: xmlparser::TextPos) -> Self {
        Position::new(pos.row, pos.col)
    }
}

/// Input text could not be turned into a document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer rejected the input.
    #[error(transparent)]
    XmlParser(#[from] xmlparser::Error),
    /// A close tag does not match the element it closes.
    #[error("expected close tag </{expected}>, found </{found}> at {position}")]
    InvalidCloseTag {
        expected: String,
        found: String,
        position: Position,
    },
    /// The input ended while an element was still open.
    #[error("element <{name}> opened at {position} is never closed")]
    UnclosedElement { name: String, position: Position },
    /// There is no root element at all.
    #[error("no root element found")]
    NoRootElement,
    /// A second element or non-whitespace text follows the root element.
    #[error("content after the root element at {position}")]
    ContentAfterRoot { position: Position },
    /// The same attribute name appears twice on one element.
    #[error("duplicate attribute {name} at {position}")]
    DuplicateAttribute { name: String, position: Position },
    /// An entity reference without a closing `;`.
    #[error("unclosed entity &{entity} at {position}")]
    UnclosedEntity { entity: String, position: Position },
    /// An entity reference that is not predefined or not a valid character.
    #[error("invalid entity &{entity}; at {position}")]
    InvalidEntity { entity: String, position: Position },
    /// Document type declarations are not supported.
    #[error("DTD is not supported at {position}")]
    DtdUnsupported { position: Position },
}

impl ParseError {
    /// Where in the source text the problem was found.
    pub fn position(&self) -> Position {
        match self {
            ParseError::XmlParser(e) => e.pos().into(),
            ParseError::InvalidCloseTag { position, .. }
            | ParseError::UnclosedElement { position, .. }
            | ParseError::ContentAfterRoot { position }
            | ParseError::DuplicateAttribute { position, .. }
            | ParseError::UnclosedEntity { position, .. }
            | ParseError::InvalidEntity { position, .. }
            | ParseError::DtdUnsupported { position } => *position,
            ParseError::NoRootElement => Position::new(1, 1),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tag or attribute name, a query or a node relation is not acceptable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The parse error, if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}
