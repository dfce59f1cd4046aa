use std::fmt;

use thiserror::Error;

use crate::source::SourceError;

/// Line and column (both 1-based) of a node inside its source document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub type Result<T, E = DoxmlError> = std::result::Result<T, E>;

/// Structural errors. Every one of these aborts the run; forward-compatibility gaps are reported
/// through [`Diagnostic`](crate::context::Diagnostic)s instead (unless configured as fatal).
#[derive(Debug, Error)]
pub enum DoxmlError {
    #[error("failed to read document {name:?}")]
    Source {
        name: String,
        #[source]
        source: SourceError,
    },
    #[error("document {name:?} is not well-formed XML")]
    Xml {
        name: String,
        #[source]
        source: roxmltree::Error,
    },
    #[error("{name}: {source}")]
    InDocument {
        name: String,
        #[source]
        source: Box<DoxmlError>,
    },
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
    #[error("<{element}> at {pos} is missing required attribute {attribute:?}")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
        pos: SourcePos,
    },
    #[error("<{element}> at {pos} is missing required child <{child}>")]
    MissingChild {
        element: String,
        child: &'static str,
        pos: SourcePos,
    },
    #[error("<{element}> at {pos}: {value:?} is not a valid {expected} (in {name:?})")]
    InvalidValue {
        element: String,
        name: String,
        value: String,
        expected: &'static str,
        pos: SourcePos,
    },
    #[error("unknown element <{child}> inside <{element}> at {pos}")]
    UnknownElement {
        element: String,
        child: String,
        pos: SourcePos,
    },
    #[error("unknown attribute {attribute:?} on <{element}> at {pos}")]
    UnknownAttribute {
        element: String,
        attribute: String,
        pos: SourcePos,
    },
    #[error("unexpected text {text:?} inside <{element}> at {pos}")]
    UnexpectedText {
        element: String,
        text: String,
        pos: SourcePos,
    },
    #[error("<{element}> of kind {kind} at {pos} holds both member definitions and member references")]
    MixedSection {
        element: String,
        kind: String,
        pos: SourcePos,
    },
    #[error("member reference {refid:?} ({name:?}) in {owner} does not match any member definition")]
    DanglingReference {
        refid: String,
        name: String,
        owner: String,
    },
    #[error("member definition {id:?} appears in both compound {first:?} and compound {second:?}")]
    DuplicateIdentifier {
        id: String,
        first: String,
        second: String,
    },
    #[error("compound {id:?} listed in the index is not defined by document {document:?}")]
    UndefinedCompound { id: String, document: String },
}

impl DoxmlError {
    /// Attaches the name of the document being parsed to an error raised while mapping it.
    pub(crate) fn in_document(self, name: impl Into<String>) -> Self {
        match self {
            // These already carry the document name
            Self::Source { .. } | Self::Xml { .. } | Self::InDocument { .. } => self,
            other => Self::InDocument {
                name: name.into(),
                source: Box::new(other),
            },
        }
    }
}
