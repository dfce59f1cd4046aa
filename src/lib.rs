//! Typed model and parser for Doxygen XML output.
//!
//! [`parse_directory`] reads `index.xml`, every compound document it names and `Doxyfile.xml`
//! from a directory and returns a read-only [`Corpus`]. Member stubs in the corpus have been
//! checked against the member definitions of every document.

pub mod compound_def;
pub mod context;
pub mod corpus;
pub mod description;
pub mod doc_block;
pub mod doc_inline;
pub mod doxyfile;
pub mod element;
pub mod entities;
pub mod error;
pub mod graph;
pub mod index;
pub mod kinds;
pub mod linked_text;
pub mod listing;
pub mod location;
pub mod member_def;
pub mod options;
pub mod param;
pub mod reference;
pub mod resolver;
pub mod section_def;
pub mod source;
pub mod table_of_contents;
pub mod values;

#[cfg(test)]
mod test_support;

pub use compound_def::{CompoundDef, DoxygenDocument};
pub use context::{Diagnostic, DiagnosticKind};
pub use corpus::{parse_corpus, parse_directory, Corpus};
pub use description::Description;
pub use doc_block::{DocCmd, DocPara};
pub use doc_inline::DocTitleCmd;
pub use doxyfile::{Doxyfile, OptionValue};
pub use error::{DoxmlError, Result, SourcePos};
pub use index::{DoxygenIndex, IndexCompound, IndexMember};
pub use kinds::{CompoundKind, MemberKind, SectionKind};
pub use member_def::MemberDef;
pub use options::{DuplicateIdAction, ParseOptions, SectionExclusivity, UnknownNodeAction};
pub use resolver::{resolve, RawCorpus, ResolvedCorpus};
pub use section_def::{MemberStub, SectionDef};
pub use source::{DirectorySource, DocumentSource, MemorySource, SourceError};
