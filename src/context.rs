use std::fmt;

use crate::{
    element::{Content, Element},
    error::{DoxmlError, Result, SourcePos},
    options::{ParseOptions, UnknownNodeAction},
};

/// A forward-compatibility gap: something the document contains that the schema model does not
/// know about. These never abort a run unless [`UnknownNodeAction::Deny`] is configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub document: String,
    /// Name of the enclosing element
    pub element: String,
    pub pos: SourcePos,
    pub kind: DiagnosticKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnknownElement(String),
    UnknownAttribute(String),
    UnexpectedText(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.document, self.pos)?;
        match &self.kind {
            DiagnosticKind::UnknownElement(child) => {
                write!(f, "unknown element <{child}> inside <{}>", self.element)
            }
            DiagnosticKind::UnknownAttribute(attribute) => {
                write!(f, "unknown attribute {attribute:?} on <{}>", self.element)
            }
            DiagnosticKind::UnexpectedText(text) => {
                write!(f, "unexpected text {text:?} inside <{}>", self.element)
            }
        }
    }
}

/// State shared by all `map_from_xml` constructors while one document is being mapped.
pub struct ParseContext<'o> {
    options: &'o ParseOptions,
    document: String,
    diagnostics: Vec<Diagnostic>,
}

impl<'o> ParseContext<'o> {
    pub fn new(options: &'o ParseOptions, document: impl Into<String>) -> Self {
        Self {
            options,
            document: document.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        self.options
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn unknown_element(&mut self, parent: Element, child: Element) -> Result<()> {
        let pos = child.position();
        self.report(
            parent,
            pos,
            DiagnosticKind::UnknownElement(child.name().to_string()),
            || DoxmlError::UnknownElement {
                element: parent.name().to_string(),
                child: child.name().to_string(),
                pos,
            },
        )
    }

    pub fn unknown_attribute(&mut self, element: Element, attribute: &str) -> Result<()> {
        let pos = element.position();
        self.report(
            element,
            pos,
            DiagnosticKind::UnknownAttribute(attribute.to_string()),
            || DoxmlError::UnknownAttribute {
                element: element.name().to_string(),
                attribute: attribute.to_string(),
                pos,
            },
        )
    }

    /// Non-whitespace text inside element-only content. Whitespace is always ignored.
    pub fn unexpected_text(&mut self, element: Element, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        let pos = element.position();
        self.report(
            element,
            pos,
            DiagnosticKind::UnexpectedText(text.to_string()),
            || DoxmlError::UnexpectedText {
                element: element.name().to_string(),
                text: text.to_string(),
                pos,
            },
        )
    }

    /// The element children of an element-only node. Stray text is reported along the way.
    pub fn child_elements<'a, 'input: 'a>(
        &mut self,
        element: Element<'a, 'input>,
    ) -> Result<Vec<Element<'a, 'input>>> {
        let mut children = Vec::new();
        for content in element.content() {
            match content {
                Content::Element(child) => children.push(child),
                Content::Text(text) => self.unexpected_text(element, text)?,
            }
        }
        Ok(children)
    }

    /// Checks an element whose content model is empty: attributes, child elements and text are
    /// all reported.
    pub fn empty_content(&mut self, element: Element) -> Result<()> {
        element.attributes().finish(self)?;
        for child in self.child_elements(element)? {
            self.unknown_element(element, child)?;
        }
        Ok(())
    }

    /// Text of an element whose content model is plain text. Child elements are reported and
    /// their text is left out.
    pub fn text_only(&mut self, element: Element) -> Result<String> {
        let mut text = String::new();
        for content in element.content() {
            match content {
                Content::Text(t) => text.push_str(t),
                Content::Element(child) => self.unknown_element(element, child)?,
            }
        }
        Ok(text)
    }

    fn report(
        &mut self,
        element: Element,
        pos: SourcePos,
        kind: DiagnosticKind,
        error: impl FnOnce() -> DoxmlError,
    ) -> Result<()> {
        match self.options.unknown_nodes {
            UnknownNodeAction::Deny => Err(error()),
            UnknownNodeAction::Allow => Ok(()),
            UnknownNodeAction::Warn => {
                let diagnostic = Diagnostic {
                    document: self.document.clone(),
                    element: element.name().to_string(),
                    pos,
                    kind,
                };
                log::warn!("{diagnostic}");
                self.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }
}
