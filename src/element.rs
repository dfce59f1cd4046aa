//! Thin accessors over raw `roxmltree` nodes.
//!
//! Everything here is a pure read of the underlying document: presence tests, lookups and typed
//! coercion of attributes and element content. Failed coercions become structural errors that
//! name the element, the attribute or child and the source position.

use roxmltree::Node;

use crate::{
    context::ParseContext,
    error::{DoxmlError, Result, SourcePos},
    values::{self, AttributeValue},
};

pub(crate) const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// An element node of a parsed XML document.
#[derive(Copy, Clone, Debug)]
pub struct Element<'a, 'input: 'a> {
    node: Node<'a, 'input>,
}

/// One item of mixed content, in document order.
#[derive(Copy, Clone, Debug)]
pub enum Content<'a, 'input: 'a> {
    Text(&'a str),
    Element(Element<'a, 'input>),
}

impl<'a, 'input: 'a> Element<'a, 'input> {
    /// Wraps `node`, or returns `None` if it is not an element.
    pub fn new(node: Node<'a, 'input>) -> Option<Self> {
        node.is_element().then_some(Self { node })
    }

    pub fn root(document: &'a roxmltree::Document<'input>) -> Self {
        Self {
            node: document.root_element(),
        }
    }

    pub fn node(self) -> Node<'a, 'input> {
        self.node
    }

    /// Local name of the element.
    pub fn name(self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn position(self) -> SourcePos {
        let pos = self
            .node
            .document()
            .text_pos_at(self.node.range().start);
        SourcePos {
            line: pos.row,
            column: pos.col,
        }
    }

    pub fn has_attribute(self, name: &str) -> bool {
        self.node.has_attribute(name)
    }

    pub fn raw_attribute(self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Looks up and converts the attribute `name`.
    pub fn attribute<T: AttributeValue>(self, name: &'static str) -> Result<Option<T>> {
        self.node
            .attribute(name)
            .map(|raw| self.convert(name, raw))
            .transpose()
    }

    pub fn required_attribute<T: AttributeValue>(self, name: &'static str) -> Result<T> {
        self.attribute(name)?
            .ok_or_else(|| self.missing_attribute(name))
    }

    /// The `xml:lang` attribute.
    pub fn language_tag(self) -> Option<String> {
        self.node
            .attribute((XML_NAMESPACE, "lang"))
            .map(str::to_string)
    }

    pub fn attributes(self) -> Attributes<'a, 'input> {
        Attributes {
            element: self,
            consumed: Vec::new(),
            reads_language_tag: false,
        }
    }

    pub fn has_child(self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// The first child element called `name`.
    pub fn child(self, name: &str) -> Option<Self> {
        self.elements().find(|e| e.name() == name)
    }

    /// Child elements in document order, skipping text, comments and processing instructions.
    pub fn elements(self) -> impl Iterator<Item = Element<'a, 'input>> {
        self.node.children().filter_map(Element::new)
    }

    /// Text and element children in document order.
    pub fn content(self) -> impl Iterator<Item = Content<'a, 'input>> {
        self.node.children().filter_map(|child| {
            if child.is_element() {
                Some(Content::Element(Element { node: child }))
            } else if child.is_text() {
                child.text().map(Content::Text)
            } else {
                None
            }
        })
    }

    /// True if no child of this element is itself an element.
    pub fn is_text_only(self) -> bool {
        !self.node.children().any(|c| c.is_element())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(self) -> String {
        self.node
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }

    /// Text of the first child element called `name`.
    pub fn child_text(self, name: &str) -> Option<String> {
        self.child(name).map(Element::text)
    }

    /// Boolean element content (`true` or empty).
    pub fn bool_content(self) -> Result<bool> {
        let text = self.text();
        values::content_bool(&text).ok_or_else(|| DoxmlError::InvalidValue {
            element: self.name().to_string(),
            name: self.name().to_string(),
            value: text,
            expected: "boolean content",
            pos: self.position(),
        })
    }

    /// Integer element content; empty content yields `None`.
    pub fn number_content(self) -> Result<Option<i64>> {
        let text = self.text();
        values::content_number(&text).ok_or_else(|| DoxmlError::InvalidValue {
            element: self.name().to_string(),
            name: self.name().to_string(),
            value: text,
            expected: "integer content",
            pos: self.position(),
        })
    }

    /// Unwraps a mandatory child that was collected during dispatch.
    pub fn require<T>(self, value: Option<T>, child: &'static str) -> Result<T> {
        value.ok_or_else(|| self.missing_child(child))
    }

    pub fn missing_attribute(self, attribute: &'static str) -> DoxmlError {
        DoxmlError::MissingAttribute {
            element: self.name().to_string(),
            attribute,
            pos: self.position(),
        }
    }

    pub fn missing_child(self, child: &'static str) -> DoxmlError {
        DoxmlError::MissingChild {
            element: self.name().to_string(),
            child,
            pos: self.position(),
        }
    }

    fn convert<T: AttributeValue>(self, name: &str, raw: &str) -> Result<T> {
        T::convert(raw).ok_or_else(|| DoxmlError::InvalidValue {
            element: self.name().to_string(),
            name: name.to_string(),
            value: raw.to_string(),
            expected: T::EXPECTED,
            pos: self.position(),
        })
    }
}

/// Reads the attributes of one element while remembering which names were asked for, so that
/// [`finish()`](Self::finish) can report the ones nobody consumed.
pub struct Attributes<'a, 'input: 'a> {
    element: Element<'a, 'input>,
    consumed: Vec<&'static str>,
    reads_language_tag: bool,
}

impl<'a, 'input: 'a> Attributes<'a, 'input> {
    pub fn optional<T: AttributeValue>(&mut self, name: &'static str) -> Result<Option<T>> {
        self.consumed.push(name);
        self.element.attribute(name)
    }

    pub fn required<T: AttributeValue>(&mut self, name: &'static str) -> Result<T> {
        self.consumed.push(name);
        self.element.required_attribute(name)
    }

    /// Like [`optional()`](Self::optional), but an empty attribute counts as absent.
    pub fn optional_nonempty<T: AttributeValue>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>> {
        self.consumed.push(name);
        match self.element.raw_attribute(name) {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            _ => self.element.attribute(name),
        }
    }

    /// A flag that defaults to `false` when absent.
    pub fn flag(&mut self, name: &'static str) -> Result<bool> {
        Ok(self.optional(name)?.unwrap_or(false))
    }

    pub fn language_tag(&mut self) -> Option<String> {
        self.reads_language_tag = true;
        self.element.language_tag()
    }

    /// Reports every attribute that was not read.
    pub fn finish(self, context: &mut ParseContext) -> Result<()> {
        for attribute in self.element.node.attributes() {
            let known = match attribute.namespace() {
                None => self.consumed.iter().any(|&name| name == attribute.name()),
                Some(XML_NAMESPACE) => self.reads_language_tag && attribute.name() == "lang",
                Some(XSI_NAMESPACE) => true,
                Some(_) => false,
            };
            if !known {
                context.unknown_attribute(self.element, attribute.name())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParseOptions, UnknownNodeAction};

    fn with_root<R>(xml: &str, f: impl FnOnce(Element) -> R) -> R {
        let document = roxmltree::Document::parse(xml).unwrap();
        f(Element::root(&document))
    }

    #[test]
    fn attribute_lookup_and_coercion() {
        with_root(r#"<e id="x" line="12" static="Yes" bad="1x"/>"#, |e| {
            assert!(e.has_attribute("id"));
            assert!(!e.has_attribute("nope"));
            assert_eq!(e.attribute::<String>("id").unwrap().as_deref(), Some("x"));
            assert_eq!(e.attribute::<u32>("line").unwrap(), Some(12));
            assert_eq!(e.attribute::<bool>("static").unwrap(), Some(true));
            assert_eq!(e.attribute::<bool>("nope").unwrap(), None);
            assert!(matches!(
                e.attribute::<u32>("bad"),
                Err(DoxmlError::InvalidValue { expected: "non-negative integer", .. })
            ));
            assert!(matches!(
                e.required_attribute::<String>("nope"),
                Err(DoxmlError::MissingAttribute { attribute: "nope", .. })
            ));
        });
    }

    #[test]
    fn child_lookup_and_text() {
        with_root("<e><a>one <b>two</b></a><c/>\n<c>three</c></e>", |e| {
            assert!(e.has_child("a"));
            assert!(!e.has_child("b"));
            assert_eq!(e.child_text("a").as_deref(), Some("one two"));
            assert_eq!(e.child_text("c").as_deref(), Some(""));
            assert_eq!(e.elements().count(), 3);
            assert!(!e.is_text_only());
            assert!(e.child("c").unwrap().is_text_only());
        });
    }

    #[test]
    fn content_preserves_order() {
        with_root("<p>A<b>B</b>C</p>", |e| {
            let content: Vec<_> = e.content().collect();
            assert_eq!(content.len(), 3);
            assert!(matches!(content[0], Content::Text("A")));
            assert!(matches!(content[1], Content::Element(b) if b.name() == "b"));
            assert!(matches!(content[2], Content::Text("C")));
        });
    }

    #[test]
    fn element_content_coercion() {
        with_root(
            "<e><t>True</t><f/><x>maybe</x><n>17</n><nan></nan><w>abc</w></e>",
            |e| {
                assert!(e.child("t").unwrap().bool_content().unwrap());
                assert!(!e.child("f").unwrap().bool_content().unwrap());
                assert!(e.child("x").unwrap().bool_content().is_err());
                assert_eq!(e.child("n").unwrap().number_content().unwrap(), Some(17));
                assert_eq!(e.child("nan").unwrap().number_content().unwrap(), None);
                assert!(e.child("w").unwrap().number_content().is_err());
            },
        );
    }

    #[test]
    fn positions_are_one_based() {
        with_root("<e>\n  <a/></e>", |e| {
            assert_eq!(e.position(), SourcePos { line: 1, column: 1 });
            let a = e.child("a").unwrap();
            assert_eq!(a.position(), SourcePos { line: 2, column: 3 });
        });
    }

    #[test]
    fn unread_attributes_are_reported() {
        let xml = r#"<e xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
            xsi:noNamespaceSchemaLocation="compound.xsd" xml:lang="en" id="1" extra="2"/>"#;
        with_root(xml, |e| {
            let options = ParseOptions::default();
            let mut context = ParseContext::new(&options, "test.xml");
            let mut attrs = e.attributes();
            attrs.required::<String>("id").unwrap();
            assert_eq!(attrs.language_tag().as_deref(), Some("en"));
            attrs.finish(&mut context).unwrap();
            let warnings = context.into_diagnostics();
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].to_string().contains("extra"));
        });
    }

    #[test]
    fn empty_attributes_can_count_as_absent() {
        with_root(r#"<e kind="" other="function"/>"#, |e| {
            let mut attrs = e.attributes();
            assert_eq!(attrs.optional_nonempty::<String>("kind").unwrap(), None);
            assert_eq!(
                attrs.optional_nonempty::<String>("other").unwrap().as_deref(),
                Some("function")
            );
            assert_eq!(attrs.optional_nonempty::<String>("missing").unwrap(), None);
        });
    }

    #[test]
    fn unread_attributes_can_be_fatal() {
        with_root(r#"<e extra="2"/>"#, |e| {
            let options = ParseOptions {
                unknown_nodes: UnknownNodeAction::Deny,
                ..Default::default()
            };
            let mut context = ParseContext::new(&options, "test.xml");
            let attrs = e.attributes();
            assert!(matches!(
                attrs.finish(&mut context),
                Err(DoxmlError::UnknownAttribute { .. })
            ));
        });
    }
}
