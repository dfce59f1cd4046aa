use crate::{
    context::ParseContext,
    element::{Content, Element},
    error::Result,
    kinds::RefKind,
};

/// `<ref>` inside linked text: a span of text pointing at a compound or member.
#[derive(Clone, Debug, PartialEq)]
pub struct RefText {
    pub element_name: String,
    pub refid: String,
    pub kindref: RefKind,
    pub external: Option<String>,
    pub tooltip: Option<String>,
    pub text: String,
}

impl RefText {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let kindref = attrs.required("kindref")?;
        let external = attrs.optional("external")?;
        let tooltip = attrs.optional("tooltip")?;
        attrs.finish(context)?;

        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            kindref,
            external,
            tooltip,
            text: context.text_only(element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LinkedTextItem {
    Text(String),
    Ref(RefText),
}

/// Mixed text and references, e.g. a member's `<type>` or a parameter's `<defval>`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedText {
    pub element_name: String,
    pub content: Vec<LinkedTextItem>,
}

impl LinkedText {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            content: map_linked_content(context, element)?,
        })
    }

    /// The text with references flattened to their labels.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|item| match item {
                LinkedTextItem::Text(text) => text.as_str(),
                LinkedTextItem::Ref(r) => r.text.as_str(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Text/`<ref>` mixed content shared by linked text and documentation parameter names.
pub(crate) fn map_linked_content(
    context: &mut ParseContext,
    element: Element,
) -> Result<Vec<LinkedTextItem>> {
    let mut content = Vec::new();
    for item in element.content() {
        match item {
            Content::Text(text) => content.push(LinkedTextItem::Text(text.to_string())),
            Content::Element(child) if child.name() == "ref" => {
                content.push(LinkedTextItem::Ref(RefText::map_from_xml(context, child)?))
            }
            Content::Element(child) => context.unknown_element(element, child)?,
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    #[test]
    fn keeps_text_and_refs_in_order() {
        let (text, diagnostics) = map_snippet(
            r#"<type>const <ref refid="classFoo" kindref="compound">Foo</ref> &amp;</type>"#,
            LinkedText::map_from_xml,
        )
        .unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(text.element_name, "type");
        assert_eq!(text.content.len(), 3);
        assert_eq!(text.content[0], LinkedTextItem::Text("const ".into()));
        match &text.content[1] {
            LinkedTextItem::Ref(r) => {
                assert_eq!(r.refid, "classFoo");
                assert_eq!(r.kindref, RefKind::Compound);
                assert_eq!(r.text, "Foo");
            }
            other => panic!("expected ref, got {other:?}"),
        }
        assert_eq!(text.plain_text(), "const Foo &");
    }

    #[test]
    fn ref_requires_refid() {
        let result = map_snippet(r#"<ref kindref="member">x</ref>"#, RefText::map_from_xml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_children_are_skipped() {
        let (text, diagnostics) =
            map_snippet("<type>int<future/></type>", LinkedText::map_from_xml).unwrap();
        assert_eq!(text.plain_text(), "int");
        assert_eq!(diagnostics.len(), 1);
    }
}
