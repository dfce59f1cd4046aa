//! Brief, detailed and in-body descriptions together with their nested sections.

use crate::{
    context::ParseContext,
    doc_block::DocPara,
    doc_inline::DocTitle,
    element::Element,
    error::Result,
};

/// Deepest section level (`<sect6>`).
pub const MAX_SECT_LEVEL: u8 = 6;

#[derive(Clone, Debug, PartialEq)]
pub enum DescriptionItem {
    Para(DocPara),
    Internal(DocInternal),
    Sect(DocSect),
}

/// `descriptionType`: an optional title followed by paragraphs, internal blocks and top-level
/// sections, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    pub element_name: String,
    pub title: Option<DocTitle>,
    pub content: Vec<DescriptionItem>,
}

impl Description {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let (title, content) = map_sections(context, element, 0, true)?;
        Ok(Self {
            element_name: element.name().to_string(),
            title,
            content,
        })
    }

    /// True for descriptions that document nothing, which Doxygen emits for every entity.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_empty()
    }

    /// Top-level paragraphs.
    pub fn paras(&self) -> impl Iterator<Item = &DocPara> {
        self.content.iter().filter_map(|item| match item {
            DescriptionItem::Para(para) => Some(para),
            _ => None,
        })
    }
}

/// `<sect1>` to `<sect6>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocSect {
    pub element_name: String,
    pub level: u8,
    pub id: Option<String>,
    pub title: Option<DocTitle>,
    pub content: Vec<DescriptionItem>,
}

impl DocSect {
    pub(crate) fn map_from_xml(
        context: &mut ParseContext,
        element: Element,
        level: u8,
    ) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.optional("id")?;
        attrs.finish(context)?;
        let (title, content) = map_sections(context, element, level, true)?;
        Ok(Self {
            element_name: element.name().to_string(),
            level,
            id,
            title,
            content,
        })
    }
}

/// Documentation marked `\internal`. Holds paragraphs and sections one level below the
/// enclosing one.
#[derive(Clone, Debug, PartialEq)]
pub struct DocInternal {
    pub element_name: String,
    pub level: u8,
    pub content: Vec<DescriptionItem>,
}

impl DocInternal {
    pub(crate) fn map_from_xml(
        context: &mut ParseContext,
        element: Element,
        level: u8,
    ) -> Result<Self> {
        element.attributes().finish(context)?;
        let (_, content) = map_sections(context, element, level, false)?;
        Ok(Self {
            element_name: element.name().to_string(),
            level,
            content,
        })
    }
}

fn sect_level(name: &str) -> Option<u8> {
    name.strip_prefix("sect")?.parse().ok()
}

fn map_sections(
    context: &mut ParseContext,
    element: Element,
    level: u8,
    allow_title_and_internal: bool,
) -> Result<(Option<DocTitle>, Vec<DescriptionItem>)> {
    let mut title = None;
    let mut content = Vec::new();
    for child in context.child_elements(element)? {
        match child.name() {
            "title" if allow_title_and_internal => {
                title = Some(DocTitle::map_from_xml(context, child)?)
            }
            "para" => content.push(DescriptionItem::Para(DocPara::map_from_xml(context, child)?)),
            "internal" if allow_title_and_internal => content.push(DescriptionItem::Internal(
                DocInternal::map_from_xml(context, child, level)?,
            )),
            name if level < MAX_SECT_LEVEL && sect_level(name) == Some(level + 1) => content.push(
                DescriptionItem::Sect(DocSect::map_from_xml(context, child, level + 1)?),
            ),
            _ => context.unknown_element(element, child)?,
        }
    }
    Ok((title, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    #[test]
    fn empty_description() {
        let (description, diagnostics) =
            map_snippet("<briefdescription>\n</briefdescription>", Description::map_from_xml)
                .unwrap();
        assert!(diagnostics.is_empty());
        assert!(description.is_empty());
        assert_eq!(description.element_name, "briefdescription");
    }

    #[test]
    fn nested_sections() {
        let xml = r#"<detaileddescription>
  <para>intro</para>
  <sect1 id="s1"><title>One</title>
    <para>a</para>
    <sect2 id="s2"><title>Two</title><para>b</para></sect2>
  </sect1>
  <internal><para>hidden</para><sect1><para>c</para></sect1></internal>
</detaileddescription>"#;
        let (description, diagnostics) = map_snippet(xml, Description::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(description.content.len(), 3);
        assert_eq!(description.paras().count(), 1);

        let DescriptionItem::Sect(sect1) = &description.content[1] else {
            panic!("expected sect1");
        };
        assert_eq!(sect1.level, 1);
        assert_eq!(sect1.id.as_deref(), Some("s1"));
        let DescriptionItem::Sect(sect2) = &sect1.content[1] else {
            panic!("expected sect2");
        };
        assert_eq!(sect2.level, 2);

        let DescriptionItem::Internal(internal) = &description.content[2] else {
            panic!("expected internal");
        };
        assert!(matches!(internal.content[1], DescriptionItem::Sect(DocSect { level: 1, .. })));
    }

    #[test]
    fn skipped_section_levels_are_reported() {
        let xml = "<detaileddescription><sect2><para>x</para></sect2></detaileddescription>";
        let (description, diagnostics) = map_snippet(xml, Description::map_from_xml).unwrap();
        assert!(description.content.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }
}
