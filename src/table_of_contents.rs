use crate::{
    context::ParseContext,
    doc_inline::{map_title_content, DocTitleCmd},
    element::Element,
    error::Result,
};

/// The generated table of contents of a page (`<tableofcontents>`).
#[derive(Clone, Debug, PartialEq)]
pub struct TableOfContents {
    pub element_name: String,
    /// Deepest heading level included
    pub level: Option<u32>,
    pub sections: Vec<TocSect>,
}

impl TableOfContents {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let level = attrs.optional("level")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            level,
            sections: map_toc_sections(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TocSect {
    pub element_name: String,
    pub name: Vec<DocTitleCmd>,
    pub reference: String,
    pub subsections: Vec<TocSect>,
}

impl TocSect {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut name = None;
        let mut reference = None;
        let mut subsections = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "name" => name = Some(map_title_content(context, child)?),
                "reference" => reference = Some(context.text_only(child)?),
                "tableofcontents" => {
                    child.attributes().finish(context)?;
                    subsections.extend(map_toc_sections(context, child)?);
                }
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            name: element.require(name, "name")?,
            reference: element.require(reference, "reference")?,
            subsections,
        })
    }
}

fn map_toc_sections(context: &mut ParseContext, element: Element) -> Result<Vec<TocSect>> {
    let mut sections = Vec::new();
    for child in context.child_elements(element)? {
        match child.name() {
            "tocsect" => sections.push(TocSect::map_from_xml(context, child)?),
            _ => context.unknown_element(element, child)?,
        }
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    #[test]
    fn nested_table_of_contents() {
        let xml = r#"<tableofcontents>
  <tocsect><name>Intro</name><reference>page_1intro</reference>
    <tableofcontents><tocsect><name>Details</name><reference>page_1details</reference></tocsect></tableofcontents>
  </tocsect>
</tableofcontents>"#;
        let (toc, diagnostics) = map_snippet(xml, TableOfContents::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(toc.sections.len(), 1);
        assert_eq!(toc.sections[0].reference, "page_1intro");
        assert_eq!(toc.sections[0].subsections[0].reference, "page_1details");
        assert_eq!(toc.sections[0].name[0].as_text(), Some("Intro"));
    }
}
