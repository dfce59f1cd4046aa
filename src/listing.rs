//! Syntax-highlighted code listings (`<programlisting>`).

use crate::{
    context::ParseContext,
    element::{Content, Element},
    error::Result,
    kinds::{HighlightClass, RefKind},
    linked_text::RefText,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub element_name: String,
    pub filename: Option<String>,
    pub lines: Vec<CodeLine>,
}

impl Listing {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let filename = attrs.optional("filename")?;
        attrs.finish(context)?;

        let mut lines = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "codeline" => lines.push(CodeLine::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            filename,
            lines,
        })
    }

    /// Source text of the listing, one line per code line.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&line.plain_text());
        }
        text
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CodeLine {
    pub element_name: String,
    pub lineno: Option<u32>,
    pub refid: Option<String>,
    pub refkind: Option<RefKind>,
    pub external: Option<bool>,
    pub highlights: Vec<Highlight>,
}

impl CodeLine {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let lineno = attrs.optional("lineno")?;
        let refid = attrs.optional("refid")?;
        let refkind = attrs.optional("refkind")?;
        let external = attrs.optional("external")?;
        attrs.finish(context)?;

        let mut highlights = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "highlight" => highlights.push(Highlight::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            lineno,
            refid,
            refkind,
            external,
            highlights,
        })
    }

    pub fn plain_text(&self) -> String {
        self.highlights.iter().map(Highlight::plain_text).collect()
    }
}

/// Longest run of spaces a single `<sp value>` expands to in plain text.
pub const MAX_SPACE_RUN: u32 = 1024;

#[derive(Clone, Debug, PartialEq)]
pub enum HighlightItem {
    Text(String),
    /// `<sp/>`: a run of spaces, one unless `value` says otherwise. The count is kept as
    /// written; [`Highlight::plain_text`] expands at most [`MAX_SPACE_RUN`] of them.
    Space(u32),
    Ref(RefText),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub element_name: String,
    pub class: HighlightClass,
    pub content: Vec<HighlightItem>,
}

impl Highlight {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let class = attrs.required("class")?;
        attrs.finish(context)?;

        let mut content = Vec::new();
        for item in element.content() {
            match item {
                Content::Text(text) => content.push(HighlightItem::Text(text.to_string())),
                Content::Element(child) => match child.name() {
                    "sp" => {
                        let mut attrs = child.attributes();
                        let count = attrs.optional("value")?.unwrap_or(1);
                        attrs.finish(context)?;
                        content.push(HighlightItem::Space(count));
                    }
                    "ref" => {
                        content.push(HighlightItem::Ref(RefText::map_from_xml(context, child)?))
                    }
                    _ => context.unknown_element(element, child)?,
                },
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            class,
            content,
        })
    }

    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for item in &self.content {
            match item {
                HighlightItem::Text(t) => text.push_str(t),
                HighlightItem::Space(count) => {
                    let count = (*count).min(MAX_SPACE_RUN) as usize;
                    text.extend(std::iter::repeat(' ').take(count))
                }
                HighlightItem::Ref(r) => text.push_str(&r.text),
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    const LISTING: &str = r#"<programlisting filename="foo.cpp">
  <codeline lineno="1" refid="classFoo" refkind="compound" external="no"><highlight class="keyword">class</highlight><highlight class="normal"><sp/><ref refid="classFoo" kindref="compound">Foo</ref><sp/>{};</highlight></codeline>
  <codeline lineno="2"><highlight class="comment">//<sp value="3"/>x</highlight></codeline>
</programlisting>"#;

    #[test]
    fn maps_lines_and_highlights() {
        let (listing, diagnostics) = map_snippet(LISTING, Listing::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(listing.filename.as_deref(), Some("foo.cpp"));
        assert_eq!(listing.lines.len(), 2);

        let first = &listing.lines[0];
        assert_eq!(first.lineno, Some(1));
        assert_eq!(first.refkind, Some(RefKind::Compound));
        assert_eq!(first.external, Some(false));
        assert_eq!(first.highlights[0].class, HighlightClass::Keyword);
        assert_eq!(listing.plain_text(), "class Foo {};\n//   x");
    }

    #[test]
    fn huge_space_runs_are_capped_in_plain_text() {
        let xml = r#"<highlight class="normal">a<sp value="4294967295"/>b</highlight>"#;
        let (highlight, _) = map_snippet(xml, Highlight::map_from_xml).unwrap();
        assert_eq!(highlight.content[1], HighlightItem::Space(u32::MAX));
        let text = highlight.plain_text();
        assert_eq!(text.len(), MAX_SPACE_RUN as usize + 2);
        assert!(text.starts_with("a ") && text.ends_with(" b"));
    }

    #[test]
    fn highlight_requires_class() {
        assert!(map_snippet("<highlight>x</highlight>", Highlight::map_from_xml).is_err());
    }
}
