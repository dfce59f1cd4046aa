//! Title-context documentation markup.
//!
//! [`DocTitleCmd`] is the restricted choice group that headings, captions, link labels and
//! similar positions allow. The body-context group ([`DocCmd`](crate::doc_block::DocCmd)) is a
//! strict superset and embeds this one.

use crate::{
    context::ParseContext,
    doc_block::{map_body_content, DocCmd},
    element::{Content, Element},
    entities,
    error::Result,
    kinds::{ImageKind, PlantumlEngine, RefKind},
};

/// One item of title-context mixed content.
#[derive(Clone, Debug, PartialEq)]
pub enum DocTitleCmd {
    Text(String),
    Ulink(DocUrlLink),
    Markup(DocMarkup),
    OutputOnly(DocOutputOnly),
    Image(DocImage),
    Dot(DocDiagram),
    Msc(DocDiagram),
    Plantuml(DocDiagram),
    Anchor(DocAnchor),
    Formula(DocFormula),
    Ref(DocRefText),
    Emoji(DocEmoji),
    LineBreak(DocEmpty),
    Character(DocCharacter),
}

impl DocTitleCmd {
    /// Maps `element` if its name belongs to the title-context choice group, `Ok(None)`
    /// otherwise.
    pub(crate) fn map_element(
        context: &mut ParseContext,
        element: Element,
    ) -> Result<Option<Self>> {
        let cmd = match element.name() {
            "ulink" => Self::Ulink(DocUrlLink::map_from_xml(context, element)?),
            "bold" => Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Bold)?),
            "s" => Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::S)?),
            "strike" => {
                Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Strike)?)
            }
            "underline" => Self::Markup(DocMarkup::map_from_xml(
                context,
                element,
                MarkupKind::Underline,
            )?),
            "emphasis" => Self::Markup(DocMarkup::map_from_xml(
                context,
                element,
                MarkupKind::Emphasis,
            )?),
            "computeroutput" => Self::Markup(DocMarkup::map_from_xml(
                context,
                element,
                MarkupKind::ComputerOutput,
            )?),
            "subscript" => Self::Markup(DocMarkup::map_from_xml(
                context,
                element,
                MarkupKind::Subscript,
            )?),
            "superscript" => Self::Markup(DocMarkup::map_from_xml(
                context,
                element,
                MarkupKind::Superscript,
            )?),
            "center" => {
                Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Center)?)
            }
            "small" => Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Small)?),
            "cite" => Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Cite)?),
            "del" => Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Del)?),
            "ins" => Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Ins)?),
            "summary" => {
                Self::Markup(DocMarkup::map_from_xml(context, element, MarkupKind::Summary)?)
            }
            "htmlonly" => Self::OutputOnly(DocOutputOnly::map_from_xml(
                context,
                element,
                OutputFormat::Html,
            )?),
            "manonly" => Self::OutputOnly(DocOutputOnly::map_from_xml(
                context,
                element,
                OutputFormat::Man,
            )?),
            "xmlonly" => Self::OutputOnly(DocOutputOnly::map_from_xml(
                context,
                element,
                OutputFormat::Xml,
            )?),
            "rtfonly" => Self::OutputOnly(DocOutputOnly::map_from_xml(
                context,
                element,
                OutputFormat::Rtf,
            )?),
            "latexonly" => Self::OutputOnly(DocOutputOnly::map_from_xml(
                context,
                element,
                OutputFormat::Latex,
            )?),
            "docbookonly" => Self::OutputOnly(DocOutputOnly::map_from_xml(
                context,
                element,
                OutputFormat::Docbook,
            )?),
            "image" => Self::Image(DocImage::map_from_xml(context, element)?),
            "dot" => Self::Dot(DocDiagram::map_from_xml(context, element)?),
            "msc" => Self::Msc(DocDiagram::map_from_xml(context, element)?),
            "plantuml" => Self::Plantuml(DocDiagram::map_from_xml(context, element)?),
            "anchor" => Self::Anchor(DocAnchor::map_from_xml(context, element)?),
            "formula" => Self::Formula(DocFormula::map_from_xml(context, element)?),
            "ref" => Self::Ref(DocRefText::map_from_xml(context, element)?),
            "emoji" => Self::Emoji(DocEmoji::map_from_xml(context, element)?),
            "linebreak" => Self::LineBreak(DocEmpty::map_from_xml(context, element)?),
            name => match entities::character(name) {
                Some(character) => {
                    Self::Character(DocCharacter::map_from_xml(context, element, character)?)
                }
                None => return Ok(None),
            },
        };
        Ok(Some(cmd))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Maps title-context mixed content, reporting elements outside the choice group.
pub(crate) fn map_title_content(
    context: &mut ParseContext,
    element: Element,
) -> Result<Vec<DocTitleCmd>> {
    let mut content = Vec::new();
    for item in element.content() {
        match item {
            Content::Text(text) => content.push(DocTitleCmd::Text(text.to_string())),
            Content::Element(child) => match DocTitleCmd::map_element(context, child)? {
                Some(cmd) => content.push(cmd),
                None => context.unknown_element(element, child)?,
            },
        }
    }
    Ok(content)
}

/// `docTitleType`: a title made of title-context markup.
#[derive(Clone, Debug, PartialEq)]
pub struct DocTitle {
    pub element_name: String,
    pub content: Vec<DocTitleCmd>,
}

impl DocTitle {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            content: map_title_content(context, element)?,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkupKind {
    Bold,
    S,
    Strike,
    Underline,
    Emphasis,
    ComputerOutput,
    Subscript,
    Superscript,
    Center,
    Small,
    Cite,
    Del,
    Ins,
    Summary,
    /// Only legal in body context
    Preformatted,
}

/// A styled span. Its content is body-context markup, so spans nest.
#[derive(Clone, Debug, PartialEq)]
pub struct DocMarkup {
    pub element_name: String,
    pub kind: MarkupKind,
    pub content: Vec<DocCmd>,
}

impl DocMarkup {
    pub(crate) fn map_from_xml(
        context: &mut ParseContext,
        element: Element,
        kind: MarkupKind,
    ) -> Result<Self> {
        element.attributes().finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            kind,
            content: map_body_content(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocUrlLink {
    pub element_name: String,
    pub url: String,
    pub content: Vec<DocTitleCmd>,
}

impl DocUrlLink {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let url = attrs.required("url")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            url,
            content: map_title_content(context, element)?,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Man,
    Xml,
    Rtf,
    Latex,
    Docbook,
}

/// Verbatim text meant for a single output format (`<htmlonly>`, `<latexonly>`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct DocOutputOnly {
    pub element_name: String,
    pub format: OutputFormat,
    /// Only used by `<htmlonly>`
    pub block: Option<bool>,
    pub text: String,
}

impl DocOutputOnly {
    pub(crate) fn map_from_xml(
        context: &mut ParseContext,
        element: Element,
        format: OutputFormat,
    ) -> Result<Self> {
        let mut attrs = element.attributes();
        let block = if format == OutputFormat::Html {
            attrs.optional("block")?
        } else {
            None
        };
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            format,
            block,
            text: context.text_only(element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocImage {
    pub element_name: String,
    pub kind: Option<ImageKind>,
    pub name: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub alt: Option<String>,
    pub inline: Option<bool>,
    pub caption: Option<String>,
    pub content: Vec<DocTitleCmd>,
}

impl DocImage {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let kind = attrs.optional("type")?;
        let name = attrs.optional("name")?;
        let width = attrs.optional("width")?;
        let height = attrs.optional("height")?;
        let alt = attrs.optional("alt")?;
        let inline = attrs.optional("inline")?;
        let caption = attrs.optional("caption")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            kind,
            name,
            width,
            height,
            alt,
            inline,
            caption,
            content: map_title_content(context, element)?,
        })
    }
}

/// Inline `<dot>`, `<msc>` and `<plantuml>` diagrams.
#[derive(Clone, Debug, PartialEq)]
pub struct DocDiagram {
    pub element_name: String,
    pub name: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub caption: Option<String>,
    /// Only used by `<plantuml>`
    pub engine: Option<PlantumlEngine>,
    pub content: Vec<DocTitleCmd>,
}

impl DocDiagram {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let name = attrs.optional("name")?;
        let width = attrs.optional("width")?;
        let height = attrs.optional("height")?;
        let caption = attrs.optional("caption")?;
        let engine = attrs.optional("engine")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            name,
            width,
            height,
            caption,
            engine,
            content: map_title_content(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocAnchor {
    pub element_name: String,
    pub id: String,
    pub text: String,
}

impl DocAnchor {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            text: context.text_only(element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocFormula {
    pub element_name: String,
    pub id: String,
    pub text: String,
}

impl DocFormula {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            text: context.text_only(element)?,
        })
    }
}

/// A cross-reference span inside documentation. Unlike
/// [`RefText`](crate::linked_text::RefText) its label may carry markup.
#[derive(Clone, Debug, PartialEq)]
pub struct DocRefText {
    pub element_name: String,
    pub refid: String,
    pub kindref: RefKind,
    pub external: Option<String>,
    pub content: Vec<DocTitleCmd>,
}

impl DocRefText {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let kindref = attrs.required("kindref")?;
        let external = attrs.optional("external")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            kindref,
            external,
            content: map_title_content(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocEmoji {
    pub element_name: String,
    pub name: String,
    pub unicode: String,
}

impl DocEmoji {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let name = attrs.required("name")?;
        let unicode = attrs.required("unicode")?;
        attrs.finish(context)?;
        context.text_only(element)?;
        Ok(Self {
            element_name: element.name().to_string(),
            name,
            unicode,
        })
    }
}

/// An element without content, such as `<linebreak/>` or `<hruler/>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocEmpty {
    pub element_name: String,
}

impl DocEmpty {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        context.empty_content(element)?;
        Ok(Self {
            element_name: element.name().to_string(),
        })
    }
}

/// A named character element such as `<copy/>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocCharacter {
    pub element_name: String,
    pub character: char,
}

impl DocCharacter {
    fn map_from_xml(context: &mut ParseContext, element: Element, character: char) -> Result<Self> {
        context.empty_content(element)?;
        Ok(Self {
            element_name: element.name().to_string(),
            character,
        })
    }
}
