//! Body-context documentation markup: paragraphs and the block constructs only they may hold.

use crate::{
    context::ParseContext,
    description::{Description, DocInternal, DocSect},
    doc_inline::{map_title_content, DocMarkup, DocTitle, DocTitleCmd, MarkupKind},
    element::{Content, Element},
    error::Result,
    kinds::{
        Align, CheckState, OrderedListType, ParamDirection, ParamListKind, SimpleSectKind,
        VerticalAlign,
    },
    linked_text::{map_linked_content, LinkedText, LinkedTextItem},
    listing::Listing,
};

/// One item of body-context mixed content. Every title-context item is legal here as well.
#[derive(Clone, Debug, PartialEq)]
pub enum DocCmd {
    Inline(DocTitleCmd),
    HorizontalRule,
    Preformatted(DocMarkup),
    ProgramListing(Listing),
    Verbatim(DocVerbatim),
    JavadocLiteral(DocVerbatim),
    JavadocCode(DocVerbatim),
    IndexEntry(DocIndexEntry),
    OrderedList(DocList),
    ItemizedList(DocList),
    SimpleSect(DocSimpleSect),
    Title(DocTitle),
    VariableList(DocVariableList),
    Table(DocTable),
    Heading(DocHeading),
    DotFile(DocImageFile),
    MscFile(DocImageFile),
    DiaFile(DocImageFile),
    PlantumlFile(DocImageFile),
    TocList(DocTocList),
    Language(DocLanguage),
    ParameterList(DocParamList),
    XrefSect(DocXrefSect),
    CopyDoc(DocCopy),
    Details(DocDetails),
    BlockQuote(DocParaBlock),
    ParBlock(DocParaBlock),
}

impl DocCmd {
    /// Maps `element` if its name belongs to the body-context choice group, `Ok(None)`
    /// otherwise.
    pub(crate) fn map_element(
        context: &mut ParseContext,
        element: Element,
    ) -> Result<Option<Self>> {
        let cmd = match element.name() {
            "hruler" => {
                context.empty_content(element)?;
                Self::HorizontalRule
            }
            "preformatted" => Self::Preformatted(DocMarkup::map_from_xml(
                context,
                element,
                MarkupKind::Preformatted,
            )?),
            "programlisting" => Self::ProgramListing(Listing::map_from_xml(context, element)?),
            "verbatim" => Self::Verbatim(DocVerbatim::map_from_xml(context, element)?),
            "javadocliteral" => Self::JavadocLiteral(DocVerbatim::map_from_xml(context, element)?),
            "javadoccode" => Self::JavadocCode(DocVerbatim::map_from_xml(context, element)?),
            "indexentry" => Self::IndexEntry(DocIndexEntry::map_from_xml(context, element)?),
            "orderedlist" => Self::OrderedList(DocList::map_from_xml(context, element)?),
            "itemizedlist" => Self::ItemizedList(DocList::map_from_xml(context, element)?),
            "simplesect" => Self::SimpleSect(DocSimpleSect::map_from_xml(context, element)?),
            "title" => Self::Title(DocTitle::map_from_xml(context, element)?),
            "variablelist" => Self::VariableList(DocVariableList::map_from_xml(context, element)?),
            "table" => Self::Table(DocTable::map_from_xml(context, element)?),
            "heading" => Self::Heading(DocHeading::map_from_xml(context, element)?),
            "dotfile" => Self::DotFile(DocImageFile::map_from_xml(context, element)?),
            "mscfile" => Self::MscFile(DocImageFile::map_from_xml(context, element)?),
            "diafile" => Self::DiaFile(DocImageFile::map_from_xml(context, element)?),
            "plantumlfile" => Self::PlantumlFile(DocImageFile::map_from_xml(context, element)?),
            "toclist" => Self::TocList(DocTocList::map_from_xml(context, element)?),
            "language" => Self::Language(DocLanguage::map_from_xml(context, element)?),
            "parameterlist" => Self::ParameterList(DocParamList::map_from_xml(context, element)?),
            "xrefsect" => Self::XrefSect(DocXrefSect::map_from_xml(context, element)?),
            "copydoc" => Self::CopyDoc(DocCopy::map_from_xml(context, element)?),
            "details" => Self::Details(DocDetails::map_from_xml(context, element)?),
            "blockquote" => Self::BlockQuote(DocParaBlock::map_from_xml(context, element)?),
            "parblock" => Self::ParBlock(DocParaBlock::map_from_xml(context, element)?),
            _ => return Ok(DocTitleCmd::map_element(context, element)?.map(Self::Inline)),
        };
        Ok(Some(cmd))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Inline(inline) => inline.as_text(),
            _ => None,
        }
    }
}

/// Maps body-context mixed content, reporting elements outside the choice group.
pub(crate) fn map_body_content(
    context: &mut ParseContext,
    element: Element,
) -> Result<Vec<DocCmd>> {
    let mut content = Vec::new();
    for item in element.content() {
        match item {
            Content::Text(text) => {
                content.push(DocCmd::Inline(DocTitleCmd::Text(text.to_string())))
            }
            Content::Element(child) => match DocCmd::map_element(context, child)? {
                Some(cmd) => content.push(cmd),
                None => context.unknown_element(element, child)?,
            },
        }
    }
    Ok(content)
}

/// Maps an element whose only legal children are `<para>`s.
pub(crate) fn map_paras(context: &mut ParseContext, element: Element) -> Result<Vec<DocPara>> {
    let mut paras = Vec::new();
    for child in context.child_elements(element)? {
        match child.name() {
            "para" => paras.push(DocPara::map_from_xml(context, child)?),
            _ => context.unknown_element(element, child)?,
        }
    }
    Ok(paras)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocPara {
    pub element_name: String,
    pub content: Vec<DocCmd>,
}

impl DocPara {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            content: map_body_content(context, element)?,
        })
    }
}

/// Literal text blocks: `<verbatim>`, `<javadocliteral>`, `<javadoccode>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocVerbatim {
    pub element_name: String,
    pub text: String,
}

impl DocVerbatim {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            text: context.text_only(element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocIndexEntry {
    pub element_name: String,
    pub primary: String,
    pub secondary: String,
}

impl DocIndexEntry {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut primary = None;
        let mut secondary = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "primaryie" => primary = Some(context.text_only(child)?),
                "secondaryie" => secondary = Some(context.text_only(child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            primary: element.require(primary, "primaryie")?,
            secondary: element.require(secondary, "secondaryie")?,
        })
    }
}

/// `<orderedlist>` or `<itemizedlist>`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocList {
    pub element_name: String,
    pub list_type: Option<OrderedListType>,
    pub start: Option<i64>,
    pub items: Vec<DocListItem>,
}

impl DocList {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let list_type = attrs.optional("type")?;
        let start = attrs.optional("start")?;
        attrs.finish(context)?;

        let mut items = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "listitem" => items.push(DocListItem::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            list_type,
            start,
            items,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocListItem {
    pub element_name: String,
    /// Checkbox state of a task list item
    pub check: Option<CheckState>,
    pub value: Option<i64>,
    pub paras: Vec<DocPara>,
}

impl DocListItem {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let check = attrs.optional("override")?;
        let value = attrs.optional("value")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            check,
            value,
            paras: map_paras(context, element)?,
        })
    }
}

/// `\return`, `\note`, `\see` and friends.
#[derive(Clone, Debug, PartialEq)]
pub struct DocSimpleSect {
    pub element_name: String,
    pub kind: SimpleSectKind,
    pub title: Option<DocTitle>,
    pub paras: Vec<DocPara>,
}

impl DocSimpleSect {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let kind = attrs.required("kind")?;
        attrs.finish(context)?;

        let mut title = None;
        let mut paras = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "title" => title = Some(DocTitle::map_from_xml(context, child)?),
                "para" => paras.push(DocPara::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            kind,
            title,
            paras,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocVariableList {
    pub element_name: String,
    pub entries: Vec<DocVarListEntry>,
}

/// A `<varlistentry>` and the `<listitem>` that follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct DocVarListEntry {
    pub element_name: String,
    pub term: DocTitle,
    pub item: DocListItem,
}

impl DocVariableList {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;

        let mut entries = Vec::new();
        let mut pending: Option<(Element, DocTitle)> = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "varlistentry" => {
                    if pending.is_some() {
                        return Err(element.missing_child("listitem"));
                    }
                    child.attributes().finish(context)?;
                    let mut term = None;
                    for grandchild in context.child_elements(child)? {
                        match grandchild.name() {
                            "term" => term = Some(DocTitle::map_from_xml(context, grandchild)?),
                            _ => context.unknown_element(child, grandchild)?,
                        }
                    }
                    pending = Some((child, child.require(term, "term")?));
                }
                "listitem" => {
                    let (entry, term) = pending
                        .take()
                        .ok_or_else(|| element.missing_child("varlistentry"))?;
                    entries.push(DocVarListEntry {
                        element_name: entry.name().to_string(),
                        term,
                        item: DocListItem::map_from_xml(context, child)?,
                    });
                }
                _ => context.unknown_element(element, child)?,
            }
        }
        if pending.is_some() {
            return Err(element.missing_child("listitem"));
        }
        Ok(Self {
            element_name: element.name().to_string(),
            entries,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocTable {
    pub element_name: String,
    pub row_count: u32,
    pub column_count: u32,
    pub width: Option<String>,
    pub caption: Option<DocCaption>,
    pub rows: Vec<DocRow>,
}

impl DocTable {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let row_count = attrs.required("rows")?;
        let column_count = attrs.required("cols")?;
        let width = attrs.optional("width")?;
        attrs.finish(context)?;

        let mut caption = None;
        let mut rows = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "caption" => caption = Some(DocCaption::map_from_xml(context, child)?),
                "row" => rows.push(DocRow::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            row_count,
            column_count,
            width,
            caption,
            rows,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocCaption {
    pub element_name: String,
    pub id: Option<String>,
    pub content: Vec<DocTitleCmd>,
}

impl DocCaption {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.optional("id")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            content: map_title_content(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocRow {
    pub element_name: String,
    pub entries: Vec<DocEntry>,
}

impl DocRow {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut entries = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "entry" => entries.push(DocEntry::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            entries,
        })
    }
}

/// A table cell.
#[derive(Clone, Debug, PartialEq)]
pub struct DocEntry {
    pub element_name: String,
    pub thead: bool,
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
    pub align: Option<Align>,
    pub valign: Option<VerticalAlign>,
    pub width: Option<String>,
    pub class: Option<String>,
    pub paras: Vec<DocPara>,
}

impl DocEntry {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let thead = attrs.required("thead")?;
        let colspan = attrs.optional("colspan")?;
        let rowspan = attrs.optional("rowspan")?;
        let align = attrs.optional("align")?;
        let valign = attrs.optional("valign")?;
        let width = attrs.optional("width")?;
        let class = attrs.optional("class")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            thead,
            colspan,
            rowspan,
            align,
            valign,
            width,
            class,
            paras: map_paras(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocHeading {
    pub element_name: String,
    pub level: u32,
    pub content: Vec<DocTitleCmd>,
}

impl DocHeading {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let level = attrs.required("level")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            level,
            content: map_title_content(context, element)?,
        })
    }
}

/// A diagram loaded from an external file (`<dotfile>`, `<mscfile>`, `<diafile>`,
/// `<plantumlfile>`).
#[derive(Clone, Debug, PartialEq)]
pub struct DocImageFile {
    pub element_name: String,
    pub name: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub content: Vec<DocTitleCmd>,
}

impl DocImageFile {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let name = attrs.optional("name")?;
        let width = attrs.optional("width")?;
        let height = attrs.optional("height")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            name,
            width,
            height,
            content: map_title_content(context, element)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocTocList {
    pub element_name: String,
    pub items: Vec<DocTocItem>,
}

impl DocTocList {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut items = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "tocitem" => items.push(DocTocItem::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            items,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocTocItem {
    pub element_name: String,
    pub id: Option<String>,
    pub content: Vec<DocTitleCmd>,
}

impl DocTocItem {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.optional("id")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            content: map_title_content(context, element)?,
        })
    }
}

/// Documentation that only applies to one output language.
#[derive(Clone, Debug, PartialEq)]
pub struct DocLanguage {
    pub element_name: String,
    pub langid: String,
    pub paras: Vec<DocPara>,
}

impl DocLanguage {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let langid = attrs.required("langid")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            langid,
            paras: map_paras(context, element)?,
        })
    }
}

/// `\param`, `\tparam`, `\retval` and `\exception` blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct DocParamList {
    pub element_name: String,
    pub kind: ParamListKind,
    pub items: Vec<DocParamListItem>,
}

impl DocParamList {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let kind = attrs.required("kind")?;
        attrs.finish(context)?;

        let mut items = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "parameteritem" => items.push(DocParamListItem::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            kind,
            items,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocParamListItem {
    pub element_name: String,
    pub name_lists: Vec<DocParamNameList>,
    pub description: Description,
}

impl DocParamListItem {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut name_lists = Vec::new();
        let mut description = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "parameternamelist" => {
                    name_lists.push(DocParamNameList::map_from_xml(context, child)?)
                }
                "parameterdescription" => {
                    description = Some(Description::map_from_xml(context, child)?)
                }
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            name_lists,
            description: element.require(description, "parameterdescription")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocParamNameList {
    pub element_name: String,
    pub types: Vec<LinkedText>,
    pub names: Vec<DocParamName>,
}

impl DocParamNameList {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut types = Vec::new();
        let mut names = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "parametertype" => types.push(LinkedText::map_from_xml(context, child)?),
                "parametername" => names.push(DocParamName::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            types,
            names,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocParamName {
    pub element_name: String,
    pub direction: Option<ParamDirection>,
    pub content: Vec<LinkedTextItem>,
}

impl DocParamName {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let direction = attrs.optional("direction")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            direction,
            content: map_linked_content(context, element)?,
        })
    }
}

/// A cross-referenced list entry such as `\todo`, `\bug` or `\deprecated`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocXrefSect {
    pub element_name: String,
    pub id: String,
    pub titles: Vec<String>,
    pub description: Description,
}

impl DocXrefSect {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        attrs.finish(context)?;

        let mut titles = Vec::new();
        let mut description = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "xreftitle" => titles.push(context.text_only(child)?),
                "xrefdescription" => {
                    description = Some(Description::map_from_xml(context, child)?)
                }
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            titles,
            description: element.require(description, "xrefdescription")?,
        })
    }
}

/// Documentation copied from another entity with `\copydoc`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocCopy {
    pub element_name: String,
    pub link: String,
    pub paras: Vec<DocPara>,
    pub sections: Vec<DocSect>,
    pub internal: Option<DocInternal>,
}

impl DocCopy {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let link = attrs.required("link")?;
        attrs.finish(context)?;

        let mut paras = Vec::new();
        let mut sections = Vec::new();
        let mut internal = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "para" => paras.push(DocPara::map_from_xml(context, child)?),
                "sect1" => sections.push(DocSect::map_from_xml(context, child, 1)?),
                "internal" => internal = Some(DocInternal::map_from_xml(context, child, 0)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            link,
            paras,
            sections,
            internal,
        })
    }
}

/// A collapsible `<details>` block.
#[derive(Clone, Debug, PartialEq)]
pub struct DocDetails {
    pub element_name: String,
    pub summary: Option<DocTitle>,
    pub paras: Vec<DocPara>,
}

impl DocDetails {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut summary = None;
        let mut paras = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "summary" => summary = Some(DocTitle::map_from_xml(context, child)?),
                "para" => paras.push(DocPara::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            summary,
            paras,
        })
    }
}

/// `<blockquote>` and `<parblock>`: a plain run of paragraphs.
#[derive(Clone, Debug, PartialEq)]
pub struct DocParaBlock {
    pub element_name: String,
    pub paras: Vec<DocPara>,
}

impl DocParaBlock {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            paras: map_paras(context, element)?,
        })
    }
}
