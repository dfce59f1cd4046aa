//! The index document (`index.xml`): the list of compounds and their members.

use crate::{
    context::ParseContext,
    element::Element,
    error::{DoxmlError, Result},
    kinds::{CompoundKind, MemberKind},
};

#[derive(Clone, Debug, PartialEq)]
pub struct DoxygenIndex {
    pub element_name: String,
    pub version: String,
    pub language_tag: Option<String>,
    pub compounds: Vec<IndexCompound>,
}

impl DoxygenIndex {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        if element.name() != "doxygenindex" {
            return Err(DoxmlError::UnexpectedRoot {
                expected: "doxygenindex",
                found: element.name().to_string(),
            });
        }
        let mut attrs = element.attributes();
        let version = attrs.required("version")?;
        let language_tag = attrs.language_tag();
        attrs.finish(context)?;

        let mut compounds = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "compound" => compounds.push(IndexCompound::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            version,
            language_tag,
            compounds,
        })
    }

    pub fn compound(&self, refid: &str) -> Option<&IndexCompound> {
        self.compounds.iter().find(|c| c.refid == refid)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexCompound {
    pub element_name: String,
    pub refid: String,
    pub kind: CompoundKind,
    pub name: String,
    pub members: Vec<IndexMember>,
}

impl IndexCompound {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let kind = attrs.required("kind")?;
        attrs.finish(context)?;

        let mut name = None;
        let mut members = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "name" => name = Some(context.text_only(child)?),
                "member" => members.push(IndexMember::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            kind,
            name: element.require(name, "name")?,
            members,
        })
    }
}

/// A member as listed by the index. Its kind may be empty until the corpus is resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexMember {
    pub element_name: String,
    pub refid: String,
    pub kind: Option<MemberKind>,
    pub name: String,
}

impl IndexMember {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let kind = attrs.optional_nonempty("kind")?;
        attrs.finish(context)?;

        let mut name = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "name" => name = Some(context.text_only(child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            kind,
            name: element.require(name, "name")?,
        })
    }
}
