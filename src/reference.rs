//! Small by-identifier references between compounds and members. None of these are checked
//! against the corpus; only section member stubs are.

use crate::{
    context::ParseContext,
    element::Element,
    error::Result,
    kinds::{Protection, Virtualness},
};

/// `<basecompoundref>` or `<derivedcompoundref>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundRef {
    pub element_name: String,
    /// Absent for classes outside the documented code
    pub refid: Option<String>,
    pub prot: Protection,
    pub virt: Virtualness,
    pub name: String,
}

impl CompoundRef {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.optional("refid")?;
        let prot = attrs.required("prot")?;
        let virt = attrs.required("virt")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            prot,
            virt,
            name: context.text_only(element)?,
        })
    }
}

/// `<reimplements>` or `<reimplementedby>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reimplement {
    pub element_name: String,
    pub refid: String,
    pub name: String,
}

impl Reimplement {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            name: context.text_only(element)?,
        })
    }
}

/// `<includes>` or `<includedby>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Include {
    pub element_name: String,
    pub refid: Option<String>,
    /// `#include "..."` rather than `#include <...>`
    pub local: bool,
    pub name: String,
}

impl Include {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.optional("refid")?;
        let local = attrs.required("local")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            local,
            name: context.text_only(element)?,
        })
    }
}

/// Containment of another compound (`<innerclass>`, `<innerfile>`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerRef {
    pub element_name: String,
    pub refid: String,
    pub prot: Option<Protection>,
    pub name: String,
}

impl InnerRef {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let prot = attrs.optional("prot")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            prot,
            name: context.text_only(element)?,
        })
    }
}

/// `<references>` or `<referencedby>`: a use of one member by another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberReference {
    pub element_name: String,
    pub refid: String,
    pub compoundref: Option<String>,
    pub startline: Option<u32>,
    pub endline: Option<u32>,
    pub name: String,
}

impl MemberReference {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let compoundref = attrs.optional("compoundref")?;
        let startline = attrs.optional("startline")?;
        let endline = attrs.optional("endline")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            compoundref,
            startline,
            endline,
            name: context.text_only(element)?,
        })
    }
}

/// A C++20 module export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub element_name: String,
    pub refid: Option<String>,
    pub name: String,
}

impl Export {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.optional("refid")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            name: context.text_only(element)?,
        })
    }
}

/// `<exports>`
pub(crate) fn map_exports(context: &mut ParseContext, element: Element) -> Result<Vec<Export>> {
    element.attributes().finish(context)?;
    let mut exports = Vec::new();
    for child in context.child_elements(element)? {
        match child.name() {
            "export" => exports.push(Export::map_from_xml(context, child)?),
            _ => context.unknown_element(element, child)?,
        }
    }
    Ok(exports)
}

/// One entry of a class's `<listofallmembers>`, inherited members included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedMember {
    pub element_name: String,
    pub refid: String,
    pub prot: Protection,
    pub virt: Virtualness,
    pub ambiguityscope: Option<String>,
    pub scope: String,
    pub name: String,
}

impl ListedMember {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let prot = attrs.required("prot")?;
        let virt = attrs.required("virt")?;
        let ambiguityscope = attrs.optional("ambiguityscope")?;
        attrs.finish(context)?;

        let mut scope = None;
        let mut name = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "scope" => scope = Some(context.text_only(child)?),
                "name" => name = Some(context.text_only(child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            prot,
            virt,
            ambiguityscope,
            scope: element.require(scope, "scope")?,
            name: element.require(name, "name")?,
        })
    }
}

/// `<listofallmembers>`
pub(crate) fn map_list_of_all_members(
    context: &mut ParseContext,
    element: Element,
) -> Result<Vec<ListedMember>> {
    element.attributes().finish(context)?;
    let mut members = Vec::new();
    for child in context.child_elements(element)? {
        match child.name() {
            "member" => members.push(ListedMember::map_from_xml(context, child)?),
            _ => context.unknown_element(element, child)?,
        }
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    #[test]
    fn base_compound_without_refid() {
        let (base, diagnostics) = map_snippet(
            r#"<basecompoundref prot="public" virt="virtual">std::exception</basecompoundref>"#,
            CompoundRef::map_from_xml,
        )
        .unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(base.refid, None);
        assert_eq!(base.prot, Protection::Public);
        assert_eq!(base.virt, Virtualness::Virtual);
        assert_eq!(base.name, "std::exception");
    }

    #[test]
    fn include_local_flag() {
        let (include, _) = map_snippet(
            r#"<includes refid="foo_8h" local="YES">foo.h</includes>"#,
            Include::map_from_xml,
        )
        .unwrap();
        assert!(include.local);
        let (include, _) =
            map_snippet(r#"<includes local="no">vector</includes>"#, Include::map_from_xml)
                .unwrap();
        assert!(!include.local);
        assert_eq!(include.refid, None);
    }

    #[test]
    fn listed_member_needs_scope_and_name() {
        let xml = r#"<listofallmembers>
  <member refid="classFoo_1a0" prot="public" virt="non-virtual"><scope>Foo</scope><name>bar</name></member>
</listofallmembers>"#;
        let (members, diagnostics) = map_snippet(xml, map_list_of_all_members).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(members[0].scope, "Foo");
        assert_eq!(members[0].name, "bar");

        let broken = r#"<member refid="x" prot="public" virt="virtual"><name>bar</name></member>"#;
        assert!(map_snippet(broken, ListedMember::map_from_xml).is_err());
    }
}
