use crate::{
    context::ParseContext,
    description::Description,
    element::Element,
    error::{DoxmlError, Result},
    kinds::{MemberKind, SectionKind},
    member_def::MemberDef,
    options::SectionExclusivity,
};

/// A group of members inside a compound (`<sectiondef>`).
///
/// A section either defines its members in place or refers to definitions elsewhere in the
/// corpus through [`MemberStub`]s. Holding both is rejected unless
/// [`SectionExclusivity::Permissive`] is configured.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDef {
    pub element_name: String,
    pub kind: SectionKind,
    pub header: Option<String>,
    pub description: Option<Description>,
    pub member_defs: Vec<MemberDef>,
    pub members: Vec<MemberStub>,
}

impl SectionDef {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let kind: SectionKind = attrs.required("kind")?;
        attrs.finish(context)?;

        let mut header = None;
        let mut description = None;
        let mut member_defs = Vec::new();
        let mut members = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "header" => header = Some(context.text_only(child)?),
                "description" => description = Some(Description::map_from_xml(context, child)?),
                "memberdef" => member_defs.push(MemberDef::map_from_xml(context, child)?),
                "member" => members.push(MemberStub::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }

        if !member_defs.is_empty()
            && !members.is_empty()
            && context.options().section_members == SectionExclusivity::Enforce
        {
            return Err(DoxmlError::MixedSection {
                element: element.name().to_string(),
                kind: kind.to_string(),
                pos: element.position(),
            });
        }

        Ok(Self {
            element_name: element.name().to_string(),
            kind,
            header,
            description,
            member_defs,
            members,
        })
    }
}

/// A by-identifier reference to a member defined elsewhere.
///
/// Doxygen may leave the kind empty. The cross-reference pass fills it in from the definition,
/// so after a successful [`resolve`](crate::resolve) every stub in a section has a kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberStub {
    pub element_name: String,
    pub refid: String,
    pub kind: Option<MemberKind>,
    pub name: String,
}

impl MemberStub {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_support::map_snippet_with, ParseOptions};

    const MIXED: &str = r#"<sectiondef kind="public-func">
  <memberdef kind="function" id="f" prot="public" static="no"><name>f</name><location file="a.h"/></memberdef>
  <member refid="g" kind=""><name>g</name></member>
</sectiondef>"#;

    #[test]
    fn stubs_with_empty_kind() {
        let xml = r#"<sectiondef kind="user-defined">
  <header>Helpers</header>
  <member refid="classFoo_1m0" kind=""><name>bar</name></member>
  <member refid="classFoo_1m1" kind="variable"><name>baz</name></member>
</sectiondef>"#;
        let (section, diagnostics) =
            map_snippet_with(xml, &ParseOptions::default(), SectionDef::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(section.kind, SectionKind::UserDefined);
        assert_eq!(section.header.as_deref(), Some("Helpers"));
        assert!(section.member_defs.is_empty());
        assert_eq!(section.members[0].kind, None);
        assert_eq!(section.members[0].name, "bar");
        assert_eq!(section.members[1].kind, Some(MemberKind::Variable));
    }

    #[test]
    fn mixed_section_is_rejected_by_default() {
        let err = map_snippet_with(MIXED, &ParseOptions::default(), SectionDef::map_from_xml)
            .unwrap_err();
        assert!(matches!(err, DoxmlError::MixedSection { .. }));
    }

    #[test]
    fn mixed_section_is_accepted_when_permissive() {
        let options = ParseOptions {
            section_members: SectionExclusivity::Permissive,
            ..Default::default()
        };
        let (section, _) = map_snippet_with(MIXED, &options, SectionDef::map_from_xml).unwrap();
        assert_eq!(section.member_defs.len(), 1);
        assert_eq!(section.members.len(), 1);
    }

    #[test]
    fn unknown_member_kind_is_an_error() {
        let xml = r#"<member refid="x" kind="gizmo"><name>x</name></member>"#;
        assert!(map_snippet_with(xml, &ParseOptions::default(), MemberStub::map_from_xml).is_err());
    }
}
