//! Compound documents: the `<doxygen>` root and its `<compounddef>`s.

use crate::{
    context::ParseContext,
    description::Description,
    element::Element,
    error::{DoxmlError, Result},
    graph::Graph,
    kinds::{CompoundKind, Language, Protection},
    linked_text::LinkedText,
    listing::Listing,
    location::Location,
    member_def::MemberDef,
    param::TemplateParamList,
    reference::{
        map_exports, map_list_of_all_members, CompoundRef, Export, Include, InnerRef,
        ListedMember,
    },
    section_def::{MemberStub, SectionDef},
    table_of_contents::TableOfContents,
};

/// Root of a compound document.
#[derive(Clone, Debug, PartialEq)]
pub struct DoxygenDocument {
    pub element_name: String,
    pub version: String,
    pub language_tag: Option<String>,
    pub compounds: Vec<CompoundDef>,
}

impl DoxygenDocument {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        if element.name() != "doxygen" {
            return Err(DoxmlError::UnexpectedRoot {
                expected: "doxygen",
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
                "compounddef" => compounds.push(CompoundDef::map_from_xml(context, child)?),
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
}

/// A documented entity with its own page: class, file, namespace, group, page, ...
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundDef {
    pub element_name: String,
    pub id: String,
    pub kind: CompoundKind,
    pub language: Option<Language>,
    pub prot: Option<Protection>,
    pub final_: bool,
    pub inline: bool,
    pub sealed: bool,
    pub abstract_: bool,
    pub compound_name: String,
    pub title: Option<String>,
    pub base_compounds: Vec<CompoundRef>,
    pub derived_compounds: Vec<CompoundRef>,
    pub includes: Vec<Include>,
    pub included_by: Vec<Include>,
    pub include_graph: Option<Graph>,
    pub inverse_include_graph: Option<Graph>,
    pub inner_modules: Vec<InnerRef>,
    pub inner_dirs: Vec<InnerRef>,
    pub inner_files: Vec<InnerRef>,
    pub inner_classes: Vec<InnerRef>,
    pub inner_concepts: Vec<InnerRef>,
    pub inner_namespaces: Vec<InnerRef>,
    pub inner_pages: Vec<InnerRef>,
    pub inner_groups: Vec<InnerRef>,
    pub qualifier: Vec<String>,
    pub template_params: Option<TemplateParamList>,
    pub sections: Vec<SectionDef>,
    pub table_of_contents: Option<TableOfContents>,
    pub requires_clause: Option<LinkedText>,
    pub initializer: Option<LinkedText>,
    pub brief_description: Option<Description>,
    pub detailed_description: Option<Description>,
    pub exports: Vec<Export>,
    pub inheritance_graph: Option<Graph>,
    pub collaboration_graph: Option<Graph>,
    pub program_listing: Option<Listing>,
    pub location: Option<Location>,
    pub list_of_all_members: Vec<ListedMember>,
}

impl CompoundDef {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        let kind = attrs.required("kind")?;
        let language = attrs.optional("language")?;
        let prot = attrs.optional("prot")?;
        let final_ = attrs.flag("final")?;
        let inline = attrs.flag("inline")?;
        let sealed = attrs.flag("sealed")?;
        let abstract_ = attrs.flag("abstract")?;
        attrs.finish(context)?;

        let mut compound_name = None;
        let mut compound = Self {
            element_name: element.name().to_string(),
            id,
            kind,
            language,
            prot,
            final_,
            inline,
            sealed,
            abstract_,
            compound_name: String::new(),
            title: None,
            base_compounds: Vec::new(),
            derived_compounds: Vec::new(),
            includes: Vec::new(),
            included_by: Vec::new(),
            include_graph: None,
            inverse_include_graph: None,
            inner_modules: Vec::new(),
            inner_dirs: Vec::new(),
            inner_files: Vec::new(),
            inner_classes: Vec::new(),
            inner_concepts: Vec::new(),
            inner_namespaces: Vec::new(),
            inner_pages: Vec::new(),
            inner_groups: Vec::new(),
            qualifier: Vec::new(),
            template_params: None,
            sections: Vec::new(),
            table_of_contents: None,
            requires_clause: None,
            initializer: None,
            brief_description: None,
            detailed_description: None,
            exports: Vec::new(),
            inheritance_graph: None,
            collaboration_graph: None,
            program_listing: None,
            location: None,
            list_of_all_members: Vec::new(),
        };

        for child in context.child_elements(element)? {
            match child.name() {
                "compoundname" => compound_name = Some(context.text_only(child)?),
                "title" => compound.title = Some(context.text_only(child)?),
                "basecompoundref" => compound
                    .base_compounds
                    .push(CompoundRef::map_from_xml(context, child)?),
                "derivedcompoundref" => compound
                    .derived_compounds
                    .push(CompoundRef::map_from_xml(context, child)?),
                "includes" => compound.includes.push(Include::map_from_xml(context, child)?),
                "includedby" => compound
                    .included_by
                    .push(Include::map_from_xml(context, child)?),
                "incdepgraph" => {
                    compound.include_graph = Some(Graph::map_from_xml(context, child)?)
                }
                "invincdepgraph" => {
                    compound.inverse_include_graph = Some(Graph::map_from_xml(context, child)?)
                }
                "innermodule" => compound
                    .inner_modules
                    .push(InnerRef::map_from_xml(context, child)?),
                "innerdir" => compound.inner_dirs.push(InnerRef::map_from_xml(context, child)?),
                "innerfile" => compound.inner_files.push(InnerRef::map_from_xml(context, child)?),
                "innerclass" => compound
                    .inner_classes
                    .push(InnerRef::map_from_xml(context, child)?),
                "innerconcept" => compound
                    .inner_concepts
                    .push(InnerRef::map_from_xml(context, child)?),
                "innernamespace" => compound
                    .inner_namespaces
                    .push(InnerRef::map_from_xml(context, child)?),
                "innerpage" => compound.inner_pages.push(InnerRef::map_from_xml(context, child)?),
                "innergroup" => compound
                    .inner_groups
                    .push(InnerRef::map_from_xml(context, child)?),
                "qualifier" => compound.qualifier.push(context.text_only(child)?),
                "templateparamlist" => {
                    compound.template_params =
                        Some(TemplateParamList::map_from_xml(context, child)?)
                }
                "sectiondef" => compound
                    .sections
                    .push(SectionDef::map_from_xml(context, child)?),
                "tableofcontents" => {
                    compound.table_of_contents =
                        Some(TableOfContents::map_from_xml(context, child)?)
                }
                "requiresclause" => {
                    compound.requires_clause = Some(LinkedText::map_from_xml(context, child)?)
                }
                "initializer" => {
                    compound.initializer = Some(LinkedText::map_from_xml(context, child)?)
                }
                "briefdescription" => {
                    compound.brief_description = Some(Description::map_from_xml(context, child)?)
                }
                "detaileddescription" => {
                    compound.detailed_description = Some(Description::map_from_xml(context, child)?)
                }
                "exports" => compound.exports.extend(map_exports(context, child)?),
                "inheritancegraph" => {
                    compound.inheritance_graph = Some(Graph::map_from_xml(context, child)?)
                }
                "collaborationgraph" => {
                    compound.collaboration_graph = Some(Graph::map_from_xml(context, child)?)
                }
                "programlisting" => {
                    compound.program_listing = Some(Listing::map_from_xml(context, child)?)
                }
                "location" => compound.location = Some(Location::map_from_xml(context, child)?),
                "listofallmembers" => compound
                    .list_of_all_members
                    .extend(map_list_of_all_members(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }

        compound.compound_name = element.require(compound_name, "compoundname")?;
        Ok(compound)
    }

    /// Every member defined in place, section by section.
    pub fn member_defs(&self) -> impl Iterator<Item = &MemberDef> {
        self.sections.iter().flat_map(|s| s.member_defs.iter())
    }

    /// Every member stub, section by section.
    pub fn member_stubs(&self) -> impl Iterator<Item = &MemberStub> {
        self.sections.iter().flat_map(|s| s.members.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        kinds::{MemberKind, SectionKind},
        test_support::map_snippet,
    };

    const CLASS: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="compound.xsd" version="1.9.8" xml:lang="en-US">
  <compounddef id="classFoo" kind="class" language="C++" prot="public" final="yes">
    <compoundname>Foo</compoundname>
    <basecompoundref refid="classBase" prot="public" virt="non-virtual">Base</basecompoundref>
    <includes refid="foo_8h" local="no">foo.h</includes>
    <innerclass refid="classFoo_1_1Inner" prot="private">Foo::Inner</innerclass>
    <templateparamlist><param><type>typename T</type></param></templateparamlist>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classFoo_1a0" prot="public" static="no">
        <type>void</type><name>bar</name><location file="foo.h" line="3"/>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A foo.</para></briefdescription>
    <detaileddescription/>
    <inheritancegraph><node id="1"><label>Foo</label></node></inheritancegraph>
    <location file="foo.h" line="1" column="1" bodyfile="foo.h" bodystart="1" bodyend="5"/>
    <listofallmembers>
      <member refid="classFoo_1a0" prot="public" virt="non-virtual"><scope>Foo</scope><name>bar</name></member>
    </listofallmembers>
  </compounddef>
</doxygen>"#;

    #[test]
    fn class_document() {
        let (document, diagnostics) = map_snippet(CLASS, DoxygenDocument::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(document.version, "1.9.8");
        assert_eq!(document.language_tag.as_deref(), Some("en-US"));
        assert_eq!(document.compounds.len(), 1);

        let class = &document.compounds[0];
        assert_eq!(class.id, "classFoo");
        assert_eq!(class.kind, CompoundKind::Class);
        assert_eq!(class.language, Some(Language::Cpp));
        assert!(class.final_);
        assert!(!class.abstract_);
        assert_eq!(class.compound_name, "Foo");
        assert_eq!(class.base_compounds[0].refid.as_deref(), Some("classBase"));
        assert!(class.derived_compounds.is_empty());
        assert_eq!(class.includes[0].name, "foo.h");
        assert_eq!(class.inner_classes[0].prot, Some(Protection::Private));
        assert!(class.inner_files.is_empty());
        assert_eq!(class.template_params.as_ref().unwrap().params.len(), 1);
        assert_eq!(class.sections[0].kind, SectionKind::PublicFunc);
        assert_eq!(class.member_defs().count(), 1);
        assert_eq!(class.member_defs().next().unwrap().kind, MemberKind::Function);
        assert!(class.inheritance_graph.is_some());
        assert!(class.collaboration_graph.is_none());
        assert_eq!(class.location.as_ref().unwrap().bodyend, Some(5));
        assert_eq!(class.list_of_all_members[0].scope, "Foo");
    }

    #[test]
    fn wrong_root_is_rejected() {
        let err = map_snippet("<doxygenindex version=\"1\"/>", DoxygenDocument::map_from_xml)
            .unwrap_err();
        assert!(matches!(
            err,
            DoxmlError::UnexpectedRoot {
                expected: "doxygen",
                ..
            }
        ));
    }

    #[test]
    fn compound_name_is_mandatory() {
        let xml = r#"<compounddef id="x" kind="file"/>"#;
        let err = map_snippet(xml, CompoundDef::map_from_xml).unwrap_err();
        assert!(matches!(
            err,
            DoxmlError::MissingChild {
                child: "compoundname",
                ..
            }
        ));
    }

    #[test]
    fn future_children_are_skipped_with_a_warning() {
        let xml = r#"<compounddef id="x" kind="file" future="1"><compoundname>x.h</compoundname><hologram/></compounddef>"#;
        let (compound, diagnostics) = map_snippet(xml, CompoundDef::map_from_xml).unwrap();
        assert_eq!(compound.compound_name, "x.h");
        assert_eq!(diagnostics.len(), 2);
    }
}
