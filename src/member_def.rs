//! Member definitions (`<memberdef>`) and enumerators (`<enumvalue>`).

use crate::{
    context::ParseContext,
    description::Description,
    element::{Attributes, Element},
    error::Result,
    kinds::{Accessor, MemberKind, Protection, RefQualifier, Virtualness},
    linked_text::LinkedText,
    location::Location,
    param::{Param, TemplateParamList},
    reference::{MemberReference, Reimplement},
};

/// The full definition of a function, variable, typedef, enum, macro, ...
#[derive(Clone, Debug, PartialEq)]
pub struct MemberDef {
    pub element_name: String,
    pub id: String,
    pub kind: MemberKind,
    pub prot: Protection,
    pub qualifiers: MemberQualifiers,
    pub template_params: Option<TemplateParamList>,
    pub member_type: Option<LinkedText>,
    pub definition: Option<String>,
    pub argsstring: Option<String>,
    pub name: Option<String>,
    pub qualified_name: Option<String>,
    /// Getter of a property
    pub read: Option<String>,
    /// Setter of a property
    pub write: Option<String>,
    pub bitfield: Option<String>,
    pub reimplements: Vec<Reimplement>,
    pub reimplemented_by: Vec<Reimplement>,
    pub qualifier: Vec<String>,
    pub params: Vec<Param>,
    pub enum_values: Vec<EnumValue>,
    pub requires_clause: Option<LinkedText>,
    pub initializer: Option<LinkedText>,
    pub exceptions: Option<LinkedText>,
    pub brief_description: Option<Description>,
    pub detailed_description: Option<Description>,
    pub inbody_description: Option<Description>,
    pub location: Location,
    pub references: Vec<MemberReference>,
    pub referenced_by: Vec<MemberReference>,
}

/// The yes/no and keyword attributes of a `<memberdef>`. Language-specific ones stay at their
/// defaults for languages that do not have them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberQualifiers {
    pub static_: bool,
    pub extern_: bool,
    pub strong: bool,
    pub const_: bool,
    pub explicit: bool,
    pub inline: bool,
    pub refqual: Option<RefQualifier>,
    pub virt: Option<Virtualness>,
    pub volatile: bool,
    pub mutable: bool,
    pub noexcept: bool,
    pub noexcept_expression: Option<String>,
    pub nodiscard: bool,
    pub constexpr: bool,
    pub consteval: bool,
    pub constinit: bool,
    pub final_: bool,
    pub sealed: bool,
    pub new: bool,
    // C# / Objective-C properties
    pub readable: bool,
    pub writable: bool,
    pub initonly: bool,
    pub settable: bool,
    pub privatesettable: bool,
    pub protectedsettable: bool,
    pub gettable: bool,
    pub privategettable: bool,
    pub protectedgettable: bool,
    pub optional: bool,
    pub required: bool,
    pub accessor: Option<Accessor>,
    pub attribute: bool,
    pub property: bool,
    pub readonly: bool,
    pub bound: bool,
    pub removable: bool,
    pub constrained: bool,
    pub transient: bool,
    pub maybevoid: bool,
    pub maybedefault: bool,
    pub maybeambiguous: bool,
    // C# events
    pub add: bool,
    pub remove: bool,
    pub raise: bool,
}

impl MemberQualifiers {
    fn read(attrs: &mut Attributes) -> Result<Self> {
        Ok(Self {
            static_: attrs.flag("static")?,
            extern_: attrs.flag("extern")?,
            strong: attrs.flag("strong")?,
            const_: attrs.flag("const")?,
            explicit: attrs.flag("explicit")?,
            inline: attrs.flag("inline")?,
            refqual: attrs.optional("refqual")?,
            virt: attrs.optional("virt")?,
            volatile: attrs.flag("volatile")?,
            mutable: attrs.flag("mutable")?,
            noexcept: attrs.flag("noexcept")?,
            noexcept_expression: attrs.optional("noexceptexpression")?,
            nodiscard: attrs.flag("nodiscard")?,
            constexpr: attrs.flag("constexpr")?,
            consteval: attrs.flag("consteval")?,
            constinit: attrs.flag("constinit")?,
            final_: attrs.flag("final")?,
            sealed: attrs.flag("sealed")?,
            new: attrs.flag("new")?,
            readable: attrs.flag("readable")?,
            writable: attrs.flag("writable")?,
            initonly: attrs.flag("initonly")?,
            settable: attrs.flag("settable")?,
            privatesettable: attrs.flag("privatesettable")?,
            protectedsettable: attrs.flag("protectedsettable")?,
            gettable: attrs.flag("gettable")?,
            privategettable: attrs.flag("privategettable")?,
            protectedgettable: attrs.flag("protectedgettable")?,
            optional: attrs.flag("optional")?,
            required: attrs.flag("required")?,
            accessor: attrs.optional("accessor")?,
            attribute: attrs.flag("attribute")?,
            property: attrs.flag("property")?,
            readonly: attrs.flag("readonly")?,
            bound: attrs.flag("bound")?,
            removable: attrs.flag("removable")?,
            constrained: attrs.flag("constrained")?,
            transient: attrs.flag("transient")?,
            maybevoid: attrs.flag("maybevoid")?,
            maybedefault: attrs.flag("maybedefault")?,
            maybeambiguous: attrs.flag("maybeambiguous")?,
            add: attrs.flag("add")?,
            remove: attrs.flag("remove")?,
            raise: attrs.flag("raise")?,
        })
    }
}

impl MemberDef {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        let kind = attrs.required("kind")?;
        let prot = attrs.required("prot")?;
        let qualifiers = MemberQualifiers::read(&mut attrs)?;
        attrs.finish(context)?;

        let mut template_params = None;
        let mut member_type = None;
        let mut definition = None;
        let mut argsstring = None;
        let mut name = None;
        let mut qualified_name = None;
        let mut read = None;
        let mut write = None;
        let mut bitfield = None;
        let mut reimplements = Vec::new();
        let mut reimplemented_by = Vec::new();
        let mut qualifier = Vec::new();
        let mut params = Vec::new();
        let mut enum_values = Vec::new();
        let mut requires_clause = None;
        let mut initializer = None;
        let mut exceptions = None;
        let mut brief_description = None;
        let mut detailed_description = None;
        let mut inbody_description = None;
        let mut location = None;
        let mut references = Vec::new();
        let mut referenced_by = Vec::new();

        for child in context.child_elements(element)? {
            match child.name() {
                "templateparamlist" => {
                    template_params = Some(TemplateParamList::map_from_xml(context, child)?)
                }
                "type" => member_type = Some(LinkedText::map_from_xml(context, child)?),
                "definition" => definition = Some(context.text_only(child)?),
                "argsstring" => argsstring = Some(context.text_only(child)?),
                "name" => name = Some(context.text_only(child)?),
                "qualifiedname" => qualified_name = Some(context.text_only(child)?),
                "read" => read = Some(context.text_only(child)?),
                "write" => write = Some(context.text_only(child)?),
                "bitfield" => bitfield = Some(context.text_only(child)?),
                "reimplements" => reimplements.push(Reimplement::map_from_xml(context, child)?),
                "reimplementedby" => {
                    reimplemented_by.push(Reimplement::map_from_xml(context, child)?)
                }
                "qualifier" => qualifier.push(context.text_only(child)?),
                "param" => params.push(Param::map_from_xml(context, child)?),
                "enumvalue" => enum_values.push(EnumValue::map_from_xml(context, child)?),
                "requiresclause" => {
                    requires_clause = Some(LinkedText::map_from_xml(context, child)?)
                }
                "initializer" => initializer = Some(LinkedText::map_from_xml(context, child)?),
                "exceptions" => exceptions = Some(LinkedText::map_from_xml(context, child)?),
                "briefdescription" => {
                    brief_description = Some(Description::map_from_xml(context, child)?)
                }
                "detaileddescription" => {
                    detailed_description = Some(Description::map_from_xml(context, child)?)
                }
                "inbodydescription" => {
                    inbody_description = Some(Description::map_from_xml(context, child)?)
                }
                "location" => location = Some(Location::map_from_xml(context, child)?),
                "references" => references.push(MemberReference::map_from_xml(context, child)?),
                "referencedby" => {
                    referenced_by.push(MemberReference::map_from_xml(context, child)?)
                }
                _ => context.unknown_element(element, child)?,
            }
        }

        Ok(Self {
            element_name: element.name().to_string(),
            id,
            kind,
            prot,
            qualifiers,
            template_params,
            member_type,
            definition,
            argsstring,
            name,
            qualified_name,
            read,
            write,
            bitfield,
            reimplements,
            reimplemented_by,
            qualifier,
            params,
            enum_values,
            requires_clause,
            initializer,
            exceptions,
            brief_description,
            detailed_description,
            inbody_description,
            location: element.require(location, "location")?,
            references,
            referenced_by,
        })
    }
}

/// One enumerator of an enum member.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub element_name: String,
    pub id: String,
    pub prot: Protection,
    pub name: String,
    pub initializer: Option<LinkedText>,
    pub brief_description: Option<Description>,
    pub detailed_description: Option<Description>,
}

impl EnumValue {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        let prot = attrs.required("prot")?;
        attrs.finish(context)?;

        let mut name = None;
        let mut initializer = None;
        let mut brief_description = None;
        let mut detailed_description = None;
        for child in context.child_elements(element)? {
            match child.name() {
                "name" => name = Some(context.text_only(child)?),
                "initializer" => initializer = Some(LinkedText::map_from_xml(context, child)?),
                "briefdescription" => {
                    brief_description = Some(Description::map_from_xml(context, child)?)
                }
                "detaileddescription" => {
                    detailed_description = Some(Description::map_from_xml(context, child)?)
                }
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            prot,
            name: element.require(name, "name")?,
            initializer,
            brief_description,
            detailed_description,
        })
    }
}
