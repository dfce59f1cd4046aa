use crate::{
    context::ParseContext,
    description::Description,
    element::Element,
    error::Result,
    linked_text::LinkedText,
};

/// A function parameter or a template parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub element_name: String,
    pub attributes: Option<String>,
    pub param_type: Option<LinkedText>,
    pub declname: Option<String>,
    pub defname: Option<String>,
    pub array: Option<String>,
    pub defval: Option<LinkedText>,
    pub typeconstraint: Option<LinkedText>,
    pub brief_description: Option<Description>,
}

impl Param {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut param = Self {
            element_name: element.name().to_string(),
            attributes: None,
            param_type: None,
            declname: None,
            defname: None,
            array: None,
            defval: None,
            typeconstraint: None,
            brief_description: None,
        };
        for child in context.child_elements(element)? {
            match child.name() {
                "attributes" => param.attributes = Some(context.text_only(child)?),
                "type" => param.param_type = Some(LinkedText::map_from_xml(context, child)?),
                "declname" => param.declname = Some(context.text_only(child)?),
                "defname" => param.defname = Some(context.text_only(child)?),
                "array" => param.array = Some(context.text_only(child)?),
                "defval" => param.defval = Some(LinkedText::map_from_xml(context, child)?),
                "typeconstraint" => {
                    param.typeconstraint = Some(LinkedText::map_from_xml(context, child)?)
                }
                "briefdescription" => {
                    param.brief_description = Some(Description::map_from_xml(context, child)?)
                }
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(param)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateParamList {
    pub element_name: String,
    pub params: Vec<Param>,
}

impl TemplateParamList {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut params = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "param" => params.push(Param::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    #[test]
    fn each_child_fills_its_own_field() {
        let xml = r#"<param>
  <attributes>[[maybe_unused]]</attributes>
  <type>const <ref refid="classFoo" kindref="compound">Foo</ref> &amp;</type>
  <declname>foo</declname>
  <defname>f</defname>
  <array>[4]</array>
  <defval>Foo()</defval>
  <briefdescription><para>The foo.</para></briefdescription>
</param>"#;
        let (param, diagnostics) = map_snippet(xml, Param::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(param.attributes.as_deref(), Some("[[maybe_unused]]"));
        assert_eq!(param.param_type.as_ref().unwrap().plain_text(), "const Foo &");
        assert_eq!(param.declname.as_deref(), Some("foo"));
        assert_eq!(param.defname.as_deref(), Some("f"));
        assert_eq!(param.array.as_deref(), Some("[4]"));
        assert_eq!(param.defval.as_ref().unwrap().plain_text(), "Foo()");
        assert!(param.typeconstraint.is_none());
        assert_eq!(param.brief_description.as_ref().unwrap().paras().count(), 1);
    }

    #[test]
    fn template_parameters_keep_order() {
        let xml = "<templateparamlist><param><type>typename T</type></param><param><type>int N</type></param></templateparamlist>";
        let (list, _) = map_snippet(xml, TemplateParamList::map_from_xml).unwrap();
        let types: Vec<_> = list
            .params
            .iter()
            .map(|p| p.param_type.as_ref().unwrap().plain_text())
            .collect();
        assert_eq!(types, vec!["typename T", "int N"]);
    }
}
