//! The configuration dump (`Doxyfile.xml`).

use crate::{
    context::ParseContext,
    element::Element,
    error::{DoxmlError, Result},
    kinds::OptionType,
    values::setting_bool,
};

#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// `None` for an integer setting left empty
    Int(Option<i64>),
    Bool(bool),
    String(String),
    StringList(Vec<String>),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => *value,
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(values) => Some(values),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoxyfileOption {
    pub element_name: String,
    pub id: String,
    pub option_type: OptionType,
    /// The setting was left at Doxygen's default
    pub default: bool,
    pub value: OptionValue,
}

impl DoxyfileOption {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id: String = attrs.required("id")?;
        let option_type = attrs.required("type")?;
        let default = attrs.flag("default")?;
        attrs.finish(context)?;

        let mut value_elements = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "value" => {
                    child.attributes().finish(context)?;
                    value_elements.push(child);
                }
                _ => context.unknown_element(element, child)?,
            }
        }

        let value = match option_type {
            OptionType::StringList => {
                let mut list = Vec::with_capacity(value_elements.len());
                for value in value_elements {
                    list.push(context.text_only(value)?);
                }
                OptionValue::StringList(list)
            }
            single => {
                let mut value_elements = value_elements.into_iter();
                let first = value_elements.next();
                for extra in value_elements {
                    context.unknown_element(element, extra)?;
                }
                match (single, first) {
                    (OptionType::Int, Some(value)) => OptionValue::Int(value.number_content()?),
                    (OptionType::Int, None) => OptionValue::Int(None),
                    (OptionType::Bool, Some(value)) => {
                        let text = context.text_only(value)?;
                        let flag = setting_bool(&text).ok_or_else(|| {
                            DoxmlError::InvalidValue {
                                element: element.name().to_string(),
                                name: id.clone(),
                                value: text.clone(),
                                expected: "YES/NO setting",
                                pos: value.position(),
                            }
                        })?;
                        OptionValue::Bool(flag)
                    }
                    (OptionType::Bool, None) => OptionValue::Bool(false),
                    (_, Some(value)) => OptionValue::String(context.text_only(value)?),
                    (_, None) => OptionValue::String(String::new()),
                }
            }
        };

        Ok(Self {
            element_name: element.name().to_string(),
            id,
            option_type,
            default,
            value,
        })
    }
}

/// Project configuration in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct Doxyfile {
    pub element_name: String,
    pub version: Option<String>,
    pub language_tag: Option<String>,
    pub options: Vec<DoxyfileOption>,
}

impl Doxyfile {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        if element.name() != "doxyfile" {
            return Err(DoxmlError::UnexpectedRoot {
                expected: "doxyfile",
                found: element.name().to_string(),
            });
        }
        let mut attrs = element.attributes();
        let version = attrs.optional("version")?;
        let language_tag = attrs.language_tag();
        attrs.finish(context)?;

        let mut options = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "option" => options.push(DoxyfileOption::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            version,
            language_tag,
            options,
        })
    }

    pub fn option(&self, id: &str) -> Option<&DoxyfileOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&OptionValue> {
        self.option(id).map(|option| &option.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options
            .iter()
            .map(|option| (option.id.as_str(), &option.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    const DOXYFILE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxyfile xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="doxyfile.xsd" version="1.9.8" xml:lang="en-US">
  <option  id='PROJECT_NAME' default='no' type='string'><value><![CDATA["My Project"]]></value></option>
  <option  id='TAB_SIZE' default='yes' type='int'><value><![CDATA[4]]></value></option>
  <option  id='LOOKUP_CACHE_SIZE' default='yes' type='int'><value></value></option>
  <option  id='GENERATE_XML' default='no' type='bool'><value><![CDATA[YES]]></value></option>
  <option  id='INPUT' default='no' type='stringlist'>
    <value><![CDATA[src]]></value>
    <value><![CDATA[include]]></value>
  </option>
  <option  id='ALIASES' default='yes' type='stringlist'></option>
</doxyfile>"#;

    #[test]
    fn typed_options() {
        let (doxyfile, diagnostics) = map_snippet(DOXYFILE, Doxyfile::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(doxyfile.options.len(), 6);

        let name = doxyfile.option("PROJECT_NAME").unwrap();
        assert!(!name.default);
        assert_eq!(name.value.as_str(), Some("\"My Project\""));

        assert_eq!(doxyfile.get("TAB_SIZE").unwrap().as_int(), Some(4));
        assert!(doxyfile.option("TAB_SIZE").unwrap().default);
        assert_eq!(doxyfile.get("LOOKUP_CACHE_SIZE"), Some(&OptionValue::Int(None)));
        assert_eq!(doxyfile.get("GENERATE_XML").unwrap().as_bool(), Some(true));
        assert_eq!(
            doxyfile.get("INPUT").unwrap().as_list(),
            Some(&["src".to_string(), "include".to_string()][..])
        );
        assert_eq!(doxyfile.get("ALIASES").unwrap().as_list(), Some(&[][..]));
        assert!(doxyfile.get("MISSING").is_none());

        let ids: Vec<_> = doxyfile.iter().map(|(id, _)| id).collect();
        assert_eq!(ids[0], "PROJECT_NAME");
        assert_eq!(ids[5], "ALIASES");
    }

    #[test]
    fn malformed_values_are_structural_errors() {
        let bad_int = r#"<option id='TAB_SIZE' default='no' type='int'><value>four</value></option>"#;
        assert!(matches!(
            map_snippet(bad_int, DoxyfileOption::map_from_xml),
            Err(DoxmlError::InvalidValue { .. })
        ));
        let bad_bool =
            r#"<option id='QUIET' default='no' type='bool'><value>sometimes</value></option>"#;
        match map_snippet(bad_bool, DoxyfileOption::map_from_xml) {
            Err(DoxmlError::InvalidValue { name, value, .. }) => {
                assert_eq!(name, "QUIET");
                assert_eq!(value, "sometimes");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
        let bad_type = r#"<option id='QUIET' default='no' type='float'/>"#;
        assert!(map_snippet(bad_type, DoxyfileOption::map_from_xml).is_err());
    }
}
