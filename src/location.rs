use crate::{context::ParseContext, element::Element, error::Result};

/// Where an entity is declared and, for functions and classes, where its body lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub element_name: String,
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub declfile: Option<String>,
    pub declline: Option<u32>,
    pub declcolumn: Option<u32>,
    pub bodyfile: Option<String>,
    pub bodystart: Option<i64>,
    /// `-1` when the body ends on the line it starts.
    pub bodyend: Option<i64>,
}

impl Location {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let location = Self {
            element_name: element.name().to_string(),
            file: attrs.required("file")?,
            line: attrs.optional("line")?,
            column: attrs.optional("column")?,
            declfile: attrs.optional("declfile")?,
            declline: attrs.optional("declline")?,
            declcolumn: attrs.optional("declcolumn")?,
            bodyfile: attrs.optional("bodyfile")?,
            bodystart: attrs.optional("bodystart")?,
            bodyend: attrs.optional("bodyend")?,
        };
        attrs.finish(context)?;
        for child in context.child_elements(element)? {
            context.unknown_element(element, child)?;
        }
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_support::map_snippet, DoxmlError};

    #[test]
    fn reads_all_coordinates() {
        let (location, diagnostics) = map_snippet(
            r#"<location file="foo.h" line="12" column="5" bodyfile="foo.cpp" bodystart="3" bodyend="-1"/>"#,
            Location::map_from_xml,
        )
        .unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(location.file, "foo.h");
        assert_eq!(location.line, Some(12));
        assert_eq!(location.declfile, None);
        assert_eq!(location.bodyend, Some(-1));
    }

    #[test]
    fn file_is_mandatory() {
        let err = map_snippet(r#"<location line="1"/>"#, Location::map_from_xml).unwrap_err();
        assert!(matches!(
            err,
            DoxmlError::MissingAttribute {
                attribute: "file",
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_line_is_rejected() {
        let err =
            map_snippet(r#"<location file="a" line="x"/>"#, Location::map_from_xml).unwrap_err();
        assert!(matches!(err, DoxmlError::InvalidValue { .. }));
    }
}
