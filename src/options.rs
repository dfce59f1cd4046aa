//! Knobs controlling how strictly a corpus is parsed.

/// What to do with an element, attribute or text node that the schema does not know about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnknownNodeAction {
    /// Abort the run with [`DoxmlError::UnknownElement`](crate::DoxmlError::UnknownElement) and
    /// friends.
    Deny,
    /// Log a warning, record a [`Diagnostic`](crate::Diagnostic) and skip the node.
    Warn,
    /// Skip the node without telling anyone.
    Allow,
}

/// What to do when two member definitions share an identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DuplicateIdAction {
    Deny,
    /// Keep the first definition and log a warning.
    Warn,
    /// Keep the first definition.
    Allow,
}

/// Whether a `<sectiondef>` may hold both `<memberdef>` and `<member>` children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SectionExclusivity {
    Enforce,
    Permissive,
}

#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub unknown_nodes: UnknownNodeAction,
    pub duplicate_ids: DuplicateIdAction,
    pub section_members: SectionExclusivity,
    /// Name of the index document inside the input directory.
    pub index_document: String,
    /// Name of the configuration dump inside the input directory.
    pub configuration_document: String,
    pub allow_dtd: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            unknown_nodes: UnknownNodeAction::Warn,
            duplicate_ids: DuplicateIdAction::Deny,
            section_members: SectionExclusivity::Enforce,
            index_document: "index.xml".into(),
            configuration_document: "Doxyfile.xml".into(),
            allow_dtd: false,
        }
    }
}

impl ParseOptions {
    /// File name of the document describing the compound `refid`.
    pub fn compound_document(&self, refid: &str) -> String {
        format!("{refid}.xml")
    }

    pub(crate) fn xml_options(&self) -> roxmltree::ParsingOptions {
        roxmltree::ParsingOptions {
            allow_dtd: self.allow_dtd,
            ..Default::default()
        }
    }
}
