//! Runs the whole job and holds its result.
//!
//! Parsing happens in four stages:
//!
//! 1. the index document, which names every compound;
//! 2. one document per compound, in index order;
//! 3. the cross-reference pass ([`resolve`]);
//! 4. the configuration dump.
//!
//! Any structural error aborts the run. Forward-compatibility gaps are collected into
//! [`Corpus::warnings()`].

use std::{collections::HashMap, path::Path};

use crate::{
    compound_def::{CompoundDef, DoxygenDocument},
    context::{Diagnostic, ParseContext},
    doxyfile::Doxyfile,
    element::Element,
    error::{DoxmlError, Result},
    index::DoxygenIndex,
    kinds::MemberKind,
    member_def::{EnumValue, MemberDef},
    options::ParseOptions,
    resolver::{resolve, Definition, RawCorpus, ResolvedCorpus},
    source::{DirectorySource, DocumentSource},
};

/// A fully parsed and resolved set of documents. Read-only.
#[derive(Clone, Debug)]
pub struct Corpus {
    index: DoxygenIndex,
    compounds: Vec<CompoundDef>,
    configuration: Doxyfile,
    document_count: usize,
    warnings: Vec<Diagnostic>,
    compound_ids: HashMap<String, usize>,
    definitions: HashMap<String, Definition>,
}

impl Corpus {
    pub(crate) fn new(
        resolved: ResolvedCorpus,
        configuration: Doxyfile,
        configuration_documents: usize,
        warnings: Vec<Diagnostic>,
    ) -> Self {
        let (raw, definitions) = resolved.into_parts();
        let compound_ids = raw
            .compounds
            .iter()
            .enumerate()
            .map(|(i, compound)| (compound.id.clone(), i))
            .collect();
        Self {
            index: raw.index,
            compounds: raw.compounds,
            configuration,
            document_count: raw.document_count + configuration_documents,
            warnings,
            compound_ids,
            definitions,
        }
    }

    pub fn index(&self) -> &DoxygenIndex {
        &self.index
    }

    /// Compounds in index order; documents holding several compounds keep their own order.
    pub fn compounds(&self) -> &[CompoundDef] {
        &self.compounds
    }

    pub fn compound(&self, id: &str) -> Option<&CompoundDef> {
        self.compound_ids.get(id).map(|&i| &self.compounds[i])
    }

    pub fn member_definition(&self, id: &str) -> Option<&MemberDef> {
        let definition = self.definitions.get(id)?;
        if definition.enum_value.is_some() {
            return None;
        }
        Some(self.member_at(definition))
    }

    pub fn enum_value(&self, id: &str) -> Option<&EnumValue> {
        let definition = self.definitions.get(id)?;
        let member = self.member_at(definition);
        member.enum_values.get(definition.enum_value?)
    }

    /// Kind of the member or enumerator `id`.
    pub fn member_kind(&self, id: &str) -> Option<MemberKind> {
        self.definitions.get(id).map(|definition| definition.kind)
    }

    pub fn configuration(&self) -> &Doxyfile {
        &self.configuration
    }

    /// Number of documents read, including the index and the configuration dump.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    fn member_at(&self, definition: &Definition) -> &MemberDef {
        &self.compounds[definition.compound].sections[definition.section].member_defs
            [definition.member]
    }
}

/// Parses every document of a Doxygen XML output directory.
pub fn parse_directory(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Corpus> {
    parse_corpus(&DirectorySource::new(path.as_ref()), options)
}

/// Parses a corpus read from `source`.
pub fn parse_corpus<S: DocumentSource + ?Sized>(
    source: &S,
    options: &ParseOptions,
) -> Result<Corpus> {
    let mut warnings = Vec::new();

    log::debug!("parsing index {:?}", options.index_document);
    let index = parse_document(
        source,
        &options.index_document,
        options,
        &mut warnings,
        DoxygenIndex::map_from_xml,
    )?;

    log::debug!("parsing {} compound documents", index.compounds.len());
    let raw = parse_compounds(source, index, options, &mut warnings)?;

    log::debug!("resolving cross references");
    let resolved = resolve(raw, options)?;

    log::debug!("parsing configuration {:?}", options.configuration_document);
    let configuration = parse_document(
        source,
        &options.configuration_document,
        options,
        &mut warnings,
        Doxyfile::map_from_xml,
    )?;

    if !warnings.is_empty() {
        log::warn!("{} unknown nodes were skipped", warnings.len());
    }
    Ok(Corpus::new(resolved, configuration, 1, warnings))
}

/// Stage 2: every compound document named by the index, in index order.
pub(crate) fn parse_compounds<S: DocumentSource + ?Sized>(
    source: &S,
    index: DoxygenIndex,
    options: &ParseOptions,
    warnings: &mut Vec<Diagnostic>,
) -> Result<RawCorpus> {
    let mut compounds = Vec::new();
    // The index counts as one
    let mut document_count = 1;
    for entry in &index.compounds {
        let name = options.compound_document(&entry.refid);
        log::debug!("parsing {name}");
        let document = parse_document(
            source,
            &name,
            options,
            warnings,
            DoxygenDocument::map_from_xml,
        )?;
        document_count += 1;

        if !document.compounds.iter().any(|c| c.id == entry.refid) {
            return Err(DoxmlError::UndefinedCompound {
                id: entry.refid.clone(),
                document: name,
            });
        }
        compounds.extend(document.compounds);
    }
    Ok(RawCorpus {
        index,
        compounds,
        document_count,
    })
}

/// Reads, parses and maps one document, collecting its warnings.
fn parse_document<S, T>(
    source: &S,
    name: &str,
    options: &ParseOptions,
    warnings: &mut Vec<Diagnostic>,
    map: impl FnOnce(&mut ParseContext, Element) -> Result<T>,
) -> Result<T>
where
    S: DocumentSource + ?Sized,
{
    let text = source
        .read_document(name)
        .map_err(|source| DoxmlError::Source {
            name: name.to_string(),
            source,
        })?;
    let document = roxmltree::Document::parse_with_options(&text, options.xml_options())
        .map_err(|source| DoxmlError::Xml {
            name: name.to_string(),
            source,
        })?;

    let mut context = ParseContext::new(options, name);
    let value = map(&mut context, Element::root(&document)).map_err(|e| e.in_document(name))?;
    warnings.extend(context.into_diagnostics());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        options::UnknownNodeAction,
        source::{MemorySource, SourceError},
    };

    const INDEX: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygenindex version="1.9.8" xml:lang="en-US">
  <compound refid="classFoo" kind="class"><name>Foo</name>
    <member refid="classFoo_1m0" kind=""><name>bar</name></member>
  </compound>
  <compound refid="foo_8h" kind="file"><name>foo.h</name>
    <member refid="foo_8h_1v" kind="variable"><name>counter</name></member>
  </compound>
</doxygenindex>"#;

    const CLASS_FOO: &str = r#"<doxygen version="1.9.8">
  <compounddef id="classFoo" kind="class" language="C++" prot="public">
    <compoundname>Foo</compoundname>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classFoo_1m0" prot="public" static="no">
        <type>void</type><name>bar</name><location file="foo.h" line="4"/>
      </memberdef>
    </sectiondef>
    <location file="foo.h" line="2"/>
  </compounddef>
</doxygen>"#;

    const FOO_H: &str = r#"<doxygen version="1.9.8">
  <compounddef id="foo_8h" kind="file" language="C++">
    <compoundname>foo.h</compoundname>
    <innerclass refid="classFoo" prot="public">Foo</innerclass>
    <sectiondef kind="var">
      <memberdef kind="variable" id="foo_8h_1v" prot="public" static="no">
        <type>int</type><name>counter</name><location file="foo.h" line="8"/>
      </memberdef>
    </sectiondef>
    <sectiondef kind="user-defined">
      <member refid="classFoo_1m0" kind=""><name>bar</name></member>
    </sectiondef>
  </compounddef>
</doxygen>"#;

    const DOXYFILE: &str = r#"<doxyfile version="1.9.8">
  <option id='PROJECT_NAME' default='no' type='string'><value>Demo</value></option>
</doxyfile>"#;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_document("index.xml", INDEX)
            .with_document("classFoo.xml", CLASS_FOO)
            .with_document("foo_8h.xml", FOO_H)
            .with_document("Doxyfile.xml", DOXYFILE)
    }

    #[test]
    fn four_stages() {
        let corpus = parse_corpus(&source(), &ParseOptions::default()).unwrap();
        assert!(corpus.warnings().is_empty(), "{:?}", corpus.warnings());
        assert_eq!(corpus.document_count(), 4);

        let ids: Vec<_> = corpus.compounds().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["classFoo", "foo_8h"]);

        let file = corpus.compound("foo_8h").unwrap();
        assert_eq!(file.sections[1].members[0].kind, Some(MemberKind::Function));
        assert_eq!(
            corpus.index().compounds[0].members[0].kind,
            Some(MemberKind::Function)
        );

        let bar = corpus.member_definition("classFoo_1m0").unwrap();
        assert_eq!(bar.name.as_deref(), Some("bar"));
        assert_eq!(corpus.member_kind("foo_8h_1v"), Some(MemberKind::Variable));
        assert!(corpus.member_definition("nothing").is_none());
        assert!(corpus.enum_value("classFoo_1m0").is_none());

        assert_eq!(
            corpus.configuration().get("PROJECT_NAME").and_then(|v| v.as_str()),
            Some("Demo")
        );
    }

    #[test]
    fn missing_index_is_fatal() {
        let err = parse_corpus(&MemorySource::new(), &ParseOptions::default()).unwrap_err();
        match err {
            DoxmlError::Source { name, source } => {
                assert_eq!(name, "index.xml");
                assert!(matches!(source, SourceError::NotFound));
            }
            other => panic!("expected source error, got {other:?}"),
        }
    }

    /// Serves the index but fails every other document.
    struct FailingSource(MemorySource);

    impl DocumentSource for FailingSource {
        fn read_document(&self, name: &str) -> std::result::Result<String, SourceError> {
            if name == "index.xml" {
                self.0.read_document(name)
            } else {
                Err(SourceError::UnspecifiedLoad("backend offline".into()))
            }
        }
    }

    #[test]
    fn custom_source_failures_are_fatal() {
        let err = parse_corpus(&FailingSource(source()), &ParseOptions::default()).unwrap_err();
        match err {
            DoxmlError::Source { name, source } => {
                assert_eq!(name, "classFoo.xml");
                assert!(matches!(source, SourceError::UnspecifiedLoad(_)));
            }
            other => panic!("expected source error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_compound_document_is_fatal() {
        let mut source = source();
        source.insert("foo_8h.xml", "<doxygen version=\"1\"><compounddef");
        let err = parse_corpus(&source, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, DoxmlError::Xml { name, .. } if name == "foo_8h.xml"));
    }

    #[test]
    fn document_must_define_its_compound() {
        let source = source().with_document("foo_8h.xml", CLASS_FOO);
        let err = parse_corpus(&source, &ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            DoxmlError::UndefinedCompound { ref id, .. } if id == "foo_8h"
        ));
    }

    #[test]
    fn structural_errors_name_the_document() {
        let broken = CLASS_FOO.replace(r#"<location file="foo.h" line="4"/>"#, "");
        let source = source().with_document("classFoo.xml", broken);
        let err = parse_corpus(&source, &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("classFoo.xml: "), "{err}");
        assert!(matches!(
            err,
            DoxmlError::InDocument { ref source, .. }
                if matches!(**source, DoxmlError::MissingChild { child: "location", .. })
        ));
    }

    #[test]
    fn unknown_nodes_become_warnings_or_errors() {
        let future = CLASS_FOO.replace("<compoundname>", "<hologram/><compoundname>");
        let source = source().with_document("classFoo.xml", future);

        let corpus = parse_corpus(&source, &ParseOptions::default()).unwrap();
        assert_eq!(corpus.warnings().len(), 1);
        assert_eq!(corpus.warnings()[0].document, "classFoo.xml");

        let strict = ParseOptions {
            unknown_nodes: UnknownNodeAction::Deny,
            ..Default::default()
        };
        assert!(parse_corpus(&source, &strict).is_err());
    }

    #[test]
    fn dangling_stub_aborts_before_configuration() {
        let dangling = FOO_H.replace(
            r#"<member refid="classFoo_1m0""#,
            r#"<member refid="classFoo_1m7""#,
        );
        let mut source = source().with_document("foo_8h.xml", dangling);
        source.insert("Doxyfile.xml", "not xml");
        let err = parse_corpus(&source, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, DoxmlError::DanglingReference { .. }));
    }
}
