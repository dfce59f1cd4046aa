//! The corpus-wide cross-reference pass.
//!
//! Compound documents only know about themselves, so member stubs that point into other
//! documents can only be checked once every document is parsed. [`resolve`] builds an index of
//! every member definition in the corpus and backfills the kind of each stub from it.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    compound_def::CompoundDef,
    error::{DoxmlError, Result},
    index::DoxygenIndex,
    kinds::MemberKind,
    options::{DuplicateIdAction, ParseOptions},
};

/// Everything stages 1 and 2 produced: not yet checked against itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RawCorpus {
    pub index: DoxygenIndex,
    /// Compounds in index order
    pub compounds: Vec<CompoundDef>,
    pub document_count: usize,
}

/// A corpus whose member stubs are known to point at definitions. The only way to get one is
/// through [`resolve`].
#[derive(Clone, Debug)]
pub struct ResolvedCorpus {
    raw: RawCorpus,
    definitions: HashMap<String, Definition>,
}

/// Where a member or enumerator is defined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Definition {
    pub kind: MemberKind,
    pub compound: usize,
    pub section: usize,
    pub member: usize,
    /// Position among the member's enumerators, for enum values
    pub enum_value: Option<usize>,
}

impl ResolvedCorpus {
    pub fn index(&self) -> &DoxygenIndex {
        &self.raw.index
    }

    pub fn compounds(&self) -> &[CompoundDef] {
        &self.raw.compounds
    }

    pub fn document_count(&self) -> usize {
        self.raw.document_count
    }

    /// Gives up the resolved guarantee, e.g. to edit the corpus and resolve it again.
    pub fn into_raw(self) -> RawCorpus {
        self.raw
    }

    pub(crate) fn into_parts(self) -> (RawCorpus, HashMap<String, Definition>) {
        (self.raw, self.definitions)
    }
}

/// Runs the cross-reference pass over `raw`.
///
/// Every member stub in a section must name a member defined somewhere in the corpus, and index
/// members with an empty kind must as well; stubs with an empty kind receive the kind of their
/// definition. Resolving an already resolved corpus changes nothing.
pub fn resolve(mut raw: RawCorpus, options: &ParseOptions) -> Result<ResolvedCorpus> {
    let definitions = collect_definitions(&raw.compounds, options.duplicate_ids)?;
    log::debug!(
        "collected {} member definitions from {} compounds",
        definitions.len(),
        raw.compounds.len()
    );
    let filled = backfill(&mut raw, &definitions)?;
    log::debug!("backfilled {filled} member kinds");
    Ok(ResolvedCorpus { raw, definitions })
}

fn collect_definitions(
    compounds: &[CompoundDef],
    duplicates: DuplicateIdAction,
) -> Result<HashMap<String, Definition>> {
    let mut definitions = HashMap::new();
    let mut insert = |id: &str, definition: Definition| -> Result<()> {
        match definitions.entry(id.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(definition);
            }
            Entry::Occupied(entry) => {
                let first = &compounds[entry.get().compound].id;
                let second = &compounds[definition.compound].id;
                match duplicates {
                    DuplicateIdAction::Deny => {
                        return Err(DoxmlError::DuplicateIdentifier {
                            id: id.to_string(),
                            first: first.clone(),
                            second: second.clone(),
                        });
                    }
                    DuplicateIdAction::Warn => log::warn!(
                        "member {id:?} is defined in both {first:?} and {second:?}; keeping the first"
                    ),
                    DuplicateIdAction::Allow => {}
                }
            }
        }
        Ok(())
    };

    for (c, compound) in compounds.iter().enumerate() {
        for (s, section) in compound.sections.iter().enumerate() {
            for (m, member) in section.member_defs.iter().enumerate() {
                let position = Definition {
                    kind: member.kind,
                    compound: c,
                    section: s,
                    member: m,
                    enum_value: None,
                };
                insert(&member.id, position)?;
                for (v, value) in member.enum_values.iter().enumerate() {
                    insert(
                        &value.id,
                        Definition {
                            kind: MemberKind::EnumValue,
                            enum_value: Some(v),
                            ..position
                        },
                    )?;
                }
            }
        }
    }
    Ok(definitions)
}

/// Fills empty stub kinds and returns how many were filled.
fn backfill(raw: &mut RawCorpus, definitions: &HashMap<String, Definition>) -> Result<usize> {
    let mut filled = 0;

    for compound in &mut raw.compounds {
        for section in &mut compound.sections {
            for stub in &mut section.members {
                let definition =
                    definitions
                        .get(&stub.refid)
                        .ok_or_else(|| DoxmlError::DanglingReference {
                            refid: stub.refid.clone(),
                            name: stub.name.clone(),
                            owner: compound.id.clone(),
                        })?;
                if stub.kind.is_none() {
                    log::trace!("{}: {} is a {}", compound.id, stub.refid, definition.kind);
                    stub.kind = Some(definition.kind);
                    filled += 1;
                }
            }
        }
    }

    for compound in &mut raw.index.compounds {
        for member in &mut compound.members {
            if member.kind.is_some() {
                continue;
            }
            let definition =
                definitions
                    .get(&member.refid)
                    .ok_or_else(|| DoxmlError::DanglingReference {
                        refid: member.refid.clone(),
                        name: member.name.clone(),
                        owner: compound.refid.clone(),
                    })?;
            log::trace!("index {}: {} is a {}", compound.refid, member.refid, definition.kind);
            member.kind = Some(definition.kind);
            filled += 1;
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compound_def::DoxygenDocument, test_support::map_snippet};

    const FOO: &str = r#"<doxygen version="1.9.8">
  <compounddef id="classFoo" kind="class">
    <compoundname>Foo</compoundname>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classFoo_1m0" prot="public" static="no">
        <name>bar</name><location file="foo.h"/>
      </memberdef>
      <memberdef kind="enum" id="classFoo_1e" prot="public" static="no">
        <name>E</name>
        <enumvalue id="classFoo_1e0" prot="public"><name>A</name></enumvalue>
        <location file="foo.h"/>
      </memberdef>
    </sectiondef>
  </compounddef>
  <compounddef id="group__g" kind="group">
    <compoundname>g</compoundname>
    <sectiondef kind="func">
      <member refid="classFoo_1m0" kind=""><name>bar</name></member>
      <member refid="classFoo_1e0" kind="enumvalue"><name>A</name></member>
    </sectiondef>
  </compounddef>
</doxygen>"#;

    const INDEX: &str = r#"<doxygenindex version="1.9.8">
  <compound refid="classFoo" kind="class"><name>Foo</name>
    <member refid="classFoo_1m0" kind=""><name>bar</name></member>
  </compound>
</doxygenindex>"#;

    fn corpus(compounds: &str) -> RawCorpus {
        let (document, _) = map_snippet(compounds, DoxygenDocument::map_from_xml).unwrap();
        let (index, _) = map_snippet(INDEX, DoxygenIndex::map_from_xml).unwrap();
        RawCorpus {
            index,
            compounds: document.compounds,
            document_count: 1,
        }
    }

    fn group_stubs(corpus: &ResolvedCorpus) -> Vec<Option<MemberKind>> {
        corpus.compounds()[1].sections[0]
            .members
            .iter()
            .map(|m| m.kind)
            .collect()
    }

    #[test]
    fn backfills_section_and_index_stubs() {
        let resolved = resolve(corpus(FOO), &ParseOptions::default()).unwrap();
        assert_eq!(
            group_stubs(&resolved),
            vec![Some(MemberKind::Function), Some(MemberKind::EnumValue)]
        );
        assert_eq!(
            resolved.index().compounds[0].members[0].kind,
            Some(MemberKind::Function)
        );
    }

    #[test]
    fn resolving_twice_changes_nothing() {
        let options = ParseOptions::default();
        let once = resolve(corpus(FOO), &options).unwrap();
        let mut raw = once.clone().into_raw();

        let definitions = collect_definitions(&raw.compounds, options.duplicate_ids).unwrap();
        assert_eq!(backfill(&mut raw, &definitions).unwrap(), 0);
        assert_eq!(raw, once.clone().into_raw());

        let twice = resolve(raw, &options).unwrap();
        assert_eq!(twice.into_raw(), once.into_raw());
    }

    #[test]
    fn dangling_stub_is_fatal() {
        let broken = FOO.replace(
            r#"<member refid="classFoo_1m0" kind="">"#,
            r#"<member refid="classFoo_1m9" kind="">"#,
        );
        let err = resolve(corpus(&broken), &ParseOptions::default()).unwrap_err();
        match err {
            DoxmlError::DanglingReference { refid, name, owner } => {
                assert_eq!(refid, "classFoo_1m9");
                assert_eq!(name, "bar");
                assert_eq!(owner, "group__g");
            }
            other => panic!("expected dangling reference, got {other:?}"),
        }
    }

    #[test]
    fn dangling_stub_with_a_kind_is_fatal_too() {
        let broken = FOO.replace(
            "classFoo_1e0\" kind=\"enumvalue\"",
            "nowhere\" kind=\"enumvalue\"",
        );
        assert!(matches!(
            resolve(corpus(&broken), &ParseOptions::default()),
            Err(DoxmlError::DanglingReference { .. })
        ));
    }

    fn duplicated() -> RawCorpus {
        let mut raw = corpus(FOO);
        let mut copy = raw.compounds[0].clone();
        copy.id = "classFoo2".into();
        copy.sections[0].member_defs[0].kind = MemberKind::Variable;
        raw.compounds.push(copy);
        raw
    }

    #[test]
    fn duplicate_definitions_are_denied_by_default() {
        let err = resolve(duplicated(), &ParseOptions::default()).unwrap_err();
        match err {
            DoxmlError::DuplicateIdentifier { id, first, second } => {
                assert_eq!(id, "classFoo_1m0");
                assert_eq!(first, "classFoo");
                assert_eq!(second, "classFoo2");
            }
            other => panic!("expected duplicate identifier, got {other:?}"),
        }
    }

    #[test]
    fn first_duplicate_wins_when_allowed() {
        for duplicate_ids in [DuplicateIdAction::Warn, DuplicateIdAction::Allow] {
            let options = ParseOptions {
                duplicate_ids,
                ..Default::default()
            };
            let resolved = resolve(duplicated(), &options).unwrap();
            assert_eq!(group_stubs(&resolved)[0], Some(MemberKind::Function));
        }
    }
}
