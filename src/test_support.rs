use crate::{
    context::{Diagnostic, ParseContext},
    element::Element,
    error::Result,
    options::ParseOptions,
};

/// Maps the root element of `xml` with `map` using default options.
pub(crate) fn map_snippet<T>(
    xml: &str,
    map: impl FnOnce(&mut ParseContext, Element) -> Result<T>,
) -> Result<(T, Vec<Diagnostic>)> {
    map_snippet_with(xml, &ParseOptions::default(), map)
}

pub(crate) fn map_snippet_with<T>(
    xml: &str,
    options: &ParseOptions,
    map: impl FnOnce(&mut ParseContext, Element) -> Result<T>,
) -> Result<(T, Vec<Diagnostic>)> {
    let document = roxmltree::Document::parse(xml).expect("test snippet must be well-formed");
    let mut context = ParseContext::new(options, "snippet.xml");
    let value = map(&mut context, Element::root(&document))?;
    Ok((value, context.into_diagnostics()))
}
