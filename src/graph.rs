//! Include, inheritance and collaboration graphs.

use crate::{
    context::ParseContext,
    element::Element,
    error::Result,
    kinds::GraphRelation,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    pub element_name: String,
    pub nodes: Vec<GraphNode>,
}

impl Graph {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        element.attributes().finish(context)?;
        let mut nodes = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "node" => nodes.push(GraphNode::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            nodes,
        })
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub element_name: String,
    /// Graph-local identifier, not a compound id
    pub id: String,
    pub label: String,
    pub link: Option<GraphLink>,
    pub children: Vec<GraphEdge>,
}

impl GraphNode {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let id = attrs.required("id")?;
        attrs.finish(context)?;

        let mut label = None;
        let mut link = None;
        let mut children = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "label" => label = Some(context.text_only(child)?),
                "link" => link = Some(GraphLink::map_from_xml(context, child)?),
                "childnode" => children.push(GraphEdge::map_from_xml(context, child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            id,
            label: element.require(label, "label")?,
            link,
            children,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
    pub element_name: String,
    pub refid: String,
    pub external: Option<String>,
}

impl GraphLink {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let external = attrs.optional("external")?;
        attrs.finish(context)?;
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            external,
        })
    }
}

/// `<childnode>`: an edge from the enclosing node to the node `refid`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
    pub element_name: String,
    pub refid: String,
    pub relation: GraphRelation,
    pub labels: Vec<String>,
}

impl GraphEdge {
    pub(crate) fn map_from_xml(context: &mut ParseContext, element: Element) -> Result<Self> {
        let mut attrs = element.attributes();
        let refid = attrs.required("refid")?;
        let relation = attrs.required("relation")?;
        attrs.finish(context)?;

        let mut labels = Vec::new();
        for child in context.child_elements(element)? {
            match child.name() {
                "edgelabel" => labels.push(context.text_only(child)?),
                _ => context.unknown_element(element, child)?,
            }
        }
        Ok(Self {
            element_name: element.name().to_string(),
            refid,
            relation,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::map_snippet;

    #[test]
    fn inheritance_graph() {
        let xml = r#"<inheritancegraph>
  <node id="1"><label>Foo</label><link refid="classFoo"/><childnode refid="2" relation="public-inheritance"/></node>
  <node id="2"><label>Base</label><childnode refid="3" relation="usage"><edgelabel>m_a</edgelabel><edgelabel>m_b</edgelabel></childnode></node>
</inheritancegraph>"#;
        let (graph, diagnostics) = map_snippet(xml, Graph::map_from_xml).unwrap();
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(graph.nodes.len(), 2);

        let foo = graph.node("1").unwrap();
        assert_eq!(foo.label, "Foo");
        assert_eq!(foo.link.as_ref().map(|l| l.refid.as_str()), Some("classFoo"));
        assert_eq!(foo.children[0].relation, GraphRelation::PublicInheritance);

        let base = graph.node("2").unwrap();
        assert!(base.link.is_none());
        assert_eq!(base.children[0].labels, vec!["m_a", "m_b"]);
    }

    #[test]
    fn node_requires_label() {
        assert!(map_snippet(r#"<node id="1"/>"#, GraphNode::map_from_xml).is_err());
    }
}
