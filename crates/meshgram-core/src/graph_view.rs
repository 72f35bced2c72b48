// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only view over a [`Hypergraph`] for rendering collaborators.
//!
//! [`HypergraphView`] exposes plain records (coordinates, flags, tags, member
//! labels) and nothing that can reach a `&mut Hypergraph`. Renderers and
//! inspectors take a view instead of the store itself.
//!
//! **DO NOT** add `Deref<Target = Hypergraph>`, `as_inner()`, or any method
//! handing out the underlying store to this type.

use crate::graph::{Hypergraph, VertexCounts};

/// Plain record describing a regular vertex.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeView<'a> {
    /// Node label.
    pub label: &'a str,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Hanging flag.
    pub hanging: bool,
}

/// Plain record describing a hyperedge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EdgeView<'a> {
    /// Storage label.
    pub label: &'a str,
    /// Discriminator tag.
    pub tag: &'a str,
    /// Processing mark.
    pub r: u8,
    /// Boundary flag (defaulted).
    pub boundary: bool,
    /// Member labels in construction order.
    pub members: Vec<&'a str>,
}

/// Read-only view over a [`Hypergraph`].
#[derive(Debug, Clone, Copy)]
pub struct HypergraphView<'a> {
    graph: &'a Hypergraph,
}

impl<'a> HypergraphView<'a> {
    /// Creates a view over `graph`.
    pub fn new(graph: &'a Hypergraph) -> Self {
        Self { graph }
    }

    /// Regular vertices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'a>> + 'a {
        self.graph.node_entries().map(|(label, n)| NodeView {
            label,
            x: n.x,
            y: n.y,
            hanging: n.hanging,
        })
    }

    /// Hyperedges in insertion order.
    pub fn hyperedges(&self) -> impl Iterator<Item = EdgeView<'a>> + 'a {
        self.graph.hyperedge_entries().map(|(label, e)| EdgeView {
            label,
            tag: e.tag(),
            r: e.r,
            boundary: e.attrs.boundary(),
            members: e.member_labels().collect(),
        })
    }

    /// Node and hyperedge totals.
    pub fn counts(&self) -> VertexCounts {
        self.graph.counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{HyperEdge, Node};

    #[test]
    fn view_reports_nodes_and_hyperedges() {
        let mut g = Hypergraph::new();
        let a = Node::new(0.0, 0.0, "a");
        let b = Node::new(4.0, 2.0, "b").with_hanging(true);
        g.add_node(a.clone());
        g.add_node(b.clone());
        g.add_hyperedge(
            HyperEdge::new([a, b], "E")
                .unwrap()
                .with_r(1)
                .with_boundary(true),
            true,
        )
        .unwrap();

        let view = g.view();
        let nodes: Vec<NodeView<'_>> = view.nodes().collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(
            nodes[1],
            NodeView {
                label: "b",
                x: 4.0,
                y: 2.0,
                hanging: true
            }
        );
        let edges: Vec<EdgeView<'_>> = view.hyperedges().collect();
        assert_eq!(
            edges,
            vec![EdgeView {
                label: "E_a_b",
                tag: "E",
                r: 1,
                boundary: true,
                members: vec!["a", "b"],
            }]
        );
        assert_eq!(view.counts().hyper, 1);
    }
}
