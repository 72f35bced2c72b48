// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Edge splitting.
//!
//! Both productions replace a marked `E` (r=1) over `n1`, `n2` with two
//! unmarked halves meeting at a new midpoint node. The halves inherit the
//! split edge's attributes. The midpoint label is derived from the endpoint
//! labels (see [`midpoint_label`](crate::midpoint_label)), so a second split
//! of the same pair lands on the same node.
use meshgram_core::{HyperEdge, Hypergraph, Node, Production};

use crate::support::{build, edge_key, hyperedge, midpoint, node, RuleError};

/// Name of [`SplitEdge`].
pub const SPLIT_EDGE: &str = "edge/split";
/// Name of [`BreakBoundaryEdge`].
pub const BREAK_BOUNDARY_EDGE: &str = "edge/break-boundary";

fn marked_edge(name: &str) -> Hypergraph {
    build(name, |g| {
        let n1 = Node::new(0.0, 0.0, "n1");
        let n2 = Node::new(1.0, 0.0, "n2");
        g.add_node(n1.clone());
        g.add_node(n2.clone());
        g.add_hyperedge(HyperEdge::new([n1, n2], "E")?.with_r(1), true)?;
        Ok(())
    })
}

fn split(matched: &Hypergraph, out: &mut Hypergraph, hanging: impl Fn(&HyperEdge) -> bool) -> Result<(), RuleError> {
    let edge = hyperedge(matched, &edge_key("n1", "n2"))?;
    let a = node(matched, "n1")?;
    let b = node(matched, "n2")?;
    let mid = midpoint(a, b).with_hanging(hanging(edge));
    out.add_node(mid.clone());
    let half = |p: &Node, q: &Node| {
        HyperEdge::new([p.clone(), q.clone()], "E").map(|e| e.with_attrs(edge.attrs))
    };
    out.add_hyperedge(half(a, &mid)?, false)?;
    out.add_hyperedge(half(&mid, b)?, false)?;
    Ok(())
}

fn is_boundary(matched: &Hypergraph) -> bool {
    matched
        .get_hyperedge(&edge_key("n1", "n2"))
        .is_some_and(|e| e.attrs.boundary())
}

/// Splits any marked edge in half.
///
/// The midpoint is hanging unless the edge lies on the boundary: an interior
/// edge is shared with a neighbouring element that has not been split yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitEdge;

impl Production for SplitEdge {
    fn name(&self) -> &str {
        SPLIT_EDGE
    }

    fn left_side(&self) -> Hypergraph {
        marked_edge(SPLIT_EDGE)
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(SPLIT_EDGE, |out| split(matched, out, |e| !e.attrs.boundary()))
    }
}

/// Splits a marked boundary edge. Interior edges are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakBoundaryEdge;

impl Production for BreakBoundaryEdge {
    fn name(&self) -> &str {
        BREAK_BOUNDARY_EDGE
    }

    fn left_side(&self) -> Hypergraph {
        marked_edge(BREAK_BOUNDARY_EDGE)
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(BREAK_BOUNDARY_EDGE, |out| split(matched, out, |_| false))
    }

    fn accepts(&self, matched: &Hypergraph) -> bool {
        is_boundary(matched)
    }
}
