// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pentagonal elements (`P`).
//!
//! A marked pentagon is refined in three steps: [`MarkPentagonEdges`] marks
//! its sides, [`SplitEdge`](crate::SplitEdge) halves each of them, and
//! [`BreakPentagon`] fans the split pentagon into five quads.
use meshgram_core::{Hypergraph, Production};

use crate::support::{
    build, element_key, fan_into_quads, hyperedge, keep_edges, nodes_of, polygon, split_polygon,
    split_ring_keys,
};

/// Name of [`MarkPentagonEdges`].
pub const MARK_PENTAGON_EDGES: &str = "pentagon/mark-edges";
/// Name of [`BreakPentagon`].
pub const BREAK_PENTAGON: &str = "pentagon/break";

/// Marks the five sides of a marked pentagon (`P` r=1, every `E` r=0).
///
/// The `P` hyperedge is re-created unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkPentagonEdges;

impl Production for MarkPentagonEdges {
    fn name(&self) -> &str {
        MARK_PENTAGON_EDGES
    }

    fn left_side(&self) -> Hypergraph {
        build(MARK_PENTAGON_EDGES, |g| polygon(g, 5, "P", 1, 0))
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(MARK_PENTAGON_EDGES, |out| {
            out.add_hyperedge(hyperedge(matched, &element_key("P", 5))?.clone(), false)?;
            for e in matched.hyperedges().filter(|e| e.tag() == "E") {
                out.add_hyperedge(e.clone().with_r(1), false)?;
            }
            Ok(())
        })
    }
}

/// Replaces a marked pentagon whose sides are all split by five quads.
///
/// ```text
///   corners n1..n5, midpoints n6..n10 (n6 between n1 and n2, ...)
///   adds centre c, E(mid, c) for every midpoint, and
///   Q(corner, next mid, c, previous mid) for every corner
/// ```
///
/// The outer halves are kept, the `P` hyperedge is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakPentagon;

impl Production for BreakPentagon {
    fn name(&self) -> &str {
        BREAK_PENTAGON
    }

    fn left_side(&self) -> Hypergraph {
        build(BREAK_PENTAGON, |g| split_polygon(g, 5, "P", 1))
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(BREAK_PENTAGON, |out| {
            keep_edges(matched, out)?;
            let element = hyperedge(matched, &element_key("P", 5))?;
            let ring = nodes_of(matched, &split_ring_keys(5))?;
            fan_into_quads(element, &ring, out)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_pattern_has_ten_halves() {
        let g = BreakPentagon.left_side();
        assert_eq!(g.counts().regular, 10);
        assert_eq!(g.hyperedges().filter(|e| e.tag() == "E").count(), 10);
        assert!(g.hyperedges().all(|e| e.tag() != "E" || e.r == 0));
    }

    #[test]
    fn mark_pattern_requires_a_marked_pentagon() {
        let g = MarkPentagonEdges.left_side();
        assert_eq!(g.get_hyperedge("P_n1_n2_n3_n4_n5").map(|e| e.r), Some(1));
    }
}
