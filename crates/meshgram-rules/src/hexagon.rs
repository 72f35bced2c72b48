// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hexagonal elements (`S`).
use meshgram_core::{Hypergraph, Production};

use crate::support::{
    build, element_key, fan_into_quads, hyperedge, keep_edges, nodes_of, polygon, split_polygon,
    split_ring_keys,
};

/// Name of [`MarkHexagon`].
pub const MARK_HEXAGON: &str = "hexagon/mark";
/// Name of [`BreakHexagon`].
pub const BREAK_HEXAGON: &str = "hexagon/break";

/// Marks an unprocessed hexagon (`S` r=0 to r=1).
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkHexagon;

impl Production for MarkHexagon {
    fn name(&self) -> &str {
        MARK_HEXAGON
    }

    fn left_side(&self) -> Hypergraph {
        build(MARK_HEXAGON, |g| polygon(g, 6, "S", 0, 0))
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(MARK_HEXAGON, |out| {
            keep_edges(matched, out)?;
            let hexagon = hyperedge(matched, &element_key("S", 6))?;
            out.add_hyperedge(hexagon.clone().with_r(1), false)?;
            Ok(())
        })
    }
}

/// Replaces a marked hexagon whose six sides are split by six quads around
/// a centre node.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakHexagon;

impl Production for BreakHexagon {
    fn name(&self) -> &str {
        BREAK_HEXAGON
    }

    fn left_side(&self) -> Hypergraph {
        build(BREAK_HEXAGON, |g| split_polygon(g, 6, "S", 1))
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(BREAK_HEXAGON, |out| {
            keep_edges(matched, out)?;
            let element = hyperedge(matched, &element_key("S", 6))?;
            let ring = nodes_of(matched, &split_ring_keys(6))?;
            fan_into_quads(element, &ring, out)
        })
    }
}
