// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quadrilateral marking.
use meshgram_core::{Hypergraph, Production};

use crate::support::{build, element_key, hyperedge, keep_edges, polygon};

/// Name of [`MarkQuad`].
pub const MARK_QUAD: &str = "quad/mark";

/// Marks an unprocessed quad for refinement.
///
/// ```text
/// n4 ---E--- n3         n4 ---E--- n3
/// |          |          |          |
/// E   Q r=0  E   ==>    E   Q r=1  E
/// |          |          |          |
/// n1 ---E--- n2         n1 ---E--- n2
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkQuad;

impl Production for MarkQuad {
    fn name(&self) -> &str {
        MARK_QUAD
    }

    fn left_side(&self) -> Hypergraph {
        build(MARK_QUAD, |g| polygon(g, 4, "Q", 0, 0))
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(MARK_QUAD, |out| {
            keep_edges(matched, out)?;
            let quad = hyperedge(matched, &element_key("Q", 4))?;
            out.add_hyperedge(quad.clone().with_r(1), false)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_side_is_a_square_with_its_element() {
        let g = MarkQuad.left_side();
        assert_eq!(g.counts().regular, 4);
        assert_eq!(g.counts().hyper, 5);
        let q = g.get_hyperedge("Q_n1_n2_n3_n4").unwrap();
        assert_eq!(q.r, 0);
        assert_eq!(g.neighbors("n1").count(), 3);
    }
}
