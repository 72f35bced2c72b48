// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mesh refinement productions for the meshgram rewrite engine.
#![forbid(unsafe_code)]
//!
//! Every rule is a unit struct implementing [`Production`]. The full library
//! is handed out by [`all_productions`] as a plain list; there is no global
//! registry.
//!
//! # Modules
//!
//! - [`quad`] - mark quadrilateral elements (`Q`)
//! - [`edge`] - split marked edges (`E`), interior and boundary
//! - [`pentagon`] - mark and break pentagonal elements (`P`)
//! - [`hexagon`] - mark and break hexagonal elements (`S`)
//! - [`heptagon`] - mark heptagonal elements (`T`)
//! - [`mesh`] - host mesh builders for demos, tests and benches
//!
//! Tags used throughout: `E` edge, `Q` quad, `P` pentagon, `S` hexagon,
//! `T` heptagon. An element hyperedge spans the element's corner nodes; its
//! sides are separate `E` hyperedges.

pub mod edge;
pub mod heptagon;
pub mod hexagon;
pub mod mesh;
pub mod pentagon;
pub mod quad;
mod support;

use meshgram_core::Production;

pub use edge::{BreakBoundaryEdge, SplitEdge, BREAK_BOUNDARY_EDGE, SPLIT_EDGE};
pub use heptagon::{MarkHeptagon, MARK_HEPTAGON};
pub use hexagon::{BreakHexagon, MarkHexagon, BREAK_HEXAGON, MARK_HEXAGON};
pub use pentagon::{BreakPentagon, MarkPentagonEdges, BREAK_PENTAGON, MARK_PENTAGON_EDGES};
pub use quad::{MarkQuad, MARK_QUAD};
pub use support::{centre_label, midpoint_label, RuleError};

/// Every production of the library, in refinement order.
pub fn all_productions() -> Vec<Box<dyn Production>> {
    vec![
        Box::new(MarkQuad),
        Box::new(SplitEdge),
        Box::new(BreakBoundaryEdge),
        Box::new(MarkPentagonEdges),
        Box::new(BreakPentagon),
        Box::new(MarkHexagon),
        Box::new(BreakHexagon),
        Box::new(MarkHeptagon),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_names_are_unique() {
        let mut names: Vec<String> = all_productions()
            .iter()
            .map(|p| p.name().to_owned())
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn every_left_side_is_non_empty() {
        for p in all_productions() {
            assert!(!p.left_side().is_empty(), "{} has an empty left side", p.name());
        }
    }
}
