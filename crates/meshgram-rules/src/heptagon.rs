// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Heptagonal elements (`T`).
use meshgram_core::{hyperedge_label, HyperEdge, Hypergraph, Production};

use crate::support::{build, hyperedge, keep_edges, key, ring_edges, ring_of};

/// Name of [`MarkHeptagon`].
pub const MARK_HEPTAGON: &str = "heptagon/mark";

/// Corner left out of the `T` hyperedge.
const SKIPPED: usize = 4;

fn element_key() -> String {
    let keys: Vec<String> = (0..7).filter(|&i| i != SKIPPED).map(key).collect();
    hyperedge_label("T", keys.iter().map(String::as_str))
}

/// Marks an unprocessed heptagon.
///
/// Seven nodes in a ring of `E`, with a `T` r=0 spanning six of them (all but
/// `n5`). The `T` hyperedge is re-created with r=1.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkHeptagon;

impl Production for MarkHeptagon {
    fn name(&self) -> &str {
        MARK_HEPTAGON
    }

    fn left_side(&self) -> Hypergraph {
        build(MARK_HEPTAGON, |g| {
            let ring = ring_of(7);
            ring_edges(g, &ring, 0)?;
            let members = ring
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != SKIPPED)
                .map(|(_, n)| n.clone());
            g.add_hyperedge(HyperEdge::new(members, "T")?, true)?;
            Ok(())
        })
    }

    fn right_side(&self, matched: &Hypergraph, _application_index: usize) -> Hypergraph {
        build(MARK_HEPTAGON, |out| {
            keep_edges(matched, out)?;
            let t = hyperedge(matched, &element_key())?;
            out.add_hyperedge(t.clone().with_r(1), false)?;
            Ok(())
        })
    }
}
