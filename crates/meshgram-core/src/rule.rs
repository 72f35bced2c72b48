// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rewrite rule contract.
use crate::graph::Hypergraph;

/// A graph-grammar production: a left-side pattern plus a right-side generator.
///
/// Productions are stateless descriptors. Concrete rule libraries implement
/// this trait and hand the engine an explicit list of instances; the core
/// keeps no registry.
///
/// The engine calls [`left_side`](Production::left_side) once per `apply` and
/// [`right_side`](Production::right_side) once per successful application.
pub trait Production {
    /// Human-readable name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Pattern to search for. Labels in this graph form the "pattern label
    /// space" the matched sub-hypergraph is keyed by.
    fn left_side(&self) -> Hypergraph;

    /// Builds the replacement for one match.
    ///
    /// `matched` is keyed by pattern labels and holds the host's nodes and
    /// hyperedges (host labels, coordinates and attributes intact).
    /// `application_index` counts successful applications within the current
    /// `apply` call, starting at 0.
    ///
    /// The returned graph lists every hyperedge that should exist in place of
    /// the matched ones, plus any new nodes. Hyperedges may reference host
    /// nodes that are not themselves added to the replacement.
    fn right_side(&self, matched: &Hypergraph, application_index: usize) -> Hypergraph;

    /// Extra acceptance check on a matched sub-hypergraph, for constraints the
    /// matcher's tag/`r` comparison cannot express. Accepts everything by
    /// default.
    fn accepts(&self, _matched: &Hypergraph) -> bool {
        true
    }
}
