// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical state digest.
//!
//! Determinism contract
//! - The digest is BLAKE3 over a canonical byte stream covering every regular
//!   node and every hyperedge of the hypergraph.
//! - Nodes are visited in ascending key order, then hyperedges in ascending
//!   key order. Insertion order never affects the result.
//! - Strings are prefixed by their 8-byte little-endian length. Coordinates
//!   are encoded as the little-endian bits of the `f64`.
//! - Surrogates are not hashed: they are derived from their hyperedge.
use blake3::Hasher;

use crate::graph::Hypergraph;
use crate::ident::Hash;
use crate::record::{HyperEdge, Node};

/// Computes the canonical digest of `graph`.
///
/// Algorithm
/// 1) Update with the node count (8-byte LE), then for each node in
///    ascending key order: key, x bits, y bits, hanging byte.
/// 2) Update with the hyperedge count (8-byte LE), then for each hyperedge in
///    ascending key order: key, tag, `r`, boundary byte (`0` unset, `1` false,
///    `2` true), member count and member labels in construction order.
pub fn state_hash(graph: &Hypergraph) -> Hash {
    let mut nodes: Vec<(&str, &Node)> = graph.node_entries().collect();
    nodes.sort_unstable_by(|a, b| a.0.cmp(b.0));
    let mut edges: Vec<(&str, &HyperEdge)> = graph.hyperedge_entries().collect();
    edges.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut hasher = Hasher::new();
    hasher.update(&(nodes.len() as u64).to_le_bytes());
    for (key, node) in nodes {
        update_str(&mut hasher, key);
        hasher.update(&node.x.to_bits().to_le_bytes());
        hasher.update(&node.y.to_bits().to_le_bytes());
        hasher.update(&[u8::from(node.hanging)]);
    }

    hasher.update(&(edges.len() as u64).to_le_bytes());
    for (key, edge) in edges {
        update_str(&mut hasher, key);
        update_str(&mut hasher, edge.tag());
        hasher.update(&[edge.r]);
        let boundary = match edge.attrs.boundary {
            None => 0u8,
            Some(false) => 1,
            Some(true) => 2,
        };
        hasher.update(&[boundary]);
        hasher.update(&(edge.nodes().len() as u64).to_le_bytes());
        for member in edge.member_labels() {
            update_str(&mut hasher, member);
        }
    }
    hasher.finalize().into()
}

fn update_str(hasher: &mut Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &Node, b: &Node) -> HyperEdge {
        HyperEdge::new([a.clone(), b.clone()], "E").unwrap()
    }

    #[test]
    fn digest_ignores_insertion_order() {
        let a = Node::new(0.0, 0.0, "a");
        let b = Node::new(1.0, 0.0, "b");
        let c = Node::new(1.0, 1.0, "c");

        let mut g1 = Hypergraph::new();
        g1.add_node(a.clone());
        g1.add_node(b.clone());
        g1.add_node(c.clone());
        g1.add_hyperedge(edge(&a, &b), true).unwrap();
        g1.add_hyperedge(edge(&b, &c), true).unwrap();

        let mut g2 = Hypergraph::new();
        g2.add_node(c.clone());
        g2.add_node(a.clone());
        g2.add_node(b.clone());
        g2.add_hyperedge(edge(&b, &c), true).unwrap();
        g2.add_hyperedge(edge(&a, &b), true).unwrap();

        assert_eq!(state_hash(&g1), state_hash(&g2));
    }

    #[test]
    fn digest_tracks_r_flag() {
        let a = Node::new(0.0, 0.0, "a");
        let b = Node::new(1.0, 0.0, "b");
        let mut g = Hypergraph::new();
        g.add_hyperedge(edge(&a, &b), false).unwrap();
        let before = state_hash(&g);
        g.add_hyperedge(edge(&a, &b).with_r(1), false).unwrap();
        assert_ne!(before, state_hash(&g));
    }
}
