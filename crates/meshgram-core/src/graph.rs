// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory hypergraph store with its incidence-graph view.
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use crate::graph_view::HypergraphView;
use crate::record::{HyperEdge, Node};

/// Errors raised while assembling a hypergraph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A hyperedge was built with fewer than two members.
    #[error("hyperedge `{tag}` needs at least 2 nodes, got {arity}")]
    InvalidArity {
        /// Tag of the rejected hyperedge.
        tag: String,
        /// Number of members supplied.
        arity: usize,
    },
    /// A validated insert referenced a node missing from the store.
    #[error("node `{0}` does not exist in the hypergraph")]
    UnknownNode(String),
}

/// Node and hyperedge totals, as reported by [`Hypergraph::counts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexCounts {
    /// Regular vertices.
    pub regular: usize,
    /// Hyperedges (one surrogate vertex each).
    pub hyper: usize,
}

/// One vertex of the incidence graph.
///
/// Regular vertices only record incidences; their data lives in
/// `Hypergraph::nodes`. Surrogates also own the materialised centroid node.
#[derive(Debug, Clone, Default)]
pub(crate) struct Vertex {
    pub(crate) surrogate: Option<Node>,
    pub(crate) incident: IndexSet<String>,
}

/// Hypergraph owning regular nodes, hyperedges, and the incidence view.
///
/// Every table is insertion-ordered; removal preserves the relative order of
/// the remaining entries. The incidence graph has one vertex per regular node
/// and one surrogate per hyperedge, linked only surrogate-to-member.
///
/// Labels share one namespace across nodes and hyperedges. Entries are keyed
/// by label, except in matched sub-hypergraphs built by the rewrite engine,
/// which are keyed by the *pattern* label while holding host records.
#[derive(Debug, Clone, Default)]
pub struct Hypergraph {
    nodes: IndexMap<String, Node>,
    hyperedges: IndexMap<String, HyperEdge>,
    vertices: IndexMap<String, Vertex>,
}

impl Hypergraph {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a regular node.
    ///
    /// A surrogate passed in is demoted to a regular node (its hyperedge
    /// reference is cleared).
    pub fn add_node(&mut self, mut node: Node) {
        node.hyperedge_ref = None;
        self.insert_node_keyed(node.label.clone(), node);
    }

    /// Inserts a hyperedge and materialises its surrogate vertex.
    ///
    /// With `validate_members`, every member must already be a regular node of
    /// this hypergraph. Without it, missing members are registered on the fly;
    /// productions use this to assemble right sides over host nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] for the first missing member when
    /// `validate_members` is set. Nothing is inserted in that case.
    pub fn add_hyperedge(&mut self, edge: HyperEdge, validate_members: bool) -> Result<(), GraphError> {
        if validate_members {
            if let Some(missing) = edge.member_labels().find(|l| !self.nodes.contains_key(*l)) {
                return Err(GraphError::UnknownNode(missing.to_owned()));
            }
        }
        self.insert_hyperedge_unchecked(edge);
        Ok(())
    }

    /// Removes the node or hyperedge stored under `label` with its incidences.
    ///
    /// Removing a hyperedge leaves its members in place. Removing a node
    /// leaves hyperedges that list it untouched apart from the dropped
    /// incidence. No-op when the label is absent.
    pub fn remove(&mut self, label: &str) {
        self.nodes.shift_remove(label);
        self.hyperedges.shift_remove(label);
        if let Some(vertex) = self.vertices.shift_remove(label) {
            for other in &vertex.incident {
                if let Some(v) = self.vertices.get_mut(other) {
                    v.incident.shift_remove(label);
                }
            }
        }
    }

    /// Returns the regular node stored under `label`.
    pub fn get_node(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    /// Returns the hyperedge stored under `label`.
    pub fn get_hyperedge(&self, label: &str) -> Option<&HyperEdge> {
        self.hyperedges.get(label)
    }

    /// Returns the surrogate vertex of the hyperedge stored under `label`.
    pub fn surrogate(&self, label: &str) -> Option<&Node> {
        self.vertices.get(label)?.surrogate.as_ref()
    }

    /// True when `label` names a vertex (node or hyperedge surrogate).
    pub fn contains(&self, label: &str) -> bool {
        self.vertices.contains_key(label)
    }

    /// Regular nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Hyperedges in insertion order.
    pub fn hyperedges(&self) -> impl Iterator<Item = &HyperEdge> + '_ {
        self.hyperedges.values()
    }

    /// Regular and surrogate vertices in incidence-graph insertion order.
    pub fn all_vertices_in_incidence_order(&self) -> impl Iterator<Item = &Node> + '_ {
        self.vertices
            .iter()
            .filter_map(|(key, v)| v.surrogate.as_ref().or_else(|| self.nodes.get(key)))
    }

    /// Labels of the vertices incident to `label`.
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = &str> + '_ {
        self.vertices
            .get(label)
            .into_iter()
            .flat_map(|v| v.incident.iter().map(String::as_str))
    }

    /// Node and hyperedge totals.
    pub fn counts(&self) -> VertexCounts {
        VertexCounts {
            regular: self.nodes.len(),
            hyper: self.hyperedges.len(),
        }
    }

    /// True when the hypergraph has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Read-only view for rendering and inspection.
    pub fn view(&self) -> HypergraphView<'_> {
        HypergraphView::new(self)
    }
}

// Crate-internal plumbing for the matcher and the rewrite engine.
impl Hypergraph {
    /// Inserts a hyperedge, registering absent members instead of rejecting them.
    pub(crate) fn insert_hyperedge_unchecked(&mut self, edge: HyperEdge) {
        let key = edge.label();
        let members: Vec<Node> = edge.nodes().to_vec();
        // Surrogate first, then any fresh members, so incidence order follows
        // construction order.
        self.insert_hyperedge_keyed(key.clone(), edge);
        for member in members {
            let label = member.label.clone();
            if !self.nodes.contains_key(&label) {
                self.add_node(member);
            }
            self.link(&key, &label);
        }
    }

    /// Stores `node` under `key`, which may differ from its label.
    pub(crate) fn insert_node_keyed(&mut self, key: String, node: Node) {
        self.vertices.entry(key.clone()).or_default();
        self.nodes.insert(key, node);
    }

    /// Stores `edge` and a fresh surrogate under `key`, dropping incidences of
    /// any previous entry with the same key.
    pub(crate) fn insert_hyperedge_keyed(&mut self, key: String, edge: HyperEdge) {
        if self.hyperedges.contains_key(&key) {
            self.unlink_all(&key);
        }
        let surrogate = Node::surrogate_for(&edge, &key);
        self.vertices.entry(key.clone()).or_default().surrogate = Some(surrogate);
        self.hyperedges.insert(key, edge);
    }

    /// Records an incidence between two existing vertices.
    pub(crate) fn link(&mut self, a: &str, b: &str) {
        if !self.vertices.contains_key(a) || !self.vertices.contains_key(b) {
            return;
        }
        if let Some(v) = self.vertices.get_mut(a) {
            v.incident.insert(b.to_owned());
        }
        if let Some(v) = self.vertices.get_mut(b) {
            v.incident.insert(a.to_owned());
        }
    }

    fn unlink_all(&mut self, key: &str) {
        let incident = match self.vertices.get_mut(key) {
            Some(v) => std::mem::take(&mut v.incident),
            None => return,
        };
        for other in &incident {
            if let Some(v) = self.vertices.get_mut(other) {
                v.incident.shift_remove(key);
            }
        }
    }

    /// Vertex keys with their hyperedge (for surrogates) and incidences.
    pub(crate) fn vertex_entries(
        &self,
    ) -> impl Iterator<Item = (&str, Option<&HyperEdge>, &IndexSet<String>)> + '_ {
        self.vertices
            .iter()
            .map(|(key, v)| (key.as_str(), self.hyperedges.get(key), &v.incident))
    }

    /// Hyperedge table keys in insertion order.
    pub(crate) fn hyperedge_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.hyperedges.keys().map(String::as_str)
    }

    /// Node table entries (key, node) in insertion order.
    pub(crate) fn node_entries(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.nodes.iter().map(|(k, n)| (k.as_str(), n))
    }

    /// Hyperedge table entries (key, edge) in insertion order.
    pub(crate) fn hyperedge_entries(&self) -> impl Iterator<Item = (&str, &HyperEdge)> + '_ {
        self.hyperedges.iter().map(|(k, e)| (k.as_str(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Hypergraph {
        let mut g = Hypergraph::new();
        let n = [
            Node::new(0.0, 0.0, "n1"),
            Node::new(2.0, 0.0, "n2"),
            Node::new(2.0, 2.0, "n3"),
            Node::new(0.0, 2.0, "n4"),
        ];
        for node in &n {
            g.add_node(node.clone());
        }
        for i in 0..4 {
            let e = HyperEdge::new([n[i].clone(), n[(i + 1) % 4].clone()], "E").unwrap();
            g.add_hyperedge(e, true).unwrap();
        }
        g.add_hyperedge(HyperEdge::new(n.clone(), "Q").unwrap(), true)
            .unwrap();
        g
    }

    #[test]
    fn counts_track_nodes_and_hyperedges() {
        let g = square();
        assert_eq!(
            g.counts(),
            VertexCounts {
                regular: 4,
                hyper: 5
            }
        );
        assert_eq!(g.all_vertices_in_incidence_order().count(), 9);
    }

    #[test]
    fn surrogate_sits_at_centroid_and_links_members() {
        let g = square();
        let s = g.surrogate("Q_n1_n2_n3_n4").unwrap();
        assert_eq!((s.x, s.y), (1.0, 1.0));
        assert_eq!(s.label, "Q_n1_n2_n3_n4");
        assert_eq!(s.hyperedge_ref(), Some("Q_n1_n2_n3_n4"));
        let mut members: Vec<&str> = g.neighbors("Q_n1_n2_n3_n4").collect();
        members.sort_unstable();
        assert_eq!(members, ["n1", "n2", "n3", "n4"]);
        // No regular-to-regular incidences.
        assert!(g.neighbors("n1").all(|l| g.get_hyperedge(l).is_some()));
        assert!(g.nodes().all(|n| !n.is_surrogate()));
    }

    #[test]
    fn validated_insert_rejects_unknown_member() {
        let mut g = Hypergraph::new();
        g.add_node(Node::new(0.0, 0.0, "a"));
        let e = HyperEdge::new([Node::new(0.0, 0.0, "a"), Node::new(1.0, 0.0, "b")], "E").unwrap();
        let err = g.add_hyperedge(e.clone(), true).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode("b".into()));
        assert_eq!(g.counts().hyper, 0);
        assert!(!g.contains("E_a_b"));

        g.add_hyperedge(e, false).unwrap();
        assert_eq!(g.counts(), VertexCounts { regular: 2, hyper: 1 });
        assert_eq!(g.get_node("b").map(|n| n.x), Some(1.0));
    }

    #[test]
    fn remove_hyperedge_keeps_members() {
        let mut g = square();
        g.remove("Q_n1_n2_n3_n4");
        assert_eq!(g.counts(), VertexCounts { regular: 4, hyper: 4 });
        assert!(g.surrogate("Q_n1_n2_n3_n4").is_none());
        assert!(g.neighbors("n1").all(|l| l != "Q_n1_n2_n3_n4"));
        assert_eq!(g.neighbors("n1").count(), 2);
    }

    #[test]
    fn remove_absent_label_is_noop() {
        let mut g = square();
        g.remove("nope");
        assert_eq!(g.counts(), VertexCounts { regular: 4, hyper: 5 });
    }

    #[test]
    fn equal_but_differently_labelled_hyperedges_coexist() {
        let mut g = Hypergraph::new();
        let a = Node::new(0.0, 0.0, "a");
        let b = Node::new(1.0, 0.0, "b");
        let ab = HyperEdge::new([a.clone(), b.clone()], "E").unwrap();
        let ba = HyperEdge::new([b, a], "E").unwrap();
        assert_eq!(ab, ba);
        g.add_hyperedge(ab, false).unwrap();
        g.add_hyperedge(ba, false).unwrap();
        assert_eq!(g.counts().hyper, 2);
        assert_eq!(g.neighbors("a").count(), 2);
    }

    #[test]
    fn reinserting_same_label_replaces_in_place() {
        let mut g = square();
        let q = g.get_hyperedge("Q_n1_n2_n3_n4").cloned().unwrap().with_r(1);
        g.add_hyperedge(q, true).unwrap();
        assert_eq!(g.counts().hyper, 5);
        assert_eq!(g.get_hyperedge("Q_n1_n2_n3_n4").map(|e| e.r), Some(1));
        assert_eq!(g.neighbors("Q_n1_n2_n3_n4").count(), 4);
        assert_eq!(g.neighbors("n1").count(), 3);
    }

    #[test]
    fn surrogates_cannot_be_smuggled_in_as_nodes() {
        let g = square();
        let s = g.surrogate("E_n1_n2").cloned().unwrap();
        let mut h = Hypergraph::new();
        h.add_node(s);
        assert!(h.get_node("E_n1_n2").is_some_and(|n| !n.is_surrogate()));
        assert_eq!(h.counts().hyper, 0);
    }
}
