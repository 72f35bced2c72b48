// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hypergraph record types: vertices and hyperedges.
use std::collections::BTreeSet;
use std::hash::{Hash as StdHash, Hasher as StdHasher};

use crate::graph::GraphError;
use crate::ident::hyperedge_label;

/// A vertex of the mesh.
///
/// Identity is the `label` alone: two nodes with equal labels compare equal
/// regardless of coordinates or flags.
///
/// Invariants
/// - `hyperedge_ref` is set only on surrogate vertices materialised by the
///   [`Hypergraph`](crate::Hypergraph); nodes built through [`Node::new`]
///   never carry it.
#[derive(Clone, Debug)]
pub struct Node {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Globally unique identity key.
    pub label: String,
    /// Marks a non-conforming vertex (introduced mid-edge of one element only).
    pub hanging: bool,
    pub(crate) hyperedge_ref: Option<String>,
}

impl Node {
    /// Creates a regular, non-hanging node.
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            hanging: false,
            hyperedge_ref: None,
        }
    }

    /// Returns the node with its hanging flag replaced.
    pub fn with_hanging(mut self, hanging: bool) -> Self {
        self.hanging = hanging;
        self
    }

    /// Builds the surrogate vertex standing in for the hyperedge stored under `key`.
    pub(crate) fn surrogate_for(edge: &HyperEdge, key: &str) -> Self {
        let (x, y) = edge.centroid();
        Self {
            x,
            y,
            label: edge.label(),
            hanging: false,
            hyperedge_ref: Some(key.to_owned()),
        }
    }

    /// Table key of the hyperedge this surrogate represents, if any.
    pub fn hyperedge_ref(&self) -> Option<&str> {
        self.hyperedge_ref.as_deref()
    }

    /// True when this vertex is a hyperedge surrogate.
    pub fn is_surrogate(&self) -> bool {
        self.hyperedge_ref.is_some()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Node {}

impl StdHash for Node {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

/// Fixed-shape bag of the optional per-hyperedge attributes productions use.
///
/// Fields are `None` until a production sets them; accessors supply the
/// documented default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAttrs {
    /// Whether the hyperedge lies on the domain boundary (`b` flag).
    pub boundary: Option<bool>,
}

impl EdgeAttrs {
    /// Boundary flag, `false` when unset.
    pub fn boundary(&self) -> bool {
        self.boundary.unwrap_or(false)
    }
}

/// A typed relation over two or more nodes.
///
/// Equality and hashing use the tag plus the *unordered* member set, while
/// [`HyperEdge::label`] is order-sensitive. Two equal hyperedges may therefore
/// be stored under different labels; the store keys by label and keeps both.
#[derive(Clone, Debug)]
pub struct HyperEdge {
    nodes: Vec<Node>,
    tag: String,
    /// Processing mark, `0` or `1`.
    pub r: u8,
    /// Optional attributes carried through rewriting.
    pub attrs: EdgeAttrs,
}

impl HyperEdge {
    /// Creates a hyperedge with `r == 0` and default attributes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArity`] when fewer than two nodes are given.
    pub fn new(nodes: impl IntoIterator<Item = Node>, tag: impl Into<String>) -> Result<Self, GraphError> {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        let tag = tag.into();
        if nodes.len() < 2 {
            return Err(GraphError::InvalidArity {
                tag,
                arity: nodes.len(),
            });
        }
        Ok(Self {
            nodes,
            tag,
            r: 0,
            attrs: EdgeAttrs::default(),
        })
    }

    /// Returns the hyperedge with its `r` flag replaced.
    pub fn with_r(mut self, r: u8) -> Self {
        self.r = r;
        self
    }

    /// Returns the hyperedge with its attribute record replaced.
    pub fn with_attrs(mut self, attrs: EdgeAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Returns the hyperedge with the boundary flag set.
    pub fn with_boundary(mut self, boundary: bool) -> Self {
        self.attrs.boundary = Some(boundary);
        self
    }

    /// Member nodes in construction order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Discriminator tag (`E`, `Q`, ...).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Member labels in construction order.
    pub fn member_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// Order-sensitive storage label, see [`hyperedge_label`].
    pub fn label(&self) -> String {
        hyperedge_label(&self.tag, self.member_labels())
    }

    /// Arithmetic mean of the member coordinates.
    pub fn centroid(&self) -> (f64, f64) {
        let n = self.nodes.len() as f64;
        let (sx, sy) = self
            .nodes
            .iter()
            .fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
        (sx / n, sy / n)
    }

    fn member_set(&self) -> BTreeSet<&str> {
        self.member_labels().collect()
    }
}

impl PartialEq for HyperEdge {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.member_set() == other.member_set()
    }
}

impl Eq for HyperEdge {}

impl StdHash for HyperEdge {
    fn hash<H: StdHasher>(&self, state: &mut H) {
        self.tag.hash(state);
        for label in self.member_set() {
            label.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn n(label: &str) -> Node {
        Node::new(0.0, 0.0, label)
    }

    #[test]
    fn arity_below_two_is_rejected() {
        let err = HyperEdge::new([n("a")], "E").unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidArity {
                tag: "E".into(),
                arity: 1
            }
        );
        assert!(HyperEdge::new(Vec::<Node>::new(), "E").is_err());
    }

    #[test]
    fn node_identity_is_label_only() {
        let a = Node::new(1.0, 2.0, "a");
        let b = Node::new(9.0, 9.0, "a").with_hanging(true);
        assert_eq!(a, b);
        assert_ne!(a, Node::new(1.0, 2.0, "b"));
    }

    #[test]
    fn equal_hyperedges_can_carry_different_labels() {
        let ab = HyperEdge::new([n("a"), n("b")], "E").unwrap();
        let ba = HyperEdge::new([n("b"), n("a")], "E").unwrap();
        assert_eq!(ab, ba);
        assert_ne!(ab.label(), ba.label());

        let mut set = FxHashSet::default();
        set.insert(ab);
        assert!(!set.insert(ba));
    }

    #[test]
    fn tag_participates_in_equality() {
        let e = HyperEdge::new([n("a"), n("b")], "E").unwrap();
        let q = HyperEdge::new([n("a"), n("b")], "Q").unwrap();
        assert_ne!(e, q);
    }

    #[test]
    fn centroid_is_member_mean() {
        let e = HyperEdge::new(
            [
                Node::new(0.0, 0.0, "a"),
                Node::new(2.0, 0.0, "b"),
                Node::new(2.0, 2.0, "c"),
                Node::new(0.0, 2.0, "d"),
            ],
            "Q",
        )
        .unwrap();
        assert_eq!(e.centroid(), (1.0, 1.0));
    }

    #[test]
    fn boundary_defaults_to_false() {
        let e = HyperEdge::new([n("a"), n("b")], "E").unwrap();
        assert_eq!(e.attrs.boundary, None);
        assert!(!e.attrs.boundary());
        assert!(e.with_boundary(true).attrs.boundary());
    }
}
