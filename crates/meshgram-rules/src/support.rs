// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared builders for left and right sides.
use std::f64::consts::TAU;

use meshgram_core::{hyperedge_label, GraphError, HyperEdge, Hypergraph, Node};
use thiserror::Error;
use tracing::error;

/// Failure while assembling one side of a production.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The core rejected a hyperedge.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The matched region lacks a vertex the rule expects.
    #[error("matched region has no vertex `{0}`")]
    MissingVertex(String),
}

/// Runs `fill` on an empty hypergraph.
///
/// Production methods are infallible, so a failure is logged and an empty
/// graph returned in its place.
pub(crate) fn build<F>(production: &str, fill: F) -> Hypergraph
where
    F: FnOnce(&mut Hypergraph) -> Result<(), RuleError>,
{
    let mut graph = Hypergraph::new();
    match fill(&mut graph) {
        Ok(()) => graph,
        Err(err) => {
            error!(production, error = %err, "failed to assemble production side");
            Hypergraph::new()
        }
    }
}

/// Pattern label of the `i`-th node (`n1`, `n2`, ...).
pub(crate) fn key(i: usize) -> String {
    format!("n{}", i + 1)
}

/// Pattern label of an `E` hyperedge between two pattern nodes.
pub(crate) fn edge_key(a: &str, b: &str) -> String {
    hyperedge_label("E", [a, b])
}

/// Pattern label of an element hyperedge over corners `n1..n{corners}`.
pub(crate) fn element_key(tag: &str, corners: usize) -> String {
    let keys: Vec<String> = (0..corners).map(key).collect();
    hyperedge_label(tag, keys.iter().map(String::as_str))
}

/// Host nodes matched to `keys`, in order.
pub(crate) fn nodes_of(matched: &Hypergraph, keys: &[String]) -> Result<Vec<Node>, RuleError> {
    keys.iter().map(|k| node(matched, k).cloned()).collect()
}

/// Host node matched to pattern node `key`.
pub(crate) fn node<'a>(matched: &'a Hypergraph, key: &str) -> Result<&'a Node, RuleError> {
    matched
        .get_node(key)
        .ok_or_else(|| RuleError::MissingVertex(key.to_owned()))
}

/// Host hyperedge matched to pattern hyperedge `key`.
pub(crate) fn hyperedge<'a>(matched: &'a Hypergraph, key: &str) -> Result<&'a HyperEdge, RuleError> {
    matched
        .get_hyperedge(key)
        .ok_or_else(|| RuleError::MissingVertex(key.to_owned()))
}

/// Copies every matched `E` hyperedge into `out` unchanged.
pub(crate) fn keep_edges(matched: &Hypergraph, out: &mut Hypergraph) -> Result<(), RuleError> {
    for e in matched.hyperedges().filter(|e| e.tag() == "E") {
        out.add_hyperedge(e.clone(), false)?;
    }
    Ok(())
}

/// Node `label` at position `i` of `count` evenly spaced on the unit circle.
fn on_circle(i: usize, count: usize, label: String) -> Node {
    let angle = TAU * i as f64 / count as f64;
    Node::new(angle.cos(), angle.sin(), label)
}

/// `count` pattern nodes `n1..` evenly spaced on the unit circle.
pub(crate) fn ring_of(count: usize) -> Vec<Node> {
    (0..count).map(|i| on_circle(i, count, key(i))).collect()
}

/// Closed ring of `E` hyperedges over `nodes`, each with processing mark `r`.
pub(crate) fn ring_edges(g: &mut Hypergraph, nodes: &[Node], r: u8) -> Result<(), RuleError> {
    for n in nodes {
        g.add_node(n.clone());
    }
    for (i, a) in nodes.iter().enumerate() {
        let b = &nodes[(i + 1) % nodes.len()];
        g.add_hyperedge(HyperEdge::new([a.clone(), b.clone()], "E")?.with_r(r), true)?;
    }
    Ok(())
}

/// Polygon pattern: `sides` corners joined by `E` (mark `edge_r`) and one
/// element hyperedge `tag` (mark `element_r`) over all corners.
pub(crate) fn polygon(
    g: &mut Hypergraph,
    sides: usize,
    tag: &str,
    element_r: u8,
    edge_r: u8,
) -> Result<(), RuleError> {
    let corners = ring_of(sides);
    ring_edges(g, &corners, edge_r)?;
    g.add_hyperedge(HyperEdge::new(corners, tag)?.with_r(element_r), true)?;
    Ok(())
}

/// Polygon pattern whose sides are already split.
///
/// Ring order alternates corner, midpoint: `n1` .. `n{sides}` are corners and
/// `n{sides + i + 1}` sits between corner `i` and corner `i + 1`. The element
/// hyperedge `tag` spans the corners only.
pub(crate) fn split_polygon(g: &mut Hypergraph, sides: usize, tag: &str, element_r: u8) -> Result<(), RuleError> {
    let ring: Vec<Node> = split_ring_keys(sides)
        .into_iter()
        .enumerate()
        .map(|(i, label)| on_circle(i, 2 * sides, label))
        .collect();
    ring_edges(g, &ring, 0)?;
    let corners: Vec<Node> = ring.iter().step_by(2).cloned().collect();
    g.add_hyperedge(HyperEdge::new(corners, tag)?.with_r(element_r), true)?;
    Ok(())
}

/// Pattern labels of a split polygon in ring order (corner, midpoint, ...).
pub(crate) fn split_ring_keys(sides: usize) -> Vec<String> {
    (0..2 * sides)
        .map(|i| if i % 2 == 0 { key(i / 2) } else { key(sides + i / 2) })
        .collect()
}

/// Label of the node inserted halfway along the edge `a`–`b`.
///
/// Independent of member order, so both sides of a shared edge agree on it.
pub fn midpoint_label(a: &str, b: &str) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("mid({lo}|{hi})")
}

/// Label of the node inserted at the centre of an element hyperedge.
pub fn centre_label(element: &HyperEdge) -> String {
    format!("c({})", element.label())
}

/// Node halfway between `a` and `b`.
pub(crate) fn midpoint(a: &Node, b: &Node) -> Node {
    Node::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, midpoint_label(&a.label, &b.label))
}

/// Breaks a split element into quads around a new centre node.
///
/// `ring` is the matched boundary in corner, midpoint order. Adds an inner
/// `E` (interior) from the centre to every midpoint and one `Q` per corner
/// spanning corner, next midpoint, centre, previous midpoint.
pub(crate) fn fan_into_quads(element: &HyperEdge, ring: &[Node], out: &mut Hypergraph) -> Result<(), RuleError> {
    let (cx, cy) = element.centroid();
    let centre = Node::new(cx, cy, centre_label(element));
    out.add_node(centre.clone());

    let sides = ring.len() / 2;
    for i in 0..sides {
        let corner = &ring[2 * i];
        let next_mid = &ring[2 * i + 1];
        let prev_mid = &ring[(2 * i + ring.len() - 1) % ring.len()];
        out.add_hyperedge(
            HyperEdge::new([next_mid.clone(), centre.clone()], "E")?.with_boundary(false),
            false,
        )?;
        out.add_hyperedge(
            HyperEdge::new(
                [corner.clone(), next_mid.clone(), centre.clone(), prev_mid.clone()],
                "Q",
            )?
            .with_boundary(false),
            false,
        )?;
    }
    Ok(())
}
