// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host mesh builders.
//!
//! Labels are prefixed so several meshes can be merged into one host without
//! collisions.
use std::f64::consts::TAU;

use meshgram_core::{HyperEdge, Hypergraph, Node};

use crate::support::RuleError;

/// Single polygonal element: `sides` corners on a unit circle around
/// `origin`, a ring of boundary `E` hyperedges, and one element hyperedge
/// `tag` with mark `element_r` over every corner.
///
/// Corners are labelled `{prefix}0`, `{prefix}1`, ...
pub fn polygon_element(
    prefix: &str,
    sides: usize,
    tag: &str,
    element_r: u8,
    origin: (f64, f64),
) -> Result<Hypergraph, RuleError> {
    let mut g = Hypergraph::new();
    let corners: Vec<Node> = (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            Node::new(origin.0 + angle.cos(), origin.1 + angle.sin(), format!("{prefix}{i}"))
        })
        .collect();
    for c in &corners {
        g.add_node(c.clone());
    }
    for (i, a) in corners.iter().enumerate() {
        let b = &corners[(i + 1) % sides];
        g.add_hyperedge(
            HyperEdge::new([a.clone(), b.clone()], "E")?.with_boundary(true),
            true,
        )?;
    }
    g.add_hyperedge(HyperEdge::new(corners, tag)?.with_r(element_r), true)?;
    Ok(g)
}

/// Structured grid of `width` x `height` unit quads.
///
/// Nodes are `{prefix}{col}_{row}`. Every cell carries a `Q` r=0 over its
/// corners in counter-clockwise order; `E` hyperedges on the outline are
/// flagged as boundary, inner ones as interior.
pub fn quad_grid(prefix: &str, width: usize, height: usize) -> Result<Hypergraph, RuleError> {
    let mut g = Hypergraph::new();
    let label = |c: usize, r: usize| format!("{prefix}{c}_{r}");
    for r in 0..=height {
        for c in 0..=width {
            g.add_node(Node::new(c as f64, r as f64, label(c, r)));
        }
    }
    let at = |g: &Hypergraph, c: usize, r: usize| {
        let l = label(c, r);
        g.get_node(&l).cloned().ok_or(RuleError::MissingVertex(l))
    };
    for r in 0..=height {
        for c in 0..=width {
            if c < width {
                let boundary = r == 0 || r == height;
                let e = HyperEdge::new([at(&g, c, r)?, at(&g, c + 1, r)?], "E")?;
                g.add_hyperedge(e.with_boundary(boundary), true)?;
            }
            if r < height {
                let boundary = c == 0 || c == width;
                let e = HyperEdge::new([at(&g, c, r)?, at(&g, c, r + 1)?], "E")?;
                g.add_hyperedge(e.with_boundary(boundary), true)?;
            }
        }
    }
    for r in 0..height {
        for c in 0..width {
            let corners = [
                at(&g, c, r)?,
                at(&g, c + 1, r)?,
                at(&g, c + 1, r + 1)?,
                at(&g, c, r + 1)?,
            ];
            g.add_hyperedge(HyperEdge::new(corners, "Q")?.with_boundary(false), true)?;
        }
    }
    Ok(g)
}

/// Copies every node, then every hyperedge, of `other` into `target`.
pub fn merge(target: &mut Hypergraph, other: &Hypergraph) -> Result<(), RuleError> {
    for n in other.nodes() {
        target.add_node(n.clone());
    }
    for e in other.hyperedges() {
        target.add_hyperedge(e.clone(), true)?;
    }
    Ok(())
}
