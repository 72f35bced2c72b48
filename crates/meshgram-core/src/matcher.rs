// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subgraph isomorphism search over incidence graphs.
//!
//! Both hypergraphs are flattened into an index-addressed incidence graph
//! (regular vertices plus one surrogate per hyperedge). The search is a
//! VF2-style backtracking enumeration:
//!
//! - Pattern vertices are placed in a fixed order: at every step the vertex
//!   with the most links into the already-placed set wins, ties broken by
//!   degree and then by pattern insertion order. Connected patterns are thus
//!   explored along their incidences.
//! - Candidates for a vertex with a placed neighbour come from the host
//!   neighbourhood of that neighbour's image; otherwise every host vertex is
//!   tried.
//! - A candidate is feasible when it is unused, of the same kind (regular or
//!   surrogate), has at least the pattern degree, carries the same `tag` and
//!   `r` for surrogates, and has exactly the incidences into the mapped set
//!   that the pattern vertex has (induced structure).
//!
//! Every complete assignment is collected. Results are sorted by the host
//! labels they select, so the output depends only on the two structures and
//! never on host insertion order.
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::{instrument, trace};

use crate::graph::Hypergraph;

/// One embedding of a pattern into a host: pattern label to host label.
///
/// Pairs are listed in the pattern's incidence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedding {
    map: IndexMap<String, String>,
}

impl Embedding {
    pub(crate) fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Host label assigned to `pattern_label`.
    pub fn host_of(&self, pattern_label: &str) -> Option<&str> {
        self.map.get(pattern_label).map(String::as_str)
    }

    /// `(pattern, host)` label pairs in pattern incidence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.map.iter().map(|(p, h)| (p.as_str(), h.as_str()))
    }

    /// Host labels in pattern incidence order.
    pub fn host_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.values().map(String::as_str)
    }

    /// Number of mapped vertices.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True for the empty embedding.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind<'g> {
    Regular,
    Surrogate { tag: &'g str, r: u8 },
}

impl Kind<'_> {
    fn compatible(self, host: Kind<'_>) -> bool {
        match (self, host) {
            (Kind::Regular, Kind::Regular) => true,
            (Kind::Surrogate { tag: pt, r: pr }, Kind::Surrogate { tag: ht, r: hr }) => {
                pt == ht && pr == hr
            }
            _ => false,
        }
    }
}

/// Index-addressed incidence graph of one hypergraph.
struct IncidenceIndex<'g> {
    labels: Vec<&'g str>,
    kinds: Vec<Kind<'g>>,
    /// Sorted, deduplicated neighbour indices.
    adjacency: Vec<Vec<usize>>,
}

impl<'g> IncidenceIndex<'g> {
    fn new(graph: &'g Hypergraph) -> Self {
        let entries: Vec<_> = graph.vertex_entries().collect();
        let mut position: FxHashMap<&'g str, usize> = FxHashMap::default();
        let mut labels = Vec::with_capacity(entries.len());
        let mut kinds = Vec::with_capacity(entries.len());
        for (i, &(key, edge, _)) in entries.iter().enumerate() {
            position.insert(key, i);
            labels.push(key);
            kinds.push(edge.map_or(Kind::Regular, |e| Kind::Surrogate {
                tag: e.tag(),
                r: e.r,
            }));
        }
        let adjacency = entries
            .iter()
            .map(|&(_, _, incident)| {
                let mut adj: Vec<usize> = incident
                    .iter()
                    .filter_map(|l| position.get(l.as_str()).copied())
                    .collect();
                adj.sort_unstable();
                adj.dedup();
                adj
            })
            .collect();
        Self {
            labels,
            kinds,
            adjacency,
        }
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    fn adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].binary_search(&b).is_ok()
    }
}

/// Placement order of pattern vertices and, per step, an already-placed
/// neighbour to draw host candidates from.
struct Plan {
    order: Vec<usize>,
    anchors: Vec<Option<usize>>,
}

impl Plan {
    fn new(pattern: &IncidenceIndex<'_>) -> Self {
        let n = pattern.len();
        let mut placed = vec![false; n];
        let mut links = vec![0usize; n];
        let mut order = Vec::with_capacity(n);
        let mut anchors = Vec::with_capacity(n);
        while order.len() < n {
            let next = (0..n).filter(|&v| !placed[v]).max_by(|&a, &b| {
                (links[a], pattern.degree(a))
                    .cmp(&(links[b], pattern.degree(b)))
                    .then_with(|| b.cmp(&a))
            });
            let Some(next) = next else { break };
            let anchor = pattern.adjacency[next].iter().copied().find(|&w| placed[w]);
            placed[next] = true;
            for &w in &pattern.adjacency[next] {
                links[w] += 1;
            }
            order.push(next);
            anchors.push(anchor);
        }
        Self { order, anchors }
    }
}

struct State {
    /// Pattern vertex to host vertex.
    core: Vec<Option<usize>>,
    /// Host vertex to pattern vertex.
    inverse: Vec<Option<usize>>,
    found: Vec<Vec<usize>>,
}

struct Search<'a, 'g> {
    pattern: &'a IncidenceIndex<'g>,
    host: &'a IncidenceIndex<'g>,
    plan: &'a Plan,
    every_host_vertex: Vec<usize>,
}

impl Search<'_, '_> {
    fn extend(&self, state: &mut State, depth: usize) {
        let Some(&p) = self.plan.order.get(depth) else {
            if let Some(assignment) = state.core.iter().copied().collect::<Option<Vec<usize>>>() {
                state.found.push(assignment);
            }
            return;
        };
        let anchored = self.plan.anchors[depth].and_then(|a| state.core[a]);
        let candidates: &[usize] = match anchored {
            Some(h) => &self.host.adjacency[h],
            None => &self.every_host_vertex,
        };
        for &h in candidates {
            if !self.feasible(state, p, h) {
                continue;
            }
            state.core[p] = Some(h);
            state.inverse[h] = Some(p);
            self.extend(state, depth + 1);
            state.core[p] = None;
            state.inverse[h] = None;
        }
    }

    fn feasible(&self, state: &State, p: usize, h: usize) -> bool {
        if state.inverse[h].is_some() {
            return false;
        }
        if !self.pattern.kinds[p].compatible(self.host.kinds[h]) {
            return false;
        }
        if self.host.degree(h) < self.pattern.degree(p) {
            return false;
        }
        let mut mapped_links = 0;
        for &q in &self.pattern.adjacency[p] {
            if let Some(hq) = state.core[q] {
                if !self.host.adjacent(h, hq) {
                    return false;
                }
                mapped_links += 1;
            }
        }
        // Induced: no host incidence into the mapped set beyond the pattern's.
        let host_links = self.host.adjacency[h]
            .iter()
            .filter(|&&x| state.inverse[x].is_some())
            .count();
        host_links == mapped_links
    }
}

/// Enumerates every embedding of `pattern` into `host`.
///
/// An embedding is an injective map of incidence-graph vertices that keeps
/// vertex kinds, maps surrogates only onto surrogates with equal `tag` and
/// `r`, and preserves incidences in both directions among the mapped
/// vertices. Regular vertices carry no attribute constraint.
///
/// A pattern without vertices has no embeddings. The result is sorted by the
/// host labels each embedding selects (in pattern incidence order).
#[instrument(level = "trace", skip_all)]
pub fn find_embeddings(pattern: &Hypergraph, host: &Hypergraph) -> Vec<Embedding> {
    let p = IncidenceIndex::new(pattern);
    let h = IncidenceIndex::new(host);
    if p.len() == 0 || p.len() > h.len() {
        return Vec::new();
    }
    let plan = Plan::new(&p);
    let search = Search {
        pattern: &p,
        host: &h,
        plan: &plan,
        every_host_vertex: (0..h.len()).collect(),
    };
    let mut state = State {
        core: vec![None; p.len()],
        inverse: vec![None; h.len()],
        found: Vec::new(),
    };
    search.extend(&mut state, 0);

    let mut found = state.found;
    found.sort_unstable_by(|a, b| {
        a.iter()
            .map(|&i| h.labels[i])
            .cmp(b.iter().map(|&i| h.labels[i]))
    });
    trace!(
        pattern_vertices = p.len(),
        host_vertices = h.len(),
        embeddings = found.len(),
        "subgraph search finished"
    );
    found
        .into_iter()
        .map(|assignment| {
            Embedding::from_pairs(
                assignment
                    .iter()
                    .enumerate()
                    .map(|(pi, &hi)| (p.labels[pi].to_owned(), h.labels[hi].to_owned())),
            )
        })
        .collect()
}
