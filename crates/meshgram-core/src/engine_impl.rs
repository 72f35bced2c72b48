// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Production application loop.
use tracing::instrument;

use crate::config::EngineConfig;
use crate::graph::Hypergraph;
use crate::matcher::{find_embeddings, Embedding};
use crate::rule::Production;
use crate::telemetry;

/// Why an `apply` call stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// No (accepted) match remains. The normal way to finish.
    Exhausted,
    /// The selected match referenced a host label that no longer exists.
    StaleMatch,
    /// [`EngineConfig::max_applications`] was reached.
    Limit,
}

/// Outcome of [`RewriteEngine::apply_with_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of successful applications.
    pub applications: usize,
    /// Reason the loop stopped.
    pub halt: Halt,
}

/// Raised while materialising a match whose host label has vanished.
///
/// Never leaves this module: the loop turns it into [`Halt::StaleMatch`].
#[derive(Debug)]
struct StaleMatch {
    label: String,
}

enum Step {
    Applied,
    NoMatch,
}

/// Drives a [`Production`] over a [`Hypergraph`] until no match remains.
///
/// Each iteration:
/// 1. enumerates every embedding of the left side into the current host;
/// 2. walks them in matcher order, materialises each as a sub-hypergraph
///    keyed by pattern labels and, when configured, asks
///    [`Production::accepts`]; the first accepted one is selected;
/// 3. asks the production for the replacement;
/// 4. deletes every host hyperedge the left side matched (nodes are kept);
/// 5. inserts replacement nodes that are not yet present, then every
///    replacement hyperedge without member validation.
///
/// The loop is single-threaded and synchronous. It stops only when nothing
/// matches, on a stale match, or at the configured cap; a production whose
/// right side keeps re-creating a match runs forever without a cap.
#[derive(Debug, Clone, Default)]
pub struct RewriteEngine {
    config: EngineConfig,
}

impl RewriteEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Applies `production` until exhaustion and returns the application count.
    pub fn apply(&self, graph: &mut Hypergraph, production: &dyn Production) -> usize {
        self.apply_with_report(graph, production).applications
    }

    /// Like [`apply`](Self::apply), also reporting why the loop stopped.
    #[instrument(level = "debug", skip_all, fields(production = production.name()))]
    pub fn apply_with_report(&self, graph: &mut Hypergraph, production: &dyn Production) -> ApplyReport {
        let name = production.name();
        let left = production.left_side();
        let mut applications = 0;
        let halt = loop {
            if let Some(cap) = self.config.max_applications {
                if applications >= cap {
                    telemetry::limit_reached(name, cap);
                    break Halt::Limit;
                }
            }
            match self.step(graph, production, &left, applications) {
                Ok(Step::Applied) => applications += 1,
                Ok(Step::NoMatch) => break Halt::Exhausted,
                Err(stale) => {
                    telemetry::stale(name, &stale.label);
                    break Halt::StaleMatch;
                }
            }
        };
        telemetry::summary(name, applications, halt, graph);
        ApplyReport { applications, halt }
    }

    fn step(
        &self,
        graph: &mut Hypergraph,
        production: &dyn Production,
        left: &Hypergraph,
        index: usize,
    ) -> Result<Step, StaleMatch> {
        let embeddings = find_embeddings(left, graph);
        let mut selected = None;
        for (candidate, embedding) in embeddings.iter().enumerate() {
            let matched = materialize(left, graph, embedding)?;
            if self.config.consult_acceptance && !production.accepts(&matched) {
                telemetry::rejected(production.name(), candidate);
                continue;
            }
            selected = Some((embedding, matched));
            break;
        }
        let Some((embedding, matched)) = selected else {
            return Ok(Step::NoMatch);
        };

        let replacement = production.right_side(&matched, index);

        let mut removed = 0;
        for key in left.hyperedge_keys() {
            if let Some(host_label) = embedding.host_of(key) {
                graph.remove(host_label);
                removed += 1;
            }
        }
        for node in replacement.nodes() {
            if graph.get_node(&node.label).is_none() {
                graph.add_node(node.clone());
            }
        }
        let mut inserted = 0;
        for edge in replacement.hyperedges() {
            graph.insert_hyperedge_unchecked(edge.clone());
            inserted += 1;
        }
        telemetry::applied(production.name(), index, removed, inserted);
        Ok(Step::Applied)
    }
}

/// Copies the matched host region into a standalone hypergraph keyed by
/// pattern labels, with the pattern's incidences.
fn materialize(
    pattern: &Hypergraph,
    host: &Hypergraph,
    embedding: &Embedding,
) -> Result<Hypergraph, StaleMatch> {
    let stale = |label: &str| StaleMatch {
        label: label.to_owned(),
    };
    let mut matched = Hypergraph::new();
    for (key, edge, _) in pattern.vertex_entries() {
        let host_label = embedding.host_of(key).ok_or_else(|| stale(key))?;
        if edge.is_some() {
            let host_edge = host.get_hyperedge(host_label).ok_or_else(|| stale(host_label))?;
            matched.insert_hyperedge_keyed(key.to_owned(), host_edge.clone());
        } else {
            let host_node = host.get_node(host_label).ok_or_else(|| stale(host_label))?;
            matched.insert_node_keyed(key.to_owned(), host_node.clone());
        }
    }
    for key in pattern.hyperedge_keys() {
        for member in pattern.neighbors(key) {
            matched.link(key, member);
        }
    }
    Ok(matched)
}

/// Applies `production` to `graph` with the default engine configuration.
pub fn apply(graph: &mut Hypergraph, production: &dyn Production) -> usize {
    RewriteEngine::default().apply(graph, production)
}

impl Hypergraph {
    /// Applies `production` with the default engine configuration and returns
    /// the number of applications.
    pub fn apply(&mut self, production: &dyn Production) -> usize {
        apply(self, production)
    }
}
