// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Structured events emitted by the rewrite loop. The core never installs a
// subscriber; embedders decide where these go.

use tracing::{debug, info, warn};

use crate::engine_impl::Halt;
use crate::graph::Hypergraph;
use crate::ident::short_hash;
use crate::snapshot::state_hash;

/// One successful application.
pub(crate) fn applied(production: &str, index: usize, removed: usize, inserted: usize) {
    debug!(production, index, removed, inserted, "production applied");
}

/// A structural match was turned down by the production's acceptance check.
pub(crate) fn rejected(production: &str, candidate: usize) {
    debug!(production, candidate, "match rejected by acceptance predicate");
}

/// The selected match referenced a label no longer present in the host.
pub(crate) fn stale(production: &str, label: &str) {
    warn!(production, label, "stale match, stopping");
}

/// The configured application cap was hit.
pub(crate) fn limit_reached(production: &str, cap: usize) {
    warn!(production, cap, "application cap reached, stopping");
}

/// End of an `apply` call. The state digest is only computed when the event
/// is enabled.
pub(crate) fn summary(production: &str, applications: usize, halt: Halt, graph: &Hypergraph) {
    if tracing::enabled!(tracing::Level::INFO) {
        let counts = graph.counts();
        info!(
            production,
            applications,
            halt = ?halt,
            nodes = counts.regular,
            hyperedges = counts.hyper,
            state = %short_hash(&state_hash(graph)),
            "apply finished"
        );
    }
}
