// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! meshgram-core: hypergraph rewriting engine for graph-grammar mesh refinement.
//!
//! A mesh is stored as a [`Hypergraph`]: regular [`Node`]s carry coordinates,
//! [`HyperEdge`]s relate two or more of them under a `tag`. Every hyperedge is
//! mirrored by a surrogate vertex so the structure can be searched as a plain
//! incidence graph. [`find_embeddings`] enumerates every match of a pattern,
//! and [`RewriteEngine`] drives a [`Production`] through the
//! match, select, replace loop until nothing matches.
//!
//! Termination is a property of the production, not of the engine: a rule
//! whose right side re-creates a match of its left side loops forever unless
//! the caller sets [`EngineConfig::max_applications`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod config;
mod engine_impl;
mod graph;
mod graph_view;
mod ident;
mod matcher;
mod record;
mod rule;
mod snapshot;
mod telemetry;

// Re-exports for stable public API
/// Engine configuration (application cap, acceptance policy).
pub use config::EngineConfig;
/// Production application loop.
pub use engine_impl::{apply, ApplyReport, Halt, RewriteEngine};
/// Hypergraph store with its incidence view.
pub use graph::{GraphError, Hypergraph, VertexCounts};
/// Read-only surface for rendering collaborators.
pub use graph_view::{EdgeView, HypergraphView, NodeView};
/// Label derivation and digest helpers.
pub use ident::{hyperedge_label, short_hash, Hash};
/// Subgraph isomorphism search.
pub use matcher::{find_embeddings, Embedding};
/// Vertex and hyperedge records.
pub use record::{EdgeAttrs, HyperEdge, Node};
/// Rewrite rule contract.
pub use rule::Production;
/// Canonical state digest.
pub use snapshot::state_hash;
