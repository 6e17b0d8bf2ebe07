//! # Sentinel Canvas - Graph/Specification Conversion Engine
//!
//! **sentinel-canvas** is the bidirectional conversion core behind a visual
//! canvas editor for AI-agent test specifications. Users arrange typed nodes
//! (input, model, system, tool, assertion) on a graph canvas; this crate
//! deterministically serializes that graph into a YAML test-specification
//! document and materializes YAML back into a typed node/edge graph,
//! preserving round-trip fidelity.
//!
//! ## Core Workflow
//!
//! Three pure operations form the core:
//!
//! 1.  **Serialize**: [`serializer::generate_yaml`] folds nodes in array
//!     order into a [`spec::TestSpecification`] and renders it as YAML text.
//!     Edges are accepted for symmetry but connectivity is implied by node
//!     type alone.
//! 2.  **Deserialize**: [`deserializer::parse_yaml`] parses specification
//!     text and materializes a [`graph::Graph`] with deterministic ids,
//!     deterministic positions and synthesized animated edges.
//! 3.  **Normalize**: [`normalizer::normalize`] flattens the materialized
//!     node payloads into the execution-facing [`normalizer::TestSpec`]
//!     mapping.
//!
//! All three are synchronous, allocation-only functions with no I/O and no
//! shared state; they may be called repeatedly and concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use sentinel_canvas::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Export the seed canvas as a YAML test specification.
//!     let canvas = Canvas::sample();
//!     let yaml = canvas.to_yaml()?;
//!     assert!(yaml.contains("model: gpt-4"));
//!     assert!(yaml.contains("must_contain: Paris"));
//!
//!     // Re-materialize a graph from the specification text.
//!     let graph = parse_yaml(&yaml)?;
//!     assert_eq!(graph.nodes[0].id, "input-1");
//!     assert_eq!(graph.nodes[1].id, "model-1");
//!
//!     // Flatten for the execution handoff.
//!     let spec = normalize(&yaml)?;
//!     assert!(spec.get("model").is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Round-Trip Guarantees
//!
//! Repeated export → import → export cycles stabilize: after the first
//! cycle the YAML text is a fixed point. Assertion order and count are
//! preserved exactly, numeric assertion values stay YAML numbers, and node
//! ids and positions are reproducible for the same document.

pub mod deserializer;
pub mod error;
pub mod graph;
pub mod normalizer;
pub mod prelude;
pub mod serializer;
pub mod spec;
