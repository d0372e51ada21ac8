//! Dahlia Graph
//!
//! This crate provides the write-once graph handed to Graphviz: clusters of
//! nodes (one cluster per workflow) plus directed edges between qualified
//! node names. The graph is built in two phases - every node first, then
//! every edge - so edge endpoints can be checked against the complete node
//! set while they are resolved.
//!
//! Rendering happens by emitting DOT text and piping it through the
//! Graphviz `dot` binary.

mod dot;
mod error;
mod graph;
mod render;

pub use error::RenderError;
pub use graph::{Cluster, Edge, Graph, Node, NodeLabel};
pub use render::render_png;
