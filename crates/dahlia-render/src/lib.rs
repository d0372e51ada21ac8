//! Dahlia Render
//!
//! This crate turns a parsed workflow document into the clustered graph
//! that gets rendered. Assembly runs in a fixed order:
//!
//! 1. propagate `task-defaults` onto every task (`defaults`)
//! 2. build one cluster of nodes per workflow, across all workflows
//! 3. resolve edges per direct workflow against the complete node set
//!
//! Step 3 depends on step 2 having finished for *every* workflow: an edge
//! endpoint is written as the qualified `workflow.task` name only if that
//! node exists in the graph, and falls back to the bare task name
//! otherwise. Resolving edges before all nodes are in place would degrade
//! every endpoint to its bare form.

mod assembler;
mod defaults;
mod edges;
mod label;
mod nodes;

pub use assembler::assemble;
pub use defaults::propagate_defaults;
pub use edges::resolve_edges;
pub use label::format_label;
pub use nodes::build_nodes;
