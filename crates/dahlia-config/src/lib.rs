//! Dahlia Config
//!
//! This crate contains the serializable workflow document types for dahlia.
//! A document is an ordered collection of named workflows; each workflow is
//! an ordered collection of named tasks plus optional default callback
//! behavior (`task-defaults`).
//!
//! Documents are loaded from YAML. Two shapes are accepted:
//! - a top-level `workflows` key mapping names to workflow bodies
//! - the older flat form, where every top-level mapping value is a workflow
//!
//! Order is load-bearing: the implicit "next task" relation used by the
//! graph assembly is the task declaration order, so all maps here are
//! order-preserving.

mod callback;
mod document;
mod error;
mod task;
mod workflow;

pub use callback::{CallbackKind, CallbackTarget};
pub use document::Document;
pub use error::DocumentError;
pub use task::Task;
pub use workflow::{Workflow, WorkflowType};
