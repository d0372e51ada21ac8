use dahlia_config::{Document, WorkflowType};
use dahlia_graph::Graph;
use tracing::{debug, info};

use crate::defaults::propagate_defaults;
use crate::edges::resolve_edges;
use crate::nodes::build_nodes;

/// Assemble the full graph for a document.
///
/// Ordering contract: defaults are propagated first, then nodes are built
/// for every workflow, and only then are edges resolved. Edge endpoint
/// naming checks node existence across the whole graph, so no edge may be
/// resolved before the node phase has covered all workflows.
pub fn assemble(document: &mut Document) -> Graph {
  propagate_defaults(document);

  let mut graph = Graph::new();

  for (name, workflow) in &document.workflows {
    build_nodes(name, workflow, &mut graph);
  }

  for (name, workflow) in &document.workflows {
    match workflow.workflow_type {
      WorkflowType::Direct => resolve_edges(name, workflow, &mut graph),
      WorkflowType::Reverse => {
        debug!(workflow = %name, "reverse workflows are not yet supported, skipping edges");
      }
    }
  }

  info!(
    workflows = document.workflows.len(),
    edges = graph.edges.len(),
    "assembled graph"
  );
  graph
}
