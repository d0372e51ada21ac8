use dahlia_config::{CallbackKind, Task, Workflow};
use dahlia_graph::{Edge, Graph};

/// Resolve every edge of a direct workflow against the graph's node set.
///
/// Each task contributes its explicit callback edges plus at most one
/// implicit edge to its declaration-order successor. Endpoints use the
/// qualified `<workflow>.<task>` form only when that node already exists
/// in the graph; unknown targets degrade to the bare name instead of
/// failing.
pub fn resolve_edges(workflow_name: &str, workflow: &Workflow, graph: &mut Graph) {
  for (task_name, task) in &workflow.tasks {
    add_implicit_edge(workflow_name, workflow, task_name, task, graph);
    add_callback_edges(workflow_name, task_name, task, graph);
  }
}

/// One colored edge per declared callback target, in category order then
/// declaration order.
fn add_callback_edges(workflow_name: &str, task_name: &str, task: &Task, graph: &mut Graph) {
  for kind in CallbackKind::ALL {
    let Some(targets) = task.callbacks(kind) else {
      continue;
    };
    for target in targets {
      let parent = qualified_or_bare(graph, workflow_name, task_name);
      let child = qualified_or_bare(graph, workflow_name, target.task_name());
      graph.add_edge(Edge {
        parent,
        child,
        arrowhead: "none".to_string(),
        color: Some(kind.color().to_string()),
      });
    }
  }
}

/// Infer the sequential edge to the next task in declaration order.
///
/// The edge is skipped when the task declares any callback category (the
/// declaration takes over the control flow), when the task is last, or when
/// any task's explicit callbacks already claim the successor
/// (`CallbackTarget::mentions`).
fn add_implicit_edge(
  workflow_name: &str,
  workflow: &Workflow,
  task_name: &str,
  task: &Task,
  graph: &mut Graph,
) {
  if task.declares_any_callback() {
    return;
  }

  let Some(position) = workflow.tasks.get_index_of(task_name) else {
    return;
  };
  let Some((next_name, _)) = workflow.tasks.get_index(position + 1) else {
    return;
  };

  for other in workflow.tasks.values() {
    for kind in CallbackKind::ALL {
      let Some(targets) = other.callbacks(kind) else {
        continue;
      };
      if targets.iter().any(|target| target.mentions(next_name)) {
        return;
      }
    }
  }

  let parent = qualified_or_bare(graph, workflow_name, task_name);
  let child = qualified_or_bare(graph, workflow_name, next_name);
  graph.add_edge(Edge {
    parent,
    child,
    arrowhead: "none".to_string(),
    color: None,
  });
}

/// The qualified node name if it exists in the graph, the bare task name
/// otherwise.
fn qualified_or_bare(graph: &Graph, workflow_name: &str, task_name: &str) -> String {
  let qualified = format!("{workflow_name}.{task_name}");
  if graph.has_node(&qualified) {
    qualified
  } else {
    task_name.to_string()
  }
}
