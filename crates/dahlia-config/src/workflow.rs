use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::callback::CallbackTarget;
use crate::task::Task;

/// How a workflow sequences its tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowType {
  /// Tasks run in declaration order unless callbacks redirect the flow.
  #[default]
  Direct,
  /// Dependency-driven sequencing. Recognized but not yet supported:
  /// reverse workflows render their tasks without any edges.
  Reverse,
}

/// A named, ordered collection of tasks plus optional default callback
/// behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
  #[serde(rename = "type", default)]
  pub workflow_type: WorkflowType,

  /// Task declaration order defines the implicit "next task" relation.
  #[serde(default)]
  pub tasks: IndexMap<String, Task>,

  /// Callback sequences inherited by every task that does not declare the
  /// category itself. Keys outside the recognized category set are kept
  /// here but never propagated.
  #[serde(rename = "task-defaults", default)]
  pub task_defaults: IndexMap<String, Vec<CallbackTarget>>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_type_defaults_to_direct() {
    let workflow: Workflow = serde_yaml::from_str("tasks: {}").unwrap();
    assert_eq!(workflow.workflow_type, WorkflowType::Direct);
  }

  #[test]
  fn test_reverse_type_is_recognized() {
    let workflow: Workflow = serde_yaml::from_str("type: reverse").unwrap();
    assert_eq!(workflow.workflow_type, WorkflowType::Reverse);
    assert!(workflow.tasks.is_empty());
  }

  #[test]
  fn test_unknown_type_is_rejected() {
    let result: Result<Workflow, _> = serde_yaml::from_str("type: sideways");
    assert!(result.is_err());
  }

  #[test]
  fn test_task_order_is_preserved() {
    let workflow: Workflow = serde_yaml::from_str(
      "tasks:\n  t3:\n    action: a3\n  t1:\n    action: a1\n  t2:\n    action: a2\n",
    )
    .unwrap();
    let names: Vec<&str> = workflow.tasks.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["t3", "t1", "t2"]);
  }
}
