use dahlia_config::{CallbackKind, CallbackTarget, Document};

/// Attach each workflow's `task-defaults` to its tasks.
///
/// A task inherits exactly the recognized categories it does not declare
/// itself; declaring a category (even as an empty sequence) shadows the
/// default. Categories are attached in `CallbackKind::ALL` order, which is
/// also the badge order on rendered labels. Workflows without
/// `task-defaults` leave every task with empty defaults.
pub fn propagate_defaults(document: &mut Document) {
  for workflow in document.workflows.values_mut() {
    let inherited: Vec<(CallbackKind, Vec<CallbackTarget>)> = CallbackKind::ALL
      .iter()
      .filter_map(|kind| {
        workflow
          .task_defaults
          .get(kind.key())
          .map(|targets| (*kind, targets.clone()))
      })
      .collect();

    for task in workflow.tasks.values_mut() {
      task.defaults = inherited
        .iter()
        .filter(|(kind, _)| !task.declares(*kind))
        .cloned()
        .collect();
    }
  }
}
