use serde::{Deserialize, Serialize};

use crate::callback::{CallbackKind, CallbackTarget};

/// A single unit of work inside a workflow.
///
/// A task runs an `action`, or invokes a nested `workflow`, or neither
/// (rendered as `noop`). Each recognized callback category is optional and
/// tri-state: absent, declared-but-empty, or declared with targets.
/// Declaring a category - even empty - overrides the workflow's
/// `task-defaults` for that category and opts the task out of implicit
/// successor inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub action: Option<String>,
  /// Nested workflow reference, used as the display action when `action`
  /// is absent.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub workflow: Option<String>,

  #[serde(rename = "on-error", skip_serializing_if = "Option::is_none")]
  pub on_error: Option<Vec<CallbackTarget>>,
  #[serde(rename = "on-success", skip_serializing_if = "Option::is_none")]
  pub on_success: Option<Vec<CallbackTarget>>,
  #[serde(rename = "on-complete", skip_serializing_if = "Option::is_none")]
  pub on_complete: Option<Vec<CallbackTarget>>,

  /// Inherited `task-defaults` entries, attached after loading. Never
  /// contains a category the task declares itself.
  #[serde(skip)]
  pub defaults: Vec<(CallbackKind, Vec<CallbackTarget>)>,
}

impl Task {
  /// The text rendered as the task's action: `action`, else the nested
  /// workflow reference, else `noop`.
  pub fn display_action(&self) -> &str {
    self
      .action
      .as_deref()
      .or(self.workflow.as_deref())
      .unwrap_or("noop")
  }

  /// The declared callback sequence for a category, if the category is
  /// present on the task at all.
  pub fn callbacks(&self, kind: CallbackKind) -> Option<&[CallbackTarget]> {
    match kind {
      CallbackKind::OnError => self.on_error.as_deref(),
      CallbackKind::OnSuccess => self.on_success.as_deref(),
      CallbackKind::OnComplete => self.on_complete.as_deref(),
    }
  }

  /// Whether the task declares this category as a direct key.
  pub fn declares(&self, kind: CallbackKind) -> bool {
    self.callbacks(kind).is_some()
  }

  /// Whether any recognized category is declared directly on the task.
  pub fn declares_any_callback(&self) -> bool {
    CallbackKind::ALL.iter().any(|kind| self.declares(*kind))
  }
}
