use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The closed set of callback categories a task can declare.
///
/// `ALL` is the canonical iteration order for both label badges and edge
/// creation; the bound colors are the presentation colors for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
  OnError,
  OnSuccess,
  OnComplete,
}

impl CallbackKind {
  pub const ALL: [CallbackKind; 3] = [
    CallbackKind::OnError,
    CallbackKind::OnSuccess,
    CallbackKind::OnComplete,
  ];

  /// The key this category uses in workflow documents.
  pub fn key(&self) -> &'static str {
    match self {
      CallbackKind::OnError => "on-error",
      CallbackKind::OnSuccess => "on-success",
      CallbackKind::OnComplete => "on-complete",
    }
  }

  /// Presentation color for edges and label badges of this category.
  pub fn color(&self) -> &'static str {
    match self {
      CallbackKind::OnError => "#F26B7A",
      CallbackKind::OnSuccess => "#97B503",
      CallbackKind::OnComplete => "#E866E8",
    }
  }
}

/// A single entry in a callback sequence.
///
/// Documents write these either as a bare task name or as a single-key
/// mapping whose key is the task name (the value carries engine parameters
/// that are irrelevant for graph purposes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallbackTarget {
  Name(String),
  Keyed(IndexMap<String, serde_yaml::Value>),
}

impl CallbackTarget {
  /// The referenced task name: the string itself, or the first key of a
  /// keyed entry. An empty keyed entry yields an empty name.
  pub fn task_name(&self) -> &str {
    match self {
      CallbackTarget::Name(name) => name,
      CallbackTarget::Keyed(map) => map.keys().next().map(String::as_str).unwrap_or(""),
    }
  }

  /// Whether this target accounts for reaching `task_name`.
  ///
  /// String targets match by substring containment, keyed targets by exact
  /// key membership. A string callback to `t10` therefore also claims a
  /// successor named `t1`.
  pub fn mentions(&self, task_name: &str) -> bool {
    match self {
      CallbackTarget::Name(name) => name.contains(task_name),
      CallbackTarget::Keyed(map) => map.contains_key(task_name),
    }
  }
}
