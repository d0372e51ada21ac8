use indexmap::IndexMap;
use serde_yaml::Value;

use crate::error::DocumentError;
use crate::workflow::Workflow;

/// A parsed workflow document: an ordered mapping of workflow name to
/// workflow body.
///
/// The document is loaded once, mutated once when defaults are propagated
/// onto its tasks, and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
  pub workflows: IndexMap<String, Workflow>,
}

impl Document {
  /// Load a document from YAML text.
  ///
  /// Workflows live under a top-level `workflows` key. Without one, the
  /// flat form applies: every top-level entry with a string key and a
  /// mapping value is a workflow, and everything else (version markers and
  /// the like) is skipped.
  pub fn from_yaml_str(content: &str) -> Result<Self, DocumentError> {
    let root: Value = serde_yaml::from_str(content)?;
    let Value::Mapping(mapping) = root else {
      return Err(DocumentError::NotAMapping);
    };

    let mut workflows = IndexMap::new();

    if let Some(value) = mapping.get("workflows") {
      let Value::Mapping(bodies) = value else {
        return Err(DocumentError::WorkflowsNotAMapping);
      };
      for (key, body) in bodies {
        let Value::String(name) = key else { continue };
        workflows.insert(name.clone(), parse_workflow(name, body.clone())?);
      }
    } else {
      for (key, value) in &mapping {
        let Value::String(name) = key else { continue };
        if !matches!(value, Value::Mapping(_)) {
          continue;
        }
        workflows.insert(name.clone(), parse_workflow(name, value.clone())?);
      }
    }

    Ok(Document { workflows })
  }
}

fn parse_workflow(name: &str, body: Value) -> Result<Workflow, DocumentError> {
  serde_yaml::from_value(body).map_err(|source| DocumentError::InvalidWorkflow {
    name: name.to_string(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::callback::CallbackTarget;

  #[test]
  fn test_load_with_workflows_key() {
    let document = Document::from_yaml_str(
      r#"
workflows:
  deploy:
    tasks:
      build:
        action: make.all
      ship:
        action: scp.upload
"#,
    )
    .unwrap();

    assert_eq!(document.workflows.len(), 1);
    let workflow = &document.workflows["deploy"];
    assert_eq!(workflow.tasks.len(), 2);
    assert_eq!(
      workflow.tasks["build"].action.as_deref(),
      Some("make.all")
    );
  }

  #[test]
  fn test_load_flat_form_skips_non_mappings() {
    let document = Document::from_yaml_str(
      r#"
version: '2.0'
deploy:
  tasks:
    build:
      action: make.all
cleanup:
  tasks:
    wipe:
      action: rm.tmp
"#,
    )
    .unwrap();

    let names: Vec<&str> = document.workflows.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["deploy", "cleanup"]);
  }

  #[test]
  fn test_workflow_order_is_preserved() {
    let document = Document::from_yaml_str(
      "workflows:\n  zeta: {}\n  alpha: {}\n  mid: {}\n",
    )
    .unwrap();
    let names: Vec<&str> = document.workflows.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
  }

  #[test]
  fn test_callback_target_forms() {
    let document = Document::from_yaml_str(
      r#"
deploy:
  tasks:
    build:
      action: make.all
      on-success:
        - ship
        - notify:
            channel: ops
"#,
    )
    .unwrap();

    let task = &document.workflows["deploy"].tasks["build"];
    let targets = task.on_success.as_deref().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].task_name(), "ship");
    assert_eq!(targets[1].task_name(), "notify");
    assert!(matches!(targets[1], CallbackTarget::Keyed(_)));
  }

  #[test]
  fn test_declared_empty_category_survives_loading() {
    let document = Document::from_yaml_str(
      r#"
deploy:
  tasks:
    build:
      action: make.all
      on-error: []
"#,
    )
    .unwrap();

    let task = &document.workflows["deploy"].tasks["build"];
    assert_eq!(task.on_error.as_deref(), Some(&[][..]));
  }

  #[test]
  fn test_scalar_root_is_rejected() {
    assert!(matches!(
      Document::from_yaml_str("just a string"),
      Err(DocumentError::NotAMapping)
    ));
  }

  #[test]
  fn test_invalid_workflow_shape_is_rejected() {
    let result = Document::from_yaml_str("deploy:\n  tasks: 12\n");
    assert!(matches!(
      result,
      Err(DocumentError::InvalidWorkflow { .. })
    ));
  }
}
