use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
  #[error("document is not valid YAML: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("document root must be a mapping")]
  NotAMapping,

  #[error("'workflows' must be a mapping of name to workflow body")]
  WorkflowsNotAMapping,

  #[error("workflow '{name}' has an invalid shape: {source}")]
  InvalidWorkflow {
    name: String,
    #[source]
    source: serde_yaml::Error,
  },
}
