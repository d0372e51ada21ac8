use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
  #[error("failed to spawn graphviz `dot` (is graphviz installed?): {0}")]
  Spawn(#[source] std::io::Error),

  #[error("failed to stream dot input: {0}")]
  Io(#[from] std::io::Error),

  #[error("graphviz `dot` exited with {status}: {stderr}")]
  DotFailed {
    status: std::process::ExitStatus,
    stderr: String,
  },
}
