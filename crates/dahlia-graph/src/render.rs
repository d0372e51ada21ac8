use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::RenderError;
use crate::graph::Graph;

/// Render the graph to a PNG at `output` by piping DOT text through the
/// Graphviz `dot` binary.
///
/// The child's stdin is closed before waiting, so the handle is released on
/// every exit path.
pub fn render_png(graph: &Graph, output: &Path) -> Result<(), RenderError> {
  let dot = graph.to_dot();
  let node_count: usize = graph.clusters.iter().map(|c| c.nodes.len()).sum();
  debug!(
    nodes = node_count,
    edges = graph.edges.len(),
    output = %output.display(),
    "rendering graph"
  );

  let mut child = Command::new("dot")
    .arg("-Tpng")
    .arg("-o")
    .arg(output)
    .stdin(Stdio::piped())
    .stdout(Stdio::null())
    .stderr(Stdio::piped())
    .spawn()
    .map_err(RenderError::Spawn)?;

  if let Some(mut stdin) = child.stdin.take() {
    stdin.write_all(dot.as_bytes())?;
  }

  let result = child.wait_with_output()?;
  if !result.status.success() {
    return Err(RenderError::DotFailed {
      status: result.status,
      stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
    });
  }

  Ok(())
}
