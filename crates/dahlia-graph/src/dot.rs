use crate::graph::{Graph, NodeLabel};

impl Graph {
  /// Render the graph as Graphviz DOT text.
  ///
  /// Node names and plain-text labels are emitted quoted and escaped;
  /// HTML-like labels are emitted between `<` and `>` as Graphviz requires,
  /// without further escaping.
  pub fn to_dot(&self) -> String {
    let mut out = String::new();
    out.push_str("digraph workflows {\n");
    out.push_str("  rankdir=TB;\n\n");

    for cluster in &self.clusters {
      out.push_str(&format!(
        "  subgraph \"cluster_{}\" {{\n",
        escape_dot(&cluster.id)
      ));
      out.push_str(&format!("    label=\"{}\";\n", escape_dot(&cluster.label)));
      out.push_str(&format!("    style=\"{}\";\n", escape_dot(&cluster.style)));
      for node in &cluster.nodes {
        let label = match &node.label {
          NodeLabel::Text(text) => format!("\"{}\"", escape_dot(text)),
          NodeLabel::Html(markup) => format!("<{}>", markup),
        };
        out.push_str(&format!(
          "    \"{}\" [shape=\"{}\" label={}];\n",
          escape_dot(&node.name),
          escape_dot(&node.shape),
          label,
        ));
      }
      out.push_str("  }\n\n");
    }

    for edge in &self.edges {
      let color = edge
        .color
        .as_ref()
        .map(|color| format!(" color=\"{}\"", escape_dot(color)))
        .unwrap_or_default();
      out.push_str(&format!(
        "  \"{}\" -> \"{}\" [arrowhead=\"{}\"{}];\n",
        escape_dot(&edge.parent),
        escape_dot(&edge.child),
        escape_dot(&edge.arrowhead),
        color,
      ));
    }

    out.push_str("}\n");
    out
  }
}

/// Escape a string for a quoted Graphviz DOT value.
fn escape_dot(s: &str) -> String {
  s.replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace('\n', "\\n")
}
