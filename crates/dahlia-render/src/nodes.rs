use dahlia_config::Workflow;
use dahlia_graph::{Cluster, Graph, Node, NodeLabel};

use crate::label::format_label;

/// Add one dashed cluster for `workflow`, containing one box node per task.
///
/// The cluster id is the workflow name with separator characters stripped
/// so it stays a safe Graphviz identifier; the label keeps the original
/// name. Node names are qualified as `<workflow>.<task>`, which is the
/// identity edge resolution checks against. A workflow without tasks still
/// produces its (empty, labeled) cluster.
pub fn build_nodes(workflow_name: &str, workflow: &Workflow, graph: &mut Graph) {
  let mut cluster = Cluster::new(cluster_id(workflow_name), workflow_name, "dashed");

  for (task_name, task) in &workflow.tasks {
    let markup = format_label(task_name, task.display_action(), &task.defaults);
    cluster.add_node(Node {
      name: format!("{workflow_name}.{task_name}"),
      shape: "box".to_string(),
      label: NodeLabel::Html(markup),
    });
  }

  graph.add_cluster(cluster);
}

fn cluster_id(workflow_name: &str) -> String {
  workflow_name
    .chars()
    .filter(|c| *c != '.' && *c != '-')
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use dahlia_config::Document;

  fn load_workflow(yaml: &str) -> (String, Workflow) {
    let document = Document::from_yaml_str(yaml).expect("fixture must parse");
    let (name, workflow) = document.workflows.into_iter().next().expect("one workflow");
    (name, workflow)
  }

  #[test]
  fn test_nodes_are_qualified_and_boxed() {
    let (name, workflow) = load_workflow(
      "deploy:\n  tasks:\n    build:\n      action: make.all\n    ship: {}\n",
    );
    let mut graph = Graph::new();
    build_nodes(&name, &workflow, &mut graph);

    assert_eq!(graph.clusters.len(), 1);
    let cluster = &graph.clusters[0];
    assert_eq!(cluster.id, "deploy");
    assert_eq!(cluster.label, "deploy");
    assert_eq!(cluster.style, "dashed");

    let names: Vec<&str> = cluster.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["deploy.build", "deploy.ship"]);
    assert!(cluster.nodes.iter().all(|n| n.shape == "box"));
  }

  #[test]
  fn test_cluster_id_strips_separators() {
    let (name, workflow) = load_workflow("my.own-flow:\n  tasks: {}\n");
    let mut graph = Graph::new();
    build_nodes(&name, &workflow, &mut graph);

    let cluster = &graph.clusters[0];
    assert_eq!(cluster.id, "myownflow");
    assert_eq!(cluster.label, "my.own-flow");
    assert!(cluster.nodes.is_empty());
  }

  #[test]
  fn test_taskless_body_renders_noop_label() {
    let (name, workflow) = load_workflow("deploy:\n  tasks:\n    wait: {}\n");
    let mut graph = Graph::new();
    build_nodes(&name, &workflow, &mut graph);

    let node = &graph.clusters[0].nodes[0];
    match &node.label {
      NodeLabel::Html(markup) => assert!(markup.contains("noop")),
      NodeLabel::Text(_) => panic!("task labels must be markup"),
    }
  }
}
