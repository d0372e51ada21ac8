use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dahlia_config::Document;
use dahlia_render::assemble;

/// Dahlia - render declarative workflow definitions as a graph image
#[derive(Parser)]
#[command(name = "dahlia")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the workflow definition file (YAML)
  workflow_file: PathBuf,
}

/// Output lands next to wherever dahlia is invoked.
const OUTPUT_PATH: &str = "graph.png";

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let cli = Cli::parse();

  let content = std::fs::read_to_string(&cli.workflow_file)
    .with_context(|| format!("failed to read workflow file: {}", cli.workflow_file.display()))?;

  let mut document = Document::from_yaml_str(&content)
    .with_context(|| format!("failed to parse workflow file: {}", cli.workflow_file.display()))?;

  eprintln!("Loaded {} workflows", document.workflows.len());

  let graph = assemble(&mut document);

  dahlia_graph::render_png(&graph, Path::new(OUTPUT_PATH))
    .with_context(|| format!("failed to render {OUTPUT_PATH}"))?;

  eprintln!("Wrote {OUTPUT_PATH}");

  Ok(())
}
