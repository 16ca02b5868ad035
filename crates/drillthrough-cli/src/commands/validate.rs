use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use drillthrough_core::load_content_file;

use super::GlobalArgs;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ValidateArgs {
    /// Content file to check (defaults to the active content)
    pub path: Option<PathBuf>,
}

pub fn run(args: &ValidateArgs, global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let config = global.load_config()?;
    let graph = match &args.path {
        Some(path) => load_content_file(path)
            .with_context(|| format!("Invalid content file '{}'", path.display()))?,
        None => global.load_graph(&config)?,
    };

    let terminals: Vec<&str> = graph.terminal_positions().map(|p| p.id.as_str()).collect();
    let start_ok = graph.has_position(&config.start_position);
    if !start_ok {
        tracing::warn!(
            "Configured start position '{}' is not in the graph",
            config.start_position
        );
    }

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "valid": true,
                "positions": graph.position_count(),
                "transitions": graph.transition_count(),
                "terminal_positions": terminals,
                "start_position_found": start_ok,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "Content OK: {} positions, {} transitions",
                graph.position_count(),
                graph.transition_count()
            );
            if terminals.is_empty() {
                println!("Terminal positions: none");
            } else {
                println!("Terminal positions: {}", terminals.join(", "));
            }
            if !start_ok {
                println!(
                    "Warning: start position '{}' not found",
                    config.start_position
                );
            }
        }
    }
    Ok(())
}
