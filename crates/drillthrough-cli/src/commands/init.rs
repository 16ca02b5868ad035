use anyhow::{Context, Result};
use clap::Args;
use drillthrough_core::DrillConfig;

use super::GlobalArgs;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs, global: &GlobalArgs) -> Result<()> {
    let path = &global.config;
    if path.exists() && !args.force {
        println!("Config already exists at {}.", path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    let mut config = DrillConfig::default_init();
    // stored absolute, since relative paths resolve against the config's directory
    config.content_path = global
        .content
        .as_deref()
        .map(std::path::absolute)
        .transpose()
        .context("Failed to resolve content path")?;
    config
        .save(path)
        .with_context(|| format!("Failed to write config '{}'", path.display()))?;

    println!("Wrote {}.", path.display());
    println!();
    println!("Next steps:");
    println!("  drillthrough positions           List positions");
    println!("  drillthrough drill               Start a drill session");
    println!("  drillthrough graph --dot         Export the graph for Graphviz");
    Ok(())
}
