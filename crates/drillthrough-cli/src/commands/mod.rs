pub mod drill;
pub mod graph;
pub mod init;
pub mod positions;
pub mod show;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use drillthrough_core::config::CONFIG_FILE_NAME;
use drillthrough_core::{load_content_file, sample_graph, DrillConfig, DrillGraph};

#[derive(Subcommand)]
pub enum Commands {
    /// Walk the position graph interactively
    Drill(drill::DrillArgs),
    /// List all positions
    Positions,
    /// Show a position and the actions available from it
    Show(show::ShowArgs),
    /// Show the position graph
    Graph(graph::GraphArgs),
    /// Check a content file for errors
    Validate(validate::ValidateArgs),
    /// Write a default config file
    Init(init::InitArgs),
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Config file
    #[arg(long, global = true, env = "DRILLTHROUGH_CONFIG", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Content file (JSON), overrides the configured one
    #[arg(long, global = true, env = "DRILLTHROUGH_CONTENT")]
    pub content: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn load_config(&self) -> Result<DrillConfig> {
        DrillConfig::load_or_default(&self.config)
            .with_context(|| format!("Failed to read config '{}'", self.config.display()))
    }

    /// Content from `--content`, else the configured file, else the built-in sample.
    pub fn load_graph(&self, config: &DrillConfig) -> Result<DrillGraph> {
        match self.content.as_ref().or(config.content_path.as_ref()) {
            Some(path) => load_content_file(path)
                .with_context(|| format!("Failed to load content '{}'", path.display())),
            None => sample_graph().context("Built-in sample content is invalid"),
        }
    }
}
