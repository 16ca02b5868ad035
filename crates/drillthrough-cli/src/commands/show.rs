use anyhow::{Context, Result};
use clap::Args;

use super::GlobalArgs;
use crate::output::format::{format_choices, format_drill, format_position};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Position ID
    pub id: String,

    /// Also list the position's general drills
    #[arg(long)]
    pub drills: bool,
}

pub fn run(args: &ShowArgs, global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let config = global.load_config()?;
    let graph = global.load_graph(&config)?;

    let position = graph
        .get_position(&args.id)
        .with_context(|| format!("Unknown position '{}'", args.id))?;
    let transitions = graph.get_transitions_from(&args.id)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "position": position,
                "transitions": transitions,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print!("{}", format_position(position));
            print!(
                "{}",
                format_choices(transitions, config.show_probabilities)
            );
            if args.drills {
                for drill in graph.position_drills(&args.id)? {
                    print!("{}", format_drill(Some(drill)));
                }
            }
        }
    }

    Ok(())
}
