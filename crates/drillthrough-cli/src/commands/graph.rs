use anyhow::Result;
use clap::Args;

use super::GlobalArgs;
use crate::output::OutputFormat;
use drillthrough_core::GraphContent;

#[derive(Args)]
pub struct GraphArgs {
    /// Output DOT format for Graphviz
    #[arg(long)]
    pub dot: bool,
}

pub fn run(args: &GraphArgs, global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let config = global.load_config()?;
    let graph = global.load_graph(&config)?;

    if args.dot {
        print!("{}", graph.to_dot());
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", GraphContent::from(&graph).to_json()?);
        }
        OutputFormat::Text => {
            println!(
                "Position graph: {} positions, {} transitions",
                graph.position_count(),
                graph.transition_count()
            );
            println!();
            for position in graph.positions() {
                println!("  [{}] {}", position.id, position.name);
            }
            if graph.transition_count() > 0 {
                println!();
                for t in graph.transitions() {
                    println!(
                        "  {} --[{} {:.0}%]--> {}",
                        t.from_position,
                        t.decision_quality,
                        t.probability * 100.0,
                        t.to_position
                    );
                }
            }
            println!();
            println!("Use --dot to output Graphviz format");
        }
    }

    Ok(())
}
