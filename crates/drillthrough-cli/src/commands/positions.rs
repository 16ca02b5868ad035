use anyhow::Result;

use super::GlobalArgs;
use crate::output::format::format_position_list;
use crate::output::OutputFormat;

pub fn run(global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let config = global.load_config()?;
    let graph = global.load_graph(&config)?;
    print!("{}", format_position_list(&graph, format));
    Ok(())
}
