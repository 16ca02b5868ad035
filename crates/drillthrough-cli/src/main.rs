use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "drillthrough",
    version,
    about = "Drill through grappling positions and earn drill prescriptions"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        commands::Commands::Drill(args) => commands::drill::run(args, &cli.global, cli.format),
        commands::Commands::Positions => commands::positions::run(&cli.global, cli.format),
        commands::Commands::Show(args) => commands::show::run(args, &cli.global, cli.format),
        commands::Commands::Graph(args) => commands::graph::run(args, &cli.global, cli.format),
        commands::Commands::Validate(args) => {
            commands::validate::run(args, &cli.global, cli.format)
        }
        commands::Commands::Init(args) => commands::init::run(args, &cli.global),
    }
}
