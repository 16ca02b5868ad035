use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use drillthrough_session::NarrativeSession;

use super::GlobalArgs;
use crate::output::format::{
    format_choices, format_outcome, format_position, format_summary,
};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct DrillArgs {
    /// Starting position ID (defaults to the configured start)
    #[arg(long, env = "DRILLTHROUGH_START")]
    pub start: Option<String>,
}

pub fn run(args: &DrillArgs, global: &GlobalArgs, format: OutputFormat) -> Result<()> {
    let config = global.load_config()?;
    let graph = global.load_graph(&config)?;
    let start = args.start.as_deref().unwrap_or(&config.start_position);

    let mut session = NarrativeSession::start(&graph, start)
        .with_context(|| format!("Cannot start a session at '{start}'"))?;

    // JSON keeps stdout for the summary alone
    let mut input = std::io::stdin().lock();
    match format {
        OutputFormat::Text => drive(
            &mut session,
            &mut input,
            &mut std::io::stdout().lock(),
            config.show_probabilities,
        )?,
        OutputFormat::Json => drive(
            &mut session,
            &mut input,
            &mut std::io::stderr().lock(),
            config.show_probabilities,
        )?,
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", format_summary(&session.summary(), format))?;
    if let OutputFormat::Text = format {
        writeln!(stdout, "{}", "=".repeat(60))?;
        writeln!(stdout, "Thank you for training! Practice your drills! \u{1f94b}")?;
        writeln!(stdout, "{}", "=".repeat(60))?;
    }
    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line, "q" | "quit" | "exit")
}

/// Read a 1-based action number. `None` on quit or end of input.
fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max: usize,
) -> Result<Option<usize>> {
    loop {
        write!(
            output,
            "\nSelect an action (1-{max}), or 'quit' to end: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim().to_lowercase();
        if is_quit(&line) {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(Some(n)),
            Ok(_) => writeln!(output, "Please enter a number between 1 and {max}.")?,
            Err(_) => writeln!(output, "Please enter a valid number or 'quit'.")?,
        }
    }
}

/// Run the choose-and-report loop until the walk ends or the user quits.
fn drive<R: BufRead, W: Write>(
    session: &mut NarrativeSession<'_>,
    input: &mut R,
    output: &mut W,
    show_probabilities: bool,
) -> Result<()> {
    writeln!(output, "\n{}", "=".repeat(60))?;
    writeln!(output, "DRILLTHROUGH: SITUATIONAL NARRATIVE TRAINING")?;
    writeln!(output, "{}", "=".repeat(60))?;
    writeln!(
        output,
        "\nNavigate through positions, explore opponent reactions,\nand earn drill prescriptions to improve your game."
    )?;
    writeln!(output, "\nType 'quit' or 'exit' at any time to end the session.")?;
    writeln!(
        output,
        "\nStarting position: {}",
        session.current_position()?.name
    )?;

    'walk: loop {
        write!(output, "{}", format_position(session.current_position()?))?;

        let choices = session.available_choices();
        if choices.is_empty() {
            writeln!(
                output,
                "\nYou've reached a terminal position in this narrative."
            )?;
            break;
        }
        write!(output, "{}", format_choices(choices, show_probabilities))?;

        let taken = loop {
            let Some(number) = read_number(input, output, choices.len())? else {
                writeln!(output, "\nEnding session...")?;
                break 'walk;
            };
            match session.choose(number - 1) {
                Ok(taken) => break taken,
                Err(e) if e.is_user_correctable() => {
                    tracing::debug!("Rejected choice {number}: {e}");
                    writeln!(
                        output,
                        "Please enter a number between 1 and {}.",
                        choices.len()
                    )?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        let drill = session.graph().drill_for_transition(taken);
        write!(
            output,
            "{}",
            format_outcome(taken, drill, session.current_position()?)
        )?;

        write!(output, "\nPress Enter to continue, or type 'quit' to end: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || is_quit(&line.trim().to_lowercase()) {
            writeln!(output, "\nEnding session...")?;
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillthrough_core::sample_graph;

    fn run_script(script: &str, start: &str) -> (String, usize, String) {
        let graph = sample_graph().unwrap();
        let mut session = NarrativeSession::start(&graph, start).unwrap();
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        drive(&mut session, &mut input, &mut output, true).unwrap();
        (
            String::from_utf8(output).unwrap(),
            session.history().len(),
            session.current_position_id().to_string(),
        )
    }

    #[test]
    fn test_walk_to_mount() {
        let (out, steps, at) = run_script("1\n\n1\n\n1\n\n1\n\n", "closed_guard");
        assert_eq!(steps, 4);
        assert_eq!(at, "mount");
        assert!(out.contains("RESULT: Opponent's posture breaks forward"));
        assert!(out.contains("You are now in: Mount"));
        assert!(out.contains("terminal position"));
    }

    #[test]
    fn test_out_of_range_reprompts() {
        let (out, steps, at) = run_script("5\n0\nabc\n2\nquit\n", "closed_guard");
        assert_eq!(steps, 1);
        assert_eq!(at, "closed_guard");
        assert_eq!(out.matches("Please enter a number between 1 and 2.").count(), 2);
        assert!(out.contains("Please enter a valid number or 'quit'."));
        assert!(out.contains("RESULT: Opponent maintains posture"));
        assert!(out.contains("Ending session..."));
    }

    #[test]
    fn test_eof_ends_walk() {
        let (out, steps, _) = run_script("", "closed_guard");
        assert_eq!(steps, 0);
        assert!(out.contains("Ending session..."));
    }

    #[test]
    fn test_terminal_start_ends_immediately() {
        let (out, steps, at) = run_script("1\n", "mount");
        assert_eq!(steps, 0);
        assert_eq!(at, "mount");
        assert!(out.contains("terminal position"));
        assert!(!out.contains("Select an action"));
    }
}
