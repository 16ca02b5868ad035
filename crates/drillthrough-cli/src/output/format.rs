use drillthrough_core::model::{DecisionQuality, DrillPrescription, Position, Transition};
use drillthrough_core::DrillGraph;
use drillthrough_session::SessionSummary;

use super::OutputFormat;

fn rule() -> String {
    "=".repeat(60)
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n{title}\n{}\n", rule(), rule()));
}

fn quality_marker(quality: DecisionQuality) -> &'static str {
    match quality {
        DecisionQuality::Excellent => "\u{2605}",
        DecisionQuality::Good => "\u{2713}",
        DecisionQuality::Poor => "\u{26a0}",
        DecisionQuality::Failure => "\u{2717}",
    }
}

pub fn format_position(position: &Position) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("POSITION: {}", position.name));
    out.push_str(&format!("\n{}\n", position.description));

    if !position.advantages.is_empty() {
        out.push_str("\nAdvantages:\n");
        for advantage in &position.advantages {
            out.push_str(&format!("  \u{2022} {advantage}\n"));
        }
    }
    if !position.common_mistakes.is_empty() {
        out.push_str("\nCommon Mistakes to Avoid:\n");
        for mistake in &position.common_mistakes {
            out.push_str(&format!("  \u{26a0} {mistake}\n"));
        }
    }
    out
}

/// Numbered list of choices, starting at 1.
pub fn format_choices(choices: &[Transition], show_probabilities: bool) -> String {
    if choices.is_empty() {
        return "\nNo transitions available from this position.\n".to_string();
    }

    let mut out = String::new();
    heading(&mut out, "AVAILABLE ACTIONS:");
    for (i, t) in choices.iter().enumerate() {
        out.push_str(&format!("\n[{}] {}\n", i + 1, t.action));
        out.push_str(&format!("    Likely Reaction: {}\n", t.opponent_reaction));
        if show_probabilities {
            out.push_str(&format!(
                "    Success Probability: {:.0}%\n",
                t.probability * 100.0
            ));
        }
        out.push_str(&format!(
            "    Decision Quality: {} {}\n",
            quality_marker(t.decision_quality),
            t.decision_quality
        ));
    }
    out
}

pub fn format_drill(drill: Option<&DrillPrescription>) -> String {
    let Some(drill) = drill else {
        return "\nNo specific drill prescribed for this transition.\n".to_string();
    };

    let mut out = String::new();
    heading(&mut out, "DRILL PRESCRIPTION:");
    out.push_str(&format!("\n\u{1f4cb} {}\n", drill.drill_name));
    out.push_str(&format!("\n{}\n", drill.description));
    out.push_str(&format!("\nRepetitions: {}\n", drill.repetitions));
    if !drill.focus_points.is_empty() {
        out.push_str("\nFocus Points:\n");
        for point in &drill.focus_points {
            out.push_str(&format!("  \u{2713} {point}\n"));
        }
    }
    out
}

/// Result of an applied choice: the reaction, its rating, the drill and where it led.
pub fn format_outcome(
    taken: &Transition,
    drill: Option<&DrillPrescription>,
    arrived: &Position,
) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("RESULT: {}", taken.opponent_reaction));
    out.push_str(&format!(
        "\nDecision Quality: {} {}\n",
        quality_marker(taken.decision_quality),
        taken.decision_quality
    ));
    out.push_str(&format_drill(drill));
    out.push_str(&format!("\nYou are now in: {}\n", arrived.name));
    out
}

pub fn format_summary(summary: &SessionSummary, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(summary).unwrap_or_default(),
        OutputFormat::Text => format_summary_text(summary),
    }
}

fn format_summary_text(summary: &SessionSummary) -> String {
    let mut out = String::new();
    heading(&mut out, "SESSION SUMMARY");
    out.push_str(&format!(
        "\nPositions Explored: {}\n",
        summary.positions_visited
    ));
    out.push_str(&format!("Drills Earned: {}\n", summary.total_drills()));
    if summary.total_drills() > 0 {
        out.push_str(&format!(
            "Total Repetitions: {}\n",
            summary.total_repetitions()
        ));
    }
    if let Some(ratio) = summary.positive_ratio() {
        out.push_str(&format!("Good Decisions: {:.0}%\n", ratio * 100.0));
    }

    if !summary.quality_counts.is_empty() {
        out.push_str("\nDecisions:\n");
        for quality in DecisionQuality::ALL {
            if let Some(count) = summary.quality_counts.get(&quality) {
                out.push_str(&format!("  {quality}: {count}\n"));
            }
        }
    }

    if !summary.drills_earned.is_empty() {
        heading(&mut out, "YOUR DRILL PROGRAM:");
        for (i, drill) in summary.drills_earned.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", i + 1, drill.drill_name));
            out.push_str(&format!("   \u{2022} {}\n", drill.description));
            out.push_str(&format!("   \u{2022} {} repetitions\n", drill.repetitions));
        }
    }
    out
}

pub fn format_position_list(graph: &DrillGraph, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let entries: Vec<_> = graph
                .positions()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "name": p.name,
                        "description": p.description,
                        "actions": graph.get_transitions_from(&p.id).map(|ts| ts.len()).unwrap_or(0),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        }
        OutputFormat::Text => {
            if graph.position_count() == 0 {
                return "No positions found.\n".to_string();
            }
            let mut out = String::new();
            for p in graph.positions() {
                let actions = graph
                    .get_transitions_from(&p.id)
                    .map(|ts| ts.len())
                    .unwrap_or(0);
                let suffix = if actions == 0 {
                    "terminal".to_string()
                } else {
                    format!("{actions} action(s)")
                };
                out.push_str(&format!("\u{25c6} {} {} [{suffix}]\n", p.id, p.name));
            }
            out
        }
    }
}
