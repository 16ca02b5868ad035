use super::engine::DrillGraph;
use crate::model::DecisionQuality;

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl DrillGraph {
    /// Render as DOT format for Graphviz.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph drillthrough {\n  rankdir=LR;\n");

        for position in self.positions() {
            let shape = if self.is_terminal(&position.id).unwrap_or(true) {
                "doublecircle"
            } else {
                "box"
            };
            dot.push_str(&format!(
                "  \"{}\" [label=\"{}\" shape={}];\n",
                escape(&position.id),
                escape(&position.name),
                shape
            ));
        }

        for t in self.transitions() {
            let color = match t.decision_quality {
                DecisionQuality::Excellent => "darkgreen",
                DecisionQuality::Good => "green",
                DecisionQuality::Poor => "orange",
                DecisionQuality::Failure => "red",
            };
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{} ({:.0}%)\" color={}];\n",
                escape(&t.from_position),
                escape(&t.to_position),
                escape(&t.action),
                t.probability * 100.0,
                color
            ));
        }

        dot.push_str("}\n");
        dot
    }
}
