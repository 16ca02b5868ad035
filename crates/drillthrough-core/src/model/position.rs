use serde::{Deserialize, Serialize};

use super::drill::DrillPrescription;

/// A situational state in the position graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub advantages: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    /// General drills for the position, independent of any transition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_drills: Vec<DrillPrescription>,
}

impl Position {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            advantages: Vec::new(),
            common_mistakes: Vec::new(),
            default_drills: Vec::new(),
        }
    }

    pub fn advantages<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.advantages = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn common_mistakes<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_mistakes = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn default_drill(mut self, drill: DrillPrescription) -> Self {
        self.default_drills.push(drill);
        self
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
