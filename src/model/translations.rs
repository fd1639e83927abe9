use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const PREFIX: &str = "Scoreboard.";

/// Column headings, in column order.
pub const COLUMN_KEYS: [&str; 7] = [
    "Start",
    "Name",
    "RequestedWeight",
    "NextAttempt",
    "AgeGroup",
    "Category",
    "Team",
];

/// Resolved strings supplied by the controller. Keys are the full identifiers, e.g. `Scoreboard.Name`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Translations(HashMap<String, String>);

impl Translations {
    /// Looks up `Scoreboard.<name>`; a missing entry is blank.
    #[must_use]
    pub fn scoreboard(&self, name: &str) -> &str {
        self.0
            .get(&format!("{PREFIX}{name}"))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the JSON object the controller embeds in its updates.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not a JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
