use serde::{Deserialize, Serialize};

use super::utils::{lenient_bool, lenient_opt_string, lenient_string, lenient_u32};

/// One line of the lifting order, already ordered and annotated by the competition controller.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AthleteRow {
    #[serde(deserialize_with = "lenient_u32")]
    pub start_number: Option<u32>,
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    /// Shown verbatim; the controller may send "85", 85 or "(85)".
    #[serde(deserialize_with = "lenient_string")]
    pub requested_weight: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub next_attempt_no: Option<u32>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub masters_age_group: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub team_name: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_spacer: bool,
    /// Highlight tag(s): current, next, empty, good, fail, request, possibly combined ("current blink").
    #[serde(deserialize_with = "lenient_string")]
    pub classname: String,
}

impl AthleteRow {
    #[must_use]
    pub fn spacer() -> Self {
        Self {
            is_spacer: true,
            ..Self::default()
        }
    }

    /// The seven cell texts in column order: start, name, weight, next attempt, age group, category, team.
    #[must_use]
    pub fn cells(&self) -> [String; 7] {
        [
            self.start_number.map(|n| n.to_string()).unwrap_or_default(),
            self.full_name.clone(),
            self.requested_weight.clone(),
            self.next_attempt_no.map(|n| n.to_string()).unwrap_or_default(),
            self.masters_age_group.clone().unwrap_or_default(),
            self.category.clone(),
            self.team_name.clone(),
        ]
    }
}

/// Parses the embedded JSON array the controller sends. Bad input yields no rows.
#[must_use]
pub fn parse_rows(json: &str) -> Vec<AthleteRow> {
    if json.trim().is_empty() {
        return vec![];
    }
    match serde_json::from_str::<Vec<AthleteRow>>(json) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(error = %e, "could not parse lifting order rows, showing empty table");
            vec![]
        }
    }
}
