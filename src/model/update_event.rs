use serde::{Deserialize, Serialize};

use super::athlete::{AthleteRow, parse_rows};
use super::panel_state::PanelState;
use super::translations::Translations;
use super::utils::{lenient_bool, lenient_embedded_json, lenient_opt_bool, lenient_string};

/// What the competition controller pushes on every state change.
/// The row list and translation map arrive as embedded JSON text.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEvent {
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub group_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lifts_done: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub hidden: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub masters: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub fop_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub fop_state: String,
    #[serde(deserialize_with = "lenient_opt_bool")]
    pub is_break: Option<bool>,
    /// Usually embedded JSON text; an inline array is accepted too.
    #[serde(deserialize_with = "lenient_embedded_json")]
    pub lifting_order_athletes: Option<String>,
    #[serde(deserialize_with = "lenient_embedded_json")]
    pub translation_map: Option<String>,
}

impl UpdateEvent {
    #[must_use]
    pub fn panel_state(&self) -> PanelState {
        PanelState {
            full_name: self.full_name.clone(),
            group_name: self.group_name.clone(),
            lifts_done: self.lifts_done.clone(),
            masters: self.masters,
            hidden: self.hidden,
        }
    }

    #[must_use]
    pub fn rows(&self) -> Vec<AthleteRow> {
        self.lifting_order_athletes
            .as_deref()
            .map(parse_rows)
            .unwrap_or_default()
    }

    /// `None` when the event carries no usable map, so the previous translations stay.
    #[must_use]
    pub fn translations(&self) -> Option<Translations> {
        let json = self.translation_map.as_deref()?;
        match Translations::from_json(json) {
            Ok(t) if !t.is_empty() => Some(t),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unparsable translation map");
                None
            }
        }
    }
}
