use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::utils::{lenient_bool, lenient_string};

/// Scalar fields shown around the lifting order table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelState {
    /// Markup fragment for the athlete on the bar, as formatted by the controller.
    #[serde(deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub group_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub lifts_done: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub masters: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub hidden: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}', expected dark or light")),
        }
    }
}
