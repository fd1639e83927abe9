use maud::{Markup, PreEscaped, html};
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

use crate::model::{AthleteRow, COLUMN_KEYS, PanelState, Translations};

pub const HIDDEN_STYLE: &str = "display:none";
pub const SHOWN_STYLE: &str = "display:block";
pub const MASTERS_VISIBLE: &str = "masters-column-visible";
pub const MASTERS_HIDDEN: &str = "masters-column-hidden";

#[must_use]
pub fn is_hidden(hidden: bool) -> &'static str {
    if hidden { HIDDEN_STYLE } else { SHOWN_STYLE }
}

#[must_use]
pub fn master_column_visibility(masters: bool) -> &'static str {
    if masters { MASTERS_VISIBLE } else { MASTERS_HIDDEN }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Visibility::Visible => "visibility:visible",
            Visibility::Hidden => "visibility:hidden",
        }
    }
}

/// The table has a third state: a break forces it to block display instead of toggling visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableDisplay {
    Visible,
    Hidden,
    Block,
}

impl TableDisplay {
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            TableDisplay::Visible => "visibility:visible",
            TableDisplay::Hidden => "visibility:hidden",
            TableDisplay::Block => "",
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        !matches!(self, TableDisplay::Hidden)
    }
}

/// Lifecycle-driven visibility. The athlete name is always laid out as a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub group: Visibility,
    pub table: TableDisplay,
}

impl PanelVisibility {
    #[must_use]
    pub fn is_fully_visible(&self) -> bool {
        self.group == Visibility::Visible && self.table.is_shown()
    }
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            group: Visibility::Visible,
            table: TableDisplay::Visible,
        }
    }
}

/// The lifting order panel: owns its visibility flags, renders snapshots it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreboardPanel {
    visibility: PanelVisibility,
}

impl ScoreboardPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn on_start(&mut self) {
        tracing::debug!("start");
        self.show_all();
    }

    pub fn on_reset(&mut self) {
        tracing::debug!("reset");
        self.show_all();
    }

    pub fn on_break(&mut self) {
        tracing::debug!("break");
        self.visibility.group = Visibility::Visible;
        self.visibility.table = TableDisplay::Block;
    }

    pub fn on_group_done(&mut self) {
        tracing::debug!("done");
        self.visibility.group = Visibility::Hidden;
        self.visibility.table = TableDisplay::Hidden;
    }

    pub fn on_down(&self) {
        tracing::debug!("down");
    }

    pub fn on_referee_decision(&self) {
        tracing::debug!("refereeDecision");
    }

    fn show_all(&mut self) {
        self.visibility = PanelVisibility::default();
    }

    /// Renders the panel. A failure while rendering leaves the panel empty instead of propagating.
    #[must_use]
    pub fn render(&self, state: &PanelState, rows: &[AthleteRow], t: &Translations) -> Markup {
        let visibility = self.visibility;
        render_guarded(|| render_panel(visibility, state, rows, t))
    }
}

fn render_guarded(render: impl FnOnce() -> Markup) -> Markup {
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(markup) => markup,
        Err(_) => {
            tracing::error!("lifting order render failed, showing nothing");
            html! {}
        }
    }
}

fn element_style(hidden: bool, lifecycle: &str) -> String {
    if hidden || lifecycle.is_empty() {
        is_hidden(hidden).to_string()
    } else {
        format!("{};{lifecycle}", is_hidden(hidden))
    }
}

#[must_use]
pub fn render_panel(
    visibility: PanelVisibility,
    state: &PanelState,
    rows: &[AthleteRow],
    t: &Translations,
) -> Markup {
    let hidden_style = is_hidden(state.hidden);
    let masters_class = master_column_visibility(state.masters);

    html! {
        div class="wrapper" {
            div class="attemptBar" style=(hidden_style) {
                div class="athleteInfo" id="athleteInfoDiv" style=(hidden_style) {
                    div class="fullName" id="fullNameDiv" style=(SHOWN_STYLE) {
                        (PreEscaped(&state.full_name))
                    }
                }
            }
            div class="group" id="groupDiv" style=(element_style(state.hidden, visibility.group.style())) {
                span class="groupName" { (state.group_name) }
                " \u{2013} "
                span class="liftsDone" { (state.lifts_done) }
            }
            table class="results" id="orderDiv" width="100%"
                style=(element_style(state.hidden, visibility.table.style())) {
                thead {
                    (render_header(t, masters_class))
                }
                tbody {
                    @for row in rows {
                        (render_row(row, masters_class))
                    }
                }
            }
        }
    }
}

fn render_header(t: &Translations, masters_class: &str) -> Markup {
    let [start, name, weight, next, age_group, category, team] = COLUMN_KEYS;
    html! {
        tr {
            th width="5%" style="text-align: center;" { (PreEscaped(t.scoreboard(start))) }
            th width="30%" { (PreEscaped(t.scoreboard(name))) }
            th width="9%" class="narrow" { (PreEscaped(t.scoreboard(weight))) }
            th width="9%" class="narrow" { (PreEscaped(t.scoreboard(next))) }
            th width="9%" class=(masters_class) { (PreEscaped(t.scoreboard(age_group))) }
            th width="9%" { (PreEscaped(t.scoreboard(category))) }
            th width="20%" class="club" { (PreEscaped(t.scoreboard(team))) }
        }
    }
}

#[must_use]
pub fn render_row(row: &AthleteRow, masters_class: &str) -> Markup {
    if row.is_spacer {
        return html! {
            tr class="spacer" {
                td class="spacer" colspan="7" style="height:0.1ex; border:none" {}
            }
        };
    }

    let [start, name, weight, next, age_group, category, team] = row.cells();
    let highlight = row.classname.trim();
    let name_class = if highlight.is_empty() {
        "ellipsis".to_string()
    } else {
        format!("{highlight} ellipsis")
    };

    html! {
        tr {
            td width="5%" style="text-align: center;" class=(highlight) { (start) }
            td width="30%" class=(name_class) { (name) }
            td width="9%" class=(highlight) style="text-align: center;" { (weight) }
            td width="9%" class=(highlight) style="text-align: center;" { (next) }
            td width="9%" class=(masters_class) { (age_group) }
            td width="9%" style="text-align: center;" { (category) }
            td width="20%" class="club ellipsis" { (team) }
        }
    }
}
