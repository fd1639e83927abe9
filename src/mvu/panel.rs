use chrono::{DateTime, Utc};
use maud::Markup;
use std::str::FromStr;

use super::error::AppError;
use crate::model::{AthleteRow, PanelState, Theme, Translations, UpdateEvent};
use crate::view::liftingorder::ScoreboardPanel;

/// Competition-flow notifications, named the way the controller sends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Start,
    Reset,
    Break,
    GroupDone,
    Down,
    RefereeDecision,
}

impl FromStr for Lifecycle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Lifecycle::Start),
            "reset" => Ok(Lifecycle::Reset),
            "break" => Ok(Lifecycle::Break),
            "groupdone" => Ok(Lifecycle::GroupDone),
            "down" => Ok(Lifecycle::Down),
            "refereedecision" => Ok(Lifecycle::RefereeDecision),
            _ => Err(AppError::BadRequest(format!("unknown lifecycle event '{s}'"))),
        }
    }
}

impl From<Lifecycle> for Msg {
    fn from(l: Lifecycle) -> Self {
        match l {
            Lifecycle::Start => Msg::Start,
            Lifecycle::Reset => Msg::Reset,
            Lifecycle::Break => Msg::Break,
            Lifecycle::GroupDone => Msg::GroupDone,
            Lifecycle::Down => Msg::Down,
            Lifecycle::RefereeDecision => Msg::RefereeDecision,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelModel {
    pub panel: ScoreboardPanel,
    pub state: PanelState,
    pub rows: Vec<AthleteRow>,
    pub translations: Translations,
    pub theme: Theme,
    pub fop_name: String,
    pub last_update: Option<DateTime<Utc>>,
    pub markup: Option<Markup>,
}

impl PanelModel {
    #[must_use]
    pub fn new(translations: Translations, theme: Theme) -> Self {
        Self {
            panel: ScoreboardPanel::new(),
            state: PanelState::default(),
            rows: vec![],
            translations,
            theme,
            fop_name: String::new(),
            last_update: None,
            markup: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Update(Box<UpdateEvent>),
    Start,
    Reset,
    Break,
    GroupDone,
    Down,
    RefereeDecision,
    Rendered(Markup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Render,
}

pub fn update(model: &mut PanelModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Update(event) => {
            model.state = event.panel_state();
            model.rows = event.rows();
            if let Some(t) = event.translations() {
                model.translations = t;
            }
            model.fop_name.clone_from(&event.fop_name);
            model.last_update = Some(Utc::now());
            tracing::debug!(
                rows = model.rows.len(),
                group = %model.state.group_name,
                fop_state = %event.fop_state,
                "lifting order updated"
            );
            if event.is_break == Some(true) {
                model.panel.on_break();
            }
            vec![Effect::Render]
        }
        Msg::Start => {
            model.panel.on_start();
            vec![Effect::Render]
        }
        Msg::Reset => {
            model.panel.on_reset();
            vec![Effect::Render]
        }
        Msg::Break => {
            model.panel.on_break();
            vec![Effect::Render]
        }
        Msg::GroupDone => {
            model.panel.on_group_done();
            vec![Effect::Render]
        }
        Msg::Down => {
            model.panel.on_down();
            vec![]
        }
        Msg::RefereeDecision => {
            model.panel.on_referee_decision();
            vec![]
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
    }
}

#[must_use]
pub fn run_effect(effect: Effect, model: &PanelModel) -> Msg {
    match effect {
        Effect::Render => Msg::Rendered(model.panel.render(
            &model.state,
            &model.rows,
            &model.translations,
        )),
    }
}
