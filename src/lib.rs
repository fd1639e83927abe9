pub mod args;
pub mod model;
pub mod controller {
    pub mod liftingorder;
}
pub mod mvu {
    pub mod error;
    pub mod panel;
    pub mod runtime;
}
pub mod view {
    pub mod index;
    pub mod liftingorder;
}

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use controller::liftingorder::{SharedPanel, configure, shared_panel};
pub use model::{AthleteRow, PanelState, Theme, Translations, UpdateEvent};
pub use view::liftingorder::{ScoreboardPanel, is_hidden, master_column_visibility};
