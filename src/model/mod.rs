pub mod athlete;
pub mod panel_state;
pub mod translations;
pub mod update_event;
pub mod utils;

pub use athlete::*;
pub use panel_state::*;
pub use translations::*;
pub use update_event::*;
pub use utils::*;
