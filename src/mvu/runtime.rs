use crate::mvu::panel::{Msg, PanelModel, run_effect, update};

/// Runs the MVU loop for the panel model: seeds with `init_msg` and drains effects.
pub fn run_panel(model: &mut PanelModel, init_msg: Msg) {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model);
        let next = update(model, msg);
        effects.extend(next);
    }
}
