use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::Theme;

pub const DEFAULT_INDEX_TITLE: &str = "Lifting Order";

/// Page shell. The panel itself is fetched from `panel` and refreshed by htmx.
#[must_use]
pub fn render_index_template(title: &str, theme: Theme) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/liftingorder.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body class=(theme.css_class()) {
            div id="liftingorder" class=(theme.css_class())
                hx-get="panel" hx-trigger="load, every 1s" hx-swap="innerHTML" {
            }
        }
    }
}
