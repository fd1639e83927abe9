use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{UpdateEvent, format_time_ago};
use crate::mvu::error::AppError;
use crate::mvu::panel::{Lifecycle, Msg, PanelModel};
use crate::mvu::runtime::run_panel;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};

pub type SharedPanel = Arc<RwLock<PanelModel>>;

#[must_use]
pub fn shared_panel(model: PanelModel) -> SharedPanel {
    Arc::new(RwLock::new(model))
}

/// Registers the display routes; the caller supplies `Data<SharedPanel>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/panel", web::get().to(panel))
        .route("/state", web::get().to(state))
        .route("/update", web::post().to(push_update))
        .route("/lifecycle/{event}", web::post().to(lifecycle))
        .route("/health", web::get().to(HttpResponse::Ok));
}

fn bad_request(e: &AppError) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
}

#[must_use]
pub fn page_title(model: &PanelModel) -> String {
    let display = model.translations.scoreboard("LiftingOrder");
    let base = if display.is_empty() {
        DEFAULT_INDEX_TITLE
    } else {
        display
    };
    if model.fop_name.is_empty() {
        base.to_string()
    } else {
        format!("{base} - {}", model.fop_name)
    }
}

pub async fn index(shared: Data<SharedPanel>) -> impl Responder {
    let model = shared.read().await;
    let markup = render_index_template(&page_title(&model), model.theme);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn panel(shared: Data<SharedPanel>) -> impl Responder {
    let model = shared.read().await;
    let markup = match &model.markup {
        Some(m) => m.clone(),
        None => model
            .panel
            .render(&model.state, &model.rows, &model.translations),
    };
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn state(shared: Data<SharedPanel>) -> impl Responder {
    let model = shared.read().await;
    let since = model
        .last_update
        .map(|t| format_time_ago(chrono::Utc::now() - t));
    HttpResponse::Ok().json(json!({
        "state": model.state,
        "athletes": model.rows,
        "visibility": model.panel.visibility(),
        "theme": model.theme,
        "lastUpdate": model.last_update.map(|t| t.to_rfc3339()),
        "sinceLastUpdate": since,
    }))
}

pub async fn push_update(shared: Data<SharedPanel>, body: web::Bytes) -> impl Responder {
    let event: UpdateEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting malformed update");
            return bad_request(&AppError::from(e));
        }
    };

    let mut model = shared.write().await;
    run_panel(&mut model, Msg::Update(Box::new(event)));
    HttpResponse::NoContent().finish()
}

pub async fn lifecycle(shared: Data<SharedPanel>, path: web::Path<String>) -> impl Responder {
    let event: Lifecycle = match path.parse() {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting lifecycle call");
            return bad_request(&e);
        }
    };

    let mut model = shared.write().await;
    run_panel(&mut model, Msg::from(event));
    HttpResponse::NoContent().finish()
}
