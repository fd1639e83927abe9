use liftingorder::args;
use liftingorder::controller::liftingorder::{configure, shared_panel};
use liftingorder::mvu::panel::PanelModel;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks()?;
    init_logging(&args.log_level);

    let shared = shared_panel(PanelModel::new(args.translations.clone(), args.theme));
    let static_dir = args.static_dir.clone();

    tracing::info!(addr = %args.bind_addr, theme = %args.theme, "starting lifting order display");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(shared.clone()))
            .configure(configure)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(&args.bind_addr)?
    .run()
    .await?;
    Ok(())
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
