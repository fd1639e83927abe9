use clap::Parser;

use crate::model::{Theme, Translations};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// JSON object of resolved headings, e.g. {"Scoreboard.Name": "Name", ...}. Updates may replace it.
    #[arg(
        short = 't',
        long,
        value_name = "TRANSLATIONS_JSON",
        value_parser = crate::args::validation::check_readable_translations
    )]
    pub translations: Option<Translations>,
    /// dark or light
    #[arg(long, value_name = "THEME", default_value = "dark")]
    pub theme: Theme,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
    /// Used when RUST_LOG is not set.
    #[arg(long, value_name = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind_addr: String,
    pub translations: Translations,
    pub theme: Theme,
    pub static_dir: String,
    pub log_level: String,
}
