use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::mvu::error::AppError;

/// Parses the command line and folds it into `CleanArgs`.
///
/// # Errors
///
/// Will return `Err` if the arguments are inconsistent.
pub fn args_checks() -> Result<CleanArgs, AppError> {
    let args = Args::parse();
    args.validate().map_err(AppError::from)?;
    Ok(CleanArgs::new(args))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind_addr: format!("{}:{}", args.host, args.port),
            translations: args.translations.unwrap_or_default(),
            theme: args.theme,
            static_dir: args.static_dir,
            log_level: args.log_level,
        }
    }
}
