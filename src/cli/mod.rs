use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[clap(version)]
/// Render a text file onto an A4 page and save it as `out.png`
pub struct Options {
    /// The text file to render
    pub file: PathBuf,
}

/// Set up CLI
pub fn init<T: Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("TXT2PNG_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}
