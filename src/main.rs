use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use bibliotheque::YearPolicy;
use bibliotheque::console;
use bibliotheque::core::config;
use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "bibliotheque", about = "In-memory book tracker with a text menu")]
struct Args {
    /// What to do when the publication year is not an integer
    #[arg(long, value_enum)]
    year_policy: Option<YearPolicy>,

    /// Config file to use instead of ~/.bibliotheque/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "bibliotheque.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the console belongs to the menu
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let log_level = config::resolve_log_level(args.log_level.as_deref());

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(log_level, log_config, log_file);
    }

    info!("Bibliotheque starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}; using default settings");
            warn!("Falling back to default config: {}", e);
            config::BibliothequeConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.year_policy);
    info!("Resolved config: {:?}", resolved);

    match console::run(&resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session ended with an error: {}", e);
            eprintln!("Erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
