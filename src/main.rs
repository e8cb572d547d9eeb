use clap::Parser;
use firstaid::core::config::{self, CliOverrides};
use firstaid::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "firstaid", about = "Terminal first-aid assistant")]
struct Args {
    /// Server base URL (e.g. http://localhost:5000)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Path of the ask endpoint on the server
    #[arg(long)]
    ask_path: Option<String>,

    /// Log level written to firstaid.log
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config();
    let resolved = config::resolve(
        file_config.as_ref().unwrap_or(&Default::default()),
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            ask_path: args.ask_path.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );

    // Initialize file logger - writes to firstaid.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("firstaid.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "First-aid client starting up against {}{}",
        resolved.base_url,
        resolved.ask_path
    );

    tui::run(resolved)
}
