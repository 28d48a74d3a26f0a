use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use stockpile::core::config::{CliOverrides, StockpileConfig, load_config, resolve};
use stockpile::core::inventory::Inventory;
use stockpile::tui;

#[derive(Parser)]
#[command(name = "stockpile", about = "Terminal inventory manager")]
struct Args {
    /// Inventory file to open
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Logging is not up yet; config errors are reported once it is
    let (file_config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (StockpileConfig::default(), Some(e)),
    };
    let config = resolve(
        &file_config,
        &CliOverrides {
            data_file: args.data,
            log_file: args.log_file,
            log_level: args.log_level,
        },
    );

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {e}");
    }

    let mut inventory = Inventory::open(&config.data_file);
    log::info!(
        "Stockpile starting with {} products from {}",
        inventory.len(),
        config.data_file.display()
    );

    let result = tui::run(&config, &mut inventory);
    log::info!("Stockpile shut down");
    result
}
