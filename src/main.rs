#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod model;
mod processing;
mod repository;
mod utils;

use crate::model::{AppConfig, ConfigOptions};
use crate::processing::processor::playlist;
use crate::utils::request::create_client;
use crate::utils::{init_logger, load_env_file, read_app_config, sanitize_sensitive_info, DEFAULT_HEADER_COMMENT, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use log::{debug, info, warn};

#[derive(Parser)]
#[command(name = "playlist-curator")]
#[command(version)]
#[command(about = "Filters an IPTV playlist by channel allow-list and rewrites channel metadata", long_about = None)]
struct Args {
    /// The output playlist file
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_FILE)]
    output: String,

    /// The dotenv file, defaults to .env when present
    #[arg(short = 'e', long = "env-file")]
    env_file: Option<String>,

    /// YAML or JSON file with additional channel overrides
    #[arg(short = 'r', long = "overrides")]
    overrides: Option<String>,

    /// The comment written below the playlist header
    #[arg(short = 'c', long = "comment", default_value = DEFAULT_HEADER_COMMENT)]
    comment: String,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout")]
    timeout: Option<u64>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // the env file may carry the log level, so it is loaded before the logger
    let env_file = load_env_file(args.env_file.as_deref());
    init_logger(args.log_level.as_ref());

    info!("Version: {VERSION}");
    match env_file {
        Ok(Some(path)) => info!("Env file: {}", path.display()),
        Ok(None) => debug!("No env file found"),
        Err(err) => exit!("{err}"),
    }

    let options = ConfigOptions {
        overrides_file: args.overrides,
        output_file: args.output,
        header_comment: args.comment,
        timeout_secs: args.timeout,
    };
    let app_config = read_app_config(&options).unwrap_or_else(|err| exit!("{err}"));
    print_info(&app_config);

    let client = create_client(&app_config).build().unwrap_or_else(|err| exit!("Failed to build client {err}"));
    if let Err(err) = playlist::exec_processing(&client, &app_config).await {
        exit!("{err}");
    }
}

fn print_info(app_config: &AppConfig) {
    info!("Current time: {}", chrono::offset::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("Source: {}", sanitize_sensitive_info(&app_config.source_url));
    info!("Output file: {}", app_config.output_file.display());
    info!("Channel groups: {}, allowed channels: {}", app_config.channel_groups.group_count(), app_config.channel_groups.channel_count());
    if app_config.channel_groups.is_empty() {
        warn!("No channels configured, the playlist will be empty");
    }
    info!("Channel overrides: {}", app_config.channel_overrides.len());
    if let Some(path) = app_config.overrides_file.as_ref() {
        info!("Overrides file: {}", path.display());
    }
    if let Some(timeout) = app_config.timeout {
        info!("Request timeout: {}s", timeout.as_secs());
    }
}
