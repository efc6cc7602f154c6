use crate::utils::ENV_LOG_LEVEL;
use env_logger::{Builder, Target};
use log::{info, LevelFilter};

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "reqwest::async_impl::client",
    "reqwest::connect",
    "hyper_util::client",
    "rustls",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

// Splits `info,reqwest=debug` into a default level and per-module levels.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut default_level = None;
    let mut module_levels = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Some((module, level)) = pair.split_once('=') {
            module_levels.push((module.trim().to_string(), get_log_level(level)));
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, module_levels)
}

pub fn init_logger(user_log_level: Option<&String>) {
    let env_log_level = std::env::var(ENV_LOG_LEVEL).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    // priority  CLI-Argument, Env-Var, Default
    let log_level = user_log_level
        .map(ToString::to_string)
        .or(env_log_level)
        .unwrap_or_else(|| "info".to_string());

    let (default_level, module_levels) = parse_log_levels(&log_level);
    log_builder.filter_level(default_level.unwrap_or(LevelFilter::Info));
    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }
    // explicitly configured modules win over the pinned defaults
    for (module, level) in &module_levels {
        log_builder.filter_module(module, *level);
    }
    log_builder.init();
    info!("Log Level {log_level}");
}
