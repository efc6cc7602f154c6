use crate::model::{ChannelGroups, ChannelOverrides};
use std::path::PathBuf;
use std::time::Duration;

/// Settings handed over from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub overrides_file: Option<String>,
    pub output_file: String,
    pub header_comment: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_url: String,
    pub channel_groups: ChannelGroups,
    pub channel_overrides: ChannelOverrides,
    pub overrides_file: Option<PathBuf>,
    pub output_file: PathBuf,
    pub header_comment: String,
    pub timeout: Option<Duration>,
}
