use regex::Regex;
use std::sync::LazyLock;

pub const ENV_SOURCE_URL: &str = "SOURCE_URL";
pub const ENV_CHANNEL_GROUPS: &str = "CHANNEL_GROUPS";
pub const ENV_CHANNEL_OVERRIDES_FILE: &str = "CHANNEL_OVERRIDES_FILE";
pub const ENV_LOG_LEVEL: &str = "PLAYLIST_CURATOR_LOG";

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_OUTPUT_FILE: &str = "Zee.m3u";
pub const DEFAULT_HEADER_COMMENT: &str = "Updated By Himanshu";
pub const DEFAULT_USER_AGENT: &str = concat!("playlist-curator/", env!("CARGO_PKG_VERSION"));

pub const M3U_HEADER: &str = "#EXTM3U";
pub const M3U_NO_MATCH_COMMENT: &str = "# No matching channels found";
pub const EXTINF_PREFIX: &str = "#EXTINF:";
pub const EXTVLCOPT_PREFIX: &str = "#EXTVLCOPT:";
pub const URL_PREFIX: &str = "http";

pub struct Constants {
    pub re_credentials: Regex,
    pub re_sensitive_query: Regex,
    pub re_group_title: Regex,
}

#[allow(clippy::expect_used)]
pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| Constants {
    re_credentials: Regex::new(r"(://[^:/@\s]+:)[^@/\s]+@").expect("invalid credentials regex"),
    re_sensitive_query: Regex::new(r"(?i)((?:username|password|token)=)[^&\s]+").expect("invalid query regex"),
    re_group_title: Regex::new(r#"group-title=".*?""#).expect("invalid group-title regex"),
});
