use crate::error::{create_curator_error, create_curator_error_result, CuratorError, CuratorErrorKind};
use crate::model::{AppConfig, ChannelGroups, ChannelOverride, ChannelOverrides, ConfigOptions};
use crate::utils::{get_trimmed_string, DEFAULT_ENV_FILE, ENV_CHANNEL_GROUPS, ENV_CHANNEL_OVERRIDES_FILE, ENV_SOURCE_URL};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Loads the dotenv file into the process environment. Already set variables are kept.
///
/// Without an explicit file a missing `.env` is fine, an explicitly given one must exist.
pub fn load_env_file(env_file: Option<&str>) -> Result<Option<PathBuf>, CuratorError> {
    match env_file {
        Some(path) => dotenvy::from_path(path)
            .map(|()| Some(PathBuf::from(path)))
            .map_err(|err| create_curator_error!(CuratorErrorKind::Config, "Can't load env file {path}: {err}")),
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(err) if err.not_found() => Ok(None),
            Err(err) => create_curator_error_result!(CuratorErrorKind::Config, "Can't load env file {DEFAULT_ENV_FILE}: {err}"),
        },
    }
}

pub fn read_channel_overrides_file(path: &Path) -> Result<IndexMap<String, ChannelOverride>, CuratorError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| create_curator_error!(CuratorErrorKind::Config, "Can't read overrides file {}: {err}", path.display()))?;
    serde_yaml::from_str::<IndexMap<String, ChannelOverride>>(&content)
        .map_err(|err| create_curator_error!(CuratorErrorKind::Config, "Invalid overrides file {}: {err}", path.display()))
}

/// Builds the application config, environment values are resolved through `env_lookup`.
pub fn read_app_config_with<F>(options: &ConfigOptions, env_lookup: F) -> Result<AppConfig, CuratorError>
where
    F: Fn(&str) -> Option<String>,
{
    let source_url = get_trimmed_string(env_lookup(ENV_SOURCE_URL).as_deref());
    let channel_groups_raw = get_trimmed_string(env_lookup(ENV_CHANNEL_GROUPS).as_deref());
    let (Some(source_url), Some(channel_groups_raw)) = (source_url, channel_groups_raw) else {
        return create_curator_error_result!(CuratorErrorKind::Config, "{ENV_SOURCE_URL} or {ENV_CHANNEL_GROUPS} not set");
    };

    let channel_groups = ChannelGroups::from_json(&channel_groups_raw)?;

    let overrides_file = options.overrides_file.clone()
        .or_else(|| get_trimmed_string(env_lookup(ENV_CHANNEL_OVERRIDES_FILE).as_deref()))
        .map(PathBuf::from);
    let mut channel_overrides = ChannelOverrides::builtin();
    if let Some(path) = overrides_file.as_ref() {
        channel_overrides.merge(read_channel_overrides_file(path)?);
    }

    Ok(AppConfig {
        source_url,
        channel_groups,
        channel_overrides,
        overrides_file,
        output_file: PathBuf::from(&options.output_file),
        header_comment: options.header_comment.clone(),
        timeout: options.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs),
    })
}

pub fn read_app_config(options: &ConfigOptions) -> Result<AppConfig, CuratorError> {
    read_app_config_with(options, |name| std::env::var(name).ok())
}
