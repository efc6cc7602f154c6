use crate::error::{create_curator_error, create_curator_error_result, CuratorError, CuratorErrorKind};
use crate::model::AppConfig;
use crate::utils::{get_local_file_content, sanitize_sensitive_info, DEFAULT_USER_AGENT};
use crate::debug_if_enabled;
use log::error;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Where the playlist text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Remote(Url),
    Local(PathBuf),
}

impl InputSource {
    /// `http(s)` urls are downloaded, `file` urls and everything that is no url are read from disk.
    pub fn from_location(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            Ok(url) if url.scheme() == "file" => url.to_file_path()
                .map_or_else(|()| Self::Local(PathBuf::from(location)), Self::Local),
            _ => Self::Local(PathBuf::from(location)),
        }
    }
}

pub fn format_http_status(status: StatusCode) -> String {
    let code = status.as_u16();
    match status.canonical_reason() {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}

pub fn create_client(cfg: &AppConfig) -> reqwest::ClientBuilder {
    let mut client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .pool_idle_timeout(Duration::from_secs(30))
        .user_agent(DEFAULT_USER_AGENT);
    if let Some(timeout) = cfg.timeout {
        client = client.timeout(timeout);
    }
    client
}

pub async fn download_text_content(client: &reqwest::Client, url: &Url) -> Result<String, CuratorError> {
    debug_if_enabled!("downloading {}", sanitize_sensitive_info(url.as_str()));
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return create_curator_error_result!(CuratorErrorKind::Fetch,
                    "Request failed with status {} {}", format_http_status(status), url.as_str());
            }
            response.text().await.map_err(|err| {
                create_curator_error!(CuratorErrorKind::Fetch, "Failed to read response from {}: {err}", url.as_str())
            })
        }
        Err(err) => {
            error!("Received failure from server {}: {}",
                sanitize_sensitive_info(url.as_str()),
                sanitize_sensitive_info(err.to_string().as_str()));
            create_curator_error_result!(CuratorErrorKind::Fetch, "Request failed: {} {err}", url.as_str())
        }
    }
}

pub async fn get_input_text_content(client: &reqwest::Client, input: &InputSource) -> Result<String, CuratorError> {
    match input {
        InputSource::Remote(url) => download_text_content(client, url).await,
        InputSource::Local(path) => {
            if !path.exists() {
                return create_curator_error_result!(CuratorErrorKind::Fetch, "can't read input: file does not exist {}", path.display());
            }
            get_local_file_content(path).await.map_err(|err| {
                create_curator_error!(CuratorErrorKind::Fetch, "can't read input {}: {err}", path.display())
            })
        }
    }
}
