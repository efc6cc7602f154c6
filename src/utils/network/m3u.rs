use crate::error::CuratorError;
use crate::model::{AppConfig, PlaylistEntry};
use crate::processing::parser::m3u;
use crate::utils::request::{get_input_text_content, InputSource};
use crate::utils::sanitize_sensitive_info;
use log::info;

pub async fn download_m3u_playlist(
    client: &reqwest::Client,
    cfg: &AppConfig,
) -> Result<Vec<PlaylistEntry>, CuratorError> {
    info!("Fetching playlist from: {}", sanitize_sensitive_info(&cfg.source_url));
    let input = InputSource::from_location(&cfg.source_url);
    let content = get_input_text_content(client, &input).await?;
    Ok(m3u::parse_m3u(&content))
}
