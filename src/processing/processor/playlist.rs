use crate::error::CuratorError;
use crate::model::{AppConfig, ChannelGroups, ChannelOverrides, PlaylistEntry};
use crate::processing::parser::m3u::extract_channel_name;
use crate::repository::m3u_repository;
use crate::utils::m3u::download_m3u_playlist;
use crate::utils::CONSTANTS;
use crate::debug_if_enabled;
use log::{info, warn};
use regex::NoExpand;

/// Sets the `group-title` attribute, keeping every other part of the line.
/// Without the attribute it is inserted in front of the comma that starts the channel name.
fn set_group_title(extinf: &str, group: &str) -> String {
    let group_title = format!("group-title=\"{group}\"");
    if extinf.contains("group-title=\"") {
        CONSTANTS.re_group_title.replace_all(extinf, NoExpand(&group_title)).into_owned()
    } else if let Some(pos) = extinf.rfind(',') {
        format!("{} {group_title}{}", &extinf[..pos], &extinf[pos..])
    } else {
        extinf.to_string()
    }
}

pub fn rewrite_extinf(extinf: &str, channel_name: &str, group: &str, overrides: &ChannelOverrides) -> String {
    match overrides.get(channel_name) {
        Some(channel_override) => channel_override.to_extinf(group, channel_name),
        None => set_group_title(extinf, group),
    }
}

/// Keeps the allow-listed entries in input order and rewrites their `#EXTINF` line.
pub fn process_playlist(entries: Vec<PlaylistEntry>, groups: &ChannelGroups, overrides: &ChannelOverrides) -> Vec<PlaylistEntry> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let channel_name = extract_channel_name(&entry.extinf);
            let group = groups.get_group(channel_name)?;
            let extinf = rewrite_extinf(&entry.extinf, channel_name, group, overrides);
            Some(PlaylistEntry { extinf, ..entry })
        })
        .collect()
}

pub async fn exec_processing(client: &reqwest::Client, cfg: &AppConfig) -> Result<usize, CuratorError> {
    let entries = download_m3u_playlist(client, cfg).await?;
    let entry_count = entries.len();
    let playlist = process_playlist(entries, &cfg.channel_groups, &cfg.channel_overrides);
    debug_if_enabled!("{} of {} playlist entries matched", playlist.len(), entry_count);

    if playlist.is_empty() {
        warn!("No matching channels found.");
    } else {
        info!("Found {} categorized channels.", playlist.len());
    }

    m3u_repository::m3u_write_playlist(&cfg.output_file, &cfg.header_comment, &playlist).await?;
    info!("'{}' written successfully.", cfg.output_file.display());
    Ok(playlist.len())
}

#[cfg(test)]
mod tests {
    use crate::error::CuratorErrorKind;
    use crate::model::{AppConfig, ChannelGroups, ChannelOverrides, PlaylistEntry};
    use crate::processing::parser::m3u::parse_m3u;
    use crate::processing::processor::playlist::{exec_processing, process_playlist, rewrite_extinf, set_group_title};
    use crate::utils::request::create_client;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const VLC_OPT: &str = "#EXTVLCOPT:http-user-agent=Mozilla/5.0";

    fn groups() -> ChannelGroups {
        ChannelGroups::from_json(r#"{"News": ["Aaj Tak", "Zee News"], "Entertainment": ["Star Plus", "Zee TV"]}"#).unwrap()
    }

    fn app_config(source_url: String, output_file: PathBuf) -> AppConfig {
        AppConfig {
            source_url,
            channel_groups: groups(),
            channel_overrides: ChannelOverrides::builtin(),
            overrides_file: None,
            output_file,
            header_comment: "test run".to_string(),
            timeout: Some(Duration::from_secs(5)),
        }
    }

    // answers exactly one request with the given status and body
    async fn serve_once(status_line: &'static str, body: String) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!("HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}", body.len());
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        addr
    }

    fn sample_playlist() -> String {
        format!(
            "#EXTM3U\n\
             #EXTINF:-1 tvg-name=\"a, b\",Star Plus\n{VLC_OPT}\nhttp://s/star.m3u8\n\
             #EXTINF:-1,Sony SAB\n{VLC_OPT}\nhttp://s/sab.m3u8\n\
             #EXTINF:-1 tvg-id=\"x\",Zee News\n{VLC_OPT}\nhttp://s/zee.m3u8\n"
        )
    }

    fn expected_output() -> String {
        format!(
            "#EXTM3U\n# test run\n\n\
             #EXTINF:-1 tvg-name=\"a, b\" group-title=\"Entertainment\",Star Plus\n{VLC_OPT}\nhttp://s/star.m3u8\n\
             #EXTINF:-1 tvg-id=\"ts259\" tvg-name=\"Zee News\" tvg-logo=\"https://jiotvimages.cdn.jio.com/dare_images/images/Zee_News.png\" group-title=\"News\",Zee News\n{VLC_OPT}\nhttp://s/zee.m3u8\n"
        )
    }

    #[test]
    fn test_set_group_title_replace() {
        let line = r#"#EXTINF:-1 tvg-id="sp" group-title="Old Group" tvg-logo="l.png",Star Plus"#;
        assert_eq!(set_group_title(line, "Entertainment"), r#"#EXTINF:-1 tvg-id="sp" group-title="Entertainment" tvg-logo="l.png",Star Plus"#);
    }

    #[test]
    fn test_set_group_title_insert() {
        let line = r#"#EXTINF:-1 tvg-id="sp",Star Plus"#;
        assert_eq!(set_group_title(line, "Entertainment"), r#"#EXTINF:-1 tvg-id="sp" group-title="Entertainment",Star Plus"#);
    }

    #[test]
    fn test_set_group_title_insert_keeps_quoted_comma() {
        let line = r#"#EXTINF:-1 tvg-name="a, b",Star Plus"#;
        assert_eq!(set_group_title(line, "Ent"), r#"#EXTINF:-1 tvg-name="a, b" group-title="Ent",Star Plus"#);
    }

    #[test]
    fn test_set_group_title_literal_dollar() {
        let line = r#"#EXTINF:-1 group-title="x",Star Plus"#;
        assert_eq!(set_group_title(line, "$1 Deals"), r#"#EXTINF:-1 group-title="$1 Deals",Star Plus"#);
    }

    #[test]
    fn test_rewrite_with_override() {
        let overrides = ChannelOverrides::builtin();
        let line = r#"#EXTINF:-1 tvg-id="other" tvg-logo="old.png" group-title="Misc" catchup="append",zee news"#;
        assert_eq!(
            rewrite_extinf(line, "zee news", "News", &overrides),
            r#"#EXTINF:-1 tvg-id="ts259" tvg-name="Zee News" tvg-logo="https://jiotvimages.cdn.jio.com/dare_images/images/Zee_News.png" group-title="News",Zee News"#
        );
    }

    #[test]
    fn test_process_playlist() {
        let content = format!(
            "#EXTM3U\n\
             #EXTINF:-1 group-title=\"Hindi\",Star Plus\n{VLC_OPT}\nhttp://s/star.m3u8\n\
             #EXTINF:-1,Sony SAB\n{VLC_OPT}\nhttp://s/sab.m3u8\n\
             stray line\n\
             #EXTINF:-1 tvg-id=\"x\",AAJ TAK\n{VLC_OPT}\nhttp://s/aaj.m3u8\n"
        );
        let result = process_playlist(parse_m3u(&content), &groups(), &ChannelOverrides::builtin());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], PlaylistEntry::new("#EXTINF:-1 group-title=\"Entertainment\",Star Plus", VLC_OPT, "http://s/star.m3u8"));
        assert_eq!(result[1].extinf, r#"#EXTINF:-1 tvg-id="ts689" tvg-name="Aaj Tak" tvg-logo="https://jiotvimages.cdn.jio.com/dare_images/images/Aaj_Tak.png" group-title="News",Aaj Tak"#);
        assert_eq!(result[1].vlc_opt, VLC_OPT);
        assert_eq!(result[1].url, "http://s/aaj.m3u8");
    }

    #[test]
    fn test_process_playlist_no_match() {
        let content = format!("#EXTINF:-1,Sony SAB\n{VLC_OPT}\nhttp://s/sab.m3u8\n");
        assert!(process_playlist(parse_m3u(&content), &groups(), &ChannelOverrides::builtin()).is_empty());
    }

    #[test]
    fn test_process_playlist_is_deterministic() {
        let content = format!("#EXTINF:-1,Zee TV\n{VLC_OPT}\nhttp://s/1.m3u8\n#EXTINF:-1,Star Plus\n{VLC_OPT}\nhttp://s/2.m3u8\n");
        let first = process_playlist(parse_m3u(&content), &groups(), &ChannelOverrides::builtin());
        let second = process_playlist(parse_m3u(&content), &groups(), &ChannelOverrides::builtin());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_exec_processing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.m3u");
        std::fs::write(&source, sample_playlist()).unwrap();
        let output = dir.path().join("Zee.m3u");
        let cfg = app_config(source.to_string_lossy().to_string(), output.clone());
        let client = create_client(&cfg).no_proxy().build().unwrap();

        let count = exec_processing(&client, &cfg).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), expected_output());
    }

    #[tokio::test]
    async fn test_exec_processing_http_source() {
        let addr = serve_once("200 OK", sample_playlist()).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Zee.m3u");
        let cfg = app_config(format!("http://{addr}/playlist.m3u"), output.clone());
        let client = create_client(&cfg).no_proxy().build().unwrap();

        assert_eq!(exec_processing(&client, &cfg).await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), expected_output());
    }

    #[tokio::test]
    async fn test_exec_processing_http_status_error() {
        let addr = serve_once("404 Not Found", String::new()).await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Zee.m3u");
        let cfg = app_config(format!("http://{addr}/playlist.m3u"), output.clone());
        let client = create_client(&cfg).no_proxy().build().unwrap();

        let err = exec_processing(&client, &cfg).await.unwrap_err();
        assert_eq!(err.kind, CuratorErrorKind::Fetch);
        assert!(err.message.contains("404 Not Found"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_exec_processing_connection_refused() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Zee.m3u");
        let cfg = app_config("http://127.0.0.1:1/playlist.m3u".to_string(), output.clone());
        let client = create_client(&cfg).no_proxy().build().unwrap();

        let err = exec_processing(&client, &cfg).await.unwrap_err();
        assert_eq!(err.kind, CuratorErrorKind::Fetch);
        assert!(!output.exists());
    }
}
