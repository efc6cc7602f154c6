use crate::error::{create_curator_error, CuratorError, CuratorErrorKind};
use crate::model::PlaylistEntry;
use crate::utils::{async_file_writer, set_world_read_write, M3U_HEADER, M3U_NO_MATCH_COMMENT};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

macro_rules! await_playlist_write {
    ($expr:expr, $fmt:literal $(, $args:expr)* ) => {{
        $expr.await.map_err(|err| {
            create_curator_error!(CuratorErrorKind::Write, $fmt $(, $args)*, err)
        })?
    }};
}

pub fn render_m3u_playlist(header_comment: &str, playlist: &[PlaylistEntry]) -> String {
    if playlist.is_empty() {
        return format!("{M3U_HEADER}\n{M3U_NO_MATCH_COMMENT}\n");
    }
    let mut content = format!("{M3U_HEADER}\n# {header_comment}\n\n");
    for entry in playlist {
        content.push_str(&entry.to_m3u());
        content.push('\n');
    }
    content
}

pub async fn m3u_write_playlist(path: &Path, header_comment: &str, playlist: &[PlaylistEntry]) -> Result<(), CuratorError> {
    let content = render_m3u_playlist(header_comment, playlist);
    let file = await_playlist_write!(fs::File::create(path), "Can't write m3u playlist {} - {}", path.display());
    let mut writer = async_file_writer(file);
    await_playlist_write!(writer.write_all(content.as_bytes()), "Failed to write playlist to {} - {}", path.display());
    await_playlist_write!(writer.flush(), "Failed to flush {} - {}", path.display());
    drop(writer);
    await_playlist_write!(set_world_read_write(path), "Failed to set permissions of {} - {}", path.display());
    Ok(())
}
