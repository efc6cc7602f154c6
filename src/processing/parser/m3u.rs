use crate::model::PlaylistEntry;
use crate::utils::{EXTINF_PREFIX, EXTVLCOPT_PREFIX, URL_PREFIX};

#[inline]
fn is_entry_block(extinf: &str, vlc_opt: &str, url: &str) -> bool {
    extinf.starts_with(EXTINF_PREFIX) && vlc_opt.starts_with(EXTVLCOPT_PREFIX) && url.starts_with(URL_PREFIX)
}

/// The channel name is the free text after the last comma of the `#EXTINF` line.
pub fn extract_channel_name(extinf: &str) -> &str {
    extinf.rsplit(',').next().unwrap_or(extinf).trim()
}

/// Visits every well-formed 3-line block in input order.
/// Stray lines are skipped one at a time, so a broken block never shifts the following ones.
pub fn consume_m3u<F: FnMut(&str, &str, &str)>(lines: &[&str], mut visit: F) {
    let mut cursor = 0;
    while cursor + 2 < lines.len() {
        let (extinf, vlc_opt, url) = (lines[cursor], lines[cursor + 1], lines[cursor + 2]);
        if is_entry_block(extinf, vlc_opt, url) {
            visit(extinf, vlc_opt, url);
            cursor += 3;
        } else {
            cursor += 1;
        }
    }
}

/// Splits on `\n`, `\r\n` and a lone `\r`. Empty lines are kept, a final terminator adds no line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut rest = content;
    while let Some(pos) = rest.find(['\n', '\r']) {
        lines.push(&rest[..pos]);
        let terminator_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator_len..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

pub fn parse_m3u(content: &str) -> Vec<PlaylistEntry> {
    let lines = split_lines(content);
    let mut entries = vec![];
    consume_m3u(&lines, |extinf, vlc_opt, url| entries.push(PlaylistEntry::new(extinf, vlc_opt, url)));
    entries
}
