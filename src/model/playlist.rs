/// One 3-line channel block: `#EXTINF`, `#EXTVLCOPT` and the stream url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub extinf: String,
    pub vlc_opt: String,
    pub url: String,
}

impl PlaylistEntry {
    pub fn new(extinf: &str, vlc_opt: &str, url: &str) -> Self {
        Self {
            extinf: extinf.to_string(),
            vlc_opt: vlc_opt.to_string(),
            url: url.to_string(),
        }
    }

    pub fn to_m3u(&self) -> String {
        format!("{}\n{}\n{}", self.extinf, self.vlc_opt, self.url)
    }
}
