use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

// key, tvg-id, tvg-name, tvg-logo, display-name
const BUILTIN_OVERRIDES: &[(&str, &str, &str, &str, &str)] = &[
    ("aaj tak", "ts689", "Aaj Tak", "https://jiotvimages.cdn.jio.com/dare_images/images/Aaj_Tak.png", "Aaj Tak"),
    ("zee news", "ts259", "Zee News", "https://jiotvimages.cdn.jio.com/dare_images/images/Zee_News.png", "Zee News"),
    ("zee tv hd", "ts63", "Zee TV HD", "https://watchindia.net/images/channels/hindi/Zee_TV.png", "Zee TV HD"),
    ("&tv hd", "ts40", "& TV HD", "https://watchindia.net/images/channels/hindi/And_TV_HD.png", "&TV HD"),
    ("zee anmol", "ts523", "Zee Anmol", "https://jiotvimages.cdn.jio.com/dare_images/images/Zee_Anmol.png", "Zee Anmol"),
    ("zee cinema hd", "ts503", "Zee Cinema HD", "https://watchindia.net/images/channels/hindi/Zee_Cinema_HD.png", "Zee Cinema HD"),
    ("&pictures hd", "ts267", "& Pictures HD", "https://watchindia.net/images/channels/hindi/AndPictures_HD.png", "&Pictures HD"),
    ("zee bollywood", "441321", "Zee Bollywood", "https://jiotv.catchup.cdn.jio.com/dare_images/images/Zee_Classic.png", "Zee Bollywood"),
    ("&pictures", "441329", "&Pictures", "https://jiotvimages.cdn.jio.com/dare_images/images/And_Pictures.png", "&Pictures"),
    ("zee cinema", "441401", "Zee Cinema", "https://jiotvimages.cdn.jio.com/dare_images/images/Zee_Cinema.png", "Zee Cinema"),
    ("zee tv", "ts557", "Zee TV", "https://jiotvimages.cdn.jio.com/dare_images/images/Zee_TV.png", "Zee TV"),
    ("zee classic", "411574", "Zee Classic", "https://jiotvimages.cdn.jio.com/dare_images/images/Zee_Classic.png", "Zee Classic"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChannelOverride {
    #[serde(default)]
    pub tvg_id: String,
    #[serde(default)]
    pub tvg_name: String,
    #[serde(default)]
    pub tvg_logo: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ChannelOverride {
    /// Builds a fresh `#EXTINF` line, nothing of the original line survives.
    pub fn to_extinf(&self, group: &str, channel_name: &str) -> String {
        format!("#EXTINF:-1 tvg-id=\"{}\" tvg-name=\"{}\" tvg-logo=\"{}\" group-title=\"{group}\",{}",
                self.tvg_id, self.tvg_name, self.tvg_logo,
                self.display_name.as_deref().unwrap_or(channel_name))
    }
}

#[derive(Debug, Clone)]
pub struct ChannelOverrides {
    entries: HashMap<String, ChannelOverride>,
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ChannelOverrides {
    pub fn builtin() -> Self {
        let entries = BUILTIN_OVERRIDES
            .iter()
            .map(|(key, id, name, logo, display_name)| {
                ((*key).to_string(), ChannelOverride {
                    tvg_id: (*id).to_string(),
                    tvg_name: (*name).to_string(),
                    tvg_logo: (*logo).to_string(),
                    display_name: Some((*display_name).to_string()),
                })
            })
            .collect();
        Self { entries }
    }

    /// Entries with a matching key replace existing ones.
    pub fn merge(&mut self, overrides: IndexMap<String, ChannelOverride>) {
        for (name, channel_override) in overrides {
            self.entries.insert(normalize_key(&name), channel_override);
        }
    }

    pub fn get(&self, channel_name: &str) -> Option<&ChannelOverride> {
        self.entries.get(&channel_name.to_lowercase())
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
