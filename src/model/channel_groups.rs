use crate::error::{create_curator_error, CuratorError, CuratorErrorKind};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Case-insensitive allow-list flattened from the configured `{group: [channel, ...]}` object.
///
/// A channel listed under several groups keeps the group that comes last in the object.
#[derive(Debug, Clone, Default)]
pub struct ChannelGroups {
    group_count: usize,
    channels: HashMap<String, String>,
}

impl ChannelGroups {
    pub fn from_json(json: &str) -> Result<Self, CuratorError> {
        let groups = serde_json::from_str::<IndexMap<String, Vec<String>>>(json)
            .map_err(|err| create_curator_error!(CuratorErrorKind::Config, "Invalid CHANNEL_GROUPS format: {err}"))?;
        Ok(Self::from_groups(groups))
    }

    pub fn from_groups(groups: IndexMap<String, Vec<String>>) -> Self {
        let group_count = groups.len();
        let mut channels = HashMap::new();
        for (group, names) in groups {
            for name in names {
                channels.insert(name.to_lowercase(), group.clone());
            }
        }
        Self { group_count, channels }
    }

    /// Group label for the given channel name, `None` when not allowed.
    /// An empty group label counts as not allowed.
    pub fn get_group(&self, channel_name: &str) -> Option<&str> {
        self.channels
            .get(&channel_name.to_lowercase())
            .map(String::as_str)
            .filter(|group| !group.is_empty())
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
