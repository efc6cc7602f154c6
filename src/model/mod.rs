mod app_config;
mod channel_groups;
mod channel_override;
mod playlist;

pub use self::app_config::*;
pub use self::channel_groups::*;
pub use self::channel_override::*;
pub use self::playlist::*;
