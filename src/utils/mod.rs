mod constants;
mod file;
mod logging;
mod network;
mod string_utils;
mod sys_utils;

pub use self::constants::*;
pub use self::file::*;
pub use self::logging::*;
pub use self::network::*;
pub use self::string_utils::*;

#[macro_export]
macro_rules! debug_if_enabled {
    ($fmt:expr, $( $args:expr ),*) => {
        if log::log_enabled!(log::Level::Debug) {
            log::log!(log::Level::Debug, $fmt, $($args),*);
        }
    };

    ($txt:expr) => {
        if log::log_enabled!(log::Level::Debug) {
            log::log!(log::Level::Debug, $txt);
        }
    };
}
