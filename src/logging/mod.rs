mod init;
pub use init::{init_logging, parse_rotation};
use crate::utils::get_grocery_home;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used by the daemon.
pub const LOG_FILENAME: &str = "grocery-daemon.log";
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
/// `~/.grocery/logs`
#[must_use]
pub fn default_log_dir() -> PathBuf {
    get_grocery_home().join("logs")
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
