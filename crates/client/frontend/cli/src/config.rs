//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub session: SessionConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `CLI_FRAME_INTERVAL_MS` - Frame interval in milliseconds (default: 16)
    /// - `TRPG_DATA_DIR` - Content directory (default: bundled data)
    /// - `TRPG_DEFAULT_SHOP` - Shop opened by Enter on the main screen (default: first shop)
    /// - `TRPG_SESSION_ID` - Log subdirectory name (default: current unix time)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval = Duration::from_millis(interval.max(1));
        }

        if let Some(dir) = read_env::<PathBuf>("TRPG_DATA_DIR") {
            config.session.data_dir = Some(dir);
        }
        config.session.default_shop = read_string("TRPG_DEFAULT_SHOP");
        config.session.session_id = read_string("TRPG_SESSION_ID");

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Time the loop waits for input each frame.
    pub frame_interval: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            frame_interval: Duration::from_millis(16),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub data_dir: Option<PathBuf>,
    pub default_shop: Option<String>,
    pub session_id: Option<String>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
