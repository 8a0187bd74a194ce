//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub canvas: CanvasConfig,
    pub messages: MessageConfig,
    pub dialog: DialogConfig,
}

impl FrontendConfig {
    pub const fn new(canvas: CanvasConfig, messages: MessageConfig, dialog: DialogConfig) -> Self {
        Self {
            canvas,
            messages,
            dialog,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRPG_CANVAS_WIDTH` - Text buffer width in cells (default: 96)
    /// - `TRPG_CANVAS_HEIGHT` - Text buffer height in cells (default: 32)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `TRPG_TYPEWRITER_SPEED` - Frames per revealed character (default: 2)
    /// - `TRPG_SKIP_DIALOG` - Reveal dialog text instantly (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("TRPG_CANVAS_WIDTH") {
            config.canvas.width = width.max(CanvasConfig::MIN_WIDTH);
        }
        if let Some(height) = read_env::<u16>("TRPG_CANVAS_HEIGHT") {
            config.canvas.height = height.max(CanvasConfig::MIN_HEIGHT);
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(speed) = read_env::<u32>("TRPG_TYPEWRITER_SPEED") {
            config.dialog.typewriter_speed = speed.max(1);
        }
        if let Some(skip) = read_env_bool("TRPG_SKIP_DIALOG") {
            config.dialog.instant = skip;
        }

        config
    }
}

/// Size of the character grid screens draw into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasConfig {
    pub width: u16,
    pub height: u16,
}

impl CanvasConfig {
    pub const MIN_WIDTH: u16 = 80;
    pub const MIN_HEIGHT: u16 = 30;
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 96,
            height: 32,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Clone, Debug)]
pub struct DialogConfig {
    /// Frames per revealed character.
    pub typewriter_speed: u32,
    pub instant: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            typewriter_speed: 2,
            instant: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
