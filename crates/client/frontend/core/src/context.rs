//! Explicit game context threaded through every screen call.

use std::fmt;
use std::time::Duration;

use game_core::{ContentOracle, GameError, Party};

use crate::config::FrontendConfig;
use crate::message::{MessageEntry, MessageLevel, MessageLog};

/// Frame counter plus accumulated play time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameClock {
    frame: u64,
    elapsed: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, delta: Duration) {
        self.frame += 1;
        self.elapsed += delta;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Play time as `HH:MM:SS`.
    pub fn readout(&self) -> String {
        let seconds = self.elapsed.as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        )
    }
}

/// Everything a screen may read or mutate.
pub struct GameContext {
    pub party: Party,
    pub content: Box<dyn ContentOracle>,
    pub messages: MessageLog,
    pub clock: FrameClock,
    pub config: FrontendConfig,
}

impl fmt::Debug for GameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameContext")
            .field("party", &self.party)
            .field("shops", &self.content.shop_names())
            .field("messages", &self.messages.len())
            .field("clock", &self.clock)
            .finish()
    }
}

impl GameContext {
    pub fn new(party: Party, content: Box<dyn ContentOracle>, config: FrontendConfig) -> Self {
        Self {
            party,
            content,
            messages: MessageLog::new(config.messages.capacity),
            clock: FrameClock::new(),
            config,
        }
    }

    /// Post player feedback stamped with the current frame.
    pub fn notify(&mut self, text: impl Into<String>) {
        let frame = Some(self.clock.frame());
        self.messages
            .push(MessageEntry::new(text, frame, MessageLevel::Info));
    }

    /// Report a failed action to the player and the log file.
    pub fn report<E: GameError>(&mut self, action: &str, error: &E) {
        tracing::warn!(
            action,
            code = error.error_code(),
            severity = error.severity().as_str(),
            %error,
            "action failed"
        );
        let level = if error.severity().is_recoverable() {
            MessageLevel::Warning
        } else {
            MessageLevel::Error
        };
        let frame = Some(self.clock.frame());
        self.messages.push(MessageEntry::new(
            format!("{action}: {error}"),
            frame,
            level,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{PartyError, ShopDefinition};

    struct NoContent;

    impl ContentOracle for NoContent {
        fn equipment(&self, _: &str) -> Option<game_core::Equipment> {
            None
        }
        fn item(&self, _: &str) -> Option<game_core::Item> {
            None
        }
        fn shop(&self, _: &str) -> Option<ShopDefinition> {
            None
        }
        fn shop_names(&self) -> Vec<String> {
            Vec::new()
        }
        fn config(&self) -> game_core::GameConfig {
            game_core::GameConfig::default()
        }
    }

    #[test]
    fn clock_readout() {
        let mut clock = FrameClock::new();
        clock.tick(Duration::from_secs(3725));
        assert_eq!(clock.frame(), 1);
        assert_eq!(clock.readout(), "01:02:05");
    }

    #[test]
    fn report_posts_warning_for_recoverable_errors() {
        let mut ctx = GameContext::new(Party::default(), Box::new(NoContent), FrontendConfig::default());
        ctx.clock.tick(Duration::from_millis(16));
        ctx.report(
            "Buy",
            &PartyError::InsufficientGold {
                required: 900,
                available: 500,
            },
        );

        let entry = ctx.messages.latest().unwrap();
        assert_eq!(entry.level, MessageLevel::Warning);
        assert_eq!(entry.frame, Some(1));
        assert!(entry.text.starts_with("Buy: not enough gold"));
    }
}
