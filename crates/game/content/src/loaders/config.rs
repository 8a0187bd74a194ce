//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`]. Starting gold above
    /// the gold cap is clamped.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.xp_to_next_level == 0 {
            anyhow::bail!("xp_to_next_level must be at least 1");
        }
        let starting_gold = config.starting_gold;
        Ok(config.with_starting_gold(starting_gold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("starting_gold = 1200\n").unwrap();
        assert_eq!(config.starting_gold, 1200);
        assert_eq!(config.xp_to_next_level, GameConfig::DEFAULT_XP_TO_NEXT_LEVEL);
    }

    #[test]
    fn gold_is_clamped() {
        let config = ConfigLoader::parse("starting_gold = 1000000\n").unwrap();
        assert_eq!(config.starting_gold, GameConfig::MAX_GOLD);
    }

    #[test]
    fn zero_threshold_is_rejected() {
        assert!(ConfigLoader::parse("xp_to_next_level = 0\n").is_err());
    }
}
