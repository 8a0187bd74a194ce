//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into game-core types. Catalog entries
//! are described by small `*Spec` structs so data files only carry authored
//! fields; derived fields (sell price, stack count) come from the constructors.

pub mod config;
pub mod equipment;
pub mod factory;
pub mod item;
pub mod party;
pub mod shop;

pub use config::ConfigLoader;
pub use equipment::{EquipmentLoader, EquipmentSpec};
pub use factory::ContentFactory;
pub use item::{ItemLoader, ItemSpec};
pub use party::{MemberSpec, PartyLoader, PartySpec, StackSpec};
pub use factory::build_party;
pub use shop::ShopLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
