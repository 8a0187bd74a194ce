//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Equipment catalog (data-driven via RON)
//! - Consumable item catalog (data-driven via RON)
//! - Shop definitions (data-driven via RON)
//! - Starting party (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Loaded catalogs are served through [`ContentRegistry`], which implements
//! [`game_core::ContentOracle`].

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::ContentRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EquipmentLoader, EquipmentSpec, ItemLoader, ItemSpec,
    MemberSpec, PartyLoader, PartySpec, ShopLoader, StackSpec, build_party,
};
