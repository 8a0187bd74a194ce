//! Stat System.
//!
//! ```text
//! [ Base attributes ] + [ Gear modifiers ] + [ Slot equipment values ]
//!                              ↓
//!                  [ Derived: Attack / Defense ]
//! ```
//!
//! Derivation is explicit: callers that change modifiers or equipment values
//! call [`Stats::update_stats`] afterwards (the equip protocol does this).

pub mod derived;
pub mod keys;
pub mod sheet;

pub use derived::DerivedStats;
pub use keys::{EquipSlot, ModifierKey, StatKey};
pub use sheet::{BaseAttributes, Stats, StatsError};
