//! Starting party loader.
//!
//! The party file names its members and the starting inventory by catalog
//! name; the factory resolves those names against the loaded catalogs.

use std::path::Path;

use game_core::{ActorKind, BaseAttributes};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A catalog name with a stack count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSpec {
    pub name: String,
    #[serde(default = "one")]
    pub count: u16,
}

fn one() -> u16 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSpec {
    pub name: String,
    pub id: String,
    pub kind: ActorKind,
    #[serde(default = "one_level")]
    pub level: u32,
    pub max_hp: u32,
    #[serde(default)]
    pub mp: Option<u32>,
    #[serde(default)]
    pub attributes: Option<BaseAttributes>,
    /// Equipment names worn at the start. Each is added to the inventory.
    #[serde(default)]
    pub equipped: Vec<String>,
}

fn one_level() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySpec {
    pub members: Vec<MemberSpec>,
    #[serde(default)]
    pub items: Vec<StackSpec>,
    #[serde(default)]
    pub equipment: Vec<StackSpec>,
}

pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path) -> LoadResult<PartySpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PartySpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))
    }
}
