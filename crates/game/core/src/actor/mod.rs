//! Characters: health, MP, experience, stats and worn equipment.

pub mod loadout;

pub use loadout::Loadout;

use crate::config::GameConfig;
use crate::stats::{BaseAttributes, Stats};

/// Character class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ActorKind {
    #[default]
    Warrior,
    Mage,
    Assassin,
    Knight,
}

/// Errors raised by resource operations on a character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorError {
    #[error("not enough MP: need {requested}, have {available}")]
    InsufficientMp { requested: u32, available: u32 },
}

impl crate::error::GameError for ActorError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientMp { .. } => "ACTOR_INSUFFICIENT_MP",
        }
    }
}

/// A party member.
///
/// Invariant: `0 <= hp <= max_hp`, and `dead` is set exactly when damage
/// brings `hp` to 0.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    name: String,
    id: String,
    kind: ActorKind,
    level: u32,
    xp: u32,
    xp_to_next_level: u32,
    hp: u32,
    max_hp: u32,
    mp: u32,
    max_mp: u32,
    dead: bool,
    stats: Stats,
    loadout: Loadout,
    active: bool,
    party_position: usize,
}

impl Actor {
    /// Create a character at full health with default attributes.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        kind: ActorKind,
        level: u32,
        max_hp: u32,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind,
            level: level.max(1),
            xp: 0,
            xp_to_next_level: GameConfig::DEFAULT_XP_TO_NEXT_LEVEL,
            hp: max_hp,
            max_hp,
            mp: 0,
            max_mp: GameConfig::DEFAULT_MAX_MP,
            dead: false,
            stats: Stats::new(BaseAttributes::default()),
            loadout: Loadout::empty(),
            active: false,
            party_position: 0,
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: BaseAttributes) -> Self {
        self.stats = Stats::new(attributes);
        self
    }

    #[must_use]
    pub fn with_mp(mut self, mp: u32, max_mp: u32) -> Self {
        self.max_mp = max_mp;
        self.mp = mp.min(max_mp);
        self
    }

    #[must_use]
    pub fn with_xp_to_next_level(mut self, xp_to_next_level: u32) -> Self {
        self.xp_to_next_level = xp_to_next_level.max(1);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn xp_to_next_level(&self) -> u32 {
        self.xp_to_next_level
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn mp(&self) -> u32 {
        self.mp
    }

    pub fn max_mp(&self) -> u32 {
        self.max_mp
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub(crate) fn loadout_mut(&mut self) -> &mut Loadout {
        &mut self.loadout
    }

    /// Stats and loadout borrowed together for the equip protocol.
    pub(crate) fn gear_mut(&mut self) -> (&mut Stats, &mut Loadout) {
        (&mut self.stats, &mut self.loadout)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn party_position(&self) -> usize {
        self.party_position
    }

    pub(crate) fn set_active(&mut self, active: bool, position: usize) {
        self.active = active;
        self.party_position = position;
    }

    // ===== health =====

    /// Restore HP, clamped at max. Returns the amount actually restored.
    ///
    /// The dead are not healed; see [`Actor::revive`].
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.dead {
            return 0;
        }
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Apply damage, clamped at 0. Reaching 0 marks the character dead.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            self.dead = true;
        }
    }

    /// Bring a dead character back with `hp` (at least 1, at most max).
    ///
    /// Returns false for a living character.
    pub fn revive(&mut self, hp: u32) -> bool {
        if !self.dead {
            return false;
        }
        self.dead = false;
        self.hp = hp.clamp(1, self.max_hp.max(1));
        true
    }

    // ===== MP =====

    pub fn use_mp(&mut self, amount: u32) -> Result<(), ActorError> {
        if amount > self.mp {
            return Err(ActorError::InsufficientMp {
                requested: amount,
                available: self.mp,
            });
        }
        self.mp -= amount;
        Ok(())
    }

    pub fn restore_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
    }

    // ===== progression =====

    /// Add experience, levelling up as many times as it covers.
    ///
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let mut gained: u32 = 0;
        while self.xp >= self.xp_to_next_level {
            self.xp -= self.xp_to_next_level;
            self.level_up();
            gained = gained.saturating_add(1);
        }
        if gained > 0 {
            tracing::info!(actor = %self.id, level = self.level, "level up");
        }
        gained
    }

    /// Raise the level by one and grow HP, MP and the next threshold.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.max_hp = self.max_hp.saturating_add(GameConfig::LEVEL_UP_HP_GAIN);
        if !self.dead {
            self.hp = self
                .hp
                .saturating_add(GameConfig::LEVEL_UP_HP_GAIN)
                .min(self.max_hp);
        }
        self.max_mp = self.max_mp.saturating_add(GameConfig::LEVEL_UP_MP_GAIN);
        self.xp_to_next_level = self
            .xp_to_next_level
            .saturating_add((self.xp_to_next_level / 2).max(1));
    }
}
