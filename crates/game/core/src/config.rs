/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Gold a freshly created party starts with.
    pub starting_gold: u32,
    /// Experience a level-1 character needs for its first level up.
    pub xp_to_next_level: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_PARTY_MEMBERS: usize = 16;
    pub const MAX_ACTIVE_MEMBERS: usize = 4;
    pub const MAX_EQUIPMENT_COUNT: u16 = 50;
    pub const MAX_ITEM_COUNT: u16 = 99;
    pub const MAX_GOLD: u32 = 99_999;

    /// Divisor applied to secondary attributes in the Attack/Defense formulas.
    pub const STAT_DIVISOR: i32 = 5;

    // ===== level-up growth =====
    pub const LEVEL_UP_HP_GAIN: u32 = 10;
    pub const LEVEL_UP_MP_GAIN: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_GOLD: u32 = 500;
    pub const DEFAULT_XP_TO_NEXT_LEVEL: u32 = 200;
    pub const DEFAULT_MAX_MP: u32 = 5;

    pub fn new() -> Self {
        Self {
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            xp_to_next_level: Self::DEFAULT_XP_TO_NEXT_LEVEL,
        }
    }

    pub fn with_starting_gold(mut self, starting_gold: u32) -> Self {
        self.starting_gold = starting_gold.min(Self::MAX_GOLD);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
