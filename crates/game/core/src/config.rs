/// Battle tuning constants and runtime-tunable parameters.
///
/// Every probability is expressed in basis points (1/10 000) so chance math
/// stays in exact integer arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Gauge value a combatant must reach before acting.
    pub action_threshold: u64,
    /// Hard cap on log entries, summary entry included. Read through
    /// [`log_cap`](Self::log_cap), which raises it to at least 2.
    pub max_log_entries: usize,
    /// Chance that an acting combatant uses its class skill.
    pub skill_chance: u32,
    /// Flat critical-hit chance.
    pub crit_chance: u32,
    /// Critical damage in percent of the raw damage (floored).
    pub crit_multiplier_percent: u32,
    /// Minimum share of attack that always goes through, in percent (ceiled).
    pub damage_floor_percent: u32,
    /// Dodge chance is `speed / dodge_speed_divisor`.
    pub dodge_speed_divisor: u32,
    /// Upper bound of the dodge chance.
    pub dodge_cap: u32,
    /// Who wins when the log cap ends the battle with both sides standing.
    pub timeout_policy: TimeoutPolicy,
}

/// Winner selection when the log cap is reached before a knockout.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TimeoutPolicy {
    /// Higher remaining HP wins; an exact tie goes to the first combatant.
    #[default]
    HigherHp,
    /// The first combatant wins whenever it is still standing.
    FirstCombatant,
}

impl BattleConfig {
    /// One whole in basis points.
    pub const BASIS_POINTS: u32 = 10_000;

    pub const DEFAULT_ACTION_THRESHOLD: u64 = 1_000;
    pub const DEFAULT_MAX_LOG_ENTRIES: usize = 200;
    /// One turn plus the closing entry.
    pub const MIN_LOG_ENTRIES: usize = 2;
    pub const DEFAULT_SKILL_CHANCE: u32 = 2_000;
    pub const DEFAULT_CRIT_CHANCE: u32 = 500;
    pub const DEFAULT_CRIT_MULTIPLIER_PERCENT: u32 = 150;
    pub const DEFAULT_DAMAGE_FLOOR_PERCENT: u32 = 20;
    pub const DEFAULT_DODGE_SPEED_DIVISOR: u32 = 200;
    pub const DEFAULT_DODGE_CAP: u32 = 5_000;

    /// Coin-flip threshold used to break gauge ties.
    pub const TIE_BREAK_CHANCE: u32 = 5_000;

    pub fn new() -> Self {
        Self {
            action_threshold: Self::DEFAULT_ACTION_THRESHOLD,
            max_log_entries: Self::DEFAULT_MAX_LOG_ENTRIES,
            skill_chance: Self::DEFAULT_SKILL_CHANCE,
            crit_chance: Self::DEFAULT_CRIT_CHANCE,
            crit_multiplier_percent: Self::DEFAULT_CRIT_MULTIPLIER_PERCENT,
            damage_floor_percent: Self::DEFAULT_DAMAGE_FLOOR_PERCENT,
            dodge_speed_divisor: Self::DEFAULT_DODGE_SPEED_DIVISOR,
            dodge_cap: Self::DEFAULT_DODGE_CAP,
            timeout_policy: TimeoutPolicy::default(),
        }
    }

    /// Sets the log cap. Values below 2 leave no room for a single turn and
    /// are raised to 2.
    #[must_use]
    pub fn with_max_log_entries(mut self, max_log_entries: usize) -> Self {
        self.max_log_entries = max_log_entries.max(Self::MIN_LOG_ENTRIES);
        self
    }

    /// Effective log cap, never below [`MIN_LOG_ENTRIES`](Self::MIN_LOG_ENTRIES).
    pub fn log_cap(&self) -> usize {
        self.max_log_entries.max(Self::MIN_LOG_ENTRIES)
    }

    #[must_use]
    pub fn with_timeout_policy(mut self, timeout_policy: TimeoutPolicy) -> Self {
        self.timeout_policy = timeout_policy;
        self
    }

    #[must_use]
    pub fn with_skill_chance(mut self, skill_chance: u32) -> Self {
        self.skill_chance = skill_chance.min(Self::BASIS_POINTS);
        self
    }

    #[must_use]
    pub fn with_crit_chance(mut self, crit_chance: u32) -> Self {
        self.crit_chance = crit_chance.min(Self::BASIS_POINTS);
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
