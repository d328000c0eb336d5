//! Turn-based battle engine.
//!
//! A [`Battle`] pits two [`Character`]s against each other on an action-gauge
//! [`Timeline`]. Each acting turn the actor ages its own modifiers, then
//! either uses its class skill or makes a normal attack. The battle ends on a
//! knockout or when the log cap is reached, and always closes with a system
//! entry announcing the winner.
//!
//! Every random decision is a fresh roll addressed by
//! [`compute_seed`]`(seed, turn, roller, kind)`, so a battle is a pure
//! function of its two characters, its config, and its seed.

mod combatant;
mod log;
mod replay;
mod report;
mod skill;
mod timeline;

pub use combatant::{Combatant, CombatantDefect};
pub use log::BattleLogEntry;
pub use replay::{Replay, ReplayFrame};
pub use report::{BattleEnd, BattleReport};
pub use skill::{Skill, SkillTarget};
pub use timeline::{Readiness, Side, Timeline};

use crate::character::{Character, CharacterId};
use crate::combat::{AttackRolls, resolve_attack};
use crate::config::{BattleConfig, TimeoutPolicy};
use crate::env::{
    GameEnv, OracleError, RngOracle, RollKind, SYSTEM_ROLLER, compute_seed, default_env,
};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised before a battle starts. A started battle cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("combatant {id} cannot fight: {defect}")]
    InvalidCombatant {
        id: CharacterId,
        defect: CombatantDefect,
    },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::InvalidCombatant { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::InvalidCombatant { .. } => "BATTLE_INVALID_COMBATANT",
        }
    }
}

/// Resumable battle between two characters.
///
/// Drive it turn by turn with [`step`](Self::step) or run it to the end with
/// [`finish`](Self::finish).
pub struct Battle<'a> {
    combatants: [Combatant<'a>; 2],
    timeline: Timeline,
    rng: &'a dyn RngOracle,
    config: BattleConfig,
    seed: u64,
    turn: u32,
    log: Vec<BattleLogEntry>,
}

impl<'a> Battle<'a> {
    /// Validates both characters and sets up an empty timeline.
    ///
    /// # Errors
    ///
    /// - [`BattleError::InvalidCombatant`] for a character that cannot fight
    /// - [`BattleError::Oracle`] if `env` has no RNG oracle
    pub fn new(
        first: &'a Character,
        second: &'a Character,
        env: &GameEnv<'a>,
        config: &BattleConfig,
        seed: u64,
    ) -> Result<Self, BattleError> {
        for character in [first, second] {
            combatant::validate(character).map_err(|defect| BattleError::InvalidCombatant {
                id: character.id,
                defect,
            })?;
        }
        let rng = env.rng()?;

        let combatants = [Combatant::new(first), Combatant::new(second)];
        let timeline = Timeline::new(
            combatants[0].effective_stats().gauge_speed(),
            combatants[1].effective_stats().gauge_speed(),
            config.action_threshold,
        );

        tracing::info!(
            first = %first.id,
            second = %second.id,
            seed,
            "battle started"
        );

        Ok(Self {
            combatants,
            timeline,
            rng,
            config: config.clone(),
            seed,
            turn: 0,
            log: Vec::new(),
        })
    }

    /// True once a combatant is down or the next turn would leave no room
    /// for the closing entry.
    pub fn is_finished(&self) -> bool {
        let standing = self.combatants.iter().all(Combatant::is_alive);
        !standing || self.log.len() + 1 >= self.config.log_cap()
    }

    /// Plays one acting turn and returns its log entry, or `None` once the
    /// battle is over.
    pub fn step(&mut self) -> Option<&BattleLogEntry> {
        if self.is_finished() {
            return None;
        }

        let actor = self.next_actor();
        self.turn += 1;
        self.timeline.spend(actor);
        self.combatants[actor.index()].tick_modifiers();

        let entry = self.act(actor);
        tracing::debug!(
            turn = self.turn,
            actor = %self.combatants[actor.index()].character.id,
            damage = entry.damage,
            skill = entry.is_skill,
            first_hp = self.combatants[0].current_hp,
            second_hp = self.combatants[1].current_hp,
            "{}",
            entry.message
        );

        self.log.push(entry);
        self.log.last()
    }

    /// Plays the remaining turns, appends the winner announcement, and
    /// returns the full report.
    pub fn finish(mut self) -> BattleReport {
        while self.step().is_some() {}

        let (winner, end) = self.decide_winner();
        let character = self.combatants[winner.index()].character;
        self.log
            .push(BattleLogEntry::victory(self.turn + 1, &character.name));

        tracing::info!(
            winner = %character.id,
            turns = self.turn,
            end = %end,
            "battle finished"
        );

        BattleReport {
            log: self.log,
            winner_id: character.id,
            winner,
            final_hp: [self.combatants[0].current_hp, self.combatants[1].current_hp],
            turns: self.turn,
            end,
        }
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn combatant(&self, side: Side) -> &Combatant<'a> {
        &self.combatants[side.index()]
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn log(&self) -> &[BattleLogEntry] {
        &self.log
    }

    fn next_actor(&mut self) -> Side {
        match self.timeline.advance() {
            Readiness::One(side) => side,
            Readiness::Both => {
                let seed = compute_seed(
                    self.seed,
                    u64::from(self.turn) + 1,
                    SYSTEM_ROLLER,
                    RollKind::TieBreak,
                );
                let side = if self.rng.check(seed, BattleConfig::TIE_BREAK_CHANCE) {
                    Side::First
                } else {
                    Side::Second
                };
                tracing::trace!(turn = self.turn + 1, ?side, "gauge tie broken");
                side
            }
        }
    }

    fn roll_seed(&self, roller: Side, kind: RollKind) -> u64 {
        compute_seed(self.seed, u64::from(self.turn), roller.roller(), kind)
    }

    fn tag(&self, side: Side) -> (CharacterId, &'a str) {
        let character: &'a Character = self.combatants[side.index()].character;
        (character.id, character.name.as_str())
    }

    fn act(&mut self, actor: Side) -> BattleLogEntry {
        let target = actor.opponent();
        let (actor_tag, target_tag) = (self.tag(actor), self.tag(target));

        let skill_roll = self.roll_seed(actor, RollKind::Skill);
        if self.rng.check(skill_roll, self.config.skill_chance) {
            let skill = self.combatants[actor.index()].character.class.skill();
            let modifier = skill.modifier();
            match skill.target {
                SkillTarget::Caster => self.combatants[actor.index()].buffs.push(modifier),
                SkillTarget::Opponent => self.combatants[target.index()].debuffs.push(modifier),
            }
            return BattleLogEntry::skill(self.turn, actor_tag, target_tag, skill);
        }

        let rolls = AttackRolls {
            critical: self
                .rng
                .roll_basis_points(self.roll_seed(actor, RollKind::Critical)),
            dodge: self
                .rng
                .roll_basis_points(self.roll_seed(target, RollKind::Dodge)),
        };
        let result = resolve_attack(
            &self.combatants[actor.index()].effective_stats(),
            &self.combatants[target.index()].effective_stats(),
            rolls,
            &self.config,
        );
        self.combatants[target.index()].take_damage(result.damage);

        BattleLogEntry::attack(self.turn, actor_tag, target_tag, &result)
    }

    fn decide_winner(&self) -> (Side, BattleEnd) {
        let [first, second] = &self.combatants;
        match (first.is_alive(), second.is_alive()) {
            (true, false) => (Side::First, BattleEnd::Knockout),
            (false, _) => (Side::Second, BattleEnd::Knockout),
            (true, true) => {
                let winner = match self.config.timeout_policy {
                    TimeoutPolicy::HigherHp if second.current_hp > first.current_hp => {
                        Side::Second
                    }
                    TimeoutPolicy::HigherHp | TimeoutPolicy::FirstCombatant => Side::First,
                };
                (winner, BattleEnd::TimedOut)
            }
        }
    }
}

/// Runs a battle with the default oracles and config.
///
/// # Errors
///
/// Returns [`BattleError::InvalidCombatant`] if either character cannot fight.
pub fn simulate(
    first: &Character,
    second: &Character,
    seed: u64,
) -> Result<BattleReport, BattleError> {
    simulate_with(first, second, &default_env(), &BattleConfig::default(), seed)
}

/// Runs a battle to completion with explicit oracles and config.
///
/// # Errors
///
/// See [`Battle::new`].
pub fn simulate_with<'a>(
    first: &'a Character,
    second: &'a Character,
    env: &GameEnv<'a>,
    config: &BattleConfig,
    seed: u64,
) -> Result<BattleReport, BattleError> {
    Ok(Battle::new(first, second, env, config, seed)?.finish())
}
