//! Battle log entries.

use crate::character::CharacterId;
use crate::combat::AttackResult;

use super::skill::Skill;

/// One line of the battle log.
///
/// Skill entries carry `damage == 0` and name the opponent as defender. The
/// closing entry uses [`CharacterId::system`] on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleLogEntry {
    pub turn: u32,
    pub message: String,
    pub attacker_id: CharacterId,
    pub defender_id: CharacterId,
    pub damage: u32,
    pub is_crit: bool,
    pub is_dodge: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_skill: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub skill_name: Option<String>,
}

impl BattleLogEntry {
    pub fn attack(
        turn: u32,
        (attacker_id, attacker): (CharacterId, &str),
        (defender_id, defender): (CharacterId, &str),
        result: &AttackResult,
    ) -> Self {
        let message = if result.is_dodge() {
            format!("{defender} dodged {attacker}'s attack!")
        } else if result.is_crit {
            format!(
                "{attacker} hit {defender} for {} damage! (CRITICAL!)",
                result.damage
            )
        } else {
            format!("{attacker} hit {defender} for {} damage!", result.damage)
        };

        Self {
            turn,
            message,
            attacker_id,
            defender_id,
            damage: result.damage,
            is_crit: result.is_crit,
            is_dodge: result.is_dodge(),
            is_skill: false,
            skill_name: None,
        }
    }

    pub fn skill(
        turn: u32,
        (caster_id, caster): (CharacterId, &str),
        (opponent_id, opponent): (CharacterId, &str),
        skill: &Skill,
    ) -> Self {
        Self {
            turn,
            message: skill.message(caster, opponent),
            attacker_id: caster_id,
            defender_id: opponent_id,
            damage: 0,
            is_crit: false,
            is_dodge: false,
            is_skill: true,
            skill_name: Some(skill.name.to_owned()),
        }
    }

    pub fn victory(turn: u32, winner: &str) -> Self {
        Self {
            turn,
            message: format!("{winner} WINS!"),
            attacker_id: CharacterId::system(),
            defender_id: CharacterId::system(),
            damage: 0,
            is_crit: false,
            is_dodge: false,
            is_skill: false,
            skill_name: None,
        }
    }

    /// True for the closing summary line.
    pub fn is_system(&self) -> bool {
        self.attacker_id.is_system() && self.defender_id.is_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::AttackOutcome;

    fn ids() -> ((CharacterId, &'static str), (CharacterId, &'static str)) {
        (
            (CharacterId::new("aaaaaaaa").unwrap(), "Trae"),
            (CharacterId::new("bbbbbbbb").unwrap(), "Bug"),
        )
    }

    #[test]
    fn attack_messages() {
        let (trae, bug) = ids();
        let hit = AttackResult {
            outcome: AttackOutcome::Hit,
            damage: 12,
            is_crit: false,
        };
        let crit = AttackResult {
            outcome: AttackOutcome::Critical,
            damage: 18,
            is_crit: true,
        };
        let dodge = AttackResult {
            outcome: AttackOutcome::Dodged,
            damage: 0,
            is_crit: true,
        };

        assert_eq!(
            BattleLogEntry::attack(1, trae, bug, &hit).message,
            "Trae hit Bug for 12 damage!"
        );
        assert_eq!(
            BattleLogEntry::attack(1, trae, bug, &crit).message,
            "Trae hit Bug for 18 damage! (CRITICAL!)"
        );

        let dodged = BattleLogEntry::attack(1, trae, bug, &dodge);
        assert_eq!(dodged.message, "Bug dodged Trae's attack!");
        assert!(dodged.is_dodge);
        assert!(dodged.is_crit);
        assert_eq!(dodged.damage, 0);
    }

    #[test]
    fn skill_entry_has_no_damage() {
        let (trae, bug) = ids();
        let entry = BattleLogEntry::skill(4, trae, bug, &Skill::FORTIFY);
        assert!(entry.is_skill);
        assert_eq!(entry.damage, 0);
        assert_eq!(entry.skill_name.as_deref(), Some("Fortify"));
        assert_eq!(entry.defender_id, bug.0);
    }

    #[test]
    fn victory_entry_is_system() {
        let entry = BattleLogEntry::victory(20, "Bug");
        assert_eq!(entry.message, "Bug WINS!");
        assert!(entry.is_system());
    }
}
