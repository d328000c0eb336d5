//! Finished-battle summary.

use crate::character::CharacterId;

use super::log::BattleLogEntry;
use super::timeline::Side;

/// How the battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum BattleEnd {
    /// A combatant dropped to 0 HP or below.
    Knockout,
    /// The log cap was reached with both combatants standing.
    TimedOut,
}

/// Complete record of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BattleReport {
    /// Every turn in order, closed by the winner announcement.
    pub log: Vec<BattleLogEntry>,
    pub winner_id: CharacterId,
    pub winner: Side,
    /// HP after the last turn, indexed by [`Side::index`]. May be negative.
    pub final_hp: [i32; 2],
    /// Acting turns taken, excluding the closing entry.
    pub turns: u32,
    pub end: BattleEnd,
}

impl BattleReport {
    pub fn final_hp(&self, side: Side) -> i32 {
        self.final_hp[side.index()]
    }

    /// Turn entries without the closing summary.
    pub fn turn_entries(&self) -> &[BattleLogEntry] {
        match self.log.split_last() {
            Some((last, rest)) if last.is_system() => rest,
            _ => &self.log,
        }
    }

    /// SHA-256 commitment to the log.
    ///
    /// Two battles with the same fingerprint played out identically. Entries
    /// are hashed in order using their bincode encoding.
    ///
    /// # Errors
    ///
    /// Returns the bincode error if an entry fails to encode.
    #[cfg(feature = "serde")]
    pub fn fingerprint(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for entry in &self.log {
            hasher.update(bincode::serialize(entry)?);
        }
        Ok(hasher.finalize().into())
    }
}
