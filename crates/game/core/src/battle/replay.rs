//! Re-derives HP over time from a finished log, for progressive display.

use core::slice;

use crate::character::{Character, CharacterId};

use super::log::BattleLogEntry;

/// Log entry together with both combatants' HP after it was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayFrame<'r> {
    pub entry: &'r BattleLogEntry,
    /// Clamped at 0, indexed like [`Side`](super::Side).
    pub hp: [i32; 2],
}

/// Iterator over a battle log that tracks displayed HP.
///
/// Damage is charged to whichever combatant the entry names as defender. In
/// a mirror match both ids are equal and damage always lands on the first
/// combatant.
#[derive(Clone, Debug)]
pub struct Replay<'r> {
    entries: slice::Iter<'r, BattleLogEntry>,
    ids: [CharacterId; 2],
    hp: [i32; 2],
}

impl<'r> Replay<'r> {
    pub fn new(log: &'r [BattleLogEntry], first: &Character, second: &Character) -> Self {
        Self {
            entries: log.iter(),
            ids: [first.id, second.id],
            hp: [first.stats.hp, second.stats.hp],
        }
    }

    /// HP after the most recently yielded entry.
    pub fn hp(&self) -> [i32; 2] {
        self.hp
    }
}

impl<'r> Iterator for Replay<'r> {
    type Item = ReplayFrame<'r>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;

        if entry.damage > 0 {
            let target = self.ids.iter().position(|id| *id == entry.defender_id);
            if let Some(index) = target {
                let damage = i32::try_from(entry.damage).unwrap_or(i32::MAX);
                self.hp[index] = self.hp[index].saturating_sub(damage).max(0);
            }
        }

        Some(ReplayFrame {
            entry,
            hp: self.hp,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Replay<'_> {}
