//! Timed stat modifiers created by class skills.
//!
//! A modifier lives in its owner's buff or debuff list and ticks down only
//! when its owner completes an acting turn.

/// Stat a modifier adjusts. Speed is deliberately absent: gauge speeds stay
/// fixed for the whole battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierKind {
    #[strum(serialize = "ATK")]
    Attack,
    #[strum(serialize = "DEF")]
    Defense,
}

impl ModifierKind {
    /// Long stat name used in battle messages.
    pub const fn stat_name(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defense => "Defense",
        }
    }
}

/// A single timed adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub magnitude: i32,
    /// Acting turns of the owner left before removal.
    pub remaining_turns: u32,
    /// Skill that created the modifier.
    pub source: &'static str,
}

impl Modifier {
    pub const fn new(
        kind: ModifierKind,
        magnitude: i32,
        remaining_turns: u32,
        source: &'static str,
    ) -> Self {
        Self {
            kind,
            magnitude,
            remaining_turns,
            source,
        }
    }
}

/// Ordered modifier list exclusively owned by one combatant.
///
/// Re-applying a skill pushes a fresh entry instead of extending an old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    entries: Vec<Modifier>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Modifier) {
        self.entries.push(modifier);
    }

    /// Decrements every modifier by one turn and drops the expired ones.
    pub fn tick(&mut self) {
        self.entries.retain_mut(|modifier| {
            modifier.remaining_turns = modifier.remaining_turns.saturating_sub(1);
            modifier.remaining_turns > 0
        });
    }

    /// Sum of magnitudes of the given kind, saturating at the `i32` bounds.
    pub fn total(&self, kind: ModifierKind) -> i32 {
        self.entries
            .iter()
            .filter(|modifier| modifier.kind == kind)
            .fold(0i32, |sum, modifier| sum.saturating_add(modifier.magnitude))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_expires_after_duration() {
        let mut mods = Modifiers::new();
        mods.push(Modifier::new(ModifierKind::Defense, 5, 3, "Fortify"));

        mods.tick();
        mods.tick();
        assert_eq!(mods.total(ModifierKind::Defense), 5);
        assert_eq!(mods.iter().next().map(|m| m.remaining_turns), Some(1));

        mods.tick();
        assert!(mods.is_empty());
    }

    #[test]
    fn reapplying_stacks_fresh_entries() {
        let mut mods = Modifiers::new();
        mods.push(Modifier::new(ModifierKind::Attack, 5, 3, "Focus"));
        mods.tick();
        mods.push(Modifier::new(ModifierKind::Attack, 5, 3, "Focus"));

        assert_eq!(mods.len(), 2);
        assert_eq!(mods.total(ModifierKind::Attack), 10);
        assert_eq!(mods.total(ModifierKind::Defense), 0);

        mods.tick();
        mods.tick();
        // first one gone, second at 1
        assert_eq!(mods.len(), 1);
        assert_eq!(mods.total(ModifierKind::Attack), 5);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(ModifierKind::Attack.to_string(), "ATK");
        assert_eq!(ModifierKind::Defense.as_ref(), "DEF");
    }
}
