//! Class skills.
//!
//! Each class owns exactly one skill. A skill never deals damage; it pushes a
//! timed [`Modifier`] onto the caster's buffs or the opponent's debuffs.

use crate::character::CharacterClass;
use crate::stats::{Modifier, ModifierKind};

/// Who receives the skill's modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillTarget {
    /// Buff on the caster.
    Caster,
    /// Debuff on the opponent.
    Opponent,
}

/// Static description of a class skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub target: SkillTarget,
    pub kind: ModifierKind,
    pub magnitude: i32,
    /// Acting turns of the modifier's owner.
    pub duration: u32,
}

impl Skill {
    pub const FORTIFY: Skill = Skill {
        name: "Fortify",
        description: "Increases DEF by 5 for 3 turns",
        target: SkillTarget::Caster,
        kind: ModifierKind::Defense,
        magnitude: 5,
        duration: 3,
    };

    pub const WEAKEN: Skill = Skill {
        name: "Weaken",
        description: "Reduces enemy ATK by 5 for 3 turns",
        target: SkillTarget::Opponent,
        kind: ModifierKind::Attack,
        magnitude: 5,
        duration: 3,
    };

    pub const FOCUS: Skill = Skill {
        name: "Focus",
        description: "Increases ATK by 5 for 3 turns",
        target: SkillTarget::Caster,
        kind: ModifierKind::Attack,
        magnitude: 5,
        duration: 3,
    };

    pub const fn for_class(class: CharacterClass) -> &'static Skill {
        match class {
            CharacterClass::Warrior => &Self::FORTIFY,
            CharacterClass::Mage => &Self::WEAKEN,
            CharacterClass::Rogue => &Self::FOCUS,
        }
    }

    /// Fresh modifier for one application of this skill.
    pub const fn modifier(&self) -> Modifier {
        Modifier::new(self.kind, self.magnitude, self.duration, self.name)
    }

    /// Log line for a cast by `caster` against `opponent`.
    pub fn message(&self, caster: &str, opponent: &str) -> String {
        match self.target {
            SkillTarget::Caster => format!(
                "{caster} used {}! {} UP!",
                self.name,
                self.kind.stat_name()
            ),
            SkillTarget::Opponent => format!(
                "{caster} cast {}! {opponent}'s {} weakened!",
                self.name,
                self.kind.stat_name()
            ),
        }
    }
}

impl CharacterClass {
    pub const fn skill(self) -> &'static Skill {
        Skill::for_class(self)
    }
}
