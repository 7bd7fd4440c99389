//! The five spells of Day 22

use super::model::{Effects, Wizard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    pub const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    pub const fn cost(self) -> i32 {
        match self {
            Spell::MagicMissile => 53,
            Spell::Drain => 73,
            Spell::Shield => 113,
            Spell::Poison => 173,
            Spell::Recharge => 229,
        }
    }

    /// Damage dealt to the boss immediately on casting.
    pub const fn damage(self) -> i32 {
        match self {
            Spell::MagicMissile => 4,
            Spell::Drain => 2,
            _ => 0,
        }
    }

    /// Hit points restored to the caster immediately.
    pub const fn heal(self) -> i32 {
        match self {
            Spell::Drain => 2,
            _ => 0,
        }
    }

    /// Whether the spell can be cast: affordable, and its effect is not running.
    pub fn castable(self, wizard: &Wizard, effects: &Effects) -> bool {
        let effect_idle = match self {
            Spell::Shield => effects.shield == 0,
            Spell::Poison => effects.poison == 0,
            Spell::Recharge => effects.recharge == 0,
            Spell::MagicMissile | Spell::Drain => true,
        };
        effect_idle && self.cost() <= wizard.mana
    }

    /// Start the spell's timed effect, if it has one.
    pub fn start_effect(self, effects: Effects) -> Effects {
        match self {
            Spell::Shield => Effects { shield: 6, ..effects },
            Spell::Poison => Effects { poison: 6, ..effects },
            Spell::Recharge => Effects {
                recharge: 5,
                ..effects
            },
            Spell::MagicMissile | Spell::Drain => effects,
        }
    }
}
