//! Combatant and effect state

use aoc2015_solver::ParseError;

use crate::utils::parse::integers;

/// A fighter with fixed stats. Used for the boss and, in Day 21, for the
/// equipped player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Boss {
    pub hit_points: i32,
    pub damage: i32,
    pub armor: i32,
}

impl Boss {
    pub const fn new(hit_points: i32, damage: i32, armor: i32) -> Self {
        Self {
            hit_points,
            damage,
            armor,
        }
    }

    /// Read `Hit Points`, `Damage` and optional `Armor` from the puzzle input.
    ///
    /// Only the first three integers in the text are used, in that order.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let stats: Vec<i32> = integers(input);
        match stats.as_slice() {
            [hit_points, damage, rest @ ..] => Ok(Self::new(
                *hit_points,
                *damage,
                rest.first().copied().unwrap_or(0),
            )),
            _ => Err(ParseError::MissingData(
                "boss needs hit points and damage".to_string(),
            )),
        }
    }
}

/// The spell-casting player of Day 22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wizard {
    pub hit_points: i32,
    pub mana: i32,
}

impl Wizard {
    pub const fn new(hit_points: i32, mana: i32) -> Self {
        Self { hit_points, mana }
    }
}

/// Remaining turns for each timed effect. Zero means inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Effects {
    pub shield: u8,
    pub poison: u8,
    pub recharge: u8,
}

/// What the effects did during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub armor: i32,
    pub boss_damage: i32,
    pub mana_gain: i32,
}

pub const SHIELD_ARMOR: i32 = 7;
pub const POISON_DAMAGE: i32 = 3;
pub const RECHARGE_MANA: i32 = 101;

impl Effects {
    /// Apply every active effect once, then count each timer down.
    ///
    /// An effect whose timer reaches zero still applied this turn.
    pub fn tick(self) -> (Tick, Effects) {
        let tick = Tick {
            armor: if self.shield > 0 { SHIELD_ARMOR } else { 0 },
            boss_damage: if self.poison > 0 { POISON_DAMAGE } else { 0 },
            mana_gain: if self.recharge > 0 { RECHARGE_MANA } else { 0 },
        };
        let next = Effects {
            shield: self.shield.saturating_sub(1),
            poison: self.poison.saturating_sub(1),
            recharge: self.recharge.saturating_sub(1),
        };
        (tick, next)
    }
}
