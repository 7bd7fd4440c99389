//! Turn-based combat rules shared by Day 21 and Day 22
//!
//! Every attack deals `max(attack - armor, 1)`. The player always moves
//! first and hit points at or below zero end the fight.
//!
//! Day 22 adds spells and timed effects; [`least_mana_to_win`] finds the
//! cheapest winning spell sequence with a best-first search ordered by
//! mana spent.

mod model;
mod search;
mod spells;

pub use model::{Boss, Effects, Wizard};
pub use search::{Difficulty, least_mana_to_win};
pub use spells::Spell;

/// Damage one attack deals after armor. Never less than 1.
pub fn damage_dealt(attack: i32, armor: i32) -> i32 {
    (attack - armor).max(1)
}

/// Attacks needed to bring `hit_points` to zero.
pub fn hits_to_defeat(hit_points: i32, attack: i32, armor: i32) -> i32 {
    if hit_points <= 0 {
        return 0;
    }
    let damage = damage_dealt(attack, armor);
    (hit_points + damage - 1) / damage
}

/// Whether a fighter striking first wins a plain exchange of blows.
pub fn first_striker_wins(attacker: &Boss, defender: &Boss) -> bool {
    hits_to_defeat(defender.hit_points, attacker.damage, defender.armor)
        <= hits_to_defeat(attacker.hit_points, defender.damage, attacker.armor)
}

#[cfg(test)]
mod tests;
