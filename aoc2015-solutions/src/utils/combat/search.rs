//! Least-mana search for the wizard fight

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;

use super::damage_dealt;
use super::model::{Boss, Effects, Wizard};
use super::spells::Spell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Normal,
    /// The wizard loses 1 hit point at the start of each of their turns.
    Hard,
}

/// One search node: the whole fight as it stands at the start of a turn.
///
/// Field order matters: the derived ordering compares mana spent first, so
/// a min-heap of moves pops the cheapest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Move {
    mana_spent: i32,
    turn: u32,
    wizard: Wizard,
    boss: Boss,
    effects: Effects,
}

enum Resolution {
    Won,
    Lost,
    /// The fight goes on; effects for this turn are already applied.
    Continue(Move, i32),
}

impl Move {
    fn start(wizard: Wizard, boss: Boss) -> Self {
        Self {
            mana_spent: 0,
            turn: 0,
            wizard,
            boss,
            effects: Effects::default(),
        }
    }

    fn wizard_to_act(&self) -> bool {
        self.turn % 2 == 0
    }

    /// Hard-mode drain, effects, and the hit point checks around them.
    fn resolve_turn_start(mut self, difficulty: Difficulty) -> Resolution {
        if self.boss.hit_points <= 0 {
            return Resolution::Won;
        }
        if self.wizard.hit_points <= 0 {
            return Resolution::Lost;
        }

        if difficulty == Difficulty::Hard && self.wizard_to_act() {
            self.wizard.hit_points -= 1;
            if self.wizard.hit_points <= 0 {
                return Resolution::Lost;
            }
        }

        let (tick, effects) = self.effects.tick();
        self.effects = effects;
        self.boss.hit_points -= tick.boss_damage;
        self.wizard.mana += tick.mana_gain;

        if self.boss.hit_points <= 0 {
            return Resolution::Won;
        }
        Resolution::Continue(self, tick.armor)
    }

    fn cast(&self, spell: Spell) -> Move {
        let mut next = *self;
        next.turn += 1;
        next.mana_spent += spell.cost();
        next.wizard.mana -= spell.cost();
        next.wizard.hit_points += spell.heal();
        next.boss.hit_points -= spell.damage();
        next.effects = spell.start_effect(self.effects);
        next
    }

    fn boss_attack(&self, armor: i32) -> Move {
        let mut next = *self;
        next.turn += 1;
        next.wizard.hit_points -= damage_dealt(self.boss.damage, armor);
        next
    }

    /// The states reachable by one action. Empty when the wizard cannot
    /// cast anything, which loses the fight.
    fn successors(&self, armor: i32) -> Vec<Move> {
        if self.wizard_to_act() {
            Spell::ALL
                .into_iter()
                .filter(|spell| spell.castable(&self.wizard, &self.effects))
                .map(|spell| self.cast(spell))
                .collect()
        } else {
            vec![self.boss_attack(armor)]
        }
    }
}

/// The least total mana that wins the fight, or `None` if no sequence of
/// spells wins.
///
/// Best-first over mana spent: the frontier is a min-heap, and any state
/// costing at least the best confirmed win is pruned.
pub fn least_mana_to_win(wizard: Wizard, boss: Boss, difficulty: Difficulty) -> Option<i32> {
    let mut frontier = BinaryHeap::from([Reverse(Move::start(wizard, boss))]);
    let mut seen = HashSet::new();
    let mut best: Option<i32> = None;
    let mut expanded = 0usize;

    while let Some(Reverse(state)) = frontier.pop() {
        if best.is_some_and(|best| state.mana_spent >= best) {
            break;
        }
        if !seen.insert(state) {
            continue;
        }
        expanded += 1;

        match state.resolve_turn_start(difficulty) {
            Resolution::Won => best = Some(state.mana_spent),
            Resolution::Lost => {}
            Resolution::Continue(state, armor) => frontier.extend(
                state
                    .successors(armor)
                    .into_iter()
                    .filter(|next| best.is_none_or(|best| next.mana_spent < best))
                    .map(Reverse),
            ),
        }
    }

    debug!(?difficulty, expanded, ?best, "wizard search finished");
    best
}
