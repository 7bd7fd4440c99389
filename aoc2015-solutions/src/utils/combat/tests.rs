//! **Feature: wizard-combat-search**

use proptest::prelude::*;

use super::*;

const WIZARD: Wizard = Wizard::new(50, 500);

/// Straight recursive play of every spell sequence costing at most `cap`.
///
/// Written turn by turn, independent of the search's state machine.
fn brute_force(
    mut wizard: Wizard,
    mut boss_hp: i32,
    boss_damage: i32,
    mut effects: Effects,
    spent: i32,
    cap: i32,
    hard: bool,
) -> Option<i32> {
    // wizard's turn
    if hard {
        wizard.hit_points -= 1;
        if wizard.hit_points <= 0 {
            return None;
        }
    }
    let (tick, after) = effects.tick();
    boss_hp -= tick.boss_damage;
    wizard.mana += tick.mana_gain;
    effects = after;
    if boss_hp <= 0 {
        return Some(spent);
    }

    let mut best: Option<i32> = None;
    for spell in Spell::ALL {
        let cost = spent + spell.cost();
        let bound = best.map_or(cap, |b| b - 1);
        if !spell.castable(&wizard, &effects) || cost > bound {
            continue;
        }

        let mut w = Wizard::new(wizard.hit_points + spell.heal(), wizard.mana - spell.cost());
        let mut hp = boss_hp - spell.damage();
        let mut fx = spell.start_effect(effects);
        if hp <= 0 {
            best = Some(cost);
            continue;
        }

        // boss's turn
        let (tick, after) = fx.tick();
        hp -= tick.boss_damage;
        w.mana += tick.mana_gain;
        fx = after;
        if hp <= 0 {
            best = Some(cost);
            continue;
        }
        w.hit_points -= damage_dealt(boss_damage, tick.armor);
        if w.hit_points <= 0 {
            continue;
        }

        if let Some(found) = brute_force(w, hp, boss_damage, fx, cost, bound, hard) {
            best = Some(found);
        }
    }
    best
}

fn least(boss_hp: i32, boss_damage: i32, difficulty: Difficulty) -> Option<i32> {
    least_mana_to_win(WIZARD, Boss::new(boss_hp, boss_damage, 0), difficulty)
}

#[test]
fn damage_is_at_least_one() {
    assert_eq!(damage_dealt(8, 3), 5);
    assert_eq!(damage_dealt(8, 7), 1);
    assert_eq!(damage_dealt(1, 7), 1);
    assert_eq!(damage_dealt(0, 0), 1);
}

#[test]
fn hits_to_defeat_rounds_up() {
    assert_eq!(hits_to_defeat(12, 7, 2), 3);
    assert_eq!(hits_to_defeat(8, 5, 5), 8);
    assert_eq!(hits_to_defeat(0, 5, 0), 0);
}

#[test]
fn first_striker_wins_ties() {
    // player 8 hp, 5 dmg, 5 armor vs boss 12 hp, 7 dmg, 2 armor
    let player = Boss::new(8, 5, 5);
    let boss = Boss::new(12, 7, 2);
    assert!(first_striker_wins(&player, &boss));
    assert!(!first_striker_wins(&Boss::new(6, 5, 5), &boss));
}

#[test]
fn effects_tick_applies_then_counts_down() {
    let effects = Effects {
        shield: 1,
        poison: 6,
        recharge: 0,
    };
    let (tick, next) = effects.tick();
    assert_eq!(tick.armor, 7);
    assert_eq!(tick.boss_damage, 3);
    assert_eq!(tick.mana_gain, 0);
    assert_eq!(
        next,
        Effects {
            shield: 0,
            poison: 5,
            recharge: 0
        }
    );
}

#[test]
fn running_effect_cannot_be_recast() {
    let wizard = Wizard::new(10, 1000);
    let effects = Effects {
        poison: 2,
        ..Effects::default()
    };
    assert!(!Spell::Poison.castable(&wizard, &effects));
    assert!(Spell::Shield.castable(&wizard, &effects));
    assert!(!Spell::Recharge.castable(&Wizard::new(10, 228), &Effects::default()));
}

#[test]
fn poison_then_missile() {
    let found = least_mana_to_win(Wizard::new(10, 250), Boss::new(13, 8, 0), Difficulty::Normal);
    assert_eq!(found, Some(173 + 53));
}

#[test]
fn five_spell_sequence() {
    let found = least_mana_to_win(Wizard::new(10, 250), Boss::new(14, 8, 0), Difficulty::Normal);
    assert_eq!(found, Some(229 + 113 + 73 + 173 + 53));
}

#[test]
fn one_hit_point_boss_falls_to_a_missile() {
    assert_eq!(least(1, 1000, Difficulty::Normal), Some(53));
    assert_eq!(least(1, 1000, Difficulty::Hard), Some(53));
}

#[test]
fn known_boss_scenarios() {
    assert_eq!(least(50, 1, Difficulty::Normal), Some(787));
    assert_eq!(least(50, 1, Difficulty::Hard), Some(787));
    assert_eq!(least(50, 8, Difficulty::Normal), Some(787));
    assert_eq!(least(50, 8, Difficulty::Hard), Some(900));
}

#[test]
fn unbeatable_boss_has_no_solution() {
    let boss = Boss::new(1000, 1000, 1000);
    assert_eq!(least_mana_to_win(WIZARD, boss, Difficulty::Normal), None);
    assert_eq!(least_mana_to_win(WIZARD, boss, Difficulty::Hard), None);
}

#[test]
fn out_of_mana_loses() {
    assert_eq!(least_mana_to_win(Wizard::new(50, 52), Boss::new(1, 1, 0), Difficulty::Normal), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// **Feature: wizard-combat-search, Property 1: Global minimum**
    /// *For any* small boss, the search matches exhaustive play.
    #[test]
    fn prop_matches_brute_force(hp in 1i32..=20, damage in 1i32..=9, hard in any::<bool>()) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Normal };
        let found = least(hp, damage, difficulty);
        let cap = found.unwrap_or(1500);
        let brute = brute_force(WIZARD, hp, damage, Effects::default(), 0, cap, hard);
        prop_assert_eq!(found, brute);
    }

    /// **Feature: wizard-combat-search, Property 2: Monotonic in boss hit points**
    #[test]
    fn prop_tougher_boss_costs_no_less(hp in 1i32..=30, extra in 1i32..=10, damage in 1i32..=9) {
        let weaker = least(hp, damage, Difficulty::Normal);
        let tougher = least(hp + extra, damage, Difficulty::Normal);
        if let (Some(weaker), Some(tougher)) = (weaker, tougher) {
            prop_assert!(tougher >= weaker);
        } else {
            prop_assert!(tougher.is_none() || weaker.is_some());
        }
    }

    /// **Feature: wizard-combat-search, Property 3: Hard mode costs no less**
    #[test]
    fn prop_hard_mode_costs_no_less(hp in 1i32..=40, damage in 1i32..=10) {
        let normal = least(hp, damage, Difficulty::Normal);
        let hard = least(hp, damage, Difficulty::Hard);
        match (normal, hard) {
            (Some(normal), Some(hard)) => prop_assert!(hard >= normal),
            (None, Some(_)) => prop_assert!(false, "hard mode won where normal mode could not"),
            _ => {}
        }
    }

    /// **Feature: wizard-combat-search, Property 4: Idempotence**
    #[test]
    fn prop_search_is_repeatable(hp in 1i32..=40, damage in 1i32..=10, hard in any::<bool>()) {
        let difficulty = if hard { Difficulty::Hard } else { Difficulty::Normal };
        prop_assert_eq!(least(hp, damage, difficulty), least(hp, damage, difficulty));
    }
}
