//! Combat Resolution
//!
//! Target acquisition and damage application for the three attacking
//! entity types:
//!
//! - Heroes: nearest enemy hero (mitigated), else nearest enemy structure
//!   (raw, half rate), else nearest camp (raw, half rate)
//! - Towers: one mitigated shot per charged second at the nearest enemy hero
//! - Camps: continuous raw damage to the nearest hero inside aggro range
//!
//! All functions take entity slices and indices so the tick loop can hold
//! one mutable borrow per collection.

use crate::game::camp::{JungleCamp, CAMP_AGGRO_RANGE};
use crate::game::entity::{nearest_within, Spatial};
use crate::game::events::KillCredit;
use crate::game::hero::{Hero, HeroId};
use crate::game::structure::Structure;

/// Fraction of attack damage heroes deal to structures and camps.
pub const SIEGE_DAMAGE_SCALE: f64 = 0.5;

/// Armor mitigation: `raw * 100 / (100 + armor)`.
#[inline]
pub fn mitigate(raw: f64, armor: f64) -> f64 {
    raw * crate::game::hero::mitigation_factor(armor)
}

/// A hero death caused by combat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kill {
    pub victim: HeroId,
    pub credit: KillCredit,
}

/// What a hero's auto-attack hit this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strike {
    /// Nothing in range
    Idle,
    /// Attacked an enemy hero
    Hero { target: usize, kill: Option<Kill> },
    /// Attacked an enemy structure
    Structure { target: usize, destroyed: bool },
    /// Attacked a jungle camp
    Camp { target: usize, cleared: bool },
}

impl Strike {
    /// True when an enemy hero was attacked (enables auto-cast).
    #[inline]
    pub fn hit_hero(&self) -> bool {
        matches!(self, Strike::Hero { .. })
    }
}

/// Deal damage to `heroes[victim]` and book the kill.
///
/// When `mitigated` is set the damage is reduced by the victim's armor.
/// A hero credit gains exactly one kill when this hit is the fatal one.
pub fn damage_hero(heroes: &mut [Hero], victim: usize, raw: f64, mitigated: bool, credit: KillCredit) -> Option<Kill> {
    let target = heroes.get_mut(victim)?;
    let outcome = if mitigated {
        target.take_damage(raw)
    } else {
        target.take_true_damage(raw)
    };

    if !outcome.killed {
        return None;
    }

    let victim_id = target.id();
    if let KillCredit::Hero(killer) = credit {
        if let Some(killer) = heroes.get_mut(killer.index()) {
            killer.kills += 1;
        }
    }

    Some(Kill {
        victim: victim_id,
        credit,
    })
}

/// Nearest alive enemy hero within the attacker's range.
pub fn nearest_enemy_hero(heroes: &[Hero], attacker: usize, range: f64) -> Option<usize> {
    let me = heroes.get(attacker)?;
    let team = me.team();
    nearest_within(me.position(), range, heroes, |h: &Hero| h.alive && h.team().is_enemy_of(team))
}

/// Run one hero's auto-attack for `dt` seconds.
pub fn hero_attack(
    heroes: &mut [Hero],
    structures: &mut [Structure],
    camps: &mut [JungleCamp],
    attacker: usize,
    dt: f64,
) -> Strike {
    let (position, team, range, damage, attacker_id) = match heroes.get(attacker) {
        Some(h) if h.alive => (h.position(), h.team(), h.attack_range, h.attack_damage, h.id()),
        _ => return Strike::Idle,
    };

    if let Some(target) = nearest_enemy_hero(heroes, attacker, range) {
        let kill = damage_hero(heroes, target, damage * dt, true, KillCredit::Hero(attacker_id));
        return Strike::Hero { target, kill };
    }

    let siege = damage * SIEGE_DAMAGE_SCALE * dt;

    if let Some(target) = nearest_within(position, range, structures.iter(), |s: &Structure| {
        s.alive && s.team().is_enemy_of(team)
    }) {
        let destroyed = structures[target].take_damage(siege).killed;
        return Strike::Structure { target, destroyed };
    }

    if let Some(target) = nearest_within(position, range, camps.iter(), |c: &JungleCamp| c.alive) {
        let cleared = camps[target].take_damage(siege).killed;
        return Strike::Camp { target, cleared };
    }

    Strike::Idle
}

/// Charge a tower and fire at the nearest enemy hero if ready.
///
/// Returns the index of the hero shot and the kill, if any.
pub fn tower_attack(tower: &mut Structure, heroes: &mut [Hero], dt: f64) -> Option<(usize, Option<Kill>)> {
    if !tower.charge_attack(dt) {
        return None;
    }

    let team = tower.team();
    let target = nearest_within(tower.position(), tower.attack_range, heroes.iter(), |h: &Hero| {
        h.alive && h.team().is_enemy_of(team)
    })?;

    tower.spend_attack();
    let kill = damage_hero(heroes, target, tower.attack_damage, true, KillCredit::Tower(tower.body.id));
    Some((target, kill))
}

/// Nearest alive hero of any team strictly inside a camp's aggro range.
pub fn camp_aggro_target(camp: &JungleCamp, heroes: &[Hero]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, hero) in heroes.iter().enumerate() {
        if !hero.alive {
            continue;
        }
        let d = camp.distance_to(hero);
        if d >= CAMP_AGGRO_RANGE {
            continue;
        }
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Let a living camp hit the nearest aggroed hero. Camp damage ignores armor.
pub fn camp_attack(camp: &JungleCamp, heroes: &mut [Hero], dt: f64) -> Option<(usize, Option<Kill>)> {
    if !camp.alive {
        return None;
    }
    let target = camp_aggro_target(camp, heroes)?;
    let kill = damage_hero(heroes, target, camp.damage_per_second() * dt, false, KillCredit::Camp(camp.body.id));
    Some((target, kill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::Vec2;
    use crate::game::entity::Team;
    use crate::game::stats::Archetype;
    use crate::game::structure::StructureKind;
    use crate::game::world::Lane;

    fn hero(id: u32, archetype: Archetype, team: Team, x: f64, y: f64) -> Hero {
        Hero::new(HeroId(id), format!("h{id}"), archetype, team, Lane::Mid, Vec2::new(x, y))
    }

    #[test]
    fn test_mitigation_formula() {
        assert!((mitigate(100.0, 50.0) - 66.666_666_666).abs() < 1e-6);
        assert_eq!(mitigate(100.0, 0.0), 100.0);
    }

    #[test]
    fn test_hero_attacks_nearest_enemy_hero() {
        let mut heroes = vec![
            hero(0, Archetype::Marksman, Team::Blue, 400.0, 500.0),
            hero(1, Archetype::Tank, Team::Red, 700.0, 500.0),
            hero(2, Archetype::Mage, Team::Red, 600.0, 500.0),
            hero(3, Archetype::Fighter, Team::Blue, 450.0, 500.0),
        ];

        let strike = hero_attack(&mut heroes, &mut [], &mut [], 0, 1.0);
        assert_eq!(strike, Strike::Hero { target: 2, kill: None });
        assert!(strike.hit_hero());

        let expected = 550.0 - mitigate(85.0, 20.0);
        assert!((heroes[2].health - expected).abs() < 1e-9);
        assert_eq!(heroes[1].health, 1000.0);
        assert_eq!(heroes[3].health, 800.0);
    }

    #[test]
    fn test_hero_falls_back_to_structure_raw_half_damage() {
        let mut heroes = vec![hero(0, Archetype::Fighter, Team::Blue, 650.0, 200.0)];
        let mut structures = vec![
            Structure::new(0, StructureKind::Tower, Team::Blue, Vec2::new(600.0, 200.0)),
            Structure::new(1, StructureKind::Tower, Team::Red, Vec2::new(700.0, 200.0)),
        ];

        let strike = hero_attack(&mut heroes, &mut structures, &mut [], 0, 2.0);
        assert_eq!(strike, Strike::Structure { target: 1, destroyed: false });
        assert_eq!(structures[1].health, 2000.0 - 80.0);
        assert_eq!(structures[0].health, 2000.0);
    }

    #[test]
    fn test_hero_clears_camp_last() {
        let mut heroes = vec![hero(0, Archetype::Fighter, Team::Blue, 500.0, 260.0)];
        let mut camps = vec![JungleCamp::new(0, Vec2::new(500.0, 300.0))];
        camps[0].health = 30.0;

        let strike = hero_attack(&mut heroes, &mut [], &mut camps, 0, 1.0);
        assert_eq!(strike, Strike::Camp { target: 0, cleared: true });
        assert!(!camps[0].alive);
    }

    #[test]
    fn test_fatal_hit_credits_one_kill() {
        let mut heroes = vec![
            hero(0, Archetype::Fighter, Team::Blue, 500.0, 500.0),
            hero(1, Archetype::Mage, Team::Red, 550.0, 500.0),
        ];
        heroes[1].health = 1.0;

        let kill = damage_hero(&mut heroes, 1, 500.0, true, KillCredit::Hero(HeroId(0)));
        assert_eq!(
            kill,
            Some(Kill {
                victim: HeroId(1),
                credit: KillCredit::Hero(HeroId(0))
            })
        );
        assert_eq!(heroes[0].kills, 1);
        assert_eq!(heroes[1].deaths, 1);

        // Hitting a dead hero credits nothing
        assert_eq!(damage_hero(&mut heroes, 1, 500.0, true, KillCredit::Hero(HeroId(0))), None);
        assert_eq!(heroes[0].kills, 1);
    }

    #[test]
    fn test_tower_fires_once_per_second() {
        let mut heroes = vec![hero(0, Archetype::Tank, Team::Blue, 700.0, 450.0)];
        let mut tower = Structure::new(0, StructureKind::Tower, Team::Red, Vec2::new(700.0, 500.0));

        assert_eq!(tower_attack(&mut tower, &mut heroes, 0.5), None);
        assert_eq!(heroes[0].health, 1000.0);

        assert_eq!(tower_attack(&mut tower, &mut heroes, 0.5), Some((0, None)));
        assert!((heroes[0].health - (1000.0 - 100.0)).abs() < 1e-9);
        assert_eq!(tower.attack_charge, 0.0);
    }

    #[test]
    fn test_tower_keeps_charge_without_target() {
        let mut heroes = vec![hero(0, Archetype::Tank, Team::Red, 700.0, 450.0)];
        let mut tower = Structure::new(0, StructureKind::Tower, Team::Red, Vec2::new(700.0, 500.0));

        assert_eq!(tower_attack(&mut tower, &mut heroes, 3.0), None);
        assert_eq!(tower.attack_charge, 3.0);
    }

    #[test]
    fn test_camp_aggro_is_strict_and_unmitigated() {
        let camp = JungleCamp::new(0, Vec2::new(500.0, 300.0));
        let mut heroes = vec![
            hero(0, Archetype::Tank, Team::Blue, 650.0, 300.0),
            hero(1, Archetype::Tank, Team::Red, 500.0, 160.0),
        ];

        assert_eq!(camp_aggro_target(&camp, &heroes), Some(1));
        let hit = camp_attack(&camp, &mut heroes, 1.0);
        assert_eq!(hit, Some((1, None)));
        assert_eq!(heroes[1].health, 990.0);
        assert_eq!(heroes[0].health, 1000.0);
    }
}
