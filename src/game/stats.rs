//! Hero Stat Model
//!
//! Derives per-level hero attributes from archetype base values plus a
//! linear per-level increment.

use serde::{Serialize, Deserialize};

/// Highest level a hero can reach.
pub const MAX_LEVEL: u32 = 18;

/// Per-level growth shared by every archetype.
pub const HEALTH_PER_LEVEL: f64 = 100.0;
pub const MANA_PER_LEVEL: f64 = 50.0;
pub const ATTACK_DAMAGE_PER_LEVEL: f64 = 5.0;
pub const ABILITY_POWER_PER_LEVEL: f64 = 7.0;
pub const ARMOR_PER_LEVEL: f64 = 3.0;

/// Hero archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Archetype {
    Tank = 0,
    Fighter = 1,
    Mage = 2,
    Marksman = 3,
    Support = 4,
}

impl Archetype {
    /// All archetypes in roster order.
    pub const ALL: [Archetype; 5] = [
        Archetype::Tank,
        Archetype::Fighter,
        Archetype::Mage,
        Archetype::Marksman,
        Archetype::Support,
    ];

    /// Level-1 attributes.
    pub fn base_stats(self) -> HeroStats {
        let (max_health, max_mana, attack_damage, ability_power, armor, move_speed, attack_range) =
            match self {
                Archetype::Tank => (1000.0, 400.0, 60.0, 40.0, 50.0, 2.0, 100.0),
                Archetype::Fighter => (800.0, 300.0, 80.0, 50.0, 40.0, 2.5, 100.0),
                Archetype::Mage => (550.0, 800.0, 50.0, 90.0, 20.0, 2.0, 450.0),
                Archetype::Marksman => (600.0, 400.0, 85.0, 30.0, 25.0, 2.5, 500.0),
                Archetype::Support => (650.0, 700.0, 40.0, 70.0, 30.0, 2.2, 350.0),
            };
        HeroStats {
            max_health,
            max_mana,
            attack_damage,
            ability_power,
            armor,
            move_speed,
            attack_range,
        }
    }
}

/// Derived hero attributes at a given level.
///
/// `armor` here is the unbuffed base; temporary modifiers live on the hero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroStats {
    pub max_health: f64,
    pub max_mana: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    pub armor: f64,
    pub move_speed: f64,
    pub attack_range: f64,
}

/// Attributes of `archetype` at `level` (clamped to `1..=MAX_LEVEL`).
pub fn stats_for(archetype: Archetype, level: u32) -> HeroStats {
    let base = archetype.base_stats();
    let steps = (level.clamp(1, MAX_LEVEL) - 1) as f64;
    HeroStats {
        max_health: base.max_health + steps * HEALTH_PER_LEVEL,
        max_mana: base.max_mana + steps * MANA_PER_LEVEL,
        attack_damage: base.attack_damage + steps * ATTACK_DAMAGE_PER_LEVEL,
        ability_power: base.ability_power + steps * ABILITY_POWER_PER_LEVEL,
        armor: base.armor + steps * ARMOR_PER_LEVEL,
        move_speed: base.move_speed,
        attack_range: base.attack_range,
    }
}

/// Experience needed to advance from `level` to the next one.
#[inline]
pub fn experience_to_level(level: u32) -> f64 {
    level as f64 * 200.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_is_base() {
        for archetype in Archetype::ALL {
            assert_eq!(stats_for(archetype, 1), archetype.base_stats());
        }
    }

    #[test]
    fn test_linear_growth() {
        let s = stats_for(Archetype::Mage, 4);
        assert_eq!(s.max_health, 550.0 + 300.0);
        assert_eq!(s.max_mana, 800.0 + 150.0);
        assert_eq!(s.attack_damage, 50.0 + 15.0);
        assert_eq!(s.ability_power, 90.0 + 21.0);
        assert_eq!(s.armor, 20.0 + 9.0);
        assert_eq!(s.move_speed, 2.0);
        assert_eq!(s.attack_range, 450.0);
    }

    #[test]
    fn test_monotonic_in_level() {
        for archetype in Archetype::ALL {
            for level in 1..MAX_LEVEL {
                let lo = stats_for(archetype, level);
                let hi = stats_for(archetype, level + 1);
                assert!(hi.max_health >= lo.max_health);
                assert!(hi.max_mana >= lo.max_mana);
                assert!(hi.attack_damage >= lo.attack_damage);
                assert!(hi.ability_power >= lo.ability_power);
                assert!(hi.armor >= lo.armor);
                assert!(hi.move_speed >= lo.move_speed);
                assert!(hi.attack_range >= lo.attack_range);
            }
        }
    }

    #[test]
    fn test_level_clamped() {
        assert_eq!(stats_for(Archetype::Tank, 0), stats_for(Archetype::Tank, 1));
        assert_eq!(stats_for(Archetype::Tank, 99), stats_for(Archetype::Tank, MAX_LEVEL));
    }

    #[test]
    fn test_experience_curve() {
        assert_eq!(experience_to_level(1), 200.0);
        assert_eq!(experience_to_level(3), 600.0);
    }
}
