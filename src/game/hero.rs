//! Hero State
//!
//! A hero's resources, derived stats, lifecycle (alive/dead/respawn),
//! cooldowns, timed armor modifiers and movement intent.

use serde::{Serialize, Deserialize};

use crate::core::hash::StateHasher;
use crate::core::vec2::Vec2;
use crate::game::ability::AbilitySlot;
use crate::game::entity::{Body, EntityKind, Spatial, Team};
use crate::game::stats::{experience_to_level, stats_for, Archetype, MAX_LEVEL};
use crate::game::world::Lane;

/// Collision radius of every hero.
pub const HERO_RADIUS: f64 = 15.0;

/// Respawn delay: `RESPAWN_BASE + level * RESPAWN_PER_LEVEL` seconds.
pub const RESPAWN_BASE: f64 = 5.0;
pub const RESPAWN_PER_LEVEL: f64 = 2.0;

/// Stable hero identifier (index into the game's hero list).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeroId(pub u32);

impl HeroId {
    /// Index into `Game::heroes`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Temporary additive armor bonus.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmorModifier {
    /// Seconds left before the bonus lapses
    pub remaining: f64,
    /// Armor added while active
    pub magnitude: f64,
}

/// Result of applying damage to a hero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageOutcome {
    /// Health actually removed
    pub dealt: f64,
    /// This hit caused the death
    pub killed: bool,
}

/// Armor mitigation: the share of raw damage that gets through.
#[inline]
pub fn mitigation_factor(armor: f64) -> f64 {
    100.0 / (100.0 + armor.max(0.0))
}

/// State of a single hero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub body: Body,
    pub name: String,
    pub archetype: Archetype,
    pub lane: Lane,

    pub level: u32,
    pub experience: f64,

    pub health: f64,
    pub max_health: f64,
    pub mana: f64,
    pub max_mana: f64,
    pub attack_damage: f64,
    pub ability_power: f64,
    /// Armor from level, without temporary modifiers
    pub base_armor: f64,
    pub move_speed: f64,
    pub attack_range: f64,

    /// Active temporary armor bonuses
    pub armor_modifiers: Vec<ArmorModifier>,

    pub alive: bool,
    /// Seconds until respawn; only meaningful while dead
    pub respawn_timer: f64,

    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,

    /// Remaining cooldown per slot, indexed by `AbilitySlot as usize`
    pub cooldowns: [f64; 4],

    /// Where the hero is currently walking
    pub target: Vec2,
    /// Next lane waypoint to visit
    pub path_index: usize,
    /// Host has taken control; suppresses autonomous lane walking
    pub selected: bool,
}

impl Hero {
    /// Create a level-1 hero at full health and mana.
    pub fn new(id: HeroId, name: impl Into<String>, archetype: Archetype, team: Team, lane: Lane, position: Vec2) -> Self {
        let stats = stats_for(archetype, 1);
        Self {
            body: Body::new(id.0, EntityKind::Hero, team, position, HERO_RADIUS),
            name: name.into(),
            archetype,
            lane,
            level: 1,
            experience: 0.0,
            health: stats.max_health,
            max_health: stats.max_health,
            mana: stats.max_mana,
            max_mana: stats.max_mana,
            attack_damage: stats.attack_damage,
            ability_power: stats.ability_power,
            base_armor: stats.armor,
            move_speed: stats.move_speed,
            attack_range: stats.attack_range,
            armor_modifiers: Vec::new(),
            alive: true,
            respawn_timer: 0.0,
            kills: 0,
            deaths: 0,
            assists: 0,
            cooldowns: [0.0; 4],
            target: position,
            path_index: 0,
            selected: false,
        }
    }

    /// Identifier.
    #[inline]
    pub fn id(&self) -> HeroId {
        HeroId(self.body.id)
    }

    /// Effective armor: base plus every active modifier.
    pub fn armor(&self) -> f64 {
        self.base_armor + self.armor_modifiers.iter().map(|m| m.magnitude).sum::<f64>()
    }

    /// Add a temporary armor bonus.
    pub fn add_armor_modifier(&mut self, magnitude: f64, duration: f64) {
        self.armor_modifiers.push(ArmorModifier {
            remaining: duration,
            magnitude,
        });
    }

    /// Remaining cooldown of a slot.
    #[inline]
    pub fn cooldown(&self, slot: AbilitySlot) -> f64 {
        self.cooldowns[slot as usize]
    }

    /// Check if a slot is off cooldown.
    #[inline]
    pub fn ability_ready(&self, slot: AbilitySlot) -> bool {
        self.cooldowns[slot as usize] <= 0.0
    }

    /// Advance cooldowns and armor modifiers by `dt` seconds.
    ///
    /// Expired modifiers are dropped, so each bonus lapses exactly once.
    pub fn tick_timers(&mut self, dt: f64) {
        for cd in &mut self.cooldowns {
            if *cd > 0.0 {
                *cd = (*cd - dt).max(0.0);
            }
        }

        self.armor_modifiers.retain_mut(|m| {
            m.remaining -= dt;
            m.remaining > 0.0
        });
    }

    /// Passive regeneration while alive, capped at the maxima.
    pub fn regenerate(&mut self, dt: f64, health_per_sec: f64, mana_per_sec: f64) {
        if !self.alive {
            return;
        }
        self.health = (self.health + health_per_sec * dt).min(self.max_health);
        self.mana = (self.mana + mana_per_sec * dt).min(self.max_mana);
    }

    /// Take raw damage reduced by armor.
    pub fn take_damage(&mut self, raw: f64) -> DamageOutcome {
        let mitigated = raw * mitigation_factor(self.armor());
        self.take_true_damage(mitigated)
    }

    /// Take damage that ignores armor.
    pub fn take_true_damage(&mut self, amount: f64) -> DamageOutcome {
        if !self.alive || amount <= 0.0 {
            return DamageOutcome::default();
        }

        let dealt = amount.min(self.health);
        self.health -= amount;

        if self.health <= 0.0 {
            self.die();
            return DamageOutcome { dealt, killed: true };
        }

        DamageOutcome { dealt, killed: false }
    }

    /// Restore health to a living hero. Returns the amount healed.
    pub fn heal(&mut self, amount: f64) -> f64 {
        if !self.alive || amount <= 0.0 {
            return 0.0;
        }
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    /// Spend mana if enough is available.
    pub fn spend_mana(&mut self, cost: f64) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana = (self.mana - cost).max(0.0);
        true
    }

    /// Respawn delay for the current level.
    #[inline]
    pub fn respawn_delay(&self) -> f64 {
        RESPAWN_BASE + self.level as f64 * RESPAWN_PER_LEVEL
    }

    /// Mark dead and start the respawn timer.
    fn die(&mut self) {
        self.alive = false;
        self.health = 0.0;
        self.deaths += 1;
        self.respawn_timer = self.respawn_delay();
        self.armor_modifiers.clear();
    }

    /// Count down the respawn timer. Returns true when it has run out.
    pub fn tick_respawn(&mut self, dt: f64) -> bool {
        if self.alive {
            return false;
        }
        self.respawn_timer -= dt;
        self.respawn_timer <= 0.0
    }

    /// Bring the hero back at `position` with full resources.
    pub fn respawn(&mut self, position: Vec2) {
        self.alive = true;
        self.respawn_timer = 0.0;
        self.health = self.max_health;
        self.mana = self.max_mana;
        self.body.position = position;
        self.target = position;
        self.path_index = 0;
    }

    /// Grant experience and apply any level-ups. Returns levels gained.
    pub fn gain_experience(&mut self, amount: f64) -> u32 {
        if self.level >= MAX_LEVEL {
            return 0;
        }
        self.experience += amount;

        let mut gained = 0;
        while self.level < MAX_LEVEL && self.experience >= experience_to_level(self.level) {
            self.experience -= experience_to_level(self.level);
            self.level += 1;
            gained += 1;
        }
        if self.level >= MAX_LEVEL {
            self.experience = 0.0;
        }
        if gained > 0 {
            self.refresh_stats();
        }
        gained
    }

    /// Recompute derived stats for the current level.
    ///
    /// Current health and mana keep their fraction of the (new) maxima.
    pub fn refresh_stats(&mut self) {
        let stats = stats_for(self.archetype, self.level);

        let health_frac = if self.max_health > 0.0 { self.health / self.max_health } else { 1.0 };
        let mana_frac = if self.max_mana > 0.0 { self.mana / self.max_mana } else { 1.0 };

        self.max_health = stats.max_health;
        self.max_mana = stats.max_mana;
        self.attack_damage = stats.attack_damage;
        self.ability_power = stats.ability_power;
        self.base_armor = stats.armor;
        self.move_speed = stats.move_speed;
        self.attack_range = stats.attack_range;

        if self.alive {
            self.health = (health_frac * self.max_health).clamp(0.0, self.max_health);
        }
        self.mana = (mana_frac * self.max_mana).clamp(0.0, self.max_mana);
    }

    /// Set the movement target.
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Hash this hero's state for verification.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.write_u32(self.body.id);
        hasher.write_point(self.body.position);
        hasher.write_u8(self.archetype as u8);
        hasher.write_u32(self.level);
        hasher.write_f64(self.experience);
        hasher.write_f64(self.health);
        hasher.write_f64(self.mana);
        hasher.write_flag(self.alive);
        hasher.write_f64(self.respawn_timer);
        hasher.write_u32(self.kills);
        hasher.write_u32(self.deaths);
        for cd in &self.cooldowns {
            hasher.write_f64(*cd);
        }
        for m in &self.armor_modifiers {
            hasher.write_f64(m.remaining);
            hasher.write_f64(m.magnitude);
        }
        hasher.write_point(self.target);
        hasher.write_u32(self.path_index as u32);
    }
}

impl Spatial for Hero {
    fn body(&self) -> &Body {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank() -> Hero {
        Hero::new(HeroId(0), "Astra", Archetype::Tank, Team::Blue, Lane::Top, Vec2::new(150.0, 200.0))
    }

    #[test]
    fn test_new_hero_full_resources() {
        let hero = tank();
        assert!(hero.alive);
        assert_eq!(hero.health, 1000.0);
        assert_eq!(hero.mana, 400.0);
        assert_eq!(hero.armor(), 50.0);
        assert_eq!(hero.target, hero.position());
    }

    #[test]
    fn test_mitigated_damage() {
        let mut hero = tank();
        let outcome = hero.take_damage(100.0);
        let expected = 100.0 * 100.0 / 150.0;
        assert!((outcome.dealt - expected).abs() < 1e-9);
        assert!((hero.health - (1000.0 - expected)).abs() < 1e-9);
        assert!(!outcome.killed);
    }

    #[test]
    fn test_zero_armor_takes_full_damage() {
        let mut hero = tank();
        hero.base_armor = 0.0;
        hero.take_damage(120.0);
        assert_eq!(hero.health, 880.0);
    }

    #[test]
    fn test_death_clamps_and_starts_timer() {
        let mut hero = tank();
        let outcome = hero.take_true_damage(5000.0);
        assert!(outcome.killed);
        assert_eq!(outcome.dealt, 1000.0);
        assert!(!hero.alive);
        assert_eq!(hero.health, 0.0);
        assert_eq!(hero.deaths, 1);
        assert_eq!(hero.respawn_timer, 7.0);

        // Dead heroes ignore further damage
        let again = hero.take_true_damage(10.0);
        assert_eq!(again, DamageOutcome::default());
        assert_eq!(hero.deaths, 1);
    }

    #[test]
    fn test_respawn_restores_resources() {
        let mut hero = tank();
        hero.mana = 10.0;
        hero.take_true_damage(5000.0);

        assert!(!hero.tick_respawn(6.9));
        assert!(hero.tick_respawn(0.2));
        hero.respawn(Vec2::new(120.0, 480.0));

        assert!(hero.alive);
        assert_eq!(hero.health, hero.max_health);
        assert_eq!(hero.mana, hero.max_mana);
        assert_eq!(hero.path_index, 0);
        assert_eq!(hero.target, Vec2::new(120.0, 480.0));
    }

    #[test]
    fn test_armor_modifiers_expire_once() {
        let mut hero = tank();
        hero.add_armor_modifier(20.0, 5.0);
        hero.add_armor_modifier(50.0, 8.0);
        assert_eq!(hero.armor(), 120.0);

        hero.tick_timers(5.0);
        assert_eq!(hero.armor(), 100.0);

        hero.tick_timers(3.0);
        assert_eq!(hero.armor(), 50.0);

        hero.tick_timers(10.0);
        assert_eq!(hero.armor(), 50.0);
    }

    #[test]
    fn test_cooldowns_never_negative() {
        let mut hero = tank();
        hero.cooldowns[0] = 1.0;
        hero.tick_timers(0.6);
        assert!((hero.cooldown(AbilitySlot::Ability1) - 0.4).abs() < 1e-12);
        hero.tick_timers(0.6);
        assert_eq!(hero.cooldown(AbilitySlot::Ability1), 0.0);
        assert!(hero.ability_ready(AbilitySlot::Ability1));
    }

    #[test]
    fn test_regen_capped() {
        let mut hero = tank();
        hero.health = 999.9;
        hero.mana = 100.0;
        hero.regenerate(1.0, 0.5, 1.0);
        assert_eq!(hero.health, 1000.0);
        assert_eq!(hero.mana, 101.0);
    }

    #[test]
    fn test_level_up_preserves_fraction() {
        let mut hero = tank();
        hero.health = 500.0;
        let gained = hero.gain_experience(250.0);

        assert_eq!(gained, 1);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 50.0);
        assert_eq!(hero.max_health, 1100.0);
        assert_eq!(hero.health, 550.0);
        assert_eq!(hero.base_armor, 53.0);
    }

    #[test]
    fn test_level_cap() {
        let mut hero = tank();
        hero.gain_experience(1.0e9);
        assert_eq!(hero.level, MAX_LEVEL);
        assert_eq!(hero.gain_experience(1000.0), 0);
    }

    #[test]
    fn test_heal_dead_hero_is_noop() {
        let mut hero = tank();
        hero.take_true_damage(5000.0);
        assert_eq!(hero.heal(100.0), 0.0);
        assert_eq!(hero.health, 0.0);
    }
}
