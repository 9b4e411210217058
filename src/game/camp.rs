//! Jungle Camps
//!
//! Neutral monsters that hit any hero wandering too close and respawn a
//! fixed time after being cleared.

use serde::{Serialize, Deserialize};

use crate::core::hash::StateHasher;
use crate::core::vec2::Vec2;
use crate::game::entity::{Body, EntityKind, Spatial, Team};
use crate::game::hero::DamageOutcome;

/// Camp collision radius.
pub const CAMP_RADIUS: f64 = 30.0;
/// Camp health when (re)spawned.
pub const CAMP_MAX_HEALTH: f64 = 800.0;
/// Camp attack damage.
pub const CAMP_ATTACK_DAMAGE: f64 = 50.0;
/// Heroes strictly closer than this are attacked.
pub const CAMP_AGGRO_RANGE: f64 = 150.0;
/// Fraction of attack damage dealt per second.
pub const CAMP_DAMAGE_SCALE: f64 = 0.2;
/// Seconds between clear and respawn.
pub const CAMP_RESPAWN_TIME: f64 = 60.0;
/// Experience granted to the hero that clears a camp.
pub const CAMP_EXPERIENCE: f64 = 100.0;

/// A neutral jungle camp.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JungleCamp {
    pub body: Body,
    pub health: f64,
    pub max_health: f64,
    pub attack_damage: f64,
    pub respawn_timer: f64,
    pub alive: bool,
}

impl JungleCamp {
    /// Create a camp at full health.
    pub fn new(id: u32, position: Vec2) -> Self {
        Self {
            body: Body::new(id, EntityKind::JungleCamp, Team::Neutral, position, CAMP_RADIUS),
            health: CAMP_MAX_HEALTH,
            max_health: CAMP_MAX_HEALTH,
            attack_damage: CAMP_ATTACK_DAMAGE,
            respawn_timer: 0.0,
            alive: true,
        }
    }

    /// Damage per second dealt to an aggroed hero.
    #[inline]
    pub fn damage_per_second(&self) -> f64 {
        self.attack_damage * CAMP_DAMAGE_SCALE
    }

    /// Take raw damage. Starts the respawn timer when cleared.
    pub fn take_damage(&mut self, amount: f64) -> DamageOutcome {
        if !self.alive || amount <= 0.0 {
            return DamageOutcome::default();
        }

        let dealt = amount.min(self.health);
        self.health -= amount;

        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
            self.respawn_timer = CAMP_RESPAWN_TIME;
            return DamageOutcome { dealt, killed: true };
        }

        DamageOutcome { dealt, killed: false }
    }

    /// Count down while cleared. Returns true on the tick the camp respawns.
    pub fn tick_respawn(&mut self, dt: f64) -> bool {
        if self.alive {
            return false;
        }
        self.respawn_timer -= dt;
        if self.respawn_timer <= 0.0 {
            self.alive = true;
            self.health = self.max_health;
            self.respawn_timer = 0.0;
            return true;
        }
        false
    }

    /// Hash this camp's state for verification.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.write_u32(self.body.id);
        hasher.write_f64(self.health);
        hasher.write_f64(self.respawn_timer);
        hasher.write_flag(self.alive);
    }
}

impl Spatial for JungleCamp {
    fn body(&self) -> &Body {
        &self.body
    }
}
