//! Structures
//!
//! Towers, inhibitors and nexuses. Structures never respawn: once destroyed
//! they stay dead in the collection. Only towers attack.

use serde::{Serialize, Deserialize};

use crate::core::hash::StateHasher;
use crate::core::vec2::Vec2;
use crate::game::entity::{Body, EntityKind, Spatial, Team};
use crate::game::hero::DamageOutcome;

/// Structure subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StructureKind {
    Tower = 0,
    Inhibitor = 1,
    Nexus = 2,
}

impl StructureKind {
    /// Collision radius.
    pub fn radius(self) -> f64 {
        match self {
            StructureKind::Tower => 25.0,
            StructureKind::Inhibitor => 35.0,
            StructureKind::Nexus => 50.0,
        }
    }

    /// Starting (and maximum) health.
    pub fn max_health(self) -> f64 {
        match self {
            StructureKind::Tower => 2000.0,
            StructureKind::Inhibitor => 1500.0,
            StructureKind::Nexus => 3000.0,
        }
    }

    /// `(damage, range, attacks per second)` for attacking structures.
    pub fn attack_profile(self) -> Option<(f64, f64, f64)> {
        match self {
            StructureKind::Tower => Some((150.0, 300.0, 1.0)),
            StructureKind::Inhibitor | StructureKind::Nexus => None,
        }
    }
}

/// A destructible base structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Structure {
    pub body: Body,
    pub kind: StructureKind,
    pub health: f64,
    pub max_health: f64,
    /// Zero for non-attacking structures
    pub attack_damage: f64,
    pub attack_range: f64,
    pub attack_speed: f64,
    /// Accumulated attack charge; an attack is ready at 1.0
    pub attack_charge: f64,
    pub alive: bool,
}

impl Structure {
    /// Create a structure at full health.
    pub fn new(id: u32, kind: StructureKind, team: Team, position: Vec2) -> Self {
        let (attack_damage, attack_range, attack_speed) = kind.attack_profile().unwrap_or((0.0, 0.0, 0.0));
        Self {
            body: Body::new(id, EntityKind::Structure, team, position, kind.radius()),
            kind,
            health: kind.max_health(),
            max_health: kind.max_health(),
            attack_damage,
            attack_range,
            attack_speed,
            attack_charge: 0.0,
            alive: true,
        }
    }

    /// Whether this structure fires at heroes.
    #[inline]
    pub fn can_attack(&self) -> bool {
        self.attack_speed > 0.0
    }

    /// Take raw damage. Structures have no armor.
    pub fn take_damage(&mut self, amount: f64) -> DamageOutcome {
        if !self.alive || amount <= 0.0 {
            return DamageOutcome::default();
        }

        let dealt = amount.min(self.health);
        self.health -= amount;

        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
            return DamageOutcome { dealt, killed: true };
        }

        DamageOutcome { dealt, killed: false }
    }

    /// Charge the attack timer. Returns true if an attack is ready.
    ///
    /// The charge keeps building while no target is around, and is only
    /// spent by [`Structure::spend_attack`].
    pub fn charge_attack(&mut self, dt: f64) -> bool {
        if !self.alive || !self.can_attack() {
            return false;
        }
        self.attack_charge += dt * self.attack_speed;
        self.attack_charge >= 1.0
    }

    /// Consume a ready attack.
    #[inline]
    pub fn spend_attack(&mut self) {
        self.attack_charge = 0.0;
    }

    /// Hash this structure's state for verification.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.write_u32(self.body.id);
        hasher.write_u8(self.kind as u8);
        hasher.write_u8(self.body.team as u8);
        hasher.write_f64(self.health);
        hasher.write_f64(self.attack_charge);
        hasher.write_flag(self.alive);
    }
}

impl Spatial for Structure {
    fn body(&self) -> &Body {
        &self.body
    }
}
