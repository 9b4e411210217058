//! Game Events
//!
//! Events generated during simulation for hosts, logs and replay checks.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::ability::AbilitySlot;
use crate::game::entity::Team;
use crate::game::hero::HeroId;
use crate::game::structure::StructureKind;

/// Priority for event processing order.
///
/// Lower value = processed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventPriority {
    /// Hero deaths first
    HeroDeath = 0,
    /// Then structure losses
    StructureDestroyed = 1,
    /// Then jungle clears
    CampCleared = 2,
    /// Then level-ups
    LevelUp = 3,
    /// Then abilities
    AbilityCast = 4,
    /// Then respawns
    Respawn = 5,
    /// Lowest priority
    Other = 255,
}

/// Who gets credit for a hero death.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KillCredit {
    /// An enemy hero (auto-attack or ability)
    Hero(HeroId),
    /// A tower, by structure id
    Tower(u32),
    /// A jungle camp, by camp id
    Camp(u32),
}

impl KillCredit {
    /// True for tower and camp kills.
    #[inline]
    pub fn is_environment(&self) -> bool {
        !matches!(self, KillCredit::Hero(_))
    }
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// Hero died
    HeroKilled {
        victim: HeroId,
        victim_team: Team,
        credit: KillCredit,
    },

    /// Hero came back at its base
    HeroRespawned {
        hero: HeroId,
        position: Vec2,
    },

    /// Hero cast an ability
    AbilityCast {
        hero: HeroId,
        slot: AbilitySlot,
        /// Heroes damaged, healed or buffed
        affected: u32,
    },

    /// Hero gained a level
    HeroLeveledUp {
        hero: HeroId,
        level: u32,
    },

    /// Structure reached zero health
    StructureDestroyed {
        structure_id: u32,
        kind: StructureKind,
        team: Team,
        destroyed_by: HeroId,
    },

    /// Jungle camp cleared
    CampCleared {
        camp_id: u32,
        cleared_by: HeroId,
    },

    /// Jungle camp back up
    CampRespawned {
        camp_id: u32,
    },

    /// A nexus fell
    GameEnded {
        winner: Team,
        elapsed: f64,
    },
}

/// A game event with timing and priority.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u64,

    /// Elapsed game seconds at that tick
    pub time: f64,

    /// Processing priority
    pub priority: EventPriority,

    /// Entity involved (for tie-breaking)
    pub subject: Option<u32>,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u64, time: f64, priority: EventPriority, data: GameEventData) -> Self {
        let subject = match &data {
            GameEventData::HeroKilled { victim, .. } => Some(victim.0),
            GameEventData::HeroRespawned { hero, .. } => Some(hero.0),
            GameEventData::AbilityCast { hero, .. } => Some(hero.0),
            GameEventData::HeroLeveledUp { hero, .. } => Some(hero.0),
            GameEventData::StructureDestroyed { structure_id, .. } => Some(*structure_id),
            GameEventData::CampCleared { camp_id, .. } => Some(*camp_id),
            GameEventData::CampRespawned { camp_id } => Some(*camp_id),
            GameEventData::GameEnded { .. } => None,
        };

        Self {
            tick,
            time,
            priority,
            subject,
            data,
        }
    }

    /// Create hero killed event.
    pub fn hero_killed(tick: u64, time: f64, victim: HeroId, victim_team: Team, credit: KillCredit) -> Self {
        Self::new(
            tick,
            time,
            EventPriority::HeroDeath,
            GameEventData::HeroKilled {
                victim,
                victim_team,
                credit,
            },
        )
    }

    /// Create hero respawned event.
    pub fn hero_respawned(tick: u64, time: f64, hero: HeroId, position: Vec2) -> Self {
        Self::new(tick, time, EventPriority::Respawn, GameEventData::HeroRespawned { hero, position })
    }

    /// Create ability cast event.
    pub fn ability_cast(tick: u64, time: f64, hero: HeroId, slot: AbilitySlot, affected: u32) -> Self {
        Self::new(
            tick,
            time,
            EventPriority::AbilityCast,
            GameEventData::AbilityCast { hero, slot, affected },
        )
    }

    /// Create level up event.
    pub fn hero_leveled_up(tick: u64, time: f64, hero: HeroId, level: u32) -> Self {
        Self::new(tick, time, EventPriority::LevelUp, GameEventData::HeroLeveledUp { hero, level })
    }

    /// Create structure destroyed event.
    pub fn structure_destroyed(
        tick: u64,
        time: f64,
        structure_id: u32,
        kind: StructureKind,
        team: Team,
        destroyed_by: HeroId,
    ) -> Self {
        Self::new(
            tick,
            time,
            EventPriority::StructureDestroyed,
            GameEventData::StructureDestroyed {
                structure_id,
                kind,
                team,
                destroyed_by,
            },
        )
    }

    /// Create camp cleared event.
    pub fn camp_cleared(tick: u64, time: f64, camp_id: u32, cleared_by: HeroId) -> Self {
        Self::new(
            tick,
            time,
            EventPriority::CampCleared,
            GameEventData::CampCleared { camp_id, cleared_by },
        )
    }

    /// Create camp respawned event.
    pub fn camp_respawned(tick: u64, time: f64, camp_id: u32) -> Self {
        Self::new(tick, time, EventPriority::Other, GameEventData::CampRespawned { camp_id })
    }

    /// Create game ended event.
    pub fn game_ended(tick: u64, time: f64, winner: Team) -> Self {
        Self::new(
            tick,
            time,
            EventPriority::Other,
            GameEventData::GameEnded { winner, elapsed: time },
        )
    }
}

impl PartialEq for GameEvent {
    fn eq(&self, other: &Self) -> bool {
        self.tick == other.tick
            && self.priority == other.priority
            && self.subject == other.subject
    }
}

impl Eq for GameEvent {}

impl PartialOrd for GameEvent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GameEvent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: tick, then priority, then subject
        self.tick
            .cmp(&other.tick)
            .then(self.priority.cmp(&other.priority))
            .then(self.subject.cmp(&other.subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ordering() {
        let death_a = GameEvent::hero_killed(10, 1.0, HeroId(1), Team::Blue, KillCredit::Tower(4));
        let cast = GameEvent::ability_cast(10, 1.0, HeroId(0), AbilitySlot::Ability1, 1);
        let death_b = GameEvent::hero_killed(10, 1.0, HeroId(2), Team::Red, KillCredit::Hero(HeroId(0)));
        let later = GameEvent::hero_killed(11, 1.1, HeroId(0), Team::Blue, KillCredit::Camp(0));

        // Same tick, but death < cast
        assert!(death_a < cast);

        // Same tick and priority, lower subject first
        assert!(death_a < death_b);

        assert!(cast < later);
    }

    #[test]
    fn test_environment_credit() {
        assert!(KillCredit::Tower(0).is_environment());
        assert!(KillCredit::Camp(3).is_environment());
        assert!(!KillCredit::Hero(HeroId(2)).is_environment());
    }

    #[test]
    fn test_game_ended_has_no_subject() {
        let event = GameEvent::game_ended(100, 10.0, Team::Red);
        assert_eq!(event.subject, None);
        assert_eq!(event.data, GameEventData::GameEnded { winner: Team::Red, elapsed: 10.0 });
    }
}
