//! Game Logic Module
//!
//! All game simulation code. Deterministic for a given seed and command log.
//!
//! ## Module Structure
//!
//! - `entity`: Shared body, team and spatial trait
//! - `world`: Map layout (lanes, obstacles, spawns)
//! - `stats`: Archetype stat model
//! - `hero`, `structure`, `camp`: Entity state
//! - `collision`: Circle tests
//! - `movement`: Lane AI and obstacle avoidance
//! - `combat`: Targeting and damage
//! - `ability`: Four-slot ability system
//! - `state`: The `Game` aggregate
//! - `tick`: Simulation loop and replay
//! - `command`: Host commands
//! - `events`: Game events
//! - `snapshot`: Read-only view for renderers
//! - `scenario`: Custom game builder

pub mod entity;
pub mod world;
pub mod stats;
pub mod hero;
pub mod structure;
pub mod camp;
pub mod collision;
pub mod movement;
pub mod combat;
pub mod ability;
pub mod state;
pub mod tick;
pub mod command;
pub mod events;
pub mod snapshot;
pub mod scenario;

// Re-export key types
pub use ability::AbilitySlot;
pub use command::{CommandLog, HostCommand, RecordedCommand};
pub use entity::{Body, EntityKind, Spatial, Team};
pub use events::{GameEvent, GameEventData, KillCredit};
pub use hero::{Hero, HeroId};
pub use scenario::Scenario;
pub use snapshot::GameSnapshot;
pub use state::{Game, GameState};
pub use stats::Archetype;
pub use structure::StructureKind;
pub use tick::{replay, TickResult};
pub use world::{Lane, World};
