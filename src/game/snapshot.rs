//! Read-Only Snapshot
//!
//! A detached, serializable view of the game for renderers and tooling.
//! Holds copies only; nothing in a snapshot can mutate the game.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::entity::{EntityKind, Spatial, Team};
use crate::game::hero::HeroId;
use crate::game::stats::Archetype;
use crate::game::state::{Game, GameState};
use crate::game::structure::StructureKind;

/// One entity as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub kind: EntityKind,
    pub team: Team,
    pub position: Vec2,
    pub radius: f64,
    pub health: f64,
    pub max_health: f64,
    /// Zero for entities without mana
    pub mana: f64,
    pub max_mana: f64,
    pub alive: bool,
}

/// Hero-specific details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroView {
    pub id: HeroId,
    pub name: String,
    pub archetype: Archetype,
    pub level: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub armor: f64,
    pub respawn_timer: f64,
    pub cooldowns: [f64; 4],
    pub selected: bool,
    pub entity: EntityView,
}

/// Structure-specific details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructureView {
    pub structure_kind: StructureKind,
    pub entity: EntityView,
}

/// Per-team scoreboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: Team,
    pub kills: u32,
    pub deaths: u32,
    pub heroes_alive: usize,
    pub structures_alive: usize,
    pub environment_deaths: u32,
}

/// Full game snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tick: u64,
    pub elapsed: f64,
    pub state: GameState,
    pub winner: Option<Team>,
    pub heroes: Vec<HeroView>,
    pub structures: Vec<StructureView>,
    pub camps: Vec<EntityView>,
    pub obstacles: Vec<EntityView>,
    pub teams: [TeamSummary; 2],
}

impl GameSnapshot {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn view<S: Spatial>(entity: &S, health: f64, max_health: f64, mana: f64, max_mana: f64, alive: bool) -> EntityView {
    let body = entity.body();
    EntityView {
        id: body.id,
        kind: body.kind,
        team: body.team,
        position: body.position,
        radius: body.radius,
        health,
        max_health,
        mana,
        max_mana,
        alive,
    }
}

impl Game {
    /// Take a read-only snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let heroes = self
            .heroes
            .iter()
            .map(|h| HeroView {
                id: h.id(),
                name: h.name.clone(),
                archetype: h.archetype,
                level: h.level,
                kills: h.kills,
                deaths: h.deaths,
                assists: h.assists,
                armor: h.armor(),
                respawn_timer: h.respawn_timer,
                cooldowns: h.cooldowns,
                selected: h.selected,
                entity: view(h, h.health, h.max_health, h.mana, h.max_mana, h.alive),
            })
            .collect();

        let structures = self
            .structures
            .iter()
            .map(|s| StructureView {
                structure_kind: s.kind,
                entity: view(s, s.health, s.max_health, 0.0, 0.0, s.alive),
            })
            .collect();

        let camps = self
            .camps
            .iter()
            .map(|c| view(c, c.health, c.max_health, 0.0, 0.0, c.alive))
            .collect();

        let obstacles = self
            .world
            .obstacles()
            .iter()
            .map(|o| view(o, 0.0, 0.0, 0.0, 0.0, true))
            .collect();

        let summary = |team: Team| TeamSummary {
            team,
            kills: self.team_kills(team),
            deaths: self.team_deaths(team),
            heroes_alive: self.heroes_alive(team),
            structures_alive: self.structures_alive(team),
            environment_deaths: self.environment_deaths(team),
        };

        GameSnapshot {
            tick: self.tick,
            elapsed: self.elapsed,
            state: self.state,
            winner: self.winner,
            heroes,
            structures,
            camps,
            obstacles,
            teams: [summary(Team::Blue), summary(Team::Red)],
        }
    }
}
