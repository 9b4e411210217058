//! Scenario Builder
//!
//! Assembles games with hand-placed heroes for tests and tooling. Every
//! scenario has one nexus per team, even if the caller never adds one.

use crate::config::GameConfig;
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::camp::JungleCamp;
use crate::game::entity::Team;
use crate::game::hero::{Hero, HeroId};
use crate::game::state::{Game, BLUE_NAMES, RED_NAMES};
use crate::game::stats::Archetype;
use crate::game::structure::{Structure, StructureKind};
use crate::game::world::{Lane, World};

#[derive(Clone, Debug)]
struct HeroPlacement {
    archetype: Archetype,
    team: Team,
    lane: Lane,
    position: Vec2,
    level: u32,
}

/// Builder for custom games.
#[derive(Clone, Debug)]
pub struct Scenario {
    config: GameConfig,
    world: World,
    heroes: Vec<HeroPlacement>,
    structures: Vec<(StructureKind, Team, Vec2)>,
    camps: Vec<Vec2>,
}

impl Scenario {
    /// Empty scenario on an obstacle-free map.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            world: World::without_obstacles(),
            heroes: Vec::new(),
            structures: Vec::new(),
            camps: Vec::new(),
        }
    }

    /// Use a specific map layout.
    pub fn world(mut self, world: World) -> Self {
        self.world = world;
        self
    }

    /// Place a level-1 hero walking the mid lane.
    pub fn hero(self, archetype: Archetype, team: Team, x: f64, y: f64) -> Self {
        self.hero_in_lane(archetype, team, Lane::Mid, x, y)
    }

    /// Place a level-1 hero assigned to `lane`.
    pub fn hero_in_lane(mut self, archetype: Archetype, team: Team, lane: Lane, x: f64, y: f64) -> Self {
        self.heroes.push(HeroPlacement {
            archetype,
            team,
            lane,
            position: Vec2::new(x, y),
            level: 1,
        });
        self
    }

    /// Set the level of the most recently placed hero.
    pub fn at_level(mut self, level: u32) -> Self {
        if let Some(last) = self.heroes.last_mut() {
            last.level = level;
        }
        self
    }

    /// Add a structure.
    ///
    /// A team has exactly one nexus: adding another one replaces it.
    pub fn structure(mut self, kind: StructureKind, team: Team, x: f64, y: f64) -> Self {
        self.push_structure(kind, team, Vec2::new(x, y));
        self
    }

    /// Add every structure of the map layout.
    pub fn standard_structures(mut self) -> Self {
        let spawns: Vec<_> = self
            .world
            .structure_spawns()
            .iter()
            .map(|spawn| (spawn.kind, spawn.team, spawn.position))
            .collect();
        for (kind, team, position) in spawns {
            self.push_structure(kind, team, position);
        }
        self
    }

    fn push_structure(&mut self, kind: StructureKind, team: Team, position: Vec2) {
        if kind == StructureKind::Nexus {
            self.structures
                .retain(|&(k, t, _)| !(k == StructureKind::Nexus && t == team));
        }
        self.structures.push((kind, team, position));
    }

    /// Add a jungle camp.
    pub fn camp(mut self, x: f64, y: f64) -> Self {
        self.camps.push(Vec2::new(x, y));
        self
    }

    /// Add every camp of the map layout.
    pub fn standard_camps(mut self) -> Self {
        self.camps.extend_from_slice(self.world.camp_spawns());
        self
    }

    /// Build the game.
    pub fn build(self) -> Game {
        let Scenario {
            config,
            world,
            heroes: placements,
            mut structures,
            camps,
        } = self;

        // Fill in a missing nexus at the layout's spot
        for team in [Team::Blue, Team::Red] {
            let has_nexus = structures
                .iter()
                .any(|&(kind, t, _)| kind == StructureKind::Nexus && t == team);
            if !has_nexus {
                let position = world.nexus_spawn(team).unwrap_or(match team {
                    Team::Red => Vec2::new(900.0, 500.0),
                    _ => Vec2::new(100.0, 500.0),
                });
                structures.push((StructureKind::Nexus, team, position));
            }
        }

        let mut blue_count = 0;
        let mut red_count = 0;
        let heroes = placements
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let name = match p.team {
                    Team::Red => {
                        red_count += 1;
                        RED_NAMES[(red_count - 1) % RED_NAMES.len()]
                    }
                    _ => {
                        blue_count += 1;
                        BLUE_NAMES[(blue_count - 1) % BLUE_NAMES.len()]
                    }
                };
                let mut hero = Hero::new(HeroId(i as u32), name, p.archetype, p.team, p.lane, p.position);
                if p.level > 1 {
                    hero.level = p.level.min(crate::game::stats::MAX_LEVEL);
                    hero.refresh_stats();
                }
                hero
            })
            .collect();

        let structures = structures
            .into_iter()
            .enumerate()
            .map(|(id, (kind, team, position))| Structure::new(id as u32, kind, team, position))
            .collect();

        let camps = camps
            .into_iter()
            .enumerate()
            .map(|(id, position)| JungleCamp::new(id as u32, position))
            .collect();

        let rng = DeterministicRng::new(config.seed);
        Game::assemble(config, world, rng, heroes, structures, camps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Spatial;

    #[test]
    fn test_always_has_both_nexuses() {
        let game = Scenario::new(GameConfig::default()).build();
        assert!(game.nexus(Team::Blue).is_some());
        assert!(game.nexus(Team::Red).is_some());
        assert_eq!(game.structures.len(), 2);
        assert!(game.heroes.is_empty());
        assert!(game.camps.is_empty());
    }

    #[test]
    fn test_custom_nexus_kept() {
        let game = Scenario::new(GameConfig::default())
            .structure(StructureKind::Nexus, Team::Red, 600.0, 600.0)
            .build();
        assert_eq!(game.nexus_position(Team::Red), Some(Vec2::new(600.0, 600.0)));
        assert_eq!(game.structures.len(), 2);
    }

    #[test]
    fn test_second_nexus_replaces_first() {
        let mut game = Scenario::new(GameConfig::default())
            .standard_structures()
            .structure(StructureKind::Nexus, Team::Red, 600.0, 600.0)
            .build();

        let red_nexuses = game
            .structures
            .iter()
            .filter(|s| s.kind == StructureKind::Nexus && s.team() == Team::Red)
            .count();
        assert_eq!(red_nexuses, 1);
        assert_eq!(game.structures.len(), 14);
        assert_eq!(game.nexus_position(Team::Red), Some(Vec2::new(600.0, 600.0)));

        // The surviving nexus decides the game
        let idx = game
            .structures
            .iter()
            .position(|s| s.kind == StructureKind::Nexus && s.team() == Team::Red)
            .unwrap();
        game.structures[idx].take_damage(1.0e9);
        game.update(0.1);
        assert!(game.is_ended());
        assert_eq!(game.winner, Some(Team::Blue));
    }

    #[test]
    fn test_placed_heroes() {
        let game = Scenario::new(GameConfig::default())
            .hero(Archetype::Tank, Team::Blue, 400.0, 500.0)
            .hero(Archetype::Mage, Team::Red, 500.0, 500.0)
            .at_level(3)
            .build();

        assert_eq!(game.heroes.len(), 2);
        assert_eq!(game.heroes[0].name, "Astra");
        assert_eq!(game.heroes[1].name, "Fury");
        assert_eq!(game.heroes[1].level, 3);
        assert_eq!(game.heroes[1].max_health, 750.0);
        assert_eq!(game.heroes[1].health, 750.0);
        assert_eq!(game.heroes[1].position(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_standard_layout() {
        let game = Scenario::new(GameConfig::default())
            .standard_structures()
            .standard_camps()
            .build();
        assert_eq!(game.structures.len(), 14);
        assert_eq!(game.camps.len(), 7);
    }
}
