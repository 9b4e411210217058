//! Two-Base Lane Map
//!
//! Deterministic map geometry: lane waypoints, terrain obstacles, jungle
//! camp spawns, structure placements and hero spawn slots. Built once and
//! shared read-only by movement and combat.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::entity::{Body, EntityKind, Spatial, Team};
use crate::game::structure::StructureKind;

/// Lane a hero is assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Lane {
    Top = 0,
    Mid = 1,
    Bot = 2,
}

impl Lane {
    /// All lanes in map order.
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Mid, Lane::Bot];
}

/// Static terrain circle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Body,
}

impl Obstacle {
    /// Create an obstacle.
    pub const fn new(id: u32, position: Vec2, radius: f64) -> Self {
        Self {
            body: Body::new(id, EntityKind::Obstacle, Team::Neutral, position, radius),
        }
    }
}

impl Spatial for Obstacle {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Where a structure stands at game start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructureSpawn {
    pub kind: StructureKind,
    pub team: Team,
    pub position: Vec2,
}

/// Where a hero stands at game start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroSlot {
    pub team: Team,
    pub lane: Lane,
    pub position: Vec2,
}

// Lane waypoints, Blue base to Red base
const TOP_LANE: [(f64, f64); 6] = [
    (150.0, 200.0), (300.0, 200.0), (450.0, 200.0),
    (600.0, 200.0), (750.0, 200.0), (900.0, 200.0),
];
const MID_LANE: [(f64, f64); 5] = [
    (150.0, 500.0), (300.0, 500.0), (500.0, 500.0), (700.0, 500.0), (900.0, 500.0),
];
const BOT_LANE: [(f64, f64); 6] = [
    (150.0, 800.0), (300.0, 800.0), (450.0, 800.0),
    (600.0, 800.0), (750.0, 800.0), (900.0, 800.0),
];

// (x, y, radius)
const OBSTACLES: [(f64, f64, f64); 17] = [
    // Top jungle, blue side
    (250.0, 300.0, 40.0), (350.0, 350.0, 35.0), (300.0, 400.0, 45.0),
    // Bottom jungle, blue side
    (250.0, 700.0, 40.0), (350.0, 650.0, 35.0), (300.0, 600.0, 45.0),
    // Top jungle, red side
    (750.0, 300.0, 40.0), (650.0, 350.0, 35.0), (700.0, 400.0, 45.0),
    // Bottom jungle, red side
    (750.0, 700.0, 40.0), (650.0, 650.0, 35.0), (700.0, 600.0, 45.0),
    // Center
    (450.0, 450.0, 30.0), (550.0, 450.0, 30.0), (450.0, 550.0, 30.0),
    (550.0, 550.0, 30.0), (500.0, 500.0, 50.0),
];

const CAMPS: [(f64, f64); 7] = [
    (250.0, 350.0), (250.0, 650.0),  // blue buffs
    (750.0, 350.0), (750.0, 650.0),  // red buffs
    (500.0, 300.0), (500.0, 700.0),  // river
    (500.0, 500.0),                  // center monster
];

const STRUCTURES: [(StructureKind, Team, f64, f64); 14] = [
    (StructureKind::Nexus, Team::Blue, 100.0, 500.0),
    (StructureKind::Inhibitor, Team::Blue, 200.0, 200.0),
    (StructureKind::Inhibitor, Team::Blue, 200.0, 500.0),
    (StructureKind::Inhibitor, Team::Blue, 200.0, 800.0),
    (StructureKind::Tower, Team::Blue, 300.0, 200.0),
    (StructureKind::Tower, Team::Blue, 300.0, 500.0),
    (StructureKind::Tower, Team::Blue, 300.0, 800.0),
    (StructureKind::Nexus, Team::Red, 900.0, 500.0),
    (StructureKind::Inhibitor, Team::Red, 800.0, 200.0),
    (StructureKind::Inhibitor, Team::Red, 800.0, 500.0),
    (StructureKind::Inhibitor, Team::Red, 800.0, 800.0),
    (StructureKind::Tower, Team::Red, 700.0, 200.0),
    (StructureKind::Tower, Team::Red, 700.0, 500.0),
    (StructureKind::Tower, Team::Red, 700.0, 800.0),
];

// Two top, one mid, two bot per team
const HERO_SLOTS: [(Team, Lane, f64, f64); 10] = [
    (Team::Blue, Lane::Top, 150.0, 200.0),
    (Team::Blue, Lane::Top, 180.0, 220.0),
    (Team::Blue, Lane::Mid, 150.0, 500.0),
    (Team::Blue, Lane::Bot, 150.0, 800.0),
    (Team::Blue, Lane::Bot, 180.0, 780.0),
    (Team::Red, Lane::Top, 850.0, 200.0),
    (Team::Red, Lane::Top, 820.0, 220.0),
    (Team::Red, Lane::Mid, 850.0, 500.0),
    (Team::Red, Lane::Bot, 850.0, 800.0),
    (Team::Red, Lane::Bot, 820.0, 780.0),
];

/// Immutable map layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    top_lane: Vec<Vec2>,
    mid_lane: Vec<Vec2>,
    bot_lane: Vec<Vec2>,
    obstacles: Vec<Obstacle>,
    camp_spawns: Vec<Vec2>,
    structure_spawns: Vec<StructureSpawn>,
    hero_slots: Vec<HeroSlot>,
}

impl World {
    /// Build the standard symmetric two-base map.
    pub fn new() -> Self {
        let to_points = |pts: &[(f64, f64)]| -> Vec<Vec2> {
            pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
        };

        let obstacles = OBSTACLES
            .iter()
            .enumerate()
            .map(|(id, &(x, y, r))| Obstacle::new(id as u32, Vec2::new(x, y), r))
            .collect();

        let structure_spawns = STRUCTURES
            .iter()
            .map(|&(kind, team, x, y)| StructureSpawn {
                kind,
                team,
                position: Vec2::new(x, y),
            })
            .collect();

        let hero_slots = HERO_SLOTS
            .iter()
            .map(|&(team, lane, x, y)| HeroSlot {
                team,
                lane,
                position: Vec2::new(x, y),
            })
            .collect();

        Self {
            top_lane: to_points(&TOP_LANE),
            mid_lane: to_points(&MID_LANE),
            bot_lane: to_points(&BOT_LANE),
            obstacles,
            camp_spawns: to_points(&CAMPS),
            structure_spawns,
            hero_slots,
        }
    }

    /// A map with the standard lanes and placements but no terrain.
    ///
    /// Useful for combat scenarios where avoidance jitter would only add noise.
    pub fn without_obstacles() -> Self {
        Self {
            obstacles: Vec::new(),
            ..Self::new()
        }
    }

    /// Waypoints of a lane in Blue's walking order.
    pub fn lane(&self, lane: Lane) -> &[Vec2] {
        match lane {
            Lane::Top => &self.top_lane,
            Lane::Mid => &self.mid_lane,
            Lane::Bot => &self.bot_lane,
        }
    }

    /// The `index`-th waypoint of `lane` as walked by `team`.
    ///
    /// Red walks the lane reversed. Returns `None` once the lane is exhausted.
    pub fn waypoint(&self, lane: Lane, team: Team, index: usize) -> Option<Vec2> {
        let points = self.lane(lane);
        match team {
            Team::Red => {
                let len = points.len();
                if index >= len {
                    None
                } else {
                    points.get(len - 1 - index).copied()
                }
            }
            _ => points.get(index).copied(),
        }
    }

    /// Static terrain.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Jungle camp spawn points.
    pub fn camp_spawns(&self) -> &[Vec2] {
        &self.camp_spawns
    }

    /// Structure placements.
    pub fn structure_spawns(&self) -> &[StructureSpawn] {
        &self.structure_spawns
    }

    /// Hero starting slots.
    pub fn hero_slots(&self) -> &[HeroSlot] {
        &self.hero_slots
    }

    /// Placement of a team's nexus.
    pub fn nexus_spawn(&self, team: Team) -> Option<Vec2> {
        self.structure_spawns
            .iter()
            .find(|s| s.kind == StructureKind::Nexus && s.team == team)
            .map(|s| s.position)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts() {
        let world = World::new();
        assert_eq!(world.obstacles().len(), 17);
        assert_eq!(world.camp_spawns().len(), 7);
        assert_eq!(world.structure_spawns().len(), 14);
        assert_eq!(world.hero_slots().len(), 10);
    }

    #[test]
    fn test_one_nexus_per_team() {
        let world = World::new();
        for team in [Team::Blue, Team::Red] {
            let count = world
                .structure_spawns()
                .iter()
                .filter(|s| s.kind == StructureKind::Nexus && s.team == team)
                .count();
            assert_eq!(count, 1);
        }
        assert_eq!(world.nexus_spawn(Team::Blue), Some(Vec2::new(100.0, 500.0)));
        assert_eq!(world.nexus_spawn(Team::Red), Some(Vec2::new(900.0, 500.0)));
    }

    #[test]
    fn test_red_walks_lanes_reversed() {
        let world = World::new();
        for lane in Lane::ALL {
            let points = world.lane(lane);
            let len = points.len();
            for i in 0..len {
                assert_eq!(world.waypoint(lane, Team::Red, i), Some(points[len - 1 - i]));
                assert_eq!(world.waypoint(lane, Team::Blue, i), Some(points[i]));
            }
            assert_eq!(world.waypoint(lane, Team::Red, len), None);
            assert_eq!(world.waypoint(lane, Team::Blue, len), None);
        }
    }

    #[test]
    fn test_layout_is_mirror_symmetric() {
        let world = World::new();
        for spawn in world.structure_spawns() {
            let mirrored_x = 1000.0 - spawn.position.x;
            let opponent = spawn.team.opponent();
            assert!(world.structure_spawns().iter().any(|other| {
                other.kind == spawn.kind
                    && Some(other.team) == opponent
                    && (other.position.x - mirrored_x).abs() < 1e-9
                    && (other.position.y - spawn.position.y).abs() < 1e-9
            }));
        }
    }

    #[test]
    fn test_without_obstacles() {
        let world = World::without_obstacles();
        assert!(world.obstacles().is_empty());
        assert_eq!(world.structure_spawns().len(), 14);
    }
}
