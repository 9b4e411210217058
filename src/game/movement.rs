//! Hero Movement / Pathing AI
//!
//! Heroes walk straight at their target. A step that would end inside an
//! obstacle is dropped and the target is replaced with a random nearby
//! point, which lets heroes shuffle around terrain. Once a hero reaches its
//! target the lane AI hands out the next waypoint, and finally the enemy
//! nexus.

use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::collision::first_blocking;
use crate::game::entity::Spatial;
use crate::game::hero::Hero;
use crate::game::world::World;

/// Waypoints closer than this count as reached.
pub const WAYPOINT_REACHED: f64 = 20.0;

/// Avoidance detour distance range.
pub const DETOUR_MIN: f64 = 30.0;
pub const DETOUR_MAX: f64 = 80.0;

/// Detour targets stay this far inside the map edges.
pub const MAP_MARGIN: f64 = 20.0;

/// What a hero did with its movement this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Stepped toward the target
    Moved,
    /// Step blocked by the obstacle at this index; picked a detour
    Blocked(usize),
    /// At target; lane AI chose the next one
    Retargeted,
    /// At target with nothing to do (selected, or no enemy nexus)
    Holding,
}

/// Advance one hero's movement by `dt` seconds.
///
/// `arrival` is the distance at which the hero counts as standing on its
/// target. Dead heroes are not moved.
pub fn move_hero(
    hero: &mut Hero,
    world: &World,
    enemy_nexus: Option<Vec2>,
    rng: &mut DeterministicRng,
    dt: f64,
    arrival: f64,
) -> MoveOutcome {
    if !hero.alive {
        return MoveOutcome::Holding;
    }

    let position = hero.position();
    if position.distance(hero.target) > arrival {
        let next = position.step_toward(hero.target, hero.move_speed * dt);

        return match first_blocking(next, hero.body.radius, world.obstacles()) {
            None => {
                hero.body.position = next;
                MoveOutcome::Moved
            }
            Some(idx) => {
                hero.target = detour_target(position, rng);
                MoveOutcome::Blocked(idx)
            }
        };
    }

    if hero.selected {
        return MoveOutcome::Holding;
    }

    if lane_step(hero, world, enemy_nexus) {
        MoveOutcome::Retargeted
    } else {
        MoveOutcome::Holding
    }
}

/// Random point 30-80 units away, kept inside the map margin.
pub fn detour_target(from: Vec2, rng: &mut DeterministicRng) -> Vec2 {
    rng.point_in_ring(from, DETOUR_MIN, DETOUR_MAX).clamp_to_map(MAP_MARGIN)
}

/// Lane AI: aim at the current waypoint and advance once close to it.
///
/// With the lane exhausted the hero aims at the enemy nexus. Returns false
/// when there is nowhere to go.
pub fn lane_step(hero: &mut Hero, world: &World, enemy_nexus: Option<Vec2>) -> bool {
    match world.waypoint(hero.lane, hero.team(), hero.path_index) {
        Some(waypoint) => {
            hero.target = waypoint;
            if hero.distance_to_point(waypoint) < WAYPOINT_REACHED {
                hero.path_index += 1;
            }
            true
        }
        None => match enemy_nexus {
            Some(nexus) => {
                hero.target = nexus;
                true
            }
            None => false,
        },
    }
}
