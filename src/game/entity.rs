//! Shared Entity Capability
//!
//! Every object on the map (heroes, structures, camps, obstacles) carries a
//! [`Body`]: identity, category, team, position and collision radius. The
//! [`Spatial`] trait exposes the shared distance/collision contract so
//! combat and movement code can treat them uniformly.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::collision::circles_overlap;

// =============================================================================
// TEAM
// =============================================================================

/// Side an entity fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    /// West base, lanes walked in waypoint order
    Blue = 0,
    /// East base, lanes walked in reverse waypoint order
    Red = 1,
    /// Jungle camps and terrain
    Neutral = 2,
}

impl Team {
    /// The opposing side. Neutral has no opponent.
    pub fn opponent(self) -> Option<Team> {
        match self {
            Team::Blue => Some(Team::Red),
            Team::Red => Some(Team::Blue),
            Team::Neutral => None,
        }
    }

    /// True when `self` and `other` are on opposing non-neutral sides.
    #[inline]
    pub fn is_enemy_of(self, other: Team) -> bool {
        self.opponent() == Some(other)
    }
}

// =============================================================================
// ENTITY KIND
// =============================================================================

/// Category of a game object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EntityKind {
    Hero = 0,
    Structure = 1,
    JungleCamp = 2,
    Obstacle = 3,
}

// =============================================================================
// BODY
// =============================================================================

/// Common fields of every game object.
///
/// `id` is unique within its [`EntityKind`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub kind: EntityKind,
    pub team: Team,
    pub position: Vec2,
    pub radius: f64,
}

impl Body {
    /// Create a body.
    pub const fn new(id: u32, kind: EntityKind, team: Team, position: Vec2, radius: f64) -> Self {
        Self {
            id,
            kind,
            team,
            position,
            radius,
        }
    }
}

/// Shared position/collision contract.
pub trait Spatial {
    /// The entity's body.
    fn body(&self) -> &Body;

    /// Current position.
    #[inline]
    fn position(&self) -> Vec2 {
        self.body().position
    }

    /// Team.
    #[inline]
    fn team(&self) -> Team {
        self.body().team
    }

    /// Center-to-center distance to another entity.
    #[inline]
    fn distance_to<S: Spatial + ?Sized>(&self, other: &S) -> f64 {
        self.position().distance(other.position())
    }

    /// Center-to-point distance.
    #[inline]
    fn distance_to_point(&self, point: Vec2) -> f64 {
        self.position().distance(point)
    }

    /// True if the two collision circles overlap.
    #[inline]
    fn overlaps<S: Spatial + ?Sized>(&self, other: &S) -> bool {
        let a = self.body();
        let b = other.body();
        circles_overlap(a.position, a.radius, b.position, b.radius)
    }
}

impl Spatial for Body {
    fn body(&self) -> &Body {
        self
    }
}

/// Index of the nearest candidate satisfying `filter`, within `range` of `from`.
///
/// Ties resolve to the lowest index, which keeps target selection stable
/// across identical runs.
pub fn nearest_within<'a, S, I, F>(from: Vec2, range: f64, candidates: I, mut filter: F) -> Option<usize>
where
    S: Spatial + 'a,
    I: IntoIterator<Item = &'a S>,
    F: FnMut(&S) -> bool,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, candidate) in candidates.into_iter().enumerate() {
        if !filter(candidate) {
            continue;
        }
        let d = candidate.distance_to_point(from);
        if d > range {
            continue;
        }
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(id: u32, x: f64, y: f64, radius: f64) -> Body {
        Body::new(id, EntityKind::Obstacle, Team::Neutral, Vec2::new(x, y), radius)
    }

    #[test]
    fn test_team_opponents() {
        assert_eq!(Team::Blue.opponent(), Some(Team::Red));
        assert_eq!(Team::Red.opponent(), Some(Team::Blue));
        assert_eq!(Team::Neutral.opponent(), None);
        assert!(Team::Blue.is_enemy_of(Team::Red));
        assert!(!Team::Blue.is_enemy_of(Team::Neutral));
        assert!(!Team::Neutral.is_enemy_of(Team::Neutral));
    }

    #[test]
    fn test_distance_and_overlap() {
        let a = body_at(0, 0.0, 0.0, 15.0);
        let b = body_at(1, 30.0, 40.0, 40.0);
        assert_eq!(a.distance_to(&b), 50.0);
        assert!(a.overlaps(&b));

        let c = body_at(2, 300.0, 0.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_nearest_within() {
        let bodies = vec![
            body_at(0, 100.0, 0.0, 1.0),
            body_at(1, 50.0, 0.0, 1.0),
            body_at(2, 10.0, 0.0, 1.0),
        ];

        let nearest = nearest_within(Vec2::ZERO, 200.0, &bodies, |_| true);
        assert_eq!(nearest, Some(2));

        let filtered = nearest_within(Vec2::ZERO, 200.0, &bodies, |b| b.id != 2);
        assert_eq!(filtered, Some(1));

        let out_of_range = nearest_within(Vec2::ZERO, 5.0, &bodies, |_| true);
        assert_eq!(out_of_range, None);
    }
}
