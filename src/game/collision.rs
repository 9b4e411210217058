//! Collision Detection
//!
//! Circle-vs-circle tests for entities and static terrain.

use crate::core::vec2::Vec2;
use crate::game::world::Obstacle;

/// Check if two circles overlap (touching counts).
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f64, pos_b: Vec2, radius_b: f64) -> bool {
    let combined_radius = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= combined_radius * combined_radius
}

/// Check whether a circle at `position` would intrude into an obstacle.
///
/// Strict inequality: a hero exactly grazing an obstacle is not blocked.
#[inline]
pub fn blocked_by(position: Vec2, radius: f64, obstacle: &Obstacle) -> bool {
    let combined = radius + obstacle.body.radius;
    position.distance_squared(obstacle.body.position) < combined * combined
}

/// First obstacle (by index) that a circle at `position` would intrude into.
pub fn first_blocking(position: Vec2, radius: f64, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| blocked_by(position, radius, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);

        // distance 1.0, combined radius 1.2
        assert!(circles_overlap(a, 0.6, b, 0.6));

        let c = Vec2::new(2.0, 0.0);
        assert!(!circles_overlap(a, 0.6, c, 0.6));
    }

    #[test]
    fn test_blocked_by_is_strict() {
        let rock = Obstacle::new(0, Vec2::new(100.0, 100.0), 30.0);

        // Exactly touching: 15 + 30 = 45
        assert!(!blocked_by(Vec2::new(145.0, 100.0), 15.0, &rock));
        assert!(blocked_by(Vec2::new(144.9, 100.0), 15.0, &rock));
    }

    #[test]
    fn test_first_blocking() {
        let obstacles = vec![
            Obstacle::new(0, Vec2::new(0.0, 0.0), 10.0),
            Obstacle::new(1, Vec2::new(100.0, 0.0), 10.0),
        ];

        assert_eq!(first_blocking(Vec2::new(95.0, 0.0), 5.0, &obstacles), Some(1));
        assert_eq!(first_blocking(Vec2::new(50.0, 0.0), 5.0, &obstacles), None);
    }
}
