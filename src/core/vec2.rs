//! Map-Space Vectors
//!
//! Positions, movement steps and ranges on the 1000 x 1000 lane map. Units
//! are map units; speeds are map units per second.

use std::fmt;
use std::ops::{Add, Sub};
use serde::{Serialize, Deserialize};

use crate::{MAP_HEIGHT, MAP_WIDTH};

/// Point or offset on the map. `x` grows east, `y` grows south.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared distance; use for range comparisons without a sqrt.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        self.sub(other).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::ZERO
        } else {
            self.scale(1.0 / len)
        }
    }

    /// Move up to `step` units toward `target`, never past it.
    #[inline]
    pub fn step_toward(self, target: Self, step: f64) -> Self {
        let offset = target.sub(self);
        if offset.length() <= step {
            return target;
        }
        self.add(offset.normalize().scale(step))
    }

    /// Clamp into the map inset by `margin` on every side.
    #[inline]
    pub fn clamp_to_map(self, margin: f64) -> Self {
        Self::new(
            self.x.clamp(margin, MAP_WIDTH - margin),
            self.y.clamp(margin, MAP_HEIGHT - margin),
        )
    }

    /// Finite and inside `[0, MAP_WIDTH] x [0, MAP_HEIGHT]`.
    #[inline]
    pub fn is_on_map(self) -> bool {
        (0.0..=MAP_WIDTH).contains(&self.x) && (0.0..=MAP_HEIGHT).contains(&self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2::sub(self, rhs)
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x, self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_to_tower_distance() {
        let hero = Vec2::new(700.0, 450.0);
        let tower = Vec2::new(730.0, 490.0);
        assert_eq!(hero.distance_squared(tower), 2500.0);
        assert_eq!(hero.distance(tower), 50.0);
        assert_eq!((tower - hero).length(), 50.0);
    }

    #[test]
    fn test_normalize() {
        let dir = Vec2::new(-30.0, 40.0).normalize();
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_walk_step() {
        // Marksman at 2.5 u/s over a 0.5s tick
        let start = Vec2::new(100.0, 500.0);
        let next = start.step_toward(Vec2::new(400.0, 500.0), 2.5 * 0.5);
        assert_eq!(next, Vec2::new(101.25, 500.0));

        // Standing on the target stays put
        assert_eq!(start.step_toward(start, 1.25), start);
    }

    #[test]
    fn test_long_step_stops_on_target() {
        let start = Vec2::new(100.0, 500.0);
        let target = Vec2::new(118.0, 500.0);
        assert_eq!(start.step_toward(target, 25.0), target);
        assert_eq!(start.step_toward(target, 18.0), target);
        assert_eq!(start.step_toward(target, 2500.0), target);
    }

    #[test]
    fn test_detour_clamped_inside_margin() {
        let inside = Vec2::new(500.0, 500.0);
        assert_eq!(inside.clamp_to_map(20.0), inside);
        assert_eq!(
            Vec2::new(-40.0, 1200.0).clamp_to_map(20.0),
            Vec2::new(20.0, MAP_HEIGHT - 20.0)
        );
    }

    #[test]
    fn test_on_map_bounds() {
        assert!(Vec2::new(0.0, MAP_HEIGHT).is_on_map());
        assert!(!Vec2::new(-0.1, 10.0).is_on_map());
        assert!(!Vec2::new(10.0, MAP_HEIGHT + 0.1).is_on_map());
        assert!(!Vec2::new(f64::NAN, 10.0).is_on_map());
        assert!(!Vec2::new(f64::INFINITY, 10.0).is_on_map());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(100.0, 512.3).to_string(), "(100.0, 512.3)");
    }
}
