//! State Hashing
//!
//! SHA-256 fingerprint of a whole match. Two runs that start from the same
//! seed and receive the same host commands at the same ticks must produce
//! the same fingerprint; the headless runner and the replay tests compare
//! them.

use sha2::{Sha256, Digest};
use super::vec2::Vec2;

/// Fingerprint of a match at one tick.
pub type StateHash = [u8; 32];

/// Prefix mixed in before any state, so hashes never collide with other
/// SHA-256 uses of the same bytes.
const STATE_DOMAIN: &[u8] = b"LANE_SIEGE_STATE_V1";

/// Incremental state fingerprint.
///
/// Entities write their fields in a fixed order; reordering writes changes
/// the hash.
pub struct StateHasher {
    inner: Sha256,
}

impl Default for StateHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHasher {
    pub fn new() -> Self {
        let mut inner = Sha256::new();
        inner.update(STATE_DOMAIN);
        Self { inner }
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.inner.update([value]);
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.inner.update(value.to_le_bytes());
    }

    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.inner.update(value.to_le_bytes());
    }

    /// Exact bit pattern. `0.0` and `-0.0` differ, which is fine since
    /// identical runs produce identical bits.
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64(value.to_bits());
    }

    #[inline]
    pub fn write_point(&mut self, value: Vec2) {
        self.write_f64(value.x);
        self.write_f64(value.y);
    }

    #[inline]
    pub fn write_flag(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    pub fn finish(self) -> StateHash {
        self.inner.finalize().into()
    }
}

/// Fingerprint a match: tick and seed first, then whatever `write_state`
/// adds.
pub fn compute_state_hash<F>(tick: u64, seed: u64, write_state: F) -> StateHash
where
    F: FnOnce(&mut StateHasher),
{
    let mut hasher = StateHasher::new();
    hasher.write_u64(tick);
    hasher.write_u64(seed);
    write_state(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_like(health: f64, position: Vec2) -> StateHash {
        compute_state_hash(40, 9, |h| {
            h.write_u32(3);
            h.write_point(position);
            h.write_f64(health);
            h.write_flag(health > 0.0);
        })
    }

    #[test]
    fn test_same_state_same_hash() {
        let p = Vec2::new(150.0, 500.0);
        assert_eq!(hero_like(420.5, p), hero_like(420.5, p));
    }

    #[test]
    fn test_tiny_health_change_detected() {
        let p = Vec2::new(150.0, 500.0);
        assert_ne!(hero_like(420.5, p), hero_like(420.5 + 1e-9, p));
    }

    #[test]
    fn test_tick_and_seed_are_part_of_hash() {
        let base = compute_state_hash(10, 1, |_| {});
        assert_ne!(base, compute_state_hash(11, 1, |_| {}));
        assert_ne!(base, compute_state_hash(10, 2, |_| {}));
    }

    #[test]
    fn test_write_order_matters() {
        let a = compute_state_hash(0, 0, |h| {
            h.write_u32(1);
            h.write_u32(2);
        });
        let b = compute_state_hash(0, 0, |h| {
            h.write_u32(2);
            h.write_u32(1);
        });
        assert_ne!(a, b);
    }
}
