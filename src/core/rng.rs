//! Seeded Randomness
//!
//! One Xorshift128+ stream per game. Every stochastic decision in the
//! simulation draws from it in tick order: roster shuffles at setup,
//! avoidance detours, auto-cast rolls and respawn offsets. Replaying the
//! same seed and commands therefore replays the same decisions.

use serde::{Serialize, Deserialize};

use super::hash::StateHasher;
use super::vec2::Vec2;

/// The game's random stream.
///
/// ```
/// use lane_siege::DeterministicRng;
///
/// let mut a = DeterministicRng::new(2024);
/// let mut b = DeterministicRng::new(2024);
/// assert_eq!(a.next_int(5), b.next_int(5));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeterministicRng {
    s0: u64,
    s1: u64,
}

impl DeterministicRng {
    /// Seed the stream. SplitMix64 spreads low-entropy seeds (0, 1, 2, ...)
    /// over the whole state.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        let s0 = splitmix64(&mut sm);
        let s1 = splitmix64(&mut sm);
        if s0 == 0 && s1 == 0 {
            return Self { s0: 1, s1: 1 };
        }
        Self { s0, s1 }
    }

    #[inline]
    fn next_raw(&mut self) -> u64 {
        let (s0, mut s1) = (self.s0, self.s1);
        let out = s0.wrapping_add(s1);
        s1 ^= s0;
        self.s0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s1 = s1.rotate_left(37);
        out
    }

    /// Uniform integer in `[0, bound)`; 0 when `bound` is 0.
    #[inline]
    pub fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        (self.next_raw() % bound as u64) as u32
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_raw() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform float in `[lo, hi)`; `lo` when the range is empty.
    #[inline]
    pub fn between(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli roll. Always draws, so the stream advances the same way
    /// whatever `p` is. `p >= 1` always succeeds, `p <= 0` never does.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// `center` moved by up to `spread` on each axis.
    pub fn jitter_square(&mut self, center: Vec2, spread: f64) -> Vec2 {
        let dx = self.between(-spread, spread);
        let dy = self.between(-spread, spread);
        Vec2::new(center.x + dx, center.y + dy)
    }

    /// Point at a uniform angle and a distance in `[inner, outer)` from
    /// `origin`.
    pub fn point_in_ring(&mut self, origin: Vec2, inner: f64, outer: f64) -> Vec2 {
        let angle = self.next_f64() * std::f64::consts::TAU;
        let distance = self.between(inner, outer);
        origin.add(Vec2::from_angle(angle).scale(distance))
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int((i + 1) as u32) as usize;
            items.swap(i, j);
        }
    }

    /// Add the stream position to a state hash.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.write_u64(self.s0);
        hasher.write_u64(self.s1);
    }
}

#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
