//! # Lane Siege
//!
//! Tick-driven simulation of a two-team lane battle: ten autonomous heroes
//! walk three lanes, fight each other, towers and jungle camps, level up,
//! die and respawn, until one team's nexus falls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        LANE SIEGE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── vec2.rs     - 2D map-space vectors                      │
//! │  ├── rng.rs      - Seeded Xorshift128+ PRNG                  │
//! │  └── hash.rs     - SHA-256 state hashing                     │
//! │                                                              │
//! │  game/           - Game logic                                │
//! │  ├── world.rs    - Lanes, obstacles, spawn layout            │
//! │  ├── stats.rs    - Archetype stat model                      │
//! │  ├── hero.rs     - Hero state and lifecycle                  │
//! │  ├── movement.rs - Lane AI and obstacle avoidance            │
//! │  ├── combat.rs   - Targeting and damage                      │
//! │  ├── ability.rs  - Four-slot abilities                       │
//! │  ├── state.rs    - Game aggregate and host controls          │
//! │  └── tick.rs     - Simulation loop and replay                │
//! │                                                              │
//! │  config.rs       - Tuning and environment overrides          │
//! │  driver.rs       - Host frame loop, speed, pause, reset      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Every random choice (avoidance detours, respawn offsets, auto-casts,
//! roster shuffles) draws from one seeded RNG owned by the game. The same
//! seed, `dt` sequence and host commands give the same state hash.
//!
//! ```
//! use lane_siege::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::with_seed(7));
//! for _ in 0..100 {
//!     game.update(0.5);
//! }
//! assert!(game.elapsed > 49.0);
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod config;
pub mod driver;

// Re-export commonly used types
pub use crate::core::vec2::Vec2;
pub use crate::core::rng::DeterministicRng;
pub use config::{ConfigError, GameConfig};
pub use driver::SimulationDriver;
pub use game::state::{Game, GameState};
pub use game::tick::TickResult;
pub use game::entity::Team;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Map width in map units
pub const MAP_WIDTH: f64 = 1000.0;

/// Map height in map units
pub const MAP_HEIGHT: f64 = 1000.0;
