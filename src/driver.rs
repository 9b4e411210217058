//! Simulation Driver
//!
//! Host-side wrapper around a [`Game`]: converts wall-clock frame time into
//! game time with a speed multiplier, handles pause and reset, keeps a
//! single-hero selection and records every host command and update step,
//! so any session can be replayed with [`replay`](crate::game::tick::replay).

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::ability::AbilitySlot;
use crate::game::command::{CommandLog, HostCommand};
use crate::game::hero::HeroId;
use crate::game::state::Game;
use crate::game::tick::TickResult;

/// Fastest supported speed multiplier.
pub const MAX_SPEED: f64 = 100.0;

/// Drives a game from a host's frame loop.
#[derive(Debug)]
pub struct SimulationDriver {
    config: GameConfig,
    game: Game,
    speed: f64,
    paused: bool,
    log: CommandLog,
}

impl SimulationDriver {
    /// Start a fresh game.
    pub fn new(config: GameConfig) -> Self {
        let speed = config.game_speed.clamp(0.0, MAX_SPEED);
        Self {
            game: Game::new(config.clone()),
            config,
            speed,
            paused: false,
            log: CommandLog::new(),
        }
    }

    /// The running game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Recorded host commands and update steps since the last reset.
    pub fn commands(&self) -> &CommandLog {
        &self.log
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the speed multiplier. Rejects non-finite or negative values.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if !speed.is_finite() || speed < 0.0 {
            return false;
        }
        self.speed = speed.min(MAX_SPEED);
        debug!(speed = self.speed, "speed changed");
        true
    }

    /// Check if frames are currently skipped.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop advancing the game.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume advancing the game.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause state. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Throw the game away and start over with the same config.
    pub fn reset(&mut self) {
        info!(seed = self.config.seed, "resetting game");
        self.game = Game::new(self.config.clone());
        self.log.clear();
        self.speed = self.config.game_speed.clamp(0.0, MAX_SPEED);
        self.paused = false;
    }

    /// Advance by `elapsed` wall-clock seconds scaled by the speed.
    ///
    /// Returns `None` while paused.
    pub fn frame(&mut self, elapsed: f64) -> Option<TickResult> {
        if self.paused {
            return None;
        }
        let dt = elapsed * self.speed;
        self.log.record_step(dt);
        Some(self.game.update(dt))
    }

    /// Select one hero for manual control, or clear the selection.
    pub fn select(&mut self, hero: Option<HeroId>) -> bool {
        self.issue(HostCommand::Select { hero })
    }

    /// Move the selected hero toward a map point.
    pub fn move_selected(&mut self, x: f64, y: f64) -> bool {
        match self.game.selected_hero() {
            Some(hero) => self.issue(HostCommand::SetTarget { hero, x, y }),
            None => false,
        }
    }

    /// Select the hero under a map point, or clear the selection.
    pub fn click(&mut self, x: f64, y: f64) -> Option<HeroId> {
        let hero = self.game.hero_at(crate::core::vec2::Vec2::new(x, y));
        self.select(hero);
        hero
    }

    /// Cast an ability for a hero.
    pub fn use_ability(&mut self, hero: HeroId, slot: AbilitySlot) -> bool {
        self.issue(HostCommand::UseAbility { hero, slot })
    }

    /// Point a hero at a map position.
    pub fn set_hero_target(&mut self, hero: HeroId, x: f64, y: f64) -> bool {
        self.issue(HostCommand::SetTarget { hero, x, y })
    }

    /// Apply a command and log it if the game accepted it.
    pub fn issue(&mut self, command: HostCommand) -> bool {
        let accepted = command.apply(&mut self.game);
        if accepted {
            self.log.record(self.game.tick, command);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tick::replay;

    #[test]
    fn test_frame_scales_by_speed() {
        let mut driver = SimulationDriver::new(GameConfig::default());
        assert_eq!(driver.speed(), 10.0);

        driver.frame(0.016);
        assert!((driver.game().elapsed - 0.16).abs() < 1e-12);
    }

    #[test]
    fn test_pause_skips_frames() {
        let mut driver = SimulationDriver::new(GameConfig::default());
        driver.pause();
        assert!(driver.frame(1.0).is_none());
        assert_eq!(driver.game().tick, 0);

        assert!(!driver.toggle_pause());
        assert!(driver.frame(1.0).is_some());
        assert_eq!(driver.game().tick, 1);
    }

    #[test]
    fn test_set_speed_validation() {
        let mut driver = SimulationDriver::new(GameConfig::default());
        assert!(driver.set_speed(20.0));
        assert_eq!(driver.speed(), 20.0);
        assert!(!driver.set_speed(f64::INFINITY));
        assert!(!driver.set_speed(-2.0));
        assert!(driver.set_speed(1.0e6));
        assert_eq!(driver.speed(), MAX_SPEED);
    }

    #[test]
    fn test_reset_reconstructs() {
        let mut driver = SimulationDriver::new(GameConfig::with_seed(5));
        let fresh = driver.game().compute_hash();

        driver.select(Some(HeroId(0)));
        for _ in 0..20 {
            driver.frame(0.05);
        }
        assert_ne!(driver.game().compute_hash(), fresh);

        driver.reset();
        assert_eq!(driver.game().compute_hash(), fresh);
        assert!(driver.commands().is_empty());
        assert_eq!(driver.game().selected_hero(), None);
    }

    #[test]
    fn test_single_selection() {
        let mut driver = SimulationDriver::new(GameConfig::default());
        assert_eq!(driver.click(150.0, 500.0), Some(HeroId(2)));
        assert!(driver.move_selected(300.0, 450.0));
        assert_eq!(driver.game().heroes[2].target.x, 300.0);

        assert_eq!(driver.click(500.0, 500.0), None);
        assert_eq!(driver.game().selected_hero(), None);
        assert!(!driver.move_selected(300.0, 450.0));
    }

    #[test]
    fn test_recorded_commands_replay() {
        let config = GameConfig::with_seed(31);
        let mut driver = SimulationDriver::new(config.clone());
        driver.set_speed(1.0);

        for frame in 0..200 {
            if frame == 20 {
                driver.select(Some(HeroId(7)));
                driver.set_hero_target(HeroId(7), 700.0, 450.0);
            }
            if frame == 50 {
                driver.use_ability(HeroId(1), AbilitySlot::Ability2);
            }
            driver.frame(0.5);
        }

        let log = driver.commands();
        assert_eq!(log.steps().len(), 200);
        let (replayed, _) = replay(&config, log.commands(), log.steps());
        assert_eq!(replayed.compute_hash(), driver.game().compute_hash());
    }

    #[test]
    fn test_variable_frames_replay() {
        let config = GameConfig::with_seed(8);
        let mut driver = SimulationDriver::new(config.clone());

        for frame in 0..300 {
            match frame {
                40 => {
                    driver.click(150.0, 500.0);
                    driver.move_selected(320.0, 470.0);
                }
                90 => {
                    driver.set_speed(35.0);
                }
                120 => {
                    driver.pause();
                }
                130 => {
                    driver.resume();
                    driver.use_ability(HeroId(6), AbilitySlot::Ability1);
                }
                200 => {
                    driver.set_speed(4.0);
                    driver.select(None);
                }
                _ => {}
            }
            // Uneven wall-clock frames
            let elapsed = if frame % 2 == 0 { 0.016 } else { 0.033 };
            driver.frame(elapsed);
        }

        let log = driver.commands();
        assert_eq!(log.steps().len(), 290);
        let (replayed, _) = replay(&config, log.commands(), log.steps());
        assert_eq!(replayed.elapsed, driver.game().elapsed);
        assert_eq!(replayed.compute_hash(), driver.game().compute_hash());
    }
}
