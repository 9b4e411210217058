//! Host Commands
//!
//! Everything a host can do to a running game besides advancing time.
//! A [`CommandLog`] keeps the commands, tagged with the tick they were
//! issued on, together with the `dt` of every update, which is all a
//! replay needs.

use serde::{Serialize, Deserialize};

use crate::game::ability::AbilitySlot;
use crate::game::hero::HeroId;
use crate::game::state::Game;

/// A host action.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostCommand {
    /// Cast an ability for a hero
    UseAbility { hero: HeroId, slot: AbilitySlot },
    /// Walk a hero toward a map point
    SetTarget { hero: HeroId, x: f64, y: f64 },
    /// Select one hero (deselecting the rest), or clear the selection
    Select { hero: Option<HeroId> },
}

impl HostCommand {
    /// Apply to a game. Returns whether the game accepted it.
    pub fn apply(&self, game: &mut Game) -> bool {
        match *self {
            HostCommand::UseAbility { hero, slot } => game.use_ability(hero, slot),
            HostCommand::SetTarget { hero, x, y } => game.set_hero_target(hero, x, y),
            HostCommand::Select { hero } => game.select_only(hero),
        }
    }
}

/// A command tagged with the number of ticks completed when it was issued.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedCommand {
    /// Applied before tick `frame + 1`
    pub frame: u64,
    pub command: HostCommand,
}

impl RecordedCommand {
    /// Tag a command with its frame.
    pub fn new(frame: u64, command: HostCommand) -> Self {
        Self { frame, command }
    }
}

/// Append-only log of a session: host commands and update steps.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommandLog {
    commands: Vec<RecordedCommand>,
    /// Game-time `dt` passed to each update, in order
    steps: Vec<f64>,
}

impl CommandLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command issued after `frame` ticks.
    pub fn record(&mut self, frame: u64, command: HostCommand) {
        self.commands.push(RecordedCommand::new(frame, command));
    }

    /// Record the `dt` of one update.
    pub fn record_step(&mut self, dt: f64) {
        self.steps.push(dt);
    }

    /// Recorded commands in issue order.
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Recorded update steps in order.
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.steps.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.steps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_apply_commands() {
        let mut game = Game::new(GameConfig::default());

        assert!(HostCommand::Select { hero: Some(HeroId(4)) }.apply(&mut game));
        assert!(game.heroes[4].selected);

        assert!(HostCommand::SetTarget { hero: HeroId(4), x: 250.0, y: 500.0 }.apply(&mut game));
        assert!(!HostCommand::SetTarget { hero: HeroId(4), x: 2500.0, y: 500.0 }.apply(&mut game));

        assert!(HostCommand::UseAbility { hero: HeroId(4), slot: AbilitySlot::Ability1 }.apply(&mut game));
        assert!(!HostCommand::UseAbility { hero: HeroId(4), slot: AbilitySlot::Ability1 }.apply(&mut game));
    }

    #[test]
    fn test_command_log() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());

        log.record(0, HostCommand::Select { hero: None });
        log.record(5, HostCommand::Select { hero: Some(HeroId(1)) });
        assert_eq!(log.len(), 2);
        assert_eq!(log.commands()[1].frame, 5);

        log.record_step(0.16);
        log.record_step(0.33);
        assert_eq!(log.steps(), &[0.16, 0.33]);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_command_json_roundtrip() {
        let cmd = RecordedCommand::new(9, HostCommand::UseAbility { hero: HeroId(3), slot: AbilitySlot::Ultimate });
        let json = serde_json::to_string(&cmd).unwrap();
        let back: RecordedCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
