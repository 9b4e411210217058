//! Simulation Tick
//!
//! The game loop. Each tick advances every entity by the same `dt` in a
//! fixed order:
//!
//! 1. Heroes, by id: respawn countdown, movement, regen, auto-attack,
//!    stochastic auto-cast
//! 2. Structures: tower shots
//! 3. Jungle camps: respawn countdown, aggro damage
//! 4. Win condition
//!
//! Given the same config and the same host commands at the same ticks, the
//! simulation produces identical state hashes.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::ability::AbilitySlot;
use crate::game::combat::{self, Strike};
use crate::game::command::RecordedCommand;
use crate::game::entity::{Spatial, Team};
use crate::game::events::GameEvent;
use crate::game::movement;
use crate::game::state::{Game, GameState};

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Events generated this tick, in (tick, priority, subject) order
    pub events: Vec<GameEvent>,
    /// Whether the game is over after this tick
    pub game_ended: bool,
    /// Winner (once the game has ended)
    pub winner: Option<Team>,
}

/// Run one simulation tick of `dt` seconds.
///
/// A game that has ended is left untouched. Non-finite or negative `dt`
/// is ignored.
pub fn tick(game: &mut Game, dt: f64) -> TickResult {
    let mut result = TickResult::default();

    if game.state == GameState::Ended {
        result.game_ended = true;
        result.winner = game.winner;
        return result;
    }

    if !dt.is_finite() || dt < 0.0 {
        return result;
    }

    // 0. Advance clock
    game.tick += 1;
    game.elapsed += dt;

    // 1. Heroes
    for i in 0..game.heroes.len() {
        update_hero(game, i, dt);
    }

    // 2. Structures
    for s in 0..game.structures.len() {
        update_structure(game, s, dt);
    }

    // 3. Jungle camps
    for c in 0..game.camps.len() {
        update_camp(game, c, dt);
    }

    // 4. Win condition
    check_win_condition(game);

    result.events = game.take_events();
    result.events.sort();
    result.game_ended = game.is_ended();
    result.winner = game.winner;
    result
}

/// Advance one hero.
fn update_hero(game: &mut Game, i: usize, dt: f64) {
    game.heroes[i].tick_timers(dt);

    if !game.heroes[i].alive {
        if game.heroes[i].tick_respawn(dt) {
            let team = game.heroes[i].team();
            let position = game.respawn_point(team);
            game.heroes[i].respawn(position);

            let id = game.heroes[i].id();
            debug!(hero = id.0, %position, "hero respawned");
            game.push_event(GameEvent::hero_respawned(game.tick, game.elapsed, id, position));
        }
        return;
    }

    // Movement
    let enemy_nexus = game.heroes[i]
        .team()
        .opponent()
        .and_then(|enemy| game.nexus_position(enemy));
    movement::move_hero(
        &mut game.heroes[i],
        &game.world,
        enemy_nexus,
        &mut game.rng,
        dt,
        game.config.arrival_threshold,
    );

    // Regeneration
    let (health_regen, mana_regen) = (game.config.health_regen, game.config.mana_regen);
    game.heroes[i].regenerate(dt, health_regen, mana_regen);

    // Auto-attack
    let strike = combat::hero_attack(&mut game.heroes, &mut game.structures, &mut game.camps, i, dt);
    let attacker = game.heroes[i].id();
    match strike {
        Strike::Hero { kill: Some(kill), .. } => game.record_kill(kill),
        Strike::Structure { target, destroyed: true } => game.record_structure_destroyed(target, attacker),
        Strike::Camp { target, cleared: true } => game.record_camp_cleared(target, i),
        _ => {}
    }

    // Auto-cast while trading with a hero
    if strike.hit_hero() && game.rng.chance(game.config.auto_cast_rate * dt) {
        let slot = AbilitySlot::ALL[game.rng.next_int(AbilitySlot::ALL.len() as u32) as usize];
        game.cast_ability(i, slot);
    }
}

/// Let a tower shoot.
fn update_structure(game: &mut Game, s: usize, dt: f64) {
    if !game.structures[s].alive || !game.structures[s].can_attack() {
        return;
    }
    if let Some((_, Some(kill))) = combat::tower_attack(&mut game.structures[s], &mut game.heroes, dt) {
        game.record_kill(kill);
    }
}

/// Advance one camp.
fn update_camp(game: &mut Game, c: usize, dt: f64) {
    if !game.camps[c].alive {
        if game.camps[c].tick_respawn(dt) {
            let id = game.camps[c].body.id;
            debug!(camp = id, "camp respawned");
            game.push_event(GameEvent::camp_respawned(game.tick, game.elapsed, id));
        }
        return;
    }

    if let Some((_, Some(kill))) = combat::camp_attack(&game.camps[c], &mut game.heroes, dt) {
        game.record_kill(kill);
    }
}

/// End the game when a nexus has fallen. Blue's nexus is checked first.
fn check_win_condition(game: &mut Game) {
    if game.state != GameState::Active {
        return;
    }

    let fallen = |team: Team| game.nexus(team).is_some_and(|n| !n.alive);
    let winner = if fallen(Team::Blue) {
        Team::Red
    } else if fallen(Team::Red) {
        Team::Blue
    } else {
        return;
    };

    game.state = GameState::Ended;
    game.winner = Some(winner);

    info!(
        ?winner,
        elapsed = game.elapsed,
        ticks = game.tick,
        blue_kills = game.team_kills(Team::Blue),
        red_kills = game.team_kills(Team::Red),
        "game ended"
    );
    game.push_event(GameEvent::game_ended(game.tick, game.elapsed, winner));
}

/// Replay a match from recorded host commands and update steps.
///
/// `steps` holds the `dt` of every update in order. Commands recorded at
/// frame `n` are applied just before tick `n + 1` runs. Stops early when
/// the game ends.
pub fn replay(
    config: &GameConfig,
    commands: &[RecordedCommand],
    steps: &[f64],
) -> (Game, Vec<GameEvent>) {
    let mut game = Game::new(config.clone());
    let mut all_events = Vec::new();

    let mut ordered: Vec<&RecordedCommand> = commands.iter().collect();
    ordered.sort_by_key(|c| c.frame);
    let mut pending = ordered.into_iter().peekable();

    for &dt in steps {
        let tick = game.tick;
        while let Some(cmd) = pending.next_if(|c| c.frame <= tick) {
            cmd.command.apply(&mut game);
        }

        let result = game.update(dt);
        all_events.extend(result.events);

        if result.game_ended {
            break;
        }
    }

    (game, all_events)
}
