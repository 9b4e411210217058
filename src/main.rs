//! Lane Siege Headless Runner
//!
//! Plays a full match without rendering, logs the interesting events and
//! verifies determinism by replaying the match from its seed.

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lane_siege::{
    config::parse_f64,
    game::{
        events::{GameEventData, KillCredit},
        tick::replay,
        Spatial, Team,
    },
    GameConfig, SimulationDriver, VERSION,
};

/// Environment variable capping the match length in game seconds.
const ENV_MAX_SECONDS: &str = "LANE_SIEGE_MAX_SECONDS";
/// Environment variable for the wall-clock frame length in milliseconds.
const ENV_FRAME_MS: &str = "LANE_SIEGE_FRAME_MS";

const DEFAULT_MAX_SECONDS: f64 = 3600.0;
const DEFAULT_FRAME_MS: f64 = 16.0;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;

    let print_snapshot = std::env::args().any(|arg| arg == "--snapshot");

    let config = GameConfig::from_env().context("invalid game configuration")?;
    let max_seconds = env_f64(ENV_MAX_SECONDS, DEFAULT_MAX_SECONDS)?;
    let frame_ms = env_f64(ENV_FRAME_MS, DEFAULT_FRAME_MS)?;
    if frame_ms <= 0.0 || config.game_speed <= 0.0 {
        bail!("frame length and game speed must be positive");
    }

    info!("Lane Siege v{}", VERSION);
    info!("Seed: {}, speed: {}x, frame: {} ms", config.seed, config.game_speed, frame_ms);

    run_match(config, max_seconds, frame_ms / 1000.0, print_snapshot)
}

/// Read an optional float from the environment.
fn env_f64(var: &'static str, default: f64) -> Result<f64> {
    match std::env::var(var) {
        Ok(raw) => Ok(parse_f64(var, &raw)?),
        Err(_) => Ok(default),
    }
}

/// Play one match and check that a replay reproduces it.
fn run_match(config: GameConfig, max_seconds: f64, frame_secs: f64, print_snapshot: bool) -> Result<()> {
    info!("=== Starting Match ===");

    let mut driver = SimulationDriver::new(config.clone());
    let mut frames: u64 = 0;
    let mut total_events = 0;
    let mut next_report = 60.0;

    while driver.game().elapsed < max_seconds {
        let Some(result) = driver.frame(frame_secs) else {
            continue;
        };
        frames += 1;
        total_events += result.events.len();

        for event in &result.events {
            match &event.data {
                GameEventData::HeroKilled { victim, credit, .. } => {
                    let name = driver.game().hero(*victim).map_or("?", |h| h.name.as_str());
                    match credit {
                        KillCredit::Hero(killer) => {
                            let killer = driver.game().hero(*killer).map_or("?", |h| h.name.as_str());
                            info!("[{:>7.1}s] {} killed {}", event.time, killer, name);
                        }
                        KillCredit::Tower(_) => info!("[{:>7.1}s] {} executed by a tower", event.time, name),
                        KillCredit::Camp(_) => info!("[{:>7.1}s] {} killed by a jungle camp", event.time, name),
                    }
                }
                GameEventData::StructureDestroyed { kind, team, .. } => {
                    info!("[{:>7.1}s] {:?} {:?} destroyed", event.time, team, kind);
                }
                GameEventData::GameEnded { winner, elapsed } => {
                    info!("Game ended after {:.1}s. Winner: {:?}", elapsed, winner);
                }
                _ => {}
            }
        }

        let game = driver.game();
        if game.elapsed >= next_report {
            info!(
                "t={:.0}s  kills {}-{}  structures {}-{}",
                game.elapsed,
                game.team_kills(Team::Blue),
                game.team_kills(Team::Red),
                game.structures_alive(Team::Blue),
                game.structures_alive(Team::Red),
            );
            next_report += 60.0;
        }

        if result.game_ended {
            break;
        }
    }

    // Print final results
    info!("=== Match Results ===");
    let game = driver.game();
    if game.winner.is_none() {
        warn!("No winner after {:.0}s", game.elapsed);
    }
    for team in [Team::Blue, Team::Red] {
        info!(
            "{:?}: {} kills, {} deaths ({} to towers/camps), {} structures standing",
            team,
            game.team_kills(team),
            game.team_deaths(team),
            game.environment_deaths(team),
            game.structures_alive(team),
        );
    }
    for hero in &game.heroes {
        info!(
            "  {:<8} {:?} {:<8?} lvl {:>2}  {}/{}/{}",
            hero.name, hero.team(), hero.archetype, hero.level, hero.kills, hero.deaths, hero.assists,
        );
    }

    let hash = game.compute_hash();
    info!("Frames: {}, events: {}", frames, total_events);
    info!("Final State Hash: {}", hex::encode(hash));

    if print_snapshot {
        println!("{}", game.snapshot().to_json()?);
    }

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let log = driver.commands();
    let (replayed, _) = replay(&config, log.commands(), log.steps());
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("determinism failure: replay hash differs");
    }
    info!("Determinism verified: hashes match");
    Ok(())
}
