//! Game State
//!
//! The [`Game`] aggregate owns every entity collection, the clock, the RNG
//! and the result. Entities are created once at construction and never
//! removed: heroes and camps cycle between dead and alive, destroyed
//! structures stay in the list. A reset is a fresh `Game`.

use serde::{Serialize, Deserialize};
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::core::hash::{compute_state_hash, StateHash};
use crate::core::rng::DeterministicRng;
use crate::core::vec2::Vec2;
use crate::game::ability::{self, AbilitySlot};
use crate::game::camp::{JungleCamp, CAMP_EXPERIENCE};
use crate::game::combat::Kill;
use crate::game::entity::{Spatial, Team};
use crate::game::events::GameEvent;
use crate::game::hero::{Hero, HeroId};
use crate::game::stats::Archetype;
use crate::game::structure::{Structure, StructureKind};
use crate::game::tick::{self, TickResult};
use crate::game::world::World;

/// Hero names in roster order.
pub const BLUE_NAMES: [&str; 5] = ["Astra", "Bolt", "Crystal", "Drake", "Echo"];
pub const RED_NAMES: [&str; 5] = ["Fury", "Grim", "Havoc", "Inferno", "Jinx"];

/// Respawn points scatter this far around the nexus on each axis.
pub const RESPAWN_SPREAD: f64 = 50.0;

// =============================================================================
// GAME STATE
// =============================================================================

/// Whether the match is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameState {
    /// Ticks advance the simulation
    Active = 0,
    /// A nexus fell; the game is frozen
    Ended = 1,
}

/// Slot of a playing team in per-team arrays.
#[inline]
pub(crate) fn team_slot(team: Team) -> Option<usize> {
    match team {
        Team::Blue => Some(0),
        Team::Red => Some(1),
        Team::Neutral => None,
    }
}

// =============================================================================
// GAME
// =============================================================================

/// Complete state of a match.
#[derive(Clone, Debug)]
pub struct Game {
    /// Tuning in effect
    pub config: GameConfig,

    /// Static map layout
    pub world: World,

    /// All heroes; `HeroId(n)` is index `n`
    pub heroes: Vec<Hero>,

    /// All structures, destroyed ones included
    pub structures: Vec<Structure>,

    /// All jungle camps
    pub camps: Vec<JungleCamp>,

    /// Deterministic RNG state
    pub rng: DeterministicRng,

    /// Ticks simulated so far
    pub tick: u64,

    /// Simulated seconds so far
    pub elapsed: f64,

    /// Active or Ended
    pub state: GameState,

    /// Set exactly when the game ends
    pub winner: Option<Team>,

    /// Deaths to towers and camps, per team (Blue, Red)
    pub environment_deaths: [u32; 2],

    /// Events not yet handed to the host
    pending_events: Vec<GameEvent>,
}

impl Game {
    /// Create a standard match: full map and a seeded 5v5 roster.
    pub fn new(config: GameConfig) -> Self {
        Self::with_world(config, World::new())
    }

    /// Create a standard match on a custom map layout.
    pub fn with_world(config: GameConfig, world: World) -> Self {
        let mut rng = DeterministicRng::new(config.seed);
        let heroes = spawn_roster(&world, &mut rng);
        let structures = spawn_structures(&world);
        let camps = spawn_camps(&world);

        Self::assemble(config, world, rng, heroes, structures, camps)
    }

    /// Put a game together from prepared entity lists.
    pub(crate) fn assemble(
        config: GameConfig,
        world: World,
        rng: DeterministicRng,
        heroes: Vec<Hero>,
        structures: Vec<Structure>,
        camps: Vec<JungleCamp>,
    ) -> Self {
        debug!(
            seed = config.seed,
            heroes = heroes.len(),
            structures = structures.len(),
            camps = camps.len(),
            "game created"
        );

        Self {
            config,
            world,
            heroes,
            structures,
            camps,
            rng,
            tick: 0,
            elapsed: 0.0,
            state: GameState::Active,
            winner: None,
            environment_deaths: [0; 2],
            pending_events: Vec::new(),
        }
    }

    /// Advance the simulation by `dt` game seconds.
    ///
    /// `dt` is already scaled by any speed multiplier. No-op once ended.
    pub fn update(&mut self, dt: f64) -> TickResult {
        tick::tick(self, dt)
    }

    /// Check if the game is still running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == GameState::Active
    }

    /// Check if the game has ended.
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.state == GameState::Ended
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Get a hero by ID.
    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.get(id.index())
    }

    /// Get a hero mutably by ID.
    pub fn hero_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.get_mut(id.index())
    }

    /// A team's nexus.
    pub fn nexus(&self, team: Team) -> Option<&Structure> {
        self.structures
            .iter()
            .find(|s| s.kind == StructureKind::Nexus && s.team() == team)
    }

    /// Position of a team's nexus.
    pub fn nexus_position(&self, team: Team) -> Option<Vec2> {
        self.nexus(team).map(|n| n.position())
    }

    /// Alive hero whose collision circle contains `point`.
    ///
    /// When circles overlap the lowest id wins.
    pub fn hero_at(&self, point: Vec2) -> Option<HeroId> {
        self.heroes
            .iter()
            .find(|h| h.alive && h.distance_to_point(point) <= h.body.radius)
            .map(|h| h.id())
    }

    // -------------------------------------------------------------------------
    // Team queries
    // -------------------------------------------------------------------------

    /// Sum of kills by a team's heroes.
    pub fn team_kills(&self, team: Team) -> u32 {
        self.team_heroes(team).map(|h| h.kills).sum()
    }

    /// Sum of deaths of a team's heroes.
    pub fn team_deaths(&self, team: Team) -> u32 {
        self.team_heroes(team).map(|h| h.deaths).sum()
    }

    /// Number of a team's heroes currently alive.
    pub fn heroes_alive(&self, team: Team) -> usize {
        self.team_heroes(team).filter(|h| h.alive).count()
    }

    /// Number of a team's structures still standing.
    pub fn structures_alive(&self, team: Team) -> usize {
        self.structures
            .iter()
            .filter(|s| s.alive && s.team() == team)
            .count()
    }

    /// Deaths of a team's heroes to towers and camps.
    pub fn environment_deaths(&self, team: Team) -> u32 {
        team_slot(team).map_or(0, |slot| self.environment_deaths[slot])
    }

    fn team_heroes(&self, team: Team) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(move |h| h.team() == team)
    }

    // -------------------------------------------------------------------------
    // Control surface
    // -------------------------------------------------------------------------

    /// Cast an ability on behalf of the host.
    ///
    /// Returns false with no state change for an unknown or dead hero, a
    /// slot on cooldown, too little mana, or an ended game.
    pub fn use_ability(&mut self, hero: HeroId, slot: AbilitySlot) -> bool {
        if !self.is_active() || hero.index() >= self.heroes.len() {
            return false;
        }
        self.cast_ability(hero.index(), slot)
    }

    /// Point a hero at a map position.
    ///
    /// Returns false for an unknown or dead hero, a target off the map, or
    /// an ended game.
    pub fn set_hero_target(&mut self, hero: HeroId, x: f64, y: f64) -> bool {
        let target = Vec2::new(x, y);
        if !self.is_active() || !target.is_on_map() {
            return false;
        }
        match self.hero_mut(hero) {
            Some(h) if h.alive => {
                h.set_target(target);
                true
            }
            _ => false,
        }
    }

    /// Toggle host control of one hero. Selected heroes skip the lane AI.
    pub fn set_hero_selected(&mut self, hero: HeroId, selected: bool) -> bool {
        if !self.is_active() {
            return false;
        }
        match self.hero_mut(hero) {
            Some(h) => {
                h.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Select exactly one hero (or none), deselecting every other.
    pub fn select_only(&mut self, hero: Option<HeroId>) -> bool {
        if !self.is_active() {
            return false;
        }
        if let Some(id) = hero {
            if id.index() >= self.heroes.len() {
                return false;
            }
        }
        for h in &mut self.heroes {
            h.selected = Some(h.id()) == hero;
        }
        true
    }

    /// Currently selected hero, if any.
    pub fn selected_hero(&self) -> Option<HeroId> {
        self.heroes.iter().find(|h| h.selected).map(|h| h.id())
    }

    // -------------------------------------------------------------------------
    // Bookkeeping shared with the tick loop
    // -------------------------------------------------------------------------

    /// Cast `slot` for `heroes[caster]` and record the outcome.
    pub(crate) fn cast_ability(&mut self, caster: usize, slot: AbilitySlot) -> bool {
        let Some(outcome) = ability::cast(&mut self.heroes, caster, slot) else {
            return false;
        };

        let caster_id = self.heroes[caster].id();
        trace!(hero = caster_id.0, ?slot, affected = outcome.affected, "ability cast");
        self.push_event(GameEvent::ability_cast(self.tick, self.elapsed, caster_id, slot, outcome.affected));

        for kill in outcome.kills {
            self.record_kill(kill);
        }
        true
    }

    /// Record a hero death.
    pub(crate) fn record_kill(&mut self, kill: Kill) {
        let Some(victim) = self.hero(kill.victim) else {
            return;
        };
        let victim_team = victim.team();

        if kill.credit.is_environment() {
            if let Some(slot) = team_slot(victim_team) {
                self.environment_deaths[slot] += 1;
            }
        }

        debug!(victim = kill.victim.0, credit = ?kill.credit, "hero killed");
        self.push_event(GameEvent::hero_killed(
            self.tick,
            self.elapsed,
            kill.victim,
            victim_team,
            kill.credit,
        ));
    }

    /// Record a structure loss.
    pub(crate) fn record_structure_destroyed(&mut self, structure: usize, by: HeroId) {
        let Some(s) = self.structures.get(structure) else {
            return;
        };
        let (id, kind, team) = (s.body.id, s.kind, s.team());

        debug!(structure = id, ?kind, ?team, by = by.0, "structure destroyed");
        self.push_event(GameEvent::structure_destroyed(self.tick, self.elapsed, id, kind, team, by));
    }

    /// Record a camp clear and reward the hero that landed the last hit.
    pub(crate) fn record_camp_cleared(&mut self, camp: usize, by: usize) {
        let Some(camp_id) = self.camps.get(camp).map(|c| c.body.id) else {
            return;
        };
        let Some(hero) = self.heroes.get_mut(by) else {
            return;
        };
        let hero_id = hero.id();
        let before = hero.level;
        hero.gain_experience(CAMP_EXPERIENCE);
        let after = hero.level;

        debug!(camp = camp_id, hero = hero_id.0, "camp cleared");
        self.push_event(GameEvent::camp_cleared(self.tick, self.elapsed, camp_id, hero_id));

        for level in (before + 1)..=after {
            debug!(hero = hero_id.0, level, "hero leveled up");
            self.push_event(GameEvent::hero_leveled_up(self.tick, self.elapsed, hero_id, level));
        }
    }

    /// Random point around a team's nexus.
    pub(crate) fn respawn_point(&mut self, team: Team) -> Vec2 {
        let fallback = match team {
            Team::Red => Vec2::new(crate::MAP_WIDTH - 100.0, crate::MAP_HEIGHT / 2.0),
            _ => Vec2::new(100.0, crate::MAP_HEIGHT / 2.0),
        };
        let center = self.nexus_position(team).unwrap_or(fallback);
        self.rng.jitter_square(center, RESPAWN_SPREAD)
    }

    // -------------------------------------------------------------------------
    // Events and hashing
    // -------------------------------------------------------------------------

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, self.config.seed, |hasher| {
            hasher.write_f64(self.elapsed);
            hasher.write_u8(self.state as u8);
            hasher.write_u8(self.winner.map_or(u8::MAX, |t| t as u8));

            for hero in &self.heroes {
                hero.hash_into(hasher);
            }
            for structure in &self.structures {
                structure.hash_into(hasher);
            }
            for camp in &self.camps {
                camp.hash_into(hasher);
            }

            self.rng.hash_into(hasher);
            hasher.write_u32(self.environment_deaths[0]);
            hasher.write_u32(self.environment_deaths[1]);
        })
    }
}

// =============================================================================
// SPAWNING
// =============================================================================

/// Build both teams: seeded archetype shuffle, fixed names, lanes from slots.
fn spawn_roster(world: &World, rng: &mut DeterministicRng) -> Vec<Hero> {
    let mut heroes = Vec::with_capacity(world.hero_slots().len());

    for (team, names) in [(Team::Blue, BLUE_NAMES), (Team::Red, RED_NAMES)] {
        let mut archetypes = Archetype::ALL;
        rng.shuffle(&mut archetypes);

        let slots = world.hero_slots().iter().filter(|s| s.team == team);
        for (i, slot) in slots.enumerate() {
            let id = HeroId(heroes.len() as u32);
            let archetype = archetypes[i % archetypes.len()];
            let name = names[i % names.len()];
            heroes.push(Hero::new(id, name, archetype, team, slot.lane, slot.position));
        }
    }

    heroes
}

fn spawn_structures(world: &World) -> Vec<Structure> {
    world
        .structure_spawns()
        .iter()
        .enumerate()
        .map(|(id, s)| Structure::new(id as u32, s.kind, s.team, s.position))
        .collect()
}

fn spawn_camps(world: &World) -> Vec<JungleCamp> {
    world
        .camp_spawns()
        .iter()
        .enumerate()
        .map(|(id, &position)| JungleCamp::new(id as u32, position))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
