//! Game engine: the state machine the presentation layer drives.
//!
//! `InvadersEngine` owns the configuration, the RNG stream and the single
//! `GameState` root. `tick` applies one frame of input, runs every system
//! in a fixed order, checks the end-of-tick conditions and returns a
//! snapshot. Nothing here reads a clock; elapsed time is always passed in.

use log::{info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::commands::InputIntents;
use invaders_core::config::GameConfig;
use invaders_core::constants::MAX_TICK_SECS;
use invaders_core::enums::{GameOverReason, GamePhase, MoveDirection};
use invaders_core::error::ConfigError;
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::SimTime;

use crate::entities::{Barrier, Bullet, Player, Ufo};
use crate::formation::Formation;
use crate::systems;
use crate::systems::collision::CollisionOutcome;
use crate::world_setup;

/// Everything that belongs to one game session.
///
/// Replaced wholesale on restart, never reset field by field.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    /// Friendly and enemy bullets in firing order.
    pub bullets: Vec<Bullet>,
    pub formation: Formation,
    pub ufo: Option<Ufo>,
    pub barriers: Vec<Barrier>,
    pub score: u32,
    pub level: u32,
    pub phase: GamePhase,
    pub game_over_reason: Option<GameOverReason>,
    pub alien_fire_cooldown_secs: f64,
    pub ufo_spawn_cooldown_secs: f64,
    pub time: SimTime,
}

impl GameState {
    pub fn friendly_bullets(&self) -> usize {
        self.bullets.iter().filter(|b| b.friendly).count()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// The simulation engine.
pub struct InvadersEngine {
    config: GameConfig,
    rng: ChaCha8Rng,
    state: GameState,
    events: Vec<GameEvent>,
}

impl InvadersEngine {
    /// Validate `config` and build a fresh game at level 1.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = world_setup::new_game(&config, &mut rng);
        info!(
            "new game: {}x{} playfield, {} aliens, seed {}",
            config.width,
            config.height,
            state.formation.alive_count(),
            config.seed
        );
        Ok(Self {
            config,
            rng,
            state,
            events: vec![GameEvent::GameStarted],
        })
    }

    /// Advance by one frame covering `elapsed_secs` and return the resulting snapshot.
    ///
    /// Negative or non-finite elapsed time counts as zero; very long frames
    /// are capped at `MAX_TICK_SECS`. Frames longer than one nominal tick are
    /// simulated in several sub-steps.
    pub fn tick(&mut self, input: &InputIntents, elapsed_secs: f64) -> GameStateSnapshot {
        let elapsed_secs = if elapsed_secs.is_finite() {
            elapsed_secs.clamp(0.0, MAX_TICK_SECS)
        } else {
            0.0
        };

        let restarted = self.process_input(input);

        if !restarted && self.state.phase == GamePhase::Playing {
            self.run_systems(input, elapsed_secs);
            self.state.time.advance(elapsed_secs);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.state, &self.config, events)
    }

    /// Current state without advancing. Carries no events.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.state, &self.config, Vec::new())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only access to the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the game state, for staging test scenarios.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Handle restart and pause. Returns true if the game was rebuilt.
    fn process_input(&mut self, input: &InputIntents) -> bool {
        if input.restart && self.state.phase == GamePhase::GameOver {
            self.state = world_setup::new_game(&self.config, &mut self.rng);
            self.events.push(GameEvent::GameStarted);
            info!("game restarted");
            return true;
        }

        if input.toggle_pause {
            match self.state.phase {
                GamePhase::Playing => {
                    self.state.phase = GamePhase::Paused;
                    self.events.push(GameEvent::Paused);
                }
                GamePhase::Paused => {
                    self.state.phase = GamePhase::Playing;
                    self.events.push(GameEvent::Resumed);
                }
                GamePhase::GameOver => {}
            }
        }
        false
    }

    /// Split a frame into sub-steps of at most one nominal tick, so that
    /// a long frame cannot carry a bullet past a target in one move.
    fn substeps(&self, elapsed_secs: f64) -> u32 {
        let ticks = self.config.ticks_for(elapsed_secs);
        // Tolerance keeps a one-tick frame from rounding up to two steps.
        (ticks - 1e-3).ceil().max(1.0) as u32
    }

    /// Run all systems over `elapsed_secs`, one sub-step at a time.
    ///
    /// The fire intent is applied in the first sub-step only. Stepping stops
    /// early once the game ends or a level is cleared.
    fn run_systems(&mut self, input: &InputIntents, elapsed_secs: f64) {
        let steps = self.substeps(elapsed_secs);
        let step_secs = elapsed_secs / f64::from(steps);

        for step in 0..steps {
            let fire = input.fire && step == 0;
            if self.run_step(input.move_direction, fire, step_secs) {
                break;
            }
        }
    }

    /// One sub-step. Returns true if it ended the game or the level.
    fn run_step(&mut self, direction: MoveDirection, fire: bool, elapsed_secs: f64) -> bool {
        let elapsed_ticks = self.config.ticks_for(elapsed_secs);

        // 1. Player input
        self.state.player.steer(direction, elapsed_ticks);
        if fire {
            systems::fire_control::try_player_fire(&mut self.state, &self.config, &mut self.events);
        }
        // 2. Movement (player timers, bullets, formation, UFO)
        let landed = systems::movement::run(&mut self.state, elapsed_ticks, elapsed_secs);
        // 3. Drop bullets and UFOs that left the playfield
        systems::cleanup::run(&mut self.state, &self.config, &mut self.events);
        // 4. Enemy fire
        systems::fire_control::run_alien_fire(
            &mut self.state,
            &self.config,
            elapsed_secs,
            &mut self.rng,
            &mut self.events,
        );
        // 5. UFO spawn
        systems::ufo_spawner::run(
            &mut self.state,
            &self.config,
            elapsed_secs,
            &mut self.rng,
            &mut self.events,
        );
        // 6. Collisions
        let outcome = systems::collision::run(&mut self.state, &self.config, &mut self.events);
        if outcome != CollisionOutcome::default() {
            trace!("tick {}: {outcome:?}", self.state.time.tick);
        }
        // 7. End-of-tick conditions
        self.check_end_of_tick(landed)
    }

    /// Lives exhausted, then formation landed, then formation cleared.
    ///
    /// Returns true if any of them fired.
    fn check_end_of_tick(&mut self, landed: bool) -> bool {
        if self.state.player.lives == 0 {
            self.end_game(GameOverReason::LivesExhausted);
        } else if landed {
            self.end_game(GameOverReason::FormationLanded);
        } else if self.state.formation.is_cleared() {
            self.advance_level();
        } else {
            return false;
        }
        true
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.state.phase = GamePhase::GameOver;
        self.state.game_over_reason = Some(reason);
        self.events.push(GameEvent::GameOver {
            reason,
            final_score: self.state.score,
        });
        info!(
            "game over ({reason:?}) at level {} with score {}",
            self.state.level, self.state.score
        );
    }

    fn advance_level(&mut self) {
        let cleared = self.state.level;
        self.state.level += 1;
        self.state.player.lives += 1;
        world_setup::start_level(&mut self.state, &self.config, &mut self.rng);
        self.events.push(GameEvent::LevelCleared { level: cleared });
        info!(
            "level {cleared} cleared; level {} has {} aliens",
            self.state.level,
            self.state.formation.alive_count()
        );
    }
}
