//! Game loop: drives the engine at the configured tick rate and hands each
//! snapshot to a sink.
//!
//! Input arrives via an `mpsc` channel. In real time all intents received
//! since the previous frame are merged into one. Headless runs block for
//! exactly one intent per tick until the channel closes. Either way the
//! movement direction is held until a later intent changes it.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::{debug, info};

use invaders_core::commands::InputIntents;
use invaders_core::constants::MAX_TICK_SECS;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::InvadersEngine;

use crate::error::AppError;

/// Messages accepted by the game loop.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    Input(InputIntents),
    Shutdown,
}

/// How frames are timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep to hold the tick rate; elapsed time is measured.
    RealTime,
    /// Run `ticks` frames back to back with a fixed timestep, taking one
    /// input per frame.
    Headless { ticks: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// A `quit` intent was received.
    Quit,
    Shutdown,
    /// The headless tick budget ran out.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub exit: LoopExit,
    pub frames: u64,
    pub final_score: u32,
}

/// Run until quit, shutdown, or the headless budget is spent.
///
/// `sink` receives the frame number and snapshot of every frame; an error
/// from it stops the loop.
pub fn run_game_loop<F>(
    engine: &mut InvadersEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    pacing: Pacing,
    mut sink: F,
) -> Result<LoopSummary, AppError>
where
    F: FnMut(u64, &GameStateSnapshot) -> Result<(), AppError>,
{
    let tick_rate = engine.config().tick_rate;
    let tick_duration = Duration::from_secs_f64(1.0 / tick_rate);
    let mut held = InputIntents::idle();
    let mut input_open = true;
    let mut frames: u64 = 0;
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    let exit = loop {
        if let Pacing::Headless { ticks } = pacing {
            if frames >= ticks {
                break LoopExit::Completed;
            }
        }

        // 1. Gather this frame's input
        let mut frame_input = held;
        let mut shutdown = false;
        match pacing {
            // One line per tick, so a fixed script replays identically.
            Pacing::Headless { .. } if input_open => match cmd_rx.recv() {
                Ok(GameLoopCommand::Input(intents)) => frame_input.merge(intents),
                Ok(GameLoopCommand::Shutdown) => shutdown = true,
                Err(mpsc::RecvError) => {
                    debug!("input script ended; holding last input");
                    input_open = false;
                }
            },
            Pacing::Headless { .. } => {}
            Pacing::RealTime => {
                while input_open {
                    match cmd_rx.try_recv() {
                        Ok(GameLoopCommand::Input(intents)) => frame_input.merge(intents),
                        Ok(GameLoopCommand::Shutdown) => {
                            shutdown = true;
                            break;
                        }
                        Err(mpsc::TryRecvError::Empty) => break,
                        Err(mpsc::TryRecvError::Disconnected) => {
                            debug!("input channel closed; holding last input");
                            input_open = false;
                        }
                    }
                }
            }
        }
        if shutdown {
            break LoopExit::Shutdown;
        }
        if frame_input.quit {
            break LoopExit::Quit;
        }

        // 2. Advance one tick
        let elapsed_secs = match pacing {
            Pacing::Headless { .. } => 1.0 / tick_rate,
            Pacing::RealTime => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_frame).as_secs_f64();
                last_frame = now;
                elapsed.min(MAX_TICK_SECS)
            }
        };
        let snapshot = engine.tick(&frame_input, elapsed_secs);
        held = frame_input.held();

        // 3. Hand off the snapshot
        sink(frames, &snapshot)?;
        frames += 1;

        // 4. Sleep until next tick
        if pacing == Pacing::RealTime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind; reset instead of catching up
                next_tick_time = now;
            }
        }
    };

    let final_score = engine.state().score;
    info!("game loop exited ({exit:?}) after {frames} frames, score {final_score}");
    Ok(LoopSummary {
        exit,
        frames,
        final_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::config::GameConfig;
    use invaders_core::enums::{GamePhase, MoveDirection};
    use invaders_core::events::GameEvent;

    use crate::input::forward_lines;

    fn engine() -> InvadersEngine {
        InvadersEngine::new(GameConfig {
            ufo_enabled: false,
            alien_fire_cooldown_secs: 1000.0,
            ..Default::default()
        })
        .unwrap()
    }

    fn intents(f: impl FnOnce(&mut InputIntents)) -> GameLoopCommand {
        let mut intents = InputIntents::idle();
        f(&mut intents);
        GameLoopCommand::Input(intents)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(intents(|i| i.fire = true)).unwrap();
        tx.send(intents(|i| i.toggle_pause = true)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(i) if i.fire));
        assert!(matches!(commands[1], GameLoopCommand::Input(i) if i.toggle_pause));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_headless_runs_exact_tick_count() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let mut seen = Vec::new();

        let summary = run_game_loop(&mut engine, &rx, Pacing::Headless { ticks: 120 }, |n, snap| {
            seen.push((n, snap.time.tick));
            Ok(())
        })
        .unwrap();

        assert_eq!(summary.exit, LoopExit::Completed);
        assert_eq!(summary.frames, 120);
        assert_eq!(seen.len(), 120);
        assert_eq!(seen.last(), Some(&(119, 120)));
        assert!((engine.snapshot().time.elapsed_secs - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_headless_survives_closed_input() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let summary =
            run_game_loop(&mut engine, &rx, Pacing::Headless { ticks: 10 }, |_, _| Ok(())).unwrap();
        assert_eq!(summary.exit, LoopExit::Completed);
        assert_eq!(summary.frames, 10);
    }

    /// Play `script` headless on a fresh default game and collect every snapshot as JSON.
    fn replay(script: &str, ticks: u64) -> Vec<String> {
        let mut engine = InvadersEngine::new(GameConfig {
            seed: 99,
            ..Default::default()
        })
        .unwrap();
        let (tx, rx) = mpsc::channel();
        forward_lines(script.as_bytes(), &tx, false);
        drop(tx);

        let mut frames = Vec::new();
        run_game_loop(&mut engine, &rx, Pacing::Headless { ticks }, |_, snap| {
            frames.push(serde_json::to_string(snap)?);
            Ok(())
        })
        .unwrap();
        frames
    }

    #[test]
    fn test_headless_script_replays_identically() {
        let script: String = (0..300)
            .map(|i| {
                let direction = if i < 3 { "Right" } else { "Stay" };
                format!("{{\"move_direction\":\"{direction}\",\"fire\":true}}\n")
            })
            .collect();

        let first = replay(&script, 300);
        let second = replay(&script, 300);
        assert_eq!(first.len(), 300);
        assert_eq!(first, second, "Same seed and script should give the same game");

        let snapshots: Vec<GameStateSnapshot> = first
            .iter()
            .map(|json| serde_json::from_str(json).unwrap())
            .collect();
        let xs: Vec<f32> = snapshots[..4].iter().map(|s| s.player.position.x).collect();
        for (x, expected) in xs.iter().zip([405.0, 410.0, 415.0, 415.0]) {
            assert!((x - expected).abs() < 1e-3, "player x {xs:?}");
        }

        let shots = snapshots
            .iter()
            .flat_map(|s| &s.events)
            .filter(|e| matches!(e, GameEvent::PlayerFired))
            .count();
        assert!(shots >= 8, "only {shots} shots fired from a 300-line fire script");
    }

    #[test]
    fn test_quit_intent_exits_before_ticking() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        tx.send(intents(|i| i.quit = true)).unwrap();

        let summary = run_game_loop(&mut engine, &rx, Pacing::RealTime, |_, _| Ok(())).unwrap();
        assert_eq!(summary.exit, LoopExit::Quit);
        assert_eq!(summary.frames, 0);
    }

    #[test]
    fn test_shutdown_exits() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let summary = run_game_loop(&mut engine, &rx, Pacing::RealTime, |_, _| Ok(())).unwrap();
        assert_eq!(summary.exit, LoopExit::Shutdown);
    }

    #[test]
    fn test_movement_is_held_between_frames() {
        let mut engine = engine();
        let start_x = engine.state().player.position.x;
        let (tx, rx) = mpsc::channel();
        tx.send(intents(|i| i.move_direction = MoveDirection::Right))
            .unwrap();
        drop(tx);

        run_game_loop(&mut engine, &rx, Pacing::Headless { ticks: 10 }, |_, _| Ok(())).unwrap();
        let moved = engine.state().player.position.x - start_x;
        assert!((moved - 50.0).abs() < 1e-2, "moved {moved}");
    }

    #[test]
    fn test_pause_toggle_is_one_shot() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        tx.send(intents(|i| i.toggle_pause = true)).unwrap();
        drop(tx);

        let mut phases = Vec::new();
        run_game_loop(&mut engine, &rx, Pacing::Headless { ticks: 3 }, |_, snap| {
            phases.push(snap.phase);
            Ok(())
        })
        .unwrap();
        assert_eq!(phases, vec![GamePhase::Paused; 3]);
    }

    #[test]
    fn test_sink_error_stops_loop() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let result = run_game_loop(&mut engine, &rx, Pacing::Headless { ticks: 10 }, |n, _| {
            if n == 2 {
                Err(AppError::Io(std::io::Error::other("sink closed")))
            } else {
                Ok(())
            }
        });
        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(engine.snapshot().time.tick, 3);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = engine();
        for _ in 0..50 {
            engine.tick(&InputIntents::idle(), 1.0 / 60.0);
        }

        let snapshot = engine.tick(&InputIntents::idle(), 1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
