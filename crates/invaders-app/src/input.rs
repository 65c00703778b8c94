//! Stdin input reader.
//!
//! Each line is one JSON `InputIntents` object. Blank lines are ignored and
//! malformed lines are logged and skipped.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread::JoinHandle;

use log::{debug, warn};

use invaders_core::commands::InputIntents;

use crate::game_loop::GameLoopCommand;

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<InputIntents>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Forward every parsed line from `reader` to the game loop.
///
/// Sends `Shutdown` at end of input when `shutdown_on_eof` is set. Returns
/// early if the game loop has gone away.
pub fn forward_lines<R: BufRead>(
    reader: R,
    cmd_tx: &mpsc::Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) {
    for (number, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stopped reading input: {e}");
                break;
            }
        };
        match parse_line(&line) {
            Ok(Some(intents)) => {
                if cmd_tx.send(GameLoopCommand::Input(intents)).is_err() {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => warn!("skipping input line {}: {e}", number + 1),
        }
    }

    debug!("input closed");
    if shutdown_on_eof {
        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    }
}

/// Spawn the stdin reader thread.
pub fn spawn_stdin_reader(
    cmd_tx: mpsc::Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("invaders-input".into())
        .spawn(move || {
            let stdin = io::stdin();
            forward_lines(stdin.lock(), &cmd_tx, shutdown_on_eof);
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::enums::MoveDirection;

    #[test]
    fn test_parse_line() {
        let intents = parse_line(r#"{"move_direction":"Left","fire":true}"#)
            .unwrap()
            .unwrap();
        assert_eq!(intents.move_direction, MoveDirection::Left);
        assert!(intents.fire);
        assert!(!intents.quit);

        assert!(parse_line("   ").unwrap().is_none());
        assert!(parse_line("fire!").is_err());
    }

    #[test]
    fn test_forward_skips_bad_lines_and_shuts_down() {
        let input = "{\"fire\":true}\nnot json\n\n{\"quit\":true}\n";
        let (tx, rx) = mpsc::channel();
        forward_lines(input.as_bytes(), &tx, true);

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(&commands[0], GameLoopCommand::Input(i) if i.fire));
        assert!(matches!(&commands[1], GameLoopCommand::Input(i) if i.quit));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_forward_without_shutdown_on_eof() {
        let (tx, rx) = mpsc::channel();
        forward_lines("{}\n".as_bytes(), &tx, false);
        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 1);
        assert!(matches!(&commands[0], GameLoopCommand::Input(i) if i.is_idle()));
    }
}
