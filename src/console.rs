//! Line-oriented console for playing at a terminal.
//!
//! Each input line is one command. Replies start with `=` on success and `?`
//! when the command itself was malformed. Moves that the rules refuse are
//! ignored silently: the reply is a bare `=` and the board does not change.
//!
//! ## Commands
//!
//! - `<square>` or `play <square>` - place a disc for the side to move (`d3`)
//! - `show` - redraw the board and the status line
//! - `moves` - list the legal squares for the side to move
//! - `score` - print the disc counts
//! - `start` / `stop` - start or stop random autoplay
//! - `new` - start a new game
//! - `help` - list commands
//! - `quit` - exit
//!
//! Input is read on a helper thread and forwarded over a channel, so the game
//! itself is only ever touched by the thread running [`Console::run`]. While
//! autoplay is on, a wait on that channel that times out is an autoplay tick.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use crate::autoplay::Autoplay;
use crate::game::{Game, MoveOutcome, Rules};
use crate::moves::{parse_coord, str_coord};
use crate::render::RenderSink;

const KNOWN_COMMANDS: &[&str] = &[
    "help", "moves", "new", "play", "quit", "score", "show", "start", "stop",
];

pub struct Console<S: RenderSink, W: Write> {
    game: Game,
    autoplay: Autoplay,
    sink: S,
    out: W,
}

impl<S: RenderSink, W: Write> Console<S, W> {
    pub fn new(rules: Rules, autoplay: Autoplay, sink: S, out: W) -> Self {
        Self {
            game: Game::new(rules),
            autoplay,
            sink,
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_parts(self) -> (S, W) {
        (self.sink, self.out)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// If input ends while autoplay is on, the current game is played out first.
    pub fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        self.refresh()?;
        let mut next_tick = Instant::now() + self.autoplay.period();

        loop {
            let line = if self.autoplay.is_running() {
                let wait = next_tick.saturating_duration_since(Instant::now());
                match rx.recv_timeout(wait) {
                    Ok(line) => line,
                    Err(RecvTimeoutError::Timeout) => {
                        self.autoplay
                            .tick(&mut self.game, &mut self.sink)
                            .context("autoplay tick failed")?;
                        next_tick = Instant::now() + self.autoplay.period();
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        self.autoplay
                            .run(&mut self.game, &mut self.sink)
                            .context("autoplay failed")?;
                        break;
                    }
                }
            } else {
                match rx.recv() {
                    Ok(line) => line,
                    Err(_) => break,
                }
            };

            let was_running = self.autoplay.is_running();
            if !self.handle_line(&line)? {
                break;
            }
            if !was_running && self.autoplay.is_running() {
                next_tick = Instant::now() + self.autoplay.period();
            }
        }
        Ok(())
    }

    /// Execute one input line and write the reply. Returns `false` on `quit`.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(true);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0].to_lowercase();
        let args = &parts[1..];

        let (success, message) = self.execute(&command, args)?;
        let prefix = if success { '=' } else { '?' };
        if message.is_empty() {
            writeln!(self.out, "{prefix}")?;
        } else {
            writeln!(self.out, "{prefix} {message}")?;
        }
        self.out.flush().context("failed to write reply")?;

        Ok(command != "quit")
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<(bool, String)> {
        let reply = match command {
            "help" => (true, KNOWN_COMMANDS.join(" ")),

            "quit" => (true, String::new()),

            "show" => {
                self.refresh()?;
                (true, String::new())
            }

            "moves" => {
                let moves: Vec<String> = self.game.legal_moves().into_iter().map(str_coord).collect();
                (true, moves.join(" "))
            }

            "score" => {
                let (black, white) = self.game.score();
                (true, format!("Black {black} - White {white}"))
            }

            "start" => {
                if self.game.status().is_over() {
                    return Ok((false, "game is over".to_string()));
                }
                self.autoplay.start();
                (true, String::new())
            }

            "stop" => {
                self.autoplay.stop();
                (true, String::new())
            }

            "new" => {
                self.autoplay.stop();
                self.game = Game::new(self.game.rules());
                self.refresh()?;
                (true, String::new())
            }

            "play" => match args.first() {
                Some(square) => self.play(square)?,
                None => (false, "missing argument".to_string()),
            },

            other => {
                if parse_coord(other).is_some() {
                    self.play(other)?
                } else {
                    (false, format!("unknown command: {other}"))
                }
            }
        };
        Ok(reply)
    }

    fn play(&mut self, square: &str) -> Result<(bool, String)> {
        let Some(pt) = parse_coord(square) else {
            return Ok((false, format!("invalid square: {square}")));
        };

        let outcome = self.game.handle_move(pt)?;
        if let MoveOutcome::Placed { passed, .. } = outcome {
            self.refresh()?;
            if passed {
                debug!(player = %self.game.current_player(), "opponent passed");
            }
            let status = self.game.status();
            if status.is_over() {
                self.autoplay.stop();
                self.sink.announce(status)?;
            }
        }
        Ok((true, String::new()))
    }

    /// Redraw the board with the current player's legal moves highlighted.
    fn refresh(&mut self) -> Result<()> {
        self.sink
            .render(self.game.board(), &self.game.legal_moves())
            .context("failed to render board")?;
        self.sink
            .show_status(&self.game.status_line())
            .context("failed to show status")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use super::*;
    use crate::board::Player;
    use crate::render::TextSink;

    type TestConsole = Console<TextSink<Vec<u8>>, Vec<u8>>;

    fn console(rules: Rules) -> TestConsole {
        let autoplay = Autoplay::with_seed(5).interval(Duration::ZERO);
        Console::new(rules, autoplay, TextSink::new(Vec::new()), Vec::new())
    }

    fn replies(console: TestConsole) -> String {
        let (_, out) = console.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_help_lists_commands() {
        let mut c = console(Rules::Classic);
        let (success, response) = c.execute("help", &[]).unwrap();
        assert!(success);
        assert!(response.contains("moves"));
        assert!(response.contains("start"));
    }

    #[test]
    fn test_play_square() {
        let mut c = console(Rules::Classic);
        let (success, _) = c.execute("d3", &[]).unwrap();
        assert!(success);
        assert_eq!(c.game().score(), (4, 1));
        assert_eq!(c.game().current_player(), Player::White);

        let (success, _) = c.execute("play", &["c3"]).unwrap();
        assert!(success);
        assert_eq!(c.game().current_player(), Player::Black);
    }

    #[test]
    fn test_rejected_move_is_silent() {
        let mut c = console(Rules::Classic);
        let (success, response) = c.execute("a1", &[]).unwrap();
        assert!(success);
        assert!(response.is_empty());
        assert_eq!(c.game().score(), (2, 2));
        assert_eq!(c.game().current_player(), Player::Black);
    }

    #[test]
    fn test_bad_input() {
        let mut c = console(Rules::Classic);
        assert!(!c.execute("play", &[]).unwrap().0);
        assert!(!c.execute("play", &["z9"]).unwrap().0);
        assert!(!c.execute("jump", &[]).unwrap().0);
    }

    #[test]
    fn test_moves_and_score() {
        let mut c = console(Rules::Classic);
        assert_eq!(c.execute("moves", &[]).unwrap().1, "d3 c4 f5 e6");
        assert_eq!(c.execute("score", &[]).unwrap().1, "Black 2 - White 2");
    }

    #[test]
    fn test_new_resets_game() {
        let mut c = console(Rules::Standard);
        c.execute("d3", &[]).unwrap();
        c.execute("new", &[]).unwrap();
        assert_eq!(c.game().score(), (2, 2));
        assert_eq!(c.game().rules(), Rules::Standard);
    }

    #[test]
    fn test_reply_format() {
        let mut c = console(Rules::Classic);
        assert!(c.handle_line("score").unwrap());
        assert!(c.handle_line("bogus").unwrap());
        assert!(c.handle_line("   ").unwrap());
        assert!(!c.handle_line("quit").unwrap());
        assert_eq!(
            replies(c),
            "= Black 2 - White 2\n? unknown command: bogus\n=\n"
        );
    }

    #[test]
    fn test_run_until_quit() {
        let mut c = console(Rules::Classic);
        c.run(Cursor::new(b"d3\nscore\nquit\nd3\n".to_vec())).unwrap();
        assert_eq!(c.game().score(), (4, 1));
        assert_eq!(replies(c), "=\n= Black 4 - White 1\n=\n");
    }

    #[test]
    fn test_run_autoplay_to_end() {
        let mut c = console(Rules::Classic);
        c.run(Cursor::new(b"start\n".to_vec())).unwrap();
        let (sink, _) = c.into_parts();
        let board_text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(board_text.matches("Game over").count(), 1);
    }
}
