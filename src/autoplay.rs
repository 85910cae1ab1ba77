//! Random self-play.
//!
//! While running, the driver plays one uniformly random legal move for
//! whichever side is to move on every tick, until the game ends. The random
//! source is injected so that games can be replayed from a seed.

use std::io;
use std::thread;
use std::time::Duration;

use tracing::{info, trace};

use crate::board::Point;
use crate::constants::AUTOPLAY_INTERVAL;
use crate::game::{Game, GameStatus, Rules};
use crate::render::RenderSink;

/// What a single tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The driver is stopped; nothing happened.
    Idle,
    /// A move was played and the game goes on.
    Moved(Point),
    /// The game ended on this tick and the driver stopped.
    Finished(GameStatus),
}

pub struct Autoplay {
    rng: fastrand::Rng,
    interval: Duration,
    running: bool,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Autoplay {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self {
            rng,
            interval: AUTOPLAY_INTERVAL,
            running: false,
        }
    }

    /// A driver whose move choices are fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(fastrand::Rng::with_seed(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(fastrand::Rng::new())
    }

    /// Set the delay between moves used by [`Autoplay::run`].
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn period(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start playing. Returns `false` if the driver was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        info!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
        self.running = true;
        true
    }

    /// Stop playing. Returns `false` if the driver was not running.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        info!("autoplay stopped");
        self.running = false;
        true
    }

    /// Play one random move, or finish the game if it is over.
    pub fn tick(&mut self, game: &mut Game, sink: &mut dyn RenderSink) -> io::Result<Tick> {
        if !self.running {
            return Ok(Tick::Idle);
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            // Under classic rules a stuck player ends the game as a draw.
            let outcome = match game.rules() {
                Rules::Classic => GameStatus::Draw,
                Rules::Standard => game.result(),
            };
            return self.finish(outcome, sink);
        }

        let pt = moves[self.rng.usize(..moves.len())];
        trace!(?pt, player = %game.current_player(), "autoplay move");
        // `pt` came from the legal move list, so it is on the board and placeable.
        if game.handle_move(pt).map_err(io::Error::other)?.is_placed() {
            sink.render(game.board(), &game.legal_moves())?;
            sink.show_status(&game.status_line())?;
        }

        let status = game.status();
        if status.is_over() {
            return self.finish(status, sink);
        }
        Ok(Tick::Moved(pt))
    }

    fn finish(&mut self, outcome: GameStatus, sink: &mut dyn RenderSink) -> io::Result<Tick> {
        self.stop();
        info!(?outcome, "game over");
        sink.announce(outcome)?;
        Ok(Tick::Finished(outcome))
    }

    /// Start the driver and play until the game ends, pausing between moves.
    ///
    /// Returns the final status, or `InProgress` if the driver was stopped
    /// some other way.
    pub fn run(&mut self, game: &mut Game, sink: &mut dyn RenderSink) -> io::Result<GameStatus> {
        self.start();
        while self.running {
            thread::sleep(self.interval);
            if let Tick::Finished(outcome) = self.tick(game, sink)? {
                return Ok(outcome);
            }
        }
        Ok(GameStatus::InProgress)
    }
}
