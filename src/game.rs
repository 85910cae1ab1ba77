//! Game engine: turn management, move application and end-of-game detection.
//!
//! A [`Game`] owns the board, the player to move and the rule set in use.
//! All mutation goes through [`Game::handle_move`], which places a disc and
//! flips the captured discs in one step.
//!
//! Two rule sets decide when a game is over:
//!
//! - [`Rules::Classic`]: the game ends when the board is full or one colour has
//!   no discs left. Players never pass; a player without a legal move simply
//!   has nothing to play.
//! - [`Rules::Standard`]: tournament Othello. A player without a legal move
//!   passes, and the game ends as soon as neither side can move.

use tracing::{debug, info};

use crate::board::{Board, BoardError, Point, Player};
use crate::moves::{flippable_discs, legal_moves};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Rules {
    #[default]
    Classic,
    Standard,
}

/// Derived state of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Draw,
    Win(Player),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Why a placement was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The target cell already holds a disc.
    Occupied,
    /// The placement would not flip any opponent disc.
    NoCaptures,
}

/// Result of [`Game::handle_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed {
        point: Point,
        flipped: Vec<Point>,
        /// The next player had no move and the turn came straight back.
        passed: bool,
    },
    Rejected(Rejection),
}

impl MoveOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Player,
    rules: Rules,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Game {
    /// A new game from the standard opening, Black to move.
    pub fn new(rules: Rules) -> Self {
        Self::from_position(Board::opening(), Player::Black, rules)
    }

    /// A game resumed from an arbitrary position.
    pub fn from_position(board: Board, current: Player, rules: Rules) -> Self {
        Self {
            board,
            current,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Disc counts as `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    /// Legal placements for the player to move.
    pub fn legal_moves(&self) -> Vec<Point> {
        legal_moves(&self.board, self.current)
    }

    /// Place a disc for the player to move.
    ///
    /// Occupied cells and placements that capture nothing are rejected without
    /// touching the game. A placed move flips every captured disc and hands the
    /// turn to the opponent (or, under [`Rules::Standard`], straight back if the
    /// opponent has nothing to play).
    ///
    /// # Errors
    /// - [`BoardError::OutOfRange`] if `pt` is not on the board
    pub fn handle_move(&mut self, pt: Point) -> Result<MoveOutcome, BoardError> {
        if !self.board.is_empty_at(pt)? {
            debug!(?pt, player = %self.current, "move rejected: cell occupied");
            return Ok(MoveOutcome::Rejected(Rejection::Occupied));
        }

        let flipped = flippable_discs(&self.board, pt, self.current);
        if flipped.is_empty() {
            debug!(?pt, player = %self.current, "move rejected: nothing to flip");
            return Ok(MoveOutcome::Rejected(Rejection::NoCaptures));
        }

        self.board.set(pt, self.current)?;
        for &p in &flipped {
            self.board.set(p, self.current)?;
        }
        self.current = self.current.opponent();

        let passed = self.rules == Rules::Standard && self.pass_if_stuck();

        Ok(MoveOutcome::Placed {
            point: pt,
            flipped,
            passed,
        })
    }

    /// Hand the turn back when the player to move cannot play but the opponent can.
    fn pass_if_stuck(&mut self) -> bool {
        if !legal_moves(&self.board, self.current).is_empty() {
            return false;
        }
        if legal_moves(&self.board, self.current.opponent()).is_empty() {
            return false;
        }
        info!(player = %self.current, "no legal move, passing");
        self.current = self.current.opponent();
        true
    }

    /// Whether the game is over, and who won.
    pub fn status(&self) -> GameStatus {
        let (black, white) = self.score();
        let over = match self.rules {
            Rules::Classic => self.board.is_full() || black == 0 || white == 0,
            Rules::Standard => {
                legal_moves(&self.board, Player::Black).is_empty()
                    && legal_moves(&self.board, Player::White).is_empty()
            }
        };
        if !over {
            return GameStatus::InProgress;
        }
        self.result()
    }

    /// Compare disc counts: the larger count wins, equal counts draw.
    pub fn result(&self) -> GameStatus {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameStatus::Win(Player::Black),
            std::cmp::Ordering::Less => GameStatus::Win(Player::White),
            std::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }

    /// One-line summary of the turn and the disc counts.
    pub fn status_line(&self) -> String {
        let (black, white) = self.score();
        format!(
            "{} to move, Black {black} - White {white}",
            self.current
        )
    }
}
