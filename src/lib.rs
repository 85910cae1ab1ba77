//! othello-rs: an Othello (Reversi) rules engine with random autoplay.
//!
//! Two players share one board; an optional driver plays random legal moves
//! for both sides. Drawing the board is left to a [`render::RenderSink`].
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, opening position and timing
//! - [`board`] - Cells, players and the 8x8 grid
//! - [`moves`] - Flip resolution, legal moves and square notation
//! - [`game`] - Turn handling and end-of-game detection
//! - [`autoplay`] - Random self-play driver
//! - [`render`] - Presentation boundary and a text implementation
//! - [`console`] - Interactive terminal front end
//!
//! ## Example
//!
//! ```
//! use othello_rs::game::{Game, GameStatus, Rules};
//! use othello_rs::moves::parse_coord;
//!
//! let mut game = Game::new(Rules::Classic);
//! let outcome = game.handle_move(parse_coord("d3").unwrap()).unwrap();
//! assert!(outcome.is_placed());
//! assert_eq!(game.score(), (4, 1));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod autoplay;
pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod moves;
pub mod render;
