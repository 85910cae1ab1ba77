//! Constants for board geometry, the opening position and autoplay timing.
//!
//! The board is always 8x8. Coordinates are `(row, col)` with `(0, 0)` in the
//! top-left corner, matching the algebraic square `a1`.

use std::time::Duration;

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Row/column offsets to the eight neighbouring cells.
/// Order: North, South, West, East, NW, NE, SW, SE
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

// =============================================================================
// Opening
// =============================================================================

/// Centre squares occupied by White at the start of a game.
pub const OPENING_WHITE: [(usize, usize); 2] = [(3, 3), (4, 4)];

/// Centre squares occupied by Black at the start of a game.
pub const OPENING_BLACK: [(usize, usize); 2] = [(3, 4), (4, 3)];

// =============================================================================
// Autoplay
// =============================================================================

/// Default delay between two autoplay moves.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(1000);
