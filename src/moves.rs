//! Move resolution: which opponent discs a placement would flip.
//!
//! A placement is legal when it captures at least one opponent disc. Captures
//! are found by walking each of the eight compass rays from the target cell:
//! a run of opponent discs closed off by one of the mover's own discs is
//! flipped, while a run that reaches the edge or an empty cell flips nothing.
//!
//! Coordinates use the usual Othello notation: columns `a`-`h` from left to
//! right and rows `1`-`8` from top to bottom, so `d3` is `(2, 3)`.

use crate::board::{Board, Cell, Point, Player};
use crate::constants::{DIRECTIONS, N};

/// Step one cell from `pt` along `(dr, dc)`, or `None` past the edge.
#[inline]
fn step((row, col): Point, (dr, dc): (isize, isize)) -> Option<Point> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < N && c < N).then_some((r, c))
}

/// Cells read along a ray, `Empty` past the edge.
#[inline]
fn cell_at(board: &Board, pt: Point) -> Cell {
    board.get(pt).unwrap_or(Cell::Empty)
}

/// Opponent discs that `player` would flip by placing a disc at `pt`.
///
/// The target cell itself is never inspected, so the result is meaningful only
/// when the caller has checked that it is empty. An empty result means the
/// placement is not a legal move. Rays are disjoint, so no point repeats.
pub fn flippable_discs(board: &Board, pt: Point, player: Player) -> Vec<Point> {
    let opponent = Cell::from(player.opponent());
    let own = Cell::from(player);
    let mut flippable = Vec::new();

    for dir in DIRECTIONS {
        let mut run = Vec::new();
        let mut cur = step(pt, dir);
        while let Some(p) = cur {
            if cell_at(board, p) != opponent {
                break;
            }
            run.push(p);
            cur = step(p, dir);
        }
        // The run only counts when it is bracketed by one of our own discs.
        if let Some(end) = cur {
            if cell_at(board, end) == own {
                flippable.extend(run);
            }
        }
    }

    flippable
}

/// Whether `player` may place a disc at `pt`.
pub fn is_legal(board: &Board, pt: Point, player: Player) -> bool {
    matches!(board.get(pt), Ok(Cell::Empty)) && !flippable_discs(board, pt, player).is_empty()
}

/// Every legal placement for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Point> {
    board
        .cells()
        .filter(|&(pt, cell)| cell == Cell::Empty && !flippable_discs(board, pt, player).is_empty())
        .map(|(pt, _)| pt)
        .collect()
}

/// Parse a square such as `"d3"` into a `(row, col)` point.
///
/// Returns `None` for anything that is not a square on the board.
pub fn parse_coord(s: &str) -> Option<Point> {
    let bytes = s.trim().as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let col_char = bytes[0].to_ascii_lowercase();
    if !(b'a'..b'a' + N as u8).contains(&col_char) {
        return None;
    }
    let row_char = bytes[1];
    if !(b'1'..b'1' + N as u8).contains(&row_char) {
        return None;
    }

    Some(((row_char - b'1') as usize, (col_char - b'a') as usize))
}

/// Format a point as a square such as `"d3"`.
pub fn str_coord((row, col): Point) -> String {
    let c = (b'a' + col as u8) as char;
    format!("{c}{}", row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_flip_north_to_south() {
        let board = Board::opening();
        assert_eq!(flippable_discs(&board, (2, 3), Player::Black), vec![(3, 3)]);
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::opening();
        assert_eq!(
            legal_moves(&board, Player::Black),
            vec![(2, 3), (3, 2), (4, 5), (5, 4)]
        );
        assert_eq!(
            legal_moves(&board, Player::White),
            vec![(2, 4), (3, 5), (4, 2), (5, 3)]
        );
    }

    #[test]
    fn test_corner_has_no_flips() {
        let board = Board::opening();
        assert!(flippable_discs(&board, (0, 0), Player::Black).is_empty());
        assert!(!is_legal(&board, (0, 0), Player::Black));
    }

    #[test]
    fn test_run_to_edge_flips_nothing() {
        let mut board = Board::new();
        board.set((0, 1), Player::White).unwrap();
        board.set((0, 2), Player::White).unwrap();
        // Ray west from (0, 3) runs off the board without meeting Black.
        assert!(flippable_discs(&board, (0, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_run_to_empty_flips_nothing() {
        let mut board = Board::new();
        board.set((3, 3), Player::White).unwrap();
        assert!(flippable_discs(&board, (3, 2), Player::Black).is_empty());
    }

    #[test]
    fn test_multiple_directions() {
        let mut board = Board::new();
        // A White ring around (2, 2), each ray capped by Black two steps out.
        for pt in [(0, 0), (0, 2), (0, 4), (2, 0), (2, 4), (4, 0), (4, 2), (4, 4)] {
            board.set(pt, Player::Black).unwrap();
        }
        for pt in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)] {
            board.set(pt, Player::White).unwrap();
        }
        let mut flips = flippable_discs(&board, (2, 2), Player::Black);
        flips.sort();
        assert_eq!(
            flips,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn test_long_run_stops_at_own_disc() {
        let mut board = Board::new();
        board.set((7, 0), Player::White).unwrap();
        for col in 1..6 {
            board.set((7, col), Player::Black).unwrap();
        }
        board.set((7, 7), Player::White).unwrap();
        // White at (7, 0) brackets the Black run from the west.
        let flips = flippable_discs(&board, (7, 6), Player::White);
        assert_eq!(flips, vec![(7, 5), (7, 4), (7, 3), (7, 2), (7, 1)]);
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("a1"), Some((0, 0)));
        assert_eq!(parse_coord("D3"), Some((2, 3)));
        assert_eq!(parse_coord(" h8 "), Some((7, 7)));
        assert_eq!(parse_coord("i1"), None);
        assert_eq!(parse_coord("a9"), None);
        assert_eq!(parse_coord("a0"), None);
        assert_eq!(parse_coord("d"), None);
        assert_eq!(parse_coord("d10"), None);
    }

    #[test]
    fn test_str_coord() {
        assert_eq!(str_coord((0, 0)), "a1");
        assert_eq!(str_coord((2, 3)), "d3");
        assert_eq!(str_coord((7, 7)), "h8");
    }
}
