//! Presentation boundary.
//!
//! The engine never draws anything itself. Whatever shows the game to a
//! player implements [`RenderSink`]; the console and the autoplay driver push
//! the board, a status line and the final result through it.

use std::io::{self, Write};

use crate::board::{Board, Cell, Point};
use crate::constants::N;
use crate::game::GameStatus;

pub trait RenderSink {
    /// Draw the board, marking `highlights` as playable.
    fn render(&mut self, board: &Board, highlights: &[Point]) -> io::Result<()>;

    /// Show the turn and score line.
    fn show_status(&mut self, text: &str) -> io::Result<()>;

    /// Tell the players how the game ended.
    fn announce(&mut self, outcome: GameStatus) -> io::Result<()>;
}

/// Message shown when a game finishes.
pub fn outcome_message(outcome: GameStatus) -> String {
    match outcome {
        GameStatus::Win(player) => format!("Game over: {player} wins!"),
        GameStatus::Draw => "Game over: draw!".to_string(),
        GameStatus::InProgress => "Game in progress".to_string(),
    }
}

/// Plain-text sink: `X` black, `O` white, `*` legal move, `.` empty.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    fn render(&mut self, board: &Board, highlights: &[Point]) -> io::Result<()> {
        write!(self.out, " ")?;
        for col in 0..N {
            write!(self.out, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(self.out)?;
        for row in 0..N {
            write!(self.out, "{}", row + 1)?;
            for col in 0..N {
                let ch = match board.get((row, col)) {
                    Ok(Cell::Black) => 'X',
                    Ok(Cell::White) => 'O',
                    _ if highlights.contains(&(row, col)) => '*',
                    _ => '.',
                };
                write!(self.out, " {ch}")?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn show_status(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn announce(&mut self, outcome: GameStatus) -> io::Result<()> {
        writeln!(self.out, "{}", outcome_message(outcome))?;
        self.out.flush()
    }
}

/// Translate a pointer position on a square surface into the cell under it.
///
/// `surface` is the side length of the surface in the same units as `x` and
/// `y`. Returns `None` for positions outside the surface.
pub fn pointer_to_cell(x: f64, y: f64, surface: f64) -> Option<Point> {
    if surface <= 0.0 || !(0.0..surface).contains(&x) || !(0.0..surface).contains(&y) {
        return None;
    }
    let cell = surface / N as f64;
    let col = ((x / cell).floor() as usize).min(N - 1);
    let row = ((y / cell).floor() as usize).min(N - 1);
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::moves::legal_moves;

    fn rendered(board: &Board, highlights: &[Point]) -> String {
        let mut sink = TextSink::new(Vec::new());
        sink.render(board, highlights).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_render_highlights() {
        let board = Board::opening();
        let moves = legal_moves(&board, Player::Black);
        let text = rendered(&board, &moves);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[3], "3 . . . * . . . .");
        assert_eq!(lines[4], "4 . . * O X . . .");
        assert_eq!(lines[5], "5 . . . X O * . .");
        assert_eq!(lines[6], "6 . . . . * . . .");
    }

    #[test]
    fn test_highlight_never_covers_disc() {
        let board = Board::opening();
        let text = rendered(&board, &[(3, 3)]);
        assert!(text.lines().nth(4).unwrap().contains('O'));
    }

    #[test]
    fn test_announce() {
        let mut sink = TextSink::new(Vec::new());
        sink.announce(GameStatus::Win(Player::White)).unwrap();
        sink.announce(GameStatus::Draw).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Game over: White wins!\nGame over: draw!\n");
    }

    #[test]
    fn test_pointer_to_cell() {
        assert_eq!(pointer_to_cell(0.0, 0.0, 400.0), Some((0, 0)));
        assert_eq!(pointer_to_cell(175.0, 110.0, 400.0), Some((2, 3)));
        assert_eq!(pointer_to_cell(399.9, 399.9, 400.0), Some((7, 7)));
        assert_eq!(pointer_to_cell(400.0, 10.0, 400.0), None);
        assert_eq!(pointer_to_cell(-1.0, 10.0, 400.0), None);
        assert_eq!(pointer_to_cell(10.0, 10.0, 0.0), None);
    }
}
