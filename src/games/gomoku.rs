//! Gomoku (five in a row) on a square board.
//!
//! Placing is allowed on any empty cell. Once a player has five in a
//! row, their opponent's option set is empty, so under normal play the
//! five-in-a-row side wins. Board rows are persistent vectors, making
//! the per-option clone in `options` cheap.

use im::Vector;

use crate::core::PlayerId;
use crate::rules::GameState;

type Cell = Option<PlayerId>;

/// Number of aligned stones that ends the game.
const RUN: usize = 5;

/// A Gomoku position. Black is player 0, White player 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gomoku {
    board: Vector<Vector<Cell>>,
    size: usize,
    /// Remaining moves during which the swap (pie rule) option is
    /// offered; 0 disables it.
    pie_moves: u32,
}

impl Gomoku {
    /// An empty `size` x `size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let row: Vector<Cell> = std::iter::repeat(None).take(size).collect();
        Self {
            board: std::iter::repeat(row).take(size).collect(),
            size,
            pie_moves: 0,
        }
    }

    /// Offer the pie rule (playing a color swap instead of a stone) for
    /// the first `moves` moves.
    #[must_use]
    pub fn with_pie_rule(mut self, moves: u32) -> Self {
        self.pie_moves = moves;
        self
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The stone at (`row`, `col`), if any.
    #[must_use]
    pub fn stone_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Place a stone for `player`; returns the resulting position.
    /// Occupied cells are left unchanged.
    #[must_use]
    pub fn place(&self, row: usize, col: usize, player: PlayerId) -> Self {
        let mut next = self.clone();
        next.pie_moves = next.pie_moves.saturating_sub(1);
        if next.stone_at(row, col).is_none() {
            let mut new_row = next.board[row].clone();
            new_row.set(col, Some(player));
            next.board.set(row, new_row);
        }
        next
    }

    /// The board with every stone's color swapped (the pie rule move).
    #[must_use]
    pub fn swapped(&self) -> Self {
        let mut next = self.clone();
        next.pie_moves = next.pie_moves.saturating_sub(1);
        next.board = self
            .board
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(PlayerId::opponent)).collect())
            .collect();
        next
    }

    /// Whether `player` has `RUN` aligned stones in any direction.
    #[must_use]
    pub fn has_run(&self, player: PlayerId) -> bool {
        // Right, down, and the two diagonals cover every line once.
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        for row in 0..self.size {
            for col in 0..self.size {
                for (dr, dc) in DIRECTIONS {
                    if self.run_from(row, col, dr, dc, player) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn run_from(&self, row: usize, col: usize, dr: isize, dc: isize, player: PlayerId) -> bool {
        for step in 0..RUN as isize {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            if r < 0 || c < 0 {
                return false;
            }
            if self.stone_at(r as usize, c as usize) != Some(player) {
                return false;
            }
        }
        true
    }
}

impl GameState for Gomoku {
    fn options(&self, player: PlayerId) -> Vec<Self> {
        if self.has_run(player.opponent()) {
            return vec![];
        }

        let mut options = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.stone_at(row, col).is_none() {
                    options.push(self.place(row, col, player));
                }
            }
        }
        if self.pie_moves > 0 {
            options.push(self.swapped());
        }
        options
    }

    fn player_name(&self, player: PlayerId) -> &str {
        if player == PlayerId::LEFT {
            "Black"
        } else {
            "White"
        }
    }
}

impl std::fmt::Display for Gomoku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.board {
            for cell in row {
                let glyph = match cell {
                    Some(p) if *p == PlayerId::LEFT => 'X',
                    Some(_) => 'O',
                    None => '.',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
