//! Hex board: rhombic n×n grid of hexagonal cells

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Smallest playable board (a 1×1 board is won by the first stone).
pub const MIN_BOARD_SIZE: usize = 2;

/// The six hex neighbor offsets as (row, col) deltas.
///
/// The rhombic grid stores cells row-major; each interior cell touches its
/// two lateral neighbors, the two vertical neighbors, and the two
/// anti-diagonal neighbors that complete the hexagonal tiling.
pub const NEIGHBOR_OFFSETS: [(i8, i8); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// Player color
///
/// Blue connects the top edge (row 0) to the bottom edge (row n−1) and
/// moves first; Red connects the left edge (column 0) to the right edge
/// (column n−1). Hex admits no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

/// A stone placement: zero-based (row, col) within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Board state: dense row-major cell array plus side to move.
///
/// `Clone` gives callers deep copies for copy-based branching; the search
/// engine itself mutates one board in place via `place`/`undo`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    to_move: Player,
}

impl Board {
    /// Create an empty board of side length `size`, Blue to move.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            to_move: Player::Blue,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Side to move. Maintained by `place`/`undo`; the search specifies the
    /// mover explicitly at each ply and does not read this.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn in_range(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell contents, or `None` for empty or out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        if self.in_range(row, col) {
            self.cells[self.index(row, col)]
        } else {
            None
        }
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.in_range(row, col) && self.cells[self.index(row, col)].is_none()
    }

    /// Place a stone for `player`.
    ///
    /// Returns false without mutating anything if the coordinate is out of
    /// range or the cell is already occupied. On success the turn indicator
    /// flips to the opponent.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.in_range(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(player);
        self.to_move = player.opponent();
        true
    }

    /// Undo the immediately preceding `place` on this cell: clears it and
    /// restores the turn indicator to `restored_mover`, the side to move
    /// before that `place`. The caller supplies the mover explicitly
    /// because the search places stones for whichever side it is
    /// exploring, not necessarily the side on turn. Valid only as the
    /// exact inverse of the preceding `place`.
    pub fn undo(&mut self, row: usize, col: usize, restored_mover: Player) {
        debug_assert!(self.in_range(row, col));
        let idx = self.index(row, col);
        self.cells[idx] = None;
        self.to_move = restored_mover;
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Winner of the position, if either player has completed their
    /// connection. At most one player can have one.
    pub fn winner(&self) -> Option<Player> {
        if self.has_connection(Player::Blue) {
            Some(Player::Blue)
        } else if self.has_connection(Player::Red) {
            Some(Player::Red)
        } else {
            None
        }
    }

    /// Edge-to-edge connectivity test for `player`: DFS flood fill from
    /// every stone on the starting edge, following hex adjacency through
    /// the player's own stones only.
    pub fn has_connection(&self, player: Player) -> bool {
        let n = self.size;
        let mut visited = vec![false; n * n];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        // Seed from the starting edge: row 0 for Blue, column 0 for Red.
        match player {
            Player::Blue => {
                for col in 0..n {
                    if self.cells[self.index(0, col)] == Some(player) {
                        visited[self.index(0, col)] = true;
                        stack.push((0, col));
                    }
                }
            }
            Player::Red => {
                for row in 0..n {
                    if self.cells[self.index(row, 0)] == Some(player) {
                        visited[self.index(row, 0)] = true;
                        stack.push((row, 0));
                    }
                }
            }
        }

        while let Some((row, col)) = stack.pop() {
            let reached_goal = match player {
                Player::Blue => row == n - 1,
                Player::Red => col == n - 1,
            };
            if reached_goal {
                return true;
            }
            for &(dr, dc) in &NEIGHBOR_OFFSETS {
                let nr = row as isize + dr as isize;
                let nc = col as isize + dc as isize;
                if nr < 0 || nc < 0 || nr >= n as isize || nc >= n as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                let idx = self.index(nr, nc);
                if !visited[idx] && self.cells[idx] == Some(player) {
                    visited[idx] = true;
                    stack.push((nr, nc));
                }
            }
        }

        false
    }
}
