//! Move enumeration and ordering

use crate::board::{Board, Move};

/// Manhattan distance from a cell to the board center `(n/2, n/2)`.
fn center_distance(board: &Board, mv: Move) -> usize {
    let center = board.size() / 2;
    mv.row.abs_diff(center) + mv.col.abs_diff(center)
}

/// Legal moves (empty cells), center-first.
///
/// Cells are enumerated in row-major order and then stably sorted by
/// Manhattan distance to the center, so equally distant cells keep their
/// row-major relative order. Central cells are strategically stronger in
/// Hex; searching them first tightens the alpha-beta bounds earlier and
/// produces more cutoffs. Recomputed fresh at every node.
pub fn ordered_moves(board: &Board) -> Vec<Move> {
    let n = board.size();
    let mut moves = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            if board.is_empty(row, col) {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves.sort_by_key(|&mv| center_distance(board, mv));
    moves
}
