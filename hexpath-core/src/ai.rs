//! Alpha-beta search over the board

use crate::board::{Board, Move, Player};
use crate::error::EngineError;
use crate::eval::{evaluate, Weights, WIN_SCORE};
use crate::moves::ordered_moves;

/// Depth-limited minimax player with alpha-beta pruning.
///
/// The engine mutates the caller's board in place during search and
/// restores it (cells and turn indicator) before every return, so a
/// `best_move` call is pure with respect to caller-visible state. The
/// board must not be touched by anyone else while a search is running.
#[derive(Debug)]
pub struct SearchAi {
    player: Player,
    depth: u32,
    weights: Weights,
}

impl SearchAi {
    /// Create an engine playing `player` at a fixed search depth.
    ///
    /// Depth zero would search nothing (and a naive loop over it recurses
    /// forever), so it is rejected here rather than clamped.
    pub fn new(player: Player, depth: u32, weights: Weights) -> Result<Self, EngineError> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth);
        }
        Ok(Self {
            player,
            depth,
            weights,
        })
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Static evaluation of a position from this engine's perspective,
    /// independent of any search cutoff.
    pub fn evaluate_position(&self, board: &Board) -> i32 {
        evaluate(board, self.player, &self.weights)
    }

    /// Choose a move for this engine's color, or `None` on a full board.
    ///
    /// Root loop of the search: each candidate is placed, searched with
    /// the opponent to reply, and undone. The first move reaching the
    /// best value wins ties, which together with the stable move ordering
    /// makes the choice deterministic.
    pub fn best_move(&self, board: &mut Board) -> Option<Move> {
        let moves = ordered_moves(board);
        let restored_mover = board.to_move();
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            board.place(mv.row, mv.col, self.player);
            let value = self.minimax(board, false, self.depth - 1, alpha, beta);
            board.undo(mv.row, mv.col, restored_mover);

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
            alpha = alpha.max(value);
        }

        best.map(|(mv, _)| mv)
    }

    /// Minimax with alpha-beta pruning; the maximizer is `self.player`.
    ///
    /// The terminal win test runs before the depth cutoff so a decided
    /// position is never handed to the static heuristic. Wins score
    /// `WIN_SCORE` plus the remaining depth budget, so among forced wins
    /// the engine prefers the one reached soonest.
    fn minimax(&self, board: &mut Board, maximizing: bool, depth: u32, alpha: i32, beta: i32) -> i32 {
        if let Some(winner) = board.winner() {
            let value = WIN_SCORE + depth as i32;
            return if winner == self.player { value } else { -value };
        }

        if depth == 0 {
            return evaluate(board, self.player, &self.weights);
        }

        let moves = ordered_moves(board);
        if moves.is_empty() {
            // Full board with no winner cannot arise in Hex, but must not
            // crash; fall back to the static evaluation.
            return evaluate(board, self.player, &self.weights);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let restored_mover = board.to_move();

        if maximizing {
            let mut alpha = alpha;
            let mut best = i32::MIN;
            for mv in moves {
                board.place(mv.row, mv.col, mover);
                let value = self.minimax(board, false, depth - 1, alpha, beta);
                board.undo(mv.row, mv.col, restored_mover);

                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut beta = beta;
            let mut best = i32::MAX;
            for mv in moves {
                board.place(mv.row, mv.col, mover);
                let value = self.minimax(board, true, depth - 1, alpha, beta);
                board.undo(mv.row, mv.col, restored_mover);

                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(player: Player, depth: u32) -> SearchAi {
        SearchAi::new(player, depth, Weights::default()).unwrap()
    }

    /// Plain minimax without pruning, as a reference for the alpha-beta
    /// equivalence test.
    fn reference_minimax(ai: &SearchAi, board: &mut Board, maximizing: bool, depth: u32) -> i32 {
        if let Some(winner) = board.winner() {
            let value = WIN_SCORE + depth as i32;
            return if winner == ai.player { value } else { -value };
        }
        if depth == 0 {
            return ai.evaluate_position(board);
        }
        let moves = ordered_moves(board);
        if moves.is_empty() {
            return ai.evaluate_position(board);
        }
        let mover = if maximizing { ai.player } else { ai.player.opponent() };
        let restored_mover = board.to_move();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            board.place(mv.row, mv.col, mover);
            let value = reference_minimax(ai, board, !maximizing, depth - 1);
            board.undo(mv.row, mv.col, restored_mover);
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            SearchAi::new(Player::Blue, 0, Weights::default()).unwrap_err(),
            EngineError::InvalidDepth
        );
    }

    #[test]
    fn test_returns_empty_cell_without_mutating() {
        let mut board = Board::new(3).unwrap();
        let snapshot = board.clone();
        let mv = engine(Player::Blue, 1).best_move(&mut board).unwrap();
        assert!(board.is_empty(mv.row, mv.col));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_board_restored_after_deep_search() {
        let mut board = Board::new(4).unwrap();
        board.place(1, 1, Player::Blue);
        board.place(2, 2, Player::Red);
        board.place(0, 3, Player::Blue);
        let snapshot = board.clone();
        engine(Player::Red, 4).best_move(&mut board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_out_of_turn_search_restores_turn_indicator() {
        // Red searching a Blue-to-move board: the restore must put back
        // the pre-call turn indicator, not the turn implied by the last
        // stone the search retracted.
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Player::Blue);
        board.place(0, 2, Player::Red);
        assert_eq!(board.to_move(), Player::Blue);
        let snapshot = board.clone();

        engine(Player::Red, 3).best_move(&mut board);

        assert_eq!(board, snapshot);
        assert_eq!(board.to_move(), Player::Blue);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut board = Board::new(2).unwrap();
        board.place(0, 0, Player::Blue);
        board.place(0, 1, Player::Red);
        board.place(1, 0, Player::Blue);
        board.place(1, 1, Player::Red);
        assert_eq!(engine(Player::Blue, 2).best_move(&mut board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // Blue has (0,1) and (2,1); (1,1) completes the connection.
        let mut board = Board::new(3).unwrap();
        board.place(0, 1, Player::Blue);
        board.place(0, 0, Player::Red);
        board.place(2, 1, Player::Blue);
        board.place(2, 2, Player::Red);
        let mv = engine(Player::Blue, 2).best_move(&mut board).unwrap();
        assert_eq!(mv, Move::new(1, 1));
    }

    #[test]
    fn test_blocks_opponent_win() {
        // Red threatens to finish the middle row with (1,2).
        let mut board = Board::new(3).unwrap();
        board.place(1, 0, Player::Red);
        board.place(0, 0, Player::Blue);
        board.place(1, 1, Player::Red);
        board.place(0, 2, Player::Blue);
        let mv = engine(Player::Blue, 2).best_move(&mut board).unwrap();
        assert_eq!(mv, Move::new(1, 2));
    }

    #[test]
    fn test_forced_win_scores_at_least_win_score() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 1, Player::Blue);
        board.place(0, 0, Player::Red);
        board.place(2, 1, Player::Blue);
        board.place(2, 2, Player::Red);
        let ai = engine(Player::Blue, 3);
        board.place(1, 1, Player::Blue);
        let value = ai.minimax(&mut board, false, 2, i32::MIN, i32::MAX);
        board.undo(1, 1, Player::Blue);
        assert!(value >= WIN_SCORE);
    }

    #[test]
    fn test_prefers_immediate_win_over_delayed() {
        // With a win in one available, the winning line must outscore any
        // line that wins only later: more remaining depth, higher value.
        let mut board = Board::new(3).unwrap();
        board.place(0, 1, Player::Blue);
        board.place(0, 0, Player::Red);
        board.place(2, 1, Player::Blue);
        board.place(2, 2, Player::Red);
        let ai = engine(Player::Blue, 4);

        board.place(1, 1, Player::Blue);
        let immediate = ai.minimax(&mut board, false, 3, i32::MIN, i32::MAX);
        board.undo(1, 1, Player::Blue);

        board.place(1, 0, Player::Blue);
        let delayed = ai.minimax(&mut board, false, 3, i32::MIN, i32::MAX);
        board.undo(1, 0, Player::Blue);

        assert!(immediate >= WIN_SCORE);
        assert!(immediate > delayed);
    }

    #[test]
    fn test_pruning_matches_exhaustive_search() {
        // Alpha-beta must agree with plain minimax at every depth on a
        // small board, stones or not.
        let positions = {
            let empty = Board::new(3).unwrap();
            let mut midgame = Board::new(3).unwrap();
            midgame.place(1, 1, Player::Blue);
            midgame.place(1, 0, Player::Red);
            let mut lategame = midgame.clone();
            lategame.place(0, 1, Player::Blue);
            lategame.place(2, 2, Player::Red);
            vec![empty, midgame, lategame]
        };

        for board in positions {
            for depth in 1..=4 {
                for player in [Player::Blue, Player::Red] {
                    let ai = engine(player, depth);
                    let mut pruned_board = board.clone();
                    let pruned =
                        ai.minimax(&mut pruned_board, true, depth, i32::MIN, i32::MAX);
                    let mut full_board = board.clone();
                    let full = reference_minimax(&ai, &mut full_board, true, depth);
                    assert_eq!(
                        pruned, full,
                        "divergence at depth {depth} for {player:?}"
                    );
                    assert_eq!(pruned_board, board);
                    assert_eq!(full_board, board);
                }
            }
        }
    }

    #[test]
    fn test_root_tie_break_is_first_move() {
        // Depth 1 on an empty symmetric board ties many moves; the first
        // in the ordering (the center) must win.
        let mut board = Board::new(3).unwrap();
        let mv = engine(Player::Blue, 1).best_move(&mut board).unwrap();
        assert_eq!(mv, Move::new(1, 1));
    }

    #[test]
    fn test_engine_plays_either_color() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Player::Blue);
        let mv = engine(Player::Red, 2).best_move(&mut board).unwrap();
        assert!(board.is_empty(mv.row, mv.col));
    }
}
