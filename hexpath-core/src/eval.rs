//! Position evaluation: shortest connection paths plus stone centrality

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, NEIGHBOR_OFFSETS};

/// Score for a won position (effectively infinite).
pub const WIN_SCORE: i32 = 100_000;

/// Clamp applied to an unreachable path cost before it enters the
/// heuristic, so two sentinels never combine into nonsense.
pub const UNREACHABLE_COST: i32 = 1_000;

/// Heuristic weights.
///
/// One step of path progress must always outweigh any positional
/// difference, so `path_weight` stays at least two orders of magnitude
/// above `center_weight`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Weights {
    /// Weight on the path-cost differential
    pub path_weight: i32,
    /// Weight on the stone-centrality differential
    pub center_weight: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            path_weight: 1_000,
            center_weight: 10,
        }
    }
}

/// Cost of stepping into a cell for `player`: own stones are free, empty
/// cells cost one, opponent stones are impassable.
fn step_cost(board: &Board, row: usize, col: usize, player: Player) -> Option<u32> {
    match board.get(row, col) {
        Some(p) if p == player => Some(0),
        Some(_) => None,
        None => Some(1),
    }
}

/// Minimal weighted cost for `player` to connect their two edges, or
/// `None` if the opponent has walled the board off.
///
/// Multi-source Dijkstra seeded from every passable cell on the starting
/// edge (row 0 for Blue, column 0 for Red), each with its own cell cost.
/// Stops as soon as any goal-edge cell pops with a finalized distance.
pub fn shortest_connection_cost(board: &Board, player: Player) -> Option<u32> {
    let n = board.size();
    let mut dist = vec![u32::MAX; n * n];
    let mut heap: BinaryHeap<Reverse<(u32, usize, usize)>> = BinaryHeap::new();

    for i in 0..n {
        let (row, col) = match player {
            Player::Blue => (0, i),
            Player::Red => (i, 0),
        };
        if let Some(cost) = step_cost(board, row, col, player) {
            dist[row * n + col] = cost;
            heap.push(Reverse((cost, row, col)));
        }
    }

    while let Some(Reverse((cost, row, col))) = heap.pop() {
        if cost > dist[row * n + col] {
            continue; // stale entry
        }
        let at_goal = match player {
            Player::Blue => row == n - 1,
            Player::Red => col == n - 1,
        };
        if at_goal {
            return Some(cost);
        }
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let nr = row as isize + dr as isize;
            let nc = col as isize + dc as isize;
            if nr < 0 || nc < 0 || nr >= n as isize || nc >= n as isize {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if let Some(step) = step_cost(board, nr, nc, player) {
                let next = cost + step;
                if next < dist[nr * n + nc] {
                    dist[nr * n + nc] = next;
                    heap.push(Reverse((next, nr, nc)));
                }
            }
        }
    }

    None
}

/// Centrality score for `player`: each stone contributes
/// `n − manhattan-distance-to-center`.
pub fn positional_score(board: &Board, player: Player) -> i32 {
    let n = board.size();
    let center = n / 2;
    let mut score = 0i32;
    for row in 0..n {
        for col in 0..n {
            if board.get(row, col) == Some(player) {
                let dist = row.abs_diff(center) + col.abs_diff(center);
                score += n as i32 - dist as i32;
            }
        }
    }
    score
}

/// Signed static evaluation from `view`'s perspective: positive favors
/// `view`. Path progress dominates; centrality breaks ties between
/// path-equivalent positions.
pub fn evaluate(board: &Board, view: Player, weights: &Weights) -> i32 {
    let own_cost = clamp_cost(shortest_connection_cost(board, view));
    let opp_cost = clamp_cost(shortest_connection_cost(board, view.opponent()));
    let path_score = (opp_cost - own_cost) * weights.path_weight;

    let own_pos = positional_score(board, view);
    let opp_pos = positional_score(board, view.opponent());
    let pos_score = (own_pos - opp_pos) * weights.center_weight;

    path_score + pos_score
}

fn clamp_cost(cost: Option<u32>) -> i32 {
    match cost {
        Some(c) => (c as i32).min(UNREACHABLE_COST),
        None => UNREACHABLE_COST,
    }
}
