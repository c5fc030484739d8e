//! Play command - run a game between two players
//!
//! Each side is either the alpha-beta engine at a configurable depth or a
//! seeded random mover. The board is printed after every move unless
//! `--quiet` is given; `--json` emits a machine-readable game record.

use anyhow::{Context, Result};
use clap::Args;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use hexpath_core::{ordered_moves, Board, Move, Player, SearchAi, Weights};

#[derive(Args)]
pub struct PlayArgs {
    /// Board side length
    #[arg(long, default_value = "7")]
    pub size: usize,

    /// Search depth for Blue (vertical player, moves first)
    #[arg(long, default_value = "3")]
    pub blue_depth: u32,

    /// Search depth for Red (horizontal player)
    #[arg(long, default_value = "3")]
    pub red_depth: u32,

    /// Replace Blue with a random mover
    #[arg(long)]
    pub random_blue: bool,

    /// Replace Red with a random mover
    #[arg(long)]
    pub random_red: bool,

    /// Seed for random movers
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output the game record as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress per-move board printing
    #[arg(long)]
    pub quiet: bool,
}

/// One side of the game
enum Contestant {
    Engine(SearchAi),
    Random(ChaCha8Rng),
}

impl Contestant {
    fn choose(&mut self, board: &mut Board) -> Option<Move> {
        match self {
            Contestant::Engine(ai) => ai.best_move(board),
            Contestant::Random(rng) => {
                let moves = ordered_moves(board);
                moves.choose(rng).copied()
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Contestant::Engine(ai) => format!("engine(depth={})", ai.depth()),
            Contestant::Random(_) => "random".to_string(),
        }
    }
}

/// Completed game record
#[derive(Serialize)]
struct GameRecord {
    size: usize,
    blue: String,
    red: String,
    moves: Vec<(Player, Move)>,
    winner: Option<Player>,
}

/// Run play command
///
/// 1. Build the board and both contestants
/// 2. Alternate moves until a connection or a full board
/// 3. Report the result
pub fn run(args: PlayArgs) -> Result<()> {
    let mut board = Board::new(args.size).context("invalid board size")?;
    let mut blue = make_contestant(Player::Blue, &args)?;
    let mut red = make_contestant(Player::Red, &args)?;

    tracing::info!(
        "Starting game: {} vs {} on {}x{}",
        blue.describe(),
        red.describe(),
        args.size,
        args.size
    );

    let record = play_game(&mut board, &mut blue, &mut red, &args);

    report(&record, &args)
}

fn make_contestant(player: Player, args: &PlayArgs) -> Result<Contestant> {
    let (random, depth) = match player {
        Player::Blue => (args.random_blue, args.blue_depth),
        Player::Red => (args.random_red, args.red_depth),
    };
    if random {
        // Offset the seed per color so two random sides diverge.
        let seed = args.seed + player as u64;
        Ok(Contestant::Random(ChaCha8Rng::seed_from_u64(seed)))
    } else {
        let ai = SearchAi::new(player, depth, Weights::default())
            .context("invalid search depth")?;
        Ok(Contestant::Engine(ai))
    }
}

fn play_game(
    board: &mut Board,
    blue: &mut Contestant,
    red: &mut Contestant,
    args: &PlayArgs,
) -> GameRecord {
    let mut moves = Vec::new();
    let mut winner = None;
    let mut mover = Player::Blue;

    loop {
        let contestant = match mover {
            Player::Blue => &mut *blue,
            Player::Red => &mut *red,
        };
        let Some(mv) = contestant.choose(board) else {
            break; // full board
        };
        board.place(mv.row, mv.col, mover);
        moves.push((mover, mv));

        if !args.quiet && !args.json {
            println!("{:?} plays ({}, {})", mover, mv.row, mv.col);
            print_board(board);
        }

        if let Some(w) = board.winner() {
            winner = Some(w);
            break;
        }
        mover = mover.opponent();
    }

    GameRecord {
        size: board.size(),
        blue: blue.describe(),
        red: red.describe(),
        moves,
        winner,
    }
}

fn report(record: &GameRecord, args: &PlayArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }
    match record.winner {
        Some(w) => println!("{w:?} wins in {} moves", record.moves.len()),
        None => println!("No winner (board full after {} moves)", record.moves.len()),
    }
    Ok(())
}

/// Print the rhombus with each row shifted half a cell, matching the
/// hexagonal tiling.
fn print_board(board: &Board) {
    let n = board.size();
    for row in 0..n {
        let indent = " ".repeat(row);
        let cells: Vec<&str> = (0..n)
            .map(|col| match board.get(row, col) {
                Some(Player::Blue) => "B",
                Some(Player::Red) => "R",
                None => ".",
            })
            .collect();
        println!("{}{}", indent, cells.join(" "));
    }
}
