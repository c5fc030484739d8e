//! Bench command - time the engine at increasing search depths
//!
//! Runs `best_move` once per depth on an empty board and prints a
//! depth/time table.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;

use hexpath_core::{Board, Player, SearchAi, Weights};

#[derive(Args)]
pub struct BenchArgs {
    /// Board side length
    #[arg(long, default_value = "11")]
    pub size: usize,

    /// Maximum search depth to test
    #[arg(long, default_value = "4")]
    pub depth: u32,
}

struct BenchRow {
    depth: u32,
    elapsed: Duration,
    chosen: Option<(usize, usize)>,
}

/// Run bench command: one timed search per depth, then the table.
pub fn run(args: BenchArgs) -> Result<()> {
    tracing::info!(
        "Benchmarking depths 1..={} on a {}x{} board",
        args.depth,
        args.size,
        args.size
    );

    let mut rows = Vec::new();
    for depth in 1..=args.depth {
        rows.push(bench_depth(args.size, depth)?);
    }

    report(&rows);
    Ok(())
}

fn bench_depth(size: usize, depth: u32) -> Result<BenchRow> {
    let mut board = Board::new(size).context("invalid board size")?;
    let ai = SearchAi::new(Player::Blue, depth, Weights::default())
        .context("invalid search depth")?;

    let start = Instant::now();
    let mv = ai.best_move(&mut board);
    let elapsed = start.elapsed();

    Ok(BenchRow {
        depth,
        elapsed,
        chosen: mv.map(|m| (m.row, m.col)),
    })
}

fn report(rows: &[BenchRow]) {
    println!("{:<8} | {:<12} | {:<10}", "Depth", "Time (ms)", "Move");
    println!("{}", "-".repeat(36));
    for row in rows {
        let mv = match row.chosen {
            Some((r, c)) => format!("({r}, {c})"),
            None => "none".to_string(),
        };
        println!(
            "{:<8} | {:<12.2} | {:<10}",
            row.depth,
            row.elapsed.as_secs_f64() * 1000.0,
            mv
        );
    }
}
