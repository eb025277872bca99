//! Demo: seed a leaderboard and print a few queries.
//!
//! Usage: RUST_LOG=debug cargo run

use std::process;

use leaderboard::{EntityId, Leaderboard, Options, RankedEntry, Score};

/// Fixed demonstration scores.
const SEED: [(EntityId, i32); 10] = [
    (15514665, 124),
    (81546541, 113),
    (1745431, 100),
    (76786448, 100),
    (254814111, 96),
    (53274324, 95),
    (6144320, 93),
    (8009471, 93),
    (11028481, 93),
    (38819, 92),
];

fn print_entries(title: &str, entries: &[RankedEntry]) {
    println!("{}", title);
    for entry in entries {
        println!("  #{:<3} {:>10}  {}", entry.rank, entry.id, entry.score);
    }
}

fn run() -> leaderboard::Result<()> {
    let board = Leaderboard::with_options(Options::new().with_level_seed(0x5eed))?;
    for (id, points) in SEED {
        board.update_score(id, Score::from(points))?;
    }

    print_entries("top 5:", &board.get_by_rank(1, 5));
    print_entries("around 8009471:", &board.get_by_id(8009471, 2, 2));

    let score = board.update_score(38819, "40.25".parse()?)?;
    println!("38819 now has {} (rank {:?})", score, board.rank_of(38819));
    print_entries("top 3:", &board.get_by_rank(1, 3));
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
