use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use games::stakes::{Dealer, GameEvent, HumanPlayer, LogSink, Player, RandomPlayer};
use games::Validate;

mod games;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game from the console against random players
    Play {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 4)]
        opponents: usize,
    },
    /// Run many games between random players
    Simulate {
        #[arg(short)]
        log_file: PathBuf,
        #[arg(short, default_value_t = 100)]
        n_games: usize,
        #[arg(short, default_value_t = 5)]
        players: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

// One line in the play log
#[derive(Debug, serde::Serialize)]
struct PlayLogEntry<'a> {
    game_id: usize,
    #[serde(flatten)]
    event: &'a GameEvent,
}

struct GameOutcome {
    winner: usize,
    discarded: usize,
    events: Vec<GameEvent>,
}

fn random_players(n_players: usize) -> Vec<Box<dyn Player>> {
    (0..n_players)
        .map(|_| Box::new(RandomPlayer) as Box<dyn Player>)
        .collect()
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn write_play_log(outcomes: &[GameOutcome], file: &PathBuf) -> Result<()> {
    let file = File::create(file)?;
    let mut writer = BufWriter::new(file);
    for (game_id, outcome) in outcomes.iter().enumerate() {
        for event in &outcome.events {
            jsonl::write(&mut writer, &PlayLogEntry { game_id, event })
                .map_err(|err| anyhow!("Failed to write play log: {:?}", err))?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn report(outcomes: &[GameOutcome], n_players: usize) {
    let mut win_counts: HashMap<usize, usize> = HashMap::from_iter((1..=n_players).map(|i| (i, 0)));
    let total_games = outcomes.len();

    for outcome in outcomes {
        *win_counts.entry(outcome.winner).or_insert(0) += 1;
    }

    for i in 1..=n_players {
        println!("Win Count for player#{}: {}/{}, ratio: {}", i, win_counts[&i], total_games, (win_counts[&i] as f64 / total_games as f64));
    }

    let discarded: usize = outcomes.iter().map(|o| o.discarded).sum();
    println!("Discarded point cards: {} over {} games", discarded, total_games);
}

fn play_simulated(game_id: usize, n_players: usize, seed: u64) -> Result<GameOutcome> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dealer = Dealer::new(random_players(n_players), &mut rng, Vec::new());
    dealer.validate()?;

    let winner = dealer.play_game()?.number();
    for seat in dealer.standings() {
        log::debug!("Final score {}: {}", seat, seat.score());
    }
    log::info!("Game {}: winner is player#{} after {} rounds", game_id, winner, dealer.rounds_played());

    let discarded = dealer.discarded().len();
    Ok(GameOutcome {
        winner,
        discarded,
        events: dealer.into_sink(),
    })
}

fn simulate(log_file: &PathBuf, n_games: usize, n_players: usize, seed: Option<u64>) -> Result<()> {
    if n_games == 0 {
        return Err(anyhow!("Nothing to simulate, asked for 0 games"));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    log::info!("Running {} simulations for {} players, seed {}", n_games, n_players, base_seed);

    let outcomes: Vec<GameOutcome> = (0..n_games)
        .into_par_iter()
        .map(|game_id| play_simulated(game_id, n_players, base_seed.wrapping_add(game_id as u64)))
        .collect::<Result<Vec<_>>>()?;

    report(&outcomes, n_players);
    write_play_log(&outcomes, log_file)
}

fn play(seed: Option<u64>, n_opponents: usize) -> Result<()> {
    let mut rng = make_rng(seed);

    let mut players: Vec<Box<dyn Player>> = vec![Box::new(HumanPlayer::stdin())];
    players.extend(random_players(n_opponents));

    let mut dealer = Dealer::new(players, &mut rng, LogSink);
    dealer.validate()?;

    dealer.play_game()?;

    println!("Final standings:");
    for seat in dealer.standings() {
        println!("  {} ({}): {}", seat, seat.kind(), seat.description());
    }
    if !dealer.discarded().is_empty() {
        println!("Discarded after ties: {:?}", dealer.discarded());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.commands {
        Commands::Play { seed, opponents } => play(seed, opponents),
        Commands::Simulate { log_file, n_games, players, seed } => simulate(&log_file, n_games, players, seed),
    }
}
