use anyhow::Context;
use clap::{Parser, Subcommand};
use flotilla::{
    coord_to_string, init_logging, parse_coord, parse_orientation, render_board, AttackOutcome,
    Game, Mode, Phase,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};
use tokio::time::Duration;

/// Cosmetic pause before the computer fires, so a human can follow the
/// turn sequence.
const AI_MOVE_DELAY: Duration = Duration::from_millis(700);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Two players sharing one terminal.
    Duel {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => run_match(Mode::VsComputer, seed).await,
        Commands::Duel { seed } => run_match(Mode::TwoPlayer, seed).await,
        Commands::Watch { seed } => run_match(Mode::Spectate, seed).await,
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

async fn run_match(mode: Mode, seed: Option<u64>) -> anyhow::Result<()> {
    let mut game = Game::with_rng(mode, make_rng(seed))?;
    loop {
        match game.phase() {
            Phase::Placement => placement_turn(&mut game)?,
            Phase::Combat => combat_turn(&mut game).await?,
            Phase::Finished => {
                show_result(&game);
                if !prompt_yes_no("Play again? (y/n): ")? {
                    break;
                }
                game.restart()?;
            }
        }
    }
    Ok(())
}

fn placement_turn(game: &mut Game) -> anyhow::Result<()> {
    let active = game.active_index();
    println!("\n{}: place your fleet", game.active_player());
    println!("{}", render_board(&game.board_view(active), true));

    let options = game.placement_options().context("placement options")?;
    for (i, spec) in options.remaining.iter().enumerate() {
        let marker = if i == options.selected { '>' } else { ' ' };
        println!("{} {}: {} (length {})", marker, i, spec.name(), spec.length());
    }
    let orientation = options.orientation;
    let line = prompt(&format!(
        "Coordinate + orientation (e.g. B4 V), 's <n>' to select, 'r' for random [{:?}]: ",
        orientation
    ))?;
    let line = line.trim();

    if line.eq_ignore_ascii_case("r") {
        game.place_randomly()?;
        return Ok(());
    }
    if let Some(rest) = line.strip_prefix('s').filter(|r| r.starts_with(' ')) {
        match rest.trim().parse::<usize>() {
            Ok(index) => {
                if let Err(e) = game.select_ship(index) {
                    println!("{}", e);
                }
            }
            Err(_) => println!("Invalid selection"),
        }
        return Ok(());
    }

    let mut parts = line.split_whitespace();
    let coord = parts.next().and_then(parse_coord);
    let Some((row, col)) = coord else {
        println!("Invalid coordinate");
        return Ok(());
    };
    if let Some(o) = parts.next().and_then(parse_orientation) {
        game.set_orientation(o);
    }
    if let Err(e) = game.place_at(row, col) {
        println!("{}", e);
    }
    Ok(())
}

async fn combat_turn(game: &mut Game) -> anyhow::Result<()> {
    if game.active_is_autonomous() {
        let epoch = game.epoch();
        tokio::time::sleep(AI_MOVE_DELAY).await;
        if let Some(report) = game.autonomous_turn(epoch) {
            describe_shot("Computer", report.outcome, report.row, report.col);
        }
        return Ok(());
    }

    let active = game.active_index();
    let enemy = 1 - active;
    println!("\n{}: your turn", game.active_player());
    println!("Opponent waters:");
    println!("{}", render_board(&game.board_view(enemy), false));
    println!("Your board:");
    println!("{}", render_board(&game.board_view(active), true));

    let line = prompt("Fire at (e.g. E5): ")?;
    let Some((row, col)) = parse_coord(line.trim()) else {
        println!("Invalid coordinate");
        return Ok(());
    };
    let report = game.attack(Some((row, col)))?;
    if report.outcome == AttackOutcome::Rejected {
        println!("Already fired at {}, pick another cell", coord_to_string(row, col));
    } else {
        describe_shot("You", report.outcome, report.row, report.col);
    }
    Ok(())
}

fn describe_shot(who: &str, outcome: AttackOutcome, row: usize, col: usize) {
    let coord = coord_to_string(row, col);
    match outcome {
        AttackOutcome::Hit => println!("{} fired at {}: hit!", who, coord),
        AttackOutcome::Sunk(name) => println!("{} fired at {}: sank the {}!", who, coord, name),
        AttackOutcome::Miss => println!("{} fired at {}: miss", who, coord),
        AttackOutcome::Rejected => println!("{} had no legal move", who),
    }
}

fn show_result(game: &Game) {
    println!("\n==== GAME OVER ====");
    for index in 0..2 {
        println!("{}", render_board(&game.board_view(index), true));
    }
    if let Some(winner) = game.winner_name() {
        println!("{} wins!", winner);
    }
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn prompt_yes_no(text: &str) -> anyhow::Result<bool> {
    let line = prompt(text)?;
    Ok(matches!(line.trim().chars().next(), Some('y') | Some('Y')))
}
