use flotilla::{AttackOutcome, Game, Mode, Phase};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::with_rng(Mode::Spectate, SmallRng::seed_from_u64(seed))?;
    let mut shots = [0usize; 2];
    let mut turns = 0usize;

    while game.phase() == Phase::Combat {
        turns += 1;
        if turns > 400 {
            anyhow::bail!("game did not terminate");
        }
        let attacker = game.active_index();
        let epoch = game.epoch();
        if let Some(report) = game.autonomous_turn(epoch) {
            if report.outcome != AttackOutcome::Rejected {
                shots[attacker] += 1;
            }
        }
    }

    let result = json!({
        "seed": seed,
        "winner": game.winner_name(),
        "shots": { "player1": shots[0], "player2": shots[1] },
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
