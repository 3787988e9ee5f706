// src/bin/poker_dev_cli.rs
//
// Играет за ботов одну игру до последнего игрока (или до лимита шагов).
//
//   poker_dev_cli [seed] [players] [config.json]
//
// Логи: RUST_LOG (по умолчанию holdem_rules=info), HOLDEM_LOG_JSON=1 – JSON.

use std::env;
use std::fs;

use tracing::{error, info};

use holdem_rules::domain::{Chips, Game, GameConfig, Player};
use holdem_rules::engine::{ActionOutcome, EngineError, GameEvent, GameManager};
use holdem_rules::eval::{evaluate, HandTier};
use holdem_rules::infra::DeterministicRng;

const MAX_STEPS: u32 = 5_000;

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let seed: u64 = args.first().and_then(|s| s.parse().ok()).unwrap_or(42);
    let num_players: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    let config = match args.get(2) {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                error!(path = %path, error = %e, "config rejected");
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    println!("poker_dev_cli: seed={seed}, игроков={num_players}");

    if let Err(e) = run(config, seed, num_players) {
        error!(error = %e, "simulation aborted");
        std::process::exit(1);
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("holdem_rules=info"));

    if env::var("HOLDEM_LOG_JSON").is_ok() {
        fmt().json().with_env_filter(env_filter).with_target(true).init();
    } else {
        fmt().with_env_filter(env_filter).with_target(false).init();
    }
}

fn load_config(path: &str) -> Result<GameConfig, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    GameConfig::from_json_str(&raw).map_err(|e| e.to_string())
}

fn run(config: GameConfig, seed: u64, num_players: usize) -> Result<(), EngineError> {
    let mut rng = DeterministicRng::from_seed(seed);
    let mut manager = GameManager::new(config);

    let creator = manager.create_player("bot-1");
    let game = manager.create_game(creator.id)?;
    for n in 2..=num_players {
        let p = manager.create_player(format!("bot-{n}"));
        manager.join_game(p.id, game.id)?;
    }

    let outcome = manager.start_game(game.id, &mut rng)?;
    report(&outcome);

    for step in 1..=MAX_STEPS {
        let Some(game) = manager.game(game.id) else {
            return Err(EngineError::GameNotFound(game.id));
        };
        if game.finished {
            break;
        }
        let Some(actor) = game.turn_to_bet.and_then(|id| game.player(id)) else {
            break;
        };

        let decision = decide(game, actor);
        println!(
            "[step={step}] hand={} street={:?} {} ({}) -> {:?}",
            game.round,
            game.betting_info.map(|i| i.round),
            actor.name,
            actor.money,
            decision
        );

        let actor_id = actor.id;
        let outcome = match decision {
            Decision::Fold => manager.fold(actor_id, &mut rng)?,
            Decision::Call => manager.call(actor_id, &mut rng)?,
            Decision::Raise(by) => manager.raise(actor_id, by, &mut rng)?,
            Decision::AllIn(stack) => manager.bet(actor_id, stack, &mut rng)?,
        };
        report(&outcome);
    }

    if let Some(game) = manager.game(game.id) {
        println!("=== ИТОГ после {} раздач ===", game.round);
        for p in &game.players {
            println!("  {} | {}", p.name, p.money);
        }
        info!(game_id = game.id, finished = game.finished, "simulation done");
    }
    Ok(())
}

#[derive(Clone, Copy, Debug)]
enum Decision {
    Fold,
    Call,
    Raise(Chips),
    AllIn(Chips),
}

/// Простая политика: с парой и лучше – колл, с двумя парами и лучше – рейз
/// на большой блайнд; со старшей картой – чек, либо фолд, если надо платить.
/// Не хватает на колл – all-in.
fn decide(game: &Game, actor: &Player) -> Decision {
    let to_call = game.bet_amount.saturating_sub(actor.money_in_pot);
    let hand = [actor.cards.as_slice(), game.cards_on_table.as_slice()].concat();
    let tier = evaluate(&hand).map(|e| e.tier).unwrap_or(HandTier::HighCard);
    let big_blind = game.config.blinds.level_for_round(game.round).big_blind;

    if tier.index() <= HandTier::TwoPair.index() && actor.money > to_call + big_blind {
        return Decision::Raise(big_blind);
    }
    if to_call.is_zero() || tier != HandTier::HighCard || game.cards_on_table.is_empty() {
        if to_call > actor.money {
            return Decision::AllIn(actor.money);
        }
        return Decision::Call;
    }
    Decision::Fold
}

fn report(outcome: &ActionOutcome) {
    for event in &outcome.events {
        match event {
            GameEvent::HandStarted {
                round,
                small_blind,
                big_blind,
            } => println!("--- раздача {round}: блайнды {small_blind}/{big_blind} ---"),
            GameEvent::StreetDealt { round, cards } => {
                let cards: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
                println!("  {:?}: {}", round, cards.join(" "));
            }
            GameEvent::HandSettled { settlement } => {
                for (id, won) in &settlement.winnings {
                    println!("  игрок {id} выиграл {won}");
                }
                for id in &settlement.busted {
                    println!("  игрок {id} вылетел");
                }
            }
            GameEvent::GameFinished { winner } => println!("=== игра окончена, победитель: {winner:?} ==="),
        }
    }
}
