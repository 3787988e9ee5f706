//! Ставки и очередность хода внутри улицы.
//!
//! Стол из трёх игроков, блайнды 1/2. Колоду не перемешиваем –
//! для торговли карты не важны.

use holdem_rules::domain::{BettingInfo, BettingRound, Chips, Game, GameConfig, Player, Role};
use holdem_rules::engine::{
    advance_betting_round, betting, blinds_round, initialise_roles, next_player_to_bet,
    place_bet, EngineError, StreetProgress,
};

/// Игра с игроками id = 1..=n, роли раздаются как на старте.
fn seated_game(stacks: &[u64]) -> Game {
    let mut game = Game::new(1, GameConfig::default());
    let players: Vec<Player> = stacks
        .iter()
        .enumerate()
        .map(|(i, &money)| Player::new(i as u64 + 1, format!("p{}", i + 1), Chips(money)))
        .collect();
    game.players = initialise_roles(&players).unwrap();
    game.started = true;
    game
}

/// Поставить и передать ход.
fn act(game: &Game, id: u64, amount: u64) -> (Game, StreetProgress) {
    let after_bet = place_bet(game, id, Chips(amount)).unwrap();
    advance_betting_round(&after_bet).unwrap()
}

#[test]
fn blinds_are_posted_and_seat_two_acts_first() {
    let game = blinds_round(&seated_game(&[500, 500, 500])).unwrap();

    assert_eq!(game.players[0].role, Role::SmallBlind);
    assert_eq!(game.players[0].money_in_pot, Chips(1));
    assert_eq!(game.players[1].money_in_pot, Chips(2));
    assert_eq!(game.bet_amount, Chips(2));
    assert_eq!(game.turn_to_bet, Some(3));
    assert_eq!(
        game.betting_info,
        Some(BettingInfo::new(BettingRound::Blinds))
    );
    assert!(game.players.iter().all(|p| p.cards.len() == 2));
}

#[test]
fn heads_up_small_blind_acts_first() {
    let game = blinds_round(&seated_game(&[500, 500])).unwrap();
    assert_eq!(game.turn_to_bet, Some(1));
}

#[test]
fn raise_sends_action_back_around_in_second_pass() {
    let game = blinds_round(&seated_game(&[500, 500, 500])).unwrap();

    // p3 поднимает до 10 – ход возвращается к SB, начался второй круг.
    let (game, progress) = act(&game, 3, 10);
    assert_eq!(game.bet_amount, Chips(10));
    assert_eq!(progress, StreetProgress::Continue { next: 1 });
    assert!(game.betting_info.unwrap().is_second_pass);

    let (game, progress) = act(&game, 1, 9);
    assert_eq!(progress, StreetProgress::Continue { next: 2 });

    let (game, progress) = act(&game, 2, 8);
    assert_eq!(
        progress,
        StreetProgress::StreetComplete {
            completed: BettingRound::Blinds
        }
    );

    let info = game.betting_info.unwrap();
    assert_eq!(info.round, BettingRound::Flop);
    assert!(!info.is_second_pass);
    assert_eq!(game.turn_to_bet, Some(1));
    assert_eq!(game.pot(), Chips(30));
}

#[test]
fn everyone_calling_closes_the_street() {
    let game = blinds_round(&seated_game(&[500, 500, 500])).unwrap();

    let (game, progress) = act(&game, 3, 2);
    assert_eq!(progress, StreetProgress::Continue { next: 1 });

    let (game, progress) = act(&game, 1, 1);
    assert_eq!(
        progress,
        StreetProgress::StreetComplete {
            completed: BettingRound::Blinds
        }
    );
    assert_eq!(game.bet_amount, Chips(2));
}

#[test]
fn checks_around_a_street_close_it_without_second_pass() {
    let mut game = seated_game(&[500, 500, 500]);
    game.betting_info = Some(BettingInfo::new(BettingRound::Flop));
    game.turn_to_bet = Some(1);

    let (game, p1) = act(&game, 1, 0);
    let (game, p2) = act(&game, 2, 0);
    let (game, p3) = act(&game, 3, 0);

    assert_eq!(p1, StreetProgress::Continue { next: 2 });
    assert_eq!(p2, StreetProgress::Continue { next: 3 });
    assert_eq!(
        p3,
        StreetProgress::StreetComplete {
            completed: BettingRound::Flop
        }
    );
    assert_eq!(game.betting_info.unwrap().round, BettingRound::Turn);
}

#[test]
fn river_completion_ends_betting() {
    let mut game = seated_game(&[500, 500]);
    game.betting_info = Some(BettingInfo::new(BettingRound::River));
    game.turn_to_bet = Some(2);

    let (game, progress) = act(&game, 2, 0);
    assert_eq!(
        progress,
        StreetProgress::StreetComplete {
            completed: BettingRound::River
        }
    );
    assert_eq!(game.betting_info, None);
    assert_eq!(game.turn_to_bet, None);
}

#[test]
fn insufficient_funds_is_rejected() {
    let game = blinds_round(&seated_game(&[500, 500, 500])).unwrap();
    let before = game.clone();

    let err = place_bet(&game, 3, Chips(1_000)).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientFunds {
            player_id: 3,
            requested: Chips(1_000),
            available: Chips(500),
        }
    );
    assert_eq!(game, before);
}

#[test]
fn unknown_player_cannot_bet() {
    let game = seated_game(&[500, 500]);
    assert_eq!(
        place_bet(&game, 42, Chips(1)).unwrap_err(),
        EngineError::PlayerNotFound(42)
    );
}

#[test]
fn advancing_without_betting_is_an_error() {
    let game = seated_game(&[500, 500]);
    assert_eq!(
        advance_betting_round(&game).unwrap_err(),
        EngineError::InvalidBettingState
    );
}

#[test]
fn folded_player_never_gets_the_turn() {
    let game = blinds_round(&seated_game(&[500, 500, 500])).unwrap();

    let (game, _) = act(&game, 3, 10);
    assert_eq!(game.turn_to_bet, Some(1));

    let folded = betting::fold(&game, 1).unwrap();
    assert_eq!(next_player_to_bet(&folded), Some(2));

    let (game, progress) = advance_betting_round(&folded).unwrap();
    assert_eq!(progress, StreetProgress::Continue { next: 2 });

    let (game, progress) = act(&game, 2, 8);
    assert_eq!(
        progress,
        StreetProgress::StreetComplete {
            completed: BettingRound::Blinds
        }
    );
    // На флопе первым ходит первый не сфолдивший.
    assert_eq!(game.turn_to_bet, Some(2));
}

#[test]
fn all_in_player_is_skipped() {
    let game = blinds_round(&seated_game(&[500, 500, 5])).unwrap();

    // p3 идёт all-in на 5.
    let (game, _) = act(&game, 3, 5);
    assert!(game.players[2].is_all_in());
    assert_eq!(game.turn_to_bet, Some(1));

    let (game, progress) = act(&game, 1, 4);
    assert_eq!(progress, StreetProgress::Continue { next: 2 });

    let (game, progress) = act(&game, 2, 3);
    assert!(matches!(progress, StreetProgress::StreetComplete { .. }));
    assert_eq!(game.turn_to_bet, Some(1));
}

#[test]
fn call_and_raise_helpers() {
    let game = blinds_round(&seated_game(&[500, 500, 500])).unwrap();

    let raised = betting::raise(&game, 3, Chips(8)).unwrap();
    assert_eq!(raised.bet_amount, Chips(10));
    assert_eq!(raised.players[2].money, Chips(490));

    let called = betting::call(&raised, 1).unwrap();
    assert_eq!(called.players[0].money_in_pot, Chips(10));
    assert_eq!(called.players[0].money, Chips(490));
    assert_eq!(called.total_chips(), Chips(1_500));
}
