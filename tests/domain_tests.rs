//! Тесты доменного слоя: карты, колода, фишки, блайнды, конфиг.

use std::collections::HashSet;
use std::str::FromStr;

use holdem_rules::domain::{
    parse_cards, BlindStructure, Card, Chips, ConfigError, Deck, GameConfig, Player, Rank, Suit,
};

//
// ====================== CARDS ======================
//

#[test]
fn card_display_and_parse() {
    let ace = Card::from_str("Ah").unwrap();
    assert_eq!(ace, Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(ace.to_string(), "Ah");

    let ten = Card::from_str("td").unwrap();
    assert_eq!(ten.to_string(), "Td");

    assert!(Card::from_str("1x").is_err());
    assert!(Card::from_str("Ahh").is_err());
    assert!(Card::from_str("").is_err());
}

#[test]
fn card_long_name() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).long_name(), "Ace of Spades");
    assert_eq!(Card::new(Rank::Two, Suit::Clubs).long_name(), "Two of Clubs");
}

#[test]
fn parse_card_list() {
    let cards = parse_cards("Ah Kd 7c").unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));

    assert!(parse_cards("Ah Zz").is_err());
}

#[test]
fn rank_indices_run_two_to_ace() {
    assert_eq!(Rank::Two.index(), 0);
    assert_eq!(Rank::Five.index(), 3);
    assert_eq!(Rank::Ace.index(), 12);
    assert_eq!(Rank::from_index(12), Some(Rank::Ace));
    assert_eq!(Rank::from_index(13), None);
}

//
// ====================== DECK ======================
//

#[test]
fn standard_deck_has_52_unique_cards_in_suit_major_order() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), Deck::FULL_SIZE);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    assert_eq!(deck.cards[0], Card::new(Rank::Two, Suit::Clubs));
    assert_eq!(deck.cards[12], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards[13], Card::new(Rank::Two, Suit::Diamonds));
    assert_eq!(deck.cards[51], Card::new(Rank::Ace, Suit::Spades));
}

#[test]
fn draw_takes_from_top() {
    let mut deck = Deck::standard_52();
    let drawn = deck.draw_n(3).unwrap();

    assert_eq!(drawn, parse_cards("2c 3c 4c").unwrap());
    assert_eq!(deck.len(), 49);
    assert_eq!(deck.cards[0], Card::new(Rank::Five, Suit::Clubs));
}

#[test]
fn draw_more_than_left_leaves_deck_untouched() {
    let mut deck = Deck::standard_52();
    deck.draw_n(50).unwrap();

    assert_eq!(deck.draw_n(3), None);
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.draw_n(2).map(|c| c.len()), Some(2));
    assert!(deck.is_empty());
}

//
// ====================== CHIPS / PLAYER ======================
//

#[test]
fn chips_split_floors() {
    assert_eq!(Chips(601).split(2), Chips(300));
    assert_eq!(Chips(100).split(3), Chips(33));
    assert_eq!(Chips(100).split(0), Chips::ZERO);
}

#[test]
fn chips_arithmetic_saturates() {
    assert_eq!(Chips(5) - Chips(10), Chips::ZERO);
    assert_eq!(Chips(5) + Chips(10), Chips(15));
    let total: Chips = [Chips(1), Chips(2), Chips(3)].iter().sum();
    assert_eq!(total, Chips(6));
}

#[test]
fn all_in_player_cannot_act_and_never_owes() {
    let mut p = Player::new(1, "alice", Chips::ZERO);
    p.money_in_pot = Chips(50);

    assert!(p.is_all_in());
    assert!(!p.can_act());
    assert!(!p.owes(Chips(100)));

    let q = Player::new(2, "bob", Chips(100));
    assert!(q.owes(Chips(10)));
    assert!(!q.owes(Chips::ZERO));
}

//
// ====================== BLINDS / CONFIG ======================
//

#[test]
fn blind_levels_escalate_every_four_rounds_and_cap() {
    let blinds = BlindStructure::default();

    let first = blinds.level_for_round(0);
    assert_eq!((first.small_blind, first.big_blind), (Chips(1), Chips(2)));

    assert_eq!(blinds.level_for_round(3).small_blind, Chips(1));
    assert_eq!(blinds.level_for_round(4).small_blind, Chips(2));
    assert_eq!(blinds.level_for_round(4).big_blind, Chips(4));
    assert_eq!(blinds.level_for_round(39).small_blind, Chips(100));

    let capped = blinds.level_for_round(1_000);
    assert_eq!((capped.small_blind, capped.big_blind), (Chips(100), Chips(200)));
    assert_eq!(capped.level, 9);
}

#[test]
fn blind_structure_validation() {
    assert!(BlindStructure::default().validate().is_ok());
    assert!(BlindStructure::new(vec![], 4).validate().is_err());
    assert!(BlindStructure::new(vec![Chips(1)], 0).validate().is_err());
    assert!(BlindStructure::new(vec![Chips(2), Chips(1)], 4).validate().is_err());
    assert!(BlindStructure::new(vec![Chips(0), Chips(1)], 4).validate().is_err());
}

#[test]
fn default_config_matches_house_rules() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.starting_money, Chips(500));
    assert_eq!(cfg.blinds.rounds_per_increase, 4);
    assert_eq!(cfg.blinds.small_blinds.len(), 10);
    assert_eq!(cfg.max_players, 10);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_from_json_fills_missing_fields() {
    let cfg = GameConfig::from_json_str(r#"{ "starting_money": 1000 }"#).unwrap();
    assert_eq!(cfg.starting_money, Chips(1000));
    assert_eq!(cfg.blinds, BlindStructure::default());

    let cfg = GameConfig::from_json_str(
        r#"{ "blinds": { "small_blinds": [5, 10], "rounds_per_increase": 2 }, "max_players": 6 }"#,
    )
    .unwrap();
    assert_eq!(cfg.blinds.level_for_round(2).big_blind, Chips(20));
    assert_eq!(cfg.max_players, 6);
}

#[test]
fn config_rejects_bad_input() {
    assert!(matches!(
        GameConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "max_players": 1 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "max_players": 24 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        GameConfig::from_json_str(r#"{ "starting_money": 0 }"#),
        Err(ConfigError::Invalid(_))
    ));
}
