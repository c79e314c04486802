//! Game integration tests.

use std::collections::VecDeque;

use crazy8s::{
    Card, ComputerPolicy, DECK_SIZE, DealError, DiscardPile, DrawOutcome, DrawPile, Game,
    GameEvent, GameOptions, GameOutcome, GameState, HUMAN_NAME, Hand, Move, MoveError,
    PlayerKind, Policy, RunError, Suit, TurnView,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a two-seat game with fixed hands and piles. `draw` and `discard`
/// list cards bottom first.
fn table(
    options: GameOptions,
    human: Vec<Card>,
    computer: Vec<Card>,
    draw: Vec<Card>,
    discard: Vec<Card>,
) -> Game {
    let mut game = Game::new(options.with_opponents(1), 1).unwrap();
    game.hands = vec![
        Hand::with_cards(HUMAN_NAME, PlayerKind::Human, human),
        Hand::with_cards("Computer 1", PlayerKind::Computer, computer),
    ];
    game.draw_pile = DrawPile::from_cards(draw);
    game.discard_pile = DiscardPile::from_cards(discard);
    game.drain_events();
    game
}

/// Plays back a fixed list of choices.
struct Scripted {
    moves: VecDeque<Move>,
    suits: VecDeque<u8>,
}

impl Scripted {
    fn new(moves: &[Move], suits: &[u8]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            suits: suits.iter().copied().collect(),
        }
    }
}

impl Policy for Scripted {
    fn choose_move(&mut self, _view: &TurnView<'_>) -> Move {
        self.moves.pop_front().unwrap_or(Move::Draw)
    }

    fn choose_suit(&mut self, _view: &TurnView<'_>) -> u8 {
        self.suits.pop_front().unwrap_or(0)
    }
}

fn computers(game: &Game) -> Vec<Box<dyn Policy>> {
    (0..game.hands.len())
        .map(|seat| Box::new(ComputerPolicy::new(seat as u64 + 100)) as Box<dyn Policy>)
        .collect()
}

#[test]
fn new_game_deals_and_waits_for_the_human() {
    let mut game = Game::new(GameOptions::default(), 42).unwrap();

    assert_eq!(game.hands.len(), 4);
    assert!(game.hands.iter().all(|hand| hand.count() == 5));
    assert_eq!(game.discard_pile.len(), 1);
    assert_eq!(game.draw_pile.len(), DECK_SIZE - 4 * 5 - 1);
    assert_eq!(game.total_cards(), DECK_SIZE);

    assert_eq!(game.state(), GameState::AwaitingMove { player: 0 });
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.round(), 1);
    assert!(game.hands[0].is_human());
    assert_eq!(game.hands[0].name(), HUMAN_NAME);
    assert_eq!(game.hands[2].name(), "Computer 2");
    assert_eq!(game.hands[2].kind(), PlayerKind::Computer);

    let active = game.active_card().unwrap();
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::TurnStarted {
            player: 0,
            round: 1,
            active,
            hand_size: 5,
        }]
    );
}

#[test]
fn same_seed_deals_the_same_game() {
    let a = Game::new(GameOptions::default(), 7).unwrap();
    let b = Game::new(GameOptions::default(), 7).unwrap();
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.draw_pile, b.draw_pile);
    assert_eq!(a.active_card(), b.active_card());
}

#[test]
fn computers_are_dealt_before_the_human() {
    let game = Game::new(GameOptions::default().with_opponents(1), 7).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = DrawPile::new_full_deck();
    deck.shuffle(&mut rng);
    let mut hands = vec![
        Hand::new("Computer 1", PlayerKind::Computer),
        Hand::new(HUMAN_NAME, PlayerKind::Human),
    ];
    let mut discard = DiscardPile::new();
    deck.deal(&mut hands, &mut discard, 5).unwrap();

    assert_eq!(game.hands[0].cards(), hands[1].cards());
    assert_eq!(game.hands[1].cards(), hands[0].cards());
    assert_eq!(game.active_card(), discard.top().ok());
    assert_eq!(game.hands[0].name(), HUMAN_NAME);
    assert_eq!(game.state(), GameState::AwaitingMove { player: 0 });
}

#[test]
fn new_game_errors() {
    assert_eq!(
        Game::new(GameOptions::default().with_opponents(0), 1).unwrap_err(),
        DealError::NoOpponents
    );
    assert_eq!(
        Game::new(GameOptions::default().with_hand_size(0), 1).unwrap_err(),
        DealError::EmptyHand
    );
    assert_eq!(
        Game::new(GameOptions::default().with_hand_size(13), 1).unwrap_err(),
        DealError::NotEnoughCards
    );
    assert_eq!(
        Game::with_hands(GameOptions::default(), 1, Vec::new()).unwrap_err(),
        DealError::NoPlayers
    );
}

#[test]
fn matching_card_is_played_and_turn_advances() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Hearts, 5), card(Suit::Clubs, 9)],
        vec![card(Suit::Spades, 2)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(game.play_card(0, 0, None), Ok(card(Suit::Hearts, 5)));
    assert_eq!(game.active_card(), Some(card(Suit::Hearts, 5)));
    assert_eq!(game.hands[0].cards(), &[card(Suit::Clubs, 9)]);
    assert_eq!(game.state(), GameState::AwaitingMove { player: 1 });

    assert_eq!(
        game.drain_events(),
        vec![
            GameEvent::CardPlayed {
                player: 0,
                card: card(Suit::Hearts, 5),
            },
            GameEvent::TurnStarted {
                player: 1,
                round: 1,
                active: card(Suit::Hearts, 5),
                hand_size: 1,
            },
        ]
    );
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 9), card(Suit::Hearts, 8)],
        vec![card(Suit::Spades, 2)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(game.play_card(0, 0, None), Err(MoveError::IllegalCard));
    assert_eq!(game.play_card(0, 2, None), Err(MoveError::IndexOutOfRange));
    assert_eq!(game.play_card(0, 1, None), Err(MoveError::MissingSuit));
    assert_eq!(game.play_card(1, 0, None), Err(MoveError::NotYourTurn));
    assert_eq!(game.play_drawn(0, None), Err(MoveError::InvalidState));

    assert_eq!(game.hands[0].count(), 2);
    assert_eq!(game.discard_pile.len(), 1);
    assert_eq!(game.state(), GameState::AwaitingMove { player: 0 });

    let rejections: Vec<MoveError> = game
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::InvalidMove { player: 0, error } => Some(error),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejections,
        vec![
            MoveError::IllegalCard,
            MoveError::IndexOutOfRange,
            MoveError::MissingSuit,
        ]
    );
}

#[test]
fn eight_is_always_playable_and_names_the_suit() {
    for active in DrawPile::new_full_deck().cards().iter().copied() {
        let mut game = table(
            GameOptions::default(),
            vec![card(Suit::Clubs, 8), card(Suit::Diamonds, 2)],
            vec![card(Suit::Spades, 2)],
            Vec::new(),
            vec![active],
        );

        let played = game.play_card(0, 0, Some(Suit::Spades)).unwrap();

        assert_eq!(played, card(Suit::Spades, 8));
        assert_eq!(game.active_card(), Some(card(Suit::Spades, 8)));
        assert_eq!(game.hands[0].cards(), &[card(Suit::Diamonds, 2)]);
    }
}

#[test]
fn suit_is_ignored_for_ordinary_cards() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Hearts, 5), card(Suit::Clubs, 9)],
        vec![card(Suit::Spades, 2)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(
        game.play_card(0, 0, Some(Suit::Clubs)),
        Ok(card(Suit::Hearts, 5))
    );
}

#[test]
fn round_counter_increments_on_wrap() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Hearts, 5), card(Suit::Clubs, 2)],
        vec![card(Suit::Hearts, 6), card(Suit::Diamonds, 3)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    game.play_card(0, 0, None).unwrap();
    assert_eq!(game.round(), 1);
    game.play_card(1, 0, None).unwrap();
    assert_eq!(game.state(), GameState::AwaitingMove { player: 0 });
    assert_eq!(game.round(), 2);
}

#[test]
fn empty_hand_wins_immediately() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Hearts, 5)],
        vec![
            card(Suit::Spades, 2),
            card(Suit::Spades, 3),
            card(Suit::Spades, 4),
        ],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    game.play_card(0, 0, None).unwrap();

    assert_eq!(
        game.state(),
        GameState::GameOver(GameOutcome::Winner { player: 0 })
    );
    assert_eq!(game.current_player(), None);
    assert_eq!(game.drain_events().last(), Some(&GameEvent::Won { player: 0 }));
    assert_eq!(game.play_card(1, 0, None), Err(MoveError::InvalidState));
    assert_eq!(game.draw(1), Err(MoveError::InvalidState));
}

#[test]
fn draw_then_play_the_drawn_card() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Spades, 2)],
        vec![
            card(Suit::Clubs, 4),
            card(Suit::Hearts, 3),
            card(Suit::Spades, 5),
        ],
        vec![card(Suit::Diamonds, 9), card(Suit::Hearts, 13)],
    );

    assert_eq!(
        game.draw(0),
        Ok(DrawOutcome::Playable(card(Suit::Hearts, 3)))
    );
    assert_eq!(game.state(), GameState::AwaitingDrawnPlay { player: 0 });
    assert_eq!(game.hands[0].count(), 3);
    assert_eq!(game.play_card(0, 0, None), Err(MoveError::InvalidState));
    assert_eq!(game.draw(0), Err(MoveError::InvalidState));

    assert_eq!(game.play_drawn(0, None), Ok(card(Suit::Hearts, 3)));
    assert_eq!(
        game.hands[0].cards(),
        &[card(Suit::Clubs, 2), card(Suit::Spades, 5)]
    );
    assert_eq!(game.state(), GameState::AwaitingMove { player: 1 });

    let drawn: Vec<Card> = game
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::CardDrawn { player: 0, card } => Some(card),
            _ => None,
        })
        .collect();
    assert_eq!(drawn, vec![card(Suit::Spades, 5), card(Suit::Hearts, 3)]);
}

#[test]
fn drawn_eight_needs_a_suit() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Spades, 2)],
        vec![card(Suit::Clubs, 4), card(Suit::Diamonds, 8)],
        vec![card(Suit::Diamonds, 9), card(Suit::Hearts, 13)],
    );

    assert_eq!(
        game.draw(0),
        Ok(DrawOutcome::Playable(card(Suit::Diamonds, 8)))
    );
    assert_eq!(game.play_drawn(0, None), Err(MoveError::MissingSuit));
    assert_eq!(game.hands[0].count(), 2);

    assert_eq!(
        game.play_drawn(0, Some(Suit::Clubs)),
        Ok(card(Suit::Clubs, 8))
    );
    assert_eq!(game.hands[0].cards(), &[card(Suit::Clubs, 2)]);
}

#[test]
fn exhausted_draw_pile_is_refilled_from_discard() {
    // One card left, nothing in hand matches the King of Hearts.
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2), card(Suit::Diamonds, 3)],
        vec![card(Suit::Spades, 2)],
        vec![card(Suit::Hearts, 12)],
        vec![
            card(Suit::Spades, 5),
            card(Suit::Hearts, 7),
            card(Suit::Hearts, 13),
        ],
    );

    let DrawOutcome::Playable(drawn) = game.draw(0).unwrap() else {
        panic!("expected a playable card");
    };

    assert_eq!(drawn.suit, Suit::Hearts);
    assert_eq!(game.discard_pile.len(), 1);
    assert_eq!(game.active_card(), Some(card(Suit::Hearts, 13)));
    assert_eq!(
        game.draw_pile.len() + game.hands[0].count(),
        3 + 2,
        "no card lost while refilling"
    );

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::DeckRefilled { cards: 2 }));
    // The reserve card is only drawn after the refill.
    assert!(matches!(
        events.first(),
        Some(GameEvent::DeckRefilled { .. })
    ));
}

#[test]
fn without_reserve_the_last_card_is_drawn_directly() {
    let mut game = table(
        GameOptions::default().with_reserve_card(false),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Spades, 2)],
        vec![card(Suit::Hearts, 12)],
        vec![card(Suit::Spades, 5), card(Suit::Hearts, 13)],
    );

    assert_eq!(
        game.draw(0),
        Ok(DrawOutcome::Playable(card(Suit::Hearts, 12)))
    );
    assert!(
        !game
            .drain_events()
            .iter()
            .any(|event| matches!(event, GameEvent::DeckRefilled { .. }))
    );
    assert_eq!(game.discard_pile.len(), 2);
}

#[test]
fn nothing_to_draw_means_pass_and_full_round_of_passes_is_stalemate() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Diamonds, 3)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(game.draw(0), Ok(DrawOutcome::Passed));
    assert_eq!(game.state(), GameState::AwaitingMove { player: 1 });
    assert_eq!(game.draw(1), Ok(DrawOutcome::Passed));
    assert_eq!(game.state(), GameState::GameOver(GameOutcome::Stalemate));

    let events = game.drain_events();
    assert!(events.contains(&GameEvent::Passed { player: 0 }));
    assert!(events.contains(&GameEvent::Passed { player: 1 }));
    assert_eq!(events.last(), Some(&GameEvent::Stalemate));
}

#[test]
fn playing_a_card_resets_the_pass_count() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Diamonds, 8), card(Suit::Diamonds, 3)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(game.draw(0), Ok(DrawOutcome::Passed));
    assert_eq!(
        game.play_card(1, 0, Some(Suit::Spades)),
        Ok(card(Suit::Spades, 8))
    );

    // The recycled king neither matches nor is wild on the eight of spades.
    assert_eq!(game.draw(0), Ok(DrawOutcome::Passed));
    assert_eq!(
        game.hands[0].cards(),
        &[card(Suit::Clubs, 2), card(Suit::Hearts, 13)]
    );
    assert_eq!(game.state(), GameState::AwaitingMove { player: 1 });
}

#[test]
fn passing_with_a_playable_card_is_not_a_stalemate() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Hearts, 5)],
        vec![card(Suit::Diamonds, 3)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(game.draw(0), Ok(DrawOutcome::Passed));
    assert_eq!(game.draw(1), Ok(DrawOutcome::Passed));
    assert_eq!(game.state(), GameState::AwaitingMove { player: 0 });

    assert_eq!(game.play_card(0, 0, None), Ok(card(Suit::Hearts, 5)));
    assert_eq!(
        game.state(),
        GameState::GameOver(GameOutcome::Winner { player: 0 })
    );
}

#[test]
fn passing_with_a_playable_card_resets_the_pass_count() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Hearts, 3)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );

    assert_eq!(game.draw(0), Ok(DrawOutcome::Passed));
    assert_eq!(game.draw(1), Ok(DrawOutcome::Passed));
    assert_eq!(game.draw(0), Ok(DrawOutcome::Passed));
    assert_eq!(game.state(), GameState::AwaitingMove { player: 1 });
    assert!(!game.drain_events().contains(&GameEvent::Stalemate));
}

#[test]
fn computer_plays_leftmost_eight_before_a_match() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 8), card(Suit::Hearts, 3)],
        vec![card(Suit::Spades, 2)],
        Vec::new(),
        vec![card(Suit::Spades, 3)],
    );

    assert_eq!(
        ComputerPolicy::pick(&game.hands[0], card(Suit::Spades, 3)),
        Some(0)
    );
    // One pass left to right: a match ahead of an eight goes first.
    let match_first = Hand::with_cards(
        "Computer 1",
        PlayerKind::Computer,
        vec![card(Suit::Hearts, 3), card(Suit::Clubs, 8)],
    );
    assert_eq!(
        ComputerPolicy::pick(&match_first, card(Suit::Spades, 3)),
        Some(0)
    );

    let mut events: Vec<GameEvent> = Vec::new();
    game.step(0, &mut ComputerPolicy::new(11), &mut events)
        .unwrap();

    let top = game.active_card().unwrap();
    assert_eq!(top.rank, 8);
    assert_eq!(game.hands[0].cards(), &[card(Suit::Hearts, 3)]);
    assert!(events.contains(&GameEvent::CardPlayed {
        player: 0,
        card: top
    }));
}

#[test]
fn computer_draws_when_nothing_matches() {
    let hand = Hand::with_cards(
        "Computer 1",
        PlayerKind::Computer,
        vec![card(Suit::Clubs, 2), card(Suit::Diamonds, 3)],
    );
    let view = TurnView {
        player: 1,
        hand: &hand,
        active: card(Suit::Hearts, 13),
        round: 1,
    };

    let mut policy = ComputerPolicy::new(1);
    assert_eq!(policy.choose_move(&view), Move::Draw);
    assert!(policy.choose_suit(&view) < 4);
}

#[test]
fn step_asks_again_after_rejections() {
    let mut game = table(
        GameOptions::default(),
        vec![
            card(Suit::Clubs, 8),
            card(Suit::Clubs, 9),
            card(Suit::Diamonds, 5),
        ],
        vec![card(Suit::Spades, 2)],
        Vec::new(),
        vec![card(Suit::Hearts, 13)],
    );
    let mut policy = Scripted::new(&[Move::Play(5), Move::Play(1), Move::Play(0)], &[9, 2]);
    let mut events: Vec<GameEvent> = Vec::new();

    game.step(0, &mut policy, &mut events).unwrap();
    game.step(0, &mut policy, &mut events).unwrap();
    assert_eq!(game.state(), GameState::AwaitingMove { player: 0 });
    game.step(0, &mut policy, &mut events).unwrap();

    assert_eq!(game.active_card(), Some(card(Suit::Hearts, 8)));
    assert_eq!(game.state(), GameState::AwaitingMove { player: 1 });

    let rejections: Vec<MoveError> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::InvalidMove { error, .. } => Some(*error),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejections,
        vec![
            MoveError::IndexOutOfRange,
            MoveError::IllegalCard,
            MoveError::InvalidSuit,
        ]
    );
}

#[test]
fn step_plays_a_drawn_eight_with_the_chosen_suit() {
    let mut game = table(
        GameOptions::default(),
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Spades, 2)],
        vec![card(Suit::Clubs, 4), card(Suit::Diamonds, 8)],
        vec![card(Suit::Diamonds, 9), card(Suit::Hearts, 13)],
    );
    let mut policy = Scripted::new(&[Move::Draw], &[3]);
    let mut events: Vec<GameEvent> = Vec::new();

    game.step(0, &mut policy, &mut events).unwrap();
    assert_eq!(game.state(), GameState::AwaitingDrawnPlay { player: 0 });
    game.step(0, &mut policy, &mut events).unwrap();

    assert_eq!(game.active_card(), Some(card(Suit::Spades, 8)));
    assert_eq!(game.hands[0].cards(), &[card(Suit::Clubs, 2)]);
    assert_eq!(
        game.step(0, &mut policy, &mut events),
        Err(MoveError::NotYourTurn)
    );
}

#[test]
fn cards_are_conserved_through_whole_games() {
    for seed in 0..10 {
        let mut game = Game::new(GameOptions::default(), seed).unwrap();
        let mut policies: Vec<ComputerPolicy> = (0..game.hands.len())
            .map(|seat| ComputerPolicy::new(seed * 10 + seat as u64))
            .collect();
        let mut events: Vec<GameEvent> = Vec::new();

        let mut steps = 0;
        while let Some(player) = game.current_player() {
            game.step(player, &mut policies[player], &mut events)
                .unwrap();
            assert_eq!(game.total_cards(), DECK_SIZE, "seed {seed}, step {steps}");
            steps += 1;
            assert!(steps < 100_000, "seed {seed} did not finish");
        }

        match game.state() {
            GameState::GameOver(GameOutcome::Winner { player }) => {
                assert!(game.hands[player].has_won());
                assert_eq!(events.last(), Some(&GameEvent::Won { player }));
            }
            GameState::GameOver(GameOutcome::Stalemate) => {
                assert_eq!(events.last(), Some(&GameEvent::Stalemate));
            }
            state => panic!("unexpected state {state:?}"),
        }
    }
}

#[test]
fn run_plays_to_the_end() {
    let mut game = Game::new(GameOptions::default().with_opponents(2), 3).unwrap();
    let mut policies = computers(&game);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = game.run(&mut policies, &mut events).unwrap();

    assert_eq!(game.state(), GameState::GameOver(outcome));
    assert_eq!(game.total_cards(), DECK_SIZE);
    assert!(matches!(
        events.first(),
        Some(GameEvent::TurnStarted { player: 0, round: 1, .. })
    ));
    if let Some(winner) = outcome.winner() {
        assert!(game.hands[winner].has_won());
    }
    assert!(game.drain_events().is_empty());
}

#[test]
fn run_needs_one_policy_per_seat() {
    let mut game = Game::new(GameOptions::default(), 3).unwrap();
    let mut policies: Vec<Box<dyn Policy>> = vec![Box::new(ComputerPolicy::new(1))];
    let mut events: Vec<GameEvent> = Vec::new();

    assert_eq!(
        game.run(&mut policies, &mut events),
        Err(RunError::PolicyCountMismatch {
            expected: 4,
            actual: 1
        })
    );
}
