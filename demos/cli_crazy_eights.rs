//! CLI Crazy Eights example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crazy8s::{
    Card, ComputerPolicy, Game, GameEvent, GameObserver, GameOptions, MAX_OPPONENTS, MIN_OPPONENTS,
    Move, Policy, Suit, TurnView,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const INSTRUCTIONS: &str = "
How to Play Crazy Eights:
Each player is dealt 5 cards. The player that reaches 0 cards first wins.
There are two stacks of cards:
    1. The Deck that cards are dealt from and players draw from
    2. The \"Card in Play\" pile; cards put down by players, including the first card
On your turn you can play a card from your hand if it:
    1. Matches the rank (number) of the Card in Play
    2. Matches the suit of the Card in Play
    3. Is an 8, which lets you pick a new suit
If none of your cards match, draw from the deck until a playable card turns up.";

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Welcome to Crazy Eights! (type 'q' to quit)");
    println!("0: Instructions\n1: Start Game");
    loop {
        match prompt_usize("Please make a selection: ") {
            Some(0) => {
                println!("{INSTRUCTIONS}");
                prompt_line("\nHit enter to play!");
                break;
            }
            Some(1) => break,
            Some(_) => println!("Incorrect input, please make a correct selection."),
            None => return,
        }
    }

    let opponents = loop {
        let Some(value) = prompt_usize(&format!(
            "Please input the number of computers to play against ({MIN_OPPONENTS}-{MAX_OPPONENTS}): "
        )) else {
            return;
        };
        match u8::try_from(value) {
            Ok(count) if (MIN_OPPONENTS..=MAX_OPPONENTS).contains(&count) => break count,
            _ => println!("Invalid input"),
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_opponents(opponents);
    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    let names: Vec<String> = game.hands.iter().map(|hand| hand.name().to_string()).collect();
    let mut policies: Vec<Box<dyn Policy>> = Vec::with_capacity(game.hands.len());
    for (seat, hand) in game.hands.iter().enumerate() {
        if hand.is_human() {
            policies.push(Box::new(ConsolePlayer));
        } else {
            policies.push(Box::new(ComputerPolicy::new(seed.wrapping_add(seat as u64))));
        }
    }

    let mut table = Table { names };
    if let Err(err) = game.run(&mut policies, &mut table) {
        println!("Game error: {err}");
    }
}

/// The human seat: reads choices from the terminal.
struct ConsolePlayer;

impl Policy for ConsolePlayer {
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move {
        println!("Your Turn...\nPick one of your cards");
        println!("{}", format_hand(view));
        let Some(index) = prompt_usize("Chosen card: ") else {
            quit();
        };
        if index == view.hand.count() {
            println!("Drawing from deck until a playable card is found...");
            Move::Draw
        } else {
            Move::Play(index)
        }
    }

    fn choose_suit(&mut self, _view: &TurnView<'_>) -> u8 {
        let options = Suit::ALL
            .iter()
            .enumerate()
            .map(|(index, suit)| format!("{index}: {suit}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{options}");
        let Some(choice) = prompt_usize("Pick a suit: ") else {
            quit();
        };
        u8::try_from(choice).unwrap_or(u8::MAX)
    }
}

/// Prints what happens at the table.
struct Table {
    names: Vec<String>,
}

impl Table {
    fn name(&self, player: usize) -> &str {
        self.names.get(player).map_or("?", String::as_str)
    }
}

impl GameObserver for Table {
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::TurnStarted {
                player,
                round,
                active,
                hand_size,
            } => {
                if player == 0 {
                    println!("\nRound {round}");
                } else {
                    println!();
                }
                println!("Card in Play: {}", format_card(active));
                if player != 0 {
                    let noun = if hand_size == 1 { "card" } else { "cards" };
                    println!("{}'s Turn...", self.name(player));
                    println!("{}'s hand contains: {hand_size} {noun}.", self.name(player));
                }
            }
            GameEvent::CardDrawn { player, card } => {
                if player == 0 {
                    println!("You drew the {}", format_card(card));
                } else {
                    println!("{} drew a card", self.name(player));
                }
            }
            GameEvent::CardPlayed { player, card } => {
                if player == 0 {
                    println!("You put down the {}", format_card(card));
                } else {
                    println!("{} put down the {}", self.name(player), format_card(card));
                }
            }
            GameEvent::InvalidMove { error, .. } => {
                println!("That's not a valid option: {error}.");
            }
            GameEvent::DeckRefilled { cards } => {
                println!("Deck ran out... Shuffling {cards} cards from the Card in Play pile back in...");
            }
            GameEvent::Passed { player } => {
                println!("{} could not find a playable card and passes.", self.name(player));
            }
            GameEvent::Won { player } => {
                if player == 0 {
                    println!("You win!");
                } else {
                    println!("{} wins!", self.name(player));
                }
            }
            GameEvent::Stalemate => {
                println!("Nobody can play. The game ends in a stalemate.");
            }
        }
    }
}

fn quit() -> ! {
    println!("Goodbye.");
    std::process::exit(0);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_hand(view: &TurnView<'_>) -> String {
    let mut lines = Vec::with_capacity(view.hand.count() + 1);
    if view.hand.has_won() {
        lines.push("Your hand is empty".to_string());
    } else {
        lines.push("Your hand contains:".to_string());
        for (index, card) in view.hand.cards().iter().enumerate() {
            let marker = if card.is_wild() || card.valid_play(view.active) {
                "*"
            } else {
                " "
            };
            lines.push(format!("{index}: {marker} {}", format_card(*card)));
        }
    }
    lines.push(format!("{}: Draw from Stock Pile", view.hand.count()));
    lines.join("\n")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
