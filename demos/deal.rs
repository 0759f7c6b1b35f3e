//! CLI dealing example.

use std::io::{self, Write};

use deckrs::{Card, DeckBuilder, Rank, Suit};

fn main() {
    println!("Deck dealing example (type 'q' to quit)");

    let mut deck = DeckBuilder::new()
        .with_filter_out(|card| card.rank == Rank::Two)
        .with_copies(2)
        .with_shuffle()
        .build();

    loop {
        println!("\nDeck: {} cards remaining", deck.len());

        let Some(count) = prompt_usize("Cards to deal (0 to quit): ") else {
            break;
        };

        if count == 0 {
            println!("Goodbye.");
            break;
        }

        let mut hand = Vec::with_capacity(count);
        for _ in 0..count {
            match deck.deal_card() {
                Ok(card) => hand.push(card),
                Err(err) => {
                    println!("Deal error: {err}");
                    break;
                }
            }
        }

        println!("Hand: {}", format_hand(&hand));

        if deck.is_empty() {
            println!("Deck exhausted.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| colorize(&card.to_string(), suit_color(card.suit)))
        .collect::<Vec<_>>()
        .join(" ")
}

const fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "37",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
