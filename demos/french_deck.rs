//! French deck demonstration.

use std::time::{SystemTime, UNIX_EPOCH};

use frenchdeck::{Card, FrenchDeck};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let deck = FrenchDeck::new();

    match deck.at(5) {
        Ok(card) => println!("Card number 5: {card}"),
        Err(err) => println!("Card number 5: {err}"),
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("Random card: {}", deck.pick_random(&mut rng));

    println!("Top 3 cards: {}", format_cards(deck.slice(0, 3)));

    for card in deck.iter().take(5) {
        println!("{card}");
    }

    println!(
        "Queen of hearts in deck: {}",
        deck.contains(&Card::new("Q", "hearts"))
    );

    for card in deck.sorted_spades_high() {
        println!("{card}");
    }
}

fn format_cards(cards: &[Card]) -> String {
    let joined: Vec<String> = cards.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}
