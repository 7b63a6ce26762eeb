//! CLI round demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pocket21::{
    Card, DealerHand, Hand, Outcome, Rank, Round, RoundEvent, RoundOptions, RoundPhase, Suit,
};

fn main() {
    println!("Blackjack round demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(RoundOptions::default(), seed);
    let mut balance: u64 = 0;

    loop {
        let ticket = round.ticket();

        if let Err(err) = round.deal(ticket) {
            println!("Deal error: {err:?}");
            break;
        }
        play_cues(&mut round);

        while round.phase() == RoundPhase::Playing {
            print_table(&round);

            let action = prompt_line("Action ([h]it / [s]tand / [q]uit): ");
            let result = match action.as_str() {
                "h" | "hit" => round.hit(ticket).map(|_| ()),
                "s" | "stand" => round.stand(ticket),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err:?}");
            }
            play_cues(&mut round);
        }

        if round.phase() == RoundPhase::Dealer {
            match round.run_dealer(ticket) {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => println!("Dealer error: {err:?}"),
            }
            play_cues(&mut round);
        }

        if let Some(summary) = round.summary() {
            print_table(&round);

            match summary.outcome {
                Outcome::PlayerWin => {
                    balance += summary.reward;
                    println!(
                        "You won! +{} point(s). ({} vs {})",
                        summary.reward, summary.player_value, summary.dealer_value
                    );
                }
                Outcome::DealerWin => println!(
                    "You lost. ({} vs {})",
                    summary.player_value, summary.dealer_value
                ),
                Outcome::Draw => println!(
                    "Draw, nobody wins. ({} vs {})",
                    summary.player_value, summary.dealer_value
                ),
            }
            println!("Balance: {balance} point(s)");
        }

        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            return;
        }

        if let Err(err) = round.replay(ticket) {
            println!("Replay error: {err:?}");
            return;
        }
        round.take_events();
    }
}

/// Prints a short cue line per event, standing in for an audio layer.
fn play_cues(round: &mut Round) {
    for event in round.take_events() {
        match event {
            RoundEvent::CardDealt { .. } => println!("  * card hits the table"),
            RoundEvent::HoleRevealed => println!("  * hole card flips"),
            RoundEvent::RoundWon { .. } => println!("  * win jingle"),
            RoundEvent::RoundLost => println!("  * loss thud"),
            RoundEvent::RoundDraw | RoundEvent::RoundReset => {}
        }
    }
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

fn print_table(round: &Round) {
    let dealer = round.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        if dealer.is_hole_revealed() {
            dealer.value().to_string()
        } else {
            format!("{}?", dealer.visible_value())
        }
    );
    println!(
        "You:    {} (value {})\n",
        format_hand(round.player_hand()),
        round.player_value()
    );
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.base_value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
