//! Terminal stick-or-twist table driven by the wall clock.
//!
//! Run with `RUST_LOG=bjtable=debug` to watch the engine's logs on stderr.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use bjtable::{Action, Card, Phase, Suit, Table, TableOptions, TableView, Tone};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Stick or twist (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = match Table::new(TableOptions::default(), seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Could not open the table: {err}");
            return;
        }
    };
    let start = Instant::now();

    loop {
        run_timers(&mut table, start);

        let view = table.snapshot();
        print_table(&view);

        if view.phase == Phase::Betting && view.chips == 0 && view.bet == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        println!("{}", format_controls(&view));
        let action = match prompt_line("Action: ").as_str() {
            "+" | ">" | "up" => Action::IncreaseBet,
            "-" | "<" | "down" => Action::DecreaseBet,
            "b" | "bet" => Action::PlaceBet,
            "t" | "twist" => Action::Twist,
            "s" | "stick" => Action::Stick,
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        table.advance_to(elapsed_ms(start));
        if !table.apply(action) {
            println!("Not now.");
        }
    }
}

/// Sleeps through every pending timer, redrawing after each one, until the
/// table is waiting on the player again.
fn run_timers(table: &mut Table, start: Instant) {
    while let Some(deadline) = table.next_deadline() {
        let now = elapsed_ms(start);
        if deadline > now {
            thread::sleep(Duration::from_millis(deadline - now));
        }
        table.advance_to(elapsed_ms(start));
        print_table(&table.snapshot());
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
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

fn print_table(view: &TableView) {
    println!(
        "\nRound {} | chips {} | bet {} | pot {} | deck {}",
        view.round, view.chips, view.bet, view.pot, view.cards_left
    );

    let dealer_score = view
        .dealer_score
        .map_or_else(|| format!("showing {}", view.dealer_visible_score), |s| s.to_string());
    println!("Dealer: {} ({dealer_score})", format_cards(&view.dealer));
    println!("You:    {} ({})", format_cards(&view.player), view.player_score);

    if let Some(message) = view.message {
        let code = match message.tone {
            Tone::Info => "1",
            Tone::Win => "32",
            Tone::Lose => "31",
        };
        println!("{}", colorize(message.text, code));
    }

    if let Some(last) = view.last_result.filter(|r| r.round + 1 == view.round) {
        println!(
            "Last round: {:?} ({} vs {}), paid {}",
            last.end, last.player_score, last.dealer_score, last.payout
        );
    }
}

fn format_controls(view: &TableView) -> String {
    let controls = view.controls;
    let parts = [
        format_action("bet up", "+", controls.increase_bet),
        format_action("bet down", "-", controls.decrease_bet),
        format_action("bet", "b", controls.place_bet),
        format_action("twist", "t", controls.twist),
        format_action("stick", "s", controls.stick),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if card.is_face_down() {
        return colorize("??", "90");
    }
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
