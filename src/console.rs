//! Terminal realization of the [`InputProvider`] and [`DisplaySink`]
//! collaborators: line-based prompts on stdin, styled card frames on stdout.

use crate::cards::{Card, Color};
use crate::io::{DisplaySink, InputError, InputProvider};
use crate::stats::Statistics;
use crossterm::style::Stylize;
use std::io::BufRead;

const CARD_WIDTH: usize = 9;
const CARD_INNER: usize = CARD_WIDTH - 2;

fn terminal_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Yellow => crossterm::style::Color::Yellow,
    }
}

/// The classic 9x6 card frame: type label centered, color letter beneath,
/// blank for the unresolved wild.
fn card_lines(card: Card) -> [String; 6] {
    let border = "*".repeat(CARD_WIDTH);
    let blank = format!("*{:^w$}*", "", w = CARD_INNER);
    let label = format!("*{:^w$}*", card.card_type().label(), w = CARD_INNER);
    let color = match card.color() {
        Some(c) => format!("*{:^w$}*", c.to_char(), w = CARD_INNER),
        None => blank.clone(),
    };
    [border.clone(), blank.clone(), label, color, blank, border]
}

fn print_card(card: Card) {
    for line in card_lines(card) {
        match card.color() {
            Some(c) => println!("{}", line.with(terminal_color(c))),
            None => println!("{line}"),
        }
    }
    println!();
}

/// Line-based player input over any buffered reader (stdin in the binary).
/// Unparseable lines re-prompt locally; rule checking stays in the engine.
#[derive(Debug)]
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn read_number(&mut self, prompt: &str) -> Result<usize, InputError> {
        loop {
            println!("{prompt}");
            if let Ok(n) = self.read_line()?.parse() {
                return Ok(n);
            }
            println!("Invalid choice! Try again.");
        }
    }
}

impl<R: BufRead> InputProvider for ConsoleInput<R> {
    fn choose_move(&mut self, _seat: usize, hand_len: usize) -> Result<usize, InputError> {
        self.read_number(&format!(
            "Please enter 0 if you want to take a card from the deck\n\
             or 1 - {hand_len} if you want to put one of your cards in the middle:"
        ))
    }

    fn choose_color(&mut self) -> Result<Color, InputError> {
        loop {
            match self.read_number(
                "Please enter your color choice:\n1 - Yellow\n2 - Red\n3 - Blue\n4 - Green",
            )? {
                1 => return Ok(Color::Yellow),
                2 => return Ok(Color::Red),
                3 => return Ok(Color::Blue),
                4 => return Ok(Color::Green),
                _ => println!("Invalid choice! Try again."),
            }
        }
    }

    fn player_count(&mut self) -> Result<usize, InputError> {
        loop {
            let n = self.read_number("Please enter the number of players:")?;
            if n >= 1 {
                return Ok(n);
            }
            println!("A game needs at least one player.");
        }
    }

    fn player_name(&mut self, ordinal: usize) -> Result<String, InputError> {
        loop {
            println!("Please enter the first name of player #{ordinal}:");
            let line = self.read_line()?;
            if let Some(name) = line.split_whitespace().next() {
                return Ok(name.to_string());
            }
        }
    }
}

/// Renders the game to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show_top_card(&mut self, card: Card) {
        println!("Upper card:\n");
        print_card(card);
    }

    fn show_hand(&mut self, name: &str, cards: &[Card]) {
        println!("{name}'s turn:\n");
        for (i, &card) in cards.iter().enumerate() {
            println!("Card #{}:", i + 1);
            print_card(card);
        }
    }

    fn invalid_move(&mut self) {
        println!("Invalid choice! Try again.");
    }

    fn announce_winner(&mut self, name: &str) {
        println!("The winner is... {name}! Congratulations!");
    }

    fn show_statistics(&mut self, stats: &Statistics) {
        println!("\n************ Game Statistics ************");
        println!("Card # | Frequency");
        println!("__________________");
        for bucket in stats.buckets() {
            println!("{:>6} | {}", bucket.card_type().label(), bucket.count());
        }
    }
}
