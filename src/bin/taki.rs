use std::io::{self, BufReader};
use std::process::ExitCode;

use taki_rs::console::{ConsoleDisplay, ConsoleInput};
use taki_rs::deck::CardSupply;
use taki_rs::game::{Game, GameError};
use taki_rs::hand::HandError;
use taki_rs::io::InputProvider;

fn play() -> Result<(), GameError> {
    println!("************ Welcome to TAKI game !!! ************");

    let mut input = ConsoleInput::new(BufReader::new(io::stdin()));
    let count = input.player_count()?;
    let mut names = Vec::with_capacity(count);
    for ordinal in 1..=count {
        names.push(input.player_name(ordinal)?);
    }

    let mut game = Game::new(names, CardSupply::from_entropy())?;
    game.run(&mut input, &mut ConsoleDisplay)?;
    Ok(())
}

fn main() -> ExitCode {
    match play() {
        Ok(()) => ExitCode::SUCCESS,
        // Resource exhaustion is the only fatal path; everything else in
        // normal play recovers by re-prompting.
        Err(GameError::Hand(e @ HandError::Alloc(_))) => {
            eprintln!("Error: could not allocate memory: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
