//! Line-mode console over a [`game::ChessGame`]
//!
//! Feeds coordinate notation into the core and prints board renders. Core
//! errors are displayed and the loop continues; nothing here is fatal, and
//! the process always exits 0.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use game::ChessGame;
use move_sources::{JsonFileMoveSource, MoveSource};

/// Play or inspect a simple chess game
#[derive(Debug, Parser)]
pub struct Args {
    /// Path to a JSON file containing coordinate moves
    pub moves: Option<PathBuf>,
}

/// Run the console: replay a move file if one was given, otherwise prompt
/// for moves interactively until EOF or a quit command.
pub fn run(args: Args) {
    let mut game = ChessGame::new();

    let moves = match args.moves {
        Some(path) => match JsonFileMoveSource::new(path).load() {
            Ok(moves) => moves,
            Err(err) => {
                println!("Error: {err}");
                return;
            }
        },
        None => Vec::new(),
    };

    if !moves.is_empty() {
        if let Err(err) = game.load_moves(&moves) {
            println!("Error: {err}");
            return;
        }
    }

    println!("{}", game.board().render());

    if moves.is_empty() {
        println!();
        println!("Enter moves in coordinate notation (e.g. e2e4). Type 'quit' to exit.");
        interactive_loop(&mut game);
    }
}

fn interactive_loop(game: &mut ChessGame) {
    let stdin = io::stdin();
    loop {
        print!("{} to move: ", game.turn());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let notation = line.trim();
        if notation.is_empty() {
            continue;
        }
        if notation.eq_ignore_ascii_case("quit") || notation.eq_ignore_ascii_case("exit") {
            break;
        }

        match game.apply_notation(notation) {
            Ok(()) => println!("{}", game.board().render()),
            Err(err) => println!("Error: {err}"),
        }
    }
}
