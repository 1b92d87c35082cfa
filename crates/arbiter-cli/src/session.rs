//! The interactive two-player loop.
//!
//! Reads one command per line from stdin, renders the board between
//! turns, and keeps refusing input until a legal move is entered.
//! Illegal moves never end the session.

use std::io::{self, BufRead, Write};

use arbiter_core::Move;
use arbiter_engine::{Game, GameStatus, MoveOutcome};

use crate::config::CliConfig;
use crate::notation::{self, Command};
use crate::render;
use crate::storage;

const HELP: &str = "\
Moves are two squares: 'e2 e4' or 'e2e4'. Castle with OO or OOO.
  s, save    save the game
  l, load    load the saved game
  h, ?       show this help
  q, quit    leave the game";

/// What the loop should do after one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
    GameOver,
}

/// A game of chess bound to a terminal.
pub struct Session {
    game: Game,
    config: CliConfig,
}

impl Session {
    pub fn new(config: CliConfig) -> Self {
        Session::with_game(Game::new(), config)
    }

    pub fn with_game(game: Game, config: CliConfig) -> Self {
        Session { game, config }
    }

    /// Runs the session until a player quits, the game ends, or stdin
    /// closes.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!("{}", render::render_board(self.game.board(), &self.config));
            print!("{}", self.prompt());
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            match self.handle_line(&line) {
                Step::Continue => {}
                Step::Quit => return Ok(()),
                Step::GameOver => {
                    println!("{}", render::render_board(self.game.board(), &self.config));
                    return Ok(());
                }
            }
        }
    }

    fn prompt(&self) -> String {
        match self.game.pending_promotion() {
            Some(square) => format!(
                "{}, your pawn on {} must promote. Choose queen, rook, bishop, or knight: ",
                self.game.turn(),
                square
            ),
            None => format!("{}, enter a move (or h for help): ", self.game.turn()),
        }
    }

    fn handle_line(&mut self, line: &str) -> Step {
        if self.game.pending_promotion().is_some() {
            return self.handle_promotion(line);
        }
        let command = match notation::parse_command(self.game.turn(), line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                return Step::Continue;
            }
        };
        match command {
            Command::Play(mov) => self.play(mov),
            Command::Help => {
                println!("{}", HELP);
                Step::Continue
            }
            Command::Save => {
                match storage::save_game(&self.config.save_path, &self.game) {
                    Ok(()) => println!("Game saved to {}.", self.config.save_path),
                    Err(err) => println!("Could not save: {}", err),
                }
                Step::Continue
            }
            Command::Load => {
                match storage::load_game(&self.config.save_path) {
                    Ok(game) => {
                        self.game = game;
                        println!("Game loaded from {}.", self.config.save_path);
                    }
                    Err(err) => println!("Could not load: {}", err),
                }
                Step::Continue
            }
            Command::Quit => Step::Quit,
        }
    }

    fn play(&mut self, mov: Move) -> Step {
        let valid = match self.game.check_move(&mov) {
            Ok(valid) => valid,
            Err(err) => {
                println!("That move is not possible: {}.", err);
                return Step::Continue;
            }
        };
        match self.game.apply_move(valid) {
            // The next prompt asks for the promotion choice.
            MoveOutcome::PromotionPending(_) => Step::Continue,
            MoveOutcome::Played => self.announce_status(),
        }
    }

    fn handle_promotion(&mut self, line: &str) -> Step {
        match notation::parse_promotion(line) {
            Some(choice) if self.game.resolve_promotion(choice) => self.announce_status(),
            _ => {
                println!("Choose queen, rook, bishop, or knight.");
                Step::Continue
            }
        }
    }

    fn announce_status(&mut self) -> Step {
        match self.game.status() {
            GameStatus::Ongoing => Step::Continue,
            GameStatus::Check => {
                println!("{}, you are in check!", self.game.turn());
                Step::Continue
            }
            GameStatus::Checkmate => {
                println!("Checkmate! {} wins.", self.game.turn().opponent());
                Step::GameOver
            }
        }
    }
}
