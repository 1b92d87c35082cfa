//! Turn order and promotion flow on top of the board rules.

use arbiter_core::{Coord, Move, PieceKind, Player};
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardSnapshot, ValidMove};
use crate::error::MoveError;

/// What applying a move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move completed and the turn passed to the opponent.
    Played,
    /// A pawn reached its promotion rank. The same player must call
    /// [`Game::resolve_promotion`] before play continues.
    PromotionPending(Coord),
}

/// The standing of the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
}

/// A serializable copy of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    board: BoardSnapshot,
    turn: Player,
}

/// A game in progress: a board, whose turn it is, and whether a
/// promotion is waiting to be resolved.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    pending_promotion: Option<Coord>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Starts a fresh game with player one to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Player::One,
            pending_promotion: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The square holding a pawn that still must be promoted, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Coord> {
        self.pending_promotion
    }

    /// Validates a move for the player whose turn it is.
    pub fn check_move(&mut self, mov: &Move) -> Result<ValidMove, MoveError> {
        if mov.player() != self.turn {
            return Err(MoveError::NotYourPiece);
        }
        self.board.check_move(mov)
    }

    /// Applies a validated move. The turn passes to the opponent unless
    /// the move left a pawn waiting for promotion.
    pub fn apply_move(&mut self, valid: ValidMove) -> MoveOutcome {
        match self.board.apply_move(valid) {
            Some(square) => {
                self.pending_promotion = Some(square);
                MoveOutcome::PromotionPending(square)
            }
            None => {
                self.turn = self.turn.opponent();
                MoveOutcome::Played
            }
        }
    }

    /// Promotes the waiting pawn to `choice` and passes the turn.
    /// Returns false and changes nothing when no promotion is pending
    /// or the choice is refused.
    pub fn resolve_promotion(&mut self, choice: PieceKind) -> bool {
        let square = match self.pending_promotion {
            Some(square) => square,
            None => return false,
        };
        if !self.board.promote_piece(self.turn, square, choice) {
            return false;
        }
        self.pending_promotion = None;
        self.turn = self.turn.opponent();
        true
    }

    /// The standing of the player to move.
    // TODO: detect stalemate; a player with no legal move who is not in
    // check still reports Ongoing.
    pub fn status(&mut self) -> GameStatus {
        let player = self.turn;
        if !self.board.in_check(player) {
            return GameStatus::Ongoing;
        }
        if self.board.checkmate(player) {
            GameStatus::Checkmate
        } else {
            GameStatus::Check
        }
    }

    /// Captures the game for storage.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.snapshot(),
            turn: self.turn,
        }
    }

    /// Rebuilds a game from a snapshot.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Game {
            board: Board::from_snapshot(&snapshot.board),
            turn: snapshot.turn,
            pending_promotion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(text: &str) -> Coord {
        Coord::from_algebraic(text).unwrap()
    }

    fn play(game: &mut Game, from: &str, to: &str) -> MoveOutcome {
        let mov = Move::new(game.turn(), coord(from), coord(to));
        let valid = game.check_move(&mov).unwrap();
        game.apply_move(valid)
    }

    #[test]
    fn turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Player::One);
        play(&mut game, "e2", "e4");
        assert_eq!(game.turn(), Player::Two);
        play(&mut game, "e7", "e5");
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn moving_out_of_turn_is_refused() {
        let mut game = Game::new();
        let mov = Move::new(Player::Two, coord("e7"), coord("e5"));
        assert_eq!(game.check_move(&mov), Err(MoveError::NotYourPiece));
    }

    #[test]
    fn fresh_game_is_ongoing() {
        let mut game = Game::new();
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn promotion_holds_the_turn_until_resolved() {
        let mut game = Game::new();
        play(&mut game, "a2", "a4");
        play(&mut game, "b7", "b5");
        play(&mut game, "a4", "b5");
        play(&mut game, "b8", "a6");
        play(&mut game, "b5", "b6");
        play(&mut game, "a6", "c5");
        play(&mut game, "b6", "b7");
        play(&mut game, "c5", "e4");
        let outcome = play(&mut game, "b7", "b8");
        assert_eq!(outcome, MoveOutcome::PromotionPending(coord("b8")));
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.pending_promotion(), Some(coord("b8")));

        assert!(!game.resolve_promotion(PieceKind::King));
        assert_eq!(game.turn(), Player::One);

        assert!(game.resolve_promotion(PieceKind::Queen));
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.turn(), Player::Two);
        assert_eq!(
            game.board().piece_at(coord("b8")).map(|piece| piece.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn resolve_without_a_pending_promotion_does_nothing() {
        let mut game = Game::new();
        assert!(!game.resolve_promotion(PieceKind::Queen));
        assert_eq!(game.turn(), Player::One);
    }

    #[test]
    fn snapshot_round_trips_with_the_turn() {
        let mut game = Game::new();
        play(&mut game, "d2", "d4");
        let snapshot = game.snapshot();
        let rebuilt = Game::from_snapshot(&snapshot);
        assert_eq!(rebuilt.turn(), Player::Two);
        assert_eq!(rebuilt.snapshot(), snapshot);
    }

    #[test]
    fn snapshot_survives_serialization() {
        let mut game = Game::new();
        play(&mut game, "g1", "f3");
        let text = serde_json::to_string(&game.snapshot()).unwrap();
        let back: GameSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back, game.snapshot());
    }
}
