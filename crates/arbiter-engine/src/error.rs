//! Reasons a move request is refused.

use thiserror::Error;

/// Why a move was refused. Refusals report the first rule that failed,
/// in the order the rules are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on the starting square")]
    NoPieceOnSquare,
    #[error("that piece does not belong to you")]
    NotYourPiece,
    #[error("the destination is unreachable for that piece")]
    UnreachableDestination,
    #[error("one of your own pieces occupies the destination")]
    FriendlyDestination,
    #[error("the path to the destination is blocked")]
    BlockedPath,
    #[error("the move would expose your king")]
    ExposesOwnKing,
    #[error("castling is not allowed")]
    CastleNotAllowed,
    #[error("en passant is not allowed")]
    EnPassantNotAllowed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_as_reasons() {
        assert_eq!(
            MoveError::NoPieceOnSquare.to_string(),
            "no piece on the starting square"
        );
        assert_eq!(
            MoveError::ExposesOwnKing.to_string(),
            "the move would expose your king"
        );
        assert_eq!(MoveError::CastleNotAllowed.to_string(), "castling is not allowed");
    }
}
