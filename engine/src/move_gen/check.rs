use crate::bitboard::{BitBoard, Square};
use crate::position::{Position, Side};

use super::attacks_from;

/// Whether any piece of `by` attacks `square`.
///
/// Attack sets never include squares held by the attacker's own pieces, so this answers for
/// empty squares and squares held by the other side only. A piece of `by` guarding another
/// piece of `by` does not count.
pub fn is_square_attacked(position: &Position, square: Square, by: Side) -> bool {
    position
        .pieces_of(by)
        .any(|piece| attacks_from(position, piece.square()).is_square_set(square))
}

/// Whether `side`'s king is attacked. A side without a king is never in check.
pub fn is_in_check(position: &Position, side: Side) -> bool {
    match position.find_king(side) {
        Some(king_square) => is_square_attacked(position, king_square, side.opposite_side()),
        None => false,
    }
}

/// Opposing pieces currently attacking `side`'s king.
pub fn checkers(position: &Position, side: Side) -> BitBoard {
    let Some(king_square) = position.find_king(side) else {
        return BitBoard::empty();
    };

    position
        .pieces_of(side.opposite_side())
        .filter(|piece| attacks_from(position, piece.square()).is_square_set(king_square))
        .map(|piece| piece.square())
        .collect()
}
