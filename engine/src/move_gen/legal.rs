use log::trace;

use crate::bitboard::{BitBoard, Square};
use crate::position::{Move, Position, Side};

use super::check::is_in_check;
use super::pseudo_legal_moves_from;

/// Pseudo-legal destinations of the piece on `square` that do not leave its own king in check.
///
/// Each candidate is played on a private clone of `position`. Whose turn it is is not checked
/// here; see [`crate::Game::legal_moves_from`].
pub fn legal_moves_from(position: &Position, square: Square) -> BitBoard {
    let Some(side) = position.piece_at(square).side() else {
        return BitBoard::empty();
    };

    pseudo_legal_moves_from(position, square)
        .into_iter()
        .filter(|&dest| {
            let mve = Move::new(square, dest);
            let mut scratch = position.clone();
            if scratch.make_move(&mve).is_err() {
                return false;
            }
            let exposed = is_in_check(&scratch, side);
            if exposed {
                trace!("discarding {:?}: leaves {} king in check", mve, side);
            }
            !exposed
        })
        .collect()
}

/// Every legal move of `side`, ordered by source then destination square.
pub fn legal_moves(position: &Position, side: Side) -> Vec<Move> {
    position
        .pieces_of(side)
        .flat_map(|piece| {
            let src = piece.square();
            legal_moves_from(position, src)
                .into_iter()
                .map(move |dest| Move::new(src, dest))
        })
        .collect()
}

pub fn has_legal_moves(position: &Position, side: Side) -> bool {
    position
        .pieces_of(side)
        .any(|piece| !legal_moves_from(position, piece.square()).is_empty())
}
