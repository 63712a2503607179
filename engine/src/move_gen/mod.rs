pub mod check;
pub mod leaping_pieces;
pub mod legal;
pub mod rays;

use crate::bitboard::{BitBoard, Direction, Square};
use crate::position::{PieceKind, Position};

use self::leaping_pieces::{
    gen_leaping_moves, gen_pawn_atks, gen_pawn_captures, gen_pawn_pushes, KING_OFFSETS,
    KNIGHT_OFFSETS,
};
use self::rays::gen_sliding_moves;

/// Destinations the piece on `square` can reach by its movement rule alone, ignoring whether
/// the move exposes its own king. Empty for an empty square.
pub fn pseudo_legal_moves_from(position: &Position, square: Square) -> BitBoard {
    let piece = position.piece_at(square);
    let Some(side) = piece.side() else {
        return BitBoard::empty();
    };

    match piece.kind() {
        PieceKind::Empty => BitBoard::empty(),
        PieceKind::Pawn => {
            gen_pawn_pushes(position, square, side) | gen_pawn_captures(position, square, side)
        }
        PieceKind::Knight => gen_leaping_moves(position, square, side, &KNIGHT_OFFSETS),
        PieceKind::Bishop => gen_sliding_moves(position, square, side, &Direction::DIAGONAL),
        PieceKind::Rook => gen_sliding_moves(position, square, side, &Direction::ORTHOGONAL),
        PieceKind::Queen => {
            gen_sliding_moves(position, square, side, &Direction::ORTHOGONAL)
                | gen_sliding_moves(position, square, side, &Direction::DIAGONAL)
        }
        PieceKind::King => gen_leaping_moves(position, square, side, &KING_OFFSETS),
    }
}

/// Squares the piece on `square` threatens. Same as [`pseudo_legal_moves_from`] except for
/// pawns, which threaten both forward diagonals even when they are empty and never threaten
/// the squares they push to.
pub fn attacks_from(position: &Position, square: Square) -> BitBoard {
    let piece = position.piece_at(square);
    match (piece.kind(), piece.side()) {
        (PieceKind::Pawn, Some(side)) => gen_pawn_atks(square, side),
        _ => pseudo_legal_moves_from(position, square),
    }
}
