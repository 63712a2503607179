use crate::bitboard::{BitBoard, Square};
use crate::position::{Position, Side};

#[rustfmt::skip]
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

#[rustfmt::skip]
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

/// Offset squares that are on the board and not held by one of `mover`'s own pieces.
pub(crate) fn gen_leaping_moves(
    position: &Position,
    origin: Square,
    mover: Side,
    offsets: &[(i8, i8)],
) -> BitBoard {
    offsets
        .iter()
        .filter_map(|&(file_delta, rank_delta)| origin.offset(file_delta, rank_delta))
        .filter(|&sq| !position.piece_at(sq).belongs_to(mover))
        .collect()
}

pub(crate) fn gen_pawn_pushes(position: &Position, origin: Square, side: Side) -> BitBoard {
    let mut moves = BitBoard::empty();
    let forward = side.forward();

    let Some(single) = origin.offset(0, forward).filter(|&sq| position.is_empty(sq)) else {
        return moves;
    };
    moves.set_square(single);

    if origin.rank() == side.pawn_start_rank() {
        if let Some(double) = single.offset(0, forward).filter(|&sq| position.is_empty(sq)) {
            moves.set_square(double);
        }
    }

    moves
}

/// The two forward diagonals, whatever is on them. This is what a pawn threatens.
pub(crate) fn gen_pawn_atks(origin: Square, side: Side) -> BitBoard {
    let forward = side.forward();
    [-1, 1]
        .into_iter()
        .filter_map(|file_delta| origin.offset(file_delta, forward))
        .collect()
}

/// Forward diagonals holding an opposing piece. No en passant.
pub(crate) fn gen_pawn_captures(position: &Position, origin: Square, side: Side) -> BitBoard {
    gen_pawn_atks(origin, side)
        .into_iter()
        .filter(|&sq| position.piece_at(sq).belongs_to(side.opposite_side()))
        .collect()
}
