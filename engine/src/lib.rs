pub mod bitboard;
pub mod game;
pub mod move_gen;
pub mod perft;
pub mod position;

pub use bitboard::{BitBoard, Direction, Square};
pub use game::{Game, GameError, GameStatus};
pub use move_gen::check::{checkers, is_in_check, is_square_attacked};
pub use move_gen::legal::{has_legal_moves, legal_moves, legal_moves_from};
pub use move_gen::rays::Ray;
pub use move_gen::{attacks_from, pseudo_legal_moves_from};
pub use perft::{perft, perft_full, PerftDepthResult, PerftResult};
pub use position::{
    LayoutError, Move, Piece, PieceKind, Position, PositionError, Side, START_LAYOUT,
};
