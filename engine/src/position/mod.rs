use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::bitboard::Square;

mod layout;

pub use layout::{LayoutError, START_LAYOUT};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PositionError {
    #[error("char -> piece: got {0}")]
    FromCharPiece(char),

    #[error("no piece at {0}")]
    MoveNoPiece(Square),
}

#[derive(
    Debug, PartialEq, Eq, EnumIter, EnumString, Clone, Copy, Display, Hash, Deserialize, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    #[strum(to_string = "White", serialize = "w")]
    White,
    #[strum(to_string = "Black", serialize = "b")]
    Black,
}

impl Side {
    pub fn opposite_side(self) -> Side {
        if self == Side::White {
            Side::Black
        } else {
            Side::White
        }
    }

    /// Rank step a pawn of this side advances by.
    pub(crate) const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    pub(crate) const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

#[derive(
    Debug, Default, PartialEq, Eq, EnumIter, Clone, Copy, Display, Hash, Deserialize, Serialize,
)]
pub enum PieceKind {
    #[default]
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl From<PieceKind> for char {
    fn from(kind: PieceKind) -> char {
        match kind {
            PieceKind::Empty => '.',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = PositionError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'p' => Ok(PieceKind::Pawn),
            'n' => Ok(PieceKind::Knight),
            'b' => Ok(PieceKind::Bishop),
            'r' => Ok(PieceKind::Rook),
            'q' => Ok(PieceKind::Queen),
            'k' => Ok(PieceKind::King),
            _ => Err(PositionError::FromCharPiece(value)),
        }
    }
}

/// The occupant of one square. An `Empty` piece never has a side, every other kind always
/// does; the constructors are the only way to build one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Piece {
    kind: PieceKind,
    side: Option<Side>,
    square: Square,
    has_moved: bool,
    moves_made: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        if kind == PieceKind::Empty {
            return Piece::empty(square);
        }
        Self {
            kind,
            side: Some(side),
            square,
            has_moved: false,
            moves_made: 0,
        }
    }

    pub fn empty(square: Square) -> Self {
        Self {
            kind: PieceKind::Empty,
            side: None,
            square,
            has_moved: false,
            moves_made: 0,
        }
    }

    /// Layout letter: uppercase for White, lowercase for Black.
    pub fn from_char(ch: char, square: Square) -> Result<Self, PositionError> {
        let kind = PieceKind::try_from(ch.to_ascii_lowercase())?;
        let side = if ch.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Ok(Piece::new(kind, side, square))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    pub fn belongs_to(&self, side: Side) -> bool {
        self.side == Some(side)
    }

    fn relocate(&mut self, dest: Square) {
        self.square = dest;
        self.has_moved = true;
        self.moves_made += 1;
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> char {
        let ch: char = piece.kind.into();
        match piece.side {
            Some(Side::White) => ch.to_ascii_uppercase(),
            _ => ch,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Move {
    pub src: Square,
    pub dest: Square,
}

impl Move {
    pub fn new(src: Square, dest: Square) -> Move {
        Self { src, dest }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dest)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.src, self.dest)
    }
}

/// Every square of the board mapped to its occupant, indexed `[rank][file]`.
///
/// A position only changes through [`Position::make_move`]; simulations work on a clone.
#[derive(Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Position {
    ranks: [[Piece; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    pub fn empty() -> Self {
        Self {
            ranks: std::array::from_fn(|rank| {
                std::array::from_fn(|file| Piece::empty(Square::from_u8((rank * 8 + file) as u8)))
            }),
        }
    }

    pub fn start() -> Self {
        let mut position = Position::empty();

        for side in Side::iter() {
            let (back_rank, pawn_rank) = match side {
                Side::White => (0, 1),
                Side::Black => (7, 6),
            };
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                position.place(Piece::new(kind, side, Square::from_u8(back_rank * 8 + file)));
                position.place(Piece::new(
                    PieceKind::Pawn,
                    side,
                    Square::from_u8(pawn_rank * 8 + file),
                ));
            }
        }

        position
    }

    pub fn piece_at(&self, square: Square) -> Piece {
        self.ranks[square.rank() as usize][square.file() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_empty()
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(|piece| piece.square())
    }

    /// Puts `piece` on its own square, replacing whatever was there.
    pub fn place(&mut self, piece: Piece) {
        let square = piece.square();
        self.ranks[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Occupied squares, A1 first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.ranks
            .iter()
            .flat_map(|rank| rank.iter())
            .filter(|piece| !piece.is_empty())
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.belongs_to(side))
    }

    /// The piece `mve` would capture, if its destination is occupied.
    pub fn capture_for(&self, mve: &Move) -> Option<Piece> {
        Some(self.piece_at(mve.dest)).filter(|piece| !piece.is_empty())
    }

    /// Applies `mve` to a copy and returns it, leaving `self` untouched.
    pub fn apply(&self, mve: &Move) -> Result<Position, PositionError> {
        let mut next = self.clone();
        next.make_move(mve)?;
        Ok(next)
    }

    /// Moves the piece on `mve.src` to `mve.dest`, returning whatever was captured there.
    ///
    /// This does no legality checking; callers that must reject illegal moves filter them
    /// through [`crate::legal_moves_from`] first. A pawn reaching the far rank becomes a queen.
    pub fn make_move(&mut self, mve: &Move) -> Result<Option<Piece>, PositionError> {
        debug_assert_ne!(mve.src, mve.dest, "a move must change squares");
        let mut piece = self.piece_at(mve.src);
        if piece.is_empty() {
            return Err(PositionError::MoveNoPiece(mve.src));
        }

        let captured = self.capture_for(mve);

        piece.relocate(mve.dest);
        if piece.kind() == PieceKind::Pawn {
            if let Some(side) = piece.side() {
                if mve.dest.rank() == side.promotion_rank() {
                    piece.kind = PieceKind::Queen;
                }
            }
        }

        self.place(Piece::empty(mve.src));
        self.place(piece);

        Ok(captured)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board_str = String::with_capacity(64 + 7);
        for (idx, square) in Square::list_white_perspective().into_iter().enumerate() {
            board_str.push(self.piece_at(square).into());
            if (idx + 1) % 8 == 0 && idx != 63 {
                board_str.push('\n');
            }
        }
        write!(f, "{}", board_str)
    }
}
