use log::debug;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::bitboard::{BitBoard, Square};
use crate::move_gen::check::is_in_check;
use crate::move_gen::legal::{has_legal_moves, legal_moves, legal_moves_from};
use crate::position::{LayoutError, Move, Piece, Position, PositionError, Side};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over: {0}")]
    GameOver(GameStatus),

    #[error("no piece at {0}")]
    NoPiece(Square),

    #[error("{0} piece on {1}, but it is not {0}'s turn")]
    NotToMove(Side, Square),

    #[error("illegal move: {0:?}")]
    IllegalMove(Move),

    #[error("{0} has no king")]
    MissingKing(Side),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Position(#[from] PositionError),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Deserialize, Serialize)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// A position together with whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Game {
    position: Position,
    to_move: Side,
    full_move_counter: u16,
    status: GameStatus,
    captured: Vec<Piece>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_position(Position::start(), Side::White)
    }

    pub fn from_layout(layout: &str, to_move: Side) -> Result<Self, GameError> {
        Self::from_position(Position::from_layout(layout)?, to_move)
    }

    /// Starts a game from `position`, which must hold a king of each side.
    pub fn from_position(position: Position, to_move: Side) -> Result<Self, GameError> {
        for side in Side::iter() {
            if position.find_king(side).is_none() {
                return Err(GameError::MissingKing(side));
            }
        }
        Ok(Self::with_position(position, to_move))
    }

    fn with_position(position: Position, to_move: Side) -> Self {
        let status = compute_status(&position, to_move);
        Self {
            position,
            to_move,
            full_move_counter: 1,
            status,
            captured: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn full_move_counter(&self) -> u16 {
        self.full_move_counter
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Pieces taken so far, in the order they were captured.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Legal destinations from `square` for the side to move. An empty square yields no
    /// destinations; a square holding the other side's piece is an error.
    pub fn legal_moves_from(&self, square: Square) -> Result<BitBoard, GameError> {
        match self.position.piece_at(square).side() {
            None => Ok(BitBoard::empty()),
            Some(side) if side != self.to_move => Err(GameError::NotToMove(side, square)),
            Some(_) => Ok(legal_moves_from(&self.position, square)),
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position, self.to_move)
    }

    /// Validates `mve` against the legal moves of the side to move and plays it, returning
    /// the captured piece if any.
    pub fn make_move(&mut self, mve: Move) -> Result<Option<Piece>, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let side = self
            .position
            .piece_at(mve.src)
            .side()
            .ok_or(GameError::NoPiece(mve.src))?;

        if side != self.to_move {
            return Err(GameError::NotToMove(side, mve.src));
        }

        if !legal_moves_from(&self.position, mve.src).is_square_set(mve.dest) {
            return Err(GameError::IllegalMove(mve));
        }

        let captured = self.position.make_move(&mve)?;
        if let Some(piece) = captured {
            self.captured.push(piece);
        }

        if self.to_move == Side::Black {
            self.full_move_counter += 1;
        }
        self.to_move = side.opposite_side();
        self.status = compute_status(&self.position, self.to_move);

        debug!("{} played {:?}, status now {}", side, mve, self.status);

        Ok(captured)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn compute_status(position: &Position, to_move: Side) -> GameStatus {
    let in_check = is_in_check(position, to_move);
    match (in_check, has_legal_moves(position, to_move)) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}
