use strum::IntoEnumIterator;

use crate::bitboard::Square;
use crate::position::{Piece, PieceKind, Position, Side};

pub const START_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("num rows: want 8 got {0}")]
    NumRows(usize),

    #[error("piece placement: got {0}, err at {1}")]
    PiecePlacement(String, usize),

    #[error("row {0}: want 8 squares got {1}")]
    RowLength(usize, usize),

    #[error("{0} has {1} kings, want at most 1")]
    TooManyKings(Side, usize),
}

impl Position {
    /// Builds a position from the piece-placement part of a FEN record.
    ///
    /// The first row is rank 8 and each row is read from the A file. Letters name a piece
    /// (uppercase White, lowercase Black) and digits skip that many empty squares.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows = layout.split('/').collect::<Vec<&str>>();

        if rows.len() != 8 {
            Err(LayoutError::NumRows(rows.len()))?
        }

        let mut position = Position::empty();
        let mut ch_idx = 0;

        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as u8;
            let mut file = 0;

            for ch in row.chars() {
                if let Some(digit) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += digit as usize;
                } else {
                    let square = Square::new(file as u8, rank)
                        .ok_or(LayoutError::RowLength(row_idx, file + 1))?;
                    let piece = Piece::from_char(ch, square)
                        .map_err(|_| LayoutError::PiecePlacement(layout.to_string(), ch_idx))?;
                    position.place(piece);
                    file += 1;
                }
                ch_idx += 1;
            }

            if file != 8 {
                Err(LayoutError::RowLength(row_idx, file))?
            }
            // Skip the '/'
            ch_idx += 1;
        }

        for side in Side::iter() {
            let kings = position
                .pieces_of(side)
                .filter(|piece| piece.kind() == PieceKind::King)
                .count();
            if kings > 1 {
                Err(LayoutError::TooManyKings(side, kings))?
            }
        }

        Ok(position)
    }
}
