use std::fmt;
use std::ops::{BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

#[allow(dead_code)]
#[rustfmt::skip]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumString, FromRepr, Display, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Square at `(file, rank)`, or `None` if either coordinate is outside `0..8`.
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Square::from_repr(rank * 8 + file)
        } else {
            None
        }
    }

    pub const fn file(self) -> u8 {
        self as u8 % 8
    }

    pub const fn rank(self) -> u8 {
        self as u8 / 8
    }

    pub(crate) const fn from_u8(idx: u8) -> Square {
        match Square::from_repr(idx) {
            Some(sq) => sq,
            None => panic!("square out of bounds"),
        }
    }

    /// Square reached by moving `file_delta` files and `rank_delta` ranks, or `None` if that
    /// leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    pub fn shift(self, dir: Direction) -> Option<Square> {
        let (file_delta, rank_delta) = dir.delta();
        self.offset(file_delta, rank_delta)
    }

    /// Squares in the order a layout lists them: rank 8 first, each rank from the A file.
    #[rustfmt::skip]
    pub const fn list_white_perspective() -> [Square; 64] {
        [
            Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
            Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
            Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
            Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
            Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
            Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
            Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
            Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// `(file, rank)` step. North is toward rank 8.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}

/// A set of squares, one bit per square index. Iterates in ascending square order.
#[derive(PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct BitBoard(u64);

impl BitBoard {
    pub const fn empty() -> Self {
        BitBoard(0)
    }

    pub const fn from_square(square: Square) -> Self {
        BitBoard(1 << (square as u8))
    }

    pub fn from_squares(squares: &[Square]) -> Self {
        BitBoard(squares.iter().fold(0, |board, sq| board | 1 << (*sq as u8)))
    }

    pub fn to_squares(self) -> Vec<Square> {
        self.into_iter().collect()
    }

    pub fn set_square(&mut self, square: Square) {
        self.0 |= 1 << square as u64
    }

    pub fn is_square_set(&self, square: Square) -> bool {
        self.0 & 1 << (square as u64) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn get_lsb(&self) -> Square {
        debug_assert!(self.0 != 0, "want != 0, got 0");
        Square::from_u8(self.0.trailing_zeros() as u8)
    }

    pub(crate) fn pop_lsb(&mut self) -> Square {
        let lsb = self.get_lsb();
        self.0 &= self.0 - 1;
        lsb
    }

    pub fn num_squares_set(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_subset(self, other: BitBoard) -> bool {
        self.0 & !other.0 == 0
    }
}

/// Squares of a [`BitBoard`], lowest index first.
pub struct Squares(BitBoard);

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop_lsb())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.num_squares_set() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

impl IntoIterator for BitBoard {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Squares {
        Squares(self)
    }
}

impl FromIterator<Square> for BitBoard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = BitBoard::empty();
        for sq in iter {
            bb.set_square(sq);
        }
        bb
    }
}

impl BitOr for BitBoard {
    type Output = BitBoard;

    fn bitor(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0 | other.0)
    }
}

impl BitOrAssign for BitBoard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    fn not(self) -> Self::Output {
        BitBoard(!self.0)
    }
}

impl fmt::Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board_str = String::with_capacity(64 + 7);

        for (idx, square) in Square::list_white_perspective().into_iter().enumerate() {
            let ch = if self.is_square_set(square) { 'X' } else { '.' };
            board_str.push(ch);
            if (idx + 1) % 8 == 0 && idx != 63 {
                board_str.push('\n');
            }
        }

        write!(f, "{}", board_str)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Square::*;
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn test_bitboard_from_squares() {
        let got = BitBoard::from_squares(&[A1, A2, E4]);
        let want = BitBoard(0b0000000000000000000000000000000000010000000000000000000100000001);
        assert_eq!(got, want);
    }

    #[test]
    fn test_debug() {
        let got = BitBoard::from_squares(&[A8, B7, C6, D5, E4, F3, G2, H1]);
        let want = "X.......\n.X......\n..X.....\n...X....\n....X...\n.....X..\n......X.\n.......X";
        assert_eq!(format!("{:?}", got), want);
    }

    #[test_case([B8, G6, A4, F1] ; "first")]
    fn test_is_square_set(set_squares: [Square; 4]) {
        let all_other_squares: Vec<Square> = Square::iter()
            .filter(|s| !set_squares.contains(s))
            .collect();

        let bb = BitBoard::from_squares(&set_squares);
        let inv_bb = BitBoard::from_squares(&all_other_squares);

        for sq in Square::iter() {
            if set_squares.contains(&sq) {
                assert!(bb.is_square_set(sq));
                assert!(!inv_bb.is_square_set(sq));
            } else {
                assert!(!bb.is_square_set(sq));
                assert!(inv_bb.is_square_set(sq));
            }
        }
        assert_eq!(bb | inv_bb, !BitBoard::empty());
    }

    #[test]
    fn test_iter_ascending() {
        let bb = BitBoard::from_squares(&[H8, A1, E4, B1]);
        assert_eq!(bb.to_squares(), vec![A1, B1, E4, H8]);
        assert_eq!(bb.num_squares_set(), 4);
    }

    #[test_case(BitBoard(0b1001000), D1, BitBoard(0b1000000) ; "D1")]
    #[test_case(BitBoard(0b1000000), G1, BitBoard(0b0000000) ; "G1")]
    fn test_pop_lsb(mut inp: BitBoard, lsb_want: Square, res_want: BitBoard) {
        let lsb_got = inp.pop_lsb();
        assert_eq!(lsb_got, lsb_want);
        assert_eq!(inp, res_want);
    }

    #[test_case(0, 0, Some(A1) ; "a1")]
    #[test_case(4, 3, Some(E4) ; "e4")]
    #[test_case(7, 7, Some(H8) ; "h8")]
    #[test_case(8, 0, None ; "file out")]
    #[test_case(0, 8, None ; "rank out")]
    fn test_square_new(file: u8, rank: u8, want: Option<Square>) {
        assert_eq!(Square::new(file, rank), want);
    }

    #[test]
    fn test_square_coords_round_trip() {
        for sq in Square::iter() {
            assert_eq!(Square::new(sq.file(), sq.rank()), Some(sq));
        }
    }

    #[test_case(D4, Direction::North, Some(D5) ; "n")]
    #[test_case(D4, Direction::SouthWest, Some(C3) ; "sw")]
    #[test_case(A6, Direction::West, None ; "off west")]
    #[test_case(H3, Direction::East, None ; "off east")]
    #[test_case(H7, Direction::NorthEast, None ; "off ne")]
    #[test_case(B8, Direction::North, None ; "off north")]
    #[test_case(B1, Direction::SouthEast, None ; "off south")]
    fn test_shift(square: Square, dir: Direction, want: Option<Square>) {
        assert_eq!(square.shift(dir), want);
    }

    #[test_case(G1, 2, 0, None ; "off board")]
    #[test_case(G1, -1, 2, Some(F3) ; "knight hop")]
    #[test_case(A1, 0, 7, Some(A8) ; "long")]
    fn test_offset(square: Square, file_delta: i8, rank_delta: i8, want: Option<Square>) {
        assert_eq!(square.offset(file_delta, rank_delta), want);
    }

    #[test_case("E4", E4 ; "upper")]
    #[test_case("e4", E4 ; "lower")]
    #[test_case("h8", H8 ; "corner")]
    fn test_square_from_str(inp: &str, want: Square) {
        assert_eq!(Square::from_str(inp).ok(), Some(want));
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("a9").is_err());
    }
}
