use std::iter::FusedIterator;

use crate::bitboard::{BitBoard, Direction, Square};
use crate::position::{Position, Side};

/// Squares a slider belonging to `mover` can reach from `origin` heading in one direction.
///
/// The ray stops at the board edge, or at the first occupied square. That square is yielded
/// only when it holds an opposing piece.
pub struct Ray<'a> {
    position: &'a Position,
    current: Square,
    direction: Direction,
    mover: Side,
    done: bool,
}

impl<'a> Ray<'a> {
    pub fn new(position: &'a Position, origin: Square, direction: Direction, mover: Side) -> Self {
        Self {
            position,
            current: origin,
            direction,
            mover,
            done: false,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.done {
            return None;
        }

        let Some(next) = self.current.shift(self.direction) else {
            self.done = true;
            return None;
        };
        self.current = next;

        match self.position.piece_at(next).side() {
            None => Some(next),
            Some(side) => {
                self.done = true;
                (side != self.mover).then_some(next)
            }
        }
    }
}

impl FusedIterator for Ray<'_> {}

pub(crate) fn gen_sliding_moves(
    position: &Position,
    origin: Square,
    mover: Side,
    dirs: &[Direction],
) -> BitBoard {
    dirs.iter()
        .flat_map(|&dir| Ray::new(position, origin, dir, mover))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Square::*;
    use test_case::test_case;
    use testresult::TestResult;

    #[test_case(Direction::North, vec![D5, D6, D7, D8] ; "north open")]
    #[test_case(Direction::West, vec![C4, B4, A4] ; "west open")]
    #[test_case(Direction::SouthEast, vec![E3, F2, G1] ; "se open")]
    fn test_ray_to_edge(dir: Direction, want: Vec<Square>) -> TestResult {
        let pos = Position::from_layout("8/8/8/8/3R4/8/8/8")?;
        let got: Vec<Square> = Ray::new(&pos, D4, dir, Side::White).collect();
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn test_ray_stops_before_friendly() -> TestResult {
        let pos = Position::from_layout("8/8/3P4/8/3R4/8/8/8")?;
        let got: Vec<Square> = Ray::new(&pos, D4, Direction::North, Side::White).collect();
        assert_eq!(got, vec![D5]);
        Ok(())
    }

    #[test]
    fn test_ray_includes_capture() -> TestResult {
        let pos = Position::from_layout("8/8/3p4/8/3R4/8/8/8")?;
        let got: Vec<Square> = Ray::new(&pos, D4, Direction::North, Side::White).collect();
        assert_eq!(got, vec![D5, D6]);
        Ok(())
    }

    #[test]
    fn test_ray_from_edge_is_empty() -> TestResult {
        let pos = Position::from_layout("8/8/8/8/8/8/8/R7")?;
        let mut ray = Ray::new(&pos, A1, Direction::SouthWest, Side::White);
        assert_eq!(ray.next(), None);
        assert_eq!(ray.next(), None);
        Ok(())
    }

    #[test]
    fn test_gen_sliding_moves_blocked() -> TestResult {
        // Rook on d4 with a friendly pawn on d6 and an enemy knight on f4.
        let pos = Position::from_layout("8/8/3P4/8/3R1n2/8/8/8")?;
        let got = gen_sliding_moves(&pos, D4, Side::White, &Direction::ORTHOGONAL);
        let want = BitBoard::from_squares(&[D5, E4, F4, D3, D2, D1, C4, B4, A4]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn test_gen_sliding_moves_diagonal_corner() -> TestResult {
        let pos = Position::from_layout("8/8/8/8/8/8/8/B7")?;
        let got = gen_sliding_moves(&pos, A1, Side::White, &Direction::DIAGONAL);
        let want = BitBoard::from_squares(&[B2, C3, D4, E5, F6, G7, H8]);
        assert_eq!(got, want);
        Ok(())
    }
}
