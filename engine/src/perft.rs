use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use log::debug;
use tabled::{Table, Tabled};

use crate::move_gen::check::is_in_check;
use crate::move_gen::legal::{has_legal_moves, legal_moves};
use crate::position::{Move, Position, PositionError, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Tabled)]
pub struct PerftDepthResult {
    pub tot: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
}

pub struct PerftResult {
    pub depth_results: Vec<PerftDepthResult>,
    pub tot_nodes: u64,
    pub time_elapsed: Duration,
    pub nodes_per_second: f64,
}

impl PerftDepthResult {
    pub fn new(tot: u64, captures: u64, checks: u64, checkmates: u64) -> Self {
        PerftDepthResult {
            tot,
            captures,
            checks,
            checkmates,
        }
    }

    pub fn empty() -> PerftDepthResult {
        PerftDepthResult::new(0, 0, 0, 0)
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total nodes: {}", self.tot_nodes)?;
        writeln!(f, "time elapsed: {}", self.time_elapsed.as_secs_f32())?;
        writeln!(f, "nodes/s: {}", self.nodes_per_second)?;
        writeln!(f, "{}", Table::new(&self.depth_results))?;
        Ok(())
    }
}

/// Counts leaf nodes `depth` plies below `position` with `side` to move, broken down by the
/// first move played.
pub fn perft(
    position: &Position,
    side: Side,
    depth: usize,
) -> Result<(Vec<(Move, u64)>, u64), PositionError> {
    if depth == 0 {
        return Ok((Vec::new(), 1));
    }

    let move_counts = legal_moves(position, side)
        .into_iter()
        .map(|mve| {
            let next = position.apply(&mve)?;
            Ok((mve, count_nodes(&next, side.opposite_side(), depth - 1)?))
        })
        .collect::<Result<Vec<(Move, u64)>, PositionError>>()?;

    let tot = move_counts.iter().map(|(_, nodes)| nodes).sum();
    Ok((move_counts, tot))
}

fn count_nodes(position: &Position, side: Side, depth: usize) -> Result<u64, PositionError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(position, side);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    moves.iter().try_fold(0, |tot, mve| {
        let next = position.apply(mve)?;
        Ok(tot + count_nodes(&next, side.opposite_side(), depth - 1)?)
    })
}

/// Walks the full move tree, tallying captures, checks and checkmates per ply.
pub fn perft_full(
    position: &Position,
    side: Side,
    depth: usize,
) -> Result<PerftResult, PositionError> {
    let mut depth_results = vec![PerftDepthResult::empty(); depth];

    let start = Instant::now();

    perft_helper(&mut depth_results, position, side, depth, 0)?;

    let time_elapsed = start.elapsed();

    let tot_nodes = depth_results.iter().fold(0, |tot, curr| tot + curr.tot);

    let nodes_per_second = tot_nodes as f64 / time_elapsed.as_secs_f64();

    debug!(
        "perft to depth {} visited {} nodes in {:?}",
        depth, tot_nodes, time_elapsed
    );

    Ok(PerftResult {
        depth_results,
        tot_nodes,
        time_elapsed,
        nodes_per_second,
    })
}

fn perft_helper(
    depth_results: &mut [PerftDepthResult],
    position: &Position,
    side: Side,
    max_depth: usize,
    curr_depth: usize,
) -> Result<(), PositionError> {
    if curr_depth == max_depth {
        return Ok(());
    }

    let opp = side.opposite_side();
    let moves = legal_moves(position, side);
    depth_results[curr_depth].tot += moves.len() as u64;

    for mve in moves {
        if position.capture_for(&mve).is_some() {
            depth_results[curr_depth].captures += 1;
        }

        let next = position.apply(&mve)?;

        if is_in_check(&next, opp) {
            depth_results[curr_depth].checks += 1;
            if !has_legal_moves(&next, opp) {
                depth_results[curr_depth].checkmates += 1;
            }
        }

        perft_helper(depth_results, &next, opp, max_depth, curr_depth + 1)?;
    }

    Ok(())
}
