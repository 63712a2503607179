use std::io::Write;

use anyhow::{Context, Result};
use chess_rules::{Game, Position, Side, Square, perft, perft_full};
use tracing::{debug, info};

/// Prints the node count below each first move followed by the total, or the per-ply
/// breakdown table when `full` is set.
pub fn cli_perft(
    out: &mut impl Write,
    layout: &str,
    side: Side,
    depth: usize,
    full: bool,
) -> Result<()> {
    let position = Position::from_layout(layout)
        .with_context(|| format!("Couldn't parse given layout: `{}`", layout))?;
    debug!("running perft on {:?} to depth {}", position, depth);

    if full {
        let res = perft_full(&position, side, depth)?;
        info!(
            "perft visited {} nodes at {:.0} nodes/s",
            res.tot_nodes, res.nodes_per_second
        );
        write!(out, "{}", res)?;
        return Ok(());
    }

    let (move_counts, tot_moves) = perft(&position, side, depth)?;
    for (mve, move_nodes) in move_counts.into_iter() {
        writeln!(out, "{}:  {}", mve, move_nodes)?;
    }
    writeln!(out, "Total: {}", tot_moves)?;
    Ok(())
}

/// Prints the legal destinations of the piece on `square`. The side to move is taken to be
/// the owner of that piece.
pub fn cli_moves(out: &mut impl Write, layout: &str, square: &str) -> Result<()> {
    let position = Position::from_layout(layout)
        .with_context(|| format!("Couldn't parse given layout: `{}`", layout))?;
    let square: Square = square
        .parse()
        .with_context(|| format!("Couldn't parse given square: `{}`", square))?;

    let piece = position.piece_at(square);
    let Some(side) = piece.side() else {
        writeln!(out, "{}: empty", square)?;
        return Ok(());
    };

    let game = Game::from_position(position, side)?;
    let dests = game.legal_moves_from(square)?;
    debug!("{} {} on {} has {} legal moves", side, piece.kind(), square, dests.num_squares_set());

    let dests: Vec<String> = dests.into_iter().map(|dest| dest.to_string()).collect();
    writeln!(out, "{} {} on {}: {}", side, piece.kind(), square, dests.join(" "))?;
    writeln!(out, "status: {}", game.status())?;
    Ok(())
}
