use chess_rules::{START_LAYOUT, Side};
use chess_rules_cli::{cli_moves, cli_perft};

use test_case::test_case;
use testresult::TestResult;

#[test_case(1, "Total: 20\n" ; "depth 1")]
#[test_case(2, "Total: 400\n" ; "depth 2")]
fn test_perft_total(depth: usize, want_suffix: &str) -> TestResult {
    let mut out = Vec::new();
    cli_perft(&mut out, START_LAYOUT, Side::White, depth, false)?;

    let out = String::from_utf8(out)?;
    assert!(out.ends_with(want_suffix), "{}", out);
    assert_eq!(out.lines().count(), 21);
    Ok(())
}

#[test]
fn test_perft_full_table() -> TestResult {
    let mut out = Vec::new();
    cli_perft(&mut out, START_LAYOUT, Side::White, 2, true)?;

    let out = String::from_utf8(out)?;
    assert!(out.contains("total nodes: 420"), "{}", out);
    assert!(out.contains("captures"));
    Ok(())
}

#[test]
fn test_perft_bad_layout() {
    let mut out = Vec::new();
    let err = cli_perft(&mut out, "8/8/8", Side::White, 1, false).unwrap_err();
    assert!(err.to_string().contains("Couldn't parse given layout"));
}

#[test_case(START_LAYOUT, "g1", "White Knight on G1: F3 H3\n" ; "knight")]
#[test_case(START_LAYOUT, "e7", "Black Pawn on E7: E5 E6\n" ; "black pawn")]
#[test_case("4r2k/8/8/8/8/8/4B3/4K3", "E2", "White Bishop on E2: \n" ; "pinned bishop")]
fn test_moves(layout: &str, square: &str, want_first_line: &str) -> TestResult {
    let mut out = Vec::new();
    cli_moves(&mut out, layout, square)?;

    let out = String::from_utf8(out)?;
    assert!(out.starts_with(want_first_line), "{}", out);
    Ok(())
}

#[test]
fn test_moves_empty_square() -> TestResult {
    let mut out = Vec::new();
    cli_moves(&mut out, START_LAYOUT, "e4")?;
    assert_eq!(String::from_utf8(out)?, "E4: empty\n");
    Ok(())
}

#[test]
fn test_moves_needs_both_kings() {
    let mut out = Vec::new();
    let err = cli_moves(&mut out, "8/8/8/8/8/8/4B3/4K3", "e2").unwrap_err();
    assert!(err.to_string().contains("Black has no king"), "{}", err);
}

#[test]
fn test_moves_bad_square() {
    let mut out = Vec::new();
    assert!(cli_moves(&mut out, START_LAYOUT, "z9").is_err());
}
