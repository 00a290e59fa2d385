//! Integration tests for the literal scenarios in spec.md §8, exercised
//! through the public `solve()` API rather than any single module's
//! internals.

use std::str::FromStr;
use std::time::Instant;

use kociemba::cubie::CubieCube;
use kociemba::facelet::FaceCube;
use kociemba::moves::Move;
use kociemba::solver::Mode;
use kociemba::solve;

const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

fn scrambled_string(moves: &str) -> String {
    let parsed: Vec<Move> = moves
        .split_whitespace()
        .map(|w| Move::from_str(w).unwrap())
        .collect();
    let mut cube = CubieCube::default();
    cube.apply_moves(&parsed);
    FaceCube::from_cubie(&cube).to_string()
}

fn replay_solves(cube_string: &str, solution: &str) -> bool {
    let face: FaceCube = cube_string.parse().unwrap();
    let mut cube = face.to_cubie().unwrap();
    if !solution.is_empty() {
        let moves: Vec<Move> = solution
            .split_whitespace()
            .map(|w| Move::from_str(w).unwrap())
            .collect();
        cube.apply_moves(&moves);
    }
    cube.is_solved()
}

#[test]
fn solved_cube_is_already_solved() {
    assert_eq!(solve(SOLVED, 24, 5.0, Mode::Optimal), "");
}

#[test]
fn single_r_move_scenario() {
    let scrambled = scrambled_string("R");
    let solution = solve(&scrambled, 24, 5.0, Mode::Optimal);
    assert_eq!(solution, "R'");
    assert!(replay_solves(&scrambled, &solution));
}

#[test]
fn six_r_u_r_prime_u_prime_repetitions_return_to_solved() {
    let scrambled = scrambled_string(
        "R U R' U' R U R' U' R U R' U' R U R' U' R U R' U' R U R' U'",
    );
    assert_eq!(scrambled, SOLVED);
    assert_eq!(solve(&scrambled, 24, 5.0, Mode::Optimal), "");
}

#[test]
fn superflip_solves_within_twenty_moves() {
    let scrambled = scrambled_string(
        "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2",
    );
    let solution = solve(&scrambled, 20, 30.0, Mode::Optimal);
    assert!(!solution.starts_with("Error"));
    let len = solution.split_whitespace().count();
    assert!(len <= 20, "superflip solution length {len} exceeds 20");
    assert!(replay_solves(&scrambled, &solution));
}

#[test]
fn swapped_sticker_input_is_rejected() {
    let mut face: FaceCube = SOLVED.parse().unwrap();
    face.facelets.swap(1, 19);
    let result = solve(&face.to_string(), 24, 5.0, Mode::Optimal);
    assert!(result.starts_with("Error: "));
}

#[test]
fn twenty_five_move_scramble_solves_fast_within_three_seconds() {
    let scrambled = scrambled_string(
        "R U2 F' L D2 B R' U F2 L' D B2 R U' F L2 D' B' R2 U F' L D2 R' U2",
    );
    let start = Instant::now();
    let solution = solve(&scrambled, 30, 3.0, Mode::Fast);
    assert!(start.elapsed().as_secs_f64() < 3.0 + 0.5);
    assert!(!solution.starts_with("Error"));
    assert!(replay_solves(&scrambled, &solution));
}
