//! The two-phase IDA* search engine (spec.md §4.5): phase 1 reduces the
//! cube into G1 = ⟨U,D,R²,L²,F²,B²⟩, phase 2 finishes inside it. Written
//! as an iterative state machine over the move-choice stack rather than
//! recursion, so a deep search never grows the call stack and a wall-clock
//! timeout can be polled at every backtrack.

use std::time::{Duration, Instant};

use crate::constants::PHASE2_MOVES;
use crate::cubie::{parity_after_move, CubieCube, Verification};
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::tables::{Tables, TABLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Optimal,
    Fast,
}

const AXIS_NAMES: [&str; 6] = ["U", "R", "F", "D", "L", "B"];

fn move_to_string(axis: u8, power: u8) -> String {
    let suffix = match power {
        0 => "",
        1 => "2",
        _ => "'",
    };
    format!("{}{}", AXIS_NAMES[axis as usize], suffix)
}

/// No cursor has been tried yet at this depth.
const NO_AXIS: i8 = -1;

struct Search<'a> {
    tables: &'a Tables,

    // Phase-1 stack: index 0 holds the coordinates of the input cube
    // before any move; indices 1..=n are the committed moves so far.
    axis: Vec<i8>,
    power: Vec<i8>,
    flip: Vec<u16>,
    twist: Vec<u16>,
    fr_to_br: Vec<u16>,
    urf_to_dlf: Vec<u16>,
    ur_to_ul: Vec<u16>,
    ub_to_df: Vec<u16>,
    parity: Vec<u8>,
    min_dist_phase1: Vec<u8>,

    // Phase-2 stack, reused across every phase-1 node that reaches G1.
    axis2: Vec<i8>,
    power2: Vec<i8>,
    urf_to_dlf2: Vec<u16>,
    fr_to_br2: Vec<u16>,
    ur_to_df2: Vec<u16>,
    parity2: Vec<u8>,

    deadline: Option<Instant>,
}

impl<'a> Search<'a> {
    fn new(tables: &'a Tables, total_max: usize, phase2_cap: usize) -> Search<'a> {
        Search {
            tables,
            axis: vec![NO_AXIS; total_max + 2],
            power: vec![2; total_max + 2],
            flip: vec![0; total_max + 2],
            twist: vec![0; total_max + 2],
            fr_to_br: vec![0; total_max + 2],
            urf_to_dlf: vec![0; total_max + 2],
            ur_to_ul: vec![0; total_max + 2],
            ub_to_df: vec![0; total_max + 2],
            parity: vec![0; total_max + 2],
            min_dist_phase1: vec![0; total_max + 2],
            axis2: vec![NO_AXIS; phase2_cap + 2],
            power2: vec![2; phase2_cap + 2],
            urf_to_dlf2: vec![0; phase2_cap + 2],
            fr_to_br2: vec![0; phase2_cap + 2],
            ur_to_df2: vec![0; phase2_cap + 2],
            parity2: vec![0; phase2_cap + 2],
            deadline: None,
        }
    }

    fn check_deadline(&self) -> Result<(), Error> {
        if let Some(dl) = self.deadline {
            if Instant::now() >= dl {
                return Err(Error::Timeout);
            }
        }
        Ok(())
    }

    fn phase1_prune(&self, slice: usize, flip: usize, twist: usize) -> u8 {
        self.tables
            .pruning
            .get_slice_flip_prun(slice, flip)
            .max(self.tables.pruning.get_slice_twist_prun(slice, twist))
    }

    fn phase2_prune(&self, fr_to_br: usize, urf_to_dlf: usize, ur_to_df: usize, parity: usize) -> u8 {
        // FRtoBR fully determines phase 2's "slice2" index: its combination
        // part is always 0 once the search has entered G1.
        let slice2 = fr_to_br;
        self.tables
            .pruning
            .get_slice2_urf_to_dlf_parity_prun(slice2, urf_to_dlf, parity)
            .max(
                self.tables
                    .pruning
                    .get_slice2_ur_to_df_parity_prun(slice2, ur_to_df, parity),
            )
    }

    /// Depth-first iterative deepening restricted to [`PHASE2_MOVES`],
    /// starting from the phase-1 endpoint stored at `self.*[n1]`. Returns
    /// the number of phase-2 moves on success.
    fn phase2_search(&mut self, n1: usize, budget: usize) -> Result<Option<usize>, Error> {
        let mut tmp = CubieCube::new_solved();
        tmp.set_ur_to_ul(self.ur_to_ul[n1] as u32);
        let ur_to_ul_r = tmp.get_ur_to_ul_restricted();
        tmp.set_ub_to_df(self.ub_to_df[n1] as u32);
        let ub_to_df_r = tmp.get_ub_to_df_restricted();
        let merge_idx = 336 * ur_to_ul_r as usize + ub_to_df_r as usize;
        let ur_to_df0 = self.tables.moves.merge[merge_idx];
        if ur_to_df0 < 0 {
            return Ok(None);
        }

        self.urf_to_dlf2[0] = self.urf_to_dlf[n1];
        self.fr_to_br2[0] = self.fr_to_br[n1];
        self.ur_to_df2[0] = ur_to_df0 as u16;
        self.parity2[0] = self.parity[n1];

        let h0 = self.phase2_prune(
            self.fr_to_br2[0] as usize,
            self.urf_to_dlf2[0] as usize,
            self.ur_to_df2[0] as usize,
            self.parity2[0] as usize,
        );
        if h0 as usize > budget {
            return Ok(None);
        }

        let mut d2 = h0 as usize;
        loop {
            self.axis2[1] = NO_AXIS;
            self.power2[1] = 2;
            if let Some(len) = self.phase2_dfs(d2)? {
                return Ok(Some(len));
            }
            if d2 >= budget {
                return Ok(None);
            }
            d2 += 1;
        }
    }

    fn phase2_dfs(&mut self, d: usize) -> Result<Option<usize>, Error> {
        let mut n: usize = 0;
        loop {
            let i = n + 1;
            let mut found = false;
            loop {
                if self.power2[i] < 2 {
                    self.power2[i] += 1;
                } else {
                    self.power2[i] = 0;
                    self.axis2[i] += 1;
                }
                if self.axis2[i] as usize >= PHASE2_MOVES.len() {
                    break;
                }
                let m = PHASE2_MOVES[self.axis2[i] as usize];
                let move_axis = (m / 3) as i8;
                if n > 0 {
                    let prev_m = PHASE2_MOVES[self.axis2[n] as usize];
                    let prev_axis = (prev_m / 3) as i8;
                    if prev_axis == move_axis {
                        continue;
                    }
                    if (prev_axis - move_axis).abs() == 3 && prev_axis > move_axis {
                        continue;
                    }
                }
                let new_urf =
                    self.tables.moves.urf_to_dlf_move[18 * self.urf_to_dlf2[n] as usize + m];
                let new_fr = self.tables.moves.fr_to_br_move[18 * self.fr_to_br2[n] as usize + m];
                let new_ur_to_df =
                    self.tables.moves.ur_to_df_move[18 * self.ur_to_df2[n] as usize + m];
                let new_parity = parity_after_move(self.parity2[n], m);
                let h = self.phase2_prune(
                    new_fr as usize,
                    new_urf as usize,
                    new_ur_to_df as usize,
                    new_parity as usize,
                );
                if i + h as usize > d {
                    continue;
                }
                self.urf_to_dlf2[i] = new_urf;
                self.fr_to_br2[i] = new_fr;
                self.ur_to_df2[i] = new_ur_to_df;
                self.parity2[i] = new_parity;
                found = true;
                break;
            }
            if !found {
                self.check_deadline()?;
                if n == 0 {
                    return Ok(None);
                }
                n -= 1;
                continue;
            }
            n = i;
            if n == d
                && self.urf_to_dlf2[n] == 0
                && self.fr_to_br2[n] == 0
                && self.ur_to_df2[n] == 0
            {
                return Ok(Some(n));
            }
            if n < d {
                self.axis2[n + 1] = NO_AXIS;
                self.power2[n + 1] = 2;
            } else {
                self.check_deadline()?;
                n -= 1;
            }
        }
    }

    /// Iterative deepening over the total solution length `d`. Returns
    /// `(phase-1 length, phase-2 length)` on success.
    fn phase1_dfs(
        &mut self,
        d: usize,
        total_max: usize,
        phase2_cap: usize,
    ) -> Result<Option<(usize, usize)>, Error> {
        let mut n: usize = 0;
        loop {
            let i = n + 1;
            let mut found = false;
            if i <= d {
                loop {
                    if self.power[i] < 2 {
                        self.power[i] += 1;
                    } else {
                        self.power[i] = 0;
                        self.axis[i] += 1;
                    }
                    if self.axis[i] >= 6 {
                        break;
                    }
                    if n > 0 {
                        let pa = self.axis[n];
                        let ca = self.axis[i];
                        if pa == ca {
                            continue;
                        }
                        if (pa - ca).abs() == 3 && pa > ca {
                            continue;
                        }
                    }
                    let m = 3 * self.axis[i] as usize + self.power[i] as usize;
                    let new_flip = self.tables.moves.flip_move[18 * self.flip[n] as usize + m];
                    let new_twist = self.tables.moves.twist_move[18 * self.twist[n] as usize + m];
                    let new_fr_to_br =
                        self.tables.moves.fr_to_br_move[18 * self.fr_to_br[n] as usize + m];
                    let new_slice = new_fr_to_br as usize / 24;
                    let h1 = self.phase1_prune(new_slice, new_flip as usize, new_twist as usize);
                    if i + h1 as usize > d {
                        continue;
                    }
                    self.flip[i] = new_flip;
                    self.twist[i] = new_twist;
                    self.fr_to_br[i] = new_fr_to_br;
                    self.urf_to_dlf[i] =
                        self.tables.moves.urf_to_dlf_move[18 * self.urf_to_dlf[n] as usize + m];
                    self.ur_to_ul[i] =
                        self.tables.moves.ur_to_ul_move[18 * self.ur_to_ul[n] as usize + m];
                    self.ub_to_df[i] =
                        self.tables.moves.ub_to_df_move[18 * self.ub_to_df[n] as usize + m];
                    self.parity[i] = parity_after_move(self.parity[n], m);
                    self.min_dist_phase1[i] = h1;
                    found = true;
                    break;
                }
            }
            if !found {
                self.check_deadline()?;
                if n == 0 {
                    return Ok(None);
                }
                n -= 1;
                continue;
            }
            n = i;
            if self.min_dist_phase1[n] == 0 {
                let budget = (d - n).min(phase2_cap).min(total_max - n);
                if let Some(len2) = self.phase2_search(n, budget)? {
                    return Ok(Some((n, len2)));
                }
            }
            if n < d {
                self.axis[n + 1] = NO_AXIS;
                self.power[n + 1] = 2;
            } else {
                self.check_deadline()?;
                n -= 1;
            }
        }
    }

    fn solution_string(&self, n1: usize, n2: usize) -> String {
        let mut parts = Vec::with_capacity(n1 + n2);
        for i in 1..=n1 {
            parts.push(move_to_string(self.axis[i] as u8, self.power[i] as u8));
        }
        for i in 1..=n2 {
            let m = PHASE2_MOVES[self.axis2[i] as usize];
            parts.push(move_to_string((m / 3) as u8, (m % 3) as u8));
        }
        parts.join(" ")
    }
}

const MAX_DEPTH_OPTIMAL: usize = 30;
const MAX_DEPTH_FAST: usize = 50;
const PHASE2_CAP_OPTIMAL: usize = 10;
const PHASE2_CAP_FAST: usize = 25;

/// `solve(cube_string, max_depth, timeout_seconds, mode)`, per spec.md §6.
/// Never panics; every failure is returned as a string beginning with
/// `"Error: "`.
pub fn solve(cube_string: &str, max_depth: usize, timeout_seconds: f64, mode: Mode) -> String {
    match solve_checked(cube_string, max_depth, timeout_seconds, mode) {
        Ok(s) => s,
        Err(e) => e.to_solve_string(),
    }
}

fn solve_checked(
    cube_string: &str,
    max_depth: usize,
    timeout_seconds: f64,
    mode: Mode,
) -> Result<String, Error> {
    let face_cube: FaceCube = cube_string.parse()?;
    let cube = face_cube.to_cubie()?;
    match cube.verify() {
        Verification::Ok => {}
        Verification::BadCornerPerm => return Err(Error::BadCorner),
        Verification::BadEdgePerm => return Err(Error::BadEdge),
        Verification::BadTwist => return Err(Error::BadTwist),
        Verification::BadFlip => return Err(Error::BadFlip),
        Verification::BadParity => return Err(Error::BadParity),
    }
    if cube.is_solved() {
        return Ok(String::new());
    }

    let (hard_cap, phase2_cap) = match mode {
        Mode::Optimal => (MAX_DEPTH_OPTIMAL, PHASE2_CAP_OPTIMAL),
        Mode::Fast => (MAX_DEPTH_FAST, PHASE2_CAP_FAST),
    };
    let total_max = max_depth.min(hard_cap);

    let tables = &*TABLES;
    let mut search = Search::new(tables, total_max, phase2_cap);
    search.deadline = Some(Instant::now() + Duration::from_secs_f64(timeout_seconds.max(0.0)));

    search.flip[0] = cube.get_flip();
    search.twist[0] = cube.get_twist();
    search.fr_to_br[0] = cube.get_fr_to_br();
    search.urf_to_dlf[0] = cube.get_urf_to_dlf() as u16;
    search.ur_to_ul[0] = cube.get_ur_to_ul() as u16;
    search.ub_to_df[0] = cube.get_ub_to_df() as u16;
    search.parity[0] = cube.get_parity();
    search.min_dist_phase1[0] = search.phase1_prune(
        search.fr_to_br[0] as usize / 24,
        search.flip[0] as usize,
        search.twist[0] as usize,
    );

    let mut d = match mode {
        Mode::Optimal => 1,
        Mode::Fast => search.min_dist_phase1[0] as usize,
    };

    loop {
        search.axis[1] = NO_AXIS;
        search.power[1] = 2;
        match search.phase1_dfs(d, total_max, phase2_cap) {
            Ok(Some((n1, n2))) => return Ok(search.solution_string(n1, n2)),
            Ok(None) => {
                if d >= total_max {
                    return Err(Error::NoSolutionInLimit);
                }
                d = match mode {
                    Mode::Optimal => d + 1,
                    Mode::Fast => d + 7,
                };
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn solved_cube_returns_empty_string() {
        assert_eq!(solve(SOLVED, 24, 5.0, Mode::Optimal), "");
    }

    #[test]
    fn move_to_string_matches_notation() {
        assert_eq!(move_to_string(0, 0), "U");
        assert_eq!(move_to_string(0, 1), "U2");
        assert_eq!(move_to_string(0, 2), "U'");
        assert_eq!(move_to_string(1, 2), "R'");
    }

    #[test]
    fn invalid_length_is_reported() {
        assert_eq!(
            solve("UUU", 24, 5.0, Mode::Optimal),
            "Error: invalid cubestring length"
        );
    }

    #[test]
    fn single_r_move_solves_with_r_prime() {
        let mut cube = CubieCube::new_solved();
        cube.multiply(&crate::cubie::R_MOVE);
        let fc = FaceCube::from_cubie(&cube);
        let sol = solve(&fc.to_string(), 24, 5.0, Mode::Optimal);
        assert_eq!(sol, "R'");
    }

    #[test]
    fn six_commutators_return_to_solved() {
        let mut r_inv = CubieCube::new_solved();
        for _ in 0..3 {
            r_inv.multiply(&crate::cubie::R_MOVE);
        }
        let mut u_inv = CubieCube::new_solved();
        for _ in 0..3 {
            u_inv.multiply(&crate::cubie::U_MOVE);
        }

        let mut cube = CubieCube::new_solved();
        for _ in 0..6 {
            cube.multiply(&crate::cubie::R_MOVE);
            cube.multiply(&crate::cubie::U_MOVE);
            cube.multiply(&r_inv);
            cube.multiply(&u_inv);
        }
        assert_eq!(cube, CubieCube::new_solved());

        let fc = FaceCube::from_cubie(&cube);
        assert_eq!(solve(&fc.to_string(), 24, 5.0, Mode::Optimal), "");
    }

    #[test]
    fn bad_parity_input_is_rejected() {
        let mut fc = FaceCube::solved();
        fc.facelets.swap(1, 19); // swap a U edge sticker with an F edge sticker
        let result = solve(&fc.to_string(), 24, 5.0, Mode::Optimal);
        assert!(result.starts_with("Error: "));
    }
}
