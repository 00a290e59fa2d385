use std::{fmt, str::FromStr};

use self::Move::*;
use crate::constants::*;
use crate::cubie::{basic_move_cubes, CubieCube};
use crate::error::Error;

/// Layer moves, Up, Right, Front, Down, Left, Back.
///
/// No suffix: clockwise quarter turn. `2`: half turn. `3`: counter-clockwise
/// quarter turn. Numbered `3*axis + power` in `U,R,F,D,L,B` axis order,
/// matching [`PHASE2_MOVES`] and every move-table index used in this crate.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

impl Move {
    pub fn from_index(i: usize) -> Move {
        ALL_MOVES[i]
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl CubieCube {
    /// Apply a single move to this cube in place.
    pub fn apply_move(&mut self, m: Move) {
        let gens = basic_move_cubes();
        let axis = m.index() / 3;
        let power = m.index() % 3;
        for _ in 0..=power {
            self.multiply(&gens[axis]);
        }
    }

    /// Apply a move sequence in order, e.g. to replay a scramble or a
    /// returned solution for verification.
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply_move(m);
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble(s.to_string())),
        }
    }
}

#[rustfmt::skip]
impl Move {
    pub fn is_inverse(&self, other: Move) -> bool {
        matches!(
            (&self, other),
            (U | U2 | U3, D | D2 | D3)
            | (R | R2 | R3, L | L2 | L3)
            | (F | F2 | F3, B | B2 | B3),
        )
    }

    pub fn is_same_layer(&self, other: Move) -> bool {
        matches!(
            (&self, other),
            (U | U2 | U3, U | U2 | U3)
            | (D | D2 | D3, D | D2 | D3)
            | (R | R2 | R3, R | R2 | R3)
            | (L | L2 | L3, L | L2 | L3)
            | (F | F2 | F3, F | F2 | F3)
            | (B | B2 | B3, B | B2 | B3)
        )
    }

    pub fn get_inverse(self) -> Self {
        match self {
            U => U3, U3 => U, U2 => U2,
            D => D3, D3 => D, D2 => D2,
            R => R3, R3 => R, R2 => R2,
            L => L3, L3 => L, L2 => L2,
            F => F3, F3 => F, F2 => F2,
            B => B3, B3 => B, B2 => B2,
        }
    }
}

/// Every move-transition table a coordinate needs to track itself across a
/// single move, plus the merge table that reassembles `URtoDF` at the
/// phase 1 -> phase 2 boundary.
///
/// Each `*_move[N_MOVE * coord + m]` entry is the coordinate reached by
/// applying move `m` to the canonical cube at coordinate `coord`. Built
/// once by [`MoveTables::generate`] and otherwise read-only.
pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub fr_to_br_move: Vec<u16>,
    pub urf_to_dlf_move: Vec<u16>,
    pub ur_to_ul_move: Vec<u16>,
    pub ub_to_df_move: Vec<u16>,
    pub ur_to_df_move: Vec<u16>,
    /// `merge[336 * ur_to_ul_restricted + ub_to_df_restricted]`: the unified
    /// `URtoDF` coordinate, or `-1` when the two sub-permutations overlap.
    pub merge: Vec<i32>,
}

fn build_coord_move_table<F, G>(n_coord: usize, set: F, get: G) -> Vec<u16>
where
    F: Fn(&mut CubieCube, u32),
    G: Fn(&CubieCube) -> u32,
{
    let gens = basic_move_cubes();
    let mut table = vec![0u16; n_coord * N_MOVE];
    for coord in 0..n_coord {
        let mut a = CubieCube::new_solved();
        set(&mut a, coord as u32);
        for axis in 0..6 {
            for power in 0..3 {
                a.multiply(&gens[axis]);
                table[N_MOVE * coord + 3 * axis + power] = get(&a) as u16;
            }
            // restore before the next axis; three applications of a
            // quarter turn undo the previous three and leave `a` as it was
            // right after `set`.
            a.multiply(&gens[axis]);
        }
    }
    table
}

fn gen_merge_table() -> Vec<i32> {
    let mut table = vec![-1i32; 336 * 336];
    for ur_to_ul in 0..336u16 {
        let mut a = CubieCube::new_solved();
        a.set_ur_to_ul_restricted(ur_to_ul);
        for ub_to_df in 0..336u16 {
            let mut b = CubieCube::new_solved();
            b.set_ub_to_df_restricted(ub_to_df);
            let mut conflict = false;
            for i in 0..8 {
                if a.ep[i] != 255 {
                    if b.ep[i] != 255 {
                        conflict = true;
                        break;
                    }
                    b.ep[i] = a.ep[i];
                }
            }
            if conflict {
                continue;
            }
            let other = [6u8, 7];
            let mut k = 0;
            for i in 0..8 {
                if b.ep[i] == 255 {
                    b.ep[i] = other[k];
                    k += 1;
                }
            }
            b.ep[8] = 8;
            b.ep[9] = 9;
            b.ep[10] = 10;
            b.ep[11] = 11;
            table[336 * ur_to_ul as usize + ub_to_df as usize] = b.get_ur_to_df() as i32;
        }
    }
    table
}

impl MoveTables {
    pub fn generate() -> MoveTables {
        MoveTables {
            twist_move: build_coord_move_table(
                N_TWIST,
                |c, v| c.set_twist(v as u16),
                |c| c.get_twist() as u32,
            ),
            flip_move: build_coord_move_table(
                N_FLIP,
                |c, v| c.set_flip(v as u16),
                |c| c.get_flip() as u32,
            ),
            fr_to_br_move: build_coord_move_table(
                N_FRTOBR,
                |c, v| c.set_fr_to_br(v as u16),
                |c| c.get_fr_to_br() as u32,
            ),
            urf_to_dlf_move: build_coord_move_table(
                N_URFTODLF,
                CubieCube::set_urf_to_dlf,
                CubieCube::get_urf_to_dlf,
            ),
            ur_to_ul_move: build_coord_move_table(
                N_URTOUL,
                CubieCube::set_ur_to_ul,
                CubieCube::get_ur_to_ul,
            ),
            ub_to_df_move: build_coord_move_table(
                N_UBTODF,
                CubieCube::set_ub_to_df,
                CubieCube::get_ub_to_df,
            ),
            ur_to_df_move: build_coord_move_table(
                N_URTODF,
                CubieCube::set_ur_to_df,
                CubieCube::get_ur_to_df,
            ),
            merge: gen_merge_table(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn move_from_str_and_display_roundtrip() {
        for m in ALL_MOVES {
            let s = m.to_string();
            let back: Move = s.parse().unwrap();
            assert_eq!(m, back);
        }
    }

    #[test]
    fn get_inverse_is_involutive() {
        for m in ALL_MOVES {
            assert_eq!(m.get_inverse().get_inverse(), m);
        }
    }

    #[test]
    fn invalid_move_string_errors() {
        assert!(matches!("Q".parse::<Move>(), Err(Error::InvalidScramble(_))));
    }

    #[test]
    fn twist_move_table_matches_direct_application() {
        let t = build_coord_move_table(
            N_TWIST,
            |c, v| c.set_twist(v as u16),
            |c| c.get_twist() as u32,
        );
        let gens = basic_move_cubes();
        let mut a = CubieCube::new_solved();
        a.set_twist(123);
        let mut direct = a;
        direct.multiply(&gens[1]); // R
        assert_eq!(t[N_MOVE * 123 + 3], direct.get_twist());
    }

    #[test]
    fn merge_table_recovers_solved_ur_to_df() {
        let merge = gen_merge_table();
        // both restricted coordinates at 0 describe the solved UD-layer edges.
        assert_eq!(merge[336 * 0 + 0], 0);
    }

    #[test]
    fn apply_moves_undoes_with_inverse_sequence() {
        let mut cube = CubieCube::new_solved();
        cube.apply_moves(&[R, U, F2, D3, L, B2]);
        cube.apply_moves(&[B2, L3, D, F2, U3, R3]);
        assert_eq!(cube, CubieCube::new_solved());
    }
}
