//! The cubie-level cube model: corner/edge permutation and orientation,
//! the multiplication law, validity checks, and the ten coordinate codecs
//! (spec.md §3, §4.1, §4.2).

use crate::coord::{decode_perm, encode_perm, CNK};
use crate::error::Error;

/// Sentinel written into `ep`/`cp` slots while a `set_*` codec is still
/// distributing a partial permutation. Never a valid corner/edge id.
const UNSET: u8 = 255;

/// A cube at the cubie level: permutation and orientation of the 8 corners
/// and 12 edges. `cp[i]` is the home identity of the corner currently
/// sitting in slot `i`; `co[i]`/`eo[i]` its twist/flip in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [u8; 8],
    pub co: [u8; 8],
    pub ep: [u8; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::new_solved()
    }
}

/// Outcome of [`CubieCube::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Ok,
    BadEdgePerm,
    BadCornerPerm,
    BadFlip,
    BadTwist,
    BadParity,
}

impl CubieCube {
    pub fn new_solved() -> Self {
        Self {
            cp: [0, 1, 2, 3, 4, 5, 6, 7],
            co: [0; 8],
            ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            eo: [0; 12],
        }
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::new_solved()
    }

    /// `self = self . b`, restricted to the corner half. Table generation
    /// for edge-only coordinates never calls this: edge state is
    /// irrelevant to the corner half and vice versa.
    pub fn corner_multiply(&mut self, b: &CubieCube) {
        let mut cp = [0u8; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[b.cp[i] as usize];
            co[i] = (self.co[b.cp[i] as usize] + b.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// `self = self . b`, restricted to the edge half.
    pub fn edge_multiply(&mut self, b: &CubieCube) {
        let mut ep = [0u8; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[b.ep[i] as usize];
            eo[i] = (self.eo[b.ep[i] as usize] + b.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// `self = self . b` over both halves.
    pub fn multiply(&mut self, b: &CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Left-multiply by a generator: `self = gen . self`. Used by the
    /// search and by facelet round-trip tests, where a move is always
    /// prepended to the cube reached so far.
    pub fn left_multiply(&mut self, gen: &CubieCube) {
        let mut g = *gen;
        g.multiply(self);
        *self = g;
    }

    pub fn corner_parity(&self) -> u8 {
        let mut s: u32 = 0;
        for i in (1..8).rev() {
            for j in (0..i).rev() {
                if self.cp[j] > self.cp[i] {
                    s += 1;
                }
            }
        }
        (s % 2) as u8
    }

    pub fn edge_parity(&self) -> u8 {
        let mut s: u32 = 0;
        for i in (1..12).rev() {
            for j in (0..i).rev() {
                if self.ep[j] > self.ep[i] {
                    s += 1;
                }
            }
        }
        (s % 2) as u8
    }

    pub fn verify(&self) -> Verification {
        let mut seen_c = [false; 8];
        for &c in &self.cp {
            if c as usize >= 8 || seen_c[c as usize] {
                return Verification::BadCornerPerm;
            }
            seen_c[c as usize] = true;
        }
        let mut seen_e = [false; 12];
        for &e in &self.ep {
            if e as usize >= 12 || seen_e[e as usize] {
                return Verification::BadEdgePerm;
            }
            seen_e[e as usize] = true;
        }
        if self.co.iter().map(|&x| x as u32).sum::<u32>() % 3 != 0 {
            return Verification::BadTwist;
        }
        if self.eo.iter().map(|&x| x as u32).sum::<u32>() % 2 != 0 {
            return Verification::BadFlip;
        }
        if self.corner_parity() != self.edge_parity() {
            return Verification::BadParity;
        }
        Verification::Ok
    }

    pub fn is_solvable(&self) -> bool {
        self.verify() == Verification::Ok
    }

    pub fn verify_result(&self) -> Result<(), Error> {
        match self.verify() {
            Verification::Ok => Ok(()),
            Verification::BadCornerPerm => Err(Error::BadCorner),
            Verification::BadEdgePerm => Err(Error::BadEdge),
            Verification::BadTwist => Err(Error::BadTwist),
            Verification::BadFlip => Err(Error::BadFlip),
            Verification::BadParity => Err(Error::BadParity),
        }
    }

    // ---- twist: corner-orientation coordinate, 0..2186 -----------------

    pub fn get_twist(&self) -> u16 {
        let mut ret: u16 = 0;
        for i in 0..7 {
            ret = 3 * ret + self.co[i] as u16;
        }
        ret
    }

    pub fn set_twist(&mut self, mut twist: u16) {
        let mut parity: i32 = 0;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            parity += self.co[i] as i32;
            twist /= 3;
        }
        self.co[7] = ((3 - parity % 3) % 3) as u8;
    }

    // ---- flip: edge-orientation coordinate, 0..2047 ---------------------

    pub fn get_flip(&self) -> u16 {
        let mut ret: u16 = 0;
        for i in 0..11 {
            ret = 2 * ret + self.eo[i] as u16;
        }
        ret
    }

    pub fn set_flip(&mut self, mut flip: u16) {
        let mut parity: i32 = 0;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            parity += self.eo[i] as i32;
            flip /= 2;
        }
        self.eo[11] = ((2 - parity % 2) % 2) as u8;
    }

    // ---- FRtoBR: placement+order of the four E-slice edges, 0..11879 ---
    // slice = FRtoBR / 24.

    pub fn get_fr_to_br(&self) -> u16 {
        let mut a: u32 = 0;
        let mut x: usize = 0;
        let mut edge4 = [0u8; 4];
        for j in (0..12).rev() {
            if self.ep[j] >= 8 {
                a += CNK[11 - j][x + 1];
                edge4[3 - x] = self.ep[j];
                x += 1;
            }
        }
        let targets = [8u8, 9, 10, 11];
        let b = encode_perm(&mut edge4, &targets);
        (24 * a + b) as u16
    }

    pub fn set_fr_to_br(&mut self, idx: u16) {
        let b = (idx % 24) as u32;
        let mut a = (idx / 24) as u32;
        let targets = [8u8, 9, 10, 11];
        let slice_edge = decode_perm(&targets, b);
        self.ep = [UNSET; 12];
        let mut x: i32 = 3;
        for j in 0..12 {
            if x >= 0 && a >= CNK[11 - j][(x + 1) as usize] {
                self.ep[j] = slice_edge[(3 - x) as usize];
                a -= CNK[11 - j][(x + 1) as usize];
                x -= 1;
            }
        }
        let other = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let mut k = 0;
        for j in 0..12 {
            if self.ep[j] == UNSET {
                self.ep[j] = other[k];
                k += 1;
            }
        }
        self.eo = [0; 12];
    }

    pub fn get_slice(&self) -> u16 {
        self.get_fr_to_br() / 24
    }

    // ---- URFtoDLF: ordered placement of the six named corners, 0..20159

    pub fn get_urf_to_dlf(&self) -> u32 {
        let mut a: u32 = 0;
        let mut x: usize = 0;
        let mut corner6 = [0u8; 6];
        for j in (0..8).rev() {
            if self.cp[j] <= 5 {
                a += CNK[7 - j][x + 1];
                corner6[5 - x] = self.cp[j];
                x += 1;
            }
        }
        let targets = [0u8, 1, 2, 3, 4, 5];
        let b = encode_perm(&mut corner6, &targets);
        720 * a + b
    }

    pub fn set_urf_to_dlf(&mut self, idx: u32) {
        let b = idx % 720;
        let mut a = idx / 720;
        let targets = [0u8, 1, 2, 3, 4, 5];
        let corner6 = decode_perm(&targets, b);
        self.cp = [UNSET; 8];
        let mut x: i32 = 5;
        for j in 0..8 {
            if x >= 0 && a >= CNK[7 - j][(x + 1) as usize] {
                self.cp[j] = corner6[(5 - x) as usize];
                a -= CNK[7 - j][(x + 1) as usize];
                x -= 1;
            }
        }
        let other = [6u8, 7];
        let mut k = 0;
        for j in 0..8 {
            if self.cp[j] == UNSET {
                self.cp[j] = other[k];
                k += 1;
            }
        }
        self.co = [0; 8];
    }

    // ---- URtoUL / UBtoDF: placement+order of three named edges among
    // all 12 positions, 0..1319. Tracked throughout phase 1.

    fn get_named3(&self, ids: [u8; 3]) -> u32 {
        let mut a: u32 = 0;
        let mut x: usize = 0;
        let mut edge3 = [0u8; 3];
        for j in (0..12).rev() {
            if ids.contains(&self.ep[j]) {
                a += CNK[11 - j][x + 1];
                edge3[2 - x] = self.ep[j];
                x += 1;
            }
        }
        let b = encode_perm(&mut edge3, &ids);
        6 * a + b
    }

    fn set_named3(&mut self, ids: [u8; 3], idx: u32) {
        let b = idx % 6;
        let mut a = idx / 6;
        let edge3 = decode_perm(&ids, b);
        self.ep = [UNSET; 12];
        let mut x: i32 = 2;
        for j in 0..12 {
            if x >= 0 && a >= CNK[11 - j][(x + 1) as usize] {
                self.ep[j] = edge3[(2 - x) as usize];
                a -= CNK[11 - j][(x + 1) as usize];
                x -= 1;
            }
        }
        let other: Vec<u8> = (0u8..12).filter(|v| !ids.contains(v)).collect();
        let mut k = 0;
        for j in 0..12 {
            if self.ep[j] == UNSET {
                self.ep[j] = other[k];
                k += 1;
            }
        }
        self.eo = [0; 12];
    }

    pub fn get_ur_to_ul(&self) -> u32 {
        self.get_named3([0, 1, 2])
    }

    pub fn set_ur_to_ul(&mut self, idx: u32) {
        self.set_named3([0, 1, 2], idx)
    }

    pub fn get_ub_to_df(&self) -> u32 {
        self.get_named3([3, 4, 5])
    }

    pub fn set_ub_to_df(&mut self, idx: u32) {
        self.set_named3([3, 4, 5], idx)
    }

    // ---- restricted (0..335) variants used only to build the merge
    // table, valid only once the E-slice edges occupy FR/FL/BL/BR
    // exclusively (i.e. at the phase 1 -> phase 2 boundary), so the three
    // named edges are guaranteed to lie among the 8 U/D-layer positions.

    fn get_named3_restricted(&self, ids: [u8; 3]) -> u16 {
        let mut a: u32 = 0;
        let mut x: usize = 0;
        let mut edge3 = [0u8; 3];
        for j in (0..8).rev() {
            if ids.contains(&self.ep[j]) {
                a += CNK[7 - j][x + 1];
                edge3[2 - x] = self.ep[j];
                x += 1;
            }
        }
        let b = encode_perm(&mut edge3, &ids);
        (6 * a + b) as u16
    }

    fn set_named3_restricted(&mut self, ids: [u8; 3], idx: u16) {
        let b = (idx % 6) as u32;
        let mut a = (idx / 6) as u32;
        let edge3 = decode_perm(&ids, b);
        for j in 0..8 {
            self.ep[j] = UNSET;
        }
        let mut x: i32 = 2;
        for j in 0..8 {
            if x >= 0 && a >= CNK[7 - j][(x + 1) as usize] {
                self.ep[j] = edge3[(2 - x) as usize];
                a -= CNK[7 - j][(x + 1) as usize];
                x -= 1;
            }
        }
    }

    pub fn get_ur_to_ul_restricted(&self) -> u16 {
        self.get_named3_restricted([0, 1, 2])
    }

    pub fn set_ur_to_ul_restricted(&mut self, idx: u16) {
        self.set_named3_restricted([0, 1, 2], idx)
    }

    pub fn get_ub_to_df_restricted(&self) -> u16 {
        self.get_named3_restricted([3, 4, 5])
    }

    pub fn set_ub_to_df_restricted(&mut self, idx: u16) {
        self.set_named3_restricted([3, 4, 5], idx)
    }

    // ---- URtoDF: ordered placement of the six U/D-layer edges among the
    // eight U/D-layer positions, 0..20159. Phase-2 valid only.

    pub fn get_ur_to_df(&self) -> u32 {
        let mut a: u32 = 0;
        let mut x: usize = 0;
        let mut edge6 = [0u8; 6];
        for j in (0..8).rev() {
            if self.ep[j] <= 5 {
                a += CNK[7 - j][x + 1];
                edge6[5 - x] = self.ep[j];
                x += 1;
            }
        }
        let targets = [0u8, 1, 2, 3, 4, 5];
        let b = encode_perm(&mut edge6, &targets);
        720 * a + b
    }

    pub fn set_ur_to_df(&mut self, idx: u32) {
        let b = idx % 720;
        let mut a = idx / 720;
        let targets = [0u8, 1, 2, 3, 4, 5];
        let edge6 = decode_perm(&targets, b);
        for j in 0..8 {
            self.ep[j] = UNSET;
        }
        let mut x: i32 = 5;
        for j in 0..8 {
            if x >= 0 && a >= CNK[7 - j][(x + 1) as usize] {
                self.ep[j] = edge6[(5 - x) as usize];
                a -= CNK[7 - j][(x + 1) as usize];
                x -= 1;
            }
        }
        let other = [6u8, 7];
        let mut k = 0;
        for j in 0..8 {
            if self.ep[j] == UNSET {
                self.ep[j] = other[k];
                k += 1;
            }
        }
        self.ep[8] = 8;
        self.ep[9] = 9;
        self.ep[10] = 10;
        self.ep[11] = 11;
        self.eo = [0; 12];
    }

    pub fn get_parity(&self) -> u8 {
        self.corner_parity()
    }
}

/// The basic six face-turn generators, literal per spec.md §6. Corner
/// order URF,UFL,ULB,UBR,DFR,DLF,DBL,DRB; edge order
/// UR,UF,UL,UB,DR,DF,DL,DB,FR,FL,BL,BR. Standard Kociemba cube constants.
pub const U_MOVE: CubieCube = CubieCube {
    cp: [3, 0, 1, 2, 4, 5, 6, 7],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const R_MOVE: CubieCube = CubieCube {
    cp: [4, 1, 2, 0, 7, 5, 6, 3],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const F_MOVE: CubieCube = CubieCube {
    cp: [1, 5, 2, 3, 0, 4, 6, 7],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

pub const D_MOVE: CubieCube = CubieCube {
    cp: [0, 1, 2, 3, 5, 6, 7, 4],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const L_MOVE: CubieCube = CubieCube {
    cp: [0, 2, 6, 3, 4, 1, 5, 7],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const B_MOVE: CubieCube = CubieCube {
    cp: [0, 1, 3, 7, 4, 5, 2, 6],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The six generators in `U,R,F,D,L,B` axis order (axis index 0..5).
pub fn basic_move_cubes() -> [CubieCube; 6] {
    [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE]
}

/// Corner permutation parity after applying move `m` (`3*axis+power`) to a
/// cube currently at parity `p`. Every quarter turn is a 4-cycle on the
/// corners (odd); every half turn is two transpositions (even).
pub fn parity_after_move(p: u8, m: usize) -> u8 {
    if m % 3 == 1 {
        p
    } else {
        p ^ 1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_cube_verifies_ok() {
        assert_eq!(CubieCube::new_solved().verify(), Verification::Ok);
    }

    #[test]
    fn four_quarter_turns_is_identity() {
        for gen in basic_move_cubes() {
            let mut c = CubieCube::new_solved();
            for _ in 0..4 {
                c.multiply(&gen);
            }
            assert_eq!(c, CubieCube::new_solved());
            assert_eq!(c.verify(), Verification::Ok);
        }
    }

    #[test]
    fn generators_preserve_validity() {
        let mut c = CubieCube::new_solved();
        for gen in basic_move_cubes().iter().cycle().take(11) {
            c.multiply(gen);
            assert_eq!(c.verify(), Verification::Ok);
        }
    }

    #[test]
    fn twist_roundtrips() {
        for t in [0u16, 1, 42, 2186] {
            let mut c = CubieCube::new_solved();
            c.set_twist(t);
            assert_eq!(c.get_twist(), t);
            assert_eq!(c.co.iter().map(|&x| x as u32).sum::<u32>() % 3, 0);
        }
    }

    #[test]
    fn flip_roundtrips() {
        for f in [0u16, 1, 777, 2047] {
            let mut c = CubieCube::new_solved();
            c.set_flip(f);
            assert_eq!(c.get_flip(), f);
            assert_eq!(c.eo.iter().map(|&x| x as u32).sum::<u32>() % 2, 0);
        }
    }

    #[test]
    fn fr_to_br_roundtrips() {
        for idx in [0u16, 1, 5000, 11879] {
            let mut c = CubieCube::new_solved();
            c.set_fr_to_br(idx);
            assert_eq!(c.get_fr_to_br(), idx);
            assert_eq!(c.verify(), Verification::Ok);
        }
    }

    #[test]
    fn urf_to_dlf_roundtrips() {
        for idx in [0u32, 1, 10_000, 20_159] {
            let mut c = CubieCube::new_solved();
            c.set_urf_to_dlf(idx);
            assert_eq!(c.get_urf_to_dlf(), idx);
            assert_eq!(c.verify(), Verification::Ok);
        }
    }

    #[test]
    fn ur_to_ul_and_ub_to_df_roundtrip() {
        for idx in [0u32, 1, 600, 1319] {
            let mut c = CubieCube::new_solved();
            c.set_ur_to_ul(idx);
            assert_eq!(c.get_ur_to_ul(), idx);

            let mut c = CubieCube::new_solved();
            c.set_ub_to_df(idx);
            assert_eq!(c.get_ub_to_df(), idx);
        }
    }

    #[test]
    fn ur_to_df_roundtrips() {
        for idx in [0u32, 1, 15_000, 20_159] {
            let mut c = CubieCube::new_solved();
            c.set_ur_to_df(idx);
            assert_eq!(c.get_ur_to_df(), idx);
            assert_eq!(c.verify(), Verification::Ok);
        }
    }

    #[test]
    fn restricted_named3_roundtrips() {
        for idx in [0u16, 1, 200, 335] {
            let mut c = CubieCube::new_solved();
            c.set_ur_to_ul_restricted(idx);
            assert_eq!(c.get_ur_to_ul_restricted(), idx);
        }
    }

    #[test]
    fn bad_twist_is_detected() {
        let mut c = CubieCube::new_solved();
        c.co[0] = 1; // breaks sum % 3 == 0
        assert_eq!(c.verify(), Verification::BadTwist);
    }

    #[test]
    fn bad_parity_is_detected() {
        let mut c = CubieCube::new_solved();
        c.cp.swap(0, 1); // odd corner permutation, even edge permutation
        assert_eq!(c.verify(), Verification::BadParity);
    }
}
