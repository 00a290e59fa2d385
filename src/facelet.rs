//! Facelet-level cube model and its conversion to/from the cubie model
//! (spec.md §4.3). A facelet string is a fixed, length-54 sticker layout;
//! see the module-level GLOSSARY entry "Facelet string" for the exact
//! index convention (`U1..U9, R1..R9, F1..F9, D1..D9, L1..L9, B1..B9`).

use std::fmt;
use std::str::FromStr;

use crate::constants::{CORNER_COLOR, CORNER_FACELET, EDGE_COLOR, EDGE_FACELET};
use crate::cubie::CubieCube;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Color {
    fn from_byte(b: u8) -> Option<Color> {
        match b {
            b'U' => Some(Color::U),
            b'R' => Some(Color::R),
            b'F' => Some(Color::F),
            b'D' => Some(Color::D),
            b'L' => Some(Color::L),
            b'B' => Some(Color::B),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Color::U => 'U',
            Color::R => 'R',
            Color::F => 'F',
            Color::D => 'D',
            Color::L => 'L',
            Color::B => 'B',
        }
    }
}

/// Facelet index of each face's center sticker, in `U,R,F,D,L,B` order.
const CENTERS: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// A cube described by the 54 stickers a human would read off, one
/// `Color` per facelet index `0..54`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCube {
    pub facelets: [Color; 54],
}

impl FromStr for FaceCube {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bytes = s.as_bytes();
        if bytes.len() != 54 {
            return Err(Error::InvalidLength);
        }
        let mut facelets = [Color::U; 54];
        for (i, &b) in bytes.iter().enumerate() {
            facelets[i] = Color::from_byte(b).ok_or(Error::BadCharacter)?;
        }
        let expected_centers = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];
        for (face, &idx) in CENTERS.iter().enumerate() {
            if facelets[idx] != expected_centers[face] {
                return Err(Error::BadCenter);
            }
        }
        let mut counts = [0u32; 6];
        for &c in &facelets {
            counts[c as usize] += 1;
        }
        if counts.iter().any(|&n| n != 9) {
            return Err(Error::BadColorCount);
        }
        Ok(FaceCube { facelets })
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.facelets {
            write!(f, "{}", c.as_char())?;
        }
        Ok(())
    }
}

impl FaceCube {
    pub fn solved() -> Self {
        let mut facelets = [Color::U; 54];
        let faces = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];
        for (face, &color) in faces.iter().enumerate() {
            for i in 0..9 {
                facelets[face * 9 + i] = color;
            }
        }
        FaceCube { facelets }
    }

    /// Read off the cubie-level permutation and orientation implied by the
    /// stickers. Orientation is found by matching the sticker colors seen
    /// at a slot, in reading order, against [`CORNER_COLOR`]/[`EDGE_COLOR`]
    /// under rotation.
    pub fn to_cubie(&self) -> Result<CubieCube, Error> {
        let mut cp = [0u8; 8];
        let mut co = [0u8; 8];
        for (slot, facelet_idx) in CORNER_FACELET.iter().enumerate() {
            let colors: Vec<Color> = facelet_idx
                .iter()
                .map(|&i| self.facelets[i as usize])
                .collect();
            let ori = colors
                .iter()
                .position(|&c| c == Color::U || c == Color::D)
                .ok_or(Error::BadCorner)?;
            let rotated = [colors[ori], colors[(ori + 1) % 3], colors[(ori + 2) % 3]];
            let corner = CORNER_COLOR
                .iter()
                .position(|&ref_colors| ref_colors == rotated)
                .ok_or(Error::BadCorner)?;
            cp[slot] = corner as u8;
            co[slot] = ori as u8;
        }

        let mut ep = [0u8; 12];
        let mut eo = [0u8; 12];
        for (slot, facelet_idx) in EDGE_FACELET.iter().enumerate() {
            let colors = [
                self.facelets[facelet_idx[0] as usize],
                self.facelets[facelet_idx[1] as usize],
            ];
            if let Some(edge) = EDGE_COLOR.iter().position(|&rc| rc == colors) {
                ep[slot] = edge as u8;
                eo[slot] = 0;
            } else if let Some(edge) = EDGE_COLOR
                .iter()
                .position(|&rc| rc == [colors[1], colors[0]])
            {
                ep[slot] = edge as u8;
                eo[slot] = 1;
            } else {
                return Err(Error::BadEdge);
            }
        }

        Ok(CubieCube { cp, co, ep, eo })
    }

    /// The inverse of [`to_cubie`]: paints each facelet from the cubie's
    /// permutation and orientation.
    pub fn from_cubie(cube: &CubieCube) -> FaceCube {
        let mut fc = FaceCube::solved();
        for (slot, facelet_idx) in CORNER_FACELET.iter().enumerate() {
            let corner = cube.cp[slot] as usize;
            let ori = cube.co[slot] as usize;
            for k in 0..3 {
                fc.facelets[facelet_idx[k] as usize] = CORNER_COLOR[corner][(k + 3 - ori) % 3];
            }
        }
        for (slot, facelet_idx) in EDGE_FACELET.iter().enumerate() {
            let edge = cube.ep[slot] as usize;
            let ori = cube.eo[slot] as usize;
            for k in 0..2 {
                fc.facelets[facelet_idx[k] as usize] = EDGE_COLOR[edge][(k + 2 - ori) % 2];
            }
        }
        fc
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn solved_string_parses() {
        let fc: FaceCube = FaceCube::solved().to_string().parse().unwrap();
        assert_eq!(fc, FaceCube::solved());
    }

    #[test]
    fn solved_roundtrips_through_cubie() {
        let cube = FaceCube::solved().to_cubie().unwrap();
        assert_eq!(cube, CubieCube::new_solved());
        assert_eq!(FaceCube::from_cubie(&cube), FaceCube::solved());
    }

    #[test]
    fn generator_moves_roundtrip_through_facelets() {
        for gen in crate::cubie::basic_move_cubes() {
            let fc = FaceCube::from_cubie(&gen);
            let back = fc.to_cubie().unwrap();
            assert_eq!(back, gen);
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            "UUU".parse::<FaceCube>(),
            Err(Error::InvalidLength)
        ));
    }

    #[test]
    fn bad_character_is_rejected() {
        let mut s = FaceCube::solved().to_string();
        s.replace_range(0..1, "X");
        assert!(matches!(s.parse::<FaceCube>(), Err(Error::BadCharacter)));
    }

    #[test]
    fn bad_color_count_is_rejected() {
        let mut s = FaceCube::solved().to_string().into_bytes();
        s[0] = b'R'; // now has 10 R's and 8 U's, but U0 isn't a center so this stays parseable length-wise
        let s = String::from_utf8(s).unwrap();
        assert!(matches!(s.parse::<FaceCube>(), Err(Error::BadColorCount)));
    }

    #[test]
    fn wrong_center_is_rejected() {
        let mut s = FaceCube::solved().to_string().into_bytes();
        s[4] = b'R'; // U face center must read 'U'
        let s = String::from_utf8(s).unwrap();
        assert!(matches!(s.parse::<FaceCube>(), Err(Error::BadCenter)));
    }
}
