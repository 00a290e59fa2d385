//! Reference tables fixed by the geometry of the 3x3x3 cube: the facelet
//! indices touched by each corner/edge slot, and the colors a solved cube
//! shows at each slot. These are the "canonical references" spec.md §6
//! requires to be reproduced bit-exact; they never change and are never
//! derived from anything else.

use crate::facelet::Color;

/// Number of coordinate move indices: 6 axes x 3 powers.
pub const N_MOVE: usize = 18;

/// 3^7: corner-orientation coordinate range (8th corner's twist is determined).
pub const N_TWIST: usize = 2187;
/// 2^11: edge-orientation coordinate range (12th edge's flip is determined).
pub const N_FLIP: usize = 2048;
/// `C(12,4) * 4!`: placement and order of the four E-slice edges.
pub const N_FRTOBR: usize = 11880;
/// `C(12,4)`: placement only of the four E-slice edges.
pub const N_SLICE: usize = 495;
/// `8*7*6*5*4*3`: ordered placement of the six named corners.
pub const N_URFTODLF: usize = 20160;
/// `C(12,3) * 3!`: placement and order of edges UR, UF, UL.
pub const N_URTOUL: usize = 1320;
/// `C(12,3) * 3!`: placement and order of edges UB, DR, DF.
pub const N_UBTODF: usize = 1320;
/// `8!`: placement and order of all six U/D-layer edges (phase-2 valid only).
pub const N_URTODF: usize = 20160;
/// Corner permutation parity: even or odd.
pub const N_PARITY: usize = 2;
/// Phase-2 `FRtoBR` range: combination is always 0 once in G1, so only the
/// 4! permutation part of `FRtoBR` varies.
pub const N_SLICE2: usize = 24;
/// `4!`: the permutation component folded into `N_FRTOBR` / `N_URTODF`.
pub const N_PERM_4: usize = 24;

/// For each corner slot, the three facelet indices in (U/D, clockwise-next,
/// clockwise-prev) order, as laid out in spec.md §4.3.
pub const CORNER_FACELET: [[u8; 3]; 8] = [
    [8, 9, 20],   // URF
    [6, 18, 38],  // UFL
    [0, 36, 47],  // ULB
    [2, 45, 11],  // UBR
    [29, 26, 15], // DFR
    [27, 44, 24], // DLF
    [33, 53, 42], // DBL
    [35, 17, 51], // DRB
];

/// For each edge slot, the two facelet indices in (primary, secondary) order.
pub const EDGE_FACELET: [[u8; 2]; 12] = [
    [5, 10],  // UR
    [7, 19],  // UF
    [3, 37],  // UL
    [1, 46],  // UB
    [32, 16], // DR
    [28, 25], // DF
    [30, 43], // DL
    [34, 52], // DB
    [23, 12], // FR
    [21, 41], // FL
    [50, 39], // BL
    [48, 14], // BR
];

/// Reference colors at each corner slot on a solved cube, matching the
/// facelet order in [`CORNER_FACELET`].
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Reference colors at each edge slot on a solved cube, matching the
/// facelet order in [`EDGE_FACELET`].
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

/// The ten G1-preserving moves `{U, U2, U', R2, F2, D, D2, D', L2, B2}`
/// under the `3*axis + power` numbering (spec.md §4.5).
pub const PHASE2_MOVES: [usize; 10] = [0, 1, 2, 4, 7, 9, 10, 11, 13, 16];
