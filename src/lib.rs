//! # kociemba
//! `kociemba`: crate for manipulating and solving the 3x3 Rubik's cube with
//! [Kociemba's two phase algorithm](http://kociemba.org/cube.htm).
//!
//! The entry point most callers want is [`solve`]: give it a 54-character
//! facelet string and it returns a space-separated move sequence, or an
//! `"Error: ..."` string describing what was wrong with the input.

#[macro_use]
extern crate lazy_static;

/// Error define.
pub mod error;

/// Module containing 3x3 cube constants.
pub mod constants;

/// Module for combinatorial coordinate codecs shared by the cubie model.
pub mod coord;

/// Module for represent a cube on the cubie level.
pub mod cubie;

/// Module for represent a cube on the facelet level.
pub mod facelet;

/// Module for represent moves and create/load move tables.
pub mod moves;

/// Module for create/load pruning tables. The pruning tables cut the search tree during the search.
pub mod pruning;

/// On-disk cache bundling every generated table into one versioned file.
pub mod cache;

/// Process-wide lazily-initialized table singleton.
pub mod tables;

/// Module containing functions for parsing/formatting move sequences.
pub mod scramble;

/// The two-phase IDA* search.
pub mod solver;

pub use crate::cubie::CubieCube;
pub use crate::error::Error;
pub use crate::facelet::FaceCube;
pub use crate::moves::Move;
pub use crate::solver::{solve, Mode};
