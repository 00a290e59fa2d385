//! A single versioned cache file bundling every generated table
//! (spec.md §4.6, §9). Bump [`CACHE_VERSION`] whenever a table's layout or
//! generation algorithm changes; a version mismatch or any read/decode
//! failure is treated as a cache miss, not an error — the caller
//! regenerates from scratch and the write failure (if any) is logged and
//! otherwise ignored, since a missing cache only costs startup time.

use std::fs;
use std::path::Path;

use bincode::config::{self, Configuration};
use bincode::{Decode, Encode};

use crate::moves::MoveTables;
use crate::pruning::PruningTables;

pub const CONFIG: Configuration = config::standard();

/// Bump on any change to the shape or generation of the cached tables.
pub const CACHE_VERSION: u32 = 1;

#[derive(Encode, Decode)]
pub struct CachedTables {
    version: u32,
    twist_move: Vec<u16>,
    flip_move: Vec<u16>,
    fr_to_br_move: Vec<u16>,
    urf_to_dlf_move: Vec<u16>,
    ur_to_ul_move: Vec<u16>,
    ub_to_df_move: Vec<u16>,
    ur_to_df_move: Vec<u16>,
    merge: Vec<i32>,
    slice_flip_prun: Vec<u8>,
    slice_twist_prun: Vec<u8>,
    slice2_urf_to_dlf_parity_prun: Vec<u8>,
    slice2_ur_to_df_parity_prun: Vec<u8>,
}

impl CachedTables {
    pub fn bundle(moves: &MoveTables, prun: &PruningTables) -> CachedTables {
        CachedTables {
            version: CACHE_VERSION,
            twist_move: moves.twist_move.clone(),
            flip_move: moves.flip_move.clone(),
            fr_to_br_move: moves.fr_to_br_move.clone(),
            urf_to_dlf_move: moves.urf_to_dlf_move.clone(),
            ur_to_ul_move: moves.ur_to_ul_move.clone(),
            ub_to_df_move: moves.ub_to_df_move.clone(),
            ur_to_df_move: moves.ur_to_df_move.clone(),
            merge: moves.merge.clone(),
            slice_flip_prun: prun.slice_flip_prun.clone(),
            slice_twist_prun: prun.slice_twist_prun.clone(),
            slice2_urf_to_dlf_parity_prun: prun.slice2_urf_to_dlf_parity_prun.clone(),
            slice2_ur_to_df_parity_prun: prun.slice2_ur_to_df_parity_prun.clone(),
        }
    }

    pub fn into_tables(self) -> (MoveTables, PruningTables) {
        (
            MoveTables {
                twist_move: self.twist_move,
                flip_move: self.flip_move,
                fr_to_br_move: self.fr_to_br_move,
                urf_to_dlf_move: self.urf_to_dlf_move,
                ur_to_ul_move: self.ur_to_ul_move,
                ub_to_df_move: self.ub_to_df_move,
                ur_to_df_move: self.ur_to_df_move,
                merge: self.merge,
            },
            PruningTables {
                slice_flip_prun: self.slice_flip_prun,
                slice_twist_prun: self.slice_twist_prun,
                slice2_urf_to_dlf_parity_prun: self.slice2_urf_to_dlf_parity_prun,
                slice2_ur_to_df_parity_prun: self.slice2_ur_to_df_parity_prun,
            },
        )
    }
}

/// Load the cache at `path`, but only if it parses and its version
/// matches. Any failure, including a stale version, returns `None`.
pub fn load<P: AsRef<Path>>(path: P) -> Option<(MoveTables, PruningTables)> {
    let bytes = fs::read(path).ok()?;
    let (cached, _): (CachedTables, usize) =
        bincode::decode_from_slice(&bytes, CONFIG).ok()?;
    if cached.version != CACHE_VERSION {
        return None;
    }
    Some(cached.into_tables())
}

/// Write the cache, logging but not failing on error: a cache write is an
/// optimization, never a precondition for solving.
pub fn save<P: AsRef<Path>>(path: P, moves: &MoveTables, prun: &PruningTables) {
    let bundle = CachedTables::bundle(moves, prun);
    match bincode::encode_to_vec(&bundle, CONFIG) {
        Ok(bytes) => {
            if let Err(e) = fs::write(path, bytes) {
                eprintln!("kociemba: failed to write table cache: {e}");
            }
        }
        Err(e) => eprintln!("kociemba: failed to encode table cache: {e}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn roundtrips_through_bytes() {
        let moves = MoveTables {
            twist_move: vec![1, 2, 3],
            flip_move: vec![4],
            fr_to_br_move: vec![5],
            urf_to_dlf_move: vec![6],
            ur_to_ul_move: vec![7],
            ub_to_df_move: vec![8],
            ur_to_df_move: vec![9],
            merge: vec![-1, 2],
        };
        let prun = PruningTables {
            slice_flip_prun: vec![0xff],
            slice_twist_prun: vec![0x0f],
            slice2_urf_to_dlf_parity_prun: vec![0x00],
            slice2_ur_to_df_parity_prun: vec![0x12],
        };
        let bundle = CachedTables::bundle(&moves, &prun);
        let bytes = bincode::encode_to_vec(&bundle, CONFIG).unwrap();
        let (decoded, _): (CachedTables, usize) =
            bincode::decode_from_slice(&bytes, CONFIG).unwrap();
        assert_eq!(decoded.version, CACHE_VERSION);
        let (m2, p2) = decoded.into_tables();
        assert_eq!(m2.twist_move, moves.twist_move);
        assert_eq!(p2.slice_twist_prun, prun.slice_twist_prun);
    }

    #[test]
    fn stale_version_is_rejected_as_a_miss() {
        let moves = MoveTables {
            twist_move: vec![],
            flip_move: vec![],
            fr_to_br_move: vec![],
            urf_to_dlf_move: vec![],
            ur_to_ul_move: vec![],
            ub_to_df_move: vec![],
            ur_to_df_move: vec![],
            merge: vec![],
        };
        let prun = PruningTables {
            slice_flip_prun: vec![],
            slice_twist_prun: vec![],
            slice2_urf_to_dlf_parity_prun: vec![],
            slice2_ur_to_df_parity_prun: vec![],
        };
        let mut bundle = CachedTables::bundle(&moves, &prun);
        bundle.version = CACHE_VERSION + 1;
        let bytes = bincode::encode_to_vec(&bundle, CONFIG).unwrap();
        let tmp = std::env::temp_dir().join("kociemba_test_stale_cache.bin");
        fs::write(&tmp, bytes).unwrap();
        assert!(load(&tmp).is_none());
        let _ = fs::remove_file(&tmp);
    }
}
