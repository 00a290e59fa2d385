//! Process-wide table singleton: load the cache if it is fresh, otherwise
//! generate every move and pruning table from scratch and write it back.
//! One `lazy_static` so every call into [`crate::solver::solve`] within a
//! process pays the generation cost at most once (spec.md §5, §9).

use std::env;
use std::path::PathBuf;

use crate::cache;
use crate::moves::MoveTables;
use crate::pruning::PruningTables;

pub struct Tables {
    pub moves: MoveTables,
    pub pruning: PruningTables,
}

fn cache_path() -> PathBuf {
    env::temp_dir().join("kociemba_tables.bin")
}

impl Tables {
    fn build() -> Tables {
        if let Some((moves, pruning)) = cache::load(cache_path()) {
            return Tables { moves, pruning };
        }

        eprintln!("kociemba: generating move tables...");
        let moves = MoveTables::generate();
        eprintln!("kociemba: generating pruning tables...");
        let pruning = PruningTables::generate(&moves);
        cache::save(cache_path(), &moves, &pruning);
        Tables { moves, pruning }
    }
}

lazy_static! {
    pub static ref TABLES: Tables = Tables::build();
}
