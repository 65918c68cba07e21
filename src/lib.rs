//! # kociemba
//! Crate for manipulating and solving the 3x3x3 Rubik's cube with
//! [Kociemba's two-phase algorithm](http://kociemba.org/cube.htm).

/// Generic combinatorial-number-system and Lehmer-code helpers shared by
/// the cubie coordinate getters/setters.
pub mod combinatorics;

/// Cube-wide numeric constants.
pub mod constants;

/// Module for representing a cube on the coordinate level: the merge table
/// and the solver's coordinate-space view of a cube.
pub mod coord;

/// Module for representing a cube on the cubie level.
pub mod cubie;

/// Error type.
pub mod error;

/// Facelet-diagram parsing.
pub mod facelet;

/// Move notation and move tables.
pub mod moves;

/// Parser for the nine-line unfolded-cube text format.
pub mod parser;

/// Pruning tables, used to cut the IDA* search tree.
pub mod pruning;

/// Solution-string serialization.
pub mod serialize;

/// Random scramble generation.
pub mod scramble;

/// The two-phase IDA* solver.
pub mod solver;

use bincode::{
    config::{self, Configuration},
    decode_from_slice, encode_to_vec,
    error::DecodeError,
    Decode, Encode,
};
use std::{fs, path::Path};

use crate::error::Error;

const CONFIG: Configuration = config::standard();

fn write_table<P, T: Encode>(path: P, table: &T) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let encoded = encode_to_vec(table, CONFIG)?;
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encoded)?;
    Ok(())
}

fn decode_table<T: Decode>(bytes: &[u8]) -> Result<T, Error> {
    let (decoded, written) = decode_from_slice(bytes, CONFIG)?;
    let additional = bytes.len() - written;
    if additional != 0 {
        return Err(DecodeError::UnexpectedEnd { additional })?;
    }
    Ok(decoded)
}

pub use crate::cubie::CubieCube;
pub use crate::error::Error as KociembaError;
pub use crate::moves::Move;
pub use crate::solver::{solve, SolveOptions, Tables};
