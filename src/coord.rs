//! Coordinate-level view of a cube used by the searcher, and the merge
//! table that fuses the two small `urToUl`/`ubToDf` edge coordinates into
//! the full `udEdgePerm` a phase-2 search needs.

use crate::constants::N_MERGE;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::{decode_table, write_table};

/// All seven search coordinates plus parity, read directly off a cubie
/// state. Only used at the start of a solve to seed the search; the hot
/// loop never rebuilds one of these, it only updates individual coordinate
/// integers via the move tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordCube {
    pub twist: u16,
    pub flip: u16,
    /// The combined position+permutation coordinate of the four E-slice
    /// edges, 0..11880. `slice / 24` is the phase-1 `slicePos`.
    pub slice_sorted: u16,
    pub corner_perm: u16,
    pub ud_edge_perm: u16,
    pub ur_to_ul: u16,
    pub ub_to_df: u16,
    pub parity: u8,
}

impl From<&CubieCube> for CoordCube {
    fn from(cube: &CubieCube) -> Self {
        Self {
            twist: cube.get_twist(),
            flip: cube.get_flip(),
            slice_sorted: cube.get_slice(),
            corner_perm: cube.get_corner_perm(),
            ud_edge_perm: cube.get_ud_edge_perm(),
            ur_to_ul: cube.get_ur_to_ul(),
            ub_to_df: cube.get_ub_to_df(),
            parity: cube.get_parity(),
        }
    }
}

impl CoordCube {
    pub fn slice_pos(&self) -> u16 {
        self.slice_sorted / 24
    }
}

/// `merge[urToUl][ubToDf] -> udEdgePerm`, dimensioned 336x336: only the
/// first 336 of the 1320 possible `urToUl`/`ubToDf` values ever arise from a
/// cube that actually reached the end of phase 1, because a phase-1 exit
/// state confines every tracked edge to the eight non-slice slots.
pub struct MergeTable {
    table: Vec<i16>,
}

impl MergeTable {
    pub fn new() -> Result<Self, Error> {
        let fname = "tables/merge_ud_edges";
        let cached = std::fs::read(fname).unwrap_or_default();
        if !cached.is_empty() {
            return Ok(Self {
                table: decode_table(&cached)?,
            });
        }
        println!("Creating {fname} table...");
        let mut table = vec![-1i16; N_MERGE * N_MERGE];
        for ur_to_ul in 0..N_MERGE as u16 {
            for ub_to_df in 0..N_MERGE as u16 {
                if let Some(merged) = CubieCube::merge_ur_to_ul_and_ub_to_df(ur_to_ul, ub_to_df) {
                    table[N_MERGE * ur_to_ul as usize + ub_to_df as usize] = merged as i16;
                }
            }
        }
        write_table(fname, &table)?;
        Ok(Self { table })
    }

    /// `None` for a pair that never arises from a real phase-1 exit (the two
    /// partial placements disagree on a shared slot).
    pub fn get(&self, ur_to_ul: u16, ub_to_df: u16) -> Option<u16> {
        match self.table[N_MERGE * ur_to_ul as usize + ub_to_df as usize] {
            -1 => None,
            v => Some(v as u16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_has_zero_coordinates() {
        let coords = CoordCube::from(&CubieCube::solved());
        assert_eq!(coords.twist, 0);
        assert_eq!(coords.flip, 0);
        assert_eq!(coords.slice_sorted, 0);
        assert_eq!(coords.slice_pos(), 0);
        assert_eq!(coords.corner_perm, 0);
        assert_eq!(coords.ud_edge_perm, 0);
        assert_eq!(coords.parity, 0);
    }

    #[test]
    fn merge_recovers_solved_ud_edge_perm() {
        let merge = MergeTable::new().unwrap();
        assert_eq!(merge.get(0, 0), Some(0));
    }

    #[test]
    fn merge_rejects_overlapping_slots() {
        use crate::combinatorics::encode_low;

        let merge = MergeTable::new().unwrap();
        // Place UR, UF, UL (ids 0,1,2) at slots 3,4,5 - exactly where
        // ub_to_df's solved code (0) puts UB, DR, DF - so the two partial
        // placements contend for the same destinations.
        const PARTIAL_SENTINEL: u8 = 255;
        const UR_TO_UL: [u8; 3] = [0, 1, 2];
        let mut perm = [PARTIAL_SENTINEL; 12];
        perm[3] = 0;
        perm[4] = 1;
        perm[5] = 2;
        let ur_to_ul = encode_low(&perm, 12, &UR_TO_UL) as u16;
        assert_eq!(merge.get(ur_to_ul, 0), None);
    }
}
