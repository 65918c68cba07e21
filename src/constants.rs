//! Cube-wide numeric constants: move/coordinate space sizes and the
//! combinatorial helpers the cubie and table-builder modules share.

use crate::cubie::{Corner, Edge};

pub const ALL_CORNERS: [Corner; 8] = [
    Corner::URF,
    Corner::UFL,
    Corner::ULB,
    Corner::UBR,
    Corner::DFR,
    Corner::DLF,
    Corner::DBL,
    Corner::DRB,
];

pub const ALL_EDGES: [Edge; 12] = [
    Edge::UR,
    Edge::UF,
    Edge::UL,
    Edge::UB,
    Edge::DR,
    Edge::DF,
    Edge::DL,
    Edge::DB,
    Edge::FR,
    Edge::FL,
    Edge::BL,
    Edge::BR,
];

/// Number of face moves (6 faces x 3 turn counts).
pub const N_MOVE: usize = 18;
/// The ten moves that preserve membership in G1: U/D (all three turn counts)
/// and R2/F2/L2/B2. Indexed as in [`ALL_MOVES`][crate::moves::ALL_MOVES].
pub const N_MOVE_PHASE2: usize = 10;

/// 3^7 corner-orientation classes.
pub const N_TWIST: usize = 2187;
/// 2^11 edge-orientation classes.
pub const N_FLIP: usize = 2048;
/// C(12,4) x 4! positions+permutation of the four E-slice edges.
pub const N_SLICE_SORTED: usize = 11880;
/// 4! ways to permute the E-slice edges among their chosen positions.
pub const N_PERM_4: usize = 24;
/// C(12,4), the E-slice edges' choice of positions, ignoring their order.
pub const N_SLICE: usize = N_SLICE_SORTED / N_PERM_4;
/// C(8,6) x 6!, corners {0..5}'s choice of slots and relative order.
pub const N_CORNER_PERM: usize = 20160;
/// C(8,6) x 6!, UD edges {0..5}'s choice of slots (restricted to the eight
/// non-slice slots, valid only once the cube is in G1) and relative order.
pub const N_UD_EDGE_PERM: usize = 20160;
/// C(12,3) x 3!, edges {UR,UF,UL}'s choice of slots and relative order.
pub const N_UR_TO_UL: usize = 1320;
/// C(12,3) x 3!, edges {UB,DR,DF}'s choice of slots and relative order.
pub const N_UB_TO_DF: usize = 1320;
/// Only values below this ever arise from a cube already in G1; the merge
/// table is dimensioned on this bound rather than the full 1320.
pub const N_MERGE: usize = 336;
/// Corner-permutation parity, {0,1}.
pub const N_PARITY: usize = 2;

/// Packed-nibble "unvisited" marker used while building pruning tables.
pub const PRUNING_UNVISITED: u8 = 15;
/// No valid state needs more than this many moves in either phase's move
/// set; if a BFS layer ever exceeded it the 4-bit packing would overflow.
pub const PRUNING_MAX_DEPTH: u8 = 14;

/// Fixed capacity of the search-state depth stacks: a generous upper bound
/// on the number of moves two-phase ever needs (phase 1 + phase 2 combined).
pub const MAX_SEARCH_DEPTH: usize = 31;

/// Depth cap on phase 2 alone: a solved G1 member is never more than this
/// many phase-2 moves from solved, so the search never needs to look
/// further even when the overall budget would allow it. Distinct from
/// [`N_MOVE_PHASE2`], which counts the moves in phase 2's move set, not how
/// deep it searches with them; the two happen to share a value.
pub const MAX_PHASE2_DEPTH: u8 = 10;

/// Binomial coefficient C(n, k). By convention C(n,0) = 1 and C(n,k) = 0
/// when n < k.
pub fn c_nk(n: u32, k: u32) -> u32 {
    if n < k {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result as u32
}

/// Factorial of small n (n <= 12 suffices for every use in this crate).
pub fn factorial(n: u32) -> u32 {
    (1..=n).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_nk_matches_pascal_identities() {
        assert_eq!(c_nk(8, 6), 28);
        assert_eq!(c_nk(12, 4), 495);
        assert_eq!(c_nk(12, 3), 220);
        assert_eq!(c_nk(5, 0), 1);
        assert_eq!(c_nk(3, 5), 0);
    }

    #[test]
    fn factorial_matches_expected() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(6), 720);
        assert_eq!(factorial(4), 24);
    }

    #[test]
    fn coordinate_space_sizes_match_spec() {
        assert_eq!(N_SLICE_SORTED, c_nk(12, 4) as usize * N_PERM_4);
        assert_eq!(N_CORNER_PERM, c_nk(8, 6) as usize * factorial(6) as usize);
        assert_eq!(N_UD_EDGE_PERM, c_nk(8, 6) as usize * factorial(6) as usize);
        assert_eq!(N_UR_TO_UL, c_nk(12, 3) as usize * factorial(3) as usize);
    }
}
