//! Cubie-level cube model: the eight corners and twelve edges, their
//! permutations and orientations, and the coordinate getters/setters the
//! move-table builders and searcher operate on.

use crate::combinatorics::{decode_high, decode_low, encode_high, encode_low};
use crate::error::Error;

/// A corner cubie, named by its three facelet colors in solved position.
/// The discriminant doubles as its home slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Corner {
    URF = 0,
    UFL = 1,
    ULB = 2,
    UBR = 3,
    DFR = 4,
    DLF = 5,
    DBL = 6,
    DRB = 7,
}

impl Corner {
    pub fn from_u8(v: u8) -> Corner {
        match v {
            0 => Corner::URF,
            1 => Corner::UFL,
            2 => Corner::ULB,
            3 => Corner::UBR,
            4 => Corner::DFR,
            5 => Corner::DLF,
            6 => Corner::DBL,
            7 => Corner::DRB,
            _ => unreachable!("corner index out of range: {v}"),
        }
    }
}

/// An edge cubie, named the same way. 0–7 are the eight "UD edges" tracked
/// by `cornerPerm`/`udEdgePerm`; 8–11 are the four E-slice edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Edge {
    UR = 0,
    UF = 1,
    UL = 2,
    UB = 3,
    DR = 4,
    DF = 5,
    DL = 6,
    DB = 7,
    FR = 8,
    FL = 9,
    BL = 10,
    BR = 11,
}

impl Edge {
    pub fn from_u8(v: u8) -> Edge {
        match v {
            0 => Edge::UR,
            1 => Edge::UF,
            2 => Edge::UL,
            3 => Edge::UB,
            4 => Edge::DR,
            5 => Edge::DF,
            6 => Edge::DL,
            7 => Edge::DB,
            8 => Edge::FR,
            9 => Edge::FL,
            10 => Edge::BL,
            11 => Edge::BR,
            _ => unreachable!("edge index out of range: {v}"),
        }
    }
}

const UD_EDGES: [u8; 6] = [0, 1, 2, 3, 4, 5];
const SLICE_EDGES: [u8; 4] = [8, 9, 10, 11];
const UR_TO_UL: [u8; 3] = [0, 1, 2];
const UB_TO_DF: [u8; 3] = [3, 4, 5];
const PARTIAL_SENTINEL: u8 = 255;

/// Cubie-level permutation/orientation state of a 3x3x3 cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ],
    co: [0; 8],
    ep: [
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
    ],
    eo: [0; 12],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl CubieCube {
    pub fn solved() -> Self {
        SOLVED_CUBIE_CUBE
    }

    pub fn is_solved(&self) -> bool {
        *self == SOLVED_CUBIE_CUBE
    }

    /// Composes `self` and `other`, applying `other` on top of `self` (the
    /// same corner/edge-multiply rule used to fold a move onto a state).
    pub fn multiply(&self, other: &CubieCube) -> CubieCube {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[other.cp[i] as usize];
            co[i] = (self.co[other.cp[i] as usize] + other.co[i]) % 3;
        }

        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[other.ep[i] as usize];
            eo[i] = (self.eo[other.ep[i] as usize] + other.eo[i]) % 2;
        }

        CubieCube { cp, co, ep, eo }
    }

    /// In-place corner-only half of [`multiply`][Self::multiply]; move-table
    /// builders that only need a twist/corner-perm coordinate use this to
    /// skip the edge work.
    pub fn corner_multiply(&mut self, other: &CubieCube) {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[other.cp[i] as usize];
            co[i] = (self.co[other.cp[i] as usize] + other.co[i]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// In-place edge-only half of [`multiply`][Self::multiply].
    pub fn edge_multiply(&mut self, other: &CubieCube) {
        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[other.ep[i] as usize];
            eo[i] = (self.eo[other.ep[i] as usize] + other.eo[i]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Applies a move's cubie representation to `self` in place.
    pub fn apply_move(&mut self, mv: &CubieCube) {
        self.corner_multiply(mv);
        self.edge_multiply(mv);
    }

    pub fn get_twist(&self) -> u16 {
        let mut twist = 0u16;
        for i in 0..7 {
            twist = twist * 3 + self.co[i] as u16;
        }
        twist
    }

    pub fn set_twist(&mut self, mut twist: u16) {
        let mut sum = 0u32;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            sum += self.co[i] as u32;
            twist /= 3;
        }
        self.co[7] = ((3 - sum % 3) % 3) as u8;
    }

    pub fn get_flip(&self) -> u16 {
        let mut flip = 0u16;
        for i in 0..11 {
            flip = flip * 2 + self.eo[i] as u16;
        }
        flip
    }

    pub fn set_flip(&mut self, mut flip: u16) {
        let mut sum = 0u32;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            sum += self.eo[i] as u32;
            flip /= 2;
        }
        self.eo[11] = ((2 - sum % 2) % 2) as u8;
    }

    pub fn get_slice(&self) -> u16 {
        let ids: Vec<u8> = self.ep.iter().map(|e| *e as u8).collect();
        encode_high(&ids, 12, &SLICE_EDGES) as u16
    }

    pub fn set_slice(&mut self, slice: u16) {
        let decoded = decode_high(slice as u32, 12, &SLICE_EDGES, PARTIAL_SENTINEL);
        let mut filler = (0u8..8).into_iter();
        for i in 0..12 {
            let id = if decoded[i] == PARTIAL_SENTINEL {
                filler.next().expect("eight non-slice ids to fill eight gaps")
            } else {
                decoded[i]
            };
            self.ep[i] = Edge::from_u8(id);
        }
    }

    pub fn get_corner_perm(&self) -> u16 {
        let ids: Vec<u8> = self.cp.iter().map(|c| *c as u8).collect();
        encode_low(&ids, 8, &UD_EDGES) as u16
    }

    pub fn set_corner_perm(&mut self, perm: u16) {
        let decoded = decode_low(perm as u32, 8, &UD_EDGES, PARTIAL_SENTINEL);
        let mut filler = (6u8..8).into_iter();
        for i in 0..8 {
            let id = if decoded[i] == PARTIAL_SENTINEL {
                filler.next().expect("two leftover corners to fill two gaps")
            } else {
                decoded[i]
            };
            self.cp[i] = Corner::from_u8(id);
        }
    }

    /// Well-defined only once the cube is in G1 (E-slice edges confined to
    /// positions 8–11); reads/writes only the first eight edge slots.
    pub fn get_ud_edge_perm(&self) -> u16 {
        let ids: Vec<u8> = self.ep[0..8].iter().map(|e| *e as u8).collect();
        encode_low(&ids, 8, &UD_EDGES) as u16
    }

    pub fn set_ud_edge_perm(&mut self, perm: u16) {
        let decoded = decode_low(perm as u32, 8, &UD_EDGES, PARTIAL_SENTINEL);
        let mut filler = (6u8..8).into_iter();
        for i in 0..8 {
            let id = if decoded[i] == PARTIAL_SENTINEL {
                filler.next().expect("two leftover UD edges to fill two gaps")
            } else {
                decoded[i]
            };
            self.ep[i] = Edge::from_u8(id);
        }
    }

    pub fn get_ur_to_ul(&self) -> u16 {
        let ids: Vec<u8> = self.ep.iter().map(|e| *e as u8).collect();
        encode_low(&ids, 12, &UR_TO_UL) as u16
    }

    pub fn set_ur_to_ul(&mut self, code: u16) {
        let decoded = decode_low(code as u32, 12, &UR_TO_UL, PARTIAL_SENTINEL);
        let mut filler = (0u8..12).filter(|v| !UR_TO_UL.contains(v));
        for i in 0..12 {
            let id = if decoded[i] == PARTIAL_SENTINEL {
                filler.next().expect("nine leftover edges to fill nine gaps")
            } else {
                decoded[i]
            };
            self.ep[i] = Edge::from_u8(id);
        }
    }

    pub fn get_ub_to_df(&self) -> u16 {
        let ids: Vec<u8> = self.ep.iter().map(|e| *e as u8).collect();
        encode_low(&ids, 12, &UB_TO_DF) as u16
    }

    pub fn set_ub_to_df(&mut self, code: u16) {
        let decoded = decode_low(code as u32, 12, &UB_TO_DF, PARTIAL_SENTINEL);
        let mut filler = (0u8..12).filter(|v| !UB_TO_DF.contains(v));
        for i in 0..12 {
            let id = if decoded[i] == PARTIAL_SENTINEL {
                filler.next().expect("nine leftover edges to fill nine gaps")
            } else {
                decoded[i]
            };
            self.ep[i] = Edge::from_u8(id);
        }
    }

    /// Combines a phase-1-exit cube's `urToUl` and `ubToDf` codes into the
    /// `udEdgePerm` they jointly determine. `None` if the two codes disagree
    /// on where a piece sits, or place a tracked UD edge in a slice slot.
    pub fn merge_ur_to_ul_and_ub_to_df(ur_to_ul: u16, ub_to_df: u16) -> Option<u16> {
        let a = decode_low(ur_to_ul as u32, 12, &UR_TO_UL, PARTIAL_SENTINEL);
        let b = decode_low(ub_to_df as u32, 12, &UB_TO_DF, PARTIAL_SENTINEL);

        if a[8..12].iter().any(|&v| v != PARTIAL_SENTINEL)
            || b[8..12].iter().any(|&v| v != PARTIAL_SENTINEL)
        {
            return None;
        }

        let mut merged = [PARTIAL_SENTINEL; 8];
        for i in 0..8 {
            merged[i] = match (a[i] != PARTIAL_SENTINEL, b[i] != PARTIAL_SENTINEL) {
                (true, true) => return None,
                (true, false) => a[i],
                (false, true) => b[i],
                // Neither coordinate tracks this slot: it holds DL or DB,
                // and udEdgePerm's encoding never inspects untracked ids.
                (false, false) => 6,
            };
        }
        Some(encode_low(&merged, 8, &UD_EDGES) as u16)
    }

    pub fn get_parity(&self) -> u8 {
        self.corner_parity() as u8
    }

    pub fn corner_parity(&self) -> bool {
        let mut parity = false;
        for i in (1..8).rev() {
            for j in (0..i).rev() {
                if self.cp[j] as u8 > self.cp[i] as u8 {
                    parity = !parity;
                }
            }
        }
        parity
    }

    pub fn edge_parity(&self) -> bool {
        let mut parity = false;
        for i in (1..12).rev() {
            for j in (0..i).rev() {
                if self.ep[j] as u8 > self.ep[i] as u8 {
                    parity = !parity;
                }
            }
        }
        parity
    }

    /// Structural validity: a legal cubie state reachable from solved by
    /// some sequence of face turns.
    pub fn verify(&self) -> Result<(), Error> {
        let mut seen_e = [false; 12];
        for e in self.ep.iter() {
            seen_e[*e as usize] = true;
        }
        if seen_e.iter().any(|&s| !s) {
            return Err(Error::InvalidEdgePerm);
        }

        if self.eo.iter().map(|&x| x as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::BadFlipParity);
        }

        let mut seen_c = [false; 8];
        for c in self.cp.iter() {
            seen_c[*c as usize] = true;
        }
        if seen_c.iter().any(|&s| !s) {
            return Err(Error::InvalidCornerPerm);
        }

        if self.co.iter().map(|&x| x as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::BadTwistParity);
        }

        if self.corner_parity() != self.edge_parity() {
            return Err(Error::ParityMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_has_zero_coordinates() {
        let c = CubieCube::solved();
        assert_eq!(c.get_twist(), 0);
        assert_eq!(c.get_flip(), 0);
        assert_eq!(c.get_slice(), 0);
        assert_eq!(c.get_corner_perm(), 0);
        assert_eq!(c.get_ud_edge_perm(), 0);
        assert_eq!(c.get_ur_to_ul(), 0);
        assert_eq!(c.get_parity(), 0);
    }

    #[test]
    fn solved_cube_verifies() {
        assert!(CubieCube::solved().verify().is_ok());
    }

    #[test]
    fn lone_twisted_corner_is_rejected() {
        let mut c = CubieCube::solved();
        c.co[0] = 1;
        assert_eq!(c.verify().unwrap_err().code(), Some(5));
    }

    #[test]
    fn lone_flipped_edge_is_rejected() {
        let mut c = CubieCube::solved();
        c.eo[0] = 1;
        assert_eq!(c.verify().unwrap_err().code(), Some(3));
    }

    #[test]
    fn a_single_corner_transposition_mismatches_parity() {
        let mut c = CubieCube::solved();
        c.cp.swap(0, 1);
        assert_eq!(c.verify().unwrap_err().code(), Some(6));
    }

    #[test]
    fn duplicated_edge_is_rejected() {
        let mut c = CubieCube::solved();
        c.ep[1] = c.ep[0];
        assert_eq!(c.verify().unwrap_err().code(), Some(2));
    }

    #[test]
    fn duplicated_corner_is_rejected() {
        let mut c = CubieCube::solved();
        c.cp[1] = c.cp[0];
        assert_eq!(c.verify().unwrap_err().code(), Some(4));
    }

    #[test]
    fn identity_is_a_multiplicative_identity() {
        let solved = CubieCube::solved();
        assert_eq!(solved.multiply(&solved), solved);
    }

    #[test]
    fn twist_round_trips() {
        let mut c = CubieCube::solved();
        for t in 0..crate::constants::N_TWIST as u16 {
            c.set_twist(t);
            assert_eq!(c.get_twist(), t);
        }
    }

    #[test]
    fn flip_round_trips() {
        let mut c = CubieCube::solved();
        for f in 0..crate::constants::N_FLIP as u16 {
            c.set_flip(f);
            assert_eq!(c.get_flip(), f);
        }
    }

    #[test]
    fn slice_round_trips() {
        let mut c = CubieCube::solved();
        for s in 0..crate::constants::N_SLICE_SORTED as u16 {
            c.set_slice(s);
            assert_eq!(c.get_slice(), s);
        }
    }

    #[test]
    fn corner_perm_round_trips() {
        let mut c = CubieCube::solved();
        for p in 0..crate::constants::N_CORNER_PERM as u16 {
            c.set_corner_perm(p);
            assert_eq!(c.get_corner_perm(), p);
        }
    }

    #[test]
    fn ur_to_ul_round_trips() {
        let mut c = CubieCube::solved();
        for code in 0..crate::constants::N_UR_TO_UL as u16 {
            c.set_ur_to_ul(code);
            assert_eq!(c.get_ur_to_ul(), code);
        }
    }

    #[test]
    fn ub_to_df_round_trips() {
        let mut c = CubieCube::solved();
        for code in 0..crate::constants::N_UB_TO_DF as u16 {
            c.set_ub_to_df(code);
            assert_eq!(c.get_ub_to_df(), code);
        }
    }

    #[test]
    fn ud_edge_perm_round_trips() {
        let mut c = CubieCube::solved();
        for code in 0..crate::constants::N_UD_EDGE_PERM as u16 {
            c.set_ud_edge_perm(code);
            assert_eq!(c.get_ud_edge_perm(), code);
        }
    }

    #[test]
    fn merge_recovers_ud_edge_perm_for_a_solved_split() {
        let c = CubieCube::solved();
        let merged = CubieCube::merge_ur_to_ul_and_ub_to_df(c.get_ur_to_ul(), c.get_ub_to_df());
        assert_eq!(merged, Some(0));
    }

    #[test]
    fn merge_accepts_disjoint_codes() {
        assert!(CubieCube::merge_ur_to_ul_and_ub_to_df(0, 0).is_some());
    }

    #[test]
    fn merge_rejects_overlapping_slots() {
        // Place UR, UF, UL at slots 3, 4, 5 - the same slots ubToDf's code 0
        // assigns to UB, DR, DF - so the two coordinates contend for the
        // same destinations.
        let mut perm = [PARTIAL_SENTINEL; 12];
        perm[3] = 0;
        perm[4] = 1;
        perm[5] = 2;
        let ur_to_ul = encode_low(&perm, 12, &UR_TO_UL) as u16;
        assert!(CubieCube::merge_ur_to_ul_and_ub_to_df(ur_to_ul, 0).is_none());
    }
}
