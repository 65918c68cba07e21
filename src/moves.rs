//! The eighteen face turns: their notation, their cubie-level effect, and
//! the seven move tables built from those effects.

use std::fmt;
use std::str::FromStr;

use self::Move::*;
use crate::constants::{
    N_CORNER_PERM, N_MOVE, N_SLICE_SORTED, N_TWIST, N_FLIP, N_UB_TO_DF, N_UD_EDGE_PERM,
    N_UR_TO_UL,
};
use crate::cubie::{Corner::*, CubieCube, Edge::*};
use crate::error::Error;
use crate::{decode_table, write_table};

/// Layer moves: Up, Right, Front, Down, Left, Back.
///
/// Plain is clockwise, `2` is a double turn, `3` is counter-clockwise.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

/// All eighteen moves, in move-table index order.
#[rustfmt::skip]
pub const ALL_MOVES: [Move; N_MOVE] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U),
            "U'" => Ok(U3),
            "U2" => Ok(U2),
            "R" => Ok(R),
            "R'" => Ok(R3),
            "R2" => Ok(R2),
            "F" => Ok(F),
            "F'" => Ok(F3),
            "F2" => Ok(F2),
            "D" => Ok(D),
            "D'" => Ok(D3),
            "D2" => Ok(D2),
            "L" => Ok(L),
            "L'" => Ok(L3),
            "L2" => Ok(L2),
            "B" => Ok(B),
            "B'" => Ok(B3),
            "B2" => Ok(B2),
            _ => Err(Error::InvalidScramble(s.to_string())),
        }
    }
}

#[rustfmt::skip]
impl Move {
    pub fn is_inverse(&self, other: Move) -> bool {
        matches!(
            (&self, other),
            (U | U2 | U3, D | D2 | D3)
            | (R | R2 | R3, L | L2 | L3)
            | (F | F2 | F3, B | B2 | B3),
        )
    }

    pub fn is_same_layer(&self, other: Move) -> bool {
        matches!(
            (&self, other),
            (U | U2 | U3, U | U2 | U3)
            | (D | D2 | D3, D | D2 | D3)
            | (R | R2 | R3, R | R2 | R3)
            | (L | L2 | L3, L | L2 | L3)
            | (F | F2 | F3, F | F2 | F3)
            | (B | B2 | B3, B | B2 | B3)
        )
    }

    pub fn get_inverse(self) -> Self {
        match self {
            U => U3, U3 => U,
            D => D3, D3 => D,
            R => R3, R3 => R,
            L => L3, L3 => L,
            F => F3, F3 => F,
            B => B3, B3 => B,
            _ => self,
        }
    }

    /// Whether this move stays inside G1: U/D (any turn count) or a double
    /// turn of R, F, L, B.
    pub fn is_phase2(&self) -> bool {
        matches!(self, U | U2 | U3 | D | D2 | D3 | R2 | F2 | L2 | B2)
    }

    fn cubie(&self) -> &'static CubieCube {
        let face = match self {
            U | U2 | U3 => &U_MOVE,
            R | R2 | R3 => &R_MOVE,
            F | F2 | F3 => &F_MOVE,
            D | D2 | D3 => &D_MOVE,
            L | L2 | L3 => &L_MOVE,
            B | B2 | B3 => &B_MOVE,
        };
        face
    }

    /// The number of quarter turns (1, 2 or 3) this move applies to its face.
    pub fn turn_count(&self) -> u8 {
        match self {
            U | R | F | D | L | B => 1,
            U2 | R2 | F2 | D2 | L2 | B2 => 2,
            U3 | R3 | F3 | D3 | L3 | B3 => 3,
        }
    }

    /// The bare face letter, with no turn-count or direction suffix.
    pub fn face_letter(&self) -> char {
        match self {
            U | U2 | U3 => 'U',
            R | R2 | R3 => 'R',
            F | F2 | F3 => 'F',
            D | D2 | D3 => 'D',
            L | L2 | L3 => 'L',
            B | B2 | B3 => 'B',
        }
    }
}

/// The cubie-level effect of a single quarter turn of each face.
pub const U_MOVE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const R_MOVE: CubieCube = CubieCube {
    cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
    co: [2, 0, 0, 1, 1, 0, 0, 2],
    ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const F_MOVE: CubieCube = CubieCube {
    cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
    co: [1, 2, 0, 0, 2, 1, 0, 0],
    ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
    eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

pub const D_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
    co: [0, 0, 0, 0, 0, 0, 0, 0],
    ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const L_MOVE: CubieCube = CubieCube {
    cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
    co: [0, 1, 2, 0, 0, 2, 1, 0],
    ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

pub const B_MOVE: CubieCube = CubieCube {
    cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
    co: [0, 0, 1, 2, 0, 0, 2, 1],
    ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
    eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// Builds the `CubieCube` for any of the eighteen moves by repeated
/// application of its face's quarter-turn constant.
pub fn move_cube(mv: Move) -> CubieCube {
    let mut c = CubieCube::solved();
    for _ in 0..mv.turn_count() {
        c.apply_move(mv.cubie());
    }
    c
}

impl CubieCube {
    /// Returns the cube obtained by applying `moves` in order on top of
    /// `self`.
    pub fn apply_moves(&self, moves: &[Move]) -> CubieCube {
        let mut c = *self;
        c.multiply_moves(moves);
        c
    }

    /// Applies `moves` in order to `self` in place.
    pub fn multiply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(&move_cube(mv));
        }
    }
}

pub struct MoveTables {
    pub twist_move: Vec<u16>,
    pub flip_move: Vec<u16>,
    pub slice_sorted_move: Vec<u16>,
    pub corner_perm_move: Vec<u16>,
    pub ud_edge_perm_move: Vec<u16>,
    pub ur_to_ul_move: Vec<u16>,
    pub ub_to_df_move: Vec<u16>,
}

impl MoveTables {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            twist_move: move_twist()?,
            flip_move: move_flip()?,
            slice_sorted_move: move_slice_sorted()?,
            corner_perm_move: move_corner_perm()?,
            ud_edge_perm_move: move_ud_edge_perm()?,
            ur_to_ul_move: move_ur_to_ul()?,
            ub_to_df_move: move_ub_to_df()?,
        })
    }
}

/// Move table for the corner-twist coordinate: 0 <= twist < 2187.
pub fn move_twist() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_twist";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_TWIST * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_TWIST {
        a.set_twist(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.corner_multiply(mv.cubie());
                table[N_MOVE * i + 3 * face + k] = a.get_twist();
            }
            a.corner_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the edge-flip coordinate: 0 <= flip < 2048.
pub fn move_flip() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_flip";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_FLIP * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_FLIP {
        a.set_flip(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.edge_multiply(mv.cubie());
                table[N_MOVE * i + 3 * face + k] = a.get_flip();
            }
            a.edge_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the combined position+permutation of the four E-slice
/// edges: 0 <= slice_sorted < 11880. Carrying the full sorted coordinate
/// (rather than just the 495-valued position) gives phase 2 the slice
/// edges' relative order for free at the phase boundary.
pub fn move_slice_sorted() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_slice_sorted";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_SLICE_SORTED * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_SLICE_SORTED {
        a.set_slice(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.edge_multiply(mv.cubie());
                table[N_MOVE * i + 3 * face + k] = a.get_slice();
            }
            a.edge_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the corner-permutation coordinate: 0 <= corner_perm < 20160.
pub fn move_corner_perm() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_corner_perm";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_CORNER_PERM * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_CORNER_PERM {
        a.set_corner_perm(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.corner_multiply(mv.cubie());
                table[N_MOVE * i + 3 * face + k] = a.get_corner_perm();
            }
            a.corner_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for the UD-edge-permutation coordinate, meaningful only once
/// the cube is in G1: 0 <= ud_edge_perm < 20160. Only the ten phase-2 moves
/// are ever read back out of this table; the other nine slots per row are
/// left at 0.
pub fn move_ud_edge_perm() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_ud_edge_perm";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_UD_EDGE_PERM * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_UD_EDGE_PERM {
        a.set_ud_edge_perm(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.edge_multiply(mv.cubie());
                let full = ALL_MOVES[3 * face + k];
                if full.is_phase2() {
                    table[N_MOVE * i + 3 * face + k] = a.get_ud_edge_perm();
                }
            }
            a.edge_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for `urToUl`: 0 <= ur_to_ul < 1320.
pub fn move_ur_to_ul() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_ur_to_ul";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_UR_TO_UL * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_UR_TO_UL {
        a.set_ur_to_ul(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.edge_multiply(mv.cubie());
                table[N_MOVE * i + 3 * face + k] = a.get_ur_to_ul();
            }
            a.edge_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

/// Move table for `ubToDf`: 0 <= ub_to_df < 1320.
pub fn move_ub_to_df() -> Result<Vec<u16>, Error> {
    let fname = "tables/move_ub_to_df";
    let cached = std::fs::read(fname).unwrap_or_default();
    if !cached.is_empty() {
        return decode_table(&cached);
    }
    println!("Creating {fname} table...");
    let mut table = vec![0u16; N_UB_TO_DF * N_MOVE];
    let mut a = CubieCube::solved();
    for i in 0..N_UB_TO_DF {
        a.set_ub_to_df(i as u16);
        for (face, mv) in [U, R, F, D, L, B].iter().enumerate() {
            for k in 0..3 {
                a.edge_multiply(mv.cubie());
                table[N_MOVE * i + 3 * face + k] = a.get_ub_to_df();
            }
            a.edge_multiply(mv.cubie());
        }
    }
    write_table(fname, &table)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_scramble_notation() {
        assert_eq!(U.to_string(), "U");
        assert_eq!(U3.to_string(), "U'");
        assert_eq!(R2.to_string(), "R2");
    }

    #[test]
    fn from_str_round_trips_through_display() {
        for mv in ALL_MOVES {
            assert_eq!(Move::from_str(&mv.to_string()).unwrap(), mv);
        }
    }

    #[test]
    fn get_inverse_is_involutive() {
        for mv in ALL_MOVES {
            assert_eq!(mv.get_inverse().get_inverse(), mv);
        }
    }

    #[test]
    fn quarter_turn_applied_four_times_is_identity() {
        for face_cube in [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE] {
            let mut c = CubieCube::solved();
            for _ in 0..4 {
                c.apply_move(&face_cube);
            }
            assert_eq!(c, CubieCube::solved());
        }
    }

    #[test]
    fn double_turn_is_two_quarter_turns() {
        let mut once = CubieCube::solved();
        once.apply_move(&R_MOVE);
        once.apply_move(&R_MOVE);
        assert_eq!(move_cube(R2), once);
    }

    #[test]
    fn phase2_moves_are_exactly_ten() {
        assert_eq!(ALL_MOVES.iter().filter(|m| m.is_phase2()).count(), 10);
    }

    #[test]
    fn apply_moves_matches_repeated_apply_move() {
        let scramble = [R, U, R3, U3, F2, L];
        let mut expected = CubieCube::solved();
        for &mv in &scramble {
            expected.apply_move(&move_cube(mv));
        }
        assert_eq!(CubieCube::solved().apply_moves(&scramble), expected);
    }

    #[test]
    fn move_twist_table_preserves_zero_at_identity_column() {
        let table = move_twist().unwrap();
        // Applying no move (computed indirectly: U then U' cancels) returns
        // to the same twist value.
        let u = table[0 * N_MOVE + Move::U as usize];
        let back = table[u as usize * N_MOVE + Move::U3 as usize];
        assert_eq!(back, 0);
    }

    #[test]
    fn twist_table_agrees_with_the_cubie_model() {
        let table = move_twist().unwrap();
        let mut c = CubieCube::solved();
        for twist in 0..N_TWIST as u16 {
            c.set_twist(twist);
            for mv in ALL_MOVES {
                let mut applied = c;
                applied.apply_move(&move_cube(mv));
                assert_eq!(table[N_MOVE * twist as usize + mv as usize], applied.get_twist());
            }
        }
    }

    #[test]
    fn flip_table_agrees_with_the_cubie_model() {
        let table = move_flip().unwrap();
        let mut c = CubieCube::solved();
        for flip in 0..N_FLIP as u16 {
            c.set_flip(flip);
            for mv in ALL_MOVES {
                let mut applied = c;
                applied.apply_move(&move_cube(mv));
                assert_eq!(table[N_MOVE * flip as usize + mv as usize], applied.get_flip());
            }
        }
    }

    #[test]
    fn corner_perm_table_agrees_with_the_cubie_model() {
        let table = move_corner_perm().unwrap();
        let mut c = CubieCube::solved();
        for perm in 0..N_CORNER_PERM as u16 {
            c.set_corner_perm(perm);
            for mv in ALL_MOVES {
                let mut applied = c;
                applied.apply_move(&move_cube(mv));
                assert_eq!(
                    table[N_MOVE * perm as usize + mv as usize],
                    applied.get_corner_perm()
                );
            }
        }
    }

    #[test]
    fn parity_move_matches_the_cubie_model_for_every_move() {
        use crate::pruning::parity_move;
        for mv in ALL_MOVES {
            let expected = move_cube(mv).get_parity();
            assert_eq!(
                parity_move(mv),
                expected,
                "{mv} turn count {} should flip parity iff it's a quarter turn",
                mv.turn_count()
            );
        }
    }
}
