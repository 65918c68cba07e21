//! The two-phase IDA* solver: phase 1 brings a cube into the subgroup G1
//! (edges oriented, corners oriented, E-slice edges confined to the middle
//! layer), phase 2 solves it the rest of the way using only moves that keep
//! it in G1.

use std::time::{Duration, Instant};

use crate::constants::{MAX_PHASE2_DEPTH, MAX_SEARCH_DEPTH, N_MOVE};
use crate::coord::{CoordCube, MergeTable};
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::Move::{self, *};
use crate::moves::{MoveTables, ALL_MOVES};
use crate::pruning::{parity_move, PruningTables, PHASE2_MOVES};

/// The three precomputed table sets a solve needs, bundled into one owning
/// handle so a caller builds them once (a few seconds, mostly spent on the
/// pruning tables) and reuses them across many solves.
pub struct Tables {
    pub moves: MoveTables,
    pub merge: MergeTable,
    pub pruning: PruningTables,
}

impl Tables {
    pub fn new() -> Result<Self, Error> {
        let moves = MoveTables::new()?;
        let merge = MergeTable::new()?;
        let pruning = PruningTables::new(&moves)?;
        Ok(Self {
            moves,
            merge,
            pruning,
        })
    }
}

/// Search limits for a single solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Longest total solution (phase 1 + phase 2 moves) the search will
    /// consider.
    pub max_depth: u8,
    /// Wall-clock budget for the whole search.
    pub timeout: Duration,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_depth: 25,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Finds a move sequence that solves `cube`, as an IDA* search that deepens
/// over the combined phase-1/phase-2 move count.
pub fn solve(cube: &CubieCube, tables: &Tables, options: &SolveOptions) -> Result<Vec<Move>, Error> {
    cube.verify()?;
    if cube.is_solved() {
        return Ok(Vec::new());
    }

    debug_assert!(
        options.max_depth as usize <= MAX_SEARCH_DEPTH,
        "max_depth exceeds the fixed search-path capacity"
    );

    let start = CoordCube::from(cube);
    let mut search = Search {
        tables,
        deadline: Instant::now() + options.timeout,
    };

    let h1_start = tables.pruning.h1(start.twist, start.flip, start.slice_pos());
    let mut depth_max = h1_start;
    let mut path = SearchPath::new();
    while depth_max <= options.max_depth {
        path.reset();
        if search.phase1(start, None, depth_max, &mut path)? {
            return Ok(path.to_vec());
        }
        depth_max += 1;
    }
    Err(Error::DepthExhausted)
}

/// The move sequence a search builds up, backed by a fixed-capacity array
/// rather than a growable `Vec`: depth never exceeds [`MAX_SEARCH_DEPTH`],
/// so no allocation happens once a search is under way.
struct SearchPath {
    moves: [Move; MAX_SEARCH_DEPTH],
    len: usize,
}

impl SearchPath {
    fn new() -> Self {
        Self {
            moves: [Move::U; MAX_SEARCH_DEPTH],
            len: 0,
        }
    }

    fn reset(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    fn pop(&mut self) {
        self.len -= 1;
    }

    fn truncate(&mut self, len: usize) {
        self.len = len;
    }

    fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    fn to_vec(&self) -> Vec<Move> {
        self.as_slice().to_vec()
    }
}

/// The coordinate state phase 2 searches over, established once a phase-1
/// search reaches a G1 member.
#[derive(Debug, Clone, Copy)]
struct Phase2State {
    corner_perm: u16,
    ud_edge_perm: u16,
    slice_perm: u16,
    parity: u8,
}

struct Search<'a> {
    tables: &'a Tables,
    deadline: Instant,
}

/// Rejects a move that repeats the previous move's face, or that turns the
/// "big" face of an axis (D, L, B) immediately after its "small" partner (U,
/// R, F) already turned - the two ways a branch can be reordered into one
/// already explored. Since opposite-face moves commute, only one of the two
/// orderings needs to be explored; the other is pruned here.
fn allowed_next(last: Option<Move>, next: Move) -> bool {
    let Some(last) = last else {
        return true;
    };
    let diff = face_index(last) as i8 - face_index(next) as i8;
    diff != 0 && diff != -3
}

fn face_index(m: Move) -> u8 {
    match m {
        U | U2 | U3 => 0,
        R | R2 | R3 => 1,
        F | F2 | F3 => 2,
        D | D2 | D3 => 3,
        L | L2 | L3 => 4,
        B | B2 | B3 => 5,
    }
}

impl<'a> Search<'a> {
    fn check_deadline(&self) -> Result<(), Error> {
        if Instant::now() > self.deadline {
            return Err(Error::Timeout);
        }
        Ok(())
    }

    /// Depth-first search over {twist, flip, slicePos} with all eighteen
    /// moves. Whenever a node is a G1 member it hands off to phase 2 with
    /// whatever budget is left, then keeps deepening regardless of whether
    /// that succeeded: a longer phase-1 prefix can still admit a phase-2
    /// solution a shorter one didn't.
    fn phase1(
        &mut self,
        state: CoordCube,
        last: Option<Move>,
        togo: u8,
        path: &mut SearchPath,
    ) -> Result<bool, Error> {
        self.check_deadline()?;

        let h = self.tables.pruning.h1(state.twist, state.flip, state.slice_pos());
        if h > togo {
            return Ok(false);
        }

        if h == 0 {
            let ud_edge_perm = self
                .tables
                .merge
                .get(state.ur_to_ul, state.ub_to_df)
                .expect("a phase-1 boundary state always merges into a valid udEdgePerm");
            let boundary = Phase2State {
                corner_perm: state.corner_perm,
                ud_edge_perm,
                slice_perm: state.slice_sorted % 24,
                parity: state.parity,
            };
            // togo here is exactly maxDepth - depthPhase1, so capping it at
            // MAX_PHASE2_DEPTH gives min(10, maxDepth - depthPhase1) as §4.3 step 1
            // requires: phase 2 is never handed more budget than it can use.
            let max_phase2 = togo.min(MAX_PHASE2_DEPTH);
            let depth_phase1 = path.len;
            if self.phase2(boundary, None, max_phase2, path)? {
                let at_full_limit = path.len as u8 == togo + depth_phase1 as u8;
                let ordering_ok = path.len == depth_phase1
                    || allowed_next(last, path.as_slice()[depth_phase1]);
                if at_full_limit || ordering_ok {
                    return Ok(true);
                }
                // The boundary tie-break rejected this result: it reorders into a
                // sequence already explored elsewhere. Undo it and keep searching
                // other phase-1 continuations.
                path.truncate(depth_phase1);
            }
        }

        if togo == 0 {
            return Ok(false);
        }

        for mv in ALL_MOVES {
            if !allowed_next(last, mv) {
                continue;
            }
            let next = self.apply_phase1_move(state, mv);
            path.push(mv);
            if self.phase1(next, Some(mv), togo - 1, path)? {
                return Ok(true);
            }
            path.pop();
        }
        Ok(false)
    }

    fn apply_phase1_move(&self, state: CoordCube, mv: Move) -> CoordCube {
        let m = mv as usize;
        let mt = &self.tables.moves;
        CoordCube {
            twist: mt.twist_move[N_MOVE * state.twist as usize + m],
            flip: mt.flip_move[N_MOVE * state.flip as usize + m],
            slice_sorted: mt.slice_sorted_move[N_MOVE * state.slice_sorted as usize + m],
            corner_perm: mt.corner_perm_move[N_MOVE * state.corner_perm as usize + m],
            ud_edge_perm: 0,
            ur_to_ul: mt.ur_to_ul_move[N_MOVE * state.ur_to_ul as usize + m],
            ub_to_df: mt.ub_to_df_move[N_MOVE * state.ub_to_df as usize + m],
            parity: state.parity ^ parity_move(mv),
        }
    }

    /// Depth-first search over {cornerPerm, udEdgePerm, slicePerm, parity}
    /// with the ten G1-preserving moves.
    fn phase2(
        &mut self,
        state: Phase2State,
        last: Option<Move>,
        togo: u8,
        path: &mut SearchPath,
    ) -> Result<bool, Error> {
        self.check_deadline()?;

        let h = self.tables.pruning.h2(
            state.corner_perm,
            state.ud_edge_perm,
            state.slice_perm,
            state.parity,
        );
        if h > togo {
            return Ok(false);
        }
        if h == 0 {
            return Ok(true);
        }
        if togo == 0 {
            return Ok(false);
        }

        for mv in PHASE2_MOVES {
            if !allowed_next(last, mv) {
                continue;
            }
            let next = self.apply_phase2_move(state, mv);
            path.push(mv);
            if self.phase2(next, Some(mv), togo - 1, path)? {
                return Ok(true);
            }
            path.pop();
        }
        Ok(false)
    }

    fn apply_phase2_move(&self, state: Phase2State, mv: Move) -> Phase2State {
        let m = mv as usize;
        let mt = &self.tables.moves;
        Phase2State {
            corner_perm: mt.corner_perm_move[N_MOVE * state.corner_perm as usize + m],
            ud_edge_perm: mt.ud_edge_perm_move[N_MOVE * state.ud_edge_perm as usize + m],
            slice_perm: mt.slice_sorted_move[N_MOVE * state.slice_perm as usize + m],
            parity: state.parity ^ parity_move(mv),
        }
    }
}
