//! Scramble notation: parsing and formatting a space-separated move list,
//! and generating a random one.

use std::str::FromStr;

use rand::Rng;

use crate::error::Error;
use crate::moves::{Move, ALL_MOVES};

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random sequence of `length` moves, each legal after the one before it:
/// never immediately repeating a face, and never turning one face of an
/// axis right after its opposite already turned (the same canonicalization
/// the searcher itself uses, which also happens to be what keeps a random
/// scramble from quietly cancelling itself out).
pub fn random_scramble(length: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut moves = Vec::with_capacity(length);
    let mut last: Option<Move> = None;
    while moves.len() < length {
        let candidate = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
        if let Some(last) = last {
            if face_index(last) == face_index(candidate)
                || face_index(last) as i8 - face_index(candidate) as i8 == -3
            {
                continue;
            }
        }
        last = Some(candidate);
        moves.push(candidate);
    }
    moves
}

fn face_index(m: Move) -> u8 {
    use crate::moves::Move::*;
    match m {
        U | U2 | U3 => 0,
        R | R2 | R3 => 1,
        F | F2 | F3 => 2,
        D | D2 | D3 => 3,
        L | L2 | L3 => 4,
        B | B2 | B3 => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn scramble_from_str_parses_prime_and_double_notation() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
    }

    #[test]
    fn scramble_to_str_round_trips_through_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str(&scramble_to_str(&m)).unwrap(), m);
    }

    #[test]
    fn invalid_move_word_is_rejected() {
        assert!(scramble_from_str("R U Q").is_err());
    }

    #[test]
    fn random_scramble_has_the_requested_length() {
        assert_eq!(random_scramble(25).len(), 25);
    }

    #[test]
    fn random_scramble_never_repeats_or_uncrosses_an_axis() {
        let moves = random_scramble(200);
        for pair in moves.windows(2) {
            let diff = face_index(pair[0]) as i8 - face_index(pair[1]) as i8;
            assert_ne!(diff, 0);
            assert_ne!(diff, -3);
        }
    }
}
