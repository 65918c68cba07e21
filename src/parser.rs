//! Reads the nine-line unfolded-cube text format into a [`CubieCube`].
//!
//! Lines 0-2 hold the U face at columns 3-5; lines 3-5 hold L, F, R, B
//! side by side across columns 0-11; lines 6-8 hold the D face at columns
//! 3-5. Each character is a sticker color, translated to the face it
//! belongs to on a solved cube: O->U, B->R, W->F, R->D, G->L, Y->B.

use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::{Color, FaceCube};

fn sticker_to_face(c: char) -> Result<Color, Error> {
    match c {
        'O' => Ok(Color::U),
        'B' => Ok(Color::R),
        'W' => Ok(Color::F),
        'R' => Ok(Color::D),
        'G' => Ok(Color::L),
        'Y' => Ok(Color::B),
        _ => Err(Error::InvalidFaceletString(format!(
            "'{c}' is not one of the six sticker colors O,B,W,R,G,Y"
        ))),
    }
}

/// Face-block offsets into the 54-facelet array, in U-R-F-D-L-B order.
const U: usize = 0;
const R: usize = 9;
const F: usize = 18;
const D: usize = 27;
const L: usize = 36;
const B: usize = 45;

/// Parses the nine-line format and returns the cubie state it describes.
pub fn parse(contents: &str) -> Result<CubieCube, Error> {
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() < 9 {
        return Err(Error::InvalidFaceletString(format!(
            "expected 9 lines, got {}",
            lines.len()
        )));
    }

    let char_at = |line: &str, col: usize| -> Result<char, Error> {
        line.chars().nth(col).ok_or_else(|| {
            Error::InvalidFaceletString(format!("line {line:?} is missing column {col}"))
        })
    };

    let mut facelets = [Color::U; 54];

    for row in 0..3 {
        for col in 0..3 {
            facelets[U + 3 * row + col] = sticker_to_face(char_at(lines[row], 3 + col)?)?;
            facelets[D + 3 * row + col] = sticker_to_face(char_at(lines[row + 6], 3 + col)?)?;
        }
    }

    for row in 0..3 {
        let line = lines[row + 3];
        for col in 0..3 {
            facelets[L + 3 * row + col] = sticker_to_face(char_at(line, col)?)?;
            facelets[F + 3 * row + col] = sticker_to_face(char_at(line, 3 + col)?)?;
            facelets[R + 3 * row + col] = sticker_to_face(char_at(line, 6 + col)?)?;
            facelets[B + 3 * row + col] = sticker_to_face(char_at(line, 9 + col)?)?;
        }
    }

    CubieCube::try_from(&FaceCube { facelets })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = concat!(
        "   OOO\n",
        "   OOO\n",
        "   OOO\n",
        "GGGWWWBBBYYY\n",
        "GGGWWWBBBYYY\n",
        "GGGWWWBBBYYY\n",
        "   RRR\n",
        "   RRR\n",
        "   RRR\n",
    );

    #[test]
    fn solved_file_parses_to_the_solved_cube() {
        let cube = parse(SOLVED).unwrap();
        assert_eq!(cube, CubieCube::solved());
    }

    #[test]
    fn unknown_sticker_character_is_rejected() {
        let bad = SOLVED.replacen('O', "X", 1);
        assert!(parse(&bad).is_err());
    }

    #[test]
    fn too_few_lines_is_rejected() {
        assert!(parse("   OOO\n   OOO\n").is_err());
    }
}
