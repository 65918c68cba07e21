//! The facelet level: a cube as 54 stickers in U-R-F-D-L-B order, and its
//! conversion to and from the cubie level. Used by the CLI preview and the
//! HTTP facade, which both take a plain 54-character color string rather
//! than the nine-line file format the reference parser reads.

use std::fmt;

use crate::cubie::{Corner, CubieCube, Edge};
use crate::error::Error;

/// One of the six face colors, named after the face it belongs to on a
/// solved cube.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidFaceletString(format!(
                "'{value}' is not one of U,R,F,D,L,B"
            ))),
        }
    }
}

/// A cube as 54 facelet colors, laid out U(0-8) R(9-17) F(18-26) D(27-35)
/// L(36-44) B(45-53), each face read left-to-right, top-to-bottom.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FaceCube {
    pub facelets: [Color; 54],
}

#[rustfmt::skip]
pub const SOLVED_FACE_CUBE: FaceCube = FaceCube {
    facelets: [
        Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U,
        Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R,
        Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F,
        Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D,
        Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L,
        Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B,
    ],
};

impl Default for FaceCube {
    fn default() -> Self {
        SOLVED_FACE_CUBE
    }
}

/// Maps each corner slot to its three facelet positions, in the cyclic
/// order U/D-facelet, then the other two going clockwise - the same order
/// `CORNER_COLOR` lists a corner's own three colors in.
#[rustfmt::skip]
const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],    // URF
    [6, 18, 38],   // UFL
    [0, 36, 47],   // ULB
    [2, 45, 11],   // UBR
    [29, 26, 15],  // DFR
    [27, 44, 24],  // DLF
    [33, 53, 42],  // DBL
    [35, 17, 51],  // DRB
];

#[rustfmt::skip]
const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Maps each edge slot to its two facelet positions, U/D-or-F/B-facelet
/// first, matching `EDGE_COLOR`'s order.
#[rustfmt::skip]
const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],   // UR
    [7, 19],   // UF
    [3, 37],   // UL
    [1, 46],   // UB
    [32, 16],  // DR
    [28, 25],  // DF
    [30, 43],  // DL
    [34, 52],  // DB
    [23, 12],  // FR
    [21, 41],  // FL
    [48, 39],  // BL
    [50, 14],  // BR
];

#[rustfmt::skip]
const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

impl From<&CubieCube> for FaceCube {
    fn from(cube: &CubieCube) -> Self {
        let mut face = FaceCube::default();
        for (i, positions) in CORNER_FACELET.iter().enumerate() {
            let corner = cube.cp[i] as usize;
            for (j, &pos) in positions.iter().enumerate() {
                face.facelets[pos] = CORNER_COLOR[corner][(j + 3 - cube.co[i] as usize) % 3];
            }
        }
        for (i, positions) in EDGE_FACELET.iter().enumerate() {
            let edge = cube.ep[i] as usize;
            for (j, &pos) in positions.iter().enumerate() {
                face.facelets[pos] = EDGE_COLOR[edge][(j + cube.eo[i] as usize) % 2];
            }
        }
        face
    }
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    fn try_from(face: &FaceCube) -> Result<Self, Self::Error> {
        let mut cp = [Corner::URF; 8];
        let mut co = [0u8; 8];
        for (slot, positions) in CORNER_FACELET.iter().enumerate() {
            let colors: Vec<Color> = positions.iter().map(|&pos| face.facelets[pos]).collect();
            let (corner, orient) = identify_corner(&colors)?;
            cp[slot] = corner;
            co[slot] = orient;
        }

        let mut ep = [Edge::UR; 12];
        let mut eo = [0u8; 12];
        for (slot, positions) in EDGE_FACELET.iter().enumerate() {
            let colors: Vec<Color> = positions.iter().map(|&pos| face.facelets[pos]).collect();
            let (edge, orient) = identify_edge(&colors)?;
            ep[slot] = edge;
            eo[slot] = orient;
        }

        let cube = CubieCube { cp, co, ep, eo };
        cube.verify()?;
        Ok(cube)
    }
}

fn identify_corner(colors: &[Color]) -> Result<(Corner, u8), Error> {
    for (id, reference) in CORNER_COLOR.iter().enumerate() {
        for orient in 0..3 {
            if (0..3).all(|j| colors[j] == reference[(j + orient) % 3]) {
                return Ok((Corner::from_u8(id as u8), orient as u8));
            }
        }
    }
    Err(Error::InvalidFaceletString(format!(
        "{colors:?} does not match any corner's three colors"
    )))
}

fn identify_edge(colors: &[Color]) -> Result<(Edge, u8), Error> {
    for (id, reference) in EDGE_COLOR.iter().enumerate() {
        for orient in 0..2 {
            if (0..2).all(|j| colors[j] == reference[(j + orient) % 2]) {
                return Ok((Edge::from_u8(id as u8), orient as u8));
            }
        }
    }
    Err(Error::InvalidFaceletString(format!(
        "{colors:?} does not match any edge's two colors"
    )))
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.chars().count() != 54 {
            return Err(Error::InvalidFaceletString(format!(
                "expected 54 facelet characters, got {}",
                s.chars().count()
            )));
        }
        let mut facelets = [Color::U; 54];
        for (i, ch) in s.chars().enumerate() {
            facelets[i] = Color::try_from(ch)?;
        }
        Ok(FaceCube { facelets })
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.facelets {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_cube_round_trips_through_facelets() {
        let face = FaceCube::from(&CubieCube::solved());
        assert_eq!(face, SOLVED_FACE_CUBE);
        assert_eq!(CubieCube::try_from(&face).unwrap(), CubieCube::solved());
    }

    #[test]
    fn facelet_string_round_trips() {
        let s = SOLVED_FACE_CUBE.to_string();
        let face = FaceCube::try_from(s.as_str()).unwrap();
        assert_eq!(face, SOLVED_FACE_CUBE);
    }

    #[test]
    fn a_scramble_round_trips_through_facelets_and_back() {
        use crate::moves::Move::*;
        let cube = CubieCube::solved().apply_moves(&[R, U, R3, U3, F2, L, B2]);
        let face = FaceCube::from(&cube);
        assert_eq!(CubieCube::try_from(&face).unwrap(), cube);
    }

    #[test]
    fn wrong_length_string_is_rejected() {
        assert!(FaceCube::try_from("too short").is_err());
    }
}
