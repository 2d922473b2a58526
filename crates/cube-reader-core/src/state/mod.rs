//! Facet state of a 3x3 cube
//!
//! A state lists all 54 facets face by face in the order U, R, F, D, L, B.
//! Within a face the 9 facets are read row by row from the top-left corner.

mod builder;
mod face;

pub use builder::{StateBuilder, UNKNOWN_FACET};
pub use face::Face;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::rotate;

/// Number of facets on a face
pub const FACE_SIZE: usize = 9;

/// Number of facets on the cube
pub const STATE_SIZE: usize = 54;

/// Index of the center facet within a face
pub const CENTER: usize = 4;

/// The solved cube, every face a single color
pub const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// All 54 facets, each labelled with the face whose color it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FacetState {
    facets: [Face; STATE_SIZE],
}

impl FacetState {
    pub fn solved() -> Self {
        let mut facets = [Face::U; STATE_SIZE];
        for (i, facet) in facets.iter_mut().enumerate() {
            *facet = Face::ALL[i / FACE_SIZE];
        }
        Self { facets }
    }

    pub fn from_facets(facets: [Face; STATE_SIZE]) -> Self {
        Self { facets }
    }

    pub fn facets(&self) -> &[Face; STATE_SIZE] {
        &self.facets
    }

    /// Facet letters, ready for diagram rendering
    pub fn chars(&self) -> [char; STATE_SIZE] {
        self.facets.map(Face::letter)
    }

    /// The 9 facets of one face
    pub fn face(&self, face: Face) -> [Face; FACE_SIZE] {
        let start = face.index() * FACE_SIZE;
        let mut out = [Face::U; FACE_SIZE];
        out.copy_from_slice(&self.facets[start..start + FACE_SIZE]);
        out
    }

    /// A copy of this state with one face's facets replaced
    pub fn with_face(&self, face: Face, facets: [Face; FACE_SIZE]) -> Self {
        let start = face.index() * FACE_SIZE;
        let mut next = *self;
        next.facets[start..start + FACE_SIZE].copy_from_slice(&facets);
        next
    }

    /// Turn one face's facets clockwise `degree` quarter turns
    ///
    /// Only the facets of `face` move; the strips on adjacent faces are left
    /// where they are.
    pub fn rotate_face(&self, face: Face, degree: i32) -> Self {
        self.with_face(face, rotate::rotate(self.face(face), degree))
    }

    pub fn center(&self, face: Face) -> Face {
        self.facets[face.index() * FACE_SIZE + CENTER]
    }

    pub fn is_solved(&self) -> bool {
        self.facets
            .iter()
            .enumerate()
            .all(|(i, facet)| facet.index() == i / FACE_SIZE)
    }

    /// Check that every face color appears on exactly 9 facets
    pub fn validate_counts(&self) -> Result<()> {
        let mut counts = [0usize; 6];
        for facet in &self.facets {
            counts[facet.index()] += 1;
        }
        let bad: Vec<String> = Face::ALL
            .iter()
            .zip(counts)
            .filter(|(_, n)| *n != FACE_SIZE)
            .map(|(face, n)| format!("{} x{}", face, n))
            .collect();
        if bad.is_empty() {
            Ok(())
        } else {
            Err(Error::Inconsistent(format!(
                "each face needs 9 facets, found {}",
                bad.join(", ")
            )))
        }
    }
}

impl Default for FacetState {
    fn default() -> Self {
        Self::solved()
    }
}

impl FromStr for FacetState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let actual = s.chars().count();
        if actual != STATE_SIZE {
            return Err(Error::StateLength { actual });
        }
        let mut facets = [Face::U; STATE_SIZE];
        for (position, (slot, c)) in facets.iter_mut().zip(s.chars()).enumerate() {
            *slot = Face::from_letter(c).ok_or(Error::InvalidFacet { facet: c, position })?;
        }
        Ok(Self { facets })
    }
}

impl TryFrom<String> for FacetState {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<FacetState> for String {
    fn from(state: FacetState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for FacetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars().iter().collect();
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_matches_constant() {
        assert_eq!(FacetState::solved().to_string(), SOLVED);
        assert_eq!(SOLVED.parse::<FacetState>().unwrap(), FacetState::solved());
        assert!(FacetState::solved().is_solved());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(matches!(
            "UUU".parse::<FacetState>(),
            Err(Error::StateLength { actual: 3 })
        ));
        let long = format!("{}U", SOLVED);
        assert!(matches!(
            long.parse::<FacetState>(),
            Err(Error::StateLength { actual: 55 })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_letter() {
        let mut s = SOLVED.to_string();
        s.replace_range(10..11, "X");
        assert!(matches!(
            s.parse::<FacetState>(),
            Err(Error::InvalidFacet {
                facet: 'X',
                position: 10
            })
        ));
    }

    #[test]
    fn test_face_projection() {
        let state = FacetState::solved();
        assert_eq!(state.face(Face::L), [Face::L; 9]);
        assert_eq!(state.center(Face::B), Face::B);
    }

    #[test]
    fn test_rotate_face_only_touches_that_face() {
        let mut facets = *FacetState::solved().facets();
        // top row of F carries U stickers
        facets[18..21].copy_from_slice(&[Face::U; 3]);
        let state = FacetState::from_facets(facets);

        let turned = state.rotate_face(Face::F, 1);
        let f = turned.face(Face::F);
        assert_eq!(
            f.map(Face::letter).iter().collect::<String>(),
            "FFUFFUFFU"
        );
        for face in [Face::U, Face::R, Face::D, Face::L, Face::B] {
            assert_eq!(turned.face(face), state.face(face));
        }
        assert_eq!(turned.rotate_face(Face::F, -1), state);
    }

    #[test]
    fn test_validate_counts() {
        assert!(FacetState::solved().validate_counts().is_ok());

        let mut facets = *FacetState::solved().facets();
        facets[0] = Face::R;
        let err = FacetState::from_facets(facets).validate_counts().unwrap_err();
        assert!(err.to_string().contains("U x8"));
        assert!(err.to_string().contains("R x10"));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&FacetState::solved()).unwrap();
        assert_eq!(json, format!("\"{}\"", SOLVED));
        assert!(serde_json::from_str::<FacetState>("\"UU\"").is_err());
    }
}
