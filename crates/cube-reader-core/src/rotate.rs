//! Clockwise quarter turns of a single face's facets

use crate::error::{Error, Result};

/// Source index for each position after one clockwise quarter turn
///
/// Facets are a 3x3 grid in row-major order, so `new[0] = old[6]` moves the
/// bottom-left facet to the top-left corner.
pub const QUARTER_TURN: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Number of effective clockwise quarter turns, always in `0..4`
pub fn normalize_turns(degree: i32) -> usize {
    degree.rem_euclid(4) as usize
}

/// Rotate a face clockwise by `degree` quarter turns
///
/// `degree` may be negative or larger than 3; it is reduced modulo 4 so
/// `-1` is the same as `3`.
pub fn rotate<T: Copy>(face: [T; 9], degree: i32) -> [T; 9] {
    let mut facets = face;
    for _ in 0..normalize_turns(degree) {
        facets = QUARTER_TURN.map(|src| facets[src]);
    }
    facets
}

/// Rotate a 9-character face given as text
pub fn rotate_str(face: &str, degree: i32) -> Result<String> {
    let facets = face_chars(face)?;
    Ok(rotate(facets, degree).iter().collect())
}

/// Split text into exactly 9 facets
pub(crate) fn face_chars(face: &str) -> Result<[char; 9]> {
    let chars: Vec<char> = face.chars().collect();
    let actual = chars.len();
    chars
        .try_into()
        .map_err(|_| Error::FaceLength { actual })
}
