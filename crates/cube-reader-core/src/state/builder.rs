//! Assembling a facet state from classified samples

use std::collections::HashMap;

use super::{Face, FacetState, CENTER, FACE_SIZE, STATE_SIZE};
use crate::error::{Error, Result};

/// Placeholder shown for facets that have not been classified yet
pub const UNKNOWN_FACET: char = '?';

/// Collects color names facet by facet, possibly across several screenshots
///
/// Color names are turned into face letters by looking at the centers: the
/// face whose center shows "white" owns every white facet.
#[derive(Debug, Clone)]
pub struct StateBuilder {
    colors: [Option<String>; STATE_SIZE],
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            colors: std::array::from_fn(|_| None),
        }
    }

    /// Store the color seen at `position`, replacing any earlier reading
    pub fn record(&mut self, position: usize, color: impl Into<String>) -> Result<()> {
        let slot = self
            .colors
            .get_mut(position)
            .ok_or(Error::PositionOutOfRange(position))?;
        *slot = Some(color.into());
        Ok(())
    }

    pub fn color_at(&self, position: usize) -> Option<&str> {
        self.colors.get(position)?.as_deref()
    }

    pub fn known(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.known() == STATE_SIZE
    }

    /// Map of center color name to the face it identifies
    ///
    /// Only centers already sampled appear; the same color on two centers is
    /// an error.
    fn center_map(&self) -> Result<HashMap<&str, Face>> {
        let mut map = HashMap::new();
        for face in Face::ALL {
            let Some(color) = self.color_at(face.index() * FACE_SIZE + CENTER) else {
                continue;
            };
            if let Some(other) = map.insert(color, face) {
                return Err(Error::Inconsistent(format!(
                    "centers of {} and {} are both {}",
                    other, face, color
                )));
            }
        }
        Ok(map)
    }

    /// Facet letters so far, with [`UNKNOWN_FACET`] where the face is not
    /// yet known
    pub fn partial_chars(&self) -> [char; STATE_SIZE] {
        let centers = self.center_map().unwrap_or_default();
        std::array::from_fn(|i| {
            self.colors[i]
                .as_deref()
                .and_then(|color| centers.get(color))
                .map_or(UNKNOWN_FACET, |face| face.letter())
        })
    }

    /// Resolve every facet to a face letter
    pub fn finish(&self) -> Result<FacetState> {
        let missing = STATE_SIZE - self.known();
        if missing > 0 {
            return Err(Error::Incomplete { missing });
        }

        let centers = self.center_map()?;
        let mut facets = [Face::U; STATE_SIZE];
        for (position, (slot, color)) in facets.iter_mut().zip(&self.colors).enumerate() {
            let color = color.as_deref().unwrap_or_default();
            *slot = *centers.get(color).ok_or_else(|| {
                Error::Inconsistent(format!(
                    "facet {} is {}, which is not the color of any center",
                    position, color
                ))
            })?;
        }

        let state = FacetState::from_facets(facets);
        state.validate_counts()?;
        tracing::debug!("Assembled cube state {}", state);
        Ok(state)
    }
}
