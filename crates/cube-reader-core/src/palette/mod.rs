//! Nearest-color matching against a per-side reference palette

mod color;

pub use color::{Rgb, Side};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distance above which a match is logged as doubtful
const DOUBTFUL_DISTANCE: u64 = 120;

/// One named sticker color with a reference value per viewing side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub top: Rgb,
    pub left: Rgb,
    pub right: Rgb,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, top: Rgb, left: Rgb, right: Rgb) -> Self {
        Self {
            name: name.into(),
            top,
            left,
            right,
        }
    }

    /// Reference value for the given side
    pub fn reference(&self, side: Side) -> Rgb {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Ordered set of named colors
///
/// Registration order matters: when two colors are equally close to a
/// sample, the one registered first wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette; at least one color is required
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Name of the color closest to `sample` as seen on `side`
    pub fn classify(&self, sample: Rgb, side: Side) -> Option<&str> {
        self.classify_with_distance(sample, side)
            .map(|(name, _)| name)
    }

    /// Like [`classify`](Self::classify), also returning the Manhattan distance
    pub fn classify_with_distance(&self, sample: Rgb, side: Side) -> Option<(&str, u64)> {
        let mut best: Option<(&PaletteEntry, u64)> = None;
        for entry in &self.entries {
            let distance = entry.reference(side).manhattan(&sample);
            // Strict comparison keeps the earliest entry on ties
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((entry, distance));
            }
        }

        let (entry, distance) = best?;
        if distance > DOUBTFUL_DISTANCE {
            tracing::debug!(
                "Doubtful match: {} on {} side classified as {} (distance {})",
                sample,
                side,
                entry.name,
                distance
            );
        }
        Some((entry.name.as_str(), distance))
    }
}

impl Default for Palette {
    /// Sticker colors of the isometric cube widget, shaded per side
    fn default() -> Self {
        let entries = vec![
            PaletteEntry::new(
                "white",
                Rgb::new(255, 255, 255),
                Rgb::new(221, 221, 221),
                Rgb::new(187, 187, 187),
            ),
            PaletteEntry::new(
                "yellow",
                Rgb::new(255, 213, 0),
                Rgb::new(222, 185, 0),
                Rgb::new(189, 157, 0),
            ),
            PaletteEntry::new(
                "red",
                Rgb::new(196, 30, 58),
                Rgb::new(170, 26, 50),
                Rgb::new(145, 22, 43),
            ),
            PaletteEntry::new(
                "orange",
                Rgb::new(255, 88, 0),
                Rgb::new(222, 76, 0),
                Rgb::new(189, 65, 0),
            ),
            PaletteEntry::new(
                "blue",
                Rgb::new(0, 81, 186),
                Rgb::new(0, 70, 162),
                Rgb::new(0, 60, 138),
            ),
            PaletteEntry::new(
                "green",
                Rgb::new(0, 158, 96),
                Rgb::new(0, 137, 83),
                Rgb::new(0, 117, 71),
            ),
        ];
        Self { entries }
    }
}

impl TryFrom<Vec<PaletteEntry>> for Palette {
    type Error = Error;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}
