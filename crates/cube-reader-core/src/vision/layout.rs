//! Calibrated sample points for one view of the cube widget

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::palette::Side;
use crate::state::STATE_SIZE;

/// A screen coordinate to sample, and the facet it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: u32,
    pub y: u32,
    /// How the facet is drawn in the isometric view
    #[serde(default)]
    pub side: Side,
    /// Facet position in the 54-facet state
    pub position: usize,
}

/// Sample points for the facets visible in one screenshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleLayout {
    pub points: Vec<SamplePoint>,
}

impl SampleLayout {
    pub fn new(points: Vec<SamplePoint>) -> Result<Self> {
        let layout = Self { points };
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&content).map_err(|e| Error::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        layout.validate()?;
        tracing::info!(
            "Loaded sample layout {} ({} points)",
            path.display(),
            layout.points.len()
        );
        Ok(layout)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(Error::Layout("no sample points".to_string()));
        }
        let mut seen = [false; STATE_SIZE];
        for point in &self.points {
            let slot = seen
                .get_mut(point.position)
                .ok_or_else(|| Error::Layout(format!("position {} is out of range", point.position)))?;
            if std::mem::replace(slot, true) {
                return Err(Error::Layout(format!(
                    "position {} is sampled twice",
                    point.position
                )));
            }
        }
        Ok(())
    }

    /// Screen coordinates in layout order
    pub fn coordinates(&self) -> Vec<(i32, i32)> {
        self.points
            .iter()
            .map(|p| (p.x as i32, p.y as i32))
            .collect()
    }
}
