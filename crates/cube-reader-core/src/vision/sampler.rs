//! Pixel sampling and classification over a layout

use image::RgbImage;
use serde::Serialize;

use super::layout::{SampleLayout, SamplePoint};
use crate::error::{Error, Result};
use crate::palette::{Palette, Rgb, Side};
use crate::state::StateBuilder;

/// One classified sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampledFacet {
    pub position: usize,
    pub side: Side,
    pub pixel: Rgb,
    pub color: String,
    pub distance: u64,
}

/// Reads facet colors out of screenshots
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    palette: &'a Palette,
}

impl<'a> Sampler<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Pixel under a sample point
    pub fn pixel(image: &RgbImage, point: &SamplePoint) -> Result<Rgb> {
        image
            .get_pixel_checked(point.x, point.y)
            .map(|p| Rgb::from(*p))
            .ok_or(Error::SampleOutOfBounds {
                x: point.x,
                y: point.y,
                width: image.width(),
                height: image.height(),
            })
    }

    /// Classify every point of `layout` in `image`
    pub fn classify(&self, image: &RgbImage, layout: &SampleLayout) -> Result<Vec<SampledFacet>> {
        layout
            .points
            .iter()
            .map(|point| {
                let pixel = Self::pixel(image, point)?;
                let (color, distance) = self
                    .palette
                    .classify_with_distance(pixel, point.side)
                    .ok_or(Error::EmptyPalette)?;
                tracing::debug!(
                    "Facet {} at ({}, {}) {} -> {}",
                    point.position,
                    point.x,
                    point.y,
                    pixel,
                    color
                );
                Ok(SampledFacet {
                    position: point.position,
                    side: point.side,
                    pixel,
                    color: color.to_string(),
                    distance,
                })
            })
            .collect()
    }

    /// Classify `image` and record the results into `builder`
    pub fn sample_into(
        &self,
        image: &RgbImage,
        layout: &SampleLayout,
        builder: &mut StateBuilder,
    ) -> Result<Vec<SampledFacet>> {
        let facets = self.classify(image, layout)?;
        for facet in &facets {
            builder.record(facet.position, facet.color.as_str())?;
        }
        tracing::info!(
            "Sampled {} facets ({}/54 known)",
            facets.len(),
            builder.known()
        );
        Ok(facets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SampleLayout {
        SampleLayout::new(vec![
            SamplePoint {
                x: 0,
                y: 0,
                side: Side::Top,
                position: 4,
            },
            SamplePoint {
                x: 1,
                y: 0,
                side: Side::Right,
                position: 13,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_classify_uses_point_side() {
        let palette = Palette::default();
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, image::Rgb([250, 250, 250]));
        image.put_pixel(1, 0, image::Rgb([145, 22, 43]));

        let facets = Sampler::new(&palette).classify(&image, &layout()).unwrap();
        assert_eq!(facets[0].color, "white");
        assert_eq!(facets[1].color, "red");
        assert_eq!(facets[1].distance, 0);
        assert_eq!(facets[1].side, Side::Right);
    }

    #[test]
    fn test_out_of_bounds() {
        let palette = Palette::default();
        let image = RgbImage::new(1, 1);
        let err = Sampler::new(&palette)
            .classify(&image, &layout())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::SampleOutOfBounds {
                x: 1,
                y: 0,
                width: 1,
                height: 1
            }
        ));
    }

    #[test]
    fn test_sample_into_builder() {
        let palette = Palette::default();
        let image = RgbImage::from_pixel(2, 1, image::Rgb([0, 81, 186]));
        let mut builder = StateBuilder::new();
        Sampler::new(&palette)
            .sample_into(&image, &layout(), &mut builder)
            .unwrap();
        assert_eq!(builder.color_at(4), Some("blue"));
        assert_eq!(builder.known(), 2);
    }
}
