//! Error types for cube-reader-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cube-reader operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to parse JSON {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error("A face has 9 facets, got {actual}")]
    FaceLength { actual: usize },

    #[error("A cube state has 54 facets, got {actual}")]
    StateLength { actual: usize },

    #[error("Invalid facet '{facet}' at position {position}")]
    InvalidFacet { facet: char, position: usize },

    #[error("Facet position {0} is out of range (0..54)")]
    PositionOutOfRange(usize),

    #[error("Invalid diagram template: {0}")]
    Template(String),

    #[error("Invalid sample layout: {0}")]
    Layout(String),

    #[error("Palette has no colors")]
    EmptyPalette,

    #[error("Sample point ({x}, {y}) lies outside the {width}x{height} screenshot")]
    SampleOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Cube state is incomplete: {missing} facets not sampled")]
    Incomplete { missing: usize },

    #[error("Inconsistent cube state: {0}")]
    Inconsistent(String),

    #[error("Screen capture failed: {0}")]
    Capture(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for cube-reader operations
pub type Result<T> = std::result::Result<T, Error>;
