//! # cube-reader-core
//!
//! Core library for reading a Rubik's cube state from screenshots of an
//! on-screen cube widget.
//!
//! This crate provides the foundational functionality for:
//! - Classifying sampled pixels against a per-side color palette
//! - Representing the 54-facet state of a 3x3 cube
//! - Rotating a face's facets by quarter turns
//! - Rendering states as unfolded text diagrams
//! - Sampling screenshots over calibrated layouts
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and saving
//! - [`diagram`] - Unfolded cube diagrams
//! - [`error`] - Error types and Result alias
//! - [`palette`] - Nearest-color matching
//! - [`rotate`] - Face quarter turns
//! - [`state`] - Facet state model and state assembly
//! - [`vision`] - Screenshot sources, sampling and pointer probing
//!
//! ## Example
//!
//! ```
//! use cube_reader_core::{DiagramStyle, Face, FacetState, Renderer};
//!
//! let state = FacetState::solved().rotate_face(Face::F, 1);
//! let text = Renderer::builtin().expand(Some(&state), DiagramStyle::Full);
//! println!("{}", text);
//! ```

// Module declarations
pub mod config;
pub mod diagram;
pub mod error;
pub mod palette;
pub mod rotate;
pub mod state;
pub mod vision;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::Config;

// Color matching
pub use palette::{Palette, PaletteEntry, Rgb, Side};

// State model
pub use state::{Face, FacetState, StateBuilder, SOLVED};

// Rotation
pub use rotate::{rotate, rotate_str};

// Diagrams
pub use diagram::{DiagramStyle, Renderer};

// Screen glue
pub use vision::{
    check_positions, FileSource, ImageSource, PointerControl, SampleLayout, SamplePoint,
    SampledFacet, Sampler, ScreenSource, Screenshot, SystemPointer,
};
