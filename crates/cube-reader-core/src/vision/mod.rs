//! Screen and image glue.
//!
//! Turns screenshots of the on-screen cube widget into classified facets.
//!
//! ## Features
//!
//! - [`ImageSource`] - Screenshot sources (image files, live screen capture)
//! - [`SampleLayout`] - Calibrated sample points for one view of the cube
//! - [`Sampler`] - Reads and classifies the pixels under a layout
//! - [`check_positions`] - Walks the pointer over sample points for calibration
//!
//! ## Platform Support
//!
//! - **Windows** with the `vision` feature: live capture and pointer control
//! - **Everywhere else**: image files only (live capture returns an error)
//!
//! ## Usage
//!
//! ```no_run
//! use cube_reader_core::palette::Palette;
//! use cube_reader_core::state::StateBuilder;
//! use cube_reader_core::vision::{FileSource, ImageSource, SampleLayout, Sampler};
//!
//! let palette = Palette::default();
//! let layout = SampleLayout::load(std::path::Path::new("front.json"))?;
//! let shot = FileSource::new("front.png").capture()?;
//!
//! let mut builder = StateBuilder::new();
//! Sampler::new(&palette).sample_into(&shot.image, &layout, &mut builder)?;
//! # Ok::<(), cube_reader_core::Error>(())
//! ```

mod capture;
mod layout;
mod pointer;
mod sampler;

pub use capture::{FileSource, ImageSource, Screenshot, ScreenSource};
pub use layout::{SampleLayout, SamplePoint};
pub use pointer::{check_positions, PointerControl, SystemPointer, DEFAULT_SETTLE};
pub use sampler::{SampledFacet, Sampler};
