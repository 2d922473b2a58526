//! Screenshot sources.
//!
//! Screenshots either come from image files on disk or, on Windows with the
//! `vision` feature, straight from the primary monitor via the Windows
//! Graphics Capture API.
//!
//! # Coordinates
//!
//! Raw capture resolution can differ from the logical coordinate space the
//! sample layout is written in (display scaling). Sources resize captures to
//! the configured logical screen size before any pixel is sampled.

use chrono::{DateTime, Utc};
use image::imageops::FilterType;
use image::RgbImage;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A screenshot ready for sampling
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub image: RgbImage,
    /// Where the screenshot came from (file path or monitor)
    pub source: String,
    pub captured_at: DateTime<Utc>,
}

impl Screenshot {
    pub fn new(image: RgbImage, source: impl Into<String>) -> Self {
        Self {
            image,
            source: source.into(),
            captured_at: Utc::now(),
        }
    }

    /// Resize to the logical screen size if it differs from the raw size
    pub fn rescaled(mut self, logical: Option<(u32, u32)>) -> Self {
        if let Some((width, height)) = logical {
            if self.image.dimensions() != (width, height) {
                tracing::debug!(
                    "Rescaling {} from {:?} to {}x{}",
                    self.source,
                    self.image.dimensions(),
                    width,
                    height
                );
                self.image =
                    image::imageops::resize(&self.image, width, height, FilterType::Triangle);
            }
        }
        self
    }
}

/// Anything that can produce a screenshot of the cube widget
pub trait ImageSource {
    fn capture(&mut self) -> Result<Screenshot>;
}

/// Screenshot stored in an image file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    logical_size: Option<(u32, u32)>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            logical_size: None,
        }
    }

    pub fn with_logical_size(mut self, size: Option<(u32, u32)>) -> Self {
        self.logical_size = size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileSource {
    fn capture(&mut self) -> Result<Screenshot> {
        let image = image::open(&self.path)?.to_rgb8();
        tracing::info!(
            "Loaded screenshot {} ({}x{})",
            self.path.display(),
            image.width(),
            image.height()
        );
        Ok(Screenshot::new(image, self.path.display().to_string()).rescaled(self.logical_size))
    }
}

// ============================================================================
// Windows Implementation
// ============================================================================

#[cfg(all(windows, feature = "vision"))]
mod windows_impl {
    use super::*;
    use crate::error::Error;
    use std::sync::{Arc, Mutex};

    use windows_capture::{
        capture::{Context, GraphicsCaptureApiHandler},
        frame::{Frame, ImageFormat},
        graphics_capture_api::InternalCaptureControl,
        monitor::Monitor,
        settings::{
            ColorFormat, CursorCaptureSettings, DirtyRegionSettings, DrawBorderSettings,
            MinimumUpdateIntervalSettings, SecondaryWindowSettings, Settings,
        },
    };

    /// Shared state for capturing
    struct CaptureState {
        result: Option<RgbImage>,
        temp_path: PathBuf,
    }

    /// Handler for single-frame capture
    struct SingleFrameCapture {
        state: Arc<Mutex<CaptureState>>,
    }

    impl GraphicsCaptureApiHandler for SingleFrameCapture {
        type Flags = Arc<Mutex<CaptureState>>;
        type Error = Box<dyn std::error::Error + Send + Sync>;

        fn new(ctx: Context<Self::Flags>) -> std::result::Result<Self, Self::Error> {
            Ok(Self { state: ctx.flags })
        }

        fn on_frame_arrived(
            &mut self,
            frame: &mut Frame,
            capture_control: InternalCaptureControl,
        ) -> std::result::Result<(), Self::Error> {
            let temp_path = self
                .state
                .lock()
                .map_err(|e| format!("Lock error: {}", e))?
                .temp_path
                .clone();

            let mut buffer = frame.buffer()?;
            buffer.save_as_image(&temp_path, ImageFormat::Png)?;
            let image = image::open(&temp_path)?.to_rgb8();
            let _ = std::fs::remove_file(&temp_path);

            if let Ok(mut state) = self.state.lock() {
                state.result = Some(image);
            }

            // Stop after first frame
            capture_control.stop();
            Ok(())
        }

        fn on_closed(&mut self) -> std::result::Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Capture the primary monitor
    pub fn capture_primary_monitor() -> Result<RgbImage> {
        let monitor =
            Monitor::primary().map_err(|e| Error::Capture(format!("No primary monitor: {}", e)))?;

        let temp_path = std::env::temp_dir().join(format!(
            "cube_reader_capture_{}.png",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));

        let state = Arc::new(Mutex::new(CaptureState {
            result: None,
            temp_path,
        }));

        let settings = Settings::new(
            monitor,
            CursorCaptureSettings::WithoutCursor,
            DrawBorderSettings::WithoutBorder,
            SecondaryWindowSettings::Default,
            MinimumUpdateIntervalSettings::Default,
            DirtyRegionSettings::Default,
            ColorFormat::Rgba8,
            Arc::clone(&state),
        );

        // Blocks until a frame is captured or capture fails
        SingleFrameCapture::start(settings).map_err(|e| Error::Capture(e.to_string()))?;

        let image = state
            .lock()
            .map_err(|_| Error::Capture("Failed to lock result".into()))?
            .result
            .take()
            .ok_or_else(|| Error::Capture("No frame captured".into()))?;
        Ok(image)
    }
}

// ============================================================================
// Stub for other platforms
// ============================================================================

#[cfg(not(all(windows, feature = "vision")))]
mod stub_impl {
    use super::*;
    use crate::error::Error;

    pub fn capture_primary_monitor() -> Result<RgbImage> {
        Err(Error::Capture(
            "Screen capture requires Windows and the 'vision' feature".into(),
        ))
    }
}

#[cfg(all(windows, feature = "vision"))]
use windows_impl::capture_primary_monitor;

#[cfg(not(all(windows, feature = "vision")))]
use stub_impl::capture_primary_monitor;

/// Live capture of the primary monitor
#[derive(Debug, Clone, Default)]
pub struct ScreenSource {
    logical_size: Option<(u32, u32)>,
}

impl ScreenSource {
    pub fn new(logical_size: Option<(u32, u32)>) -> Self {
        Self { logical_size }
    }
}

impl ImageSource for ScreenSource {
    fn capture(&mut self) -> Result<Screenshot> {
        let image = capture_primary_monitor()?;
        Ok(Screenshot::new(image, "primary monitor").rescaled(self.logical_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_to_logical_size() {
        let shot = Screenshot::new(RgbImage::new(200, 100), "test");
        let shot = shot.rescaled(Some((100, 50)));
        assert_eq!(shot.image.dimensions(), (100, 50));
    }

    #[test]
    fn test_rescale_noop() {
        let shot = Screenshot::new(RgbImage::new(20, 10), "test").rescaled(None);
        assert_eq!(shot.image.dimensions(), (20, 10));
    }

    #[test]
    fn test_missing_file() {
        let mut source = FileSource::new("definitely/not/here.png");
        assert!(source.capture().is_err());
    }

    #[cfg(not(all(windows, feature = "vision")))]
    #[test]
    fn test_screen_capture_unsupported() {
        let err = ScreenSource::default().capture().unwrap_err();
        assert!(err.to_string().contains("vision"));
    }

    #[test]
    #[ignore] // Requires a desktop session
    fn test_capture_screen() {
        if let Ok(shot) = ScreenSource::default().capture() {
            assert!(shot.image.width() > 0);
        }
    }
}
