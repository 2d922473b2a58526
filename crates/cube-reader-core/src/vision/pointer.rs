//! Pointer probing for calibrating sample coordinates

use std::time::Duration;

use crate::error::Result;

/// Default pause before each pointer move
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(200);

/// Something that can move the mouse pointer
pub trait PointerControl {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;
}

/// Move the pointer over each position in turn, pausing `settle` before each
/// move, so a human can watch whether the layout hits the facets
pub fn check_positions<P: PointerControl + ?Sized>(
    pointer: &mut P,
    positions: &[(i32, i32)],
    settle: Duration,
) -> Result<()> {
    for &(x, y) in positions {
        std::thread::sleep(settle);
        tracing::debug!("Moving pointer to ({}, {})", x, y);
        pointer.move_to(x, y)?;
    }
    Ok(())
}

/// The system cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPointer;

#[cfg(all(windows, feature = "vision"))]
impl PointerControl for SystemPointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        use windows::Win32::UI::WindowsAndMessaging::SetCursorPos;

        unsafe { SetCursorPos(x, y) }
            .map_err(|e| crate::error::Error::Other(format!("SetCursorPos failed: {}", e)))
    }
}

#[cfg(not(all(windows, feature = "vision")))]
impl PointerControl for SystemPointer {
    fn move_to(&mut self, _x: i32, _y: i32) -> Result<()> {
        Err(crate::error::Error::Other(
            "Pointer control requires Windows and the 'vision' feature".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        moves: Vec<(i32, i32)>,
    }

    impl PointerControl for Recorder {
        fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
            self.moves.push((x, y));
            Ok(())
        }
    }

    #[test]
    fn test_moves_in_order() {
        let mut pointer = Recorder::default();
        let positions = [(1, 2), (3, 4), (5, 6)];
        check_positions(&mut pointer, &positions, Duration::ZERO).unwrap();
        assert_eq!(pointer.moves, positions);
    }

    #[test]
    fn test_settle_delay_applied() {
        let mut pointer = Recorder::default();
        let start = std::time::Instant::now();
        check_positions(&mut pointer, &[(0, 0), (1, 1)], Duration::from_millis(5)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_default_settle() {
        assert_eq!(DEFAULT_SETTLE, Duration::from_millis(200));
    }
}
