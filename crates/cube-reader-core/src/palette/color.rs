//! Pixel colors and viewing sides

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 3-component integer color, usually 0-255 per channel in RGB order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [i32; 3]);

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self([r, g, b])
    }

    /// Build from a pixel delivered in BGR channel order
    pub const fn from_bgr(b: i32, g: i32, r: i32) -> Self {
        Self([r, g, b])
    }

    /// Sum of absolute component-wise differences
    pub fn manhattan(&self, other: &Rgb) -> u64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| u64::from(a.abs_diff(*b)))
            .sum()
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let image::Rgb([r, g, b]) = pixel;
        Self([i32::from(r), i32::from(g), i32::from(b)])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        image::Rgb(c).into()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Parse `r,g,b` (whitespace around components is ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!("Expected 3 comma-separated components, got '{}'", s));
        }
        let mut out = [0i32; 3];
        for (slot, part) in out.iter_mut().zip(parts) {
            *slot = part
                .parse()
                .map_err(|_| format!("Invalid color component: {}", part))?;
        }
        Ok(Self(out))
    }
}

/// Which way a facet faces in the isometric rendering of the cube
///
/// The same sticker color is shaded differently on each of the three visible
/// faces, so the palette keeps one reference value per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Top,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Top, Side::Left, Side::Right];

    /// Index into a palette entry's reference values
    pub fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" | "t" | "0" => Ok(Self::Top),
            "left" | "l" | "1" => Ok(Self::Left),
            "right" | "r" | "2" => Ok(Self::Right),
            _ => Err(format!("Invalid side '{}'. Use: top, left, or right", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(13, 16, 30);
        assert_eq!(a.manhattan(&b), 7);
        assert_eq!(b.manhattan(&a), 7);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_manhattan_outside_byte_range() {
        let a = Rgb::new(-100, 0, 1000);
        let b = Rgb::new(100, 0, 0);
        assert_eq!(a.manhattan(&b), 1200);
    }

    #[test]
    fn test_from_bgr() {
        assert_eq!(Rgb::from_bgr(1, 2, 3), Rgb::new(3, 2, 1));
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!("255,128, 0".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("a,b,c".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_side_parse_and_default() {
        assert_eq!(Side::default(), Side::Top);
        assert_eq!("LEFT".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("2".parse::<Side>().unwrap(), Side::Right);
        assert!("bottom".parse::<Side>().is_err());
        assert_eq!(Side::Right.index(), 2);
    }
}
