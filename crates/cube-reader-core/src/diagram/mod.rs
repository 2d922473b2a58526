//! Unfolded text diagrams of a cube state
//!
//! ```
//! use cube_reader_core::diagram::{DiagramStyle, Renderer};
//!
//! let text = Renderer::builtin().expand_str("", DiagramStyle::Compact).unwrap();
//! assert!(text.starts_with("   UUU"));
//! ```

mod template;

pub use template::{Slot, Template};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::rotate::face_chars;
use crate::state::{FacetState, FACE_SIZE, STATE_SIZE};

/// Net with one character per facet
pub const COMPACT_TEMPLATE: &str = "   U1U2U3
   U4U5U6
   U7U8U9
L1L2L3F1F2F3R1R2R3B1B2B3
L4L5L6F4F5F6R4R5R6B4B5B6
L7L8L9F7F8F9R7R8R9B7B8B9
   D1D2D3
   D4D5D6
   D7D8D9";

/// Net with spaced facets and a frame around each face
pub const FULL_TEMPLATE: &str = "        +-------+
        | U1 U2 U3 |
        | U4 U5 U6 |
        | U7 U8 U9 |
+-------+-------+-------+-------+
| L1 L2 L3 | F1 F2 F3 | R1 R2 R3 | B1 B2 B3 |
| L4 L5 L6 | F4 F5 F6 | R4 R5 R6 | B4 B5 B6 |
| L7 L8 L9 | F7 F8 F9 | R7 R8 R9 | B7 B8 B9 |
+-------+-------+-------+-------+
        | D1 D2 D3 |
        | D4 D5 D6 |
        | D7 D8 D9 |
        +-------+";

/// A single framed face
pub const FACE_TEMPLATE: &str = "+-------+
| F1 F2 F3 |
| F4 F5 F6 |
| F7 F8 F9 |
+-------+";

/// Which whole-cube template to render with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramStyle {
    #[default]
    Compact,
    Full,
}

/// Renders states into diagrams using a fixed set of templates
#[derive(Debug, Clone)]
pub struct Renderer {
    compact: Template,
    full: Template,
    face: Template,
    initial: FacetState,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            compact: Template::parse(COMPACT_TEMPLATE),
            full: Template::parse(FULL_TEMPLATE),
            face: Template::parse(FACE_TEMPLATE),
            initial: FacetState::solved(),
        }
    }
}

impl Renderer {
    /// Build a renderer from custom templates, validating their slots
    pub fn new(compact: &str, full: &str, face: &str) -> Result<Self> {
        Ok(Self {
            compact: Template::parse_cube(compact)?,
            full: Template::parse_cube(full)?,
            face: Template::parse_face(face)?,
            initial: FacetState::solved(),
        })
    }

    /// Shared renderer with the built-in templates
    pub fn builtin() -> &'static Renderer {
        static BUILTIN: OnceLock<Renderer> = OnceLock::new();
        BUILTIN.get_or_init(Renderer::default)
    }

    /// Use `state` instead of the solved cube when no state is given
    pub fn with_initial(mut self, state: FacetState) -> Self {
        self.initial = state;
        self
    }

    fn template(&self, style: DiagramStyle) -> &Template {
        match style {
            DiagramStyle::Compact => &self.compact,
            DiagramStyle::Full => &self.full,
        }
    }

    /// Diagram of `state`, or of the initial state when `None`
    pub fn expand(&self, state: Option<&FacetState>, style: DiagramStyle) -> String {
        let chars = state.unwrap_or(&self.initial).chars();
        self.expand_chars(&chars, style)
    }

    /// Diagram of arbitrary facet characters, e.g. a partial sampled state
    pub fn expand_chars(&self, chars: &[char; STATE_SIZE], style: DiagramStyle) -> String {
        self.template(style).render_with(|slot| chars[slot.position()])
    }

    /// Diagram of a 54-character facet string; the empty string means the
    /// initial state
    pub fn expand_str(&self, state: &str, style: DiagramStyle) -> Result<String> {
        if state.is_empty() {
            return Ok(self.expand(None, style));
        }
        let chars: Vec<char> = state.chars().collect();
        let actual = chars.len();
        let chars: [char; STATE_SIZE] = chars
            .try_into()
            .map_err(|_| Error::StateLength { actual })?;
        Ok(self.expand_chars(&chars, style))
    }

    /// Diagram of a single face
    pub fn expand_face(&self, face: &str) -> Result<String> {
        Ok(self.expand_face_chars(&face_chars(face)?))
    }

    pub fn expand_face_chars(&self, facets: &[char; FACE_SIZE]) -> String {
        self.face.render_with(|slot| facets[slot.index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Face, SOLVED};

    fn has_tokens(text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        chars.windows(2).any(|w| {
            w[0].is_ascii_uppercase() && Face::from_letter(w[0]).is_some() && w[1].is_ascii_digit()
        })
    }

    #[test]
    fn test_builtin_templates_are_complete() {
        assert!(Renderer::new(COMPACT_TEMPLATE, FULL_TEMPLATE, FACE_TEMPLATE).is_ok());
    }

    #[test]
    fn test_empty_state_is_solved() {
        let r = Renderer::builtin();
        for style in [DiagramStyle::Compact, DiagramStyle::Full] {
            assert_eq!(
                r.expand_str("", style).unwrap(),
                r.expand_str(SOLVED, style).unwrap()
            );
        }
    }

    #[test]
    fn test_compact_solved() {
        let text = Renderer::builtin().expand(None, DiagramStyle::Compact);
        let expected = "   UUU
   UUU
   UUU
LLLFFFRRRBBB
LLLFFFRRRBBB
LLLFFFRRRBBB
   DDD
   DDD
   DDD";
        assert_eq!(text, expected);
        assert!(!has_tokens(&text));
    }

    #[test]
    fn test_full_places_each_facet() {
        let state: String = (0..STATE_SIZE)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect();
        let text = Renderer::builtin()
            .expand_str(&state, DiagramStyle::Full)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "        | a b c |");
        // L1 is position 36, F1 is 18, R1 is 9, B1 is 45
        assert_eq!(lines[5], "| k l m | s t u | j k l | t u v |");
        assert_eq!(lines[12], "        +-------+");
        assert!(!has_tokens(&text));
    }

    #[test]
    fn test_expand_str_rejects_bad_length() {
        assert!(matches!(
            Renderer::builtin().expand_str("UUU", DiagramStyle::Compact),
            Err(Error::StateLength { actual: 3 })
        ));
    }

    #[test]
    fn test_expand_chars_with_placeholders() {
        let mut chars = FacetState::solved().chars();
        chars[0] = '?';
        let text = Renderer::builtin().expand_chars(&chars, DiagramStyle::Compact);
        assert!(text.starts_with("   ?UU"));
    }

    #[test]
    fn test_custom_initial_state() {
        let turned = FacetState::solved().rotate_face(Face::U, 1);
        let r = Renderer::default().with_initial(turned);
        assert_eq!(
            r.expand(None, DiagramStyle::Full),
            r.expand(Some(&turned), DiagramStyle::Full)
        );
    }

    #[test]
    fn test_expand_face() {
        let text = Renderer::builtin().expand_face("123456789").unwrap();
        assert_eq!(text, "+-------+\n| 1 2 3 |\n| 4 5 6 |\n| 7 8 9 |\n+-------+");
    }

    #[test]
    fn test_expand_face_wrong_length() {
        let r = Renderer::builtin();
        assert!(matches!(
            r.expand_face("12345678"),
            Err(Error::FaceLength { actual: 8 })
        ));
        assert!(matches!(
            r.expand_face("123456789X"),
            Err(Error::FaceLength { actual: 10 })
        ));
    }
}
