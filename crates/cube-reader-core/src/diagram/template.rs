//! Slot templates for unfolded cube diagrams
//!
//! A slot token is a face letter followed by a single digit 1-9 that is not
//! followed by another digit: `U1` is a slot, `U12` is plain text. Templates
//! are parsed once into literal and slot segments, so rendering never
//! rescans substituted text.

use crate::error::{Error, Result};
use crate::state::{Face, FACE_SIZE, STATE_SIZE};

/// A named slot: face plus 0-based index within the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub face: Face,
    pub index: usize,
}

impl Slot {
    /// Position of the slot within a 54-facet state
    pub fn position(&self) -> usize {
        self.face.index() * FACE_SIZE + self.index
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Slot),
}

/// Parsed diagram layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Split `source` into text and slot segments
    pub fn parse(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut segments = Vec::new();
        let mut text = String::new();

        let mut i = 0;
        while i < chars.len() {
            if let Some(slot) = slot_at(&chars, i) {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Slot(slot));
                i += 2;
            } else {
                text.push(chars[i]);
                i += 1;
            }
        }
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Self { segments }
    }

    /// Parse a whole-cube template; every one of the 54 slots must appear
    /// exactly once
    pub fn parse_cube(source: &str) -> Result<Self> {
        let template = Self::parse(source);
        let mut seen = [false; STATE_SIZE];
        for slot in template.slots() {
            let pos = slot.position();
            if seen[pos] {
                return Err(Error::Template(format!(
                    "slot {}{} appears more than once",
                    slot.face,
                    slot.index + 1
                )));
            }
            seen[pos] = true;
        }
        if let Some(pos) = seen.iter().position(|s| !s) {
            return Err(Error::Template(format!(
                "slot {}{} is missing",
                Face::ALL[pos / FACE_SIZE],
                pos % FACE_SIZE + 1
            )));
        }
        Ok(template)
    }

    /// Parse a single-face template; slots 1-9 of one face must each appear
    /// exactly once
    pub fn parse_face(source: &str) -> Result<Self> {
        let template = Self::parse(source);
        let mut seen = [false; FACE_SIZE];
        let mut face = None;
        for slot in template.slots() {
            if *face.get_or_insert(slot.face) != slot.face {
                return Err(Error::Template(
                    "face template mixes slots from several faces".to_string(),
                ));
            }
            if std::mem::replace(&mut seen[slot.index], true) {
                return Err(Error::Template(format!(
                    "slot {}{} appears more than once",
                    slot.face,
                    slot.index + 1
                )));
            }
        }
        if let Some(index) = seen.iter().position(|s| !s) {
            return Err(Error::Template(format!("face slot {} is missing", index + 1)));
        }
        Ok(template)
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(slot) => Some(*slot),
            Segment::Text(_) => None,
        })
    }

    /// Fill every slot with the character chosen by `fill`
    pub fn render_with(&self, mut fill: impl FnMut(Slot) -> char) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(slot) => out.push(fill(*slot)),
            }
        }
        out
    }
}

fn slot_at(chars: &[char], i: usize) -> Option<Slot> {
    let face = Face::ALL
        .into_iter()
        .find(|f| f.letter() == chars[i])?;
    let digit = chars.get(i + 1)?.to_digit(10)?;
    if digit == 0 || chars.get(i + 2).is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(Slot {
        face,
        index: digit as usize - 1,
    })
}
