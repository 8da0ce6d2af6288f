// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Absolute pitches.
//!
//! A [`Note`] is a semitone index on the MIDI scale: middle C is 60, and a
//! name given without an octave ("C", "F#") lands in octave 4.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::{Interval, OCTAVE};
use super::pitch_set::Operand;
use crate::error::{NameKind, Result, TheoryError};

/// Pitch-class names, sharp spelling. Output always uses these.
pub const TWELVE_TONES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings, accepted when parsing
pub const FLAT_TWELVE_TONES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Octave assumed for names without an explicit octave
pub const DEFAULT_OCTAVE: i32 = 4;

/// An absolute pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note {
    value: i32,
}

impl Note {
    /// Create a note from a raw semitone index (60 = middle C)
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Parse a note name such as "C", "F#", "Bb", "C#5" or "A-1"
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        let split = name
            .find(|c: char| c == '-' || c.is_ascii_digit())
            .unwrap_or(name.len());
        let (pitch, octave) = name.split_at(split);

        let pitch_class = TWELVE_TONES
            .iter()
            .position(|&n| n == pitch)
            .or_else(|| FLAT_TWELVE_TONES.iter().position(|&n| n == pitch))
            .ok_or_else(|| TheoryError::unknown(NameKind::Note, name))?;

        let octave = if octave.is_empty() {
            DEFAULT_OCTAVE
        } else {
            octave
                .parse::<i32>()
                .map_err(|_| TheoryError::unknown(NameKind::Note, name))?
        };

        octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(OCTAVE))
            .and_then(|v| v.checked_add(pitch_class as i32))
            .map(Note::new)
            .ok_or(TheoryError::OutOfRange {
                what: "octave",
                value: octave as i64,
            })
    }

    /// Name of a semitone value's pitch class
    pub fn name_from_value(value: i32) -> &'static str {
        TWELVE_TONES[value.rem_euclid(OCTAVE) as usize]
    }

    pub fn value(self) -> i32 {
        self.value
    }

    /// Pitch-class name, without octave
    pub fn name(self) -> &'static str {
        Note::name_from_value(self.value)
    }

    /// Pitch class (0-11)
    pub fn pitch_class(self) -> i32 {
        self.value.rem_euclid(OCTAVE)
    }

    pub fn octave(self) -> i32 {
        self.value.div_euclid(OCTAVE) - 1
    }

    /// Signed semitone distance from this note up to `other`
    pub fn distance_to(self, other: Note) -> i32 {
        other.value - self.value
    }

    /// Add an operand that must resolve to an interval.
    ///
    /// This is the entry point for operands whose kind is only known at
    /// runtime; a note, or a collection, is rejected.
    pub fn plus_interval(self, operand: impl Into<Operand>) -> Result<Note> {
        Ok(self + Self::operand_interval(operand.into())?)
    }

    /// Subtract an operand that must resolve to an interval
    pub fn minus_interval(self, operand: impl Into<Operand>) -> Result<Note> {
        Ok(self - Self::operand_interval(operand.into())?)
    }

    fn operand_interval(operand: Operand) -> Result<Interval> {
        match operand {
            Operand::Interval(i) => Ok(i),
            Operand::Note(n) => Err(TheoryError::InvalidArgument(format!(
                "cannot add note {} to a note, expected an interval",
                n
            ))),
            Operand::Intervals(_) | Operand::Notes(_) => Err(TheoryError::InvalidArgument(
                "cannot add a collection to a note, expected an interval".to_string(),
            )),
        }
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Note::from_name(s)
    }
}

impl Add<Interval> for Note {
    type Output = Note;

    fn add(self, rhs: Interval) -> Note {
        Note::new(self.value + rhs.semitones())
    }
}

impl Sub<Interval> for Note {
    type Output = Note;

    fn sub(self, rhs: Interval) -> Note {
        Note::new(self.value - rhs.semitones())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.octave())
    }
}
