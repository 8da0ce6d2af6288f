// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale system: degrees, modes and harmonization.
//!
//! Degrees are 1-based and keep counting past the octave, so degree 9 of a
//! seven-note scale is degree 2 an octave up. Harmonization builds a chord
//! on each degree by name through a [`Registry`].

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::chord::Chord;
use super::interval::{self, mode_of, Interval, Mode, OCTAVE};
use super::note::Note;
use super::pitch_set::{Operand, PitchSet};
use super::registry::{builder_key, Registry};
use crate::error::{Result, TheoryError};

/// Suffix of every scale builder name
pub const SCALE_SUFFIX: &str = "_scale";

/// Built-in scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Chromatic,

    // Major scale and modes
    Major, // Ionian
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian, // Natural minor
    Locrian,

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic and blues
    MajorPentatonic,
    MinorPentatonic,
    Blues,

    WholeTone,
}

impl ScaleType {
    pub const ALL: [ScaleType; 14] = [
        ScaleType::Chromatic,
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::WholeTone,
    ];

    /// The diatonic mode this scale type is, if any
    pub fn mode(self) -> Option<Mode> {
        match self {
            ScaleType::Major => Some(Mode::Ionian),
            ScaleType::Dorian => Some(Mode::Dorian),
            ScaleType::Phrygian => Some(Mode::Phrygian),
            ScaleType::Lydian => Some(Mode::Lydian),
            ScaleType::Mixolydian => Some(Mode::Mixolydian),
            ScaleType::Aeolian => Some(Mode::Aeolian),
            ScaleType::Locrian => Some(Mode::Locrian),
            _ => None,
        }
    }

    /// Get the intervals (semitones from root) for this scale type
    pub fn intervals(self) -> Vec<Interval> {
        match self {
            ScaleType::Chromatic => interval::intervals(&interval::CHROMATIC),

            // Modes are derived from ionian
            ScaleType::Major => Mode::Ionian.intervals(),
            ScaleType::Dorian => Mode::Dorian.intervals(),
            ScaleType::Phrygian => Mode::Phrygian.intervals(),
            ScaleType::Lydian => Mode::Lydian.intervals(),
            ScaleType::Mixolydian => Mode::Mixolydian.intervals(),
            ScaleType::Aeolian => Mode::Aeolian.intervals(),
            ScaleType::Locrian => Mode::Locrian.intervals(),

            ScaleType::HarmonicMinor => interval::intervals(&interval::HARMONIC_MINOR),
            ScaleType::MelodicMinor => interval::intervals(&interval::MELODIC_MINOR),
            ScaleType::MajorPentatonic => interval::intervals(&[0, 2, 4, 7, 9]),
            ScaleType::MinorPentatonic => interval::intervals(&[0, 3, 5, 7, 10]),
            ScaleType::Blues => interval::intervals(&[0, 3, 5, 6, 7, 10]),
            ScaleType::WholeTone => interval::intervals(&[0, 2, 4, 6, 8, 10]),
        }
    }

    /// Canonical builder name, e.g. "harmonic_minor_scale"
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Chromatic => "chromatic_scale",
            ScaleType::Major => "major_scale",
            ScaleType::Dorian => "dorian_scale",
            ScaleType::Phrygian => "phrygian_scale",
            ScaleType::Lydian => "lydian_scale",
            ScaleType::Mixolydian => "mixolydian_scale",
            ScaleType::Aeolian => "aeolian_scale",
            ScaleType::Locrian => "locrian_scale",
            ScaleType::HarmonicMinor => "harmonic_minor_scale",
            ScaleType::MelodicMinor => "melodic_minor_scale",
            ScaleType::MajorPentatonic => "major_pentatonic_scale",
            ScaleType::MinorPentatonic => "minor_pentatonic_scale",
            ScaleType::Blues => "blues_scale",
            ScaleType::WholeTone => "whole_tone_scale",
        }
    }

    /// Lookup key for a scale name: lowercase, underscored, suffixed, with
    /// "ionian", "minor" and "natural_minor" mapped to their builders
    pub fn canonical_name(name: &str) -> String {
        let key = builder_key(name, SCALE_SUFFIX);
        match key.as_str() {
            "ionian_scale" => ScaleType::Major.name().to_string(),
            "minor_scale" | "natural_minor_scale" => ScaleType::Aeolian.name().to_string(),
            _ => key,
        }
    }

    /// Parse a scale name, with or without the "_scale" suffix.
    /// Spaces and dashes count as underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = Self::canonical_name(name);
        ScaleType::ALL.iter().copied().find(|t| t.name() == key)
    }

    /// Build this scale on a root
    pub fn build(self, root: Note) -> Scale {
        Scale::new(root, self.intervals())
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A scale rooted on a note
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    set: PitchSet,
}

impl Scale {
    pub fn new(root: Note, intervals: impl IntoIterator<Item = Interval>) -> Self {
        Self {
            set: PitchSet::new(root, intervals),
        }
    }

    pub fn from_set(set: PitchSet) -> Self {
        Self { set }
    }

    pub fn as_set(&self) -> &PitchSet {
        &self.set
    }

    pub fn into_set(self) -> PitchSet {
        self.set
    }

    pub fn add(&self, operand: impl Into<Operand>) -> Scale {
        Scale::from_set(PitchSet::add(&self.set, operand))
    }

    pub fn remove(&self, operand: impl Into<Operand>) -> Scale {
        Scale::from_set(PitchSet::remove(&self.set, operand))
    }

    /// Offset of a 1-based degree from the root, counting past the octave
    pub fn interval_for_degree(&self, degree: usize) -> Result<Interval> {
        if degree == 0 || self.set.is_empty() {
            return Err(TheoryError::OutOfRange {
                what: "degree",
                value: degree as i64,
            });
        }
        let n = self.set.len();
        let base = (degree - 1) % n;
        let octave_shift = ((degree - 1) / n) as i32;

        let interval = self.set.intervals()[base];
        Ok(interval + Interval::new(OCTAVE * octave_shift))
    }

    /// Note at a 1-based degree (degree 8 of a seven-note scale is the
    /// octave above degree 1)
    pub fn degree(&self, degree: usize) -> Result<Note> {
        Ok(self.set.root() + self.interval_for_degree(degree)?)
    }

    /// Degree (1-based) of the first member with this note's name
    pub fn degree_of(&self, note: Note) -> Option<usize> {
        self.set
            .note_names()
            .iter()
            .position(|&n| n == note.name())
            .map(|i| i + 1)
    }

    /// The scale that starts on `degree` using this scale's notes,
    /// e.g. degree 2 of C major is D dorian
    pub fn mode(&self, degree: usize) -> Result<Scale> {
        let root = self.degree(degree)?;
        let steps = (degree - 1) % self.set.len();
        Ok(Scale::new(root, mode_of(self.set.intervals(), steps)))
    }

    /// Build the named chord on a degree
    pub fn harmonized_chord(&self, registry: &Registry, degree: usize, chord: &str) -> Result<Chord> {
        registry.chord(chord, self.degree(degree)?)
    }

    /// Build the named chord on every degree, in order.
    ///
    /// The same chord builder is used on every degree; no attempt is made
    /// to pick the diatonic quality for each one.
    pub fn all_harmonized_chords(&self, registry: &Registry, chord: &str) -> Result<Vec<Chord>> {
        (1..=self.set.len())
            .map(|d| self.harmonized_chord(registry, d, chord))
            .collect()
    }

    /// Chord builders whose chord on `degree` has the same note names as
    /// the same builder applied to this scale's root
    pub fn valid_chord_names_for_degree(&self, registry: &Registry, degree: usize) -> Result<Vec<String>> {
        let mut valid = Vec::new();
        for name in registry.chord_names() {
            let harmonized = self.harmonized_chord(registry, degree, &name)?;
            let direct = registry.chord(&name, self.set.root())?;
            if harmonized.same_note_names(&direct) {
                valid.push(name);
            }
        }
        Ok(valid)
    }

    /// Chord builders whose chord on `degree` uses only this scale's
    /// pitch classes
    pub fn diatonic_chord_names_for_degree(&self, registry: &Registry, degree: usize) -> Result<Vec<String>> {
        let mut diatonic = Vec::new();
        for name in registry.chord_names() {
            let chord = self.harmonized_chord(registry, degree, &name)?;
            if self.set.contains_note_names_of(&chord) {
                diatonic.push(name);
            }
        }
        Ok(diatonic)
    }
}

impl Deref for Scale {
    type Target = PitchSet;

    fn deref(&self) -> &PitchSet {
        &self.set
    }
}

impl From<Scale> for PitchSet {
    fn from(scale: Scale) -> Self {
        scale.set
    }
}

impl From<&Scale> for Operand {
    fn from(scale: &Scale) -> Self {
        Operand::from(&scale.set)
    }
}

impl From<Scale> for Operand {
    fn from(scale: Scale) -> Self {
        Operand::from(&scale.set)
    }
}

impl<O: Into<Operand>> std::ops::Add<O> for &Scale {
    type Output = Scale;

    fn add(self, rhs: O) -> Scale {
        Scale::add(self, rhs)
    }
}

impl<O: Into<Operand>> std::ops::Add<O> for Scale {
    type Output = Scale;

    fn add(self, rhs: O) -> Scale {
        Scale::add(&self, rhs)
    }
}

impl<O: Into<Operand>> std::ops::Sub<O> for &Scale {
    type Output = Scale;

    fn sub(self, rhs: O) -> Scale {
        self.remove(rhs)
    }
}

impl<O: Into<Operand>> std::ops::Sub<O> for Scale {
    type Output = Scale;

    fn sub(self, rhs: O) -> Scale {
        self.remove(rhs)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set)
    }
}
