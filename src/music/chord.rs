// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords and the built-in chord builders.
//!
//! A [`Chord`] is a [`PitchSet`] with chord-specific conveniences:
//! inversion and single-note editing. [`ChordType`] lists every chord the
//! library knows how to build from a root; most are built by stacking one
//! interval onto a simpler chord, the way they are usually taught.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::note::Note;
use super::pitch_set::{Operand, PitchSet};
use super::registry::builder_key;

/// Suffix of every chord builder name
pub const CHORD_SUFFIX: &str = "_chord";

/// A chord rooted on a note
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    set: PitchSet,
}

impl Chord {
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

    /// Raise the lowest note by an octave
    pub fn invert(&self) -> Chord {
        Chord::from_set(self.set.invert())
    }

    /// Apply [`Chord::invert`] `n` times
    pub fn inversion(&self, n: usize) -> Chord {
        (0..n).fold(self.clone(), |chord, _| chord.invert())
    }

    pub fn add(&self, operand: impl Into<Operand>) -> Chord {
        Chord::from_set(PitchSet::add(&self.set, operand))
    }

    pub fn remove(&self, operand: impl Into<Operand>) -> Chord {
        Chord::from_set(PitchSet::remove(&self.set, operand))
    }

    pub fn add_note(&self, note: Note) -> Chord {
        self.add(note)
    }

    pub fn remove_note(&self, note: Note) -> Chord {
        self.remove(note)
    }

    pub fn add_interval(&self, interval: Interval) -> Chord {
        self.add(interval)
    }

    /// Swap one interval for another, e.g. the fifth of a seventh chord
    /// for a sharp fifth
    pub fn replace_interval(&self, old: Interval, new: Interval) -> Chord {
        Chord::from_set(self.set.replace_interval(old, new))
    }
}

impl Deref for Chord {
    type Target = PitchSet;

    fn deref(&self) -> &PitchSet {
        &self.set
    }
}

impl From<Chord> for PitchSet {
    fn from(chord: Chord) -> Self {
        chord.set
    }
}

impl From<&Chord> for Operand {
    fn from(chord: &Chord) -> Self {
        Operand::from(&chord.set)
    }
}

impl From<Chord> for Operand {
    fn from(chord: Chord) -> Self {
        Operand::from(&chord.set)
    }
}

impl<O: Into<Operand>> std::ops::Add<O> for &Chord {
    type Output = Chord;

    fn add(self, rhs: O) -> Chord {
        Chord::add(self, rhs)
    }
}

impl<O: Into<Operand>> std::ops::Add<O> for Chord {
    type Output = Chord;

    fn add(self, rhs: O) -> Chord {
        Chord::add(&self, rhs)
    }
}

impl<O: Into<Operand>> std::ops::Sub<O> for &Chord {
    type Output = Chord;

    fn sub(self, rhs: O) -> Chord {
        self.remove(rhs)
    }
}

impl<O: Into<Operand>> std::ops::Sub<O> for Chord {
    type Output = Chord;

    fn sub(self, rhs: O) -> Chord {
        self.remove(rhs)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set)
    }
}

/// Built-in chord builders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    // Triads
    Major,
    Minor,
    Dim,
    Aug,
    Fifth,
    Sus2,
    Sus4,

    // Sevenths
    Dim7,
    HalfDim,
    Seventh, // dom7
    Min7,
    Maj7,
    MinMaj7,
    SeventhSus2,
    SeventhSus4,

    // Added tones
    Add2,
    Add9,
    Add4,
    Sixth,
    Min6,
    SixNine,

    // Extended
    Ninth,
    Min9,
    Maj9,
    Eleventh,
    Min11,
    Maj11,
    Thirteenth,
    Min13,
    Maj13,

    // Altered
    SeventhSharp9,
    SeventhB9,
    SeventhSharp5,
    SeventhB5,
}

impl ChordType {
    pub const ALL: [ChordType; 34] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Dim,
        ChordType::Aug,
        ChordType::Fifth,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Dim7,
        ChordType::HalfDim,
        ChordType::Seventh,
        ChordType::Min7,
        ChordType::Maj7,
        ChordType::MinMaj7,
        ChordType::SeventhSus2,
        ChordType::SeventhSus4,
        ChordType::Add2,
        ChordType::Add9,
        ChordType::Add4,
        ChordType::Sixth,
        ChordType::Min6,
        ChordType::SixNine,
        ChordType::Ninth,
        ChordType::Min9,
        ChordType::Maj9,
        ChordType::Eleventh,
        ChordType::Min11,
        ChordType::Maj11,
        ChordType::Thirteenth,
        ChordType::Min13,
        ChordType::Maj13,
        ChordType::SeventhSharp9,
        ChordType::SeventhB9,
        ChordType::SeventhSharp5,
        ChordType::SeventhB5,
    ];

    /// Canonical builder name, e.g. "maj7_chord"
    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "major_chord",
            ChordType::Minor => "minor_chord",
            ChordType::Dim => "dim_chord",
            ChordType::Aug => "aug_chord",
            ChordType::Fifth => "fifth_chord",
            ChordType::Sus2 => "sus2_chord",
            ChordType::Sus4 => "sus4_chord",
            ChordType::Dim7 => "dim7_chord",
            ChordType::HalfDim => "half_dim_chord",
            ChordType::Seventh => "seventh_chord",
            ChordType::Min7 => "min7_chord",
            ChordType::Maj7 => "maj7_chord",
            ChordType::MinMaj7 => "minmaj7_chord",
            ChordType::SeventhSus2 => "seventh_sus2_chord",
            ChordType::SeventhSus4 => "seventh_sus4_chord",
            ChordType::Add2 => "add2_chord",
            ChordType::Add9 => "add9_chord",
            ChordType::Add4 => "add4_chord",
            ChordType::Sixth => "sixth_chord",
            ChordType::Min6 => "min6_chord",
            ChordType::SixNine => "six_nine_chord",
            ChordType::Ninth => "ninth_chord",
            ChordType::Min9 => "min9_chord",
            ChordType::Maj9 => "maj9_chord",
            ChordType::Eleventh => "eleventh_chord",
            ChordType::Min11 => "min11_chord",
            ChordType::Maj11 => "maj11_chord",
            ChordType::Thirteenth => "thirteenth_chord",
            ChordType::Min13 => "min13_chord",
            ChordType::Maj13 => "maj13_chord",
            ChordType::SeventhSharp9 => "seventh_sharp9_chord",
            ChordType::SeventhB9 => "seventh_b9_chord",
            ChordType::SeventhSharp5 => "seventh_sharp5_chord",
            ChordType::SeventhB5 => "seventh_b5_chord",
        }
    }

    /// Lookup key for a chord name: lowercase, underscored, suffixed, with
    /// "dom7" mapped to "seventh_chord"
    pub fn canonical_name(name: &str) -> String {
        let key = builder_key(name, CHORD_SUFFIX);
        match key.as_str() {
            "dom7_chord" => ChordType::Seventh.name().to_string(),
            _ => key,
        }
    }

    /// Look up a builder by name, with or without the "_chord" suffix.
    /// "dom7" is accepted for the seventh chord.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = Self::canonical_name(name);
        ChordType::ALL.iter().copied().find(|t| t.name() == key)
    }

    /// Build this chord on a root
    pub fn build(self, root: Note) -> Chord {
        use ChordType::*;

        let triad = |third: Interval, fifth: Interval| {
            Chord::new(root, [Interval::UNISON, third, fifth])
        };

        match self {
            Major => triad(Interval::MAJ3, Interval::PER5),
            Minor => triad(Interval::MIN3, Interval::PER5),
            Dim => triad(Interval::MIN3, Interval::DIM5),
            Aug => triad(Interval::MAJ3, Interval::SHARP5),
            Fifth => Chord::new(root, [Interval::UNISON, Interval::PER5]),
            Sus2 => Fifth.build(root).add_interval(Interval::MAJ2),
            Sus4 => Fifth.build(root).add_interval(Interval::PER4),

            Dim7 => Dim.build(root).add_interval(Interval::DIM7),
            HalfDim => Dim.build(root).add_interval(Interval::MIN7),
            Seventh => Major.build(root).add_interval(Interval::MIN7),
            Min7 => Minor.build(root).add_interval(Interval::MIN7),
            Maj7 => Major.build(root).add_interval(Interval::MAJ7),
            MinMaj7 => Minor.build(root).add_interval(Interval::MAJ7),
            SeventhSus2 => Sus2.build(root).add_interval(Interval::MIN7),
            SeventhSus4 => Sus4.build(root).add_interval(Interval::MIN7),

            Add2 => Major.build(root).add_interval(Interval::MAJ2),
            Add9 => Major.build(root).add_interval(Interval::MAJ9),
            Add4 => Major.build(root).add_interval(Interval::PER4),
            Sixth => Major.build(root).add_interval(Interval::MAJ6),
            Min6 => Minor.build(root).add_interval(Interval::MAJ6),
            SixNine => Sixth.build(root).add_interval(Interval::MAJ9),

            Ninth => Seventh.build(root).add_interval(Interval::MAJ9),
            Min9 => Min7.build(root).add_interval(Interval::MAJ9),
            Maj9 => Maj7.build(root).add_interval(Interval::MAJ9),
            Eleventh => Ninth.build(root).add_interval(Interval::MAJ11),
            Min11 => Min9.build(root).add_interval(Interval::MAJ11),
            Maj11 => Maj9.build(root).add_interval(Interval::MAJ11),
            Thirteenth => Eleventh.build(root).add_interval(Interval::MAJ13),
            Min13 => Min11.build(root).add_interval(Interval::MAJ13),
            Maj13 => Maj11.build(root).add_interval(Interval::MAJ13),

            SeventhSharp9 => Seventh.build(root).add_interval(Interval::SHARP9),
            SeventhB9 => Seventh.build(root).add_interval(Interval::FLAT9),
            SeventhSharp5 => Seventh
                .build(root)
                .replace_interval(Interval::PER5, Interval::SHARP5),
            SeventhB5 => Seventh
                .build(root)
                .replace_interval(Interval::PER5, Interval::DIM5),
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
