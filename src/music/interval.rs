// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals, the named interval catalog and diatonic mode derivation.
//!
//! An [`Interval`] is a plain semitone offset. Compound intervals (a ninth,
//! a thirteenth) are simply offsets of 12 or more. The catalog maps the
//! conventional short names (`maj3`, `per5`, `b9`, ...) onto offsets, and
//! supplies the named interval sets that scales are built from. The modes
//! of the major scale are not tabulated: they are derived from ionian by
//! [`shift_and_zero`].

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NameKind, Result, TheoryError};

/// Semitones in one octave
pub const OCTAVE: i32 = 12;

/// A distance in semitones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval {
    semitones: i32,
}

/// Named intervals. Several names may share one offset.
const NAMED_INTERVALS: &[(&str, i32)] = &[
    ("unison", 0),
    ("min2", 1),
    ("b2", 1),
    ("maj2", 2),
    ("min3", 3),
    ("maj3", 4),
    ("per4", 5),
    ("dim5", 6),
    ("b5", 6),
    ("sharp4", 6),
    ("per5", 7),
    ("sharp5", 8),
    ("aug5", 8),
    ("min6", 8),
    ("maj6", 9),
    ("bb7", 9),
    ("dim7", 9),
    ("min7", 10),
    ("b7", 10),
    ("maj7", 11),
    ("octave", 12),
    ("b9", 13),
    ("maj9", 14),
    ("sharp9", 15),
    ("maj11", 17),
    ("sharp11", 18),
    ("maj13", 21),
];

/// Short degree labels used when describing the intervals of a set
const LABELS: &[(i32, &str)] = &[
    (0, "1"),
    (1, "b2"),
    (2, "2"),
    (3, "b3"),
    (4, "3"),
    (5, "4"),
    (6, "b5"),
    (7, "5"),
    (8, "#5"),
    (9, "6"),
    (10, "b7"),
    (11, "7"),
    (12, "8"),
    (13, "b9"),
    (14, "9"),
    (15, "#9"),
    (17, "11"),
    (18, "#11"),
    (21, "13"),
];

/// Major scale, the parent of all diatonic modes
pub const IONIAN: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
/// All twelve semitones
pub const CHROMATIC: [i32; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
pub const HARMONIC_MINOR: [i32; 7] = [0, 2, 3, 5, 7, 8, 11];
/// Ascending form
pub const MELODIC_MINOR: [i32; 7] = [0, 2, 3, 5, 7, 9, 11];

impl Interval {
    pub const UNISON: Interval = Interval::new(0);
    pub const MIN2: Interval = Interval::new(1);
    pub const MAJ2: Interval = Interval::new(2);
    pub const MIN3: Interval = Interval::new(3);
    pub const MAJ3: Interval = Interval::new(4);
    pub const PER4: Interval = Interval::new(5);
    pub const DIM5: Interval = Interval::new(6);
    pub const PER5: Interval = Interval::new(7);
    pub const SHARP5: Interval = Interval::new(8);
    pub const MAJ6: Interval = Interval::new(9);
    pub const DIM7: Interval = Interval::new(9);
    pub const MIN7: Interval = Interval::new(10);
    pub const MAJ7: Interval = Interval::new(11);
    pub const OCTAVE: Interval = Interval::new(OCTAVE);
    pub const FLAT9: Interval = Interval::new(13);
    pub const MAJ9: Interval = Interval::new(14);
    pub const SHARP9: Interval = Interval::new(15);
    pub const MAJ11: Interval = Interval::new(17);
    pub const MAJ13: Interval = Interval::new(21);

    /// Create an interval from a raw semitone count
    pub const fn new(semitones: i32) -> Self {
        Self { semitones }
    }

    pub fn semitones(self) -> i32 {
        self.semitones
    }

    /// Look up a named interval (e.g. "maj3", "per5", "b9")
    pub fn named(name: &str) -> Result<Self> {
        NAMED_INTERVALS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| Interval::new(v))
            .ok_or_else(|| TheoryError::unknown(NameKind::Interval, name))
    }

    /// Short degree label ("1", "b3", "#5", "9"), if the catalog has one
    pub fn label(self) -> Option<&'static str> {
        LABELS
            .iter()
            .find(|(v, _)| *v == self.semitones)
            .map(|&(_, l)| l)
    }

    /// Catalog names for this interval, in catalog order
    pub fn names(self) -> Vec<&'static str> {
        NAMED_INTERVALS
            .iter()
            .filter(|(_, v)| *v == self.semitones)
            .map(|&(n, _)| n)
            .collect()
    }

    /// Raise a negative interval by whole octaves until it is non-negative
    pub fn lift_non_negative(self) -> Self {
        if self.semitones >= 0 {
            return self;
        }
        Interval::new(self.semitones.rem_euclid(OCTAVE))
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    /// Parse either a semitone count ("7", "-12") or a catalog name ("per5")
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i32>() {
            return Ok(Interval::new(v));
        }
        let looks_like_name = s.starts_with(|c: char| c.is_ascii_alphabetic())
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !looks_like_name {
            return Err(TheoryError::InvalidArgument(format!(
                "interval must be an integer or a name, got {:?}",
                s
            )));
        }
        Interval::named(s)
    }
}

impl From<i32> for Interval {
    fn from(semitones: i32) -> Self {
        Interval::new(semitones)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::new(self.semitones + rhs.semitones)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::new(self.semitones - rhs.semitones)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semitones)
    }
}

/// Convert raw semitone values into intervals
pub fn intervals(values: &[i32]) -> Vec<Interval> {
    values.iter().copied().map(Interval::new).collect()
}

/// Derive the mode that starts one step later in the same underlying scale.
///
/// `[v0, v1, .., vN-1]` is rotated to `[v1, .., vN-1, v0 + 12]` and then
/// shifted down so that it starts at zero. Applying this `N` times to a
/// zero-based set within one octave gives the set back.
pub fn shift_and_zero(set: &[Interval]) -> Vec<Interval> {
    let Some((&first, rest)) = set.split_first() else {
        return Vec::new();
    };
    let mut rotated: Vec<Interval> = rest.to_vec();
    rotated.push(first + Interval::OCTAVE);

    let k = rotated[0];
    rotated.into_iter().map(|i| i - k).collect()
}

/// Apply [`shift_and_zero`] `steps` times
pub fn mode_of(set: &[Interval], steps: usize) -> Vec<Interval> {
    let mut current = set.to_vec();
    for _ in 0..steps {
        current = shift_and_zero(&current);
    }
    current
}

/// The seven diatonic modes, in the order they rotate out of ionian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Rotation count from ionian
    pub fn index(self) -> usize {
        match self {
            Mode::Ionian => 0,
            Mode::Dorian => 1,
            Mode::Phrygian => 2,
            Mode::Lydian => 3,
            Mode::Mixolydian => 4,
            Mode::Aeolian => 5,
            Mode::Locrian => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        }
    }

    /// Intervals of this mode, derived from ionian
    pub fn intervals(self) -> Vec<Interval> {
        mode_of(&intervals(&IONIAN), self.index())
    }

    /// The mode one step further along (locrian wraps to ionian)
    pub fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Look up a named interval set ("ionian", "dorian", "chromatic", ...)
pub fn named_set(name: &str) -> Result<Vec<Interval>> {
    if let Some(mode) = Mode::ALL.iter().find(|m| m.name() == name) {
        return Ok(mode.intervals());
    }
    match name {
        "chromatic" => Ok(intervals(&CHROMATIC)),
        "harmonic_minor" => Ok(intervals(&HARMONIC_MINOR)),
        "melodic_minor" => Ok(intervals(&MELODIC_MINOR)),
        _ => Err(TheoryError::unknown(NameKind::IntervalSet, name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &[Interval]) -> Vec<i32> {
        set.iter().map(|i| i.semitones()).collect()
    }

    #[test]
    fn test_named_intervals() {
        assert_eq!(Interval::named("unison").unwrap(), Interval::UNISON);
        assert_eq!(Interval::named("maj3").unwrap().semitones(), 4);
        assert_eq!(Interval::named("per5").unwrap().semitones(), 7);
        assert_eq!(Interval::named("maj13").unwrap().semitones(), 21);
        assert_eq!(Interval::DIM5.names(), vec!["dim5", "b5", "sharp4"]);
        assert!(matches!(
            Interval::named("maj4"),
            Err(TheoryError::UnknownName { kind: NameKind::Interval, .. })
        ));
    }

    #[test]
    fn test_interval_from_str() {
        assert_eq!("7".parse::<Interval>().unwrap().semitones(), 7);
        assert_eq!("-12".parse::<Interval>().unwrap().semitones(), -12);
        assert_eq!("min3".parse::<Interval>().unwrap().semitones(), 3);
        assert!(matches!(
            "3.5".parse::<Interval>(),
            Err(TheoryError::InvalidArgument(_))
        ));
        assert!(matches!(
            "flat_eleven".parse::<Interval>(),
            Err(TheoryError::UnknownName { .. })
        ));
    }

    #[test]
    fn test_interval_ordering() {
        assert!(Interval::MIN3 < Interval::MAJ3);
        assert_eq!(Interval::MAJ6, Interval::DIM7);
        assert_eq!(Interval::PER5 + Interval::OCTAVE, Interval::new(19));
        assert_eq!(Interval::MAJ9 - Interval::OCTAVE, Interval::MAJ2);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Interval::UNISON.label(), Some("1"));
        assert_eq!(Interval::MIN3.label(), Some("b3"));
        assert_eq!(Interval::MAJ9.label(), Some("9"));
        assert_eq!(Interval::new(16).label(), None);
    }

    #[test]
    fn test_lift_non_negative() {
        assert_eq!(Interval::new(-1).lift_non_negative(), Interval::MAJ7);
        assert_eq!(Interval::new(-12).lift_non_negative(), Interval::UNISON);
        assert_eq!(Interval::new(14).lift_non_negative(), Interval::MAJ9);
    }

    #[test]
    fn test_shift_ionian_to_dorian() {
        let dorian = shift_and_zero(&intervals(&IONIAN));
        assert_eq!(values(&dorian), vec![0, 2, 3, 5, 7, 9, 10]);
    }

    #[test]
    fn test_mode_chain() {
        let expected: [[i32; 7]; 7] = [
            [0, 2, 4, 5, 7, 9, 11],
            [0, 2, 3, 5, 7, 9, 10],
            [0, 1, 3, 5, 7, 8, 10],
            [0, 2, 4, 6, 7, 9, 11],
            [0, 2, 4, 5, 7, 9, 10],
            [0, 2, 3, 5, 7, 8, 10],
            [0, 1, 3, 5, 6, 8, 10],
        ];
        for (mode, want) in Mode::ALL.iter().zip(expected.iter()) {
            assert_eq!(values(&mode.intervals()), want.to_vec(), "{}", mode);
            assert_eq!(
                values(&shift_and_zero(&mode.intervals())),
                values(&mode.next().intervals())
            );
        }
    }

    #[test]
    fn test_shift_has_order_n() {
        let pentatonic = intervals(&[0, 2, 4, 7, 9]);
        assert_eq!(mode_of(&pentatonic, 5), pentatonic);
        assert_ne!(mode_of(&pentatonic, 2), pentatonic);

        let chromatic = intervals(&CHROMATIC);
        assert_eq!(shift_and_zero(&chromatic), chromatic);
    }

    #[test]
    fn test_shift_degenerate_sets() {
        assert!(shift_and_zero(&[]).is_empty());
        assert_eq!(shift_and_zero(&[Interval::UNISON]), vec![Interval::UNISON]);
    }

    #[test]
    fn test_named_sets() {
        assert_eq!(values(&named_set("locrian").unwrap()), vec![0, 1, 3, 5, 6, 8, 10]);
        assert_eq!(named_set("chromatic").unwrap().len(), 12);
        assert_eq!(values(&named_set("harmonic_minor").unwrap()), HARMONIC_MINOR.to_vec());
        assert!(named_set("bebop").is_err());
    }
}
