// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A root note plus a set of interval offsets.
//!
//! [`PitchSet`] is the shape shared by scales and chords. Intervals are kept
//! sorted, deduplicated and non-negative. All operations return new values;
//! nothing is modified in place.

use std::fmt;

use super::interval::{Interval, OCTAVE};
use super::note::Note;

/// Anything that can be added to or removed from a pitch set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A single absolute note, taken relative to the receiving set's root
    Note(Note),
    /// A single offset from the receiving set's root
    Interval(Interval),
    /// Several offsets from the receiving set's root
    Intervals(Vec<Interval>),
    /// Absolute notes, e.g. the members of another set on a different root
    Notes(Vec<Note>),
}

impl From<Note> for Operand {
    fn from(note: Note) -> Self {
        Operand::Note(note)
    }
}

impl From<Interval> for Operand {
    fn from(interval: Interval) -> Self {
        Operand::Interval(interval)
    }
}

impl From<Vec<Interval>> for Operand {
    fn from(intervals: Vec<Interval>) -> Self {
        Operand::Intervals(intervals)
    }
}

impl From<&[Interval]> for Operand {
    fn from(intervals: &[Interval]) -> Self {
        Operand::Intervals(intervals.to_vec())
    }
}

impl From<&PitchSet> for Operand {
    fn from(set: &PitchSet) -> Self {
        Operand::Notes(set.notes())
    }
}

impl From<PitchSet> for Operand {
    fn from(set: PitchSet) -> Self {
        Operand::from(&set)
    }
}

/// Root note with an ordered set of offsets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PitchSet {
    root: Note,
    intervals: Vec<Interval>,
}

impl PitchSet {
    /// Create a set from a root and any collection of intervals.
    ///
    /// Duplicates are dropped, the result is sorted, and negative offsets
    /// are raised by octaves until they are non-negative.
    pub fn new(root: Note, intervals: impl IntoIterator<Item = Interval>) -> Self {
        Self {
            root,
            intervals: canonical(intervals),
        }
    }

    /// Create a set from raw semitone offsets
    pub fn from_values(root: Note, values: &[i32]) -> Self {
        Self::new(root, values.iter().copied().map(Interval::new))
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval at a 0-based position
    pub fn interval_at(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    /// Absolute notes, lowest first
    pub fn notes(&self) -> Vec<Note> {
        self.intervals.iter().map(|&i| self.root + i).collect()
    }

    pub fn note_names(&self) -> Vec<&'static str> {
        self.notes().into_iter().map(Note::name).collect()
    }

    pub fn interval_values(&self) -> Vec<i32> {
        self.intervals.iter().map(|i| i.semitones()).collect()
    }

    /// Degree labels ("1", "b3", "5", ...); the 1-based position stands in
    /// for intervals the catalog has no label for
    pub fn interval_names(&self) -> Vec<String> {
        self.intervals
            .iter()
            .enumerate()
            .map(|(pos, i)| match i.label() {
                Some(label) => label.to_string(),
                None => (pos + 1).to_string(),
            })
            .collect()
    }

    /// (interval value, note) pairs in ascending interval order
    pub fn nin_pairs(&self) -> Vec<(i32, Note)> {
        self.intervals
            .iter()
            .map(|&i| (i.semitones(), self.root + i))
            .collect()
    }

    /// Union with an operand's intervals, resolved against this root.
    /// Offsets below the root are raised by octaves like in [`PitchSet::new`].
    pub fn add(&self, operand: impl Into<Operand>) -> PitchSet {
        let extra = self.resolve(operand.into());
        PitchSet::new(self.root, self.intervals.iter().copied().chain(extra))
    }

    /// Difference with an operand's intervals, resolved against this root.
    /// Only exact offsets match: an operand below the root removes nothing.
    pub fn remove(&self, operand: impl Into<Operand>) -> PitchSet {
        let gone = self.resolve(operand.into());
        PitchSet {
            root: self.root,
            intervals: self
                .intervals
                .iter()
                .copied()
                .filter(|i| !gone.contains(i))
                .collect(),
        }
    }

    /// Turn an operand into signed offsets from this set's root
    fn resolve(&self, operand: Operand) -> Vec<Interval> {
        match operand {
            Operand::Interval(i) => vec![i],
            Operand::Intervals(is) => is,
            Operand::Note(n) => vec![Interval::new(self.root.distance_to(n))],
            Operand::Notes(ns) => ns
                .into_iter()
                .map(|n| Interval::new(self.root.distance_to(n)))
                .collect(),
        }
    }

    pub fn contains_interval(&self, interval: Interval) -> bool {
        self.intervals.binary_search(&interval).is_ok()
    }

    /// Whether some member has exactly this absolute value
    pub fn contains_note_value(&self, value: i32) -> bool {
        self.contains_interval(Interval::new(value - self.root.value()))
    }

    /// Whether every absolute note of `other` is a member
    pub fn contains_note_values_of(&self, other: &PitchSet) -> bool {
        other
            .notes()
            .iter()
            .all(|n| self.contains_note_value(n.value()))
    }

    /// Whether every pitch class of `other` appears here, ignoring octave
    pub fn contains_note_names_of(&self, other: &PitchSet) -> bool {
        let names = self.note_names();
        other.note_names().iter().all(|n| names.contains(n))
    }

    /// Note names present in both sets, in this set's order
    pub fn note_names_in_common(&self, other: &PitchSet) -> Vec<&'static str> {
        let theirs = other.note_names();
        let mut common: Vec<&'static str> = Vec::new();
        for name in self.note_names() {
            if theirs.contains(&name) && !common.contains(&name) {
                common.push(name);
            }
        }
        common
    }

    /// Same pitch classes, regardless of order, octave or root
    pub fn same_note_names(&self, other: &PitchSet) -> bool {
        let mut ours = self.note_names();
        let mut theirs = other.note_names();
        ours.sort_unstable();
        ours.dedup();
        theirs.sort_unstable();
        theirs.dedup();
        ours == theirs
    }

    /// Raise the lowest member by an octave
    pub fn invert(&self) -> PitchSet {
        let Some((&lowest, rest)) = self.intervals.split_first() else {
            return self.clone();
        };
        PitchSet::new(
            self.root,
            rest.iter()
                .copied()
                .chain(std::iter::once(lowest + Interval::new(OCTAVE))),
        )
    }

    /// Swap one offset for another
    pub fn replace_interval(&self, old: Interval, new: Interval) -> PitchSet {
        self.remove(old).add(new)
    }

    /// Move the root, keeping the intervals
    pub fn transpose(&self, interval: Interval) -> PitchSet {
        PitchSet {
            root: self.root + interval,
            intervals: self.intervals.clone(),
        }
    }
}

fn canonical(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut out: Vec<Interval> = intervals
        .into_iter()
        .map(Interval::lift_non_negative)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

impl<O: Into<Operand>> std::ops::Add<O> for &PitchSet {
    type Output = PitchSet;

    fn add(self, rhs: O) -> PitchSet {
        PitchSet::add(self, rhs)
    }
}

impl<O: Into<Operand>> std::ops::Add<O> for PitchSet {
    type Output = PitchSet;

    fn add(self, rhs: O) -> PitchSet {
        PitchSet::add(&self, rhs)
    }
}

impl<O: Into<Operand>> std::ops::Sub<O> for &PitchSet {
    type Output = PitchSet;

    fn sub(self, rhs: O) -> PitchSet {
        self.remove(rhs)
    }
}

impl<O: Into<Operand>> std::ops::Sub<O> for PitchSet {
    type Output = PitchSet;

    fn sub(self, rhs: O) -> PitchSet {
        self.remove(rhs)
    }
}

impl fmt::Display for PitchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.root, self.note_names().join(" "))
    }
}
