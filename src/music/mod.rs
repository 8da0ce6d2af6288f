// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory as interval-set algebra.
//!
//! Notes and intervals are plain integers; scales and chords are a root
//! note plus a set of intervals, and combine through set operations.

pub mod chord;
pub mod interval;
pub mod note;
pub mod pitch_set;
pub mod registry;
pub mod scale;

pub use chord::{Chord, ChordType};
pub use interval::{mode_of, named_set, shift_and_zero, Interval, Mode};
pub use note::Note;
pub use pitch_set::{Operand, PitchSet};
pub use registry::{CustomDefinition, Registry};
pub use scale::{Scale, ScaleType};
