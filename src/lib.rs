// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval-set music theory: notes, intervals, scales and chords as
//! integer algebra.

pub mod config;
pub mod error;
pub mod music;

pub use error::{NameKind, Result, TheoryError};
pub use music::{
    Chord, ChordType, CustomDefinition, Interval, Mode, Note, Operand, PitchSet, Registry, Scale,
    ScaleType,
};
