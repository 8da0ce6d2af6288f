// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Name-to-builder registry for chords and scales.
//!
//! Harmonization and the catalog file refer to chords and scales by name
//! ("maj7_chord", "dorian_scale"). The registry resolves those names to a
//! builder: custom definitions first, then the built-in [`ChordType`] and
//! [`ScaleType`] tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::chord::{Chord, ChordType};
use super::interval::Interval;
use super::note::Note;
use super::scale::{Scale, ScaleType};
use crate::error::{NameKind, Result, TheoryError};

/// A user-supplied chord or scale: a name and its intervals from the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefinition {
    /// Builder name
    pub name: String,
    /// Intervals from root (semitones)
    pub intervals: Vec<Interval>,
}

impl CustomDefinition {
    pub fn new(name: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self {
            name: name.into(),
            intervals,
        }
    }

    /// Create a chord from this definition
    pub fn to_chord(&self, root: Note) -> Chord {
        Chord::new(root, self.intervals.iter().copied())
    }

    /// Create a scale from this definition
    pub fn to_scale(&self, root: Note) -> Scale {
        Scale::new(root, self.intervals.iter().copied())
    }
}

/// Registry of chord and scale builders
#[derive(Debug, Clone, Default)]
pub struct Registry {
    custom_chords: HashMap<String, CustomDefinition>,
    custom_scales: HashMap<String, CustomDefinition>,
}

/// Normalize a builder name: trimmed, lowercase, spaces and dashes as
/// underscores, always ending in `suffix`
pub(crate) fn builder_key(name: &str, suffix: &str) -> String {
    let name = name.trim().to_lowercase().replace([' ', '-'], "_");
    if name.ends_with(suffix) {
        name
    } else {
        format!("{}{}", name, suffix)
    }
}

impl Registry {
    /// Create a registry holding only the built-in builders
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom chord. A custom chord with the same name as a
    /// built-in one takes precedence over it.
    pub fn register_chord(&mut self, mut def: CustomDefinition) {
        def.name = ChordType::canonical_name(&def.name);
        if ChordType::from_name(&def.name).is_some() {
            warn!(name = %def.name, "custom chord shadows a built-in chord");
        }
        debug!(name = %def.name, intervals = def.intervals.len(), "registered chord");
        self.custom_chords.insert(def.name.clone(), def);
    }

    /// Register a custom scale
    pub fn register_scale(&mut self, mut def: CustomDefinition) {
        def.name = ScaleType::canonical_name(&def.name);
        if ScaleType::from_name(&def.name).is_some() {
            warn!(name = %def.name, "custom scale shadows a built-in scale");
        }
        debug!(name = %def.name, intervals = def.intervals.len(), "registered scale");
        self.custom_scales.insert(def.name.clone(), def);
    }

    /// Build a chord by name on a root (checks custom first, then built-in)
    pub fn chord(&self, name: &str, root: Note) -> Result<Chord> {
        if let Some(def) = self.custom_chords.get(&ChordType::canonical_name(name)) {
            return Ok(def.to_chord(root));
        }
        match ChordType::from_name(name) {
            Some(t) => Ok(t.build(root)),
            None => {
                debug!(name, "chord lookup failed");
                Err(TheoryError::unknown(NameKind::Chord, name))
            }
        }
    }

    /// Build a scale by name on a root (checks custom first, then built-in)
    pub fn scale(&self, name: &str, root: Note) -> Result<Scale> {
        if let Some(def) = self.custom_scales.get(&ScaleType::canonical_name(name)) {
            return Ok(def.to_scale(root));
        }
        match ScaleType::from_name(name) {
            Some(t) => Ok(t.build(root)),
            None => {
                debug!(name, "scale lookup failed");
                Err(TheoryError::unknown(NameKind::Scale, name))
            }
        }
    }

    /// All chord builder names, sorted. Aliases are not listed.
    pub fn chord_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_chords.keys().cloned().collect();
        names.extend(ChordType::ALL.iter().map(|t| t.name().to_string()));
        names.sort();
        names.dedup();
        names
    }

    /// All scale builder names, sorted. Aliases are not listed.
    pub fn scale_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();
        names.extend(ScaleType::ALL.iter().map(|t| t.name().to_string()));
        names.sort();
        names.dedup();
        names
    }
}
