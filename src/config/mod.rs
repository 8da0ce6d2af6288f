// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Catalog files for custom chords and scales.
//!
//! A catalog lists chord and scale definitions by name. Intervals may be
//! written as semitone counts or as catalog interval names. YAML and TOML
//! are both accepted; the file extension picks the format.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::music::{CustomDefinition, Interval, Registry};

/// Root of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogFile {
    /// Chord definitions
    #[serde(default)]
    pub chords: Vec<DefinitionConfig>,
    /// Scale definitions
    #[serde(default)]
    pub scales: Vec<DefinitionConfig>,
}

/// One chord or scale definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefinitionConfig {
    /// Builder name (the "_chord"/"_scale" suffix is optional)
    pub name: String,
    /// Intervals from the root
    pub intervals: Vec<IntervalValue>,
}

/// An interval as written in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IntervalValue {
    /// Semitone count
    Semitones(i32),
    /// Catalog name ("maj3") or a number written as a string
    Name(String),
}

impl IntervalValue {
    pub fn resolve(&self) -> crate::Result<Interval> {
        match self {
            IntervalValue::Semitones(v) => Ok(Interval::new(*v)),
            IntervalValue::Name(name) => name.parse(),
        }
    }
}

impl DefinitionConfig {
    /// Resolve interval names into a registry definition
    pub fn resolve(&self) -> crate::Result<CustomDefinition> {
        let intervals = self
            .intervals
            .iter()
            .map(IntervalValue::resolve)
            .collect::<crate::Result<Vec<_>>>()?;
        Ok(CustomDefinition::new(self.name.clone(), intervals))
    }
}

impl CatalogFile {
    /// Load a catalog from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let catalog = if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
        .with_context(|| format!("Failed to load catalog file: {:?}", path))?;

        info!(
            path = %path.display(),
            chords = catalog.chords.len(),
            scales = catalog.scales.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML catalog")
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML catalog")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize catalog to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize catalog to TOML")
    }

    /// Save the catalog, in the format matching the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_toml(path) {
            self.to_toml()?
        } else {
            self.to_yaml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write catalog file: {:?}", path))
    }

    /// Build a registry with every definition of this catalog registered
    pub fn into_registry(self) -> Result<Registry> {
        let mut registry = Registry::new();
        for def in &self.chords {
            let resolved = def
                .resolve()
                .with_context(|| format!("Invalid chord definition: {}", def.name))?;
            registry.register_chord(resolved);
        }
        for def in &self.scales {
            let resolved = def
                .resolve()
                .with_context(|| format!("Invalid scale definition: {}", def.name))?;
            registry.register_scale(resolved);
        }
        Ok(registry)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Note;

    const YAML: &str = r#"
chords:
  - name: mu_chord
    intervals: [unison, maj2, maj3, per5]

scales:
  - name: super_locrian
    intervals: [0, 1, 3, 4, 6, 8, 10]
"#;

    fn c() -> Note {
        Note::from_name("C").unwrap()
    }

    #[test]
    fn test_parse_yaml_catalog() {
        let catalog = CatalogFile::from_yaml(YAML).unwrap();
        assert_eq!(catalog.chords.len(), 1);
        assert_eq!(catalog.scales.len(), 1);
        assert_eq!(catalog.chords[0].intervals[1], IntervalValue::Name("maj2".to_string()));
        assert_eq!(catalog.scales[0].intervals[2], IntervalValue::Semitones(3));
    }

    #[test]
    fn test_parse_toml_catalog() {
        let text = r#"
[[chords]]
name = "mu"
intervals = ["unison", "maj2", 4, 7]
"#;
        let catalog = CatalogFile::from_toml(text).unwrap();
        assert_eq!(catalog.chords.len(), 1);
        assert!(catalog.scales.is_empty());

        let registry = catalog.into_registry().unwrap();
        let chord = registry.chord("mu_chord", c()).unwrap();
        assert_eq!(chord.interval_values(), vec![0, 2, 4, 7]);
    }

    #[test]
    fn test_catalog_into_registry() {
        let registry = CatalogFile::from_yaml(YAML).unwrap().into_registry().unwrap();

        let chord = registry.chord("mu", c()).unwrap();
        assert_eq!(chord.note_names(), vec!["C", "D", "E", "G"]);

        let scale = registry.scale("super_locrian_scale", c()).unwrap();
        assert_eq!(scale.note_names(), vec!["C", "C#", "D#", "E", "F#", "G#", "A#"]);
    }

    #[test]
    fn test_unknown_interval_name() {
        let yaml = r#"
chords:
  - name: broken
    intervals: [unison, maj4]
"#;
        let catalog = CatalogFile::from_yaml(yaml).unwrap();
        let err = catalog.into_registry().unwrap_err();
        assert!(format!("{:#}", err).contains("broken"));
        assert!(format!("{:#}", err).contains("maj4"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CatalogFile::from_yaml("{}").unwrap();
        assert_eq!(catalog, CatalogFile::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(CatalogFile::from_yaml("chords: [name: ").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let original = CatalogFile::from_yaml(YAML).unwrap();

        for file in ["catalog.yaml", "catalog.toml"] {
            let path = dir.path().join(file);
            original.save(&path).unwrap();
            let loaded = CatalogFile::load(&path).unwrap();
            assert_eq!(loaded, original, "{}", file);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogFile::load("/nonexistent/catalog.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }
}
