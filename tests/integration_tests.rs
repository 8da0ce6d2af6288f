// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for intervallic
//!
//! These tests exercise the public API the way a caller would: notes and
//! intervals feed pitch sets, which feed scales, chords and the registry.

use std::collections::BTreeSet;

use intervallic::config::CatalogFile;
use intervallic::music::interval::{intervals, mode_of, shift_and_zero, IONIAN};
use intervallic::music::note::TWELVE_TONES;
use intervallic::{ChordType, Interval, Note, PitchSet, Registry, ScaleType, TheoryError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn note(name: &str) -> Note {
    Note::from_name(name).unwrap()
}

/// Random zero-based interval set inside one octave
fn random_set(rng: &mut StdRng) -> Vec<Interval> {
    let mut values: BTreeSet<i32> = BTreeSet::new();
    values.insert(0);
    let extra = rng.gen_range(0..11);
    for _ in 0..extra {
        values.insert(rng.gen_range(1..12));
    }
    values.into_iter().map(Interval::new).collect()
}

/// Octave equivalence holds for every note name
#[test]
fn test_octave_equivalence() {
    for name in TWELVE_TONES {
        let orig = note(name);
        let high = orig + Interval::new(12);
        assert_eq!(high.name(), orig.name());
        assert_eq!(high.value(), orig.value() + 12);
    }
}

/// A note is not an interval
#[test]
fn test_note_plus_note_fails() {
    let c = note("C");
    assert!(matches!(
        c.plus_interval(c),
        Err(TheoryError::InvalidArgument(_))
    ));
}

/// Mode shift is a generator of order N on any set
#[test]
fn test_mode_shift_order() {
    let ionian = intervals(&IONIAN);
    let dorian = shift_and_zero(&ionian);
    assert_eq!(
        dorian.iter().map(|i| i.semitones()).collect::<Vec<_>>(),
        vec![0, 2, 3, 5, 7, 9, 10]
    );
    assert_eq!(mode_of(&ionian, 7), ionian);

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let set = random_set(&mut rng);
        let n = set.len();
        assert_eq!(mode_of(&set, n), set, "set {:?}", set);

        let shifted = shift_and_zero(&set);
        assert_eq!(shifted.len(), n);
        assert_eq!(shifted[0], Interval::UNISON);
    }
}

/// Double inversion keeps the chord's note names
#[test]
fn test_chord_inversion() {
    let chord = ChordType::Major.build(note("C"));
    assert_eq!(chord.note_names(), vec!["C", "E", "G"]);

    let twice = chord.invert().invert();
    let names = |c: &PitchSet| c.note_names().into_iter().collect::<BTreeSet<_>>();
    assert_eq!(names(twice.as_set()), names(chord.as_set()));
}

/// Adding then removing an absent interval restores the set
#[test]
fn test_add_remove_inverse() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let set = PitchSet::new(note("C"), random_set(&mut rng));
        let candidate = Interval::new(rng.gen_range(0..24));
        if set.contains_interval(candidate) {
            continue;
        }
        let round = set.add(candidate).remove(candidate);
        assert_eq!(round.interval_values(), set.interval_values());
    }
}

/// Degrees run past the octave
#[test]
fn test_major_scale_degrees() {
    let scale = ScaleType::Major.build(note("C"));
    let names: Vec<&str> = (1..=7).map(|d| scale.degree(d).unwrap().name()).collect();
    assert_eq!(names, vec!["C", "D", "E", "F", "G", "A", "B"]);

    let extended: Vec<i32> = (8..=15)
        .map(|d| scale.interval_for_degree(d).unwrap().semitones())
        .collect();
    assert_eq!(extended, vec![12, 14, 16, 17, 19, 21, 23, 24]);
}

/// Scale minus chord, chord plus chord across roots
#[test]
fn test_scale_chord_algebra() {
    let c = note("C");
    let scale = ScaleType::Major.build(c);

    let diff = &scale - ChordType::Major.build(c);
    assert_eq!(diff.note_names(), vec!["D", "F", "A", "B"]);

    let union = ChordType::Maj7.build(c) + ChordType::Minor.build(note("D"));
    assert_eq!(union.notes(), scale.notes());
}

/// Extended chords line up with scale degrees past the octave
#[test]
fn test_extended_chords_from_degrees() {
    let c = note("C");
    let scale = ScaleType::Mixolydian.build(c);
    let stacked: Vec<Interval> = [1, 3, 5, 7, 9, 11, 13]
        .iter()
        .map(|&d| scale.interval_for_degree(d).unwrap())
        .collect();
    let thirteenth = ChordType::Thirteenth.build(c);
    assert_eq!(thirteenth.intervals(), stacked.as_slice());
}

/// Harmonizing on degree 1 matches building off the root, for every scale
#[test]
fn test_harmonization_round_trip() {
    let registry = Registry::new();
    let c = note("C");

    for scale_name in registry.scale_names() {
        let scale = registry.scale(&scale_name, c).unwrap();
        let valid = scale.valid_chord_names_for_degree(&registry, 1).unwrap();
        assert_eq!(valid, registry.chord_names(), "{}", scale_name);

        for chord_name in valid {
            let harmonized = scale.harmonized_chord(&registry, 1, &chord_name).unwrap();
            let direct = registry.chord(&chord_name, c).unwrap();
            assert_eq!(
                harmonized.note_names(),
                direct.note_names(),
                "{} / {}",
                scale_name,
                chord_name
            );
        }
    }
}

/// Harmonization applies the same chord quality on every degree
#[test]
fn test_all_harmonized_chords_keep_quality() {
    let registry = Registry::new();
    let scale = ScaleType::Dorian.build(note("D"));
    let chords = scale.all_harmonized_chords(&registry, "min7_chord").unwrap();
    assert_eq!(chords.len(), 7);
    for (d, chord) in chords.iter().enumerate() {
        assert_eq!(chord.root(), scale.degree(d + 1).unwrap());
        assert_eq!(chord.interval_values(), vec![0, 3, 7, 10]);
    }
}

/// Catalog definitions behave like built-in builders
#[test]
fn test_catalog_chords_harmonize() {
    let yaml = r#"
chords:
  - name: quartal
    intervals: [unison, per4, min7]
scales:
  - name: hirajoshi
    intervals: [0, 2, 3, 7, 8]
"#;
    let registry = CatalogFile::from_yaml(yaml).unwrap().into_registry().unwrap();
    let scale = registry.scale("hirajoshi", note("A")).unwrap();
    assert_eq!(scale.note_names(), vec!["A", "B", "C", "E", "F"]);

    let chords = scale.all_harmonized_chords(&registry, "quartal_chord").unwrap();
    assert_eq!(chords.len(), 5);
    assert_eq!(chords[0].note_names(), vec!["A", "D", "G"]);

    let valid = scale.valid_chord_names_for_degree(&registry, 1).unwrap();
    assert!(valid.contains(&"quartal_chord".to_string()));
}

/// Errors surface at the offending call
#[test]
fn test_error_kinds() {
    let registry = Registry::new();
    let scale = ScaleType::Major.build(note("C"));

    assert!(matches!(scale.degree(0), Err(TheoryError::OutOfRange { .. })));
    assert!(matches!(
        registry.chord("no_such_chord", note("C")),
        Err(TheoryError::UnknownName { .. })
    ));
    assert!(matches!(
        "twelve".parse::<Interval>(),
        Err(TheoryError::UnknownName { .. })
    ));
    assert!(matches!(
        "1/2".parse::<Interval>(),
        Err(TheoryError::InvalidArgument(_))
    ));
}
