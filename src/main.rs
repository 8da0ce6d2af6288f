// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{bail, Context, Result};
use intervallic::config::CatalogFile;
use intervallic::{Note, Registry, Scale};
use tracing::{debug, Level};

fn print_usage() {
    println!("intervallic - Interval-set music theory");
    println!();
    println!("Usage: intervallic [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  scale <ROOT> <SCALE>                  Show the notes and degrees of a scale");
    println!("  chord <ROOT> <CHORD>                  Show the notes of a chord");
    println!("  harmonize <ROOT> <SCALE> <CHORD>      Build CHORD on every degree of a scale");
    println!("  degrees <ROOT> <SCALE> <COUNT>        List degrees 1..COUNT, past the octave");
    println!("  valid-chords <ROOT> <SCALE> <DEGREE>  Chords that match on DEGREE and on the root");
    println!("  list-chords                           List chord names");
    println!("  list-scales                           List scale names");
    println!("  help                                  Show this help message");
    println!();
    println!("Options:");
    println!("  --catalog <FILE>  Load custom chords and scales (YAML or TOML)");
    println!("  -v, --verbose     Debug logging");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn arg<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing argument: {}", what))
}

fn parse_note(text: &str) -> Result<Note> {
    Note::from_name(text).with_context(|| format!("Invalid root note: {}", text))
}

fn parse_count(text: &str, what: &str) -> Result<usize> {
    text.parse::<usize>()
        .with_context(|| format!("Invalid {}: {}", what, text))
}

fn load_scale(registry: &Registry, args: &[String]) -> Result<Scale> {
    let root = parse_note(arg(args, 1, "ROOT")?)?;
    let name = arg(args, 2, "SCALE")?;
    Ok(registry.scale(name, root)?)
}

fn show_scale(registry: &Registry, args: &[String]) -> Result<()> {
    let scale = load_scale(registry, args)?;
    println!("{}", scale);
    println!("intervals: {:?}", scale.interval_values());
    println!("degrees:   {}", scale.interval_names().join(" "));
    Ok(())
}

fn show_chord(registry: &Registry, args: &[String]) -> Result<()> {
    let root = parse_note(arg(args, 1, "ROOT")?)?;
    let chord = registry.chord(arg(args, 2, "CHORD")?, root)?;
    println!("{}", chord);
    println!("intervals: {:?}", chord.interval_values());
    println!("degrees:   {}", chord.interval_names().join(" "));
    Ok(())
}

fn harmonize(registry: &Registry, args: &[String]) -> Result<()> {
    let scale = load_scale(registry, args)?;
    let chord = arg(args, 3, "CHORD")?;
    for (i, c) in scale.all_harmonized_chords(registry, chord)?.iter().enumerate() {
        println!("{:>2}: {}", i + 1, c.note_names().join(" "));
    }
    Ok(())
}

fn degrees(registry: &Registry, args: &[String]) -> Result<()> {
    let scale = load_scale(registry, args)?;
    let count = parse_count(arg(args, 3, "COUNT")?, "count")?;
    for d in 1..=count {
        let note = scale.degree(d)?;
        println!("{:>2}: {:<4} (+{})", d, note.to_string(), scale.interval_for_degree(d)?);
    }
    Ok(())
}

fn valid_chords(registry: &Registry, args: &[String]) -> Result<()> {
    let scale = load_scale(registry, args)?;
    let degree = parse_count(arg(args, 3, "DEGREE")?, "degree")?;
    for name in scale.valid_chord_names_for_degree(registry, degree)? {
        println!("{}", name);
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");
    init_logging(verbose);

    let registry = match args.iter().position(|a| a == "--catalog") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .cloned()
                .context("--catalog requires a file path")?;
            args.drain(i..i + 2);
            CatalogFile::load(&path)?.into_registry()?
        }
        None => Registry::new(),
    };
    debug!(?args, "parsed arguments");

    let Some(command) = args.first() else {
        println!("intervallic - Interval-set music theory");
        println!("Run with help for usage information");
        return Ok(());
    };

    match command.as_str() {
        "scale" => show_scale(&registry, &args),
        "chord" => show_chord(&registry, &args),
        "harmonize" => harmonize(&registry, &args),
        "degrees" => degrees(&registry, &args),
        "valid-chords" => valid_chords(&registry, &args),
        "list-chords" => {
            registry.chord_names().iter().for_each(|n| println!("{}", n));
            Ok(())
        }
        "list-scales" => {
            registry.scale_names().iter().for_each(|n| println!("{}", n));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {}", other)
        }
    }
}
