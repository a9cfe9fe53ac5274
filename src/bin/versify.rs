//! Command-line interface for versify
//!
//! Usage:
//!   versify extract `<path>` [--format `<format>`]  - Extract scripture references
//!   versify metadata `<path>`                     - Show the sermon metadata record
//!
//! A path of `-` reads the sermon text from stdin.

use clap::{Arg, Command};
use std::io::Read;
use versify::scripture::metadata::extract_metadata;
use versify::scripture::processor::{process_source, OutputFormat};

fn main() {
    let matches = Command::new("versify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract scripture references from sermon texts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Extract the reference list from a sermon text")
                .arg(
                    Arg::new("path")
                        .help("Path to the sermon text, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple', 'json')")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("metadata")
                .about("Show the title/topic/date record for a sermon text")
                .arg(
                    Arg::new("path")
                        .help("Path to the sermon text, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let format = extract_matches.get_one::<String>("format").unwrap();
            handle_extract_command(path, format);
        }
        Some(("metadata", metadata_matches)) => {
            let path = metadata_matches.get_one::<String>("path").unwrap();
            handle_metadata_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the extract command
fn handle_extract_command(path: &str, format: &str) {
    let format = OutputFormat::parse(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let source = read_source(path);
    let output = process_source(&source, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the metadata command
fn handle_metadata_command(path: &str) {
    let source = read_source(path);
    let meta = extract_metadata(&source);
    println!("Título: {}", meta.title);
    println!("Tema: {}", meta.topic);
    println!("Fecha: {}", meta.date);
}

/// Read the sermon text from a file, or stdin when the path is `-`.
fn read_source(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}
