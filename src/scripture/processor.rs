//! File processing API for sermon texts
//!
//! A thin façade over the extraction pipeline for callers that deal in
//! files and display payloads: the CLI and export collaborators. The core
//! pipeline itself cannot fail; only reading input and serializing output
//! can, and those failures surface here as [ProcessError].

use crate::scripture::merging::ExtractionResult;
use crate::scripture::metadata::{extract_metadata, SermonMetadata};
use crate::scripture::pipeline::extract_references;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One rendered reference per line; the copy/export payload shape.
    Simple,
    /// A JSON document with metadata and references.
    Json,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn parse(name: &str) -> Result<Self, ProcessError> {
        match name {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors from the file/format façade.
#[derive(Debug)]
pub enum ProcessError {
    ReadFailed(String),
    UnknownFormat(String),
    SerializationFailed(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ReadFailed(msg) => write!(f, "Failed to read input: {}", msg),
            ProcessError::UnknownFormat(name) => write!(f, "Unknown output format '{}'", name),
            ProcessError::SerializationFailed(msg) => {
                write!(f, "Failed to serialize output: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProcessError {}

/// Extraction plus metadata for one source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedSermon {
    pub metadata: SermonMetadata,
    pub references: ExtractionResult,
}

/// Run the pipeline over a source text and render the requested format.
pub fn process_source(source: &str, format: OutputFormat) -> Result<String, ProcessError> {
    match format {
        OutputFormat::Simple => Ok(extract_references(source).rendered().join("\n")),
        OutputFormat::Json => {
            let processed = ProcessedSermon {
                metadata: extract_metadata(source),
                references: extract_references(source),
            };
            serde_json::to_string_pretty(&processed)
                .map_err(|e| ProcessError::SerializationFailed(e.to_string()))
        }
    }
}

/// Read a file and process it.
pub fn process_file(path: &Path, format: OutputFormat) -> Result<String, ProcessError> {
    let source =
        fs::read_to_string(path).map_err(|e| ProcessError::ReadFailed(e.to_string()))?;
    process_source(&source, format)
}
