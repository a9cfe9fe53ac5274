//! # versify
//!
//! Scripture reference extraction for sermon texts.
//!
//! Given free-form sermon notes, versify finds Bible citations (book,
//! chapter, verse or verse-range), normalizes book abbreviations to their
//! canonical Spanish names, and returns a deduplicated, range-merged list of
//! references in order of first appearance.
//!
//! ## Testing
//!
//! Test content lives in the [testing module](scripture::testing): verified
//! sermon samples are curated there and reused across unit and integration
//! tests instead of scattering excerpts through test files.

pub mod scripture;

pub use scripture::merging::{ExtractionResult, Reference};
pub use scripture::metadata::{extract_metadata, SermonMetadata};
pub use scripture::pipeline::extract_references;
