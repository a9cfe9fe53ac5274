//! Extraction pipeline
//!
//! Wires the stages together: tokenize, scan against the book table,
//! resolve continuations and orphans, merge into ranges. The pipeline holds
//! no state between runs; extracting twice from the same text yields the
//! same result.

use crate::scripture::books::{canonical_table, BookTable};
use crate::scripture::lexing::tokenize;
use crate::scripture::merging::{merge, ExtractionResult};
use crate::scripture::resolving::resolve;
use crate::scripture::scanning::scan;

/// Extraction engine bound to a book table.
///
/// The table is injected by reference so tests can run against a custom
/// table; production callers use [extract_references], which binds the
/// canonical one.
pub struct Extractor<'t> {
    table: &'t BookTable,
}

impl<'t> Extractor<'t> {
    pub fn new(table: &'t BookTable) -> Self {
        Extractor { table }
    }

    /// Run the full pipeline over one text.
    pub fn extract(&self, source: &str) -> ExtractionResult {
        let tokens = tokenize(source);
        let matches = scan(&tokens, self.table);
        let tuples = resolve(&tokens, &matches, source);
        merge(tuples)
    }
}

/// Extract scripture references using the canonical book table.
pub fn extract_references(source: &str) -> ExtractionResult {
    Extractor::new(canonical_table()).extract(source)
}
