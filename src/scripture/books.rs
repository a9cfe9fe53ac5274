//! Canonical book table
//!
//! Maps every recognized abbreviation or spelling variant of a Bible book to
//! a single canonical Spanish display name. The table is the membership test
//! used by the scanner: a candidate whose normalized abbreviation is not a
//! key here is never a reference, no matter how citation-shaped it looks.
//!
//! Keys are normalized with [normalize_key]: periods stripped, whitespace
//! removed, Unicode-uppercased. Both accented and unaccented spellings are
//! listed so that "Genesis 1" and "Génesis 1" resolve to the same book.
//!
//! The table is immutable after construction. [canonical_table] builds it
//! once behind a `Lazy` and hands out a shared reference; callers that want
//! a custom table for tests can construct their own [BookTable].

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A scripture book identified by its canonical display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalBook {
    name: &'static str,
}

impl CanonicalBook {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for CanonicalBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Canonical name plus the raw spellings that resolve to it.
///
/// The canonical name itself always resolves, so it is not repeated in the
/// variant list. Numbered books list their variants with the leading numeral
/// included ("1 Co"); the numeral-plus-word shape is what the scanner
/// assembles before lookup.
const BOOKS: &[(&str, &[&str])] = &[
    ("Génesis", &["Genesis", "Gn", "Gén", "Gen"]),
    ("Éxodo", &["Exodo", "Ex", "Éx", "Éxo", "Exo"]),
    ("Levítico", &["Levitico", "Lv", "Lev"]),
    ("Números", &["Numeros", "Nm", "Núm", "Num"]),
    ("Deuteronomio", &["Dt", "Deut"]),
    ("Josué", &["Josue", "Jos"]),
    ("Jueces", &["Jue", "Jc"]),
    ("Rut", &["Rt"]),
    ("1 Samuel", &["1 S", "1 Sa", "1 Sam"]),
    ("2 Samuel", &["2 S", "2 Sa", "2 Sam"]),
    ("1 Reyes", &["1 R", "1 Re", "1 Rey"]),
    ("2 Reyes", &["2 R", "2 Re", "2 Rey"]),
    ("1 Crónicas", &["1 Cronicas", "1 Cr", "1 Cro", "1 Crón", "1 Cron"]),
    ("2 Crónicas", &["2 Cronicas", "2 Cr", "2 Cro", "2 Crón", "2 Cron"]),
    ("Esdras", &["Esd"]),
    ("Nehemías", &["Nehemias", "Neh"]),
    ("Ester", &["Est"]),
    ("Job", &[]),
    ("Salmos", &["Sal", "Salmo", "Slm"]),
    ("Proverbios", &["Pr", "Prov", "Prv"]),
    ("Eclesiastés", &["Eclesiastes", "Ec", "Ecl"]),
    ("Cantares", &["Cnt", "Cant"]),
    ("Isaías", &["Isaias", "Is", "Isa"]),
    ("Jeremías", &["Jeremias", "Jer"]),
    ("Lamentaciones", &["Lm", "Lam"]),
    ("Ezequiel", &["Ez", "Eze", "Ezeq"]),
    ("Daniel", &["Dn", "Dan"]),
    ("Oseas", &["Os"]),
    ("Joel", &["Jl"]),
    ("Amós", &["Amos", "Am"]),
    ("Abdías", &["Abdias", "Abd"]),
    ("Jonás", &["Jonas", "Jon"]),
    ("Miqueas", &["Mi", "Miq"]),
    ("Nahúm", &["Nahum", "Nah"]),
    ("Habacuc", &["Hab"]),
    ("Sofonías", &["Sofonias", "Sof"]),
    ("Hageo", &["Hag"]),
    ("Zacarías", &["Zacarias", "Zac"]),
    ("Malaquías", &["Malaquias", "Mal"]),
    ("Mateo", &["Mt", "Mat"]),
    ("Marcos", &["Mr", "Mc", "Mar"]),
    ("Lucas", &["Lc", "Luc"]),
    ("Juan", &["Jn"]),
    ("Hechos", &["Hch", "Hech"]),
    ("Romanos", &["Ro", "Rom"]),
    ("1 Corintios", &["1 Co", "1 Cor"]),
    ("2 Corintios", &["2 Co", "2 Cor"]),
    ("Gálatas", &["Galatas", "Gá", "Gál", "Ga", "Gal"]),
    ("Efesios", &["Ef", "Efe"]),
    ("Filipenses", &["Fil", "Flp"]),
    ("Colosenses", &["Col"]),
    ("1 Tesalonicenses", &["1 Ts", "1 Tes"]),
    ("2 Tesalonicenses", &["2 Ts", "2 Tes"]),
    ("1 Timoteo", &["1 Ti", "1 Tim"]),
    ("2 Timoteo", &["2 Ti", "2 Tim"]),
    ("Tito", &["Tit"]),
    ("Filemón", &["Filemon", "Flm", "Film"]),
    ("Hebreos", &["He", "Heb"]),
    ("Santiago", &["Stg", "Sant"]),
    ("1 Pedro", &["1 P", "1 Pe", "1 Ped"]),
    ("2 Pedro", &["2 P", "2 Pe", "2 Ped"]),
    ("1 Juan", &["1 Jn"]),
    ("2 Juan", &["2 Jn"]),
    ("3 Juan", &["3 Jn"]),
    ("Judas", &["Jud"]),
    ("Apocalipsis", &["Ap", "Apoc"]),
];

/// Normalize a raw abbreviation into a lookup key.
///
/// Strips periods, removes all whitespace, and uppercases. "1 Co.", "1Co"
/// and "1 co" all normalize to "1CO".
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Immutable many-to-one map from normalized abbreviation keys to books.
#[derive(Debug)]
pub struct BookTable {
    entries: HashMap<String, CanonicalBook>,
}

impl BookTable {
    /// Build the table from the static book list.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for (name, variants) in BOOKS {
            let book = CanonicalBook { name };
            entries.insert(normalize_key(name), book);
            for variant in *variants {
                entries.insert(normalize_key(variant), book);
            }
        }
        BookTable { entries }
    }

    /// Resolve a raw abbreviation, normalizing it first.
    ///
    /// Returns `None` for anything that is not a recognized book spelling;
    /// the scanner relies on this to reject citation-shaped prose.
    pub fn lookup(&self, raw: &str) -> Option<CanonicalBook> {
        self.entries.get(&normalize_key(raw)).copied()
    }

    /// Resolve an already-normalized key without re-normalizing.
    pub fn lookup_key(&self, key: &str) -> Option<CanonicalBook> {
        self.entries.get(key).copied()
    }

    /// True if `name` is one of the canonical display names.
    pub fn is_canonical_name(&self, name: &str) -> bool {
        BOOKS.iter().any(|(canonical, _)| *canonical == name)
    }
}

impl Default for BookTable {
    fn default() -> Self {
        Self::new()
    }
}

static CANONICAL_TABLE: Lazy<BookTable> = Lazy::new(BookTable::new);

/// The process-wide book table, built once on first use.
pub fn canonical_table() -> &'static BookTable {
    &CANONICAL_TABLE
}
