//! Sermon metadata extraction
//!
//! Line-based extraction of the opaque `{title, topic, date}` record that
//! presentation collaborators consume. Independent of the reference
//! pipeline: neither side calls the other.
//!
//! The title is the first non-empty line. The topic is the first later line
//! opening with "tema", with that label stripped. The date is the current
//! day rendered in Spanish ("Jueves 6 de agosto, 2026").

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Lazy-compiled pattern for the topic label prefix.
static TOPIC_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^tema\s*:?\s*").unwrap());

const DAYS: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Opaque metadata record handed to presentation collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SermonMetadata {
    pub title: String,
    pub topic: String,
    pub date: String,
}

/// Extract metadata, stamping today's date.
pub fn extract_metadata(text: &str) -> SermonMetadata {
    extract_metadata_at(text, Local::now().date_naive())
}

/// Extract metadata with an explicit date; the deterministic entry point
/// tests use.
pub fn extract_metadata_at(text: &str, date: NaiveDate) -> SermonMetadata {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let title = lines
        .next()
        .unwrap_or("Título no encontrado")
        .to_string();

    let topic = lines
        .find(|line| line.to_lowercase().starts_with("tema"))
        .map(|line| TOPIC_LABEL.replace(line, "").to_string())
        .unwrap_or_else(|| "Tema no encontrado".to_string());

    SermonMetadata {
        title,
        topic,
        date: format_spanish_date(date),
    }
}

/// Render a date as `"{Día} {d} de {mes}, {yyyy}"`.
pub fn format_spanish_date(date: NaiveDate) -> String {
    let day = DAYS[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{} {} de {}, {}", day, date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        // A Sunday.
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_title_is_first_nonempty_line() {
        let meta = extract_metadata_at("\n\n  La gracia de Dios  \notro texto", fixed_date());
        assert_eq!(meta.title, "La gracia de Dios");
    }

    #[test]
    fn test_topic_label_is_stripped() {
        let meta = extract_metadata_at("Sermón\nTema: El perdón\n", fixed_date());
        assert_eq!(meta.topic, "El perdón");

        let meta = extract_metadata_at("Sermón\ntema  la fe\n", fixed_date());
        assert_eq!(meta.topic, "la fe");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let meta = extract_metadata_at("", fixed_date());
        assert_eq!(meta.title, "Título no encontrado");
        assert_eq!(meta.topic, "Tema no encontrado");
    }

    #[test]
    fn test_topic_is_not_taken_from_title() {
        // The title line never doubles as the topic line.
        let meta = extract_metadata_at("Tema central del año\nTema: La cruz", fixed_date());
        assert_eq!(meta.title, "Tema central del año");
        assert_eq!(meta.topic, "La cruz");
    }

    #[test]
    fn test_spanish_date_formatting() {
        assert_eq!(format_spanish_date(fixed_date()), "Domingo 9 de marzo, 2025");
        let thursday = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_spanish_date(thursday), "Jueves 6 de agosto, 2026");
    }
}
