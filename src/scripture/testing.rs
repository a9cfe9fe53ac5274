//! Testing utilities: verified sermon samples
//!
//! Sermon excerpts are easy to get subtly wrong in tests (a stray digit
//! turns into an orphan verse, a capitalized word collides with an
//! abbreviation). Test content is therefore curated here and reused across
//! unit and integration tests instead of being retyped per test file.
//!
//! Every sample documents the references it is expected to yield, so a test
//! reads as sample + expectation with no hidden setup.

/// Named access to the verified sermon samples.
pub struct SermonSources;

impl SermonSources {
    /// One plain citation. Expected: `Juan 3:16`.
    pub fn basic_citation() -> &'static str {
        "Juan 3:16 nos dice que Dios amó al mundo."
    }

    /// Dotted abbreviation with an explicit range. Expected: `Lucas 15:1-32`.
    pub fn dotted_range() -> &'static str {
        "Lc. 15:1-32 habla de la oveja perdida."
    }

    /// Numbered book, chapter only. Expected: `1 Corintios 13`.
    pub fn numbered_chapter() -> &'static str {
        "1 Corintios 13 es el capítulo del amor."
    }

    /// Verse text quoted across lines with bare continuation numbers.
    /// Expected: `Juan 3:16-18`.
    pub fn line_continuations() -> &'static str {
        "Juan 3:16 Porque de tal manera amó Dios al mundo, que ha dado a su \
         Hijo unigénito.\n\
         17 Porque no envió Dios a su Hijo al mundo para condenar al mundo.\n\
         18 El que en él cree, no es condenado."
    }

    /// Two citations in one sentence. Expected: `Mateo 25:31`, `Gálatas 5:22`.
    pub fn two_citations() -> &'static str {
        "El texto de hoy es Mateo 25:31 y también Gálatas 5:22."
    }

    /// Citation-shaped prose with no valid abbreviation. Expected: nothing.
    pub fn false_positive() -> &'static str {
        "Capitulo 5:30 del libro"
    }

    /// A trailing verse list with no reattached book.
    /// Expected: `Isaías 53:4-6`.
    pub fn orphan_list() -> &'static str {
        "Isaías 53:4 llevó él nuestras enfermedades.\n5, 6"
    }

    /// A realistic composite: header lines, repeated citations, a
    /// continuation and a distractor year.
    /// Expected: `Juan 3:16-17`, `Romanos 8:1`, `1 Pedro 2:9`.
    pub fn full_sermon() -> &'static str {
        "La noche que venció a la oscuridad\n\
         Tema: La seguridad del creyente\n\
         \n\
         Comenzamos en Juan 3:16, el corazón del evangelio.\n\
         17 Porque no envió Dios a su Hijo al mundo para condenar al mundo.\n\
         \n\
         Como fue predicado en 1985, la promesa sigue en pie.\n\
         Romanos 8:1 declara que ninguna condenación hay.\n\
         Y otra vez Juan 3:16 lo confirma.\n\
         \n\
         Cerramos con 1 Pedro 2:9, linaje escogido."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripture::pipeline::extract_references;

    #[test]
    fn test_samples_yield_documented_references() {
        assert_eq!(
            extract_references(SermonSources::basic_citation()).rendered(),
            vec!["Juan 3:16"]
        );
        assert_eq!(
            extract_references(SermonSources::dotted_range()).rendered(),
            vec!["Lucas 15:1-32"]
        );
        assert_eq!(
            extract_references(SermonSources::orphan_list()).rendered(),
            vec!["Isaías 53:4-6"]
        );
    }
}
