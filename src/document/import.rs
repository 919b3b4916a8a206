//! Building a story from `{id, translation}` records

use crate::config::StyleNames;
use crate::document::{CharRun, Story};
use crate::error::{Error, Result, SkipReport};
use crate::reference::{parse_reference, VerseRef};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// One verse record from a translation file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
}

impl BibleEntry {
    pub fn new(id: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            translation: Some(translation.into()),
        }
    }

    /// Validate the record and parse its identifier
    fn resolve(&self) -> Result<(VerseRef, &str)> {
        let id = non_empty(&self.id).ok_or(Error::MissingField("id"))?;
        let text = non_empty(&self.translation).ok_or(Error::MissingField("translation"))?;
        Ok((parse_reference(id)?, text))
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Parse a JSON array of entries
pub fn load_entries(json: &str) -> Result<Vec<BibleEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: usize,
    pub books: usize,
    pub chapters: usize,
    pub skipped: SkipReport,
}

/// Lay out verse records as a story.
///
/// Each new book gets a title paragraph. Each new chapter opens a verse
/// paragraph whose drop cap spans the chapter number. Verses after the
/// first carry their number in the verse-number character style. Bad
/// records are skipped and counted.
pub fn import_entries(
    entries: impl IntoIterator<Item = BibleEntry>,
    styles: &StyleNames,
) -> (Story, ImportReport) {
    let mut story = Story::new();
    let mut report = ImportReport::default();
    let mut prev_book = String::new();
    let mut prev_chapter = String::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let (verse_ref, text) = match entry.resolve() {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!("Skipping entry {}: {}", index, err);
                report.skipped.record(&err);
                continue;
            }
        };

        if verse_ref.book != prev_book {
            story.push_paragraph(styles.book_title.clone(), 0);
            story.push_run(CharRun::plain(verse_ref.book.clone()));
            debug!("Started book {}", verse_ref.book);
            report.books += 1;
            prev_book = verse_ref.book.clone();
            prev_chapter.clear();
        }

        if verse_ref.chapter != prev_chapter {
            let drop_cap = verse_ref.chapter.chars().count() as u32;
            story.push_paragraph(styles.verse_paragraph_style(&verse_ref.chapter), drop_cap);
            story.push_run(CharRun::styled(verse_ref.chapter.clone(), styles.drop_cap.clone()));
            story.push_run(CharRun::plain(" "));
            report.chapters += 1;
            prev_chapter = verse_ref.chapter.clone();
        }

        // The drop cap stands in for the number of verse 1
        if verse_ref.verse != "1" {
            story.push_run(CharRun::styled(
                verse_ref.verse.clone(),
                styles.verse_number.clone(),
            ));
        }
        story.push_run(CharRun::plain(format!("{} ", text)));
        report.imported += 1;
    }

    info!(
        "Imported {} verses ({} books, {} chapters), skipped {}",
        report.imported,
        report.books,
        report.chapters,
        report.skipped.total()
    );

    (story, report)
}
