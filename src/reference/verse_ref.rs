//! The (book, chapter, verse) triple

use serde::{Deserialize, Serialize};

/// A reference to a single verse.
///
/// Chapter and verse stay strings: they are copied verbatim from the
/// document text and never compared numerically. A field counts as present
/// when it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl VerseRef {
    /// Create a new verse reference
    pub fn new(
        book: impl Into<String>,
        chapter: impl Into<String>,
        verse: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            verse: verse.into(),
        }
    }

    pub fn has_book(&self) -> bool {
        !self.book.is_empty()
    }

    pub fn has_chapter(&self) -> bool {
        !self.chapter.is_empty()
    }

    pub fn has_verse(&self) -> bool {
        !self.verse.is_empty()
    }
}

impl std::fmt::Display for VerseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::header::format_reference(Some(self)))
    }
}
