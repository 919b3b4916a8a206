//! Indexer configuration

use crate::error::Result;
use crate::index::ChapterStrategy;
use serde::{Deserialize, Serialize};

/// Style names the indexer and importer recognize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleNames {
    /// Paragraph style of book titles
    pub book_title: String,
    /// Prefix shared by all verse paragraph styles
    pub verse_text_prefix: String,
    /// Character style of verse numbers
    pub verse_number: String,
    /// Character style of the chapter number drop cap
    pub drop_cap: String,
}

impl Default for StyleNames {
    fn default() -> Self {
        Self {
            book_title: "BookTitle".to_string(),
            verse_text_prefix: "VerseText".to_string(),
            verse_number: "VerseNum".to_string(),
            drop_cap: "DropCap".to_string(),
        }
    }
}

impl StyleNames {
    /// Paragraph style for a chapter paragraph, chosen by the width of the
    /// chapter number so the drop cap spans every digit
    pub fn verse_paragraph_style(&self, chapter: &str) -> String {
        match chapter.chars().count() {
            2 => format!("{}TwoDigitChapter", self.verse_text_prefix),
            3 => format!("{}ThreeDigitChapter", self.verse_text_prefix),
            _ => self.verse_text_prefix.clone(),
        }
    }

    pub fn is_book_title(&self, style: &str) -> bool {
        style == self.book_title
    }

    pub fn is_verse_text(&self, style: &str) -> bool {
        !self.verse_text_prefix.is_empty() && style.starts_with(&self.verse_text_prefix)
    }

    pub fn is_verse_number(&self, style: &str) -> bool {
        style == self.verse_number
    }
}

/// Words that may open the first verse of a chapter, used when the host
/// cannot report drop caps
pub const DEFAULT_LEAD_WORDS: &[&str] = &[
    "In", "Long", "Na", "Ol", "Em", "God", "Jisas", "Man", "Woman", "Nau", "Taim", "Wanpela",
    "Mi", "Bihaen",
];

/// Full indexer configuration. Every field has a default, so a partial JSON
/// document only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    pub styles: StyleNames,
    /// Chapter-start strategies, tried in order
    pub chapter_strategies: Vec<ChapterStrategy>,
    /// Whitelist for the lead-word strategy
    pub lead_words: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            styles: StyleNames::default(),
            chapter_strategies: vec![ChapterStrategy::DropCap, ChapterStrategy::LeadWords],
            lead_words: DEFAULT_LEAD_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl IndexConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
