//! Styled fragments emitted by the host's document traversal

use serde::{Deserialize, Serialize};

/// Whether a fragment is a whole paragraph or a run of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentLevel {
    /// A paragraph, styled by its paragraph style
    #[default]
    Paragraph,
    /// Characters inside the most recent paragraph, styled by a character style
    Character,
}

/// One unit of styled content, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledFragment {
    pub text: String,
    /// Paragraph style name or character style name, per `level`
    #[serde(default)]
    pub style: String,
    /// 0-based page the fragment starts on, if the host could locate it
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub level: FragmentLevel,
    /// Drop-cap character count of the paragraph style. `None` when the
    /// host could not report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_cap: Option<u32>,
}

impl StyledFragment {
    /// Create a paragraph fragment
    pub fn paragraph(text: impl Into<String>, style: impl Into<String>, page: usize) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            page: Some(page),
            level: FragmentLevel::Paragraph,
            drop_cap: None,
        }
    }

    /// Create a character-run fragment
    pub fn character(text: impl Into<String>, style: impl Into<String>, page: usize) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
            page: Some(page),
            level: FragmentLevel::Character,
            drop_cap: None,
        }
    }

    /// Set the drop-cap signal
    pub fn with_drop_cap(mut self, characters: u32) -> Self {
        self.drop_cap = Some(characters);
        self
    }

    /// Mark the fragment as not located on any page
    pub fn unplaced(mut self) -> Self {
        self.page = None;
        self
    }

    pub fn is_paragraph(&self) -> bool {
        self.level == FragmentLevel::Paragraph
    }

    /// Check if the text holds nothing but whitespace and line endings
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
