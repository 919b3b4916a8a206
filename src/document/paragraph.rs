//! Styled paragraphs and character runs

use crate::document::{FragmentLevel, PageLocator, StyledFragment};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Stable identifier for a paragraph within a story
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ParagraphId(pub u64);

/// A run of characters sharing one character style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharRun {
    pub text: String,
    /// `None` is the host's "[None]" character style
    pub char_style: Option<String>,
}

impl CharRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            char_style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            char_style: Some(style.into()),
        }
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A paragraph with its paragraph style and character runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledParagraph {
    pub id: ParagraphId,
    pub style: String,
    /// Drop-cap character count of the paragraph style
    pub drop_cap: u32,
    pub runs: Vec<CharRun>,
}

impl StyledParagraph {
    pub fn new(id: ParagraphId, style: impl Into<String>, drop_cap: u32) -> Self {
        Self {
            id,
            style: style.into(),
            drop_cap,
            runs: Vec::new(),
        }
    }

    /// Get the paragraph text
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(CharRun::char_len).sum()
    }

    /// Append a run, merging it into the previous run when the styles match
    pub fn push_run(&mut self, run: CharRun) {
        if run.text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.char_style == run.char_style => last.text.push_str(&run.text),
            _ => self.runs.push(run),
        }
    }

    /// Flatten into fragments: the paragraph itself, then its runs.
    ///
    /// Styled runs are split into one fragment per grapheme so every
    /// character carries its own page; unstyled runs stay whole.
    pub fn fragments<L: PageLocator + ?Sized>(&self, locator: &L) -> Vec<StyledFragment> {
        let mut fragments = Vec::with_capacity(self.runs.len() + 1);
        fragments.push(StyledFragment {
            text: self.text(),
            style: self.style.clone(),
            page: locator.page_of(self.id, 0),
            level: FragmentLevel::Paragraph,
            drop_cap: Some(self.drop_cap),
        });

        let mut offset = 0;
        for run in &self.runs {
            match &run.char_style {
                Some(style) => {
                    for grapheme in run.text.graphemes(true) {
                        fragments.push(StyledFragment {
                            text: grapheme.to_string(),
                            style: style.clone(),
                            page: locator.page_of(self.id, offset),
                            level: FragmentLevel::Character,
                            drop_cap: None,
                        });
                        offset += grapheme.chars().count();
                    }
                }
                None => {
                    fragments.push(StyledFragment {
                        text: run.text.clone(),
                        style: String::new(),
                        page: locator.page_of(self.id, offset),
                        level: FragmentLevel::Character,
                        drop_cap: None,
                    });
                    offset += run.char_len();
                }
            }
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyledParagraph {
        let mut para = StyledParagraph::new(ParagraphId(1), "VerseTextTwoDigitChapter", 2);
        para.push_run(CharRun::styled("12", "DropCap"));
        para.push_run(CharRun::plain(" Then "));
        para.push_run(CharRun::plain("he said. "));
        para.push_run(CharRun::styled("2", "VerseNum"));
        para.push_run(CharRun::plain("And "));
        para
    }

    #[test]
    fn test_runs_merge_by_style() {
        let para = sample();
        assert_eq!(para.runs.len(), 4);
        assert_eq!(para.text(), "12 Then he said. 2And ");
        assert_eq!(para.char_len(), 22);
    }

    #[test]
    fn test_empty_run_ignored() {
        let mut para = StyledParagraph::new(ParagraphId(0), "BookTitle", 0);
        para.push_run(CharRun::plain(""));
        assert!(para.runs.is_empty());
    }

    #[test]
    fn test_fragments_split_styled_runs() {
        let para = sample();
        let locate = |_: ParagraphId, offset: usize| Some(if offset < 17 { 0usize } else { 1 });
        let fragments = para.fragments(&locate);

        assert_eq!(fragments.len(), 6);
        assert!(fragments[0].is_paragraph());
        assert_eq!(fragments[0].drop_cap, Some(2));
        assert_eq!(fragments[1].text, "1");
        assert_eq!(fragments[2].text, "2");
        assert_eq!(fragments[2].style, "DropCap");
        assert_eq!(fragments[3].text, " Then he said. ");
        assert_eq!(fragments[3].style, "");
        assert_eq!(fragments[4].text, "2");
        assert_eq!(fragments[4].page, Some(1));
        assert_eq!(fragments[5].page, Some(1));
    }
}
