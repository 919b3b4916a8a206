//! Chapter-start detection

use crate::config::IndexConfig;
use crate::document::StyledFragment;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A way of deciding whether a verse paragraph opens a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChapterStrategy {
    /// The paragraph style carries a drop cap and the text opens with the
    /// chapter number
    DropCap,
    /// The text opens with a number, whitespace, then a whitelisted word
    /// or a word starting with one
    LeadWords,
}

impl ChapterStrategy {
    pub fn confidence(self) -> Confidence {
        match self {
            ChapterStrategy::DropCap => Confidence::High,
            ChapterStrategy::LeadWords => Confidence::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Confidence {
    High,
    Low,
}

/// Which strategy found a chapter start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub strategy: ChapterStrategy,
    pub confidence: Confidence,
}

impl From<ChapterStrategy> for Detection {
    fn from(strategy: ChapterStrategy) -> Self {
        Self {
            strategy,
            confidence: strategy.confidence(),
        }
    }
}

/// Result of probing a verse paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterProbe {
    Start { chapter: String, detection: Detection },
    NotStart,
    /// Marked as a chapter start but no chapter number could be read
    Unresolved,
}

/// What one strategy concluded
enum Verdict {
    Start(String),
    NotStart,
    Unresolved,
    /// The strategy's signal is missing; the next strategy decides
    Unavailable,
}

/// Runs the configured strategies in rank order
#[derive(Debug, Clone)]
pub struct ChapterDetector {
    strategies: SmallVec<[ChapterStrategy; 2]>,
    /// Lowercased whitelist, matched as prefixes of the opening text
    lead_words: Vec<String>,
}

impl ChapterDetector {
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            strategies: config.chapter_strategies.iter().copied().collect(),
            lead_words: config
                .lead_words
                .iter()
                .filter(|w| !w.is_empty())
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    /// Probe a verse paragraph. The first strategy whose signal is available
    /// gives the answer.
    pub fn probe(&self, fragment: &StyledFragment) -> ChapterProbe {
        for &strategy in &self.strategies {
            let verdict = match strategy {
                ChapterStrategy::DropCap => by_drop_cap(fragment),
                ChapterStrategy::LeadWords => self.by_lead_words(&fragment.text),
            };
            match verdict {
                Verdict::Start(chapter) => {
                    return ChapterProbe::Start {
                        chapter,
                        detection: strategy.into(),
                    }
                }
                Verdict::NotStart => return ChapterProbe::NotStart,
                Verdict::Unresolved => return ChapterProbe::Unresolved,
                Verdict::Unavailable => continue,
            }
        }
        ChapterProbe::NotStart
    }

    fn by_lead_words(&self, text: &str) -> Verdict {
        let digits = leading_digits(text);
        if digits.is_empty() {
            return Verdict::NotStart;
        }
        let rest = &text[digits.len()..];
        if !rest.starts_with(char::is_whitespace) {
            return Verdict::NotStart;
        }
        // Prefix match, so "Olsem" opens a chapter through "Ol"
        let opening = rest.trim_start().to_lowercase();
        if self.lead_words.iter().any(|word| opening.starts_with(word.as_str())) {
            Verdict::Start(digits.to_string())
        } else {
            Verdict::NotStart
        }
    }
}

fn by_drop_cap(fragment: &StyledFragment) -> Verdict {
    match fragment.drop_cap {
        None => Verdict::Unavailable,
        Some(0) => Verdict::NotStart,
        Some(_) => match leading_digits(&fragment.text) {
            "" => Verdict::Unresolved,
            digits => Verdict::Start(digits.to_string()),
        },
    }
}

/// The run of ASCII digits at the start of `text`
fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}
