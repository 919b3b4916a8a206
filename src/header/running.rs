//! Spread pairing and header policies

use crate::error::{Error, Result};
use crate::header::format_reference;
use crate::index::{PageVerseEntry, PageVerseMap};
use crate::reference::VerseRef;
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which verse each page of a spread shows in its header.
///
/// The layout scripts disagree on this, so there is no default; callers
/// must choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderPolicy {
    /// Left page shows its last verse, right page shows its first verse
    LastOfLeftFirstOfRight,
    /// Left page shows its first verse, right page shows its last verse
    FirstOfLeftLastOfRight,
    /// Left page shows the first verse of the spread, right page the last
    SpreadRange,
}

impl HeaderPolicy {
    pub const ALL: [HeaderPolicy; 3] = [
        HeaderPolicy::LastOfLeftFirstOfRight,
        HeaderPolicy::FirstOfLeftLastOfRight,
        HeaderPolicy::SpreadRange,
    ];

    /// Short command-line name
    pub fn name(self) -> &'static str {
        match self {
            HeaderPolicy::LastOfLeftFirstOfRight => "last-of-left",
            HeaderPolicy::FirstOfLeftLastOfRight => "first-of-left",
            HeaderPolicy::SpreadRange => "spread-range",
        }
    }

    /// Pick the header verses for a spread's left and right pages
    pub fn pick<'a>(
        self,
        left: &'a PageVerseEntry,
        right: Option<&'a PageVerseEntry>,
    ) -> (Option<&'a VerseRef>, Option<&'a VerseRef>) {
        let right_first = right.and_then(|page| page.first_verse.as_ref());
        let right_last = right.and_then(|page| page.last_verse.as_ref());

        match self {
            HeaderPolicy::LastOfLeftFirstOfRight => (left.last_verse.as_ref(), right_first),
            HeaderPolicy::FirstOfLeftLastOfRight => (left.first_verse.as_ref(), right_last),
            HeaderPolicy::SpreadRange => {
                let first = left.first_verse.as_ref().or(right_first);
                let last = right_last.or(left.last_verse.as_ref());
                (first, right.and(last))
            }
        }
    }
}

impl FromStr for HeaderPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HeaderPolicy::ALL
            .into_iter()
            .find(|policy| {
                policy.name() == s
                    || serde_json::to_value(policy).is_ok_and(|v| v.as_str() == Some(s))
            })
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}

impl std::fmt::Display for HeaderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Side of a page within its spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageSide {
    /// Verso, even 0-based index
    Left,
    /// Recto, odd 0-based index
    Right,
}

impl PageSide {
    pub fn of(page_index: usize) -> Self {
        if page_index % 2 == 0 {
            PageSide::Left
        } else {
            PageSide::Right
        }
    }

    /// Headers and footers align to the outer edge
    pub fn alignment(self) -> Alignment {
        match self {
            PageSide::Left => Alignment::Left,
            PageSide::Right => Alignment::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Left,
    Right,
}

/// A pair of facing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    pub left: usize,
    /// Missing on the last spread of an odd-length document
    pub right: Option<usize>,
}

impl Spread {
    /// All spreads of a document
    pub fn all(page_count: usize) -> impl Iterator<Item = Spread> {
        (0..page_count).step_by(2).map(move |left| Spread {
            left,
            right: (left + 1 < page_count).then_some(left + 1),
        })
    }
}

/// Header and footer content for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningHead {
    pub page_index: usize,
    pub side: PageSide,
    /// `None` when the policy found no verse; the host leaves that header
    /// frame untouched. A verse without a book gives an empty string, which
    /// clears the frame.
    pub header: Option<String>,
    /// 1-based page number
    pub footer: String,
    pub alignment: Alignment,
}

impl RunningHead {
    fn new(page_index: usize, verse: Option<&VerseRef>) -> Self {
        let side = PageSide::of(page_index);
        let header = verse.map(|verse| format_reference(Some(verse)));
        Self {
            page_index,
            side,
            header,
            footer: (page_index + 1).to_string(),
            alignment: side.alignment(),
        }
    }
}

/// Compute headers and footers for every page, spread by spread
pub fn running_heads(
    map: &PageVerseMap,
    page_count: usize,
    policy: HeaderPolicy,
) -> Vec<RunningHead> {
    let mut heads = Vec::with_capacity(page_count);

    for spread in Spread::all(page_count) {
        let left = map.lookup(spread.left);
        let right = spread.right.map(|page| map.lookup(page));
        let (left_verse, right_verse) = policy.pick(&left, right.as_deref());

        let head = RunningHead::new(spread.left, left_verse);
        debug!("Page {} header: {:?}", spread.left + 1, head.header);
        heads.push(head);

        if let Some(page) = spread.right {
            let head = RunningHead::new(page, right_verse);
            debug!("Page {} header: {:?}", page + 1, head.header);
            heads.push(head);
        }
    }

    heads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{VerseHit, VerseOrigin};

    fn map() -> PageVerseMap {
        let mut map = PageVerseMap::new();
        for (page, verse) in [(0, "1"), (0, "5"), (1, "6"), (1, "9"), (3, "20")] {
            map.record(
                page,
                VerseHit {
                    reference: VerseRef::new("Ruth", "1", verse),
                    origin: VerseOrigin::VerseNumber,
                },
            );
        }
        map
    }

    fn headers(policy: HeaderPolicy, page_count: usize) -> Vec<Option<String>> {
        running_heads(&map(), page_count, policy)
            .into_iter()
            .map(|head| head.header)
            .collect()
    }

    fn some(text: &str) -> Option<String> {
        Some(text.to_string())
    }

    #[test]
    fn test_last_of_left_first_of_right() {
        assert_eq!(
            headers(HeaderPolicy::LastOfLeftFirstOfRight, 4),
            vec![some("Ruth 1:5"), some("Ruth 1:6"), None, some("Ruth 1:20")]
        );
    }

    #[test]
    fn test_first_of_left_last_of_right() {
        assert_eq!(
            headers(HeaderPolicy::FirstOfLeftLastOfRight, 4),
            vec![some("Ruth 1:1"), some("Ruth 1:9"), None, some("Ruth 1:20")]
        );
    }

    #[test]
    fn test_spread_range() {
        // Page 2 is empty, so the spread's first verse comes from page 3
        assert_eq!(
            headers(HeaderPolicy::SpreadRange, 4),
            vec![some("Ruth 1:1"), some("Ruth 1:9"), some("Ruth 1:20"), some("Ruth 1:20")]
        );
    }

    #[test]
    fn test_odd_page_count() {
        let heads = running_heads(&map(), 3, HeaderPolicy::SpreadRange);
        assert_eq!(heads.len(), 3);
        assert_eq!(heads[2].side, PageSide::Left);
        assert_eq!(heads[2].header, None);
    }

    #[test]
    fn test_footer_and_alignment() {
        let heads = running_heads(&PageVerseMap::new(), 2, HeaderPolicy::SpreadRange);
        assert_eq!(heads[0].footer, "1");
        assert_eq!(heads[0].alignment, Alignment::Left);
        assert_eq!(heads[1].footer, "2");
        assert_eq!(heads[1].side, PageSide::Right);
        assert_eq!(heads[1].alignment, Alignment::Right);
        assert!(heads.iter().all(|head| head.header.is_none()));
    }

    #[test]
    fn test_verse_before_book_clears_header() {
        let mut map = PageVerseMap::new();
        map.record(
            0,
            VerseHit {
                reference: VerseRef::new("", "", "3"),
                origin: VerseOrigin::VerseNumber,
            },
        );

        let heads = running_heads(&map, 2, HeaderPolicy::LastOfLeftFirstOfRight);
        assert_eq!(heads[0].header.as_deref(), Some(""));
        assert_eq!(heads[1].header, None);
    }

    #[test]
    fn test_spreads() {
        let spreads: Vec<_> = Spread::all(3).collect();
        assert_eq!(
            spreads,
            vec![
                Spread { left: 0, right: Some(1) },
                Spread { left: 2, right: None },
            ]
        );
        assert_eq!(Spread::all(0).count(), 0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "last-of-left".parse::<HeaderPolicy>().unwrap(),
            HeaderPolicy::LastOfLeftFirstOfRight
        );
        assert_eq!(
            "spreadRange".parse::<HeaderPolicy>().unwrap(),
            HeaderPolicy::SpreadRange
        );
        assert!(matches!(
            "middle".parse::<HeaderPolicy>(),
            Err(Error::UnknownPolicy(_))
        ));
        for policy in HeaderPolicy::ALL {
            assert_eq!(policy.to_string().parse::<HeaderPolicy>().unwrap(), policy);
        }
    }
}
