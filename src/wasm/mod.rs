//! WASM bindings for scripted layout hosts
//!
//! Payloads cross the bridge as JSON strings.

use crate::document::{import_entries, load_entries, ImportReport, StyledParagraph};
use crate::{HeaderPolicy, IndexConfig, SkipReport, StyledFragment, VerseIndexer};
use crate::index::PageVerseEntry;
use serde::Serialize;
use std::borrow::Cow;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed indexer wrapper
#[wasm_bindgen]
pub struct WasmVerseIndexer {
    indexer: VerseIndexer,
}

#[wasm_bindgen]
impl WasmVerseIndexer {
    /// Create an indexer with the default style names
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            indexer: VerseIndexer::default(),
        }
    }

    /// Create an indexer from a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<WasmVerseIndexer, JsError> {
        Ok(Self {
            indexer: VerseIndexer::new(IndexConfig::from_json(config_json)?),
        })
    }

    /// Feed one fragment (a JSON object)
    #[wasm_bindgen(js_name = pushFragment)]
    pub fn push_fragment(&mut self, fragment_json: &str) -> Result<(), JsError> {
        let fragment: StyledFragment = serde_json::from_str(fragment_json)?;
        self.indexer.push(&fragment);
        Ok(())
    }

    /// Feed a JSON array of fragments; returns how many were read
    #[wasm_bindgen(js_name = pushFragments)]
    pub fn push_fragments(&mut self, fragments_json: &str) -> Result<usize, JsError> {
        Ok(self.push_fragments_json(fragments_json)?)
    }

    /// End the walk; returns a JSON summary
    pub fn finish(&mut self) -> Result<String, JsError> {
        Ok(self.finish_json()?)
    }

    /// Verses on a page of the last finished walk (JSON). Before any walk
    /// finishes every page reads as empty.
    #[wasm_bindgen(js_name = pageEntry)]
    pub fn page_entry(&self, page_index: usize) -> Result<String, JsError> {
        Ok(self.page_entry_json(page_index)?)
    }

    /// Headers and footers for every page (JSON array)
    #[wasm_bindgen(js_name = runningHeads)]
    pub fn running_heads(&self, page_count: usize, policy: &str) -> Result<String, JsError> {
        Ok(self.running_heads_json(page_count, policy)?)
    }

    /// Header strings only, one per page; empty where no verse was found
    #[wasm_bindgen(js_name = headerTexts)]
    pub fn header_texts(&self, page_count: usize, policy: &str) -> Result<js_sys::Array, JsError> {
        let texts = js_sys::Array::new();
        for text in self.header_strings(page_count, policy)? {
            texts.push(&JsValue::from_str(&text));
        }
        Ok(texts)
    }

    /// Skip counts of the last finished walk (JSON)
    #[wasm_bindgen(js_name = skipReport)]
    pub fn skip_report(&self) -> Result<String, JsError> {
        Ok(self.skip_report_json()?)
    }

    /// Lay out `{id, translation}` records as styled paragraphs for the host
    /// to insert (JSON)
    #[wasm_bindgen(js_name = importEntries)]
    pub fn import_entries(&self, entries_json: &str) -> Result<String, JsError> {
        Ok(self.import_json(entries_json)?)
    }
}

impl Default for WasmVerseIndexer {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmVerseIndexer {
    fn finish_json(&mut self) -> crate::Result<String> {
        let index = self.indexer.finish();
        let summary = WalkSummary {
            fragments: index.fragments,
            pages_with_verses: index.map.len(),
            skipped: index.skipped,
        };
        Ok(serde_json::to_string(&summary)?)
    }

    fn page_entry_json(&self, page_index: usize) -> crate::Result<String> {
        let entry = match self.indexer.index() {
            Some(index) => index.map.lookup(page_index),
            None => Cow::Owned(PageVerseEntry::empty(page_index)),
        };
        Ok(serde_json::to_string(&entry)?)
    }

    fn skip_report_json(&self) -> crate::Result<String> {
        let skipped = self.indexer.index().map(|index| index.skipped).unwrap_or_default();
        Ok(serde_json::to_string(&skipped)?)
    }

    fn push_fragments_json(&mut self, fragments_json: &str) -> crate::Result<usize> {
        let fragments: Vec<StyledFragment> = serde_json::from_str(fragments_json)?;
        let count = fragments.len();
        self.indexer.extend(fragments);
        Ok(count)
    }

    fn header_strings(&self, page_count: usize, policy: &str) -> crate::Result<Vec<String>> {
        let policy: HeaderPolicy = policy.parse()?;
        let Some(index) = self.indexer.index() else {
            return Ok(vec![String::new(); page_count]);
        };
        Ok(index
            .running_heads(page_count, policy)
            .into_iter()
            .map(|head| head.header.unwrap_or_default())
            .collect())
    }

    fn running_heads_json(&self, page_count: usize, policy: &str) -> crate::Result<String> {
        let policy: HeaderPolicy = policy.parse()?;
        let heads = match self.indexer.index() {
            Some(index) => index.running_heads(page_count, policy),
            None => crate::running_heads(&Default::default(), page_count, policy),
        };
        Ok(serde_json::to_string(&heads)?)
    }

    fn import_json(&self, entries_json: &str) -> crate::Result<String> {
        let entries = load_entries(entries_json)?;
        let (story, report) = import_entries(entries, &self.indexer.config().styles);
        let payload = StoryPayload {
            paragraphs: story.paragraphs().collect(),
            report,
        };
        Ok(serde_json::to_string(&payload)?)
    }
}

/// Serializable walk summary for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkSummary {
    pub fragments: usize,
    pub pages_with_verses: usize,
    pub skipped: SkipReport,
}

/// Serializable imported story for JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPayload<'a> {
    pub paragraphs: Vec<&'a StyledParagraph>,
    pub report: ImportReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENTS: &str = r#"[
        {"text": "Genesis", "style": "BookTitle", "page": 0},
        {"text": "1 In the beginning", "style": "VerseText", "page": 0, "dropCap": 1},
        {"text": "2", "style": "VerseNum", "page": 1, "level": "character"}
    ]"#;

    #[test]
    fn test_push_and_headers() {
        let mut bridge = WasmVerseIndexer::new();
        assert_eq!(bridge.push_fragments_json(FRAGMENTS).unwrap(), 3);

        let summary: serde_json::Value = serde_json::from_str(&bridge.finish_json().unwrap()).unwrap();
        assert_eq!(summary["fragments"], 3);
        assert_eq!(summary["pagesWithVerses"], 2);

        let texts = bridge.header_strings(2, "last-of-left").unwrap();
        assert_eq!(texts, vec!["Genesis 1:1".to_string(), "Genesis 1:2".to_string()]);

        let entry: serde_json::Value = serde_json::from_str(&bridge.page_entry_json(1).unwrap()).unwrap();
        assert_eq!(entry["lastVerse"]["verse"], "2");
    }

    #[test]
    fn test_running_heads_json() {
        let mut bridge = WasmVerseIndexer::new();
        bridge.push_fragments_json(FRAGMENTS).unwrap();
        bridge.finish_json().unwrap();

        let heads: serde_json::Value =
            serde_json::from_str(&bridge.running_heads_json(3, "spread-range").unwrap()).unwrap();
        assert_eq!(heads[0]["header"], "Genesis 1:1");
        assert_eq!(heads[1]["side"], "right");
        assert_eq!(heads[2]["header"], serde_json::Value::Null);
        assert_eq!(heads[2]["footer"], "3");
        assert!(bridge.running_heads_json(3, "sideways").is_err());
    }

    #[test]
    fn test_before_finish() {
        let bridge = WasmVerseIndexer::new();
        let entry: serde_json::Value =
            serde_json::from_str(&bridge.page_entry_json(4).unwrap()).unwrap();
        assert_eq!(entry["pageIndex"], 4);
        assert_eq!(entry["verses"], serde_json::json!([]));
        assert_eq!(entry["firstVerse"], serde_json::Value::Null);
        assert_eq!(entry["lastVerse"], serde_json::Value::Null);
        assert_eq!(bridge.header_strings(2, "spread-range").unwrap(), vec!["", ""]);
        assert_eq!(
            bridge.skip_report_json().unwrap(),
            r#"{"malformedIdentifier":0,"missingField":0,"unresolvedChapterStart":0}"#
        );
    }

    #[test]
    fn test_import_json() {
        let bridge = WasmVerseIndexer::new();
        let json = bridge
            .import_json(r#"[{"id": "Jude 1:1", "translation": "Jude, the servant."}, {"id": "Jude"}]"#)
            .unwrap();
        let payload: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(payload["paragraphs"][0]["style"], "BookTitle");
        assert_eq!(payload["paragraphs"][1]["dropCap"], 1);
        assert_eq!(payload["paragraphs"][1]["runs"][0]["charStyle"], "DropCap");
        assert_eq!(payload["report"]["imported"], 1);
        assert_eq!(payload["report"]["skipped"]["missingField"], 1);
    }

    #[test]
    fn test_bad_fragment_json() {
        let mut bridge = WasmVerseIndexer::new();
        assert!(bridge.push_fragments_json("[{\"style\": 3}]").is_err());
    }
}
