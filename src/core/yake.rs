use crate::domain::model::ExtractionSettings;
use crate::domain::ports::KeywordExtractor;
use crate::utils::error::{ExtractError, Result};
use keyword_extraction::yake::{Yake, YakeParams};
use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

/// 與參考 YAKE 預設值一致
const DEDUP_THRESHOLD: f32 = 0.9;
const WINDOW_SIZE: usize = 1;

/// YAKE keyword extractor backed by the `keyword_extraction` crate with the
/// English stop-word list.
#[derive(Debug, Clone)]
pub struct YakeExtractor {
    stop_words: Vec<String>,
}

impl YakeExtractor {
    pub fn new() -> Self {
        Self::with_stop_words(stop_words::get(stop_words::LANGUAGE::English))
    }

    fn with_stop_words(stop_words: Vec<String>) -> Self {
        Self { stop_words }
    }
}

impl Default for YakeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor for YakeExtractor {
    fn extract(&self, text: &str, settings: &ExtractionSettings) -> Result<Vec<String>> {
        let ranked = run_guarded(|| {
            let yake = Yake::new(YakeParams::All(
                text,
                &self.stop_words,
                None,
                DEDUP_THRESHOLD,
                settings.ngram,
                WINDOW_SIZE,
            ));
            yake.get_ranked_keywords(settings.top)
        })?;

        tracing::debug!("YAKE returned {} candidate phrases", ranked.len());
        let keywords = normalize_keywords(ranked, settings);
        Ok(restore_case(text, keywords))
    }
}

/// Runs `f`, turning a panic inside the library into an extraction error.
pub fn run_guarded<F>(f: F) -> Result<Vec<String>>
where
    F: FnOnce() -> Vec<String>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::warn!("Keyword extractor panicked: {}", message);
        ExtractError::Extraction { message }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic in keyword extractor".to_string()
    }
}

/// Enforces the output contract on whatever the library hands back: order is
/// kept, blanks, repeats and words without a letter or digit are dropped,
/// phrases longer than `ngram` words are skipped and at most `top` phrases
/// survive.
pub fn normalize_keywords(ranked: Vec<String>, settings: &ExtractionSettings) -> Vec<String> {
    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .map(|keyword| keyword.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| {
            keyword
                .split(' ')
                .all(|word| word.chars().any(char::is_alphanumeric))
        })
        .filter(|keyword| keyword.split(' ').count() <= settings.ngram)
        .filter(|keyword| seen.insert(keyword.clone()))
        .take(settings.top)
        .collect()
}

/// YAKE 回傳小寫候選詞；改用原文中第一次出現的寫法，找不到時保留小寫
pub fn restore_case(text: &str, keywords: Vec<String>) -> Vec<String> {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(trim_word)
        .filter(|word| !word.is_empty())
        .collect();
    let lowered: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();

    keywords
        .into_iter()
        .map(|keyword| {
            let wanted: Vec<String> = keyword
                .split_whitespace()
                .map(|word| trim_word(word).to_lowercase())
                .collect();
            if wanted.is_empty() || wanted.iter().any(|word| word.is_empty()) {
                return keyword;
            }

            lowered
                .windows(wanted.len())
                .position(|window| window == wanted.as_slice())
                .map(|start| words[start..start + wanted.len()].join(" "))
                .unwrap_or(keyword)
        })
        .collect()
}

fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}
