use crate::utils::error::{ExtractError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP: usize = 10;
pub const DEFAULT_NGRAM: usize = 2;

/// The single JSON object written to stdout. Untagged so that exactly one
/// top-level key (`keywords` or `error`) is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractResponse {
    Keywords { keywords: Vec<String> },
    Error { error: String },
}

impl ExtractResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, ExtractResponse::Error { .. })
    }

    /// 序列化為單行 JSON
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Result<Vec<String>>> for ExtractResponse {
    fn from(result: Result<Vec<String>>) -> Self {
        match result {
            Ok(keywords) => ExtractResponse::Keywords { keywords },
            Err(e) => ExtractResponse::from(e),
        }
    }
}

impl From<ExtractError> for ExtractResponse {
    fn from(err: ExtractError) -> Self {
        ExtractResponse::Error {
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSettings {
    /// Maximum number of phrases returned.
    pub top: usize,
    /// Maximum number of words per phrase.
    pub ngram: usize,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            ngram: DEFAULT_NGRAM,
        }
    }
}

impl Validate for ExtractionSettings {
    fn validate(&self) -> Result<()> {
        validate_range("top", self.top, 1, 100)?;
        validate_range("ngram", self.ngram, 1, 5)?;
        Ok(())
    }
}
