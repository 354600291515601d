use crate::domain::model::ExtractionSettings;
use crate::utils::error::Result;

pub trait KeywordExtractor: Send + Sync {
    /// Ranked phrases for `text`, most relevant first.
    fn extract(&self, text: &str, settings: &ExtractionSettings) -> Result<Vec<String>>;
}
