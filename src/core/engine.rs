use crate::domain::model::{ExtractResponse, ExtractionSettings};
use crate::domain::ports::KeywordExtractor;
use crate::utils::error::{ExtractError, Result};
use crate::utils::validation::{validate_non_empty_text, Validate};
use std::io::{Read, Write};

pub struct ExtractEngine<E: KeywordExtractor> {
    extractor: E,
    settings: ExtractionSettings,
}

impl<E: KeywordExtractor> ExtractEngine<E> {
    pub fn new(extractor: E) -> Self {
        Self::with_settings(extractor, ExtractionSettings::default())
    }

    pub fn with_settings(extractor: E, settings: ExtractionSettings) -> Self {
        Self {
            extractor,
            settings,
        }
    }

    pub fn settings(&self) -> &ExtractionSettings {
        &self.settings
    }

    /// 讀取全部輸入後處理；讀取失敗也會轉成錯誤回應
    pub fn run<R: Read>(&self, mut reader: R) -> ExtractResponse {
        let mut buffer = Vec::new();
        match reader.read_to_end(&mut buffer) {
            Ok(bytes) => {
                tracing::debug!("Read {} bytes of input", bytes);
                self.process(buffer)
            }
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                ExtractResponse::from(ExtractError::from(e))
            }
        }
    }

    pub fn process(&self, input: Vec<u8>) -> ExtractResponse {
        let response = ExtractResponse::from(self.extract_keywords(input));
        match &response {
            ExtractResponse::Keywords { keywords } => {
                tracing::debug!("Extracted {} keywords", keywords.len());
            }
            ExtractResponse::Error { error } => {
                tracing::warn!("Extraction failed: {}", error);
            }
        }
        response
    }

    fn extract_keywords(&self, input: Vec<u8>) -> Result<Vec<String>> {
        self.settings.validate()?;

        let text = String::from_utf8(input)?;
        let text = validate_non_empty_text(&text)?;

        self.extractor.extract(text, &self.settings)
    }
}

/// 寫出單行 JSON 並 flush
pub fn emit<W: Write>(mut writer: W, response: &ExtractResponse) -> Result<()> {
    let line = response.to_json_line()?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}
