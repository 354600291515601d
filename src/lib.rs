#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{
    engine::{emit, ExtractEngine},
    yake::YakeExtractor,
};
pub use crate::domain::model::{ExtractResponse, ExtractionSettings};
pub use crate::domain::ports::KeywordExtractor;
pub use crate::utils::error::{ExtractError, Result};
