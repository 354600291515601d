pub mod engine;
pub mod yake;
