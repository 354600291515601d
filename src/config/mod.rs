use crate::utils::logger::LogFormat;
use clap::Parser;

/// Flags only touch logging; extraction always runs with the default
/// settings (top 10, at most two words per phrase).
#[derive(Debug, Clone, Parser)]
#[command(name = "keyword-extractor")]
#[command(about = "Reads text from stdin and prints its top keyword phrases as JSON")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, help = "Log line format")]
    pub log_format: LogFormat,
}
