use clap::Parser;
use keyword_extractor::utils::logger;
use keyword_extractor::{emit, CliConfig, ExtractEngine, YakeExtractor};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌（預設關閉，stdout 只輸出 JSON）
    logger::init_cli_logger(config.verbose, config.log_format);
    logger::install_panic_hook();

    tracing::debug!("CLI config: {:?}", config);

    let engine = ExtractEngine::new(YakeExtractor::new());
    let response = engine.run(std::io::stdin().lock());

    if response.is_error() {
        tracing::info!("Responding with error envelope");
    }

    // 錯誤已包在 JSON 中；只有寫出失敗才以非零結束
    emit(std::io::stdout().lock(), &response)?;

    Ok(())
}
