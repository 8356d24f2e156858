use anyhow::Context;
use clap::Parser;
use lotto_qr::core::ConfigProvider;
use lotto_qr::utils::error::{ErrorSeverity, LottoError};
use lotto_qr::utils::{logger, validation::Validate};
use lotto_qr::{CliConfig, LineScanner, ScanEngine, Session, StaticScanner, TomlConfig, WriterSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lotto-qr");

    // 載入設定檔 (命令列參數優先)
    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file)) {
            Ok(file) => config.apply_file_defaults(&file),
            Err(e) => exit_with(&e),
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let session = Session::with_seed(config.seed(), config.strategy(), config.set_count());
    let sink = WriterSink::new(std::io::stdout(), config.output_format());

    let summary = if config.payloads.is_empty() {
        let scanner = LineScanner::stdin(config.scan_delay());
        let mut engine = ScanEngine::new(scanner, sink, session);
        engine.run().await
    } else {
        let scanner = StaticScanner::new(std::mem::take(&mut config.payloads));
        let mut engine = ScanEngine::new(scanner, sink, session);
        engine.run().await
    }
    .context("scan loop failed")?;

    if summary.accepted == 0 && summary.scans > 0 {
        tracing::warn!("No valid lotto ticket was scanned");
    }

    Ok(())
}

fn exit_with(e: &LottoError) -> ! {
    tracing::error!(
        "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
