use crate::domain::model::{Recommendation, Strategy};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One thing the scanner side hands to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Raw text decoded from a QR code.
    Decoded(String),
    SetStrategy(Strategy),
    /// 使用者輸入的組數 (尚未轉換)
    SetCount(String),
    Generate,
    Quit,
}

#[async_trait]
pub trait ScanSource: Send {
    /// `Ok(None)` once the source is exhausted.
    async fn next_event(&mut self) -> Result<Option<ScanEvent>>;
}

/// Display side: receives every recommendation the engine produces.
pub trait RecommendationSink: Send {
    fn publish(&mut self, recommendation: &Recommendation) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

pub trait ConfigProvider: Send + Sync {
    fn strategy(&self) -> Strategy;
    fn set_count(&self) -> usize;
    fn seed(&self) -> Option<u64>;
    fn output_format(&self) -> OutputFormat;
    fn scan_delay(&self) -> Duration;
}
