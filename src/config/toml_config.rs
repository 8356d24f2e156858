use crate::config::{validate_provider, DEFAULT_SCAN_DELAY_MS, DEFAULT_SET_COUNT};
use crate::core::{ConfigProvider, OutputFormat, Strategy};
use crate::utils::error::{LottoError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Optional defaults file; every key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub strategy: Option<Strategy>,
    pub set_count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub scan_delay_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LottoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LottoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn strategy(&self) -> Strategy {
        self.recommend.strategy.unwrap_or_default()
    }

    fn set_count(&self) -> usize {
        self.recommend.set_count.unwrap_or(DEFAULT_SET_COUNT)
    }

    fn seed(&self) -> Option<u64> {
        self.recommend.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scanner.scan_delay_ms.unwrap_or(DEFAULT_SCAN_DELAY_MS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
