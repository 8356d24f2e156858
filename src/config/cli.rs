use crate::config::{validate_provider, TomlConfig, DEFAULT_SCAN_DELAY_MS, DEFAULT_SET_COUNT};
use crate::core::session::coerce_set_count;
use crate::core::{ConfigProvider, OutputFormat, Strategy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "lotto-qr")]
#[command(about = "Recommend lotto numbers that avoid the ones on a scanned ticket")]
pub struct CliConfig {
    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number generation strategy [default: group-shuffle]
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// How many sets to recommend; text without a leading number counts as 0 [default: 5]
    #[arg(short = 'n', long, value_parser = parse_set_count)]
    pub count: Option<usize>,

    /// Seed for reproducible random sets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Ignore a repeated identical scan within this many milliseconds [default: 1000]
    #[arg(long)]
    pub scan_delay_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Decoded QR payloads; lines are read from stdin when none are given
    pub payloads: Vec<String>,
}

fn parse_set_count(input: &str) -> std::result::Result<usize, String> {
    Ok(coerce_set_count(input))
}

impl CliConfig {
    /// Fills every option not given on the command line from `file`.
    pub fn apply_file_defaults(&mut self, file: &TomlConfig) {
        self.strategy = self.strategy.or(file.recommend.strategy);
        self.count = self.count.or(file.recommend.set_count);
        self.seed = self.seed.or(file.recommend.seed);
        self.format = self.format.or(file.output.format);
        self.scan_delay_ms = self.scan_delay_ms.or(file.scanner.scan_delay_ms);
    }
}

impl ConfigProvider for CliConfig {
    fn strategy(&self) -> Strategy {
        self.strategy.unwrap_or_default()
    }

    fn set_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_SET_COUNT)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms.unwrap_or(DEFAULT_SCAN_DELAY_MS))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        validate_provider(self)
    }
}
