#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::session::MAX_SET_COUNT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

pub const DEFAULT_SET_COUNT: usize = 5;
pub const DEFAULT_SCAN_DELAY_MS: u64 = 1000;
pub const MAX_SCAN_DELAY_MS: u64 = 60_000;

/// Range checks shared by every config source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_range("set_count", config.set_count(), 0, MAX_SET_COUNT)?;
    validate_range(
        "scan_delay_ms",
        config.scan_delay().as_millis(),
        0,
        u128::from(MAX_SCAN_DELAY_MS),
    )?;
    Ok(())
}
