pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{LineScanner, StaticScanner, WriterSink};
pub use crate::core::{
    engine::{RunSummary, ScanEngine},
    parser::parse_payload,
    pool::unplayed_pool,
    session::{coerce_set_count, ScanOutcome, Session},
    strategy::recommend,
};
pub use domain::model::{NumberSet, PlayedSets, Pool, Recommendation, Strategy};
pub use utils::error::{LottoError, Result};
