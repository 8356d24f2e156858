pub mod engine;
pub mod parser;
pub mod pool;
pub mod session;
pub mod strategy;

pub use crate::domain::model::{
    Number, NumberSet, PlayedSets, Pool, Recommendation, RecommendationRequest, Strategy,
};
pub use crate::domain::ports::{
    ConfigProvider, OutputFormat, RecommendationSink, ScanEvent, ScanSource,
};
pub use crate::utils::error::Result;
