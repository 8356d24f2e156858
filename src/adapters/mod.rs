// Adapters layer: concrete implementations for the scanner and display sides.

pub mod render;
pub mod scanner;

pub use render::WriterSink;
pub use scanner::{LineScanner, StaticScanner};
