pub mod aggregator;
pub mod args;
pub mod email;
pub mod error;
pub mod reader;
pub mod report;
pub mod stats;
pub mod utils;

pub use aggregator::{DomainAggregator, ImportOptions, Row};
pub use args::Args;
pub use error::{ImportError, Result};
pub use reader::{import, import_from_file, CsvRows};
pub use stats::{DomainCount, DomainReport, ImportStats};
