pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod progress;
pub mod render;
pub mod report;
pub mod scanner;
pub mod similarity;

pub use config::AppConfig;
pub use engine::{compare_directories, CompareEngine, ComparisonOutcome};
pub use error::Error;
pub use progress::{ProgressReporter, SilentReporter};
pub use report::AggregateReport;
