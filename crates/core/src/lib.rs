pub mod config;
pub mod error;
pub mod types;

pub use config::{GenreCount, ReportConfig, parse_report_toml};
pub use error::{Error, Result};
pub use types::*;
