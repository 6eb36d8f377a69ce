pub mod config;
pub mod geometry;
pub mod result;

pub use config::{ConfigError, ScanConfig};
pub use geometry::BoundingBox;
pub use result::{ProcessingResult, ProcessingStatus};
