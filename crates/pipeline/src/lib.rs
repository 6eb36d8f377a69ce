pub mod codec;
pub mod crop;
pub mod detect;
pub mod pipeline;
pub mod preprocess;
pub mod transport;

pub use codec::DecodeError;
pub use crop::CropError;
pub use detect::find_content_area;
pub use pipeline::{PipelineError, ReceiptPipeline};
pub use preprocess::to_binary;

pub use slipscan_core::{BoundingBox, ProcessingResult, ProcessingStatus, ScanConfig};
