use slipscan_core::{ProcessingResult, ScanConfig};
use thiserror::Error;

use crate::{codec, crop, detect, preprocess, transport};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to decode image payload: {0}. Input must be base64-encoded")]
    Transport(#[from] base64::DecodeError),
    #[error(transparent)]
    Decode(#[from] codec::DecodeError),
    #[error(transparent)]
    Crop(#[from] crop::CropError),
    #[error(transparent)]
    Assemble(#[from] slipscan_pdf::AssembleError),
}

/// Orchestrates one receipt request: payload decode, image decode,
/// binarize, locate content, crop, assemble the document. Holds only
/// configuration; clone freely and run arbitrarily many requests
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct ReceiptPipeline {
    config: ScanConfig,
}

impl ReceiptPipeline {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Process one base64-encoded receipt photo. Stage failures are
    /// converted here, exactly once, into a failure result with the cause
    /// as message; no partially built document is ever returned.
    pub fn process(&self, payload: &str) -> ProcessingResult {
        match self.run(payload) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "receipt processing failed");
                ProcessingResult::failure(format!("Receipt processing failed: {e}"))
            }
        }
    }

    fn run(&self, payload: &str) -> Result<ProcessingResult, PipelineError> {
        // 1. Transport decoding (strip any data-URL prefix, undo base64).
        let bytes = transport::decode_image_payload(payload)?;

        // 2. Decode to RGB. This copy stays untouched; it becomes the
        //    first page of the output and the crop source.
        let original = codec::decode(&bytes)?;
        tracing::debug!(
            width = original.width(),
            height = original.height(),
            "decoded receipt image"
        );

        // 3. Condition a working copy for analysis.
        let binary = preprocess::to_binary(&original, &self.config);

        // 4. Locate the content region on the binarized copy.
        let area = detect::find_content_area(&binary, &self.config);
        tracing::debug!(%area, "content area detected");

        // 5. Crop the original, not the binarized working copy; both share
        //    the same coordinate system.
        let cropped = crop::crop(&original, &area)?;
        let (cropped_width, cropped_height) = cropped.dimensions();

        // 6. Assemble the document: full page first, cropped content second.
        let pdf = slipscan_pdf::assemble(&[original, cropped])?;
        tracing::debug!(bytes = pdf.len(), "document assembled");

        Ok(ProcessingResult::success(
            "Receipt processed; document contains the original page and the cropped content page",
            transport::encode_document(&pdf),
            cropped_width,
            cropped_height,
        ))
    }

    /// Run [`process`](Self::process) on tokio's blocking pool. The
    /// pipeline is CPU-bound, so async callers should keep it off their
    /// reactor threads.
    pub async fn process_blocking(&self, payload: String) -> ProcessingResult {
        let pipeline = self.clone();
        match tokio::task::spawn_blocking(move || pipeline.process(&payload)).await {
            Ok(result) => result,
            Err(e) => ProcessingResult::failure(format!("Receipt processing task failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use slipscan_core::ProcessingStatus;
    use std::io::Cursor;

    fn payload_of(img: RgbImage) -> String {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        transport::encode_document(&buf)
    }

    fn blank_receipt() -> RgbImage {
        RgbImage::from_pixel(400, 200, Rgb([255, 255, 255]))
    }

    fn receipt_with_block() -> RgbImage {
        RgbImage::from_fn(400, 200, |x, y| {
            if (50..350).contains(&x) && (60..150).contains(&y) {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn blank_receipt_falls_back_to_full_page() {
        let result = ReceiptPipeline::default().process(&payload_of(blank_receipt()));
        assert_eq!(result.status, ProcessingStatus::Success);
        assert_eq!(result.cropped_width, Some(400));
        assert_eq!(result.cropped_height, Some(200));
        assert!(result.pdf_data.as_deref().is_some_and(|d| !d.is_empty()));
    }

    #[test]
    fn printed_block_is_cropped_with_padding() {
        let result = ReceiptPipeline::default().process(&payload_of(receipt_with_block()));
        assert_eq!(result.status, ProcessingStatus::Success);
        // Ideal box is (40, 50)..(360, 160); the blur widens the detected
        // edges by a few pixels in each direction.
        let width = result.cropped_width.unwrap();
        let height = result.cropped_height.unwrap();
        assert!((310..=330).contains(&width), "cropped width {width}");
        assert!((100..=120).contains(&height), "cropped height {height}");
    }

    #[test]
    fn output_document_has_two_pages() {
        let result = ReceiptPipeline::default().process(&payload_of(receipt_with_block()));
        let pdf = transport::decode_image_payload(result.pdf_data.as_deref().unwrap()).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        let doc = lopdf::Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn data_url_payload_is_accepted() {
        let payload = format!("data:image/png;base64,{}", payload_of(blank_receipt()));
        let result = ReceiptPipeline::default().process(&payload);
        assert_eq!(result.status, ProcessingStatus::Success);
    }

    #[test]
    fn empty_payload_fails_cleanly() {
        let result = ReceiptPipeline::default().process("");
        assert_eq!(result.status, ProcessingStatus::Failed);
        assert!(!result.message.is_empty());
        assert_eq!(result.pdf_data, None);
    }

    #[test]
    fn text_payload_fails_cleanly() {
        let payload = transport::encode_document(b"plain text, not an image");
        let result = ReceiptPipeline::default().process(&payload);
        assert_eq!(result.status, ProcessingStatus::Failed);
        assert!(result.message.contains("decode"));
    }

    #[test]
    fn invalid_base64_fails_cleanly() {
        let result = ReceiptPipeline::default().process("%%% definitely not base64 %%%");
        assert_eq!(result.status, ProcessingStatus::Failed);
        assert!(!result.message.is_empty());
    }

    #[test]
    fn reruns_are_byte_identical() {
        let payload = payload_of(receipt_with_block());
        let pipeline = ReceiptPipeline::default();
        let first = pipeline.process(&payload);
        let second = pipeline.process(&payload);
        assert_eq!(first.cropped_width, second.cropped_width);
        assert_eq!(first.cropped_height, second.cropped_height);
        assert_eq!(first.pdf_data, second.pdf_data);
    }

    #[tokio::test]
    async fn blocking_pool_wrapper_matches_sync_result() {
        let payload = payload_of(receipt_with_block());
        let pipeline = ReceiptPipeline::default();
        let sync = pipeline.process(&payload);
        let offloaded = pipeline.process_blocking(payload).await;
        assert_eq!(sync.status, offloaded.status);
        assert_eq!(sync.cropped_width, offloaded.cropped_width);
        assert_eq!(sync.pdf_data, offloaded.pdf_data);
    }
}
