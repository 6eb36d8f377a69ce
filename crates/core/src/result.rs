use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Success,
    Failed,
}

impl std::fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingStatus::Success => write!(f, "success"),
            ProcessingStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of one receipt-processing request. Built once by the pipeline
/// and handed back to the caller; carries no further lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub status: ProcessingStatus,
    /// Human-readable description of the outcome. Never empty.
    pub message: String,
    /// Base64-encoded assembled document. Present only on success.
    pub pdf_data: Option<String>,
    pub cropped_width: Option<u32>,
    pub cropped_height: Option<u32>,
}

impl ProcessingResult {
    pub fn success(
        message: impl Into<String>,
        pdf_data: String,
        cropped_width: u32,
        cropped_height: u32,
    ) -> Self {
        ProcessingResult {
            status: ProcessingStatus::Success,
            message: message.into(),
            pdf_data: Some(pdf_data),
            cropped_width: Some(cropped_width),
            cropped_height: Some(cropped_height),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ProcessingResult {
            status: ProcessingStatus::Failed,
            message: message.into(),
            pdf_data: None,
            cropped_width: None,
            cropped_height: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ProcessingStatus::Success
    }

    /// Cropped page dimensions as the wire-format `"<width>x<height>"` string.
    pub fn cropped_content_dimensions(&self) -> Option<String> {
        match (self.cropped_width, self.cropped_height) {
            (Some(w), Some(h)) => Some(format!("{w}x{h}")),
            _ => None,
        }
    }

    /// Serialize to the tool-layer response shape: `status`, `message`, and
    /// on success `pdf_data` plus `cropped_content_dimensions`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut out = json!({
            "status": self.status.to_string(),
            "message": self.message,
        });
        if let Some(data) = &self.pdf_data {
            out["pdf_data"] = json!(data);
        }
        if let Some(dims) = self.cropped_content_dimensions() {
            out["cropped_content_dimensions"] = json!(dims);
        }
        out
    }
}
