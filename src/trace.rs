//! Step records shown to the user for each pipeline.

use serde::Serialize;

/// Number of steps every pipeline reports
pub const STEP_COUNT: usize = 7;

/// Hex characters kept in a preview before the ellipsis
pub const PREVIEW_HEX_CHARS: usize = 32;

/// Shown in place of private key material
pub const SECRET_PLACEHOLDER: &str = "[Secret]";

pub const PROCESSING: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub id: String,
    pub label: String,
    pub data: String,
}

impl StepRecord {
    pub fn new(id: impl Into<String>, label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Zip fixed labels with per-run data, numbering ids `{prefix}1..{prefix}7`
pub fn steps(
    prefix: char,
    labels: &[&str; STEP_COUNT],
    data: [String; STEP_COUNT],
) -> Vec<StepRecord> {
    labels
        .iter()
        .zip(data)
        .enumerate()
        .map(|(i, (label, data))| StepRecord::new(format!("{prefix}{}", i + 1), *label, data))
        .collect()
}

/// Hex-encode bytes and truncate for display
pub fn preview(bytes: &[u8]) -> String {
    preview_hex(&hex::encode(bytes))
}

/// Truncate an already hex-encoded string for display
pub fn preview_hex(hex: &str) -> String {
    let end = hex.len().min(PREVIEW_HEX_CHARS);
    format!("{}...", &hex[..end])
}
