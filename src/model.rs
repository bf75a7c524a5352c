use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Message echoed in the success response body.
pub const SUCCESS_MESSAGE: &str = "Image processed successfully";

/// Derives the destination key for a compressed artifact.
///
/// The output key keeps the full original key, path separators included, so
/// re-processing the same object always overwrites the same artifact.
pub fn compressed_key(key: &str) -> String {
    format!("compressed-{key}")
}

/// The metadata item persisted once per successful invocation.
///
/// Field names are fixed by the table schema and the notification consumers,
/// hence the explicit renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRecord {
    #[serde(rename = "ImageID")]
    pub image_id: String,
    #[serde(rename = "OriginalBucket")]
    pub original_bucket: String,
    #[serde(rename = "OutputBucket")]
    pub output_bucket: String,
    #[serde(rename = "CompressedFile")]
    pub compressed_file: String,
    #[serde(rename = "SizeKB")]
    pub size_kb: i64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl ProcessingRecord {
    /// Builds the record for a compressed artifact of `compressed_byte_count`
    /// bytes, stamping the current UTC time.
    pub fn new(
        image_id: &str,
        original_bucket: &str,
        output_bucket: &str,
        compressed_file: &str,
        compressed_byte_count: usize,
    ) -> Self {
        Self {
            image_id: image_id.to_string(),
            original_bucket: original_bucket.to_string(),
            output_bucket: output_bucket.to_string(),
            compressed_file: compressed_file.to_string(),
            // whole kilobytes, rounded down
            size_kb: (compressed_byte_count / 1024) as i64,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// The value returned to the trigger infrastructure.
#[derive(Debug, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn success(record: &ProcessingRecord) -> Self {
        Self {
            status_code: 200,
            body: serde_json::json!({
                "message": SUCCESS_MESSAGE,
                "metadata": record,
            })
            .to_string(),
        }
    }

    pub fn error(error: &PipelineError) -> Self {
        Self {
            status_code: 500,
            body: serde_json::json!({ "error": error.to_string() }).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_key_prefixes_the_original_key() {
        assert_eq!(compressed_key("photo.png"), "compressed-photo.png");
        assert_eq!(
            compressed_key("albums/2024/photo.png"),
            "compressed-albums/2024/photo.png"
        );
    }

    #[test]
    fn size_is_reported_in_whole_kilobytes() {
        let record = ProcessingRecord::new("a.png", "in", "out", "compressed-a.png", 2047);
        assert_eq!(record.size_kb, 1);

        let record = ProcessingRecord::new("a.png", "in", "out", "compressed-a.png", 1023);
        assert_eq!(record.size_kb, 0);

        let record = ProcessingRecord::new("a.png", "in", "out", "compressed-a.png", 4096);
        assert_eq!(record.size_kb, 4);
    }

    #[test]
    fn record_serializes_with_table_field_names() {
        let record = ProcessingRecord::new(
            "photo.png",
            "in-bucket",
            "out-bucket",
            "compressed-photo.png",
            2048,
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["ImageID"], "photo.png");
        assert_eq!(value["OriginalBucket"], "in-bucket");
        assert_eq!(value["OutputBucket"], "out-bucket");
        assert_eq!(value["CompressedFile"], "compressed-photo.png");
        assert_eq!(value["SizeKB"], 2);
        assert!(value["Timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn success_response_echoes_the_record() {
        let record = ProcessingRecord::new(
            "photo.png",
            "in-bucket",
            "out-bucket",
            "compressed-photo.png",
            2048,
        );
        let response = HandlerResponse::success(&record);

        assert_eq!(response.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["message"], SUCCESS_MESSAGE);
        assert_eq!(body["metadata"]["CompressedFile"], "compressed-photo.png");
        assert_eq!(body["metadata"]["SizeKB"], 2);
    }

    #[test]
    fn error_response_carries_the_error_text() {
        let error = PipelineError::Fetch(anyhow::anyhow!("no such key"));
        let response = HandlerResponse::error(&error);

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "failed to fetch source object: no such key");
    }
}
