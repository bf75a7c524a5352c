mod process_image;

use anyhow::Context as _;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::context::Context;
use crate::error::PipelineError;
use crate::model::HandlerResponse;

/// Processes the s3 event
///
/// Any pipeline failure is converted into a 500 response here rather than
/// bubbled to the runtime; redelivery policy belongs to the trigger
/// infrastructure.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<HandlerResponse, Error> {
    tracing::trace!("handler invoked");

    let result = match source_from_event(&event.payload) {
        Ok((bucket, key)) => process_image::process_image(&ctx, &bucket, &key).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(record) => {
            tracing::info!(image_id = %record.image_id, size_kb = record.size_kb, "image processed");
            Ok(HandlerResponse::success(&record))
        }
        Err(e) => {
            tracing::error!(error = ?e, kind = e.kind(), "failed to process image");
            Ok(HandlerResponse::error(&e))
        }
    }
}

/// Pulls the source bucket and object key out of the first record.
///
/// The lambda is configured to deliver one record per event. A larger batch
/// is flagged, and only the first record is processed.
fn source_from_event(event: &S3Event) -> Result<(String, String), PipelineError> {
    if event.records.len() > 1 {
        tracing::warn!(
            record_count = event.records.len(),
            "event contained multiple records, only the first is processed"
        );
    }

    let record = event
        .records
        .first()
        .ok_or_else(|| PipelineError::InvalidEvent(anyhow::anyhow!("event contained no records")))?;

    let bucket = record
        .s3
        .bucket
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            PipelineError::InvalidEvent(anyhow::anyhow!("record is missing the bucket name"))
        })?;

    let key = record
        .s3
        .object
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            PipelineError::InvalidEvent(anyhow::anyhow!("record is missing the object key"))
        })?;

    // s3 url-encodes object keys in event payloads
    let key = urlencoding::decode(key)
        .context("object key is not valid UTF-8")
        .map_err(PipelineError::InvalidEvent)?;

    Ok((bucket.to_string(), key.into_owned()))
}
