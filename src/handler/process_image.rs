use lambda_runtime::tracing;

use crate::context::Context;
use crate::error::PipelineError;
use crate::model::{self, ProcessingRecord};
use crate::service;

/// Subject line attached to every completion notification.
const NOTIFICATION_SUBJECT: &str = "✅ Image Processed Successfully";

/// Runs the five step pipeline for a single source object.
///
/// The steps are strictly sequential. The first failure aborts the rest, and
/// nothing that was already written is rolled back.
#[tracing::instrument(skip(ctx))]
pub async fn process_image(
    ctx: &Context,
    bucket: &str,
    key: &str,
) -> Result<ProcessingRecord, PipelineError> {
    let source = ctx
        .s3_client
        .get(bucket, key)
        .await
        .map_err(PipelineError::Fetch)?;
    tracing::trace!(byte_count = source.len(), "fetched source object");

    let compressed = service::image::compress_image(&source).map_err(PipelineError::Decode)?;
    tracing::trace!(byte_count = compressed.len(), "transcoded image");

    let output_key = model::compressed_key(key);
    ctx.s3_client
        .put(&ctx.config.output_bucket, &output_key, &compressed)
        .await
        .map_err(PipelineError::Store)?;
    tracing::trace!(output_key = %output_key, "stored compressed image");

    let record = ProcessingRecord::new(
        key,
        bucket,
        &ctx.config.output_bucket,
        &output_key,
        compressed.len(),
    );
    ctx.db
        .put_processing_record(&record)
        .await
        .map_err(PipelineError::Record)?;

    let message =
        serde_json::to_string_pretty(&record).map_err(|e| PipelineError::Notify(e.into()))?;
    ctx.sns_client
        .publish(&ctx.config.sns_topic_arn, NOTIFICATION_SUBJECT, &message)
        .await
        .map_err(PipelineError::Notify)?;

    Ok(record)
}
