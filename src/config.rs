use anyhow::Context;

/// The configuration parameters for the handler.
///
/// All values are pulled from environment variables set on the lambda. There
/// are no defaults; a missing variable fails startup rather than an
/// individual invocation.
///
/// See `.env.sample` in the repository root for details.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket compressed images are written to
    pub output_bucket: String,

    /// The DynamoDB table holding one processing record per image
    pub dynamodb_table: String,

    /// The ARN of the SNS topic completion notifications are published to
    pub sns_topic_arn: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let output_bucket =
            std::env::var("OUTPUT_BUCKET").context("OUTPUT_BUCKET must be provided")?;
        let dynamodb_table =
            std::env::var("DYNAMODB_TABLE").context("DYNAMODB_TABLE must be provided")?;
        let sns_topic_arn =
            std::env::var("SNS_TOPIC_ARN").context("SNS_TOPIC_ARN must be provided")?;

        Ok(Config {
            output_bucket,
            dynamodb_table,
            sns_topic_arn,
        })
    }
}
