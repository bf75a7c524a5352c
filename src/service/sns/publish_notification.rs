use anyhow::Context;
use lambda_runtime::tracing;

#[tracing::instrument(skip(client, message))]
pub async fn publish_notification(
    client: &aws_sdk_sns::Client,
    topic_arn: &str,
    subject: &str,
    message: &str,
) -> anyhow::Result<()> {
    client
        .publish()
        .topic_arn(topic_arn)
        .subject(subject)
        .message(message)
        .send()
        .await
        .context(format!("could not publish to topic {topic_arn}"))?;

    Ok(())
}
