mod publish_notification;

use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockSNSClient as SNS;
#[cfg(not(test))]
pub use SNSClient as SNS;

#[derive(Clone, Debug)]
pub struct SNSClient {
    inner: aws_sdk_sns::Client,
}

#[cfg_attr(test, automock)]
impl SNSClient {
    pub fn new(inner: aws_sdk_sns::Client) -> Self {
        Self { inner }
    }

    /// Publishes the message to the topic under the provided subject line.
    #[tracing::instrument(skip(self, message))]
    pub async fn publish(
        &self,
        topic_arn: &str,
        subject: &str,
        message: &str,
    ) -> anyhow::Result<()> {
        publish_notification::publish_notification(&self.inner, topic_arn, subject, message).await
    }
}
