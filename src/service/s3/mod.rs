mod get_image_bytes;
mod put_image_bytes;

use anyhow::Result;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the provided key from the bucket.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        get_image_bytes::get_image_bytes(&self.inner, bucket, key).await
    }

    /// Puts the provided content into the bucket at the provided key.
    #[tracing::instrument(skip(self, content))]
    pub async fn put(&self, bucket: &str, key: &str, content: &[u8]) -> Result<()> {
        put_image_bytes::put_image_bytes(&self.inner, bucket, key, content).await
    }
}
