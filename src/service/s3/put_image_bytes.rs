use anyhow::Context;
use lambda_runtime::tracing;

#[tracing::instrument(skip(client, content))]
pub async fn put_image_bytes(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    content: &[u8],
) -> anyhow::Result<()> {
    let body = aws_sdk_s3::primitives::ByteStream::from(content.to_vec());
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .await
        .context(format!("could not put item {key} into bucket {bucket}"))?;

    Ok(())
}
