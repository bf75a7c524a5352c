use anyhow::Context;
use lambda_runtime::tracing;
use serde_dynamo::Item;

use crate::model::ProcessingRecord;

#[tracing::instrument(skip(client))]
pub async fn put_processing_record(
    client: &aws_sdk_dynamodb::Client,
    table: &str,
    record: &ProcessingRecord,
) -> anyhow::Result<()> {
    let item: Item =
        serde_dynamo::to_item(record).context("could not serialize processing record")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put item, dynamodb")?;

    Ok(())
}
