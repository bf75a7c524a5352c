mod put_processing_record;

use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

use crate::model::ProcessingRecord;

#[cfg(test)]
pub use MockDBClient as DB;
#[cfg(not(test))]
pub use DBClient as DB;

#[derive(Clone, Debug)]
pub struct DBClient {
    table: String,
    inner: aws_sdk_dynamodb::Client,
}

#[cfg_attr(test, automock)]
impl DBClient {
    pub fn new(inner: aws_sdk_dynamodb::Client, table: &str) -> Self {
        Self {
            table: table.to_string(),
            inner,
        }
    }

    /// Persists the processing record, replacing any previous record with the
    /// same image id.
    #[tracing::instrument(skip(self))]
    pub async fn put_processing_record(&self, record: &ProcessingRecord) -> anyhow::Result<()> {
        put_processing_record::put_processing_record(&self.inner, &self.table, record).await
    }
}
