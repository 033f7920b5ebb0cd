//! Demo data seeding.

use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;

use ranking_core::ranking::{demo_attributes, demo_entries, demo_rank};
use ranking_core::storage::dynamodb::record_to_item;
use ranking_core::storage::StoredRecord;

use super::error::{DynamodbError, Result};

/// BatchWriteItem accepts at most 25 requests.
const BATCH_SIZE: usize = 25;

/// The demo rank followed by its attributes and entries.
pub fn seed_records() -> Vec<StoredRecord> {
    let mut records = vec![StoredRecord::from(&demo_rank())];
    records.extend(demo_attributes().iter().map(StoredRecord::from));
    records.extend(demo_entries().iter().map(StoredRecord::from));
    records
}

/// One display line per record, e.g. `attribute  Controls`.
pub fn describe_record(record: &StoredRecord) -> String {
    let name = match record {
        StoredRecord::Rank(r) => &r.name,
        StoredRecord::Attribute(a) => &a.name,
        StoredRecord::Entry(e) => &e.name,
    };
    format!("{:<10} {name}", record.kind().as_str())
}

/// Writes the records in batches and returns how many were written.
pub async fn seed_records_into(
    client: &Client,
    table_name: &str,
    records: &[StoredRecord],
) -> Result<usize> {
    let mut written = 0;

    for chunk in records.chunks(BATCH_SIZE) {
        let requests = chunk
            .iter()
            .map(|record| {
                let put = PutRequest::builder()
                    .set_item(Some(record_to_item(record)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put).build())
            })
            .collect::<Result<Vec<_>>>()?;

        let output = client
            .batch_write_item()
            .request_items(table_name, requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        let unprocessed = output
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, Vec::len);
        if unprocessed > 0 {
            return Err(DynamodbError::AwsSdk(format!(
                "{unprocessed} items were not processed"
            )));
        }

        written += chunk.len();
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranking_core::storage::RecordKind;

    #[test]
    fn test_seed_records_cover_the_demo_rank() {
        let records = seed_records();

        assert_eq!(records.len(), 1 + 3 + 5);
        assert_eq!(records[0].kind(), RecordKind::Rank);
        let rank_id = demo_rank().id;
        assert!(records.iter().all(|r| r.rank_id() == rank_id));
    }

    #[test]
    fn test_describe_record() {
        let records = seed_records();
        assert_eq!(describe_record(&records[0]), "rank       Video Game Consoles");
    }
}
