mod dynamo_record_store;
mod mock_record_store;

pub use dynamo_record_store::DynamoRecordStore;
pub use mock_record_store::MockRecordStore;
