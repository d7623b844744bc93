//! Table clients: the capability set the operations need from the table
//! service, with a DynamoDB implementation and an in-process one.

pub mod dynamo;
pub mod memory;

use async_trait::async_trait;

use crate::codec::Item;
use crate::error::ServiceCallError;
use crate::expression::Expression;

pub use dynamo::DynamoTable;
pub use memory::MemoryTable;

#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub table_name: String,
    pub expression: Expression,
}

/// One page of scan results, as returned by a single call.
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

impl ScanPage {
    pub fn is_truncated(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}

#[async_trait]
pub trait ClimateTable: Send + Sync {
    /// Unconditionally store `item`, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), ServiceCallError>;

    /// Scan the table once and return the first page of matches.
    async fn scan(&self, request: ScanRequest) -> Result<ScanPage, ServiceCallError>;
}
