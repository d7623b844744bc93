use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use super::{ClimateTable, ScanPage, ScanRequest};
use crate::codec::Item;
use crate::error::ServiceCallError;
use crate::utils::constants::PARTITION_KEY;

/// In-process [`ClimateTable`] with the put and scan semantics of a
/// DynamoDB table keyed on a single string partition key.
///
/// Items are kept in insertion order and a put with an existing key
/// replaces the stored item in place. When a page size is set, a scan
/// evaluates at most that many stored items before filtering, the way
/// DynamoDB's `Limit` does, and reports where it stopped.
#[derive(Debug)]
pub struct MemoryTable {
    table_name: String,
    partition_key: String,
    page_size: Option<usize>,
    items: Mutex<Vec<Item>>,
    put_calls: AtomicUsize,
    scan_calls: AtomicUsize,
}

impl MemoryTable {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key: PARTITION_KEY.to_string(),
            page_size: None,
            items: Mutex::new(Vec::new()),
            put_calls: AtomicUsize::new(0),
            scan_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    fn check_table(&self, table_name: &str) -> Result<(), String> {
        if table_name == self.table_name {
            Ok(())
        } else {
            Err(format!(
                "ResourceNotFoundException: Requested resource not found: table {}",
                table_name
            ))
        }
    }

    fn key_of<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match item.get(&self.partition_key) {
            Some(AttributeValue::S(key)) if !key.is_empty() => Some(key),
            _ => None,
        }
    }
}

#[async_trait]
impl ClimateTable for MemoryTable {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), ServiceCallError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        self.check_table(table_name).map_err(ServiceCallError::PutItem)?;

        let key = self.key_of(&item).map(str::to_string).ok_or_else(|| {
            ServiceCallError::PutItem(format!(
                "ValidationException: One or more parameter values were invalid: \
                 Missing the key {} in the item",
                self.partition_key
            ))
        })?;

        let mut items = self.items.lock().await;
        match items.iter().position(|stored| self.key_of(stored) == Some(key.as_str())) {
            Some(index) => items[index] = item,
            None => items.push(item),
        }

        Ok(())
    }

    async fn scan(&self, request: ScanRequest) -> Result<ScanPage, ServiceCallError> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        self.check_table(&request.table_name)
            .map_err(ServiceCallError::Scan)?;

        let items = self.items.lock().await;
        let limit = self.page_size.unwrap_or(items.len());
        let evaluated = &items[..limit.min(items.len())];

        let condition = request.expression.condition();
        let projection = request.expression.projected();

        let matches = evaluated
            .iter()
            .filter(|item| condition.map_or(true, |cond| cond.matches(item)))
            .map(|item| match projection {
                Some(projection) => projection.apply(item),
                None => item.clone(),
            })
            .collect();

        let last_evaluated_key = if evaluated.len() < items.len() {
            evaluated.last().and_then(|last| {
                last.get(&self.partition_key)
                    .map(|key| Item::from([(self.partition_key.clone(), key.clone())]))
            })
        } else {
            None
        };

        Ok(ScanPage {
            items: matches,
            last_evaluated_key,
        })
    }
}
