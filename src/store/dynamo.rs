use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use tracing::debug;

use super::{ClimateTable, ScanPage, ScanRequest};
use crate::codec::Item;
use crate::settings::Settings;
use crate::error::ServiceCallError;

/// [`ClimateTable`] backed by Amazon DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoTable {
    client: Client,
}

impl DynamoTable {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the SDK default provider chain, with any region,
    /// profile or endpoint given in `settings` taking precedence.
    pub async fn from_settings(settings: &Settings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &settings.endpoint_url {
            debug!(endpoint = %endpoint, "using custom DynamoDB endpoint");
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ClimateTable for DynamoTable {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), ServiceCallError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| ServiceCallError::PutItem(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn scan(&self, request: ScanRequest) -> Result<ScanPage, ServiceCallError> {
        let expr = &request.expression;

        let output = self
            .client
            .scan()
            .table_name(&request.table_name)
            .set_filter_expression(expr.filter().map(str::to_string))
            .set_projection_expression(expr.projection().map(str::to_string))
            .set_expression_attribute_names(non_empty(expr.names()))
            .set_expression_attribute_values(non_empty(expr.values()))
            .send()
            .await
            .map_err(|e| ServiceCallError::Scan(DisplayErrorContext(&e).to_string()))?;

        Ok(ScanPage {
            items: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
        })
    }
}

// DynamoDB rejects empty placeholder maps, so an unused map is left unset.
fn non_empty<V: Clone>(map: &HashMap<String, V>) -> Option<HashMap<String, V>> {
    if map.is_empty() {
        None
    } else {
        Some(map.clone())
    }
}
