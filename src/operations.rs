use tracing::{debug, info, warn};

use crate::codec::{decode_all, encode};
use crate::error::Result;
use crate::expression::{ExpressionBuilder, Name, Projection, Value};
use crate::models::ClimateReading;
use crate::store::{ClimateTable, ScanRequest};
use crate::utils::constants::{PARTITION_KEY, READ_PROJECTION};

/// Write `reading` to `table_name`, replacing any reading with the same id.
///
/// The reading is encoded before the table is contacted, so an encoding
/// failure never reaches the service.
pub async fn put_record(
    table: &dyn ClimateTable,
    table_name: &str,
    reading: &ClimateReading,
) -> Result<String> {
    let item = encode(reading)?;

    debug!(table = table_name, id = %reading.id, attributes = item.len(), "PutItem");
    table.put_item(table_name, item).await?;

    let message = format!(
        "Successfully added '{}' to table {}",
        reading.sensor_id, table_name
    );
    info!("{}", message);

    Ok(message)
}

/// Scan `table_name` for readings whose id equals `id`.
///
/// Only id, date and temperature are returned; the other fields come back
/// empty. Only the first page of the scan is read.
pub async fn get_records(
    table: &dyn ClimateTable,
    table_name: &str,
    id: &str,
) -> Result<Vec<ClimateReading>> {
    let expression = ExpressionBuilder::new()
        .with_filter(Name::new(PARTITION_KEY).equal(Value::string(id)))
        .with_projection(Projection::names(READ_PROJECTION))
        .build()?;

    debug!(
        table = table_name,
        filter = expression.filter().unwrap_or_default(),
        projection = expression.projection().unwrap_or_default(),
        "Scan"
    );

    let page = table
        .scan(ScanRequest {
            table_name: table_name.to_string(),
            expression,
        })
        .await?;

    if page.is_truncated() {
        warn!(
            table = table_name,
            returned = page.items.len(),
            "scan stopped before the end of the table; later pages are not read"
        );
    }

    let readings = decode_all(&page.items)?;
    debug!(count = readings.len(), "decoded readings");

    Ok(readings)
}
