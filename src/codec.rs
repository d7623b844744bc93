//! Conversion between [`ClimateReading`] and DynamoDB attribute maps.

use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use validator::Validate;

use crate::error::CodecError;
use crate::models::ClimateReading;
use crate::utils::constants::*;

/// A DynamoDB item: attribute name to typed value.
pub type Item = HashMap<String, AttributeValue>;

/// Encode a reading as an item. Every present field becomes a string
/// attribute; empty fields are left out.
pub fn encode(reading: &ClimateReading) -> Result<Item, CodecError> {
    if reading.id.is_empty() {
        return Err(CodecError::MissingPartitionKey);
    }
    reading.validate()?;

    let fields = [
        (ATTR_ID, &reading.id),
        (ATTR_DATE, &reading.date),
        (ATTR_SENSOR_ID, &reading.sensor_id),
        (ATTR_TEMPERATURE, &reading.temperature),
        (ATTR_HUMIDITY, &reading.humidity),
        (ATTR_LOCATION, &reading.location),
    ];

    Ok(fields
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name.to_string(), AttributeValue::S(value.clone())))
        .collect())
}

/// Decode an item into a reading. Attributes missing from the item, for
/// example because a projection left them out, decode as empty strings.
pub fn decode(item: &Item) -> Result<ClimateReading, CodecError> {
    Ok(ClimateReading {
        id: string_attr(item, ATTR_ID)?,
        date: string_attr(item, ATTR_DATE)?,
        sensor_id: string_attr(item, ATTR_SENSOR_ID)?,
        temperature: string_attr(item, ATTR_TEMPERATURE)?,
        humidity: string_attr(item, ATTR_HUMIDITY)?,
        location: string_attr(item, ATTR_LOCATION)?,
    })
}

pub fn decode_all(items: &[Item]) -> Result<Vec<ClimateReading>, CodecError> {
    items.iter().map(decode).collect()
}

fn string_attr(item: &Item, name: &str) -> Result<String, CodecError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(other) => Err(CodecError::UnexpectedType {
            attribute: name.to_string(),
            found: type_tag(other),
        }),
    }
}

fn type_tag(value: &AttributeValue) -> &'static str {
    match value {
        AttributeValue::B(_) => "B",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Bs(_) => "BS",
        AttributeValue::L(_) => "L",
        AttributeValue::M(_) => "M",
        AttributeValue::N(_) => "N",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::S(_) => "S",
        AttributeValue::Ss(_) => "SS",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_reading() -> ClimateReading {
        ClimateReading::new("3", "2024-01-01T00:00:00Z", "3", "25", "50", "AWS")
    }

    #[test]
    fn test_encode_tags_every_field_as_string() {
        let item = encode(&full_reading()).unwrap();

        assert_eq!(item.len(), 6);
        assert_eq!(item["id"], AttributeValue::S("3".to_string()));
        assert_eq!(item["sensorId"], AttributeValue::S("3".to_string()));
        assert_eq!(item["location"], AttributeValue::S("AWS".to_string()));
    }

    #[test]
    fn test_round_trip() {
        let reading = full_reading();
        assert_eq!(decode(&encode(&reading).unwrap()).unwrap(), reading);
    }

    #[test]
    fn test_encode_skips_empty_fields() {
        let reading = ClimateReading::new("9", "", "", "18", "", "");
        let item = encode(&reading).unwrap();

        let mut keys: Vec<_> = item.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["id".to_string(), "temperature".to_string()]);
    }

    #[test]
    fn test_encode_rejects_empty_id() {
        let mut reading = full_reading();
        reading.id.clear();

        assert!(matches!(encode(&reading), Err(CodecError::MissingPartitionKey)));
    }

    #[test]
    fn test_encode_rejects_oversized_id() {
        let mut reading = full_reading();
        reading.id = "k".repeat(MAX_PARTITION_KEY_LEN + 1);

        assert!(matches!(encode(&reading), Err(CodecError::Validation(_))));
    }

    #[test]
    fn test_decode_partial_projection() {
        let item: Item = [
            ("id", "3"),
            ("date", "2024-01-01T00:00:00Z"),
            ("temperature", "25"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
        .collect();

        let reading = decode(&item).unwrap();
        assert_eq!(
            reading,
            ClimateReading::new("3", "2024-01-01T00:00:00Z", "", "25", "", "")
        );
    }

    #[test]
    fn test_decode_null_as_empty() {
        let mut item = encode(&full_reading()).unwrap();
        item.insert("humidity".to_string(), AttributeValue::Null(true));

        assert_eq!(decode(&item).unwrap().humidity, "");
    }

    #[test]
    fn test_decode_rejects_non_string_scalar() {
        let mut item = encode(&full_reading()).unwrap();
        item.insert("temperature".to_string(), AttributeValue::N("25".to_string()));

        match decode(&item) {
            Err(CodecError::UnexpectedType { attribute, found }) => {
                assert_eq!(attribute, "temperature");
                assert_eq!(found, "N");
            }
            other => panic!("expected UnexpectedType, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_all_keeps_order_and_fails_fast() {
        let first = encode(&ClimateReading::new("1", "", "", "10", "", "")).unwrap();
        let second = encode(&ClimateReading::new("2", "", "", "20", "", "")).unwrap();

        let readings = decode_all(&[first.clone(), second]).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].id, "1");
        assert_eq!(readings[1].id, "2");

        let mut bad = first.clone();
        bad.insert("id".to_string(), AttributeValue::Bool(true));
        assert!(decode_all(&[first, bad]).is_err());
    }
}
