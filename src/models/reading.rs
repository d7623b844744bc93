use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// One climate sensor observation as stored in the `climate` table.
///
/// Every field is free-form text. Only `id` has meaning to the table: it is
/// the partition key, and a later write with the same `id` replaces the item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClimateReading {
    #[validate(length(max = 2048))]
    pub id: String,

    pub date: String,

    pub sensor_id: String,

    pub temperature: String,

    pub humidity: String,

    pub location: String,
}

impl ClimateReading {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        sensor_id: impl Into<String>,
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            sensor_id: sensor_id.into(),
            temperature: temperature.into(),
            humidity: humidity.into(),
            location: location.into(),
        }
    }

    /// The fixed reading written when nothing is supplied on the command line.
    pub fn sample() -> Self {
        Self::new("3", Local::now().to_string(), "3", "25", "50", "AWS")
    }
}

impl fmt::Display for ClimateReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Id:{} Date:{} SensorId:{} Temperature:{} Humidity:{} Location:{}}}",
            self.id, self.date, self.sensor_id, self.temperature, self.humidity, self.location
        )
    }
}

/// Render readings as a bracketed, space separated list.
pub fn format_readings(readings: &[ClimateReading]) -> String {
    let body = readings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", body)
}
