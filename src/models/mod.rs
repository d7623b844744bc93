pub mod reading;

pub use reading::{format_readings, ClimateReading};
