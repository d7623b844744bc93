use clap::Parser;
use std::path::PathBuf;

use crate::models::ClimateReading;

#[derive(Parser, Debug)]
#[command(name = "climate-node")]
#[command(about = "Write a climate reading to DynamoDB and read it back by id")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Partition key of the reading [default: 3]")]
    pub id: Option<String>,

    #[arg(long, help = "Observation time [default: now]")]
    pub date: Option<String>,

    #[arg(long, help = "Sensor identifier [default: 3]")]
    pub sensor_id: Option<String>,

    #[arg(long, help = "Temperature reading [default: 25]")]
    pub temperature: Option<String>,

    #[arg(long, help = "Humidity reading [default: 50]")]
    pub humidity: Option<String>,

    #[arg(long, help = "Sensor location [default: AWS]")]
    pub location: Option<String>,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(long, help = "Settings file [default: climate-node.toml if present]")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The sample reading with any fields given on the command line applied.
    pub fn reading(&self) -> ClimateReading {
        let mut reading = ClimateReading::sample();

        let overrides = [
            (&self.id, &mut reading.id),
            (&self.date, &mut reading.date),
            (&self.sensor_id, &mut reading.sensor_id),
            (&self.temperature, &mut reading.temperature),
            (&self.humidity, &mut reading.humidity),
            (&self.location, &mut reading.location),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        reading
    }
}
