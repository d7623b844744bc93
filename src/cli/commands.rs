use tracing_subscriber::EnvFilter;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::models::{format_readings, ClimateReading};
use crate::operations::{get_records, put_record};
use crate::settings::Settings;
use crate::store::{ClimateTable, DynamoTable};
use crate::utils::constants::TABLE_NAME;
use crate::utils::progress::ProgressReporter;

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &settings.log_level);

    let reading = cli.reading();
    let table = DynamoTable::from_settings(&settings).await;

    let progress = ProgressReporter::new_spinner("Writing reading...", cli.quiet);
    let readings = execute(&table, &reading, &progress).await?;
    progress.finish_and_clear();

    println!("{}", render(&readings, cli.json)?);

    Ok(())
}

/// Write `reading`, then read back every reading sharing its id.
pub async fn execute(
    table: &dyn ClimateTable,
    reading: &ClimateReading,
    progress: &ProgressReporter,
) -> Result<Vec<ClimateReading>> {
    put_record(table, TABLE_NAME, reading).await?;

    progress.set_message("Reading back...");
    get_records(table, TABLE_NAME, &reading.id).await
}

pub fn render(readings: &[ClimateReading], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(readings)?)
    } else {
        Ok(format_readings(readings))
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`,
/// which wins over the configured level.
pub fn init_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(level)
        }
    });

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
