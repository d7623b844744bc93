/// Table the readings live in
pub const TABLE_NAME: &str = "climate";

/// Attribute names as stored in the table
pub const ATTR_ID: &str = "id";
pub const ATTR_DATE: &str = "date";
pub const ATTR_SENSOR_ID: &str = "sensorId";
pub const ATTR_TEMPERATURE: &str = "temperature";
pub const ATTR_HUMIDITY: &str = "humidity";
pub const ATTR_LOCATION: &str = "location";

/// Partition key of the table
pub const PARTITION_KEY: &str = ATTR_ID;

/// Attributes returned by a read
pub const READ_PROJECTION: [&str; 3] = [ATTR_ID, ATTR_DATE, ATTR_TEMPERATURE];

/// DynamoDB limit on a partition key value, in bytes
pub const MAX_PARTITION_KEY_LEN: usize = 2048;

/// Configuration defaults
pub const CONFIG_ENV_PREFIX: &str = "CLIMATE_NODE";
pub const DEFAULT_CONFIG_FILE: &str = "climate-node.toml";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
