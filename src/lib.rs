pub mod cli;
pub mod codec;
pub mod error;
pub mod expression;
pub mod models;
pub mod operations;
pub mod settings;
pub mod store;
pub mod utils;

pub use error::{ClimateError, CodecError, Result, ServiceCallError};
pub use models::ClimateReading;
pub use operations::{get_records, put_record};
