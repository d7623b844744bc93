use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    ServiceCall(#[from] ServiceCallError),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Output formatting error: {0}")]
    Output(#[from] serde_json::Error),
}

impl ClimateError {
    /// First line of the two-line diagnostic printed before exiting.
    pub fn label(&self) -> &'static str {
        match self {
            ClimateError::Codec(CodecError::UnexpectedType { .. }) => "Got error unmarshalling:",
            ClimateError::Codec(_) => "Got error marshalling new item:",
            ClimateError::ServiceCall(ServiceCallError::Expression(_)) => {
                "Got error building expression:"
            }
            ClimateError::ServiceCall(ServiceCallError::PutItem(_)) => "Got error calling PutItem:",
            ClimateError::ServiceCall(ServiceCallError::Scan(_)) => "Query API call failed:",
            ClimateError::Config(_) => "Got error loading configuration:",
            ClimateError::Output(_) => "Got error formatting output:",
        }
    }
}

/// Failure converting a reading to or from its attribute map.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("partition key 'id' must not be empty")]
    MissingPartitionKey,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("attribute '{attribute}' has type {found}, expected S")]
    UnexpectedType { attribute: String, found: &'static str },
}

/// Failure talking to the table service, including building the request.
#[derive(Error, Debug)]
pub enum ServiceCallError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    #[error("PutItem failed: {0}")]
    PutItem(String),

    #[error("Scan failed: {0}")]
    Scan(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("unset parameter: expression builder has no filter or projection")]
    EmptyBuilder,

    #[error("invalid parameter: attribute name must not be empty")]
    EmptyName,

    #[error("invalid parameter: projection must name at least one attribute")]
    EmptyProjection,
}

impl From<ExpressionError> for ClimateError {
    fn from(err: ExpressionError) -> Self {
        ClimateError::ServiceCall(ServiceCallError::Expression(err))
    }
}
