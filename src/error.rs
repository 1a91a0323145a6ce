use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("no corridor configured for {from_country}/{from_currency} -> {to_country}/{to_currency}")]
    UnknownCorridor {
        from_country: String,
        from_currency: String,
        to_country: String,
        to_currency: String,
    },
    #[error("amount {amount} is below the corridor minimum of {minimum}")]
    TooSmallAmount { amount: Decimal, minimum: Decimal },
    #[error("amount {amount} is above the corridor maximum of {maximum}")]
    InvalidAmount { amount: Decimal, maximum: Decimal },
    #[error("rate/fee provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid reference data: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Message key the service boundary exposes for this error, matching the
    /// observed wire contract ("tooSmallAmount" vs "invalidAmount" for the
    /// lower and upper bound respectively).
    pub fn message_key(&self) -> &'static str {
        match self {
            QuoteError::UnknownCorridor { .. } => "unknownCorridor",
            QuoteError::TooSmallAmount { .. } => "tooSmallAmount",
            QuoteError::InvalidAmount { .. } => "invalidAmount",
            QuoteError::ProviderUnavailable(_) => "providerUnavailable",
            QuoteError::InvalidRequest(_) => "invalidRequest",
            QuoteError::Config(_) | QuoteError::Json(_) | QuoteError::Io(_) => "internalError",
        }
    }
}
