use crate::domain::corridor::{CorridorId, TierCode};
use crate::domain::money::{CountryCode, CurrencyCode, Money};
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether the user-supplied amount is the amount sent or the amount the
/// recipient should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationBase {
    SendAmount,
    ReceiveAmount,
}

impl FromStr for CalculationBase {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sendAmount" => Ok(CalculationBase::SendAmount),
            "receiveAmount" => Ok(CalculationBase::ReceiveAmount),
            other => Err(QuoteError::InvalidRequest(format!(
                "calculationBase must be sendAmount or receiveAmount, got {other:?}"
            ))),
        }
    }
}

/// A validated, immutable quote request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub from_country: CountryCode,
    pub to_country: CountryCode,
    pub amount: Decimal,
    pub calculation_base: CalculationBase,
}

impl QuoteRequest {
    pub fn new(
        from_currency: CurrencyCode,
        to_currency: CurrencyCode,
        from_country: CountryCode,
        to_country: CountryCode,
        amount: Decimal,
        calculation_base: CalculationBase,
    ) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(QuoteError::InvalidRequest(format!(
                "amount must be non-negative, got {amount}"
            )));
        }
        Ok(Self {
            from_currency,
            to_currency,
            from_country,
            to_country,
            amount,
            calculation_base,
        })
    }

    pub fn corridor_id(&self) -> CorridorId {
        CorridorId {
            from_country: self.from_country.clone(),
            from_currency: self.from_currency.clone(),
            to_country: self.to_country.clone(),
            to_currency: self.to_currency.clone(),
        }
    }
}

/// Why a priced tier is not currently offerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvailabilityReason {
    ExceedsTierCeiling,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AvailabilityReason>,
}

impl Availability {
    pub fn available() -> Self {
        Self {
            is_available: true,
            reason: None,
        }
    }

    pub fn unavailable(reason: AvailabilityReason) -> Self {
        Self {
            is_available: false,
            reason: Some(reason),
        }
    }
}

/// One priced delivery option. Unavailable tiers are still priced and
/// returned so the caller sees every tier's eligibility at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOption {
    pub code: TierCode,
    pub sending_amount: Money,
    pub receiving_amount: Money,
    pub fee: Money,
    pub availability: Availability,
}

/// The assembled quote: the request it answers plus its options in the
/// corridor's declared tier order. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub request: QuoteRequest,
    pub options: Vec<DeliveryOption>,
}

impl QuoteResult {
    pub fn option(&self, code: TierCode) -> Option<&DeliveryOption> {
        self.options.iter().find(|o| o.code == code)
    }
}
