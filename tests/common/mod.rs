use remitquote::application::engine::QuoteEngine;
use remitquote::domain::money::{CountryCode, CurrencyCode};
use remitquote::domain::quote::{CalculationBase, QuoteRequest};
use remitquote::infrastructure::in_memory::{InMemoryCorridorSource, InMemoryRateFeeProvider};
use remitquote::interfaces::json::config::ReferenceConfig;
use rust_decimal::Decimal;

pub fn demo_engine() -> QuoteEngine {
    let (corridors, tables) = ReferenceConfig::builtin().build().unwrap();
    QuoteEngine::new(
        Box::new(InMemoryCorridorSource::new(corridors)),
        Box::new(InMemoryRateFeeProvider::new(tables)),
    )
}

pub fn request(
    from_country: &str,
    from_currency: &str,
    to_country: &str,
    to_currency: &str,
    amount: Decimal,
    base: CalculationBase,
) -> QuoteRequest {
    QuoteRequest::new(
        CurrencyCode::new(from_currency).unwrap(),
        CurrencyCode::new(to_currency).unwrap(),
        CountryCode::new(from_country).unwrap(),
        CountryCode::new(to_country).unwrap(),
        amount,
        base,
    )
    .unwrap()
}

pub fn gbp_to_eur(amount: Decimal) -> QuoteRequest {
    request("GB", "GBP", "FR", "EUR", amount, CalculationBase::SendAmount)
}

pub fn try_to_eur(amount: Decimal) -> QuoteRequest {
    request("TR", "TRY", "FR", "EUR", amount, CalculationBase::SendAmount)
}

pub fn eur_to_gbp(amount: Decimal) -> QuoteRequest {
    request("FR", "EUR", "GB", "GBP", amount, CalculationBase::SendAmount)
}
