use crate::application::validator::ValidatedAmount;
use crate::domain::corridor::{Corridor, TierTerms};
use crate::domain::money::Money;
use crate::domain::ports::RateFeeSnapshot;
use crate::domain::quote::{Availability, AvailabilityReason, DeliveryOption};
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;

/// Prices one tier. Each tier is computed independently from the shared
/// snapshot; no state crosses tiers.
///
/// The subtraction law `receiving == sending - fee` holds exactly in
/// sending-currency units; the receiving side is then converted exactly once
/// at this tier's rate and rounded to two decimal places.
///
/// A tier whose ceiling is exceeded is still priced and returned, marked
/// unavailable with `ExceedsTierCeiling`, so callers see every tier's
/// eligibility at once. The ceiling is a per-tier cutoff, separate from the
/// corridor's global maximum enforced by the validator.
pub fn price(
    validated: &ValidatedAmount,
    corridor: &Corridor,
    terms: &TierTerms,
    rates: &dyn RateFeeSnapshot,
) -> Result<DeliveryOption> {
    let sending = validated.sending;

    let fee = rates.fee(&corridor.id, terms.code, sending)?;
    if fee < Decimal::ZERO {
        return Err(QuoteError::ProviderUnavailable(format!(
            "negative fee {fee} for corridor {} tier {}",
            corridor.id, terms.code
        )));
    }

    let rate = rates.rate(&corridor.id, terms.code)?;
    if rate <= Decimal::ZERO {
        return Err(QuoteError::ProviderUnavailable(format!(
            "non-positive rate {rate} for corridor {} tier {}",
            corridor.id, terms.code
        )));
    }

    let net = sending - fee;
    let receiving = net
        .checked_mul(rate)
        .ok_or_else(|| {
            QuoteError::ProviderUnavailable(format!(
                "receiving amount overflow for corridor {} tier {}",
                corridor.id, terms.code
            ))
        })?
        .round_dp(2);

    let availability = if sending <= terms.ceiling {
        Availability::available()
    } else {
        Availability::unavailable(AvailabilityReason::ExceedsTierCeiling)
    };

    Ok(DeliveryOption {
        code: terms.code,
        sending_amount: Money::new(sending, corridor.id.from_currency.clone()),
        receiving_amount: Money::new(receiving, corridor.id.to_currency.clone()),
        fee: Money::new(fee, corridor.id.from_currency.clone()),
        availability,
    })
}
