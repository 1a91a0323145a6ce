use crate::domain::corridor::Corridor;
use crate::domain::ports::RateFeeSnapshot;
use crate::domain::quote::{CalculationBase, QuoteRequest};
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;

/// A request amount normalized to sending-currency terms and checked against
/// the corridor's global bounds. Only a passing validation can reach the
/// pricer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedAmount {
    pub sending: Decimal,
}

/// Normalizes the requested amount to a sending amount, then applies the
/// corridor's inclusive global bounds.
///
/// For a `ReceiveAmount` basis the request is inverted through the rate of
/// the corridor's reference tier, taken from the same snapshot the pricer
/// will use, so the validated bound and the later tier computation cannot
/// disagree.
///
/// Bound policy, as observed on the wire: below minimum fails as
/// "tooSmallAmount", above maximum fails as "invalidAmount" (asymmetric
/// naming is deliberate), amounts exactly at either bound pass.
pub fn validate(
    request: &QuoteRequest,
    corridor: &Corridor,
    rates: &dyn RateFeeSnapshot,
) -> Result<ValidatedAmount> {
    let sending = match request.calculation_base {
        CalculationBase::SendAmount => request.amount,
        CalculationBase::ReceiveAmount => {
            let rate = rates.rate(&corridor.id, corridor.reference_tier())?;
            if rate <= Decimal::ZERO {
                return Err(QuoteError::ProviderUnavailable(format!(
                    "non-positive rate {rate} for corridor {}",
                    corridor.id
                )));
            }
            // checked_div: an unrepresentable quotient means the implied
            // sending amount is beyond any corridor maximum.
            request
                .amount
                .checked_div(rate)
                .ok_or(QuoteError::InvalidAmount {
                    amount: request.amount,
                    maximum: corridor.max_amount,
                })?
                .round_dp(2)
        }
    };

    if sending < corridor.min_amount {
        return Err(QuoteError::TooSmallAmount {
            amount: sending,
            minimum: corridor.min_amount,
        });
    }
    if sending > corridor.max_amount {
        return Err(QuoteError::InvalidAmount {
            amount: sending,
            maximum: corridor.max_amount,
        });
    }

    Ok(ValidatedAmount { sending })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corridor::{CorridorId, TierCode, TierTerms};
    use crate::domain::money::{CountryCode, CurrencyCode};
    use rust_decimal_macros::dec;

    struct FixedRates {
        rate: Decimal,
    }

    impl RateFeeSnapshot for FixedRates {
        fn rate(&self, _corridor: &CorridorId, _tier: TierCode) -> Result<Decimal> {
            Ok(self.rate)
        }

        fn fee(
            &self,
            _corridor: &CorridorId,
            _tier: TierCode,
            _amount: Decimal,
        ) -> Result<Decimal> {
            Ok(Decimal::ZERO)
        }
    }

    fn corridor() -> Corridor {
        Corridor::new(
            CorridorId {
                from_country: CountryCode::new("FR").unwrap(),
                from_currency: CurrencyCode::new("EUR").unwrap(),
                to_country: CountryCode::new("GB").unwrap(),
                to_currency: CurrencyCode::new("GBP").unwrap(),
            },
            vec![TierTerms {
                code: TierCode::Standard,
                ceiling: dec!(1000000),
            }],
            dec!(1),
            dec!(1000000),
        )
        .unwrap()
    }

    fn request(amount: Decimal, base: CalculationBase) -> QuoteRequest {
        QuoteRequest::new(
            CurrencyCode::new("EUR").unwrap(),
            CurrencyCode::new("GBP").unwrap(),
            CountryCode::new("FR").unwrap(),
            CountryCode::new("GB").unwrap(),
            amount,
            base,
        )
        .unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(0.86) };

        let at_min = validate(&request(dec!(1.00), CalculationBase::SendAmount), &corridor, &rates);
        assert_eq!(at_min.unwrap().sending, dec!(1.00));

        let at_max = validate(
            &request(dec!(1000000), CalculationBase::SendAmount),
            &corridor,
            &rates,
        );
        assert_eq!(at_max.unwrap().sending, dec!(1000000));
    }

    #[test]
    fn test_below_minimum_is_too_small() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(0.86) };
        let err = validate(&request(dec!(0.99), CalculationBase::SendAmount), &corridor, &rates)
            .unwrap_err();
        assert!(matches!(err, QuoteError::TooSmallAmount { .. }));
        assert_eq!(err.message_key(), "tooSmallAmount");
    }

    #[test]
    fn test_above_maximum_is_invalid_amount() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(0.86) };
        let err = validate(
            &request(dec!(1000001), CalculationBase::SendAmount),
            &corridor,
            &rates,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidAmount { .. }));
        assert_eq!(err.message_key(), "invalidAmount");
    }

    #[test]
    fn test_receive_basis_inverts_through_reference_rate() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(0.50) };
        // Recipient should get 100 GBP at rate 0.50 -> 200 EUR must be sent.
        let validated = validate(
            &request(dec!(100), CalculationBase::ReceiveAmount),
            &corridor,
            &rates,
        )
        .unwrap();
        assert_eq!(validated.sending, dec!(200.00));
    }

    #[test]
    fn test_receive_basis_bounds_apply_to_normalized_amount() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(2) };
        // 1 unit received at rate 2 means only 0.50 sent, under the 1 EUR min.
        let err = validate(
            &request(dec!(1), CalculationBase::ReceiveAmount),
            &corridor,
            &rates,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::TooSmallAmount { .. }));
    }

    #[test]
    fn test_receive_basis_overflow_is_invalid_amount() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(0.5) };
        // A quotient too large for Decimal must surface as the typed
        // upper-bound error, never a panic.
        let err = validate(
            &request(Decimal::MAX, CalculationBase::ReceiveAmount),
            &corridor,
            &rates,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidAmount { .. }));
        assert_eq!(err.message_key(), "invalidAmount");
    }

    #[test]
    fn test_non_positive_rate_is_provider_failure() {
        let corridor = corridor();
        let rates = FixedRates { rate: dec!(0) };
        let err = validate(
            &request(dec!(100), CalculationBase::ReceiveAmount),
            &corridor,
            &rates,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::ProviderUnavailable(_)));
    }
}
