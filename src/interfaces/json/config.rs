use crate::domain::corridor::{Corridor, CorridorId, CorridorTable, TierCode, TierTerms};
use crate::domain::money::{CountryCode, CurrencyCode};
use crate::error::Result;
use crate::infrastructure::in_memory::RateFeeTables;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::io::Read;

/// Reference-data configuration: corridors with per-tier ceilings, rates and
/// fee schedules. Loaded once at process start; the engine only ever sees
/// the validated domain tables built from it.
#[derive(Debug, Deserialize)]
pub struct ReferenceConfig {
    pub corridors: Vec<CorridorConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorridorConfig {
    pub from_country_code: String,
    pub from_currency_code: String,
    pub to_country_code: String,
    pub to_currency_code: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub tiers: Vec<TierConfig>,
}

#[derive(Debug, Deserialize)]
pub struct TierConfig {
    pub code: TierCode,
    pub ceiling: Decimal,
    pub rate: Decimal,
    pub fee: FeeConfig,
}

#[derive(Debug, Deserialize)]
pub struct FeeConfig {
    pub fixed: Decimal,
    pub percent: Decimal,
}

impl ReferenceConfig {
    pub fn from_reader(source: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Builds the validated corridor table and rate/fee tables. Structural
    /// problems (unknown codes, decreasing ceilings, inverted bounds) fail
    /// here, at load time, never during a quote.
    pub fn build(self) -> Result<(CorridorTable, RateFeeTables)> {
        let mut corridors = Vec::with_capacity(self.corridors.len());
        let mut tables = RateFeeTables::default();

        for corridor in self.corridors {
            let id = CorridorId {
                from_country: CountryCode::new(&corridor.from_country_code)?,
                from_currency: CurrencyCode::new(&corridor.from_currency_code)?,
                to_country: CountryCode::new(&corridor.to_country_code)?,
                to_currency: CurrencyCode::new(&corridor.to_currency_code)?,
            };

            let mut terms = Vec::with_capacity(corridor.tiers.len());
            for tier in corridor.tiers {
                terms.push(TierTerms {
                    code: tier.code,
                    ceiling: tier.ceiling,
                });
                tables.set_rate(id.clone(), tier.code, tier.rate);
                tables.set_fee(id.clone(), tier.code, tier.fee.fixed, tier.fee.percent);
            }

            corridors.push(Corridor::new(
                id,
                terms,
                corridor.min_amount,
                corridor.max_amount,
            )?);
        }

        Ok((CorridorTable::new(corridors), tables))
    }

    /// Demo corridor set used when no config file is given: GBP and TRY into
    /// EUR, and EUR into GBP, with 1 to 1,000,000 sending-currency bounds.
    pub fn builtin() -> Self {
        fn tier(
            code: TierCode,
            ceiling: Decimal,
            rate: Decimal,
            fixed: Decimal,
            percent: Decimal,
        ) -> TierConfig {
            TierConfig {
                code,
                ceiling,
                rate,
                fee: FeeConfig { fixed, percent },
            }
        }

        Self {
            corridors: vec![
                CorridorConfig {
                    from_country_code: "GB".to_string(),
                    from_currency_code: "GBP".to_string(),
                    to_country_code: "FR".to_string(),
                    to_currency_code: "EUR".to_string(),
                    min_amount: dec!(1),
                    max_amount: dec!(1000000),
                    tiers: vec![
                        tier(TierCode::Now, dec!(2000), dec!(1.1500), dec!(2.99), dec!(0.5)),
                        tier(TierCode::Today, dec!(20000), dec!(1.1495), dec!(1.99), dec!(0.35)),
                        tier(
                            TierCode::Standard,
                            dec!(1000000),
                            dec!(1.1490),
                            dec!(0.99),
                            dec!(0.25),
                        ),
                    ],
                },
                CorridorConfig {
                    from_country_code: "TR".to_string(),
                    from_currency_code: "TRY".to_string(),
                    to_country_code: "FR".to_string(),
                    to_currency_code: "EUR".to_string(),
                    min_amount: dec!(1),
                    max_amount: dec!(1000000),
                    tiers: vec![
                        tier(TierCode::Today, dec!(100000), dec!(0.0270), dec!(14.99), dec!(0.9)),
                        tier(
                            TierCode::Standard,
                            dec!(1000000),
                            dec!(0.0268),
                            dec!(4.99),
                            dec!(0.5),
                        ),
                    ],
                },
                CorridorConfig {
                    from_country_code: "FR".to_string(),
                    from_currency_code: "EUR".to_string(),
                    to_country_code: "GB".to_string(),
                    to_currency_code: "GBP".to_string(),
                    min_amount: dec!(1),
                    max_amount: dec!(1000000),
                    tiers: vec![
                        tier(TierCode::Now, dec!(2000), dec!(0.8610), dec!(2.49), dec!(0.5)),
                        tier(TierCode::Today, dec!(20000), dec!(0.8605), dec!(1.49), dec!(0.35)),
                        tier(
                            TierCode::Standard,
                            dec!(1000000),
                            dec!(0.8600),
                            dec!(0.89),
                            dec!(0.25),
                        ),
                    ],
                },
            ],
        }
    }
}
