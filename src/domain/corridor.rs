use crate::domain::money::{CountryCode, CurrencyCode};
use crate::error::{QuoteError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Delivery speed tier. A closed enumeration: corridors declare a subset of
/// these, and an unsupported code is a config-time error rather than a
/// runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierCode {
    Now,
    Today,
    Standard,
}

impl TierCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierCode::Now => "now",
            TierCode::Today => "today",
            TierCode::Standard => "standard",
        }
    }
}

impl fmt::Display for TierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a directed country/currency pair. All four fields participate
/// in corridor lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorridorId {
    pub from_country: CountryCode,
    pub from_currency: CurrencyCode,
    pub to_country: CountryCode,
    pub to_currency: CurrencyCode,
}

impl fmt::Display for CorridorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} -> {}/{}",
            self.from_country, self.from_currency, self.to_country, self.to_currency
        )
    }
}

/// Per-tier terms on a corridor. The ceiling caps availability for that tier
/// only; it is independent of the corridor's global maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTerms {
    pub code: TierCode,
    pub ceiling: Decimal,
}

/// A configured corridor: its offered tiers in declared order plus the global
/// transferable bounds, denominated in the sending currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    pub id: CorridorId,
    tiers: Vec<TierTerms>,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
}

impl Corridor {
    /// Builds a corridor, enforcing the structural invariants: at least one
    /// tier, no duplicate tier codes, `min <= max`, and tier ceilings
    /// monotonically non-decreasing across the declared order (the fastest
    /// tier carries the tightest or equal ceiling).
    pub fn new(
        id: CorridorId,
        tiers: Vec<TierTerms>,
        min_amount: Decimal,
        max_amount: Decimal,
    ) -> Result<Self> {
        if tiers.is_empty() {
            return Err(QuoteError::Config(format!("corridor {id} declares no tiers")));
        }
        if min_amount > max_amount {
            return Err(QuoteError::Config(format!(
                "corridor {id} has minimum {min_amount} above maximum {max_amount}"
            )));
        }
        for pair in tiers.windows(2) {
            if pair[1].ceiling < pair[0].ceiling {
                return Err(QuoteError::Config(format!(
                    "corridor {id}: tier {} ceiling {} is below preceding tier {} ceiling {}",
                    pair[1].code, pair[1].ceiling, pair[0].code, pair[0].ceiling
                )));
            }
        }
        let mut seen = Vec::with_capacity(tiers.len());
        for terms in &tiers {
            if seen.contains(&terms.code) {
                return Err(QuoteError::Config(format!(
                    "corridor {id} declares tier {} twice",
                    terms.code
                )));
            }
            seen.push(terms.code);
        }
        Ok(Self {
            id,
            tiers,
            min_amount,
            max_amount,
        })
    }

    /// Offered tiers in declared order. Quote options preserve this order.
    pub fn tiers(&self) -> &[TierTerms] {
        &self.tiers
    }

    /// The tier whose rate anchors receive-basis normalization: the first in
    /// the declared order.
    pub fn reference_tier(&self) -> TierCode {
        self.tiers[0].code
    }
}

/// The full set of configured corridors. Long-lived, read-only reference
/// data; requests receive it as part of an immutable snapshot.
#[derive(Debug, Clone, Default)]
pub struct CorridorTable {
    corridors: HashMap<CorridorId, Corridor>,
}

impl CorridorTable {
    pub fn new(corridors: Vec<Corridor>) -> Self {
        Self {
            corridors: corridors.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Pure lookup keyed on all four request codes. An unconfigured corridor
    /// fails here, before any amount validation or pricing runs.
    pub fn resolve(&self, id: &CorridorId) -> Result<&Corridor> {
        self.corridors
            .get(id)
            .ok_or_else(|| QuoteError::UnknownCorridor {
                from_country: id.from_country.to_string(),
                from_currency: id.from_currency.to_string(),
                to_country: id.to_country.to_string(),
                to_currency: id.to_currency.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.corridors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corridors.is_empty()
    }
}
