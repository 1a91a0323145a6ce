use crate::domain::corridor::{CorridorId, CorridorTable, TierCode};
use crate::domain::ports::{CorridorSource, RateFeeProvider, RateFeeSnapshot};
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A tier's fee schedule: a fixed part plus a percentage of the sending
/// amount, both in the sending currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub fixed: Decimal,
    pub percent: Decimal,
}

impl FeeSchedule {
    /// `None` when the schedule cannot produce a representable fee for the
    /// amount.
    pub fn fee_for(&self, amount: Decimal) -> Option<Decimal> {
        amount
            .checked_mul(self.percent)?
            .checked_div(dec!(100))?
            .checked_add(self.fixed)
            .map(|fee| fee.round_dp(2))
    }
}

/// Cache-resident rate and fee tables. One immutable instance backs all tier
/// computations of a quote; refreshes build a new instance and swap it in.
#[derive(Debug, Clone, Default)]
pub struct RateFeeTables {
    rates: HashMap<(CorridorId, TierCode), Decimal>,
    fees: HashMap<(CorridorId, TierCode), FeeSchedule>,
}

impl RateFeeTables {
    pub fn set_rate(&mut self, corridor: CorridorId, tier: TierCode, rate: Decimal) {
        self.rates.insert((corridor, tier), rate);
    }

    pub fn set_fee(
        &mut self,
        corridor: CorridorId,
        tier: TierCode,
        fixed: Decimal,
        percent: Decimal,
    ) {
        self.fees.insert((corridor, tier), FeeSchedule { fixed, percent });
    }
}

impl RateFeeSnapshot for RateFeeTables {
    fn rate(&self, corridor: &CorridorId, tier: TierCode) -> Result<Decimal> {
        self.rates
            .get(&(corridor.clone(), tier))
            .copied()
            .ok_or_else(|| {
                QuoteError::ProviderUnavailable(format!(
                    "no rate for corridor {corridor} tier {tier}"
                ))
            })
    }

    fn fee(&self, corridor: &CorridorId, tier: TierCode, amount: Decimal) -> Result<Decimal> {
        let schedule = self.fees.get(&(corridor.clone(), tier)).ok_or_else(|| {
            QuoteError::ProviderUnavailable(format!("no fee for corridor {corridor} tier {tier}"))
        })?;
        schedule.fee_for(amount).ok_or_else(|| {
            QuoteError::ProviderUnavailable(format!(
                "fee overflow for corridor {corridor} tier {tier}"
            ))
        })
    }
}

/// In-memory rate & fee provider with atomic refresh.
///
/// Holds `Arc<RwLock<Arc<RateFeeTables>>>`: `snapshot` clones the inner
/// `Arc` under the read lock, so an in-flight quote keeps its tables alive
/// while `publish` swaps in a new version for subsequent quotes.
#[derive(Clone)]
pub struct InMemoryRateFeeProvider {
    tables: Arc<RwLock<Arc<RateFeeTables>>>,
}

impl InMemoryRateFeeProvider {
    pub fn new(tables: RateFeeTables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Arc::new(tables))),
        }
    }

    /// Swaps in a refreshed table set. Quotes that already took a snapshot
    /// are unaffected.
    pub async fn publish(&self, tables: RateFeeTables) {
        let mut guard = self.tables.write().await;
        *guard = Arc::new(tables);
        tracing::debug!("rate/fee tables refreshed");
    }
}

#[async_trait]
impl RateFeeProvider for InMemoryRateFeeProvider {
    async fn snapshot(&self) -> Result<Arc<dyn RateFeeSnapshot>> {
        let guard = self.tables.read().await;
        Ok(guard.clone())
    }
}

/// In-memory corridor table source, versioned the same way as the provider.
#[derive(Clone)]
pub struct InMemoryCorridorSource {
    table: Arc<RwLock<Arc<CorridorTable>>>,
}

impl InMemoryCorridorSource {
    pub fn new(table: CorridorTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    pub async fn publish(&self, table: CorridorTable) {
        let mut guard = self.table.write().await;
        *guard = Arc::new(table);
        tracing::debug!("corridor table refreshed");
    }
}

#[async_trait]
impl CorridorSource for InMemoryCorridorSource {
    async fn snapshot(&self) -> Result<Arc<CorridorTable>> {
        let guard = self.table.read().await;
        Ok(guard.clone())
    }
}
