use crate::domain::corridor::{CorridorId, CorridorTable, TierCode};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

/// A consistent, immutable view of rates and fees. The engine pins one
/// snapshot per quote so a single request never mixes pre- and post-refresh
/// rates across its tiers.
pub trait RateFeeSnapshot: Send + Sync {
    /// Exchange rate for a corridor/tier, quoted as destination units per
    /// sending unit. Rates may legitimately differ slightly per tier.
    fn rate(&self, corridor: &CorridorId, tier: TierCode) -> Result<Decimal>;

    /// Fee for sending `amount` on a corridor/tier, in the sending currency.
    fn fee(&self, corridor: &CorridorId, tier: TierCode, amount: Decimal) -> Result<Decimal>;
}

/// Rate & fee collaborator. Implementations are expected to be cache-backed
/// with bounded latency; the engine never fetches per tier.
#[async_trait]
pub trait RateFeeProvider: Send + Sync {
    async fn snapshot(&self) -> Result<Arc<dyn RateFeeSnapshot>>;
}

/// Source of the corridor table, versioned the same way.
#[async_trait]
pub trait CorridorSource: Send + Sync {
    async fn snapshot(&self) -> Result<Arc<CorridorTable>>;
}

pub type RateFeeProviderBox = Box<dyn RateFeeProvider>;
pub type CorridorSourceBox = Box<dyn CorridorSource>;
