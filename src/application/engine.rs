use crate::application::{pricer, validator};
use crate::domain::ports::{CorridorSourceBox, RateFeeProviderBox};
use crate::domain::quote::{QuoteRequest, QuoteResult};
use crate::error::Result;

/// The main entry point for quoting.
///
/// `QuoteEngine` owns the reference-data collaborators and computes quotes
/// as pure functions over an immutable snapshot of them. It holds no mutable
/// state of its own, so any number of quotes may run concurrently.
pub struct QuoteEngine {
    corridors: CorridorSourceBox,
    provider: RateFeeProviderBox,
}

impl QuoteEngine {
    pub fn new(corridors: CorridorSourceBox, provider: RateFeeProviderBox) -> Self {
        Self { corridors, provider }
    }

    /// Computes a quote for the request.
    ///
    /// Pins one corridor snapshot and one rate/fee snapshot up front, then
    /// resolves the corridor, validates the amount, and prices each tier in
    /// the corridor's declared order. Options come back in that same order;
    /// they are never re-sorted by price or availability. A resolve or
    /// validation failure aborts with the typed error and no partial list.
    pub async fn quote(&self, request: QuoteRequest) -> Result<QuoteResult> {
        let corridors = self.corridors.snapshot().await?;
        let rates = self.provider.snapshot().await?;

        let corridor = corridors.resolve(&request.corridor_id())?;
        let validated = validator::validate(&request, corridor, rates.as_ref())?;

        let mut options = Vec::with_capacity(corridor.tiers().len());
        for terms in corridor.tiers() {
            options.push(pricer::price(&validated, corridor, terms, rates.as_ref())?);
        }

        tracing::debug!(
            corridor = %corridor.id,
            sending = %validated.sending,
            options = options.len(),
            "quote assembled"
        );

        Ok(QuoteResult { request, options })
    }
}
