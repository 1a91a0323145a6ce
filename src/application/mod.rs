//! Application layer containing the quoting orchestration.
//!
//! This module defines the `QuoteEngine`, the primary entry point for
//! computing quotes. Each quote pins one reference-data snapshot and runs as
//! a pure function over it: resolve corridor, validate the amount, price
//! every tier, assemble the result.

pub mod engine;
pub mod pricer;
pub mod validator;
