//! Application state for the Daily Wage Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::batch::{BatchOptions, BatchRunner};
use crate::calculation::WageEngine;
use crate::config::WageRules;
use crate::store::{LedgerStore, PartnerStore, ShiftStore};

/// Shared application state.
///
/// Holds the wage engine and the batch runner wired to the configured
/// stores; both are shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<WageEngine>,
    runner: Arc<BatchRunner>,
}

impl AppState {
    /// Creates application state from a rule table and the three stores.
    pub fn new(
        rules: WageRules,
        partners: Arc<dyn PartnerStore>,
        shifts: Arc<dyn ShiftStore>,
        ledger: Arc<dyn LedgerStore>,
        options: BatchOptions,
    ) -> Self {
        let engine = Arc::new(WageEngine::new(rules.clone()));
        let runner = Arc::new(BatchRunner::new(
            WageEngine::new(rules),
            partners,
            shifts,
            ledger,
            options,
        ));
        Self { engine, runner }
    }

    /// Returns the wage engine.
    pub fn engine(&self) -> &WageEngine {
        &self.engine
    }

    /// Returns the batch runner.
    pub fn runner(&self) -> &BatchRunner {
        &self.runner
    }
}
