//! The daily wage batch runner.
//!
//! Partners are processed sequentially: two lookups, one evaluation, one
//! ledger write per partner. Each partner's failure is isolated and
//! logged; only a failure to enumerate the partners aborts the run.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::WageEngine;
use crate::error::{EngineError, EngineResult};
use crate::models::{LedgerEntry, WageResult};
use crate::store::{LedgerStore, PartnerStore, ShiftStore, StoreError};

/// Resilience settings for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum time allowed for each individual lookup or write.
    pub lookup_timeout: Duration,
    /// Overall deadline for the whole run; partners not reached in time
    /// are skipped and reported.
    pub deadline: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(5),
            deadline: Duration::from_secs(600),
        }
    }
}

/// Counts reported by one batch run.
///
/// The four categories are disjoint; their sum is the number of
/// enumerated partners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// The date the batch was run for.
    pub date: NaiveDate,
    /// Partners evaluated with full data and written to the ledger.
    pub processed: usize,
    /// Partners written with the default full-wage result because a
    /// profile or shift record was missing.
    pub defaulted: usize,
    /// Partners whose evaluation or write failed; nothing was written.
    pub failed: usize,
    /// Partners not reached before the overall deadline.
    pub skipped: usize,
}

impl BatchSummary {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            processed: 0,
            defaulted: 0,
            failed: 0,
            skipped: 0,
        }
    }

    /// Returns the total number of partners the run accounted for.
    pub fn total(&self) -> usize {
        self.processed + self.defaulted + self.failed + self.skipped
    }

    /// Returns true when every enumerated partner was written.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }
}

enum PartnerOutcome {
    Evaluated(WageResult),
    Defaulted(WageResult),
}

/// Runs the daily wage batch against the configured stores.
pub struct BatchRunner {
    engine: WageEngine,
    partners: Arc<dyn PartnerStore>,
    shifts: Arc<dyn ShiftStore>,
    ledger: Arc<dyn LedgerStore>,
    options: BatchOptions,
}

impl BatchRunner {
    /// Creates a runner over the given engine and stores.
    pub fn new(
        engine: WageEngine,
        partners: Arc<dyn PartnerStore>,
        shifts: Arc<dyn ShiftStore>,
        ledger: Arc<dyn LedgerStore>,
        options: BatchOptions,
    ) -> Self {
        Self {
            engine,
            partners,
            shifts,
            ledger,
            options,
        }
    }

    /// Processes every known partner for the given date.
    ///
    /// Per-partner failures (anomalous records, lookup timeouts, backend
    /// errors, write failures) are isolated: they are logged, counted in
    /// the summary, and the run proceeds to the next partner.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BatchEnumerationFailed`] when the partner
    /// enumeration itself fails; nothing is written in that case.
    pub async fn run_for_date(&self, today: NaiveDate) -> EngineResult<BatchSummary> {
        let run_id = Uuid::new_v4();
        info!(run_id = %run_id, date = %today, "starting daily wage batch");
        let started = Instant::now();

        let partner_ids = self
            .with_timeout("list_partner_ids", self.partners.list_partner_ids())
            .await
            .map_err(|e| EngineError::BatchEnumerationFailed {
                message: e.to_string(),
            })?;

        let mut summary = BatchSummary::new(today);

        for (index, partner_id) in partner_ids.iter().enumerate() {
            if started.elapsed() >= self.options.deadline {
                summary.skipped = partner_ids.len() - index;
                warn!(
                    run_id = %run_id,
                    skipped = summary.skipped,
                    "batch deadline exceeded, remaining partners skipped"
                );
                break;
            }

            match self.process_partner(partner_id, today).await {
                Ok(PartnerOutcome::Evaluated(result)) => {
                    summary.processed += 1;
                    info!(
                        run_id = %run_id,
                        partner_id = %partner_id,
                        wage = %result.daily_wage,
                        "daily wage written"
                    );
                }
                Ok(PartnerOutcome::Defaulted(result)) => {
                    summary.defaulted += 1;
                    info!(
                        run_id = %run_id,
                        partner_id = %partner_id,
                        wage = %result.daily_wage,
                        "no deduction information available, default wage written"
                    );
                }
                Err(error) => {
                    summary.failed += 1;
                    warn!(
                        run_id = %run_id,
                        partner_id = %partner_id,
                        error = %error,
                        "partner processing failed, continuing batch"
                    );
                }
            }
        }

        info!(
            run_id = %run_id,
            processed = summary.processed,
            defaulted = summary.defaulted,
            failed = summary.failed,
            skipped = summary.skipped,
            "daily wage batch finished"
        );
        Ok(summary)
    }

    async fn process_partner(
        &self,
        partner_id: &str,
        today: NaiveDate,
    ) -> EngineResult<PartnerOutcome> {
        let profile = self
            .with_timeout("fetch_profile", self.partners.fetch_profile(partner_id))
            .await?;
        let shift = self
            .with_timeout("fetch_shift", self.shifts.fetch_shift(partner_id, today))
            .await?;

        let defaulted = profile.is_none() || shift.is_none();
        let result = self
            .engine
            .evaluate_day(profile.as_ref(), shift.as_ref(), today)?;

        let entry = LedgerEntry {
            partner_id: partner_id.to_string(),
            date: today,
            wage: result.daily_wage,
            deductions: result.deductions,
            written_at: Utc::now(),
        };
        self.with_timeout("write_entry", self.ledger.write_entry(entry))
            .await?;

        Ok(if defaulted {
            PartnerOutcome::Defaulted(result)
        } else {
            PartnerOutcome::Evaluated(result)
        })
    }

    async fn with_timeout<T, F>(&self, operation: &str, fut: F) -> EngineResult<T>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.options.lookup_timeout, fut)
            .await
            .map_err(|_| EngineError::LookupTimeout {
                operation: operation.to_string(),
                timeout_ms: self.options.lookup_timeout.as_millis() as u64,
            })?
            .map_err(EngineError::from)
    }
}
