//! Storage traits for the engine's external collaborators.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{LedgerEntry, PartnerProfile, ShiftRecord};

use super::error::StoreError;

/// Read access to the partner registry.
///
/// Implementations must be `Send + Sync + 'static` to be shared across
/// the axum application state and async task boundaries.
#[async_trait]
pub trait PartnerStore: Send + Sync + 'static {
    /// Enumerates the ids of all known partners.
    ///
    /// A failure here aborts the whole batch, since there is nothing to
    /// iterate.
    async fn list_partner_ids(&self) -> Result<Vec<String>, StoreError>;

    /// Fetches a partner's profile.
    ///
    /// Returns `Ok(None)` when no partner with the given id exists.
    async fn fetch_profile(&self, partner_id: &str)
        -> Result<Option<PartnerProfile>, StoreError>;
}

/// Read access to the attendance system.
#[async_trait]
pub trait ShiftStore: Send + Sync + 'static {
    /// Fetches the attendance record for a partner and date.
    ///
    /// The data source guarantees at most one record per partner per
    /// date; returns `Ok(None)` when no record exists.
    async fn fetch_shift(
        &self,
        partner_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ShiftRecord>, StoreError>;
}

/// Write access to the day-ledger.
#[async_trait]
pub trait LedgerStore: Send + Sync + 'static {
    /// Writes one result record for a partner and date.
    ///
    /// Writes upsert by `(partner_id, date)`: re-running a day replaces
    /// the previous entry instead of appending a duplicate.
    async fn write_entry(&self, entry: LedgerEntry) -> Result<(), StoreError>;
}
