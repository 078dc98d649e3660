//! In-memory fixture store.
//!
//! Implements all three storage traits over tokio `RwLock`-guarded maps.
//! Used as the collaborator stand-in for the binary, integration tests,
//! and benches; seedable from a JSON fixture file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{LedgerEntry, PartnerProfile, ShiftRecord};

use super::error::StoreError;
use super::traits::{LedgerStore, PartnerStore, ShiftStore};

/// One attendance record in a seed fixture, tied to its partner.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSeed {
    /// The partner the record belongs to.
    pub partner_id: String,
    /// The attendance record itself.
    #[serde(flatten)]
    pub record: ShiftRecord,
}

/// JSON seed fixture: partners plus their attendance records.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSeed {
    /// Partner profiles to register.
    pub partners: Vec<PartnerProfile>,
    /// Attendance records to register.
    #[serde(default)]
    pub attendance: Vec<AttendanceSeed>,
}

#[derive(Default)]
struct Inner {
    partners: BTreeMap<String, PartnerProfile>,
    shifts: HashMap<(String, NaiveDate), ShiftRecord>,
    ledger: HashMap<(String, NaiveDate), LedgerEntry>,
}

/// In-memory implementation of all three storage traits.
///
/// Cheap to clone; clones share the same underlying maps. Partner
/// enumeration is ordered by id so batch runs are deterministic.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from a JSON seed fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file is missing
    /// and [`EngineError::ConfigParseError`] when it is not valid seed
    /// JSON.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let seed: StoreSeed =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a store populated from an in-memory seed.
    pub fn from_seed(seed: StoreSeed) -> Self {
        let mut inner = Inner::default();
        for partner in seed.partners {
            inner.partners.insert(partner.id.clone(), partner);
        }
        for attendance in seed.attendance {
            inner
                .shifts
                .insert((attendance.partner_id, attendance.record.date), attendance.record);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Registers a partner profile.
    pub async fn insert_partner(&self, partner: PartnerProfile) {
        let mut inner = self.inner.write().await;
        inner.partners.insert(partner.id.clone(), partner);
    }

    /// Registers an attendance record for a partner.
    pub async fn insert_shift(&self, partner_id: &str, record: ShiftRecord) {
        let mut inner = self.inner.write().await;
        inner.shifts.insert((partner_id.to_string(), record.date), record);
    }

    /// Returns the ledger entry for a partner and date, if one was written.
    pub async fn ledger_entry(&self, partner_id: &str, date: NaiveDate) -> Option<LedgerEntry> {
        let inner = self.inner.read().await;
        inner.ledger.get(&(partner_id.to_string(), date)).cloned()
    }

    /// Returns the number of ledger entries currently held.
    pub async fn ledger_len(&self) -> usize {
        self.inner.read().await.ledger.len()
    }
}

#[async_trait]
impl PartnerStore for InMemoryStore {
    async fn list_partner_ids(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.partners.keys().cloned().collect())
    }

    async fn fetch_profile(
        &self,
        partner_id: &str,
    ) -> Result<Option<PartnerProfile>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.partners.get(partner_id).cloned())
    }
}

#[async_trait]
impl ShiftStore for InMemoryStore {
    async fn fetch_shift(
        &self,
        partner_id: &str,
        date: NaiveDate,
    ) -> Result<Option<ShiftRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.shifts.get(&(partner_id.to_string(), date)).cloned())
    }
}

#[async_trait]
impl LedgerStore for InMemoryStore {
    async fn write_entry(&self, entry: LedgerEntry) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .ledger
            .insert((entry.partner_id.clone(), entry.date), entry);
        Ok(())
    }
}
