//! Storage seam for the Daily Wage Engine.
//!
//! The partner registry, the attendance system, and the day-ledger are
//! external collaborators. This module defines the async traits the
//! engine speaks to them through, the storage error type, and an
//! in-memory fixture implementation used by the binary, tests, and
//! benches.

mod error;
mod memory;
mod traits;

pub use error::StoreError;
pub use memory::{AttendanceSeed, InMemoryStore, StoreSeed};
pub use traits::{LedgerStore, PartnerStore, ShiftStore};
