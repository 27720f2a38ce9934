use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::bid::{Bid, NewBid};
use crate::domain::tender::{NewTender, Tender, TenderPatch};
use crate::domain::types::{PersonName, TenderId};

pub mod bid;
pub mod errors;
pub mod fixtures;
pub mod tender;

pub use errors::{RepositoryError, RepositoryResult};

/// Simulated round-trip delays of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub read: Duration,
    pub write: Duration,
}

impl LatencyConfig {
    /// No artificial delay. Used by tests.
    pub const fn none() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(500),
            write: Duration::from_millis(500),
        }
    }
}

/// Collections owned by the store together with their id sequences.
#[derive(Debug)]
struct StoreState {
    tenders: Vec<Tender>,
    bids: Vec<Bid>,
    next_tender_sequence: u32,
    next_bid_sequence: u32,
}

impl StoreState {
    fn new(tenders: Vec<Tender>, bids: Vec<Bid>) -> Self {
        // Sequences only move forward so ids stay unique after deletions.
        let next_tender_sequence = tenders
            .iter()
            .filter_map(|t| t.id.sequence())
            .max()
            .unwrap_or(0)
            .max(tenders.len() as u32)
            + 1;
        let next_bid_sequence = bids
            .iter()
            .chain(tenders.iter().flat_map(|t| t.bids.iter()))
            .filter_map(|b| b.id.sequence())
            .max()
            .unwrap_or(0)
            .max(bids.len() as u32)
            + 1;

        Self {
            tenders,
            bids,
            next_tender_sequence,
            next_bid_sequence,
        }
    }
}

/// In-memory tender store standing in for a real backend.
///
/// The state lives behind an `Arc`, so clones share the same collections and
/// the repository can be handed to every handler.
#[derive(Clone)]
pub struct InMemoryRepository {
    state: Arc<RwLock<StoreState>>,
    latency: LatencyConfig,
}

impl InMemoryRepository {
    /// Create an empty store.
    pub fn new(latency: LatencyConfig) -> Self {
        Self::with_data(Vec::new(), Vec::new(), latency)
    }

    /// Create a store holding the supplied collections.
    pub fn with_data(tenders: Vec<Tender>, bids: Vec<Bid>, latency: LatencyConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::new(tenders, bids))),
            latency,
        }
    }

    /// Create a store populated with the demo tenders and bids.
    pub fn seeded(latency: LatencyConfig) -> RepositoryResult<Self> {
        let (tenders, bids) = fixtures::seed()?;
        Ok(Self::with_data(tenders, bids, latency))
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, StoreState>> {
        Ok(self.state.read()?)
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, StoreState>> {
        Ok(self.state.write()?)
    }
}

/// Query parameters used when listing tenders.
///
/// `None` disables the corresponding filter.
#[derive(Debug, Clone, Default)]
pub struct TenderListQuery {
    /// Case-insensitive substring matched against title, id and description.
    pub search: Option<String>,
    /// Exact status name, e.g. `active`.
    pub status: Option<String>,
    /// Category slug, e.g. `it-services`.
    pub category: Option<String>,
}

impl TenderListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Artificial delays applied by the service layer before touching the store.
pub trait StoreLatency {
    fn read_latency(&self) -> Duration;
    fn write_latency(&self) -> Duration;
}

/// Read-only operations for tender entities.
pub trait TenderReader {
    /// List tenders matching the supplied query, returning the total count.
    fn list_tenders(&self, query: TenderListQuery) -> RepositoryResult<(usize, Vec<Tender>)>;
    /// Retrieve a tender by its identifier.
    fn get_tender_by_id(&self, id: &TenderId) -> RepositoryResult<Option<Tender>>;
}

/// Write operations for tender entities.
pub trait TenderWriter {
    /// Assign an id to `tender`, append it and return the stored record.
    fn create_tender(
        &self,
        tender: NewTender,
        created_by: PersonName,
        today: NaiveDate,
    ) -> RepositoryResult<Tender>;
    /// Merge `patch` into an existing tender. Returns `None` when absent.
    fn update_tender(
        &self,
        id: &TenderId,
        patch: TenderPatch,
        today: NaiveDate,
    ) -> RepositoryResult<Option<Tender>>;
    /// Delete a tender, returning the number of removed records.
    fn delete_tender(&self, id: &TenderId) -> RepositoryResult<usize>;
}

/// Read-only operations for bid entities.
pub trait BidReader {
    /// List every bid in submission order.
    fn list_bids(&self) -> RepositoryResult<Vec<Bid>>;
}

/// Write operations for bid entities.
pub trait BidWriter {
    /// Record a pending bid on both the tender and the global collection.
    /// Returns `None` when the tender does not exist.
    fn submit_bid(
        &self,
        tender_id: &TenderId,
        bid: NewBid,
        today: NaiveDate,
    ) -> RepositoryResult<Option<Bid>>;
}

impl StoreLatency for InMemoryRepository {
    fn read_latency(&self) -> Duration {
        self.latency.read
    }

    fn write_latency(&self) -> Duration {
        self.latency.write
    }
}
