use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockshift_core::{DomainResult, TransferId};
use stockshift_inventory::{InventoryRecord, InventoryStore, Shop};
use stockshift_recommend::{InventorySnapshot, Recommender, TransferRecommender, TransferSuggestion};
use stockshift_transfers::{TransferDraft, TransferLedger, TransferRequest};

use crate::view::DashboardReport;

/// On-disk snapshot layout: `{ "shops": [...], "inventory": [...], "transfers": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub shops: Vec<Shop>,
    #[serde(default)]
    pub inventory: Vec<InventoryRecord>,
    #[serde(default)]
    pub transfers: Vec<TransferRequest>,
}

/// One dashboard session: the inventory store, the transfer ledger and the
/// engine that scans them.
#[derive(Debug, Clone)]
pub struct Session<R = TransferRecommender> {
    store: InventoryStore,
    ledger: TransferLedger,
    recommender: R,
}

impl Session<TransferRecommender> {
    /// Read and validate a JSON snapshot file.
    pub fn load(path: &Path, recommender: TransferRecommender) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let session = Self::from_json(&raw, recommender)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            shops = session.store.shops().len(),
            records = session.store.records().len(),
            transfers = session.ledger.list(None).len(),
            "snapshot loaded"
        );
        Ok(session)
    }

    pub fn from_json(raw: &str, recommender: TransferRecommender) -> anyhow::Result<Self> {
        let file: SnapshotFile = serde_json::from_str(raw).context("malformed snapshot json")?;
        Ok(Self::from_snapshot(file, recommender)?)
    }
}

impl<R: Recommender> Session<R> {
    pub fn new(store: InventoryStore, ledger: TransferLedger, recommender: R) -> Self {
        Self {
            store,
            ledger,
            recommender,
        }
    }

    pub fn from_snapshot(file: SnapshotFile, recommender: R) -> DomainResult<Self> {
        let store = InventoryStore::from_parts(file.shops, file.inventory)?;
        let ledger = TransferLedger::from_requests(file.transfers)?;
        Ok(Self::new(store, ledger, recommender))
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InventoryStore {
        &mut self.store
    }

    pub fn ledger(&self) -> &TransferLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut TransferLedger {
        &mut self.ledger
    }

    /// Scan the current inventory.
    pub fn recommendations(&self) -> Vec<TransferSuggestion> {
        self.recommender
            .recommend(InventorySnapshot::from(&self.store))
    }

    /// File a pending ledger request mirroring an engine suggestion.
    pub fn request_from_suggestion(
        &mut self,
        suggestion: &TransferSuggestion,
        requested_at: DateTime<Utc>,
    ) -> DomainResult<TransferId> {
        let draft = TransferDraft::new(
            suggestion.product.clone(),
            suggestion.from_shop_id,
            suggestion.to_shop_id,
            suggestion.quantity,
        )
        .distance(suggestion.distance)
        .urgency(suggestion.urgency);
        self.ledger.create(draft, requested_at)
    }

    /// Everything the presentation layer renders, computed in one pass.
    pub fn report(&self) -> DashboardReport {
        DashboardReport::build(&self.store, &self.ledger, self.recommendations())
    }

    pub fn to_snapshot(&self) -> SnapshotFile {
        SnapshotFile {
            shops: self.store.shops().to_vec(),
            inventory: self.store.records().to_vec(),
            transfers: self.ledger.list(None).into_iter().cloned().collect(),
        }
    }
}
