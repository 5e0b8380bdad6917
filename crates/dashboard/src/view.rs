//! Serializable views handed to the presentation layer.

use serde::Serialize;

use stockshift_core::{RecordId, ShopId};
use stockshift_inventory::{
    DashboardSummary, InventoryStore, ShopMetrics, StockShare, StockStatus, shop_name,
};
use stockshift_recommend::TransferSuggestion;
use stockshift_transfers::{TransferLedger, TransferRequest};

/// A row of the stock status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRow {
    pub record_id: RecordId,
    pub product: String,
    pub shop_id: ShopId,
    pub shop_name: String,
    pub current: u32,
    pub predicted: u32,
    pub threshold: u32,
    pub status: StockStatus,
}

/// A suggestion with both shop names resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRow {
    #[serde(flatten)]
    pub suggestion: TransferSuggestion,
    pub from_shop_name: String,
    pub to_shop_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub summary: DashboardSummary,
    pub stock: Vec<StatusRow>,
    pub shop_metrics: Vec<ShopMetrics>,
    pub distribution: Vec<StockShare>,
    pub suggestions: Vec<SuggestionRow>,
    pub pending_transfers: Vec<TransferRequest>,
    pub transfer_history: Vec<TransferRequest>,
}

impl DashboardReport {
    pub fn build(
        store: &InventoryStore,
        ledger: &TransferLedger,
        suggestions: Vec<TransferSuggestion>,
    ) -> Self {
        let shops = store.shops();

        let stock = store
            .records()
            .iter()
            .map(|r| StatusRow {
                record_id: r.id,
                product: r.product.clone(),
                shop_id: r.shop_id,
                shop_name: shop_name(shops, r.shop_id).to_string(),
                current: r.current,
                predicted: r.predicted,
                threshold: r.threshold,
                status: store.derive_status(r),
            })
            .collect();

        let suggestions = suggestions
            .into_iter()
            .map(|s| SuggestionRow {
                from_shop_name: shop_name(shops, s.from_shop_id).to_string(),
                to_shop_name: shop_name(shops, s.to_shop_id).to_string(),
                suggestion: s,
            })
            .collect();

        Self {
            summary: store.summary(),
            stock,
            shop_metrics: store.shop_metrics(),
            distribution: store.stock_distribution(),
            suggestions,
            pending_transfers: ledger.pending().into_iter().cloned().collect(),
            transfer_history: ledger.history().into_iter().cloned().collect(),
        }
    }
}
