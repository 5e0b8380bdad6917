use serde::{Deserialize, Serialize};

use stockshift_core::{RecordId, ShopId, Urgency};

/// Why a transfer was proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// The destination is short by more than the critical deficit.
    CriticalShortage,
    /// Smaller rebalancing move.
    OptimizeStock,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::CriticalShortage => "critical-shortage",
            Reason::OptimizeStock => "optimize-stock",
        }
    }
}

impl core::fmt::Display for Reason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine output: move `quantity` units of `product` between two shops.
///
/// Ephemeral; suggestions are recomputed on every scan and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSuggestion {
    pub product: String,
    pub from_shop_id: ShopId,
    pub to_shop_id: ShopId,
    /// Surplus record the stock would come from.
    pub from_record_id: RecordId,
    /// Record whose deficit the stock would cover.
    pub to_record_id: RecordId,
    pub quantity: u32,
    pub urgency: Urgency,
    pub distance: f64,
    pub reason: Reason,
}
