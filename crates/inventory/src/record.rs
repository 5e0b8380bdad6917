use serde::{Deserialize, Serialize};

use stockshift_core::{DomainError, Entity, RecordId, ShopId};

/// Shelf life assumed for products without one (days).
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 365;

/// Share of predicted demand used as the critical threshold when none is given.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.2;

/// Stock level of one product in one shop.
///
/// At most one record per `(shop_id, product)` is expected; duplicates are
/// kept as-is and never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: RecordId,
    pub shop_id: ShopId,
    pub product: String,
    pub current: u32,
    pub predicted: u32,
    pub threshold: u32,
    #[serde(default)]
    pub perishable: bool,
    #[serde(default = "default_shelf_life")]
    pub shelf_life: u32,
}

fn default_shelf_life() -> u32 {
    DEFAULT_SHELF_LIFE_DAYS
}

/// `floor(predicted * 0.2)`.
pub fn default_threshold(predicted: u32) -> u32 {
    (f64::from(predicted) * DEFAULT_THRESHOLD_RATIO).floor() as u32
}

impl InventoryRecord {
    /// `current - predicted`; positive means surplus.
    pub fn surplus(&self) -> i64 {
        i64::from(self.current) - i64::from(self.predicted)
    }

    /// `predicted - current`; positive means deficit.
    pub fn deficit(&self) -> i64 {
        -self.surplus()
    }

    pub fn status(&self) -> StockStatus {
        derive_status(self)
    }

    /// Check the invariants a stored record must hold: a product name and a
    /// positive shelf life.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.product.trim().is_empty() {
            return Err(DomainError::invalid_input(format!(
                "inventory record {}: product is required",
                self.id
            )));
        }
        if self.shelf_life == 0 {
            return Err(DomainError::invalid_input(format!(
                "inventory record {}: shelf life must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for InventoryRecord {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Display status of a record. Never stored; recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Normal,
    Critical,
    Overstock,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::Normal => "normal",
            StockStatus::Critical => "critical",
            StockStatus::Overstock => "overstock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(StockStatus::Normal),
            "critical" => Ok(StockStatus::Critical),
            "overstock" => Ok(StockStatus::Overstock),
            other => Err(DomainError::invalid_input(format!(
                "unknown stock status: {other:?}"
            ))),
        }
    }
}

/// Overstock wins over critical: a record above predicted demand is never
/// reported critical, even with a threshold above the prediction.
pub fn derive_status(record: &InventoryRecord) -> StockStatus {
    if record.current > record.predicted {
        StockStatus::Overstock
    } else if record.current < record.threshold {
        StockStatus::Critical
    } else {
        StockStatus::Normal
    }
}
