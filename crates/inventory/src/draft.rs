use serde::{Deserialize, Serialize};

use stockshift_core::input::{optional_count, required, required_count};
use stockshift_core::{DomainResult, RecordId, ShopId};

use crate::record::{DEFAULT_SHELF_LIFE_DAYS, InventoryRecord, default_threshold};

/// Raw "add product" form values, as typed by the user.
///
/// `product`, `current` and `predicted` are required. `threshold` falls back to
/// a fifth of predicted demand and `shelf_life` to a year when missing or not
/// numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryDraft {
    pub product: Option<String>,
    pub current: Option<String>,
    pub predicted: Option<String>,
    pub threshold: Option<String>,
    pub perishable: bool,
    pub shelf_life: Option<String>,
}

impl InventoryDraft {
    pub fn new(
        product: impl Into<String>,
        current: impl ToString,
        predicted: impl ToString,
    ) -> Self {
        Self {
            product: Some(product.into()),
            current: Some(current.to_string()),
            predicted: Some(predicted.to_string()),
            ..Self::default()
        }
    }

    pub fn threshold(mut self, threshold: impl ToString) -> Self {
        self.threshold = Some(threshold.to_string());
        self
    }

    pub fn perishable(mut self, shelf_life: impl ToString) -> Self {
        self.perishable = true;
        self.shelf_life = Some(shelf_life.to_string());
        self
    }

    /// Validate the draft and build the record it describes.
    pub fn into_record(self, id: RecordId, shop_id: ShopId) -> DomainResult<InventoryRecord> {
        let product = required("product", self.product.as_deref())?.to_string();
        let current = required_count("current", self.current.as_deref())?;
        let predicted = required_count("predicted", self.predicted.as_deref())?;

        let threshold = optional_count(self.threshold.as_deref())
            .unwrap_or_else(|| default_threshold(predicted));
        let shelf_life = optional_count(self.shelf_life.as_deref())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_SHELF_LIFE_DAYS);

        Ok(InventoryRecord {
            id,
            shop_id,
            product,
            current,
            predicted,
            threshold,
            perishable: self.perishable,
            shelf_life,
        })
    }
}
