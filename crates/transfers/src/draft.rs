use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockshift_core::input::{optional_distance, required, required_positive};
use stockshift_core::{DomainError, DomainResult, ShopId, TransferId, Urgency};

use crate::request::{TransferRequest, TransferStatus};

/// Raw "create transfer" form values.
///
/// `product`, `from`, `to` and `quantity` are required; `quantity` must be a
/// positive integer. `distance` falls back to 0 and `urgency` to medium.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferDraft {
    pub product: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub quantity: Option<String>,
    pub distance: Option<String>,
    pub urgency: Option<String>,
}

impl TransferDraft {
    pub fn new(product: impl Into<String>, from: ShopId, to: ShopId, quantity: impl ToString) -> Self {
        Self {
            product: Some(product.into()),
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            quantity: Some(quantity.to_string()),
            ..Self::default()
        }
    }

    pub fn distance(mut self, distance: impl ToString) -> Self {
        self.distance = Some(distance.to_string());
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency.to_string());
        self
    }

    /// Validate the draft into a pending request.
    pub fn into_request(
        self,
        id: TransferId,
        requested_at: DateTime<Utc>,
    ) -> DomainResult<TransferRequest> {
        let product = required("product", self.product.as_deref())?.to_string();
        let from_shop_id: ShopId = required("from", self.from.as_deref())?.parse()?;
        let to_shop_id: ShopId = required("to", self.to.as_deref())?.parse()?;
        let quantity = required_positive("quantity", self.quantity.as_deref())?;

        if from_shop_id == to_shop_id {
            return Err(DomainError::invalid_input(
                "from and to must be different shops",
            ));
        }

        let urgency = match self.urgency.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<Urgency>()?,
            _ => Urgency::Medium,
        };

        Ok(TransferRequest {
            id,
            product,
            from_shop_id,
            to_shop_id,
            quantity,
            distance: optional_distance(self.distance.as_deref()).unwrap_or(0.0),
            urgency,
            status: TransferStatus::Pending,
            requested_at,
            decided_at: None,
        })
    }
}
