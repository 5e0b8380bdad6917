use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockshift_core::{DomainError, DomainResult, Entity, ShopId, TransferId, Urgency};

/// Transfer request status lifecycle.
///
/// `Pending` moves to `Approved` or `Rejected` exactly once; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Pending,
    Approved,
    Rejected,
}

impl TransferStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TransferStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Approved => "approved",
            TransferStatus::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-filed request to move stock between two shops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub id: TransferId,
    pub product: String,
    pub from_shop_id: ShopId,
    pub to_shop_id: ShopId,
    pub quantity: u32,
    /// Kilometres, as entered by the user.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub urgency: Urgency,
    pub status: TransferStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl TransferRequest {
    /// Check the invariants a stored request must hold, as `TransferDraft`
    /// enforces them on creation. A decision time is present exactly when the
    /// status is terminal.
    pub fn validate(&self) -> DomainResult<()> {
        let invalid = |what: &str| {
            Err(DomainError::invalid_input(format!(
                "transfer request {}: {what}",
                self.id
            )))
        };

        if self.product.trim().is_empty() {
            return invalid("product is required");
        }
        if self.quantity == 0 {
            return invalid("quantity must be positive");
        }
        if self.from_shop_id == self.to_shop_id {
            return invalid("from and to must be different shops");
        }
        if !(self.distance.is_finite() && self.distance >= 0.0) {
            return invalid("distance must be a non-negative number");
        }
        if self.decided_at.is_some() != self.status.is_terminal() {
            return invalid("decision time does not match status");
        }
        Ok(())
    }
}

impl Entity for TransferRequest {
    type Id = TransferId;

    fn id(&self) -> &TransferId {
        &self.id
    }
}
