use chrono::{DateTime, Utc};
use serde::Serialize;

use stockshift_core::{DomainError, DomainResult, TransferId, ensure_unique_ids, next_id};

use crate::draft::TransferDraft;
use crate::request::{TransferRequest, TransferStatus};

/// Ledger of user-filed transfer requests.
///
/// Independent of the recommendation engine: suggestions only land here when
/// a user files them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferLedger {
    requests: Vec<TransferRequest>,
}

impl TransferLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from stored requests.
    ///
    /// Ids must be unique and every request must satisfy the invariants
    /// `create` and the status transitions maintain.
    pub fn from_requests(requests: Vec<TransferRequest>) -> DomainResult<Self> {
        ensure_unique_ids(&requests)?;
        for request in &requests {
            request.validate()?;
        }
        Ok(Self { requests })
    }

    pub fn get(&self, id: TransferId) -> Option<&TransferRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// File a new pending request; returns its id.
    pub fn create(
        &mut self,
        draft: TransferDraft,
        requested_at: DateTime<Utc>,
    ) -> DomainResult<TransferId> {
        let id = next_id(&self.requests)?;
        let request = draft.into_request(id, requested_at)?;

        tracing::info!(
            transfer_id = %id,
            product = %request.product,
            from = %request.from_shop_id,
            to = %request.to_shop_id,
            quantity = request.quantity,
            "transfer request created"
        );
        self.requests.push(request);
        Ok(id)
    }

    pub fn approve(&mut self, id: TransferId, decided_at: DateTime<Utc>) -> DomainResult<()> {
        self.decide(id, TransferStatus::Approved, decided_at)
    }

    pub fn reject(&mut self, id: TransferId, decided_at: DateTime<Utc>) -> DomainResult<()> {
        self.decide(id, TransferStatus::Rejected, decided_at)
    }

    /// All requests in filing order, optionally narrowed to one status.
    pub fn list(&self, status: Option<TransferStatus>) -> Vec<&TransferRequest> {
        self.requests
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .collect()
    }

    pub fn pending(&self) -> Vec<&TransferRequest> {
        self.list(Some(TransferStatus::Pending))
    }

    /// Requests that have been approved or rejected.
    pub fn history(&self) -> Vec<&TransferRequest> {
        self.requests
            .iter()
            .filter(|r| r.status.is_terminal())
            .collect()
    }

    fn decide(
        &mut self,
        id: TransferId,
        to: TransferStatus,
        decided_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::not_found(format!("transfer request {id}")))?;

        if request.status != TransferStatus::Pending {
            return Err(DomainError::invalid_transition(format!(
                "transfer request {id} is already {}",
                request.status
            )));
        }

        request.status = to;
        request.decided_at = Some(decided_at);
        tracing::info!(transfer_id = %id, status = %to, "transfer request decided");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockshift_core::{ShopId, Urgency};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    fn draft(quantity: u32) -> TransferDraft {
        TransferDraft::new("Milk", ShopId::new(1), ShopId::new(2), quantity)
            .distance(3)
            .urgency(Urgency::High)
    }

    #[test]
    fn create_assigns_ids_and_pending_status() {
        let mut ledger = TransferLedger::new();
        let a = ledger.create(draft(5), at(0)).unwrap();
        let b = ledger.create(draft(7), at(1)).unwrap();

        assert_eq!(a, TransferId::new(1));
        assert_eq!(b, TransferId::new(2));
        assert_eq!(ledger.get(b).unwrap().status, TransferStatus::Pending);
        assert_eq!(ledger.get(b).unwrap().requested_at, at(1));
    }

    #[test]
    fn create_with_missing_quantity_is_rejected_without_mutation() {
        let mut ledger = TransferLedger::new();
        let mut d = draft(5);
        d.quantity = None;

        let err = ledger.create(d, at(0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(ledger.list(None).is_empty());
    }

    #[test]
    fn approve_is_terminal() {
        let mut ledger = TransferLedger::new();
        let id = ledger.create(draft(5), at(0)).unwrap();

        ledger.approve(id, at(10)).unwrap();
        let request = ledger.get(id).unwrap();
        assert_eq!(request.status, TransferStatus::Approved);
        assert_eq!(request.decided_at, Some(at(10)));

        let err = ledger.approve(id, at(20)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
        assert_eq!(ledger.get(id).unwrap().decided_at, Some(at(10)));
    }

    #[test]
    fn reject_then_approve_fails() {
        let mut ledger = TransferLedger::new();
        let id = ledger.create(draft(5), at(0)).unwrap();

        ledger.reject(id, at(5)).unwrap();
        let err = ledger.approve(id, at(6)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
        assert_eq!(ledger.get(id).unwrap().status, TransferStatus::Rejected);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut ledger = TransferLedger::new();
        let err = ledger.reject(TransferId::new(9), at(0)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn list_filters_by_status() {
        let mut ledger = TransferLedger::new();
        let a = ledger.create(draft(1), at(0)).unwrap();
        let b = ledger.create(draft(2), at(0)).unwrap();
        let _c = ledger.create(draft(3), at(0)).unwrap();
        ledger.approve(a, at(1)).unwrap();
        ledger.reject(b, at(1)).unwrap();

        assert_eq!(ledger.list(None).len(), 3);
        assert_eq!(ledger.list(Some(TransferStatus::Approved))[0].id, a);
        assert_eq!(ledger.pending().len(), 1);
        let history: Vec<TransferId> = ledger.history().iter().map(|r| r.id).collect();
        assert_eq!(history, vec![a, b]);
    }

    #[test]
    fn from_requests_rejects_duplicates_and_continues_numbering() {
        let mut seed = TransferLedger::new();
        seed.create(draft(1), at(0)).unwrap();
        let stored = seed.list(None)[0].clone();

        let err = TransferLedger::from_requests(vec![stored.clone(), stored.clone()]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let mut ledger = TransferLedger::from_requests(vec![stored]).unwrap();
        assert_eq!(ledger.create(draft(2), at(1)).unwrap(), TransferId::new(2));
    }

    #[test]
    fn from_requests_rejects_requests_breaking_invariants() {
        let mut seed = TransferLedger::new();
        let id = seed.create(draft(5), at(0)).unwrap();
        seed.approve(id, at(1)).unwrap();
        let approved = seed.get(id).unwrap().clone();

        let mut zero_quantity = approved.clone();
        zero_quantity.quantity = 0;

        let mut same_shop = approved.clone();
        same_shop.to_shop_id = same_shop.from_shop_id;

        let mut undecided = approved.clone();
        undecided.decided_at = None;

        let mut decided_pending = approved.clone();
        decided_pending.status = TransferStatus::Pending;

        let mut negative_distance = approved.clone();
        negative_distance.distance = -2.0;

        for broken in [zero_quantity, same_shop, undecided, decided_pending, negative_distance] {
            let err = TransferLedger::from_requests(vec![broken.clone()]).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{broken:?}");
        }

        let ledger = TransferLedger::from_requests(vec![approved]).unwrap();
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn create_after_highest_possible_id_is_rejected() {
        let stored = draft(5)
            .into_request(TransferId::new(u64::MAX), at(0))
            .unwrap();
        let mut ledger = TransferLedger::from_requests(vec![stored]).unwrap();

        let err = ledger.create(draft(1), at(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(ledger.list(None).len(), 1);
    }

    #[test]
    fn requests_serialize_with_frontend_names() {
        let mut ledger = TransferLedger::new();
        let id = ledger.create(draft(5), at(0)).unwrap();
        let json = serde_json::to_value(ledger.get(id).unwrap()).unwrap();
        assert_eq!(json["fromShopId"], 1);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["urgency"], "high");
        assert!(json.get("decidedAt").is_none());
    }
}
