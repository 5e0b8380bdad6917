use stockshift_core::Urgency;
use stockshift_inventory::{InventoryRecord, shop_distance};

use crate::snapshot::InventorySnapshot;
use crate::suggestion::{Reason, TransferSuggestion};

/// A source must exceed its predicted demand by more than this many units.
pub const DEFAULT_MIN_SURPLUS: u32 = 10;

/// Destinations short by more than this many units are a critical shortage.
pub const DEFAULT_CRITICAL_DEFICIT: u32 = 10;

/// Perishable sources with a shelf life below this many days are urgent.
pub const DEFAULT_URGENT_SHELF_LIFE_DAYS: u32 = 3;

/// Display cap on the number of suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Anything that can turn an inventory snapshot into transfer suggestions.
pub trait Recommender {
    /// Must be pure: the same snapshot always yields the same suggestions.
    fn recommend(&self, snapshot: InventorySnapshot<'_>) -> Vec<TransferSuggestion>;
}

/// Surplus/deficit pairing engine.
///
/// Model:
/// - Every record holding more than `min_surplus` units above its prediction
///   is a source.
/// - Every record of the same product in another shop that sits below its
///   prediction is a destination for that source.
/// - Each pair yields one suggestion of `min(surplus, deficit)` units, in scan
///   order (sources outer, destinations inner), cut to `max_suggestions`.
///
/// Pairs are evaluated independently against the source's full surplus, so
/// the suggestions for one source may add up to more than it can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRecommender {
    min_surplus: u32,
    critical_deficit: u32,
    urgent_shelf_life_days: u32,
    max_suggestions: usize,
}

impl Default for TransferRecommender {
    fn default() -> Self {
        Self {
            min_surplus: DEFAULT_MIN_SURPLUS,
            critical_deficit: DEFAULT_CRITICAL_DEFICIT,
            urgent_shelf_life_days: DEFAULT_URGENT_SHELF_LIFE_DAYS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl TransferRecommender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_surplus(mut self, min_surplus: u32) -> Self {
        self.min_surplus = min_surplus;
        self
    }

    pub fn with_critical_deficit(mut self, critical_deficit: u32) -> Self {
        self.critical_deficit = critical_deficit;
        self
    }

    pub fn with_urgent_shelf_life(mut self, days: u32) -> Self {
        self.urgent_shelf_life_days = days;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    fn urgency_of(&self, source: &InventoryRecord) -> Urgency {
        if source.perishable && source.shelf_life < self.urgent_shelf_life_days {
            Urgency::High
        } else {
            Urgency::Medium
        }
    }

    fn reason_for(&self, deficit: i64) -> Reason {
        if deficit > i64::from(self.critical_deficit) {
            Reason::CriticalShortage
        } else {
            Reason::OptimizeStock
        }
    }
}

impl Recommender for TransferRecommender {
    fn recommend(&self, snapshot: InventorySnapshot<'_>) -> Vec<TransferSuggestion> {
        let mut suggestions = Vec::new();

        for source in snapshot.records {
            let surplus = source.surplus();
            if surplus <= i64::from(self.min_surplus) {
                continue;
            }

            let needy = snapshot.records.iter().filter(|dest| {
                dest.product == source.product
                    && dest.shop_id != source.shop_id
                    && dest.current < dest.predicted
            });

            for dest in needy {
                let deficit = dest.deficit();
                // Both operands are bounded by a u32 stock count.
                let quantity = surplus.min(deficit) as u32;
                let distance = (shop_distance(snapshot.shops, source.shop_id)
                    - shop_distance(snapshot.shops, dest.shop_id))
                .abs();

                suggestions.push(TransferSuggestion {
                    product: source.product.clone(),
                    from_shop_id: source.shop_id,
                    to_shop_id: dest.shop_id,
                    from_record_id: source.id,
                    to_record_id: dest.id,
                    quantity,
                    urgency: self.urgency_of(source),
                    distance,
                    reason: self.reason_for(deficit),
                });
            }
        }

        let candidates = suggestions.len();
        suggestions.truncate(self.max_suggestions);
        tracing::debug!(
            records = snapshot.records.len(),
            candidates,
            emitted = suggestions.len(),
            "transfer recommendation scan finished"
        );
        suggestions
    }
}

/// Run the default engine over a shop list and inventory.
pub fn recommend_transfers(
    shops: &[stockshift_inventory::Shop],
    records: &[InventoryRecord],
) -> Vec<TransferSuggestion> {
    TransferRecommender::default().recommend(InventorySnapshot::new(shops, records))
}
