use serde::{Deserialize, Serialize};

use stockshift_core::{Entity, ShopId};

/// A store location. Shops are configured at setup and immutable for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    /// Position on a single reference axis (km). Missing means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Shop {
    pub fn new(id: ShopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            distance: None,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn distance_or_zero(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }
}

impl Entity for Shop {
    type Id = ShopId;

    fn id(&self) -> &ShopId {
        &self.id
    }
}

pub fn find_shop(shops: &[Shop], id: ShopId) -> Option<&Shop> {
    shops.iter().find(|s| s.id == id)
}

/// Display name of a shop; an unknown id resolves to an empty placeholder.
pub fn shop_name(shops: &[Shop], id: ShopId) -> &str {
    find_shop(shops, id).map(|s| s.name.as_str()).unwrap_or("")
}

/// Reference distance of a shop; unknown shops and shops without a distance sit at 0.
pub fn shop_distance(shops: &[Shop], id: ShopId) -> f64 {
    find_shop(shops, id).map(Shop::distance_or_zero).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_shop_resolves_to_placeholder() {
        let shops = vec![Shop::new(ShopId::new(1), "Downtown")];
        assert_eq!(shop_name(&shops, ShopId::new(1)), "Downtown");
        assert_eq!(shop_name(&shops, ShopId::new(99)), "");
        assert_eq!(shop_distance(&shops, ShopId::new(99)), 0.0);
    }

    #[test]
    fn missing_distance_is_zero() {
        let shop = Shop::new(ShopId::new(2), "Mall");
        assert_eq!(shop.distance_or_zero(), 0.0);
        assert_eq!(shop.with_distance(4.5).distance_or_zero(), 4.5);
    }

    #[test]
    fn deserializes_without_distance() {
        let shop: Shop = serde_json::from_str(r#"{"id":3,"name":"Airport"}"#).unwrap();
        assert_eq!(shop, Shop::new(ShopId::new(3), "Airport"));
    }
}
