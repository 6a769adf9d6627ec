//! Catalog sort keys.

use crate::catalog::Bike;
use serde::{Deserialize, Serialize};

/// Sort order for filtered catalog results.
///
/// Sorting is stable, so ties keep the filtered (source) order, and the
/// default key leaves the filtered order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep filtered order.
    #[default]
    Default,
    /// Price, low to high.
    PriceLowHigh,
    /// Price, high to low.
    PriceHighLow,
    /// Best mileage first.
    MileageBest,
    /// Brand A-Z.
    BrandAz,
}

impl SortKey {
    /// All keys, in display order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::MileageBest,
        SortKey::BrandAz,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceLowHigh => "price-low",
            SortKey::PriceHighLow => "price-high",
            SortKey::MileageBest => "mileage",
            SortKey::BrandAz => "brand",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(SortKey::Default),
            "price-low" => Some(SortKey::PriceLowHigh),
            "price-high" => Some(SortKey::PriceHighLow),
            "mileage" => Some(SortKey::MileageBest),
            "brand" => Some(SortKey::BrandAz),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::MileageBest => "Best Mileage",
            SortKey::BrandAz => "Brand: A-Z",
        }
    }

    /// Sort a result vector in place.
    pub fn apply(&self, bikes: &mut [Bike]) {
        match self {
            SortKey::Default => {}
            SortKey::PriceLowHigh => bikes.sort_by_key(|b| b.price),
            SortKey::PriceHighLow => bikes.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::MileageBest => bikes.sort_by(|a, b| b.mileage_kmpl.cmp(&a.mileage_kmpl)),
            SortKey::BrandAz => bikes.sort_by(|a, b| a.brand.cmp(&b.brand)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EngineSpec, FuelType, Segment};
    use crate::ids::BikeId;
    use crate::money::Money;

    fn bike(id: &str, brand: &str, rupees: i64, mileage: u32) -> Bike {
        Bike {
            id: BikeId::new(id),
            name: format!("Bike {}", id),
            brand: brand.to_string(),
            price: Money::from_rupees(rupees),
            image: String::new(),
            mileage_kmpl: mileage,
            fuel_type: FuelType::Petrol,
            engine: EngineSpec::default(),
            description: String::new(),
            segment: Segment::Naked,
            stock: None,
        }
    }

    fn ids(bikes: &[Bike]) -> Vec<&str> {
        bikes.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_default_keeps_order() {
        let mut bikes = vec![bike("b", "KTM", 300, 30), bike("a", "TVS", 100, 50)];
        SortKey::Default.apply(&mut bikes);
        assert_eq!(ids(&bikes), vec!["b", "a"]);
    }

    #[test]
    fn test_price_sorts() {
        let mut bikes = vec![
            bike("mid", "A", 200, 1),
            bike("high", "B", 300, 1),
            bike("low", "C", 100, 1),
        ];

        SortKey::PriceLowHigh.apply(&mut bikes);
        assert_eq!(ids(&bikes), vec!["low", "mid", "high"]);

        SortKey::PriceHighLow.apply(&mut bikes);
        assert_eq!(ids(&bikes), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_mileage_descending() {
        let mut bikes = vec![
            bike("thirsty", "A", 100, 15),
            bike("frugal", "B", 100, 45),
            bike("average", "C", 100, 30),
        ];
        SortKey::MileageBest.apply(&mut bikes);
        assert_eq!(ids(&bikes), vec!["frugal", "average", "thirsty"]);
    }

    #[test]
    fn test_brand_lexicographic() {
        let mut bikes = vec![
            bike("1", "Yamaha", 100, 1),
            bike("2", "Bajaj", 100, 1),
            bike("3", "KTM", 100, 1),
        ];
        SortKey::BrandAz.apply(&mut bikes);
        assert_eq!(ids(&bikes), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_stability_on_equal_keys() {
        let mut bikes = vec![
            bike("first", "A", 100, 1),
            bike("second", "B", 100, 1),
            bike("third", "C", 100, 1),
        ];
        SortKey::PriceLowHigh.apply(&mut bikes);
        assert_eq!(ids(&bikes), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_key_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("rating"), None);
    }
}
