//! Catalog query builder.

use crate::catalog::{Bike, FuelType};
use crate::money::Money;
use crate::search::{CatalogFilter, SortKey};
use serde::{Deserialize, Serialize};

/// A complete catalog query: filter criteria plus a sort key.
///
/// This is the unit the catalog page rebuilds on every control change
/// and runs against the static bike list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogQuery {
    /// Filter criteria (AND-composed).
    pub filter: CatalogFilter,
    /// Result ordering.
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create a match-everything, source-ordered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.filter = self.filter.with_query(query);
        self
    }

    /// Set the inclusive price range.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.filter = self.filter.with_price_range(min, max);
        self
    }

    /// Restrict to one brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.filter = self.filter.with_brand(brand);
        self
    }

    /// Restrict to one fuel type.
    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.filter = self.filter.with_fuel_type(fuel_type);
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Filter then sort the catalog.
    pub fn run(&self, bikes: &[Bike]) -> Vec<Bike> {
        let mut results = self.filter.apply(bikes);
        self.sort.apply(&mut results);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EngineSpec, Segment};
    use crate::ids::BikeId;

    fn bike(id: &str, brand: &str, rupees: i64, fuel_type: FuelType) -> Bike {
        Bike {
            id: BikeId::new(id),
            name: format!("Bike {}", id),
            brand: brand.to_string(),
            price: Money::from_rupees(rupees),
            image: String::new(),
            mileage_kmpl: 30,
            fuel_type,
            engine: EngineSpec::default(),
            description: String::new(),
            segment: Segment::Naked,
            stock: None,
        }
    }

    #[test]
    fn test_query_builder() {
        let query = CatalogQuery::new()
            .with_query("bike")
            .with_brand("KTM")
            .with_sort(SortKey::PriceHighLow);

        assert_eq!(query.filter.query, "bike");
        assert_eq!(query.filter.brand.as_deref(), Some("KTM"));
        assert_eq!(query.sort, SortKey::PriceHighLow);
    }

    #[test]
    fn test_run_filters_then_sorts() {
        let bikes = vec![
            bike("1", "KTM", 285_000, FuelType::Petrol),
            bike("2", "TVS", 140_000, FuelType::Electric),
            bike("3", "KTM", 200_000, FuelType::Petrol),
        ];

        let results = CatalogQuery::new()
            .with_brand("KTM")
            .with_sort(SortKey::PriceLowHigh)
            .run(&bikes);

        let ids: Vec<&str> = results.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_empty_result() {
        let bikes = vec![bike("1", "KTM", 285_000, FuelType::Petrol)];
        let results = CatalogQuery::new()
            .with_fuel_type(FuelType::Hybrid)
            .run(&bikes);
        assert!(results.is_empty());
    }
}
