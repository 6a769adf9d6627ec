//! Comparison selector.
//!
//! The side-by-side compare table works over a bounded selection: at
//! most three bikes, unique by ID, shown in the order they were picked.

use crate::catalog::Bike;
use crate::ids::BikeId;
use serde::{Deserialize, Serialize};

/// Maximum number of bikes that fit the compare table.
pub const MAX_COMPARE: usize = 3;

/// The bounded, ordered, duplicate-free comparison selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompareList {
    bikes: Vec<Bike>,
}

impl CompareList {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self { bikes: Vec::new() }
    }

    /// Add a bike to the selection.
    ///
    /// Returns false without changing anything if the bike is already
    /// selected or the selection is full.
    pub fn add(&mut self, bike: &Bike) -> bool {
        if self.is_full() || self.contains(&bike.id) {
            return false;
        }
        self.bikes.push(bike.clone());
        true
    }

    /// Remove a bike by ID. No-op (returns false) if absent.
    pub fn remove(&mut self, id: &BikeId) -> bool {
        let len_before = self.bikes.len();
        self.bikes.retain(|b| &b.id != id);
        self.bikes.len() < len_before
    }

    /// Whether this bike is already selected.
    pub fn contains(&self, id: &BikeId) -> bool {
        self.bikes.iter().any(|b| &b.id == id)
    }

    /// Whether the selection is at capacity.
    pub fn is_full(&self) -> bool {
        self.bikes.len() >= MAX_COMPARE
    }

    /// Number of selected bikes.
    pub fn len(&self) -> usize {
        self.bikes.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.bikes.is_empty()
    }

    /// Selected bikes in pick order.
    pub fn bikes(&self) -> &[Bike] {
        &self.bikes
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.bikes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EngineSpec, FuelType, Segment};
    use crate::money::Money;

    fn bike(id: &str) -> Bike {
        Bike {
            id: BikeId::new(id),
            name: format!("Bike {}", id),
            brand: "Test".to_string(),
            price: Money::from_rupees(200_000),
            image: String::new(),
            mileage_kmpl: 30,
            fuel_type: FuelType::Petrol,
            engine: EngineSpec::default(),
            description: String::new(),
            segment: Segment::Naked,
            stock: None,
        }
    }

    #[test]
    fn test_add_and_order() {
        let mut list = CompareList::new();
        assert!(list.add(&bike("2")));
        assert!(list.add(&bike("1")));

        let order: Vec<&str> = list.bikes().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = CompareList::new();
        assert!(list.add(&bike("1")));
        assert!(!list.add(&bike("1")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_capacity_bound() {
        let mut list = CompareList::new();
        assert!(list.add(&bike("1")));
        assert!(list.add(&bike("2")));
        assert!(list.add(&bike("3")));
        assert!(list.is_full());

        // A fourth add leaves the selection unchanged.
        let before = list.clone();
        assert!(!list.add(&bike("4")));
        assert_eq!(list, before);
        assert_eq!(list.len(), MAX_COMPARE);
    }

    #[test]
    fn test_remove_then_add_again() {
        let mut list = CompareList::new();
        list.add(&bike("1"));
        list.add(&bike("2"));
        list.add(&bike("3"));

        assert!(list.remove(&BikeId::new("2")));
        assert!(!list.is_full());
        assert!(list.add(&bike("4")));

        let order: Vec<&str> = list.bikes().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(order, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = CompareList::new();
        list.add(&bike("1"));
        assert!(!list.remove(&BikeId::new("9")));
        assert_eq!(list.len(), 1);
    }
}
