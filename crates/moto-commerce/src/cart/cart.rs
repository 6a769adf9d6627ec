//! Cart ledger and entry types.

use crate::cart::CartPricing;
use crate::catalog::{Bike, SparePart};
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What kind of listing a cart entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Vehicle,
    Part,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Vehicle => "vehicle",
            ItemKind::Part => "part",
        }
    }

    /// Label shown on the cart page.
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Vehicle => "Vehicle",
            ItemKind::Part => "Spare Part",
        }
    }
}

/// A line in the cart ledger.
///
/// Display fields are denormalized from the catalog at add time so the
/// cart page renders without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Listing identifier (bike or spare part).
    pub id: ItemId,
    /// Listing kind.
    pub kind: ItemKind,
    /// Display name.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    /// Draft an entry for a bike listing.
    pub fn for_bike(bike: &Bike) -> Self {
        Self {
            id: ItemId::from(&bike.id),
            kind: ItemKind::Vehicle,
            name: bike.name.clone(),
            unit_price: bike.price,
            image: bike.image.clone(),
            quantity: 1,
        }
    }

    /// Draft an entry for a spare part.
    pub fn for_part(part: &SparePart) -> Self {
        Self {
            id: ItemId::from(&part.id),
            kind: ItemKind::Part,
            name: part.name.clone(),
            unit_price: part.price,
            image: part.image.clone(),
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity as i64)
    }
}

/// The session cart: an insertion-ordered ledger keyed by listing ID.
///
/// All operations are total. The entries vector upholds two invariants:
/// at most one entry per ID, and every quantity ≥ 1 (an update to zero
/// removes the entry instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of a listing.
    ///
    /// If the ledger already holds the entry's ID, its quantity grows by
    /// one and the draft is discarded; otherwise the draft is appended
    /// with quantity 1, preserving insertion order.
    pub fn add(&mut self, entry: CartEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.entries.push(CartEntry {
            quantity: 1,
            ..entry
        });
    }

    /// Remove an entry. No-op (returns false) if the ID is absent.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.id != id);
        self.entries.len() < len_before
    }

    /// Overwrite an entry's quantity.
    ///
    /// A quantity of zero behaves exactly like `remove`. No-op (returns
    /// false) if the ID is absent.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.id == id) {
            entry.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Current quantity for an ID, if present.
    pub fn quantity_of(&self, id: &ItemId) -> Option<u32> {
        self.entries.iter().find(|e| &e.id == id).map(|e| e.quantity)
    }

    /// Whether the ledger holds this ID.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.entries.iter().any(|e| &e.id == id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total unit count (sum of quantities); the navigation badge.
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Number of distinct entries.
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Price the current ledger.
    pub fn pricing(&self) -> CartPricing {
        CartPricing::for_entries(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{BikeId, PartId};
    use crate::money::Money;

    fn entry(id: &str, rupees: i64) -> CartEntry {
        CartEntry {
            id: ItemId::new(id),
            kind: ItemKind::Vehicle,
            name: format!("Bike {}", id),
            unit_price: Money::from_rupees(rupees),
            image: String::new(),
            quantity: 1,
        }
    }

    #[test]
    fn test_add_inserts_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(entry("1", 195_000));

        assert_eq!(cart.unique_count(), 1);
        assert_eq!(cart.quantity_of(&ItemId::new("1")), Some(1));
    }

    #[test]
    fn test_repeated_adds_accumulate_quantity() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(entry("1", 195_000));
        }
        cart.add(entry("2", 285_000));

        // One entry per distinct ID, quantity equal to the add count.
        assert_eq!(cart.unique_count(), 2);
        assert_eq!(cart.quantity_of(&ItemId::new("1")), Some(5));
        assert_eq!(cart.quantity_of(&ItemId::new("2")), Some(1));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_normalizes_draft_quantity() {
        let mut cart = Cart::new();
        let mut draft = entry("1", 195_000);
        draft.quantity = 40;
        cart.add(draft);

        assert_eq!(cart.quantity_of(&ItemId::new("1")), Some(1));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(entry("3", 100));
        cart.add(entry("1", 100));
        cart.add(entry("2", 100));
        cart.add(entry("1", 100));

        let order: Vec<&str> = cart.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(entry("1", 100));

        assert!(cart.remove(&ItemId::new("1")));
        assert!(cart.is_empty());
        assert!(!cart.remove(&ItemId::new("1")));
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add(entry("1", 100));

        assert!(cart.set_quantity(&ItemId::new("1"), 7));
        assert_eq!(cart.quantity_of(&ItemId::new("1")), Some(7));
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut with_set = Cart::new();
        with_set.add(entry("1", 100));
        with_set.add(entry("2", 200));
        with_set.set_quantity(&ItemId::new("1"), 0);

        let mut with_remove = Cart::new();
        with_remove.add(entry("1", 100));
        with_remove.add(entry("2", 200));
        with_remove.remove(&ItemId::new("1"));

        assert_eq!(with_set, with_remove);
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(entry("1", 100));

        assert!(!cart.set_quantity(&ItemId::new("9"), 3));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_entry_constructors_share_one_key_space() {
        use crate::catalog::{Bike, EngineSpec, FuelType, PartCategory, Segment, SparePart};

        let bike = Bike {
            id: BikeId::new("1"),
            name: "Speed 400".to_string(),
            brand: "Triumph".to_string(),
            price: Money::from_rupees(275_000),
            image: String::new(),
            mileage_kmpl: 35,
            fuel_type: FuelType::Petrol,
            engine: EngineSpec::default(),
            description: String::new(),
            segment: Segment::Classic,
            stock: None,
        };
        let part = SparePart {
            id: PartId::new("engine-1"),
            name: "Performance Air Filter".to_string(),
            category: PartCategory::Engine,
            price: Money::from_rupees(2_500),
            image: String::new(),
            brand: "K&N".to_string(),
            compatible: Vec::new(),
            description: String::new(),
            stock: 25,
        };

        let mut cart = Cart::new();
        cart.add(CartEntry::for_bike(&bike));
        cart.add(CartEntry::for_part(&part));

        assert_eq!(cart.unique_count(), 2);
        assert_eq!(cart.entries()[0].kind, ItemKind::Vehicle);
        assert_eq!(cart.entries()[1].kind, ItemKind::Part);
        assert_eq!(cart.entries()[1].id.as_str(), "engine-1");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(entry("1", 100));
        cart.add(entry("2", 200));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
