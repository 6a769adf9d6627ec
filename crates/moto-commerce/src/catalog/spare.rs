//! Spare part types.

use crate::ids::PartId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock above this count renders as plainly "in stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Spare part category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    Engine,
    Exhaust,
    Brakes,
    DriveTrain,
    Lighting,
}

impl PartCategory {
    /// All categories, in display order.
    pub const ALL: [PartCategory; 5] = [
        PartCategory::Engine,
        PartCategory::Exhaust,
        PartCategory::Brakes,
        PartCategory::DriveTrain,
        PartCategory::Lighting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartCategory::Engine => "engine",
            PartCategory::Exhaust => "exhaust",
            PartCategory::Brakes => "brakes",
            PartCategory::DriveTrain => "drive-train",
            PartCategory::Lighting => "lighting",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "engine" => Some(PartCategory::Engine),
            "exhaust" => Some(PartCategory::Exhaust),
            "brakes" => Some(PartCategory::Brakes),
            "drive-train" => Some(PartCategory::DriveTrain),
            "lighting" => Some(PartCategory::Lighting),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartCategory::Engine => "Engine",
            PartCategory::Exhaust => "Exhaust",
            PartCategory::Brakes => "Brakes",
            PartCategory::DriveTrain => "Drive Train",
            PartCategory::Lighting => "Lighting",
        }
    }
}

/// Stock level bucket for badge rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    /// Classify a raw unit count.
    pub fn classify(stock: u32) -> Self {
        if stock == 0 {
            StockLevel::OutOfStock
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }

    /// Badge label.
    pub fn display_name(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::LowStock => "Low Stock",
            StockLevel::OutOfStock => "Out of Stock",
        }
    }
}

/// A spare part in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SparePart {
    /// Unique part identifier.
    pub id: PartId,
    /// Part name.
    pub name: String,
    /// Category.
    pub category: PartCategory,
    /// Price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Models this part fits.
    pub compatible: Vec<String>,
    /// Description.
    pub description: String,
    /// Units on hand.
    pub stock: u32,
}

impl SparePart {
    /// Whether the part can currently be added to a cart.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock badge bucket.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock)
    }

    /// Formatted price (e.g., "₹8,999").
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Compatibility line (e.g., "Fits: CBR650R, CB500X").
    pub fn compatible_display(&self) -> String {
        format!("Fits: {}", self.compatible.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in PartCategory::ALL {
            assert_eq!(PartCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(PartCategory::from_str("tyres"), None);
    }

    #[test]
    fn test_stock_level_boundaries() {
        assert_eq!(StockLevel::classify(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::classify(1), StockLevel::LowStock);
        assert_eq!(StockLevel::classify(10), StockLevel::LowStock);
        assert_eq!(StockLevel::classify(11), StockLevel::InStock);
    }

    #[test]
    fn test_part_helpers() {
        let part = SparePart {
            id: PartId::new("brake-1"),
            name: "Brembo Brake Pads".to_string(),
            category: PartCategory::Brakes,
            price: Money::from_rupees(3_500),
            image: String::new(),
            brand: "Brembo".to_string(),
            compatible: vec!["Ninja 400".to_string(), "Duke 390".to_string()],
            description: String::new(),
            stock: 4,
        };

        assert!(part.in_stock());
        assert_eq!(part.stock_level(), StockLevel::LowStock);
        assert_eq!(part.compatible_display(), "Fits: Ninja 400, Duke 390");
    }
}
