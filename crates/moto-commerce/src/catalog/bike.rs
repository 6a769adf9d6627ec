//! Bike and engine spec types.

use crate::ids::BikeId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Fuel type of a listed vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "petrol" => Some(FuelType::Petrol),
            "electric" => Some(FuelType::Electric),
            "hybrid" => Some(FuelType::Hybrid),
            _ => None,
        }
    }

    /// Label as shown on cards and the compare table.
    pub fn display_name(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

/// Market segment, used for the home-page shelves and related listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Sport,
    Naked,
    Cruiser,
    Classic,
    Adventure,
    Electric,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Sport => "sport",
            Segment::Naked => "naked",
            Segment::Cruiser => "cruiser",
            Segment::Classic => "classic",
            Segment::Adventure => "adventure",
            Segment::Electric => "electric",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Segment::Sport => "Sport",
            Segment::Naked => "Naked Street",
            Segment::Cruiser => "Cruiser",
            Segment::Classic => "Classic",
            Segment::Adventure => "Adventure",
            Segment::Electric => "Electric",
        }
    }
}

/// Engine and drivetrain figures, kept as display strings.
///
/// The catalog mixes combustion and electric listings, so displacement
/// reads "398cc" for one and "3 kW Motor" for the other; the compare
/// table renders these verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngineSpec {
    /// Displacement or motor rating.
    pub displacement: String,
    /// Peak power.
    pub power: String,
    /// Peak torque.
    pub torque: String,
    /// Redline, or "N/A" for electric drivetrains.
    pub max_rpm: String,
    /// Cylinder count (0 for electric).
    pub cylinders: u8,
}

impl EngineSpec {
    pub fn new(
        displacement: impl Into<String>,
        power: impl Into<String>,
        torque: impl Into<String>,
        max_rpm: impl Into<String>,
        cylinders: u8,
    ) -> Self {
        Self {
            displacement: displacement.into(),
            power: power.into(),
            torque: torque.into(),
            max_rpm: max_rpm.into(),
            cylinders,
        }
    }
}

/// A bike in the catalog.
///
/// Immutable once seeded; the storefront never mutates catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bike {
    /// Unique bike identifier.
    pub id: BikeId,
    /// Model name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Ex-showroom price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Claimed mileage in km/l (range per charge for electric).
    pub mileage_kmpl: u32,
    /// Fuel type.
    pub fuel_type: FuelType,
    /// Engine figures.
    pub engine: EngineSpec,
    /// Marketing description.
    pub description: String,
    /// Market segment.
    pub segment: Segment,
    /// Units on hand, if tracked for this listing.
    pub stock: Option<u32>,
}

impl Bike {
    /// Check if this is an electric vehicle.
    pub fn is_electric(&self) -> bool {
        self.fuel_type == FuelType::Electric
    }

    /// Formatted price (e.g., "₹2,75,000").
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Formatted mileage (e.g., "35 km/l").
    pub fn mileage_display(&self) -> String {
        format!("{} km/l", self.mileage_kmpl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bike() -> Bike {
        Bike {
            id: BikeId::new("1"),
            name: "Speed 400".to_string(),
            brand: "Triumph".to_string(),
            price: Money::from_rupees(275_000),
            image: String::new(),
            mileage_kmpl: 35,
            fuel_type: FuelType::Petrol,
            engine: EngineSpec::new("398cc", "40 HP", "37.5 Nm", "6500", 1),
            description: "Modern classic".to_string(),
            segment: Segment::Classic,
            stock: Some(8),
        }
    }

    #[test]
    fn test_fuel_type_round_trip() {
        for fuel in [FuelType::Petrol, FuelType::Electric, FuelType::Hybrid] {
            assert_eq!(FuelType::from_str(fuel.as_str()), Some(fuel));
        }
        assert_eq!(FuelType::from_str("diesel"), None);
    }

    #[test]
    fn test_fuel_type_case_insensitive() {
        assert_eq!(FuelType::from_str("Electric"), Some(FuelType::Electric));
        assert_eq!(FuelType::from_str("PETROL"), Some(FuelType::Petrol));
    }

    #[test]
    fn test_is_electric() {
        let mut bike = sample_bike();
        assert!(!bike.is_electric());
        bike.fuel_type = FuelType::Electric;
        assert!(bike.is_electric());
    }

    #[test]
    fn test_display_helpers() {
        let bike = sample_bike();
        assert_eq!(bike.price_display(), "\u{20b9}2,75,000");
        assert_eq!(bike.mileage_display(), "35 km/l");
    }
}
