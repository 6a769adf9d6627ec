//! Catalog filter predicates.
//!
//! Filters run in memory over the static catalogs: every criterion is a
//! predicate, criteria AND together, and the result keeps source order.
//! There is nothing to index or cache at ≤30 items per catalog.

use crate::catalog::{Bike, FuelType, PartCategory, SparePart};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Filter criteria for the bike catalog.
///
/// A default-constructed filter matches everything; the storefront's
/// "clear filters" action resets to `CatalogFilter::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogFilter {
    /// Case-insensitive substring matched against name and brand.
    pub query: String,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Exact brand, or None for all brands.
    pub brand: Option<String>,
    /// Exact fuel type, or None for all types.
    pub fuel_type: Option<FuelType>,
}

impl CatalogFilter {
    /// Create a match-everything filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the inclusive price range.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Restrict to one brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Restrict to one fuel type.
    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    /// Test a single bike against every criterion.
    pub fn matches(&self, bike: &Bike) -> bool {
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let hit = bike.name.to_lowercase().contains(&query)
                || bike.brand.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if bike.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if bike.price > max {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if !bike.brand.eq_ignore_ascii_case(brand) {
                return false;
            }
        }

        if let Some(fuel_type) = self.fuel_type {
            if bike.fuel_type != fuel_type {
                return false;
            }
        }

        true
    }

    /// Filter a catalog slice, preserving source order.
    pub fn apply(&self, bikes: &[Bike]) -> Vec<Bike> {
        bikes.iter().filter(|b| self.matches(b)).cloned().collect()
    }
}

/// Price bucket for the spares page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PriceBand {
    #[default]
    All,
    /// Below ₹5,000.
    Budget,
    /// ₹5,000 to ₹15,000 inclusive.
    Mid,
    /// Above ₹15,000.
    Premium,
}

impl PriceBand {
    /// All bands, in display order.
    pub const ALL: [PriceBand; 4] = [
        PriceBand::All,
        PriceBand::Budget,
        PriceBand::Mid,
        PriceBand::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::All => "all",
            PriceBand::Budget => "under-5000",
            PriceBand::Mid => "5000-15000",
            PriceBand::Premium => "above-15000",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(PriceBand::All),
            "under-5000" => Some(PriceBand::Budget),
            "5000-15000" => Some(PriceBand::Mid),
            "above-15000" => Some(PriceBand::Premium),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBand::All => "All Prices",
            PriceBand::Budget => "Under \u{20b9}5,000",
            PriceBand::Mid => "\u{20b9}5,000 - \u{20b9}15,000",
            PriceBand::Premium => "Above \u{20b9}15,000",
        }
    }

    /// Test a price against this band.
    pub fn contains(&self, price: Money) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::Budget => price < Money::from_rupees(5_000),
            PriceBand::Mid => {
                price >= Money::from_rupees(5_000) && price <= Money::from_rupees(15_000)
            }
            PriceBand::Premium => price > Money::from_rupees(15_000),
        }
    }
}

/// Filter criteria for the spare-parts catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PartFilter {
    /// Case-insensitive substring matched against name and description.
    pub query: String,
    /// Exact category, or None for all.
    pub category: Option<PartCategory>,
    /// Exact brand, or None for all.
    pub brand: Option<String>,
    /// Price bucket.
    pub price_band: PriceBand,
}

impl PartFilter {
    /// Create a match-everything filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Test a single part against every criterion.
    pub fn matches(&self, part: &SparePart) -> bool {
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            let hit = part.name.to_lowercase().contains(&query)
                || part.description.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category {
            if part.category != category {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if !part.brand.eq_ignore_ascii_case(brand) {
                return false;
            }
        }

        self.price_band.contains(part.price)
    }

    /// Filter a parts slice, preserving source order.
    pub fn apply(&self, parts: &[SparePart]) -> Vec<SparePart> {
        parts.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
