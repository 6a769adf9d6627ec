//! Marketplace domain types and logic for MotoMart.
//!
//! This crate provides the UI-free core of a two-wheeler marketplace:
//!
//! - **Catalog**: bikes, spare parts, rental listings, upcoming launches
//! - **Cart**: an insertion-ordered ledger with GST and shipping pricing
//! - **Compare**: the bounded side-by-side selection list
//! - **Search**: in-memory filter and sort pipelines over static catalogs
//! - **Finance**: EMI amortization and fuel-cost projections
//! - **Assistant**: the scripted keyword-matching support responder
//!
//! Everything here is pure and synchronous. Catalog data is seeded by the
//! application and never mutated; the cart and compare list are the only
//! mutable collections, and both live for the page session only.
//!
//! # Example
//!
//! ```rust
//! use moto_commerce::prelude::*;
//!
//! let bike = Bike {
//!     id: BikeId::new("1"),
//!     name: "Speed 400".to_string(),
//!     brand: "Triumph".to_string(),
//!     price: Money::from_rupees(275_000),
//!     // ...
//! #   image: String::new(),
//! #   mileage_kmpl: 35,
//! #   fuel_type: FuelType::Petrol,
//! #   engine: EngineSpec::default(),
//! #   description: String::new(),
//! #   segment: Segment::Classic,
//! #   stock: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(CartEntry::for_bike(&bike));
//! cart.add(CartEntry::for_bike(&bike));
//!
//! let pricing = cart.pricing();
//! assert_eq!(pricing.subtotal, Money::from_rupees(550_000));
//! ```

pub mod assistant;
pub mod compare;
pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod finance;
pub mod search;

pub use error::MarketError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::MarketError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        Bike, EngineSpec, FuelType, LaunchStatus, PartCategory, RentalListing, RentalPeriod,
        Segment, SparePart, StockLevel, UpcomingLaunch,
    };

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartPricing, ItemKind};

    // Compare
    pub use crate::compare::{CompareList, MAX_COMPARE};

    // Search
    pub use crate::search::{CatalogFilter, CatalogQuery, PartFilter, PriceBand, SortKey};

    // Finance
    pub use crate::finance::{EmiBreakdown, FuelCost, FuelPreset, FuelUsage, LoanTerms};

    // Assistant
    pub use crate::assistant::{self, Topic};
}
