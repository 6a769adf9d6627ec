//! Marketplace catalog module.
//!
//! Contains the four statically seeded listing types: bikes, spare
//! parts, rental listings, and upcoming launches.

mod bike;
mod launch;
mod rental;
mod spare;

pub use bike::{Bike, EngineSpec, FuelType, Segment};
pub use launch::{LaunchStatus, UpcomingLaunch};
pub use rental::{RentalListing, RentalPeriod};
pub use spare::{PartCategory, SparePart, StockLevel, LOW_STOCK_THRESHOLD};
