//! Rental listing types.

use crate::catalog::FuelType;
use crate::ids::RentalId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Rental billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RentalPeriod {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl RentalPeriod {
    /// All periods, in display order.
    pub const ALL: [RentalPeriod; 4] = [
        RentalPeriod::Hourly,
        RentalPeriod::Daily,
        RentalPeriod::Weekly,
        RentalPeriod::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalPeriod::Hourly => "hourly",
            RentalPeriod::Daily => "daily",
            RentalPeriod::Weekly => "weekly",
            RentalPeriod::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hourly" => Some(RentalPeriod::Hourly),
            "daily" => Some(RentalPeriod::Daily),
            "weekly" => Some(RentalPeriod::Weekly),
            "monthly" => Some(RentalPeriod::Monthly),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RentalPeriod::Hourly => "Hourly",
            RentalPeriod::Daily => "Daily",
            RentalPeriod::Weekly => "Weekly",
            RentalPeriod::Monthly => "Monthly",
        }
    }

    /// Unit suffix for rate labels (e.g., "/day").
    pub fn unit_suffix(&self) -> &'static str {
        match self {
            RentalPeriod::Hourly => "/hour",
            RentalPeriod::Daily => "/day",
            RentalPeriod::Weekly => "/week",
            RentalPeriod::Monthly => "/month",
        }
    }
}

/// A bike available for rent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalListing {
    /// Unique rental identifier.
    pub id: RentalId,
    /// Model name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Fuel type.
    pub fuel_type: FuelType,
    /// Rate for one hour.
    pub hourly_rate: Money,
    /// Rate for one day.
    pub daily_rate: Money,
    /// Rate for one week.
    pub weekly_rate: Money,
    /// Average customer rating out of 5.
    pub rating: f32,
    /// Whether the listing can be booked right now.
    pub available: bool,
    /// Pickup city.
    pub location: String,
    /// Included features.
    pub features: Vec<String>,
    /// Image URL.
    pub image: String,
}

impl RentalListing {
    /// Rate for the selected billing period.
    ///
    /// The monthly rate is not priced separately; it is four weekly
    /// blocks.
    pub fn rate_for(&self, period: RentalPeriod) -> Money {
        match period {
            RentalPeriod::Hourly => self.hourly_rate,
            RentalPeriod::Daily => self.daily_rate,
            RentalPeriod::Weekly => self.weekly_rate,
            RentalPeriod::Monthly => self.weekly_rate.multiply(4),
        }
    }

    /// Formatted rate label (e.g., "₹2,500/day").
    pub fn rate_display(&self, period: RentalPeriod) -> String {
        format!("{}{}", self.rate_for(period).display(), period.unit_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rental() -> RentalListing {
        RentalListing {
            id: RentalId::new("rental-1"),
            name: "Classic 350".to_string(),
            brand: "Royal Enfield".to_string(),
            fuel_type: FuelType::Petrol,
            hourly_rate: Money::from_rupees(150),
            daily_rate: Money::from_rupees(1_200),
            weekly_rate: Money::from_rupees(7_000),
            rating: 4.5,
            available: true,
            location: "Mumbai Central".to_string(),
            features: vec!["Helmet Included".to_string()],
            image: String::new(),
        }
    }

    #[test]
    fn test_rate_for_period() {
        let rental = sample_rental();
        assert_eq!(rental.rate_for(RentalPeriod::Hourly), Money::from_rupees(150));
        assert_eq!(rental.rate_for(RentalPeriod::Daily), Money::from_rupees(1_200));
        assert_eq!(rental.rate_for(RentalPeriod::Weekly), Money::from_rupees(7_000));
    }

    #[test]
    fn test_monthly_rate_is_four_weeks() {
        let rental = sample_rental();
        assert_eq!(
            rental.rate_for(RentalPeriod::Monthly),
            rental.rate_for(RentalPeriod::Weekly).multiply(4)
        );
    }

    #[test]
    fn test_rate_display() {
        let rental = sample_rental();
        assert_eq!(
            rental.rate_display(RentalPeriod::Daily),
            "\u{20b9}1,200/day"
        );
        assert_eq!(
            rental.rate_display(RentalPeriod::Monthly),
            "\u{20b9}28,000/month"
        );
    }

    #[test]
    fn test_period_round_trip() {
        for period in RentalPeriod::ALL {
            assert_eq!(RentalPeriod::from_str(period.as_str()), Some(period));
        }
    }
}
