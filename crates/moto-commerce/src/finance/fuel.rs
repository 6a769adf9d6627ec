//! Fuel cost calculator.

use crate::error::MarketError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inputs to the fuel cost calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FuelUsage {
    /// Distance ridden per working day, km.
    pub daily_distance_km: f64,
    /// Claimed mileage, km/l.
    pub mileage_kmpl: f64,
    /// Fuel price, rupees per liter.
    pub price_per_liter: f64,
    /// Riding days per month.
    pub working_days: u32,
}

impl FuelUsage {
    pub fn new(
        daily_distance_km: f64,
        mileage_kmpl: f64,
        price_per_liter: f64,
        working_days: u32,
    ) -> Self {
        Self {
            daily_distance_km,
            mileage_kmpl,
            price_per_liter,
            working_days,
        }
    }

    /// Project daily, monthly, and yearly fuel spend.
    ///
    /// Daily liters = distance / mileage; everything after that is
    /// multiplication. Mileage at or below zero is the one rejected
    /// input.
    pub fn project(&self) -> Result<FuelCost, MarketError> {
        if self.mileage_kmpl <= 0.0 {
            return Err(MarketError::InvalidMileage(self.mileage_kmpl));
        }

        let daily_liters = self.daily_distance_km / self.mileage_kmpl;
        let daily = daily_liters * self.price_per_liter;
        let monthly = daily * self.working_days as f64;
        let yearly = monthly * 12.0;

        Ok(FuelCost {
            daily_liters,
            daily,
            monthly,
            yearly,
        })
    }

    /// Apply a preset, keeping the current fuel price.
    pub fn with_preset(mut self, preset: FuelPreset) -> Self {
        self.daily_distance_km = preset.daily_distance_km;
        self.mileage_kmpl = preset.mileage_kmpl;
        self.working_days = preset.working_days;
        self
    }
}

impl Default for FuelUsage {
    /// The calculator page's starting position.
    fn default() -> Self {
        Self {
            daily_distance_km: 100.0,
            mileage_kmpl: 35.0,
            price_per_liter: 110.0,
            working_days: 25,
        }
    }
}

/// A quick-fill riding pattern for the fuel calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FuelPreset {
    /// Button label.
    pub label: &'static str,
    pub daily_distance_km: f64,
    pub mileage_kmpl: f64,
    pub working_days: u32,
}

/// Short city runs on a frugal commuter.
pub const CITY_COMMUTE: FuelPreset = FuelPreset {
    label: "City Commute",
    daily_distance_km: 50.0,
    mileage_kmpl: 45.0,
    working_days: 22,
};

/// Longer highway stretches at touring mileage.
pub const HIGHWAY_TRAVEL: FuelPreset = FuelPreset {
    label: "Highway Travel",
    daily_distance_km: 100.0,
    mileage_kmpl: 35.0,
    working_days: 25,
};

/// Output of the fuel cost calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FuelCost {
    /// Liters burned per working day.
    pub daily_liters: f64,
    /// Spend per working day, rupees.
    pub daily: f64,
    /// Daily × working days.
    pub monthly: f64,
    /// Monthly × 12.
    pub yearly: f64,
}

impl FuelCost {
    /// Daily cost rounded to whole rupees.
    pub fn daily_display(&self) -> String {
        rounded_rupees(self.daily)
    }

    /// Monthly cost rounded to whole rupees.
    pub fn monthly_display(&self) -> String {
        rounded_rupees(self.monthly)
    }

    /// Yearly cost rounded to whole rupees.
    pub fn yearly_display(&self) -> String {
        rounded_rupees(self.yearly)
    }
}

fn rounded_rupees(value: f64) -> String {
    Money::from_rupees(value.round() as i64).display()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_projection() {
        // 100 km at 35 km/l and ₹110/l over 25 days.
        let cost = FuelUsage::new(100.0, 35.0, 110.0, 25).project().unwrap();

        assert!((cost.daily - 314.29).abs() < 0.01);
        assert!((cost.monthly - 7_857.14).abs() < 0.01);
        assert!((cost.yearly - 94_285.71).abs() < 0.01);
    }

    #[test]
    fn test_yearly_is_twelve_months() {
        let cost = FuelUsage::new(60.0, 40.0, 105.0, 20).project().unwrap();
        assert!((cost.yearly - cost.monthly * 12.0).abs() < 1e-9);
        assert!((cost.monthly - cost.daily * 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_mileage_rejected() {
        let result = FuelUsage::new(100.0, 0.0, 110.0, 25).project();
        assert_eq!(result, Err(MarketError::InvalidMileage(0.0)));

        let result = FuelUsage::new(100.0, -5.0, 110.0, 25).project();
        assert_eq!(result, Err(MarketError::InvalidMileage(-5.0)));
    }

    #[test]
    fn test_presets_keep_fuel_price() {
        let usage = FuelUsage {
            price_per_liter: 98.5,
            ..FuelUsage::default()
        };

        let city = usage.with_preset(CITY_COMMUTE);
        assert!((city.daily_distance_km - 50.0).abs() < 1e-9);
        assert!((city.mileage_kmpl - 45.0).abs() < 1e-9);
        assert_eq!(city.working_days, 22);
        assert!((city.price_per_liter - 98.5).abs() < 1e-9);

        let highway = usage.with_preset(HIGHWAY_TRAVEL);
        assert!((highway.daily_distance_km - 100.0).abs() < 1e-9);
        assert_eq!(highway.working_days, 25);
    }

    #[test]
    fn test_display_rounding() {
        let cost = FuelUsage::new(100.0, 35.0, 110.0, 25).project().unwrap();
        assert_eq!(cost.daily_display(), "\u{20b9}314");
        assert_eq!(cost.monthly_display(), "\u{20b9}7,857");
        assert_eq!(cost.yearly_display(), "\u{20b9}94,286");
    }

    #[test]
    fn test_default_usage() {
        let usage = FuelUsage::default();
        assert!((usage.daily_distance_km - 100.0).abs() < 1e-9);
        assert!((usage.mileage_kmpl - 35.0).abs() < 1e-9);
        assert!((usage.price_per_liter - 110.0).abs() < 1e-9);
        assert_eq!(usage.working_days, 25);
    }
}
