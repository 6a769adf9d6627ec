//! Upcoming launch types.

use crate::ids::LaunchId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How close an upcoming model is to hitting showrooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchStatus {
    /// Launch date confirmed and near.
    ComingSoon,
    /// Bookings open ahead of launch.
    PreLaunch,
    /// Announced, details still firming up.
    Announced,
}

impl LaunchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchStatus::ComingSoon => "coming-soon",
            LaunchStatus::PreLaunch => "pre-launch",
            LaunchStatus::Announced => "announced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "coming-soon" => Some(LaunchStatus::ComingSoon),
            "pre-launch" => Some(LaunchStatus::PreLaunch),
            "announced" => Some(LaunchStatus::Announced),
            _ => None,
        }
    }

    /// Badge label.
    pub fn display_name(&self) -> &'static str {
        match self {
            LaunchStatus::ComingSoon => "Coming Soon",
            LaunchStatus::PreLaunch => "Pre-Launch",
            LaunchStatus::Announced => "Announced",
        }
    }
}

/// A model expected to launch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingLaunch {
    /// Unique launch identifier.
    pub id: LaunchId,
    /// Model name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Expected ex-showroom price.
    pub expected_price: Money,
    /// Expected launch date.
    pub launch_date: NaiveDate,
    /// Launch status.
    pub status: LaunchStatus,
    /// Whether this is an electric model.
    pub electric: bool,
    /// Headline features.
    pub features: Vec<String>,
    /// Description.
    pub description: String,
    /// Image URL.
    pub image: String,
}

impl UpcomingLaunch {
    /// Whole days until launch, floored at zero once the date passes.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.launch_date - today).num_days().max(0)
    }

    /// Countdown label (e.g., "23 days to go", "Launching now").
    pub fn countdown_display(&self, today: NaiveDate) -> String {
        match self.days_until(today) {
            0 => "Launching now".to_string(),
            1 => "1 day to go".to_string(),
            days => format!("{} days to go", days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_launch() -> UpcomingLaunch {
        UpcomingLaunch {
            id: LaunchId::new("launch-1"),
            name: "Thunder 450X".to_string(),
            brand: "PowerMax".to_string(),
            expected_price: Money::from_rupees(320_000),
            launch_date: date(2025, 3, 15),
            status: LaunchStatus::ComingSoon,
            electric: false,
            features: vec!["Ride Modes".to_string()],
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_days_until() {
        let launch = sample_launch();
        assert_eq!(launch.days_until(date(2025, 3, 1)), 14);
        assert_eq!(launch.days_until(date(2025, 3, 15)), 0);
    }

    #[test]
    fn test_days_until_floors_at_zero() {
        let launch = sample_launch();
        assert_eq!(launch.days_until(date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_countdown_display() {
        let launch = sample_launch();
        assert_eq!(launch.countdown_display(date(2025, 3, 1)), "14 days to go");
        assert_eq!(launch.countdown_display(date(2025, 3, 14)), "1 day to go");
        assert_eq!(launch.countdown_display(date(2025, 4, 1)), "Launching now");
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            LaunchStatus::ComingSoon,
            LaunchStatus::PreLaunch,
            LaunchStatus::Announced,
        ] {
            assert_eq!(LaunchStatus::from_str(status.as_str()), Some(status));
        }
    }
}
