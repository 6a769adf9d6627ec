//! Static seed catalogs.
//!
//! All listings are fixed at build time; the constructors below are the
//! only data source the storefront has. Home-page shelves and filter
//! dropdowns derive from these lists instead of carrying copies.

use chrono::NaiveDate;
use moto_commerce::prelude::*;

#[allow(clippy::too_many_arguments)]
fn bike(
    id: &str,
    name: &str,
    brand: &str,
    rupees: i64,
    image: &str,
    mileage_kmpl: u32,
    fuel_type: FuelType,
    engine: EngineSpec,
    segment: Segment,
    description: &str,
) -> Bike {
    Bike {
        id: BikeId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        price: Money::from_rupees(rupees),
        image: image.to_string(),
        mileage_kmpl,
        fuel_type,
        engine,
        description: description.to_string(),
        segment,
        stock: None,
    }
}

/// The full bike catalog, in showroom order.
pub fn bikes() -> Vec<Bike> {
    use FuelType::{Electric, Petrol};
    use Segment::*;

    vec![
        bike(
            "1", "Speed 400", "Triumph", 275_000, "/bikes/speed.jpg", 35, Petrol,
            EngineSpec::new("398cc", "40 HP", "37.5 Nm", "6500", 1), Classic,
            "Retro styling meets modern performance, perfect for city rides and weekend adventures.",
        ),
        bike(
            "2", "Cafe Racer 650", "Vintage", 320_000, "/bikes/cf650.jpg", 28, Petrol,
            EngineSpec::new("648cc", "47 HP", "52 Nm", "7250", 2), Classic,
            "Classic cafe racer design with modern engineering, ideal for enthusiasts who value style and performance.",
        ),
        bike(
            "3", "Classic 350", "Royal Enfield", 195_000, "/bikes/cl350.jpg", 35, Petrol,
            EngineSpec::new("349cc", "20 HP", "27 Nm", "5250", 1), Classic,
            "Timeless design with modern reliability. Perfect for purist riders.",
        ),
        bike(
            "4", "Meteor 350", "Royal Enfield", 220_000, "/bikes/met350.jpg", 36, Petrol,
            EngineSpec::new("349cc", "20 HP", "28 Nm", "5250", 1), Cruiser,
            "A smooth cruiser for city and highway tours with classic styling.",
        ),
        bike(
            "5", "Adventure 390", "KTM", 295_000, "/bikes/rc3901.jpg", 32, Petrol,
            EngineSpec::new("373cc", "44 HP", "37 Nm", "9000", 1), Adventure,
            "Built for adventure seekers, handles city streets and mountain trails with confidence.",
        ),
        bike(
            "6", "CBR650R", "Honda", 885_000, "/bikes/cbr650r.jpg", 22, Petrol,
            EngineSpec::new("648cc", "87 HP", "60 Nm", "12000", 4), Sport,
            "Mid-weight sports bike with aggressive styling and Honda reliability.",
        ),
        bike(
            "7", "GSX-R750", "Suzuki", 1_200_000, "/bikes/gsx750.jpg", 20, Petrol,
            EngineSpec::new("750cc", "148 HP", "86 Nm", "13000", 4), Sport,
            "Legendary supersport bike combining superbike performance and lightweight handling.",
        ),
        bike(
            "8", "RC 390", "KTM", 285_000, "/bikes/rc-390.jpg", 23, Petrol,
            EngineSpec::new("373cc", "43 HP", "37 Nm", "9000", 1), Sport,
            "Race-ready bike designed for agility and precision, loved by enthusiasts.",
        ),
        bike(
            "9", "Duke 200", "KTM", 200_000, "/bikes/duke200.jpg", 30, Petrol,
            EngineSpec::new("199cc", "25 HP", "19 Nm", "10000", 1), Naked,
            "Lightweight sport bike, perfect for city commuting with sharp handling.",
        ),
        bike(
            "10", "Duke 390", "KTM", 285_000, "/bikes/duke390.jpg", 32, Petrol,
            EngineSpec::new("373cc", "44 HP", "37 Nm", "9000", 1), Naked,
            "Powerful and lightweight bike with aggressive styling and excellent handling.",
        ),
        bike(
            "11", "Electric Scooter Pro", "Modern", 150_000, "/bikes/e-scooter.jpg", 120, Electric,
            EngineSpec::new("3kW Motor", "4 HP", "25 Nm", "N/A", 0), Segment::Electric,
            "Zero-emission, low-maintenance, smart connectivity features make it perfect for urban commuting.",
        ),
        bike(
            "12", "iQube Electric", "TVS", 140_000, "/bikes/iqube.jpg", 140, Electric,
            EngineSpec::new("1.5kW Motor", "2 HP", "15 Nm", "N/A", 0), Segment::Electric,
            "Lightweight, efficient, and packed with smart features for city commuting.",
        ),
        bike(
            "13", "Ather 450X", "Ather", 160_000, "/bikes/ather450.jpg", 150, Electric,
            EngineSpec::new("2kW Motor", "3 HP", "20 Nm", "N/A", 0), Segment::Electric,
            "High-performance electric scooter with smart features and modern design.",
        ),
        bike(
            "14", "Revolt RV400", "Revolt", 125_000, "/bikes/revolt.jpg", 120, Electric,
            EngineSpec::new("3kW Motor", "3.5 HP", "25 Nm", "N/A", 0), Segment::Electric,
            "Affordable electric bike with smart app integration and eco-friendly performance.",
        ),
        bike(
            "15", "Ola S1 Pro", "Ola", 160_000, "/bikes/ondeelectric.jpg", 130, Electric,
            EngineSpec::new("3.3kW Motor", "4 HP", "26 Nm", "N/A", 0), Segment::Electric,
            "High-tech electric scooter with long-range and smart dashboard features.",
        ),
        bike(
            "16", "Ampere Magnus Pro", "Ampere", 110_000, "/bikes/ampere.jpg", 100, Electric,
            EngineSpec::new("2kW Motor", "2.5 HP", "18 Nm", "N/A", 0), Segment::Electric,
            "Reliable electric scooter with decent range and smooth performance.",
        ),
        bike(
            "17", "Ninja ZX-10R", "Kawasaki", 1_800_000, "/bikes/ninja-300.jpg", 15, Petrol,
            EngineSpec::new("998cc", "203 HP", "114 Nm", "14000", 4), Sport,
            "Top-tier superbike with unmatched performance and aggressive styling.",
        ),
        bike(
            "18", "Panigale V4", "Ducati", 3_500_000, "/bikes/ducati.jpg", 14, Petrol,
            EngineSpec::new("1103cc", "214 HP", "124 Nm", "13000", 4), Sport,
            "Italian masterpiece combining speed, power, and iconic design.",
        ),
        bike(
            "19", "YZF-R1", "Yamaha", 2_300_000, "/bikes/yzfr1.jpg", 16, Petrol,
            EngineSpec::new("998cc", "200 HP", "112 Nm", "13500", 4), Sport,
            "Legendary superbike engineered for track and street performance.",
        ),
        bike(
            "20", "MT-09", "Yamaha", 1_050_000, "/bikes/mt09.jpg", 20, Petrol,
            EngineSpec::new("889cc", "119 HP", "93 Nm", "10000", 3), Naked,
            "Versatile naked bike with powerful engine and comfortable ergonomics.",
        ),
        bike(
            "21", "Street Triple RS", "Triumph", 1_200_000, "/bikes/street.jpg", 22, Petrol,
            EngineSpec::new("765cc", "121 HP", "79 Nm", "11500", 3), Naked,
            "Aggressive naked sports bike with excellent handling and high-end components.",
        ),
        bike(
            "22", "CB500X", "Honda", 650_000, "/bikes/cbx500.jpg", 25, Petrol,
            EngineSpec::new("471cc", "47 HP", "43 Nm", "8500", 2), Adventure,
            "Adventure-ready mid-weight bike, suitable for city and light off-road touring.",
        ),
        bike(
            "23", "Africa Twin", "Honda", 1_600_000, "/bikes/africatwin.jpg", 20, Petrol,
            EngineSpec::new("998cc", "101 HP", "105 Nm", "7500", 2), Adventure,
            "Legendary adventure tourer, perfect for long rides and rugged terrains.",
        ),
        bike(
            "24", "Tiger 900", "Triumph", 1_700_000, "/bikes/tig900.jpg", 21, Petrol,
            EngineSpec::new("888cc", "95 HP", "87 Nm", "8750", 3), Adventure,
            "Adventure sport bike, offering long-range comfort and sporty handling.",
        ),
        bike(
            "25", "Dominar 400", "Bajaj", 220_000, "/bikes/dominar.jpg", 32, Petrol,
            EngineSpec::new("373cc", "40 HP", "35 Nm", "8750", 1), Cruiser,
            "Power cruiser designed for highways and urban streets with style and performance.",
        ),
        bike(
            "26", "Pulsar NS200", "Bajaj", 160_000, "/bikes/baj.jpg", 35, Petrol,
            EngineSpec::new("199cc", "24 HP", "18.6 Nm", "9000", 1), Naked,
            "Aggressive street bike for urban enthusiasts, lightweight and fast.",
        ),
        bike(
            "27", "Apache RTR 200", "TVS", 140_000, "/bikes/apache.jpg", 38, Petrol,
            EngineSpec::new("197cc", "20 HP", "18.1 Nm", "8500", 1), Naked,
            "Popular street bike, sporty and comfortable for daily commuting.",
        ),
        bike(
            "28", "MT-15", "Yamaha", 170_000, "/bikes/mt15.jpg", 40, Petrol,
            EngineSpec::new("155cc", "18 HP", "13.9 Nm", "10000", 1), Naked,
            "Compact naked bike with modern styling and aggressive performance.",
        ),
        bike(
            "29", "FZ25", "Yamaha", 160_000, "/bikes/fz25.jpg", 38, Petrol,
            EngineSpec::new("249cc", "20 HP", "20 Nm", "8000", 1), Naked,
            "Versatile street bike with balanced performance and comfortable ergonomics.",
        ),
        bike(
            "30", "Ninja 400", "Kawasaki", 600_000, "/bikes/ninja-400.jpg", 30, Petrol,
            EngineSpec::new("399cc", "47 HP", "38 Nm", "10000", 2), Sport,
            "Popular lightweight sports bike combining sporty handling with reliability.",
        ),
    ]
}

/// Hero carousel picks, pulled from the catalog by id.
pub fn hero_picks() -> Vec<Bike> {
    let catalog = bikes();
    ["1", "11", "2"]
        .iter()
        .filter_map(|id| catalog.iter().find(|b| b.id.as_str() == *id).cloned())
        .collect()
}

/// Catalog subset for a home-page shelf.
pub fn shelf(segments: &[Segment]) -> Vec<Bike> {
    bikes()
        .into_iter()
        .filter(|b| segments.contains(&b.segment))
        .collect()
}

/// Distinct bike brands, in catalog order, for the filter dropdown.
pub fn bike_brands() -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for b in bikes() {
        if !brands.contains(&b.brand) {
            brands.push(b.brand);
        }
    }
    brands
}

#[allow(clippy::too_many_arguments)]
fn part(
    id: &str,
    name: &str,
    category: PartCategory,
    rupees: i64,
    image: &str,
    brand: &str,
    compatible: &[&str],
    description: &str,
    stock: u32,
) -> SparePart {
    SparePart {
        id: PartId::new(id),
        name: name.to_string(),
        category,
        price: Money::from_rupees(rupees),
        image: image.to_string(),
        brand: brand.to_string(),
        compatible: compatible.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        stock,
    }
}

/// The spare-parts catalog.
pub fn spare_parts() -> Vec<SparePart> {
    use PartCategory::*;

    vec![
        part(
            "engine-1", "High Performance Engine Block", Engine, 45_000, "/parts/engine-block.jpg",
            "Honda", &["Honda CBR650R", "Honda CB Shine"],
            "Complete engine block assembly with enhanced performance.", 5,
        ),
        part(
            "engine-2", "Piston Ring Set", Engine, 2_500, "/parts/piston-rings.jpg",
            "Yamaha", &["Yamaha R15", "Yamaha MT-15"],
            "High-quality piston rings for optimal engine performance.", 12,
        ),
        part(
            "engine-3", "Cylinder Head Assembly", Engine, 18_000, "/parts/cylinder-head.jpg",
            "KTM", &["KTM Duke 390", "KTM RC 390"],
            "Complete cylinder head with valves and camshaft.", 8,
        ),
        part(
            "engine-4", "Crankshaft Assembly", Engine, 22_000, "/parts/crankshaft.jpg",
            "Bajaj", &["Bajaj Pulsar NS200", "Bajaj Dominar 400"],
            "Forged crankshaft for enhanced durability and performance.", 3,
        ),
        part(
            "exhaust-1", "Performance Silencer", Exhaust, 8_500, "/parts/silencer.jpg",
            "Akrapovic", &["Universal"],
            "High-flow performance silencer with titanium construction.", 15,
        ),
        part(
            "exhaust-2", "Carbon Fiber Exhaust Tip", Exhaust, 3_500, "/parts/exhaust-tip.jpg",
            "Yoshimura", &["Universal"],
            "Lightweight carbon fiber exhaust tip for sporty look.", 20,
        ),
        part(
            "exhaust-3", "Full Exhaust System", Exhaust, 25_000, "/parts/exhaust-system.jpg",
            "Two Brothers Racing", &["Kawasaki Ninja 300", "Kawasaki Z400"],
            "Complete exhaust system for maximum performance gain.", 6,
        ),
        part(
            "brake-1", "Racing Brake Disc Set", Brakes, 12_000, "/parts/brake-disc.jpg",
            "Brembo", &["Universal 320mm"],
            "High-performance floating brake discs for superior stopping power.", 10,
        ),
        part(
            "brake-2", "Performance Brake Pads", Brakes, 2_800, "/parts/brake-pads.jpg",
            "EBC", &["Universal"],
            "Sintered brake pads for enhanced braking performance.", 25,
        ),
        part(
            "brake-3", "Brake Caliper Assembly", Brakes, 15_000, "/parts/brake-caliper.jpg",
            "Nissin", &["Honda CBR series"],
            "Radial mount brake caliper with 4-piston design.", 7,
        ),
        part(
            "chain-1", "X-Ring Chain Set", DriveTrain, 4_500, "/parts/chain.jpg",
            "DID", &["Universal 520 pitch"],
            "Heavy-duty X-ring chain for extended life and smooth operation.", 18,
        ),
        part(
            "chain-2", "Aluminum Sprocket Set", DriveTrain, 3_200, "/parts/sprocket.jpg",
            "Renthal", &["Universal"],
            "Lightweight aluminum sprockets for better acceleration.", 22,
        ),
        part(
            "light-1", "LED Headlight Assembly", Lighting, 6_500, "/parts/headlight.jpg",
            "Philips", &["Universal H4"],
            "High-intensity LED headlight with daylight visibility.", 14,
        ),
        part(
            "light-2", "RGB LED Strip Kit", Lighting, 2_200, "/parts/led-strip.jpg",
            "Custom Dynamics", &["Universal"],
            "Waterproof RGB LED strips with mobile app control.", 30,
        ),
    ]
}

/// Distinct part brands, in catalog order.
pub fn part_brands() -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for p in spare_parts() {
        if !brands.contains(&p.brand) {
            brands.push(p.brand);
        }
    }
    brands
}

#[allow(clippy::too_many_arguments)]
fn rental(
    id: &str,
    name: &str,
    brand: &str,
    fuel_type: FuelType,
    hourly: i64,
    daily: i64,
    weekly: i64,
    rating: f32,
    location: &str,
    features: &[&str],
    image: &str,
) -> RentalListing {
    RentalListing {
        id: RentalId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        fuel_type,
        hourly_rate: Money::from_rupees(hourly),
        daily_rate: Money::from_rupees(daily),
        weekly_rate: Money::from_rupees(weekly),
        rating,
        available: true,
        location: location.to_string(),
        features: features.iter().map(|s| s.to_string()).collect(),
        image: image.to_string(),
    }
}

/// Cities with a rental fleet, for the location dropdown.
pub const RENTAL_LOCATIONS: [&str; 6] = [
    "Mumbai Central",
    "Delhi NCR",
    "Bangalore",
    "Pune",
    "Chennai",
    "Hyderabad",
];

/// The rental fleet.
pub fn rentals() -> Vec<RentalListing> {
    use FuelType::{Electric, Petrol};

    vec![
        rental(
            "rental-1", "Speed 400", "Triumph", Petrol, 150, 1_200, 7_500, 4.8, "Mumbai Central",
            &["Helmet Included", "Insurance Covered", "Roadside Assistance"], "/bikes/speed.jpg",
        ),
        rental(
            "rental-2", "Cafe Racer 650", "Vintage", Petrol, 200, 1_500, 9_000, 4.9, "Bangalore",
            &["Premium Bike", "Vintage Style", "Performance Focused"], "/bikes/cf650.jpg",
        ),
        rental(
            "rental-3", "Adventure 390", "Adventure", Petrol, 180, 1_400, 8_500, 4.7, "Chennai",
            &["Off-road Ready", "Long Distance", "Adventure Gear"], "/bikes/ad390.jpg",
        ),
        rental(
            "rental-4", "Ninja ZX-10R", "Kawasaki", Petrol, 220, 1_600, 9_500, 4.9, "Delhi NCR",
            &["Sports Performance", "High Speed", "Premium Build"], "/bikes/ninja-400.jpg",
        ),
        rental(
            "rental-5", "R1 Yamaha", "Yamaha", Petrol, 230, 1_700, 10_000, 4.8, "Pune",
            &["Race Ready", "Premium Suspension", "Top Speed"], "/bikes/yzfr1.jpg",
        ),
        rental(
            "rental-6", "Ducati Panigale V4", "Ducati", Petrol, 250, 1_800, 11_000, 4.9,
            "Mumbai Central", &["Luxury Bike", "Race Tech", "High Performance"], "/bikes/ducati1.jpg",
        ),
        rental(
            "rental-7", "BMW S1000RR", "BMW", Petrol, 240, 1_750, 10_500, 4.9, "Hyderabad",
            &["Premium Sports", "High Speed", "Tech Loaded"], "/bikes/bmw.jpg",
        ),
        rental(
            "rental-8", "KTM 1290 Super Duke", "KTM", Petrol, 210, 1_600, 9_500, 4.8, "Chennai",
            &["Adventure Sports", "High Performance", "Powerful Engine"], "/bikes/1290.jpg",
        ),
        rental(
            "rental-9", "Harley Davidson Street 750", "Harley", Petrol, 200, 1_500, 9_000, 4.7,
            "Bangalore", &["Luxury Cruiser", "Comfort Ride", "Premium Style"], "/bikes/gsx750.jpg",
        ),
        rental(
            "rental-10", "Royal Enfield Interceptor 650", "Royal Enfield", Petrol, 140, 1_000,
            6_000, 4.6, "Delhi NCR", &["Classic Bike", "Comfortable Ride", "Reliable"],
            "/bikes/int.jpg",
        ),
        rental(
            "rental-11", "Electric Scooter Pro", "Modern", Electric, 80, 600, 3_500, 4.6,
            "Delhi NCR", &["Eco Friendly", "Silent Operation", "App Connected"],
            "/bikes/ondeelectric.jpg",
        ),
        rental(
            "rental-12", "Urban E-Bike", "Electric", Electric, 50, 400, 2_500, 4.4, "Pune",
            &["Lightweight", "City Commute", "Budget Friendly"], "/bikes/iqube.jpg",
        ),
        rental(
            "rental-13", "Classic 350", "Heritage", Petrol, 120, 900, 5_500, 4.5, "Hyderabad",
            &["Classic Style", "Comfortable Ride", "Reliable"], "/bikes/cl350.jpg",
        ),
        rental(
            "rental-14", "Commuter 110", "Bajaj", Petrol, 60, 450, 2_500, 4.3, "Mumbai Central",
            &["Fuel Efficient", "Lightweight", "Daily Ride"], "/bikes/baj.jpg",
        ),
        rental(
            "rental-15", "Hero Electric Flash", "Hero", Electric, 70, 500, 3_000, 4.4, "Chennai",
            &["Eco Friendly", "Lightweight", "City Commute"], "/bikes/iqube.jpg",
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn launch(
    id: &str,
    name: &str,
    brand: &str,
    expected_rupees: i64,
    launch_date: NaiveDate,
    status: LaunchStatus,
    electric: bool,
    features: &[&str],
    description: &str,
    image: &str,
) -> UpcomingLaunch {
    UpcomingLaunch {
        id: LaunchId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        expected_price: Money::from_rupees(expected_rupees),
        launch_date,
        status,
        electric,
        features: features.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

/// Models announced but not yet in showrooms.
pub fn upcoming_launches() -> Vec<UpcomingLaunch> {
    vec![
        launch(
            "launch-1", "Thunder 450X", "PowerMax", 320_000, date(2025, 3, 15),
            LaunchStatus::ComingSoon, false,
            &["450cc Engine", "ABS", "LED Lights", "Digital Console"],
            "A powerful sports bike designed for thrill seekers.", "/launches/thunder.jpg",
        ),
        launch(
            "launch-2", "EcoRide Pro Max", "GreenTech", 180_000, date(2025, 2, 28),
            LaunchStatus::PreLaunch, true,
            &["150km Range", "Fast Charging", "Smart Connectivity", "App Control"],
            "Next-generation electric scooter with AI features.", "/launches/ecoride.jpg",
        ),
        launch(
            "launch-3", "Heritage Classic 500", "Royal Motors", 285_000, date(2025, 4, 10),
            LaunchStatus::Announced, false,
            &["500cc Engine", "Retro Design", "Chrome Finish", "Comfortable Seat"],
            "Classic styling meets modern engineering excellence.", "/launches/heritage.jpg",
        ),
        launch(
            "launch-4", "Urban Commuter EV", "CityRide", 95_000, date(2025, 2, 15),
            LaunchStatus::ComingSoon, true,
            &["80km Range", "Lightweight", "Quick Charge", "GPS Tracking"],
            "Perfect for daily city commuting with zero emissions.", "/launches/urban-ev.jpg",
        ),
        launch(
            "launch-5", "Adventure Pro 650", "Explorer", 450_000, date(2025, 5, 20),
            LaunchStatus::Announced, false,
            &["650cc Twin Engine", "Off-road Tires", "Adventure Kit", "Long Range Tank"],
            "Built for long-distance touring and off-road adventures.", "/launches/adventure.jpg",
        ),
        launch(
            "launch-6", "Sport Racer 300", "SpeedDemon", 220_000, date(2025, 3, 30),
            LaunchStatus::PreLaunch, false,
            &["300cc Engine", "Racing Position", "Track Mode", "Carbon Fiber"],
            "Track-focused bike for racing enthusiasts.", "/launches/racer.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(bikes().len(), 30);
        assert_eq!(spare_parts().len(), 14);
        assert_eq!(rentals().len(), 15);
        assert_eq!(upcoming_launches().len(), 6);
    }

    #[test]
    fn test_bike_ids_unique() {
        let catalog = bikes();
        for (i, a) in catalog.iter().enumerate() {
            for b in &catalog[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate bike id {}", a.id);
            }
        }
    }

    #[test]
    fn test_part_ids_unique() {
        let parts = spare_parts();
        for (i, a) in parts.iter().enumerate() {
            for b in &parts[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate part id {}", a.id);
            }
        }
    }

    #[test]
    fn test_hero_picks_come_from_catalog() {
        let picks = hero_picks();
        assert_eq!(picks.len(), 3);

        let catalog = bikes();
        for pick in &picks {
            assert!(catalog.iter().any(|b| b.id == pick.id));
        }
    }

    #[test]
    fn test_shelves_partition_by_segment() {
        let electric = shelf(&[Segment::Electric]);
        assert_eq!(electric.len(), 6);
        assert!(electric.iter().all(|b| b.is_electric()));

        let sport = shelf(&[Segment::Sport]);
        assert!(!sport.is_empty());
        assert!(sport.iter().all(|b| b.segment == Segment::Sport));
    }

    #[test]
    fn test_brand_lists_are_distinct() {
        let brands = bike_brands();
        for (i, a) in brands.iter().enumerate() {
            assert!(!brands[i + 1..].contains(a));
        }
        assert!(brands.contains(&"Triumph".to_string()));
    }

    #[test]
    fn test_every_rental_location_is_known() {
        for listing in rentals() {
            assert!(
                RENTAL_LOCATIONS.contains(&listing.location.as_str()),
                "unknown location {}",
                listing.location
            );
        }
    }

    #[test]
    fn test_every_part_category_stocked() {
        let parts = spare_parts();
        for category in PartCategory::ALL {
            assert!(parts.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn test_launch_dates_valid() {
        // The date helper collapses bad inputs to the epoch default.
        for l in upcoming_launches() {
            assert!(l.launch_date > date(2024, 1, 1));
        }
    }
}
