//! One module per page enum variant.

mod about;
mod calculators;
mod cart;
mod catalog;
mod compare;
mod details;
mod home;
mod launches;
mod login;
mod rentals;
mod spares;
mod warranty;

pub use about::AboutPage;
pub use calculators::CalculatorsPage;
pub use cart::CartPage;
pub use catalog::CatalogPage;
pub use compare::ComparePage;
pub use details::DetailsPage;
pub use home::HomePage;
pub use launches::LaunchesPage;
pub use login::LoginPage;
pub use rentals::RentalsPage;
pub use spares::SparesPage;
pub use warranty::WarrantyPage;
