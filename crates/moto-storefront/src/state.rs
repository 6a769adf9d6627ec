//! Application state: the page enum and the shared signal bundle.

use leptos::prelude::*;
use moto_commerce::prelude::*;

/// The closed set of storefront pages.
///
/// Navigation is a plain enum dispatch at the root; there is no router
/// and no URL state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Home,
    Catalog,
    Details,
    Compare,
    Calculators,
    Upcoming,
    Rentals,
    Warranty,
    About,
    Spares,
    Cart,
}

impl Page {
    /// All pages, in declaration order.
    pub const ALL: [Page; 12] = [
        Page::Login,
        Page::Home,
        Page::Catalog,
        Page::Details,
        Page::Compare,
        Page::Calculators,
        Page::Upcoming,
        Page::Rentals,
        Page::Warranty,
        Page::About,
        Page::Spares,
        Page::Cart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Details => "details",
            Page::Compare => "compare",
            Page::Calculators => "calculators",
            Page::Upcoming => "upcoming",
            Page::Rentals => "rentals",
            Page::Warranty => "warranty",
            Page::About => "about",
            Page::Spares => "spares",
            Page::Cart => "cart",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Label used in the navigation bar and footer links.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Home => "Home",
            Page::Catalog => "Browse Bikes",
            Page::Details => "Bike Details",
            Page::Compare => "Compare",
            Page::Calculators => "Calculators",
            Page::Upcoming => "Upcoming",
            Page::Rentals => "Rentals",
            Page::Warranty => "Warranty",
            Page::About => "About",
            Page::Spares => "Spares",
            Page::Cart => "Cart",
        }
    }
}

/// The root signal bundle, provided once as context.
///
/// Everything cross-page lives here: the current page, the login flag,
/// the cart ledger, the compare selection, the bike the details page
/// shows, and the chat widget's visibility. Page-local state (filter
/// criteria, calculator inputs) stays inside the page components.
#[derive(Clone, Copy)]
pub struct StoreState {
    pub page: RwSignal<Page>,
    pub logged_in: RwSignal<bool>,
    pub cart: RwSignal<Cart>,
    pub compare: RwSignal<CompareList>,
    pub selected_bike: RwSignal<Option<Bike>>,
    pub chat_open: RwSignal<bool>,
}

impl StoreState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Login),
            logged_in: RwSignal::new(false),
            cart: RwSignal::new(Cart::new()),
            compare: RwSignal::new(CompareList::new()),
            selected_bike: RwSignal::new(None),
            chat_open: RwSignal::new(false),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }

    /// Open the details page for a bike.
    pub fn open_details(&self, bike: Bike) {
        self.selected_bike.set(Some(bike));
        self.page.set(Page::Details);
    }

    /// Any submitted credentials are accepted; there is no account
    /// system behind the gate.
    pub fn login(&self) {
        self.logged_in.set(true);
        self.page.set(Page::Home);
    }

    /// Drop all session state and return to the login page.
    pub fn logout(&self) {
        self.logged_in.set(false);
        self.cart.update(|c| c.clear());
        self.compare.update(|c| c.clear());
        self.selected_bike.set(None);
        self.chat_open.set(false);
        self.page.set(Page::Login);
    }

    pub fn add_bike_to_cart(&self, bike: &Bike) {
        let entry = CartEntry::for_bike(bike);
        self.cart.update(|c| c.add(entry));
    }

    pub fn add_part_to_cart(&self, part: &SparePart) {
        let entry = CartEntry::for_part(part);
        self.cart.update(|c| c.add(entry));
    }

    pub fn remove_from_cart(&self, id: &ItemId) {
        let id = id.clone();
        self.cart.update(|c| {
            c.remove(&id);
        });
    }

    pub fn set_cart_quantity(&self, id: &ItemId, quantity: u32) {
        let id = id.clone();
        self.cart.update(|c| {
            c.set_quantity(&id, quantity);
        });
    }

    pub fn add_to_compare(&self, bike: &Bike) {
        let bike = bike.clone();
        self.compare.update(|c| {
            c.add(&bike);
        });
    }

    pub fn remove_from_compare(&self, id: &BikeId) {
        let id = id.clone();
        self.compare.update(|c| {
            c.remove(&id);
        });
    }

    pub fn toggle_chat(&self) {
        self.chat_open.update(|open| *open = !*open);
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for the context lookup every component does.
pub fn use_store() -> StoreState {
    expect_context::<StoreState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_str(page.as_str()), Some(page));
        }
        assert_eq!(Page::from_str("checkout"), None);
    }

    #[test]
    fn test_page_keys_unique() {
        for (i, a) in Page::ALL.iter().enumerate() {
            for b in &Page::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
