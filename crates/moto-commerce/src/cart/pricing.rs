//! Cart pricing calculations.

use crate::cart::CartEntry;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// GST rate applied to the subtotal, in basis points.
pub const GST_RATE_BP: i64 = 1_800;

/// Subtotal above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money { paise: 5_000_000 };

/// Flat shipping fee below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Money = Money { paise: 50_000 };

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// GST on the subtotal.
    pub tax: Money,
    /// Shipping charge (zero above the free-shipping threshold).
    pub shipping: Money,
    /// Final total (subtotal + tax + shipping).
    pub total: Money,
}

impl CartPricing {
    /// Price a set of ledger entries.
    ///
    /// Tax is integer basis-point math, so whole-rupee prices stay exact
    /// to the paise. Shipping is free only when the subtotal strictly
    /// exceeds the threshold; an empty cart still prices to zero-plus-fee
    /// arithmetic but the storefront never shows it.
    pub fn for_entries(entries: &[CartEntry]) -> Self {
        let line_totals: Vec<Money> = entries.iter().map(|e| e.line_total()).collect();
        let subtotal = Money::sum(line_totals.iter());
        let tax = subtotal.scale_bp(GST_RATE_BP);
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Money::zero()
        } else {
            FLAT_SHIPPING_FEE
        };
        let total = subtotal.add(&tax).add(&shipping);

        Self {
            subtotal,
            tax,
            shipping,
            total,
        }
    }

    /// Whether this order ships free.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more spend would make shipping free, if it is not yet.
    pub fn free_shipping_gap(&self) -> Option<Money> {
        if self.is_free_shipping() {
            None
        } else {
            Some(FREE_SHIPPING_THRESHOLD.subtract(&self.subtotal))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, ItemKind};
    use crate::ids::ItemId;

    fn entry(id: &str, rupees: i64, quantity: u32) -> CartEntry {
        CartEntry {
            id: ItemId::new(id),
            kind: ItemKind::Part,
            name: format!("Item {}", id),
            unit_price: Money::from_rupees(rupees),
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_pricing_above_free_shipping_threshold() {
        let entries = [entry("1", 195_000, 1)];
        let pricing = CartPricing::for_entries(&entries);

        assert_eq!(pricing.subtotal, Money::from_rupees(195_000));
        assert_eq!(pricing.tax, Money::from_rupees(35_100));
        assert_eq!(pricing.shipping, Money::zero());
        assert_eq!(pricing.total, Money::from_rupees(230_100));
        assert!(pricing.is_free_shipping());
        assert_eq!(pricing.free_shipping_gap(), None);
    }

    #[test]
    fn test_pricing_below_free_shipping_threshold() {
        let entries = [entry("helmet", 2_499, 1)];
        let pricing = CartPricing::for_entries(&entries);

        assert_eq!(pricing.subtotal, Money::from_rupees(2_499));
        assert_eq!(pricing.tax, Money::from_paise(44_982));
        assert_eq!(pricing.shipping, Money::from_rupees(500));
        assert_eq!(pricing.total, Money::from_paise(344_882));
        assert_eq!(
            pricing.free_shipping_gap(),
            Some(Money::from_rupees(47_501))
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the threshold still pays the flat fee.
        let at = CartPricing::for_entries(&[entry("1", 50_000, 1)]);
        assert_eq!(at.shipping, FLAT_SHIPPING_FEE);

        let above = CartPricing::for_entries(&[entry("1", 50_001, 1)]);
        assert_eq!(above.shipping, Money::zero());
    }

    #[test]
    fn test_subtotal_and_tax_linear_in_quantity() {
        let base = CartPricing::for_entries(&[entry("1", 1_200, 1), entry("2", 3_400, 2)]);
        let doubled = CartPricing::for_entries(&[entry("1", 1_200, 2), entry("2", 3_400, 4)]);

        assert_eq!(doubled.subtotal, base.subtotal.multiply(2));
        assert_eq!(doubled.tax, base.tax.multiply(2));
        // Both stay under the threshold, so the flat fee does not double.
        assert_eq!(doubled.shipping, base.shipping);
    }

    #[test]
    fn test_doubling_across_threshold_drops_shipping() {
        let base = CartPricing::for_entries(&[entry("1", 30_000, 1)]);
        assert_eq!(base.shipping, FLAT_SHIPPING_FEE);

        let doubled = CartPricing::for_entries(&[entry("1", 30_000, 2)]);
        assert_eq!(doubled.subtotal, base.subtotal.multiply(2));
        assert_eq!(doubled.shipping, Money::zero());
    }

    #[test]
    fn test_cart_pricing_end_to_end() {
        let mut cart = Cart::new();
        cart.add(entry("1", 140_000, 1));
        cart.add(entry("1", 140_000, 1));
        cart.add(entry("gloves", 2_499, 1));

        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal, Money::from_rupees(282_499));
        assert_eq!(pricing.tax, Money::from_paise(28_249_900 * 1_800 / 10_000));
        assert!(pricing.is_free_shipping());
    }
}
