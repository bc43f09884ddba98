//! Quantity selector bounded by stock

use voltup_core::Points;

/// Quantity in `[1, max(1, stock)]`. Starts at 1.
///
/// A sold-out product still has a selector (stuck at 1); the purchase
/// itself is refused elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    quantity: u32,
    max: u32,
}

impl QuantitySelector {
    pub fn new(stock: u32) -> Self {
        Self {
            quantity: 1,
            max: stock.max(1),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn increment(&mut self) {
        if self.can_increment() {
            self.quantity += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    /// Set directly, clamped into range
    pub fn set(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, self.max);
    }

    /// Unit price times quantity (display only; the server charges)
    pub fn total(&self, unit_price: Points) -> Points {
        unit_price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_stock() {
        let mut q = QuantitySelector::new(3);
        assert_eq!(q.quantity(), 1);
        assert!(!q.can_decrement());

        q.decrement();
        assert_eq!(q.quantity(), 1);

        for _ in 0..10 {
            q.increment();
        }
        assert_eq!(q.quantity(), 3);
        assert!(!q.can_increment());
    }

    #[test]
    fn test_zero_stock_still_allows_one() {
        let mut q = QuantitySelector::new(0);
        assert_eq!(q.max(), 1);
        q.increment();
        assert_eq!(q.quantity(), 1);
    }

    #[test]
    fn test_set_clamps() {
        let mut q = QuantitySelector::new(5);
        q.set(0);
        assert_eq!(q.quantity(), 1);
        q.set(99);
        assert_eq!(q.quantity(), 5);
        q.set(4);
        assert_eq!(q.quantity(), 4);
    }

    #[test]
    fn test_total() {
        let mut q = QuantitySelector::new(10);
        q.set(3);
        assert_eq!(q.total(Points(1200)), Points(3600));
    }
}
