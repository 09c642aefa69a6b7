//! In-memory shopping cart ledger.
//!
//! Quantity changes only ever step by one: repeated adds of the same id
//! merge into a single line, removes decrement and drop the line at
//! zero. The first add of an id pins the name and unit price for the
//! life of the line; later adds do not overwrite them. Line order is
//! insertion order. The running total is recomputed from the lines on
//! every read, never stored.

use serde::Serialize;

/// One cart line: a plant id with a pinned name, unit price and count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

/// Point-in-time copy of the cart, safe to hand to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub last_added_id: Option<String>,
}

/// The cart itself. Lives inside the catalog state for the whole
/// process; `clear` is the only reset.
#[derive(Debug, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    last_added_id: Option<String>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a plant. A new id appends a line with qty 1; an
    /// existing id only bumps the quantity, keeping the original name
    /// and price. Records the id as most recently added either way.
    pub fn add(&mut self, id: &str, name: &str, price: f64) {
        self.last_added_id = Some(id.to_string());

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.qty += 1;
            return;
        }

        self.lines.push(CartLine {
            id: id.to_string(),
            name: name.to_string(),
            price,
            qty: 1,
        });
    }

    /// Remove one unit of a plant. The line disappears when its
    /// quantity reaches zero; an id not in the cart is a no-op.
    pub fn remove(&mut self, id: &str) {
        if let Some(idx) = self.lines.iter().position(|line| line.id == id) {
            if self.lines[idx].qty > 1 {
                self.lines[idx].qty -= 1;
            } else {
                self.lines.remove(idx);
            }
        }
    }

    /// Sum of qty * unit price across all lines.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * f64::from(line.qty))
            .sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn last_added_id(&self) -> Option<&str> {
        self.last_added_id.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line and the last-added marker.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.last_added_id = None;
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
            last_added_id: self.last_added_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_new_line() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 12.5);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 1);
        assert_eq!(cart.lines()[0].name, "Mango Tree");
        assert_relative_eq!(cart.total(), 12.5);
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        cart.add("7", "Mango Tree", 10.0);
        cart.add("7", "Mango Tree", 10.0);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 3);
        assert_relative_eq!(cart.total(), 30.0);
    }

    #[test]
    fn test_first_add_pins_name_and_price() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        // a later add with drifted fields must not rewrite the line
        cart.add("7", "Mango Tree (2024)", 99.0);

        assert_eq!(cart.lines()[0].name, "Mango Tree");
        assert_relative_eq!(cart.lines()[0].price, 10.0);
        assert_eq!(cart.lines()[0].qty, 2);
        assert_relative_eq!(cart.total(), 20.0);
    }

    #[test]
    fn test_remove_decrements_then_drops() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        cart.add("7", "Mango Tree", 10.0);

        cart.remove("7");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 1);
        assert_relative_eq!(cart.total(), 10.0);

        cart.remove("7");
        assert!(cart.is_empty());
        assert_relative_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        cart.remove("404");

        assert_eq!(cart.lines().len(), 1);
        assert_relative_eq!(cart.total(), 10.0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        cart.add("3", "Neem", 5.0);
        cart.add("9", "Teak", 40.0);
        cart.add("3", "Neem", 5.0);

        let ids: Vec<&str> = cart.lines().iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "3", "9"]);
        assert_relative_eq!(cart.total(), 60.0);
    }

    #[test]
    fn test_last_added_tracking() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.last_added_id(), None);

        cart.add("7", "Mango Tree", 10.0);
        assert_eq!(cart.last_added_id(), Some("7"));

        cart.add("3", "Neem", 5.0);
        assert_eq!(cart.last_added_id(), Some("3"));

        // re-adding an existing line still moves the marker
        cart.add("7", "Mango Tree", 10.0);
        assert_eq!(cart.last_added_id(), Some("7"));

        // removals leave the marker alone
        cart.remove("7");
        assert_eq!(cart.last_added_id(), Some("7"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        cart.add("3", "Neem", 5.0);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.last_added_id(), None);
        assert_relative_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut cart = CartLedger::new();
        cart.add("7", "Mango Tree", 10.0);
        let snapshot = cart.snapshot();

        cart.add("7", "Mango Tree", 10.0);

        assert_eq!(snapshot.lines[0].qty, 1);
        assert_relative_eq!(snapshot.total, 10.0);
        assert_eq!(snapshot.last_added_id.as_deref(), Some("7"));
    }
}
