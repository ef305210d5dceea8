use serde::{Deserialize, Serialize};

use crate::models::menu::MenuItem;

/// One distinct item in the order. `quantity` is always >= 1; a line is
/// dropped from the cart instead of reaching 0.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

/// The order in progress: insertion-ordered lines, at most one per item id.
/// Lives for the page session only, nothing is persisted.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of `item`. A known id bumps its line, a new id appends
    /// a fresh line at the end so first-added stays first-shown.
    pub fn add(&mut self, item: MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine { item, quantity: 1 });
        }
    }

    /// Remove one unit of the item with `id`. The last unit removes the
    /// whole line; an unknown id is a no-op.
    pub fn remove(&mut self, id: u32) {
        if let Some(pos) = self.lines.iter().position(|line| line.item.id == id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Σ price × quantity over the current lines.
    pub fn total_price(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.item.price * line.quantity)
            .sum()
    }

    /// Σ quantity over the current lines (the header badge counter).
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: u32) -> MenuItem {
        MenuItem {
            id,
            name: format!("Позиция {}", id),
            description: String::new(),
            price,
            weight: "300г".into(),
            image: String::new(),
            is_popular: false,
        }
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_count(), 0);
    }

    #[test]
    fn adding_same_item_twice_merges_into_one_line() {
        let mut cart = Cart::default();
        cart.add(item(1, 450));
        cart.add(item(1, 450));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::default();
        cart.add(item(3, 550));
        cart.add(item(1, 450));
        cart.add(item(3, 550));
        cart.add(item(2, 350));

        let ids: Vec<u32> = cart.lines().iter().map(|line| line.item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn remove_decrements_before_dropping_the_line() {
        let mut cart = Cart::default();
        cart.add(item(1, 450));
        cart.add(item(1, 450));

        cart.remove(1);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.remove(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut cart = Cart::default();
        cart.add(item(1, 450));

        let before = cart.clone();
        cart.remove(99);
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_on_empty_cart_is_a_noop() {
        let mut cart = Cart::default();
        cart.remove(1);
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
    }

    #[test]
    fn totals_track_a_full_order_flow() {
        let mut cart = Cart::default();

        cart.add(item(1, 450));
        assert_eq!((cart.total_price(), cart.total_count()), (450, 1));

        cart.add(item(1, 450));
        assert_eq!((cart.total_price(), cart.total_count()), (900, 2));

        cart.add(item(2, 350));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!((cart.total_price(), cart.total_count()), (1250, 3));

        cart.remove(1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!((cart.total_price(), cart.total_count()), (800, 2));

        cart.remove(1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].item.id, 2);
        assert_eq!((cart.total_price(), cart.total_count()), (350, 1));
    }
}
