//! Cart
//!
//! Client-side order composition. Prices here are a preview; the server
//! recomputes the total from current dish prices on submission.

use rust_decimal::Decimal;
use shared::models::{CreateOrderItem, CreateOrderRequest, Dish};
use shared::order::{MAX_QUANTITY, line_subtotal, order_total};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub dish_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub notes: Option<String>,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        line_subtotal(self.unit_price, self.quantity).unwrap_or(Decimal::MAX)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    party_size: Option<u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a dish; unavailable dishes are refused
    ///
    /// Lines without notes merge by dish, up to the per-line quantity limit.
    pub fn add(&mut self, dish: &Dish) -> bool {
        if !dish.available {
            return false;
        }
        match self
            .lines
            .iter_mut()
            .find(|l| l.dish_id == dish.id && l.notes.is_none())
        {
            Some(line) if line.quantity >= MAX_QUANTITY => return false,
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                dish_id: dish.id.clone(),
                name: dish.name.clone(),
                unit_price: dish.price,
                quantity: 1,
                notes: None,
            }),
        }
        true
    }

    /// Add a separate line carrying kitchen notes
    pub fn add_with_notes(&mut self, dish: &Dish, quantity: u32, notes: impl Into<String>) -> bool {
        if !dish.available || quantity == 0 || quantity > MAX_QUANTITY {
            return false;
        }
        self.lines.push(CartLine {
            dish_id: dish.id.clone(),
            name: dish.name.clone(),
            unit_price: dish.price,
            quantity,
            notes: Some(notes.into()),
        });
        true
    }

    /// Remove one unit of a dish, dropping the line at zero
    pub fn remove(&mut self, dish_id: &str) {
        let Some(pos) = self.lines.iter().rposition(|l| l.dish_id == dish_id) else {
            return;
        };
        let line = &mut self.lines[pos];
        if line.quantity > 1 {
            line.quantity -= 1;
        } else {
            self.lines.remove(pos);
        }
    }

    pub fn set_party_size(&mut self, party_size: Option<u32>) {
        self.party_size = party_size;
    }

    pub fn party_size(&self) -> Option<u32> {
        self.party_size
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.party_size = None;
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.subtotal()))
    }

    /// Total including the service surcharge
    pub fn total(&self) -> Decimal {
        order_total(self.lines.iter().map(|l| (l.unit_price, l.quantity))).unwrap_or(Decimal::MAX)
    }

    pub fn surcharge(&self) -> Decimal {
        self.total() - self.subtotal()
    }

    pub fn to_request(&self, table_id: &str) -> CreateOrderRequest {
        CreateOrderRequest {
            table_id: table_id.to_string(),
            items: self
                .lines
                .iter()
                .map(|l| CreateOrderItem {
                    dish_id: l.dish_id.clone(),
                    quantity: i32::try_from(l.quantity).unwrap_or(i32::MAX),
                    notes: l.notes.clone(),
                })
                .collect(),
            party_size: self
                .party_size
                .map(|p| i32::try_from(p).unwrap_or(i32::MAX)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::DishCategory;

    fn dish(id: &str, price: Decimal, available: bool) -> Dish {
        Dish {
            id: id.to_string(),
            name: format!("dish {id}"),
            description: String::new(),
            price,
            category: DishCategory::Principal,
            prep_time: 10,
            image: String::new(),
            available,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_merges_and_totals() {
        let burger = dish("1", Decimal::new(899, 2), true);
        let fries = dish("4", Decimal::new(349, 2), true);

        let mut cart = Cart::new();
        cart.add(&burger);
        cart.add(&burger);
        cart.add(&fries);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Decimal::new(2147, 2));
        assert_eq!(cart.total(), Decimal::new(2362, 2));
        assert_eq!(cart.surcharge(), Decimal::new(215, 2));
    }

    #[test]
    fn test_unavailable_dish_refused() {
        let mut cart = Cart::new();
        assert!(!cart.add(&dish("9", Decimal::ONE, false)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_decrements_then_drops() {
        let burger = dish("1", Decimal::new(899, 2), true);
        let mut cart = Cart::new();
        cart.add(&burger);
        cart.add(&burger);

        cart.remove("1");
        assert_eq!(cart.lines()[0].quantity, 1);
        cart.remove("1");
        assert!(cart.is_empty());
        cart.remove("1");
    }

    #[test]
    fn test_notes_keep_separate_lines() {
        let burger = dish("1", Decimal::new(899, 2), true);
        let mut cart = Cart::new();
        cart.add(&burger);
        cart.add_with_notes(&burger, 1, "sin cebolla");
        cart.add(&burger);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].notes.as_deref(), Some("sin cebolla"));
    }

    #[test]
    fn test_line_quantity_is_capped() {
        let burger = dish("1", Decimal::new(899, 2), true);
        let mut cart = Cart::new();
        assert!(!cart.add_with_notes(&burger, MAX_QUANTITY + 1, "grande"));
        assert!(cart.add_with_notes(&burger, MAX_QUANTITY, "grande"));

        for _ in 0..MAX_QUANTITY {
            assert!(cart.add(&burger));
        }
        assert!(!cart.add(&burger));
        assert_eq!(cart.lines()[1].quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_to_request() {
        let mut cart = Cart::new();
        cart.add(&dish("1", Decimal::new(899, 2), true));
        cart.set_party_size(Some(3));

        let req = cart.to_request("t2");
        assert_eq!(req.table_id, "t2");
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].dish_id, "1");
        assert_eq!(req.items[0].quantity, 1);
        assert_eq!(req.party_size, Some(3));
    }
}
