use std::collections::HashMap;

use hemoline_shared::{Order, Product};

use crate::{BacklogStore, ProductStore, StockStore};

/// In-memory store backing the catalog, stock ledger, and pending backlog.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: HashMap<u32, Product>,
    stock: HashMap<u32, u32>,
    pending: Option<Order>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryStore {
    fn init_catalog(&mut self, products: &[Product]) {
        for product in products {
            self.stock.insert(product.product_id, 0);
            self.catalog.insert(product.product_id, product.clone());
        }
    }

    fn product(&self, product_id: u32) -> Option<&Product> {
        self.catalog.get(&product_id)
    }

    fn product_list(&self) -> Vec<&Product> {
        self.catalog.values().collect()
    }
}

impl StockStore for MemoryStore {
    fn add_stock(&mut self, product_id: u32, quantity: u32) {
        *self.stock.entry(product_id).or_insert(0) += quantity;
    }

    fn deduct_stock(&mut self, product_id: u32, quantity: u32) {
        let current = self.stock.entry(product_id).or_insert(0);
        if *current < quantity {
            // Callers re-validate stock right before deducting, so a trip
            // here means an upstream invariant broke. Ignore, never go
            // negative.
            tracing::warn!(
                product_id,
                quantity,
                current = *current,
                "ignored deduct below zero"
            );
            return;
        }
        *current -= quantity;
    }

    fn stock(&self, product_id: u32) -> u32 {
        self.stock.get(&product_id).copied().unwrap_or(0)
    }
}

impl BacklogStore for MemoryStore {
    fn set_pending_order(&mut self, order: Order) {
        self.pending = Some(order);
    }

    fn take_pending_order(&mut self) -> Option<Order> {
        self.pending.take()
    }

    fn pending_order(&self) -> Option<&Order> {
        self.pending.as_ref()
    }

    fn clear_pending_order(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemoline_shared::Item;

    #[test]
    fn test_init_catalog_seeds_zero_stock() {
        let mut store = MemoryStore::new();
        store.init_catalog(&[
            Product::new(1, "Product A", 500),
            Product::new(2, "Product B", 300),
        ]);

        assert_eq!(store.product_list().len(), 2);
        assert_eq!(store.stock(1), 0);
        assert_eq!(store.stock(2), 0);
    }

    #[test]
    fn test_init_catalog_reinit_resets_stock_last_write_wins() {
        let mut store = MemoryStore::new();
        store.init_catalog(&[Product::new(1, "Product A", 500)]);
        store.add_stock(1, 4);

        store.init_catalog(&[Product::new(1, "Product A v2", 600)]);

        assert_eq!(store.product(1).unwrap().name, "Product A v2");
        assert_eq!(store.product(1).unwrap().mass_g, 600);
        assert_eq!(store.stock(1), 0);
    }

    #[test]
    fn test_get_product() {
        let mut store = MemoryStore::new();
        store.init_catalog(&[Product::new(1, "Test", 100)]);

        let product = store.product(1).expect("product should be found");
        assert_eq!(product.name, "Test");
        assert!(store.product(2).is_none());
    }

    #[test]
    fn test_stock_operations() {
        let mut store = MemoryStore::new();
        store.add_stock(1, 10);
        assert_eq!(store.stock(1), 10);

        store.deduct_stock(1, 3);
        assert_eq!(store.stock(1), 7);
    }

    #[test]
    fn test_stock_unknown_product_reads_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.stock(42), 0);
    }

    #[test]
    fn test_deduct_below_zero_is_ignored() {
        let mut store = MemoryStore::new();
        store.add_stock(1, 2);

        store.deduct_stock(1, 5);

        assert_eq!(store.stock(1), 2);
    }

    #[test]
    fn test_pending_backlog_single_slot() {
        let mut store = MemoryStore::new();
        assert!(store.pending_order().is_none());

        store.set_pending_order(Order::new(1, vec![Item::new(1, 2)]));
        store.set_pending_order(Order::new(2, vec![Item::new(3, 1)]));

        // Overwritten, not queued.
        assert_eq!(store.pending_order().unwrap().order_id, 2);

        let taken = store.take_pending_order().unwrap();
        assert_eq!(taken.order_id, 2);
        assert!(store.pending_order().is_none());
    }

    #[test]
    fn test_clear_pending_order() {
        let mut store = MemoryStore::new();
        store.set_pending_order(Order::new(7, vec![Item::new(1, 1)]));
        store.clear_pending_order();
        assert!(store.pending_order().is_none());
    }
}
