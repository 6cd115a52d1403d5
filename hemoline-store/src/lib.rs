//! Storage seam between the fulfillment engine and its backing state.
//!
//! The engine only sees these traits, so the in-memory store can later be
//! swapped for a persistent one without touching the algorithm.

pub mod memory;

use hemoline_shared::{Order, Product};

pub use memory::MemoryStore;

/// Product catalog access.
pub trait ProductStore {
    /// Store every product keyed by its id (last write wins) and seed its
    /// stock entry to zero.
    fn init_catalog(&mut self, products: &[Product]);

    fn product(&self, product_id: u32) -> Option<&Product>;

    fn product_list(&self) -> Vec<&Product>;
}

/// Available unit counts per product. Counts never go negative.
pub trait StockStore {
    fn add_stock(&mut self, product_id: u32, quantity: u32);

    /// Decrement stock. A request larger than the current count is an
    /// invariant violation on the caller's side and is ignored (logged),
    /// never driven below zero.
    fn deduct_stock(&mut self, product_id: u32, quantity: u32);

    /// Current count; unknown ids read as zero.
    fn stock(&self, product_id: u32) -> u32;
}

/// The single-slot pending backlog: at most one unshipped remainder order,
/// replaced wholesale on each processing pass.
pub trait BacklogStore {
    fn set_pending_order(&mut self, order: Order);

    /// Remove and return the current backlog, if any.
    fn take_pending_order(&mut self) -> Option<Order>;

    fn pending_order(&self) -> Option<&Order>;

    fn clear_pending_order(&mut self);
}

/// Everything the fulfillment engine needs from a backing store.
pub trait Store: ProductStore + StockStore + BacklogStore {}

impl<T: ProductStore + StockStore + BacklogStore> Store for T {}
