/// Errors surfaced by the fulfillment engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FulfillmentError {
    #[error("catalog initialization failed: product list is empty")]
    EmptyCatalog,

    #[error("order {0} is empty")]
    EmptyOrder(u64),

    #[error("no restock items provided")]
    EmptyRestock,

    #[error("product with ID {0} not found")]
    ProductNotFound(u32),

    #[error("not enough stock for product {product_id} (wanted {requested}, have {available})")]
    InsufficientStock {
        product_id: u32,
        requested: u32,
        available: u32,
    },

    #[error("shipment weight exceeds limit ({total_g}g > {limit_g}g)")]
    WeightExceeded { total_g: u32, limit_g: u32 },
}
