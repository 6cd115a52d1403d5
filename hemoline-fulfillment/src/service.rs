use hemoline_shared::{FulfillmentRules, Item, Order, Product, Shipment};
use hemoline_store::Store;

use crate::error::FulfillmentError;

/// Drives catalog setup, order partitioning, shipment execution, and
/// restock-triggered retries against an injected store.
///
/// The model is single-threaded and synchronous: one logical caller
/// submits restocks and orders serially.
pub struct FulfillmentService<S: Store> {
    store: S,
    max_shipment_weight_g: u32,
}

impl<S: Store> FulfillmentService<S> {
    pub fn new(store: S) -> Self {
        Self::with_rules(store, FulfillmentRules::default())
    }

    pub fn with_rules(store: S, rules: FulfillmentRules) -> Self {
        Self {
            store,
            max_shipment_weight_g: rules.max_shipment_weight_g,
        }
    }

    /// Override the per-shipment weight cap, in grams.
    pub fn with_max_shipment_weight(mut self, grams: u32) -> Self {
        self.max_shipment_weight_g = grams;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the product catalog, seeding every product's stock to zero.
    /// Re-initialization overwrites per id, last write wins.
    pub fn init_catalog(&mut self, products: &[Product]) -> Result<(), FulfillmentError> {
        if products.is_empty() {
            return Err(FulfillmentError::EmptyCatalog);
        }

        self.store.init_catalog(products);
        Ok(())
    }

    pub fn find_product(&self, product_id: u32) -> Result<&Product, FulfillmentError> {
        self.store
            .product(product_id)
            .ok_or(FulfillmentError::ProductNotFound(product_id))
    }

    /// The current unshipped remainder, if any.
    pub fn pending_order(&self) -> Option<&Order> {
        self.store.pending_order()
    }

    /// Partition an order into weight-capped shipments and execute them,
    /// deferring whatever cannot ship right now into the pending backlog.
    ///
    /// Packing is strictly greedy in the order's item sequence; it never
    /// reorders items to improve density. An unknown product aborts the
    /// order, but shipments flushed before the abort stay committed.
    /// Returns the shipments executed for this pass; callers learn of
    /// incomplete fulfillment by querying [`pending_order`].
    ///
    /// [`pending_order`]: Self::pending_order
    pub fn process_order(&mut self, order: Order) -> Result<Vec<Shipment>, FulfillmentError> {
        if order.items.is_empty() {
            return Err(FulfillmentError::EmptyOrder(order.order_id));
        }

        let mut shipments: Vec<Shipment> = Vec::new();
        let mut pending: Vec<Item> = Vec::new();
        let mut current: Vec<Item> = Vec::new();
        let mut current_weight_g: u32 = 0;

        for item in &order.items {
            let product = self
                .store
                .product(item.product_id)
                .cloned()
                .ok_or(FulfillmentError::ProductNotFound(item.product_id))?;

            let available = self.store.stock(item.product_id);
            let mut to_ship = item.quantity.min(available);
            let remaining = item.quantity - to_ship;

            while to_ship > 0 {
                if current_weight_g.saturating_add(product.mass_g) > self.max_shipment_weight_g {
                    self.flush(
                        order.order_id,
                        &mut current,
                        &mut current_weight_g,
                        &mut pending,
                        &mut shipments,
                    );
                }

                // Whole units that still fit before the next flush. A unit
                // heavier than the cap goes out alone regardless; execution
                // rejects that package and bounces it back to pending.
                // Catalog masses are positive; max(1) keeps a malformed
                // zero-mass entry from dividing by zero.
                let capacity = self.max_shipment_weight_g - current_weight_g;
                let take = (capacity / product.mass_g.max(1)).max(1).min(to_ship);

                current.extend((0..take).map(|_| Item::unit(item.product_id)));
                current_weight_g += product.mass_g * take;
                to_ship -= take;
            }

            // Queue what's not ship-ready.
            if remaining > 0 {
                pending.push(Item::new(item.product_id, remaining));
            }
        }

        self.flush(
            order.order_id,
            &mut current,
            &mut current_weight_g,
            &mut pending,
            &mut shipments,
        );

        if pending.is_empty() {
            self.store.clear_pending_order();
        } else {
            self.store
                .set_pending_order(Order::new(order.order_id, pending));
        }

        Ok(shipments)
    }

    /// Execute the accumulated package, requeueing its units onto the
    /// pending list if execution rejects it. Resets the accumulator either
    /// way.
    fn flush(
        &mut self,
        order_id: u64,
        current: &mut Vec<Item>,
        current_weight_g: &mut u32,
        pending: &mut Vec<Item>,
        shipments: &mut Vec<Shipment>,
    ) {
        if current.is_empty() {
            return;
        }

        let package = Order::new(order_id, std::mem::take(current));
        *current_weight_g = 0;

        match self.ship_package(&package) {
            Ok(shipment) => shipments.push(shipment),
            Err(err) => {
                tracing::debug!(order_id, error = %err, "requeueing unshippable package");
                pending.extend(package.items);
            }
        }
    }

    /// Validate and execute a single package: every product must exist,
    /// every line must be covered by current stock, and the cumulative
    /// weight must stay within the cap. Validation fails fast in item
    /// order; stock is only deducted once the whole package validates.
    pub fn ship_package(&mut self, order: &Order) -> Result<Shipment, FulfillmentError> {
        let mut total_weight_g: u32 = 0;

        for item in &order.items {
            let product = self
                .store
                .product(item.product_id)
                .ok_or(FulfillmentError::ProductNotFound(item.product_id))?;

            let available = self.store.stock(item.product_id);
            if available < item.quantity {
                return Err(FulfillmentError::InsufficientStock {
                    product_id: item.product_id,
                    requested: item.quantity,
                    available,
                });
            }

            total_weight_g =
                total_weight_g.saturating_add(product.mass_g.saturating_mul(item.quantity));
            if total_weight_g > self.max_shipment_weight_g {
                return Err(FulfillmentError::WeightExceeded {
                    total_g: total_weight_g,
                    limit_g: self.max_shipment_weight_g,
                });
            }
        }

        for item in &order.items {
            self.store.deduct_stock(item.product_id, item.quantity);
        }

        let shipment = Shipment::new(order.order_id, order.items.clone(), total_weight_g);
        tracing::info!(
            order_id = shipment.order_id,
            lines = shipment.items.len(),
            total_weight_g = shipment.total_weight_g,
            "shipped package"
        );
        Ok(shipment)
    }

    /// Apply restock deltas, then retry the pending backlog exactly once.
    /// Unknown products are skipped, not errors; retry failures are
    /// swallowed (best effort).
    pub fn process_restock(&mut self, items: &[Item]) -> Result<(), FulfillmentError> {
        if items.is_empty() {
            return Err(FulfillmentError::EmptyRestock);
        }

        for item in items {
            if self.store.product(item.product_id).is_none() {
                tracing::warn!(product_id = item.product_id, "restock skipped unknown product");
                continue;
            }
            self.store.add_stock(item.product_id, item.quantity);
            tracing::info!(
                product_id = item.product_id,
                quantity = item.quantity,
                "restocked product"
            );
        }

        if let Some(pending) = self.store.take_pending_order() {
            if let Err(err) = self.process_order(pending) {
                tracing::debug!(error = %err, "pending order reprocessing failed");
            }
        }

        Ok(())
    }
}
