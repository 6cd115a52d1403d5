use hemoline_fulfillment::FulfillmentService;
use hemoline_shared::{Config, Item, Order};
use hemoline_store::MemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod data;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hemoline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("failed to load config");
    tracing::info!(
        max_shipment_weight_g = config.fulfillment.max_shipment_weight_g,
        "starting hemoline"
    );

    let mut service = FulfillmentService::with_rules(MemoryStore::new(), config.fulfillment);
    service
        .init_catalog(&data::product_list())
        .expect("seed catalog is not empty");

    // Simulated intake: a partial restock followed by a customer order.
    let restock = vec![Item::new(0, 2), Item::new(10, 4)];
    if let Err(err) = service.process_restock(&restock) {
        tracing::error!(error = %err, "restock failed");
    }

    let order = Order::new(123, vec![Item::new(0, 1), Item::new(10, 2)]);
    match service.process_order(order) {
        Ok(shipments) => {
            for shipment in &shipments {
                match serde_json::to_string(shipment) {
                    Ok(json) => println!("{json}"),
                    Err(err) => tracing::error!(error = %err, "failed to render shipment"),
                }
            }
        }
        Err(err) => tracing::error!(error = %err, "failed to process order"),
    }

    if let Some(pending) = service.pending_order() {
        tracing::info!(
            order_id = pending.order_id,
            lines = pending.items.len(),
            "order left a pending remainder"
        );
    }
}
