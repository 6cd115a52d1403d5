pub mod config;
pub mod models;

pub use config::{Config, FulfillmentRules};
pub use models::{Item, Order, Product, Shipment};
