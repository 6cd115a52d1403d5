use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discrete, weighted product in the catalog. Immutable after catalog
/// initialization; `mass_g` is a positive unit mass in grams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub mass_g: u32,
}

impl Product {
    pub fn new(product_id: u32, name: impl Into<String>, mass_g: u32) -> Self {
        Self {
            product_id,
            name: name.into(),
            mass_g,
        }
    }
}

/// A quantity of one product, used for order lines, restock deltas, and
/// shipment lines. A quantity of zero is legal and contributes nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub product_id: u32,
    pub quantity: u32,
}

impl Item {
    pub fn new(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// A single-unit line, the granularity shipments are packed at.
    pub fn unit(product_id: u32) -> Self {
        Self::new(product_id, 1)
    }
}

/// A customer's requested items. Order ids are caller-supplied and not
/// checked for uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub order_id: u64,
    pub items: Vec<Item>,
}

impl Order {
    pub fn new(order_id: u64, items: Vec<Item>) -> Self {
        Self { order_id, items }
    }
}

/// One executed physical package for an order: single-unit lines whose
/// total mass stays within the configured shipment weight cap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shipment {
    pub order_id: u64,
    pub items: Vec<Item>,
    pub total_weight_g: u32,
    pub shipped_at: DateTime<Utc>,
}

impl Shipment {
    pub fn new(order_id: u64, items: Vec<Item>, total_weight_g: u32) -> Self {
        Self {
            order_id,
            items,
            total_weight_g,
            shipped_at: Utc::now(),
        }
    }
}
