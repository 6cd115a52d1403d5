//! Order fulfillment engine: greedily partitions orders into
//! weight-capped shipments against available stock, deferring whatever
//! cannot ship into a pending backlog retried on the next restock.

pub mod error;
pub mod service;

pub use error::FulfillmentError;
pub use service::FulfillmentService;
