pub mod aggregate;

pub use aggregate::{Company, Product, PurchaseOrder, PurchaseOrderStatus, Store};
