//! Inventory record management.
//!
//! Validated item records keyed by a derived SKU, merged on duplicate SKUs and
//! queried by stock level or category. Pure in-memory domain logic (no IO, no
//! persistence).

pub mod config;
pub mod item;
pub mod report;
pub mod sku;
pub mod store;

pub use config::InventoryConfig;
pub use item::{
    validate_category, validate_name, validate_quantity, Item, ItemFactory, ItemValidationError,
    RawItem, StockStatus,
};
pub use report::{InventoryView, ItemInfo, ItemReporter, ReportManager};
pub use sku::{Sku, SkuRule};
pub use store::{ItemStore, ItemUpdate};
