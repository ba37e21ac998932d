//! Read-only reporting over a store.
//!
//! Reports return structured data; rendering is left to the caller.

use serde::Serialize;

use crate::item::{Item, StockStatus};
use crate::sku::Sku;
use crate::store::ItemStore;

/// What a reporter needs from an inventory.
pub trait InventoryView {
    fn lookup(&self, sku: &str) -> Option<&Item>;
    fn list_in_stock(&self) -> Vec<&Item>;
}

impl InventoryView for ItemStore {
    fn lookup(&self, sku: &str) -> Option<&Item> {
        self.get(sku)
    }

    fn list_in_stock(&self) -> Vec<&Item> {
        self.in_stock()
    }
}

/// Snapshot of every field of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemInfo {
    pub sku: Sku,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub status: StockStatus,
}

impl From<&Item> for ItemInfo {
    fn from(item: &Item) -> Self {
        Self {
            sku: item.sku().clone(),
            name: item.name().to_string(),
            category: item.category().to_string(),
            quantity: item.quantity(),
            status: item.stock_status(),
        }
    }
}

/// Reports over one inventory view.
#[derive(Debug, Clone, Copy)]
pub struct ReportManager<'a, V: InventoryView> {
    view: &'a V,
}

impl<'a, V: InventoryView> ReportManager<'a, V> {
    pub fn init(view: &'a V) -> Self {
        Self { view }
    }

    /// Names of in-stock records, in insertion order.
    pub fn report_in_stock(&self) -> Vec<String> {
        self.view
            .list_in_stock()
            .into_iter()
            .map(|item| item.name().to_string())
            .collect()
    }

    /// Reporter bound to `sku`, or `None` if no such record exists right now.
    pub fn reporter(&self, sku: &str) -> Option<ItemReporter> {
        self.view.lookup(sku).map(|item| ItemReporter {
            sku: item.sku().clone(),
        })
    }
}

/// Reports on one SKU.
///
/// Holds only the SKU, so each [`item_info`](Self::item_info) call reflects the
/// record as it is at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReporter {
    sku: Sku,
}

impl ItemReporter {
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    /// Current fields of the record, or `None` once it has been deleted.
    pub fn item_info(&self, view: &impl InventoryView) -> Option<ItemInfo> {
        view.lookup(self.sku.as_str()).map(ItemInfo::from)
    }
}
