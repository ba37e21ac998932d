//! The item store: owns every record and enforces one record per SKU.

use serde::Deserialize;

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::config::InventoryConfig;
use crate::item::{Item, ItemFactory, RawItem};
use crate::sku::Sku;

/// Field replacements applied by [`ItemStore::update`].
///
/// Absent fields are left alone; present ones overwrite unconditionally, with
/// no re-validation. Decodes from a JSON object such as `{"quantity": 0}`;
/// keys naming no record field are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
}

impl ItemUpdate {
    pub fn quantity(quantity: f64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.quantity.is_none()
    }

    fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.set_name(name.clone());
        }
        if let Some(category) = &self.category {
            item.set_category(category.clone());
        }
        if let Some(quantity) = self.quantity {
            item.set_quantity(quantity);
        }
    }
}

/// In-memory, insertion-ordered collection of item records.
///
/// All lookups are linear scans. Single owner, single thread: compound
/// scan-then-mutate operations (`add_or_merge`, `update`, `delete`) are not
/// atomic and need external locking if the store is ever shared.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    factory: ItemFactory,
    items: Vec<Item>,
}

impl ItemStore {
    /// Empty store using the default SKU rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store whose SKU rule comes from `config`.
    pub fn with_config(config: &InventoryConfig) -> Self {
        Self {
            factory: ItemFactory::new(config.sku_rule),
            items: Vec::new(),
        }
    }

    pub fn factory(&self) -> &ItemFactory {
        &self.factory
    }

    /// All records, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and store a new record, merging into an existing one with the
    /// same SKU.
    ///
    /// Returns `false` (store unchanged) when validation fails.
    pub fn create(&mut self, name: &str, category: &str, quantity: f64) -> bool {
        match self.factory.create(name, category, quantity) {
            Ok(item) => {
                self.add_or_merge(item);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "item rejected");
                false
            }
        }
    }

    /// [`create`](Self::create) for loosely typed input.
    pub fn create_raw(&mut self, raw: &RawItem) -> bool {
        match self.factory.create_raw(raw) {
            Ok(item) => {
                self.add_or_merge(item);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "item rejected");
                false
            }
        }
    }

    /// Insert `item`, or add its quantity to the record that already carries
    /// its SKU. Returns the collection size afterwards.
    pub fn add_or_merge(&mut self, item: Item) -> usize {
        match self.items.iter_mut().find(|existing| existing.same_identity(&item)) {
            Some(existing) => {
                existing.add_quantity(item.quantity());
                tracing::debug!(
                    sku = %existing.sku(),
                    added = item.quantity(),
                    quantity = existing.quantity(),
                    "item merged"
                );
            }
            None => {
                tracing::debug!(sku = %item.sku(), name = item.name(), "item added");
                self.items.push(item);
            }
        }
        self.items.len()
    }

    /// Record with the given SKU, if any.
    pub fn get(&self, sku: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.sku() == sku)
    }

    /// Overwrite the fields present in `update` on the record with `sku`.
    pub fn try_update(&mut self, sku: &str, update: &ItemUpdate) -> DomainResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.sku() == sku)
            .ok_or_else(DomainError::not_found)?;
        update.apply_to(item);
        Ok(())
    }

    /// Like [`try_update`](Self::try_update), but a missing SKU is a no-op.
    pub fn update(&mut self, sku: &str, update: &ItemUpdate) {
        if let Err(err) = self.try_update(sku, update) {
            tracing::debug!(sku, error = %err, "update skipped");
        }
    }

    /// Remove every record with `sku`, returning how many were removed.
    pub fn try_delete(&mut self, sku: &str) -> DomainResult<usize> {
        let before = self.items.len();
        self.items.retain(|item| item.sku() != sku);
        match before - self.items.len() {
            0 => Err(DomainError::not_found()),
            removed => Ok(removed),
        }
    }

    /// Returns whether anything was removed.
    pub fn delete(&mut self, sku: &str) -> bool {
        match self.try_delete(sku) {
            Ok(removed) => {
                tracing::debug!(sku, removed, "item deleted");
                true
            }
            Err(err) => {
                tracing::debug!(sku, error = %err, "delete skipped");
                false
            }
        }
    }

    /// Records with a strictly positive quantity, in insertion order.
    pub fn in_stock(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_in_stock()).collect()
    }

    /// Records whose category equals `category` exactly (case-sensitive).
    pub fn items_in_category(&self, category: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }

    /// SKUs in insertion order.
    pub fn skus(&self) -> impl Iterator<Item = &Sku> {
        self.items.iter().map(Item::sku)
    }
}
