use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use stockroom_core::{DomainError, Entity};

use crate::sku::{Sku, SkuRule};

/// Minimum length of a name or category once whitespace is removed.
pub const MIN_LABEL_LEN: usize = 5;

/// Why a candidate record was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ItemValidationError {
    #[error("invalid item name {0:?}: needs at least 5 non-whitespace characters")]
    InvalidName(Option<String>),

    #[error("invalid item category {0:?}: needs at least 5 characters and no whitespace")]
    InvalidCategory(Option<String>),

    #[error("invalid item quantity {0:?}: must be a finite number")]
    InvalidQuantity(Option<String>),
}

impl From<ItemValidationError> for DomainError {
    fn from(err: ItemValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Whether a record currently has stock on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockStatus::InStock => f.write_str("IN STOCK"),
            StockStatus::OutOfStock => f.write_str("OUT OF STOCK"),
        }
    }
}

/// One stocked product line.
///
/// Fields are private: a record can only be obtained from [`ItemFactory`], so
/// every `Item` a store sees has passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    sku: Sku,
    name: String,
    category: String,
    quantity: f64,
}

impl Item {
    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Strictly positive quantity.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0.0
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_in_stock() {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    pub(crate) fn add_quantity(&mut self, delta: f64) {
        self.quantity += delta;
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
    }

    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }
}

impl Entity for Item {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

/// Loosely typed creation input, e.g. decoded from a JSON request body.
///
/// Every field may be absent or of the wrong type; [`ItemFactory::create_raw`]
/// turns such input into a validation failure instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub name: Option<JsonValue>,
    #[serde(default)]
    pub category: Option<JsonValue>,
    #[serde(default)]
    pub quantity: Option<JsonValue>,
}

/// True iff `name` has at least [`MIN_LABEL_LEN`] non-whitespace characters.
pub fn validate_name(name: &str) -> bool {
    name.chars().filter(|c| !c.is_whitespace()).count() >= MIN_LABEL_LEN
}

/// Like [`validate_name`], and additionally no whitespace anywhere.
pub fn validate_category(category: &str) -> bool {
    validate_name(category) && !category.chars().any(char::is_whitespace)
}

/// Only definedness and finiteness are checked; zero and negative counts pass.
pub fn validate_quantity(quantity: f64) -> bool {
    quantity.is_finite()
}

/// Validates raw inputs and builds [`Item`] records with a derived SKU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFactory {
    rule: SkuRule,
}

impl ItemFactory {
    pub fn new(rule: SkuRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> SkuRule {
        self.rule
    }

    pub fn derive_sku(&self, name: &str, category: &str) -> Sku {
        self.rule.derive(name, category)
    }

    /// Build a validated record, or report the first failing field.
    pub fn create(
        &self,
        name: &str,
        category: &str,
        quantity: f64,
    ) -> Result<Item, ItemValidationError> {
        if !validate_name(name) {
            return Err(ItemValidationError::InvalidName(Some(name.to_string())));
        }
        if !validate_category(category) {
            return Err(ItemValidationError::InvalidCategory(Some(
                category.to_string(),
            )));
        }
        if !validate_quantity(quantity) {
            return Err(ItemValidationError::InvalidQuantity(Some(
                quantity.to_string(),
            )));
        }

        Ok(Item {
            sku: self.derive_sku(name, category),
            name: name.to_string(),
            category: category.to_string(),
            quantity,
        })
    }

    /// Same as [`create`](Self::create) for loosely typed input.
    ///
    /// Missing fields and values of the wrong JSON type are rejected; numeric
    /// strings such as `"3"` are not coerced.
    pub fn create_raw(&self, raw: &RawItem) -> Result<Item, ItemValidationError> {
        let name = raw.name.as_ref().and_then(JsonValue::as_str).ok_or_else(|| {
            ItemValidationError::InvalidName(raw.name.as_ref().map(|v| v.to_string()))
        })?;
        let category = raw.category.as_ref().and_then(JsonValue::as_str).ok_or_else(|| {
            ItemValidationError::InvalidCategory(raw.category.as_ref().map(|v| v.to_string()))
        })?;
        let quantity = raw.quantity.as_ref().and_then(JsonValue::as_f64).ok_or_else(|| {
            ItemValidationError::InvalidQuantity(raw.quantity.as_ref().map(|v| v.to_string()))
        })?;

        self.create(name, category, quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn factory() -> ItemFactory {
        ItemFactory::default()
    }

    #[test]
    fn create_builds_record_with_derived_sku() {
        let item = factory().create("basket ball", "sports", 3.0).unwrap();
        assert_eq!(item.name(), "basket ball");
        assert_eq!(item.category(), "sports");
        assert_eq!(item.quantity(), 3.0);
        assert_eq!(item.sku(), "BASSP");
        assert_eq!(item.id(), item.sku());
    }

    #[test]
    fn name_length_ignores_whitespace() {
        assert!(validate_name("abcde"));
        assert!(validate_name("ab c de"));
        assert!(!validate_name("ab  cd"));
        assert!(!validate_name(""));
    }

    #[test]
    fn category_must_be_single_token() {
        assert!(validate_category("cooking"));
        assert!(!validate_category("home goods"));
        assert!(!validate_category("cooking\t"));
        assert!(!validate_category("food"));
    }

    #[test]
    fn quantity_accepts_zero_and_negative_but_not_nan() {
        assert!(validate_quantity(0.0));
        assert!(validate_quantity(-4.0));
        assert!(!validate_quantity(f64::NAN));
        assert!(!validate_quantity(f64::INFINITY));
    }

    #[test]
    fn create_rejects_short_name() {
        let err = factory().create("ball", "sports", 1.0).unwrap_err();
        match err {
            ItemValidationError::InvalidName(Some(name)) => assert_eq!(name, "ball"),
            other => panic!("Expected InvalidName, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_category_with_space() {
        let err = factory().create("kitchen pot", "home goods", 1.0).unwrap_err();
        assert!(matches!(err, ItemValidationError::InvalidCategory(_)));
    }

    #[test]
    fn create_rejects_nan_quantity() {
        let err = factory().create("kitchen pot", "cooking", f64::NAN).unwrap_err();
        assert!(matches!(err, ItemValidationError::InvalidQuantity(_)));
    }

    #[test]
    fn validation_error_converts_into_domain_error() {
        let err: DomainError = ItemValidationError::InvalidQuantity(None).into();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_raw_accepts_well_typed_json() {
        let raw: RawItem = serde_json::from_value(json!({
            "name": "kitchen pot",
            "category": "cooking",
            "quantity": 3
        }))
        .unwrap();
        let item = factory().create_raw(&raw).unwrap();
        assert_eq!(item.sku(), "KITCO");
        assert_eq!(item.quantity(), 3.0);
    }

    #[test]
    fn create_raw_rejects_missing_quantity() {
        let raw: RawItem =
            serde_json::from_value(json!({ "name": "kitchen pot", "category": "cooking" })).unwrap();
        assert_eq!(
            factory().create_raw(&raw).unwrap_err(),
            ItemValidationError::InvalidQuantity(None)
        );
    }

    #[test]
    fn create_raw_rejects_numeric_string_quantity() {
        let raw: RawItem = serde_json::from_value(json!({
            "name": "kitchen pot",
            "category": "cooking",
            "quantity": "3"
        }))
        .unwrap();
        assert!(matches!(
            factory().create_raw(&raw),
            Err(ItemValidationError::InvalidQuantity(Some(_)))
        ));
    }

    #[test]
    fn create_raw_rejects_non_string_name() {
        let raw: RawItem = serde_json::from_value(json!({
            "name": 12345,
            "category": "cooking",
            "quantity": 1
        }))
        .unwrap();
        assert!(matches!(
            factory().create_raw(&raw),
            Err(ItemValidationError::InvalidName(Some(_)))
        ));
    }

    #[test]
    fn stock_status_follows_quantity_sign() {
        let f = factory();
        assert_eq!(f.create("football", "sports", 1.0).unwrap().stock_status(), StockStatus::InStock);
        assert_eq!(f.create("football", "sports", 0.0).unwrap().stock_status(), StockStatus::OutOfStock);
        assert_eq!(f.create("football", "sports", -2.0).unwrap().stock_status(), StockStatus::OutOfStock);
        assert_eq!(StockStatus::OutOfStock.to_string(), "OUT OF STOCK");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: names with fewer than five non-whitespace characters never validate.
        #[test]
        fn short_names_are_rejected(name in "[a-z]{0,2} ?[a-z]{0,2}", qty in -100.0f64..100.0) {
            let result = ItemFactory::default().create(&name, "sports", qty);
            prop_assert!(matches!(result, Err(ItemValidationError::InvalidName(_))), "accepted name {:?}", name);
        }

        /// Property: any whitespace in the category is rejected regardless of length.
        #[test]
        fn categories_with_whitespace_are_rejected(
            head in "[a-z]{5,10}",
            ws in prop::sample::select(vec![" ", "\t", "\n"]),
            tail in "[a-z]{0,5}",
        ) {
            let category = format!("{head}{ws}{tail}");
            let result = ItemFactory::default().create("kitchen pot", &category, 1.0);
            prop_assert!(matches!(result, Err(ItemValidationError::InvalidCategory(_))));
        }
    }
}
