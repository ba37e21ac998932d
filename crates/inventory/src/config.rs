//! Store configuration, read from the environment.

use crate::sku::SkuRule;

/// Environment variable selecting the SKU derivation rule.
pub const SKU_RULE_ENV: &str = "STOCKROOM_SKU_RULE";

/// Settings fixed for the lifetime of an [`ItemStore`](crate::ItemStore).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryConfig {
    pub sku_rule: SkuRule,
}

impl InventoryConfig {
    /// Load from `STOCKROOM_SKU_RULE` (`strip` or `words`).
    ///
    /// Missing or unrecognised values fall back to the defaults.
    pub fn from_env() -> Self {
        let sku_rule = match std::env::var(SKU_RULE_ENV) {
            Ok(raw) => parse_sku_rule(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown {}; using default SKU rule", SKU_RULE_ENV);
                SkuRule::default()
            }),
            Err(_) => SkuRule::default(),
        };
        Self { sku_rule }
    }
}

fn parse_sku_rule(raw: &str) -> Option<SkuRule> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strip" | "strip_and_slice" => Some(SkuRule::StripAndSlice),
        "words" | "word_prefix" => Some(SkuRule::WordPrefix),
        _ => None,
    }
}
