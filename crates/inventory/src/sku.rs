//! Stock keeping unit codes derived from an item's name and category.

use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

/// Number of characters taken from the item name.
const NAME_PREFIX_LEN: usize = 3;
/// Number of characters taken from the category.
const CATEGORY_PREFIX_LEN: usize = 2;

/// Stock keeping unit: the unique key of a record within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Wrap an already-derived code (e.g. one typed by a user for a lookup).
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Sku {}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Sku {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Sku {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// How the three-character name prefix of a SKU is collected.
///
/// The rules agree on names separated by plain spaces. They diverge when a name
/// carries other whitespace (tabs, newlines): `WordPrefix` only splits on
/// spaces, so such characters count towards the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkuRule {
    /// Remove all whitespace from the name, then take the first three characters.
    #[default]
    StripAndSlice,
    /// Walk the space-separated words of the name, taking characters until
    /// three are collected.
    WordPrefix,
}

impl SkuRule {
    /// Derive the SKU for `name`/`category`.
    ///
    /// Pure: the same inputs always yield the same code.
    pub fn derive(self, name: &str, category: &str) -> Sku {
        let mut code = match self {
            SkuRule::StripAndSlice => strip_and_slice(name),
            SkuRule::WordPrefix => word_prefix(name),
        };
        code.extend(category.chars().take(CATEGORY_PREFIX_LEN));
        Sku(code.to_uppercase())
    }
}

fn strip_and_slice(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .take(NAME_PREFIX_LEN)
        .collect()
}

fn word_prefix(name: &str) -> String {
    let mut prefix = String::with_capacity(NAME_PREFIX_LEN);
    let mut taken = 0;
    for word in name.split(' ') {
        if taken == NAME_PREFIX_LEN {
            break;
        }
        for c in word.chars().take(NAME_PREFIX_LEN - taken) {
            prefix.push(c);
            taken += 1;
        }
    }
    prefix
}
