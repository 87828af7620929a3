//! Category Index
//!
//! Derived from the live product collection, never stored.

use std::collections::{BTreeMap, BTreeSet};

/// category -> distinct non-empty subcategories
///
/// Serialized as `{"Main": ["Fish", "Meat"], "Drinks": []}`. `BTree*` keeps
/// keys and values sorted.
pub type CategoryIndex = BTreeMap<String, BTreeSet<String>>;
