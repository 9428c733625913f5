//! Inventory domain entities.
//!
//! Plain data structs mirroring the backing store's shape. Optional fields are
//! explicit `Option`s so projections handle absence by contract instead of
//! probing at runtime. These types carry no serde derives; the wire shape is
//! owned by the [`crate::serialize`] module, which projects a fixed key set
//! with documented defaults.

use chrono::{DateTime, Utc};

/// A part: something that can be stocked, built, or purchased.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub pk: i64,
    pub name: String,
    pub description: Option<String>,
    /// Owning category reference
    pub category: Option<i64>,
    /// Internal part number
    pub ipn: Option<String>,
    pub keywords: Option<String>,
    pub units: Option<String>,
    pub minimum_stock: Option<f64>,
    pub purchaseable: bool,
    pub component: bool,
    pub assembly: bool,
    pub trackable: bool,
    /// Serialized under the key `virtual`
    pub is_virtual: bool,
    pub active: bool,
    /// Image URL, set via the remote-image fetch
    pub image: Option<String>,
}

impl Part {
    /// Display name: `"<IPN> | <name>"` when an IPN is set, otherwise the name.
    pub fn full_name(&self) -> String {
        match self.ipn.as_deref() {
            Some(ipn) if !ipn.is_empty() => format!("{} | {}", ipn, self.name),
            _ => self.name.clone(),
        }
    }
}

/// A quantity of a part held somewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub pk: i64,
    /// Owning part reference
    pub part: i64,
    pub quantity: f64,
    pub serial: Option<String>,
    pub batch: Option<String>,
    /// Holding location reference; `None` means unassigned
    pub location: Option<i64>,
    /// Status code; newly created items default to 10
    pub status: i64,
    /// Human label for the status code
    pub status_label: Option<String>,
    pub notes: Option<String>,
    pub updated: Option<DateTime<Utc>>,
    /// Serialized as `true` when absent
    pub in_stock: Option<bool>,
}

/// A node in the location hierarchy.
///
/// `pathstring` and `level` are derived from the parent chain by the store and
/// must never be written directly by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct StockLocation {
    pub pk: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<i64>,
    /// Ancestor names joined with `/`, ending in this node's name
    pub pathstring: String,
    /// Nesting depth; roots are level 0
    pub level: u32,
    /// Structural locations organize the tree and cannot hold stock directly
    pub structural: bool,
    pub external: bool,
    pub icon: Option<String>,
}

/// A node in the category hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct PartCategory {
    pub pk: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<i64>,
    pub pathstring: String,
    pub level: u32,
    /// Structural categories cannot hold parts directly
    pub structural: bool,
    pub starred: bool,
    pub icon: Option<String>,
    pub default_location: Option<i64>,
}

/// Kind of stock mutation recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    Created,
    Added,
    Removed,
    Moved,
}

/// One audit-trail record for a stock mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct StockHistoryEntry {
    /// Stock item the mutation applied to
    pub item: i64,
    pub action: StockAction,
    pub quantity: f64,
    /// Username of the actor, when the request was authenticated
    pub user: Option<String>,
    pub notes: Option<String>,
    pub at: DateTime<Utc>,
}
