//! Field bundles for provider create and update calls.
//!
//! Create bundles carry the required fields plus `Option`s for everything the
//! caller may omit; update bundles are all-`Option` and expose `is_empty()`
//! so handlers can reject no-op updates before touching the datastore.

/// Fields for creating a part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartCreate {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub ipn: Option<String>,
    pub keywords: Option<String>,
    pub units: Option<String>,
    pub minimum_stock: Option<f64>,
    pub purchaseable: Option<bool>,
    pub component: Option<bool>,
    pub assembly: Option<bool>,
    pub trackable: Option<bool>,
    pub is_virtual: Option<bool>,
}

/// Field changes for updating a part. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<i64>,
    pub active: Option<bool>,
    pub ipn: Option<String>,
    pub keywords: Option<String>,
    pub units: Option<String>,
    pub minimum_stock: Option<f64>,
}

impl PartUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.active.is_none()
            && self.ipn.is_none()
            && self.keywords.is_none()
            && self.units.is_none()
            && self.minimum_stock.is_none()
    }
}

/// Fields for creating a part category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<i64>,
    pub default_location: Option<i64>,
    pub structural: Option<bool>,
}

/// Field changes for updating a part category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<i64>,
    pub default_location: Option<i64>,
}

impl CategoryUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.parent.is_none()
            && self.default_location.is_none()
    }
}

/// Fields for creating a stock location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCreate {
    pub name: String,
    pub description: Option<String>,
    pub parent: Option<i64>,
    pub structural: Option<bool>,
    pub icon: Option<String>,
}

/// Field changes for updating a stock location.
///
/// `icon` is doubly optional: `None` leaves the icon untouched,
/// `Some(None)` clears it, `Some(Some(icon))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent: Option<i64>,
    pub icon: Option<Option<String>>,
}

impl LocationUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.parent.is_none()
            && self.icon.is_none()
    }
}

/// Fields for creating a stock item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockItemCreate {
    pub part: i64,
    pub quantity: f64,
    pub location: Option<i64>,
    pub batch: Option<String>,
    pub serial: Option<String>,
    pub notes: Option<String>,
}
