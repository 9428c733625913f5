//! Inventory provider trait for implementing datastore access.
//!
//! The persistence collaborator behind the tools is expressed as the
//! [`InventoryProvider`] trait: async-first, one method per query or
//! mutation, every method taking the [`RequestContext`] so implementations
//! can attribute mutations to the authenticated actor. The crate ships
//! [`InMemoryInventory`] as the reference implementation; embedders provide
//! their own to put a real datastore behind the tools.
//!
//! Business rules live on the provider side of this seam: derived path
//! strings and levels, leaf-only deletion for hierarchical entities,
//! active/zero-stock preconditions for part deletion, structural-node
//! restrictions, and stock quantity arithmetic. Tool handlers treat provider
//! errors from primary mutations as transport faults and never inspect them.

use crate::context::RequestContext;
use crate::model::{Part, PartCategory, StockItem, StockLocation};
use std::future::Future;

pub mod error;
pub mod in_memory;
pub mod types;

pub use error::ProviderError;
pub use in_memory::InMemoryInventory;
pub use types::{
    CategoryCreate, CategoryUpdate, LocationCreate, LocationUpdate, PartCreate, PartUpdate,
    StockItemCreate,
};

/// Datastore access trait for inventory entities.
///
/// List methods return `(total, page)` where `total` counts all matches
/// before pagination; search methods return only the truncated page and the
/// caller derives its count from the result length.
pub trait InventoryProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    // Parts

    /// Case-insensitive substring search across name, description, IPN, and
    /// keywords, truncated to `limit`.
    fn search_parts(
        &self,
        query: &str,
        limit: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Vec<Part>, Self::Error>> + Send;

    /// Look up a part by ID.
    fn get_part(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Option<Part>, Self::Error>> + Send;

    /// List parts, optionally filtered by owning category.
    fn list_parts(
        &self,
        category: Option<i64>,
        limit: usize,
        offset: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<Part>), Self::Error>> + Send;

    /// Create a part from the supplied fields.
    fn create_part(
        &self,
        fields: PartCreate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Part, Self::Error>> + Send;

    /// Apply the supplied field changes to a part.
    fn update_part(
        &self,
        id: i64,
        fields: PartUpdate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Part, Self::Error>> + Send;

    /// Delete a part. Requires the part be inactive with zero stock items.
    fn delete_part(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch an image from a URL and attach it to a part, datastore-side.
    fn attach_remote_image(
        &self,
        part: i64,
        url: &str,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    // Part categories

    /// Case-insensitive substring search across name and description.
    fn search_categories(
        &self,
        query: &str,
        limit: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Vec<PartCategory>, Self::Error>> + Send;

    /// Look up a category by ID.
    fn get_category(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Option<PartCategory>, Self::Error>> + Send;

    /// List categories, optionally filtered by parent.
    fn list_categories(
        &self,
        parent: Option<i64>,
        limit: usize,
        offset: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<PartCategory>), Self::Error>> + Send;

    /// Create a category from the supplied fields.
    fn create_category(
        &self,
        fields: CategoryCreate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<PartCategory, Self::Error>> + Send;

    /// Apply the supplied field changes to a category.
    fn update_category(
        &self,
        id: i64,
        fields: CategoryUpdate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<PartCategory, Self::Error>> + Send;

    /// Delete a category. Requires no subcategories and no parts.
    fn delete_category(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Number of parts directly in a category.
    fn count_category_parts(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Number of direct child categories.
    fn count_subcategories(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    // Stock locations

    /// Case-insensitive substring search across name and description.
    fn search_locations(
        &self,
        query: &str,
        limit: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Vec<StockLocation>, Self::Error>> + Send;

    /// Look up a location by ID.
    fn get_location(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Option<StockLocation>, Self::Error>> + Send;

    /// List locations, optionally filtered by parent.
    fn list_locations(
        &self,
        parent: Option<i64>,
        limit: usize,
        offset: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<StockLocation>), Self::Error>> + Send;

    /// Create a location from the supplied fields.
    fn create_location(
        &self,
        fields: LocationCreate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockLocation, Self::Error>> + Send;

    /// Apply the supplied field changes to a location.
    fn update_location(
        &self,
        id: i64,
        fields: LocationUpdate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockLocation, Self::Error>> + Send;

    /// Delete a location. Requires no sublocations and no stock items.
    fn delete_location(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Number of stock items directly in a location.
    fn count_location_items(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Number of direct child locations.
    fn count_sublocations(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    // Stock items

    /// List stock items, optionally filtered by part and/or location.
    fn list_stock(
        &self,
        part: Option<i64>,
        location: Option<i64>,
        limit: usize,
        offset: usize,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<StockItem>), Self::Error>> + Send;

    /// Look up a stock item by ID.
    fn get_stock_item(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<Option<StockItem>, Self::Error>> + Send;

    /// Create a stock item with an initial quantity.
    fn create_stock_item(
        &self,
        fields: StockItemCreate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send;

    /// Delete a stock item outright.
    fn delete_stock_item(
        &self,
        id: i64,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Increase a stock item's quantity. The quantity must be positive.
    fn add_stock(
        &self,
        item: i64,
        quantity: f64,
        notes: Option<&str>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send;

    /// Decrease a stock item's quantity. The quantity must be positive and
    /// no greater than the current quantity.
    fn take_stock(
        &self,
        item: i64,
        quantity: f64,
        notes: Option<&str>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send;

    /// Relocate a whole stock item to another location.
    fn move_stock(
        &self,
        item: i64,
        location: i64,
        notes: Option<&str>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send;
}
