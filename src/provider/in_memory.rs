//! In-memory inventory implementation.
//!
//! A thread-safe reference implementation of [`InventoryProvider`] backed by
//! `BTreeMap`s behind a tokio `RwLock`. Designed for tests, the stdio demo
//! binary, and embedders that want a self-contained server without a real
//! datastore.
//!
//! The business rules a real inventory backend enforces live here so the tool
//! layer above can stay thin:
//!
//! * per-entity pk sequences starting at 1
//! * derived `pathstring`/`level` for the location and category trees,
//!   recomputed for a node and its descendants on every hierarchy change
//! * cycle rejection when reparenting
//! * leaf-only deletion for locations and categories
//! * part deletion requires the part be inactive with zero stock items
//! * structural locations cannot hold stock, structural categories cannot
//!   hold parts
//! * stock arithmetic: positive quantities only, removal bounded by the
//!   current quantity
//!
//! Every stock mutation appends to an audit trail readable via
//! [`InMemoryInventory::stock_history`], recording the acting user from the
//! request context.

use crate::context::RequestContext;
use crate::model::{
    Part, PartCategory, StockAction, StockHistoryEntry, StockItem, StockLocation,
};
use crate::provider::error::ProviderError;
use crate::provider::types::{
    CategoryCreate, CategoryUpdate, LocationCreate, LocationUpdate, PartCreate, PartUpdate,
    StockItemCreate,
};
use crate::provider::InventoryProvider;
use chrono::Utc;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct InventoryState {
    parts: BTreeMap<i64, Part>,
    categories: BTreeMap<i64, PartCategory>,
    locations: BTreeMap<i64, StockLocation>,
    stock: BTreeMap<i64, StockItem>,
    history: Vec<StockHistoryEntry>,
    next_part: i64,
    next_category: i64,
    next_location: i64,
    next_stock: i64,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            parts: BTreeMap::new(),
            categories: BTreeMap::new(),
            locations: BTreeMap::new(),
            stock: BTreeMap::new(),
            history: Vec::new(),
            next_part: 1,
            next_category: 1,
            next_location: 1,
            next_stock: 1,
        }
    }
}

/// Thread-safe in-memory inventory store.
///
/// Clones share the same underlying state. Entities iterate in pk order, so
/// list and search results are deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    state: Arc<RwLock<InventoryState>>,
}

impl InMemoryInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stock audit trail, in mutation order.
    pub async fn stock_history(&self) -> Vec<StockHistoryEntry> {
        let state = self.state.read().await;
        state.history.clone()
    }

    /// Drop all entities and history (useful for testing).
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        *state = InventoryState::default();
    }
}

fn next_pk(counter: &mut i64) -> i64 {
    let pk = *counter;
    *counter += 1;
    pk
}

fn text_matches(field: Option<&str>, needle: &str) -> bool {
    field
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// Walk up from `parent`; true when `id` appears on the ancestor chain.
fn location_cycle(locations: &BTreeMap<i64, StockLocation>, id: i64, parent: i64) -> bool {
    let mut cursor = Some(parent);
    while let Some(pk) = cursor {
        if pk == id {
            return true;
        }
        cursor = locations.get(&pk).and_then(|node| node.parent);
    }
    false
}

fn category_cycle(categories: &BTreeMap<i64, PartCategory>, id: i64, parent: i64) -> bool {
    let mut cursor = Some(parent);
    while let Some(pk) = cursor {
        if pk == id {
            return true;
        }
        cursor = categories.get(&pk).and_then(|node| node.parent);
    }
    false
}

/// Recompute `pathstring`/`level` for a location and all its descendants.
fn rebuild_location_paths(locations: &mut BTreeMap<i64, StockLocation>, pk: i64) {
    let computed = {
        let Some(node) = locations.get(&pk) else {
            return;
        };
        match node.parent.and_then(|parent| locations.get(&parent)) {
            Some(parent) => (
                format!("{}/{}", parent.pathstring, node.name),
                parent.level + 1,
            ),
            None => (node.name.clone(), 0),
        }
    };

    if let Some(node) = locations.get_mut(&pk) {
        node.pathstring = computed.0;
        node.level = computed.1;
    }

    let children: Vec<i64> = locations
        .values()
        .filter(|node| node.parent == Some(pk))
        .map(|node| node.pk)
        .collect();
    for child in children {
        rebuild_location_paths(locations, child);
    }
}

/// Recompute `pathstring`/`level` for a category and all its descendants.
fn rebuild_category_paths(categories: &mut BTreeMap<i64, PartCategory>, pk: i64) {
    let computed = {
        let Some(node) = categories.get(&pk) else {
            return;
        };
        match node.parent.and_then(|parent| categories.get(&parent)) {
            Some(parent) => (
                format!("{}/{}", parent.pathstring, node.name),
                parent.level + 1,
            ),
            None => (node.name.clone(), 0),
        }
    };

    if let Some(node) = categories.get_mut(&pk) {
        node.pathstring = computed.0;
        node.level = computed.1;
    }

    let children: Vec<i64> = categories
        .values()
        .filter(|node| node.parent == Some(pk))
        .map(|node| node.pk)
        .collect();
    for child in children {
        rebuild_category_paths(categories, child);
    }
}

impl InventoryProvider for InMemoryInventory {
    type Error = ProviderError;

    fn search_parts(
        &self,
        query: &str,
        limit: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Vec<Part>, Self::Error>> + Send {
        async move {
            let needle = query.to_lowercase();
            let state = self.state.read().await;
            let results = state
                .parts
                .values()
                .filter(|part| {
                    part.name.to_lowercase().contains(&needle)
                        || text_matches(part.description.as_deref(), &needle)
                        || text_matches(part.ipn.as_deref(), &needle)
                        || text_matches(part.keywords.as_deref(), &needle)
                })
                .take(limit)
                .cloned()
                .collect();
            Ok(results)
        }
    }

    fn get_part(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Option<Part>, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            Ok(state.parts.get(&id).cloned())
        }
    }

    fn list_parts(
        &self,
        category: Option<i64>,
        limit: usize,
        offset: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<Part>), Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            let matching: Vec<&Part> = state
                .parts
                .values()
                .filter(|part| category.is_none_or(|c| part.category == Some(c)))
                .collect();
            let total = matching.len() as u64;
            let page = matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect();
            Ok((total, page))
        }
    }

    fn create_part(
        &self,
        fields: PartCreate,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Part, Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if let Some(category) = fields.category {
                let node = state
                    .categories
                    .get(&category)
                    .ok_or_else(|| ProviderError::invalid_reference(format!(
                        "Part category {} does not exist",
                        category
                    )))?;
                if node.structural {
                    return Err(ProviderError::constraint(format!(
                        "Part category {} is structural and cannot directly contain parts",
                        category
                    )));
                }
            }

            let pk = next_pk(&mut state.next_part);
            let part = Part {
                pk,
                name: fields.name,
                description: fields.description,
                category: fields.category,
                ipn: fields.ipn,
                keywords: fields.keywords,
                units: fields.units,
                minimum_stock: fields.minimum_stock,
                purchaseable: fields.purchaseable.unwrap_or(false),
                component: fields.component.unwrap_or(false),
                assembly: fields.assembly.unwrap_or(false),
                trackable: fields.trackable.unwrap_or(false),
                is_virtual: fields.is_virtual.unwrap_or(false),
                active: true,
                image: None,
            };
            state.parts.insert(pk, part.clone());
            Ok(part)
        }
    }

    fn update_part(
        &self,
        id: i64,
        fields: PartUpdate,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Part, Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if !state.parts.contains_key(&id) {
                return Err(ProviderError::not_found("Part", id));
            }

            if let Some(category) = fields.category {
                let node = state
                    .categories
                    .get(&category)
                    .ok_or_else(|| ProviderError::invalid_reference(format!(
                        "Part category {} does not exist",
                        category
                    )))?;
                if node.structural {
                    return Err(ProviderError::constraint(format!(
                        "Part category {} is structural and cannot directly contain parts",
                        category
                    )));
                }
            }

            let part = state
                .parts
                .get_mut(&id)
                .ok_or_else(|| ProviderError::not_found("Part", id))?;

            if let Some(name) = fields.name {
                part.name = name;
            }
            if let Some(description) = fields.description {
                part.description = Some(description);
            }
            if let Some(category) = fields.category {
                part.category = Some(category);
            }
            if let Some(active) = fields.active {
                part.active = active;
            }
            if let Some(ipn) = fields.ipn {
                part.ipn = Some(ipn);
            }
            if let Some(keywords) = fields.keywords {
                part.keywords = Some(keywords);
            }
            if let Some(units) = fields.units {
                part.units = Some(units);
            }
            if let Some(minimum_stock) = fields.minimum_stock {
                part.minimum_stock = Some(minimum_stock);
            }

            Ok(part.clone())
        }
    }

    fn delete_part(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            let part = state
                .parts
                .get(&id)
                .ok_or_else(|| ProviderError::not_found("Part", id))?;
            if part.active {
                return Err(ProviderError::constraint(format!(
                    "Part {} must be inactive before deletion",
                    id
                )));
            }
            if state.stock.values().any(|item| item.part == id) {
                return Err(ProviderError::constraint(format!(
                    "Part {} still has stock items",
                    id
                )));
            }

            state.parts.remove(&id);
            Ok(())
        }
    }

    fn attach_remote_image(
        &self,
        part: i64,
        url: &str,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ProviderError::invalid_data(format!(
                    "Invalid image URL '{}'",
                    url
                )));
            }

            let mut state = self.state.write().await;
            let record = state
                .parts
                .get_mut(&part)
                .ok_or_else(|| ProviderError::not_found("Part", part))?;
            record.image = Some(url.to_string());
            Ok(())
        }
    }

    fn search_categories(
        &self,
        query: &str,
        limit: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Vec<PartCategory>, Self::Error>> + Send {
        async move {
            let needle = query.to_lowercase();
            let state = self.state.read().await;
            let results = state
                .categories
                .values()
                .filter(|category| {
                    category.name.to_lowercase().contains(&needle)
                        || text_matches(category.description.as_deref(), &needle)
                })
                .take(limit)
                .cloned()
                .collect();
            Ok(results)
        }
    }

    fn get_category(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Option<PartCategory>, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            Ok(state.categories.get(&id).cloned())
        }
    }

    fn list_categories(
        &self,
        parent: Option<i64>,
        limit: usize,
        offset: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<PartCategory>), Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            let matching: Vec<&PartCategory> = state
                .categories
                .values()
                .filter(|category| parent.is_none_or(|p| category.parent == Some(p)))
                .collect();
            let total = matching.len() as u64;
            let page = matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect();
            Ok((total, page))
        }
    }

    fn create_category(
        &self,
        fields: CategoryCreate,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<PartCategory, Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if let Some(parent) = fields.parent {
                if !state.categories.contains_key(&parent) {
                    return Err(ProviderError::invalid_reference(format!(
                        "Part category {} does not exist",
                        parent
                    )));
                }
            }
            if let Some(location) = fields.default_location {
                if !state.locations.contains_key(&location) {
                    return Err(ProviderError::invalid_reference(format!(
                        "Stock location {} does not exist",
                        location
                    )));
                }
            }

            let pk = next_pk(&mut state.next_category);
            let category = PartCategory {
                pk,
                name: fields.name,
                description: fields.description,
                parent: fields.parent,
                pathstring: String::new(),
                level: 0,
                structural: fields.structural.unwrap_or(false),
                starred: false,
                icon: None,
                default_location: fields.default_location,
            };
            state.categories.insert(pk, category);
            rebuild_category_paths(&mut state.categories, pk);

            Ok(state.categories[&pk].clone())
        }
    }

    fn update_category(
        &self,
        id: i64,
        fields: CategoryUpdate,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<PartCategory, Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if !state.categories.contains_key(&id) {
                return Err(ProviderError::not_found("Part category", id));
            }

            if let Some(parent) = fields.parent {
                if !state.categories.contains_key(&parent) {
                    return Err(ProviderError::invalid_reference(format!(
                        "Part category {} does not exist",
                        parent
                    )));
                }
                if category_cycle(&state.categories, id, parent) {
                    return Err(ProviderError::constraint(format!(
                        "Part category {} cannot be parented to its own descendant",
                        id
                    )));
                }
            }
            if let Some(location) = fields.default_location {
                if !state.locations.contains_key(&location) {
                    return Err(ProviderError::invalid_reference(format!(
                        "Stock location {} does not exist",
                        location
                    )));
                }
            }

            {
                let category = state
                    .categories
                    .get_mut(&id)
                    .ok_or_else(|| ProviderError::not_found("Part category", id))?;
                if let Some(name) = fields.name {
                    category.name = name;
                }
                if let Some(description) = fields.description {
                    category.description = Some(description);
                }
                if let Some(parent) = fields.parent {
                    category.parent = Some(parent);
                }
                if let Some(location) = fields.default_location {
                    category.default_location = Some(location);
                }
            }
            rebuild_category_paths(&mut state.categories, id);

            Ok(state.categories[&id].clone())
        }
    }

    fn delete_category(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if !state.categories.contains_key(&id) {
                return Err(ProviderError::not_found("Part category", id));
            }
            if state
                .categories
                .values()
                .any(|category| category.parent == Some(id))
            {
                return Err(ProviderError::constraint(format!(
                    "Part category {} still has subcategories",
                    id
                )));
            }
            if state.parts.values().any(|part| part.category == Some(id)) {
                return Err(ProviderError::constraint(format!(
                    "Part category {} still has parts",
                    id
                )));
            }

            state.categories.remove(&id);
            Ok(())
        }
    }

    fn count_category_parts(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            if !state.categories.contains_key(&id) {
                return Err(ProviderError::not_found("Part category", id));
            }
            Ok(state
                .parts
                .values()
                .filter(|part| part.category == Some(id))
                .count() as u64)
        }
    }

    fn count_subcategories(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            if !state.categories.contains_key(&id) {
                return Err(ProviderError::not_found("Part category", id));
            }
            Ok(state
                .categories
                .values()
                .filter(|category| category.parent == Some(id))
                .count() as u64)
        }
    }

    fn search_locations(
        &self,
        query: &str,
        limit: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Vec<StockLocation>, Self::Error>> + Send {
        async move {
            let needle = query.to_lowercase();
            let state = self.state.read().await;
            let results = state
                .locations
                .values()
                .filter(|location| {
                    location.name.to_lowercase().contains(&needle)
                        || text_matches(location.description.as_deref(), &needle)
                })
                .take(limit)
                .cloned()
                .collect();
            Ok(results)
        }
    }

    fn get_location(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Option<StockLocation>, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            Ok(state.locations.get(&id).cloned())
        }
    }

    fn list_locations(
        &self,
        parent: Option<i64>,
        limit: usize,
        offset: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<StockLocation>), Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            let matching: Vec<&StockLocation> = state
                .locations
                .values()
                .filter(|location| parent.is_none_or(|p| location.parent == Some(p)))
                .collect();
            let total = matching.len() as u64;
            let page = matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect();
            Ok((total, page))
        }
    }

    fn create_location(
        &self,
        fields: LocationCreate,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<StockLocation, Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if let Some(parent) = fields.parent {
                if !state.locations.contains_key(&parent) {
                    return Err(ProviderError::invalid_reference(format!(
                        "Stock location {} does not exist",
                        parent
                    )));
                }
            }

            let pk = next_pk(&mut state.next_location);
            let location = StockLocation {
                pk,
                name: fields.name,
                description: fields.description,
                parent: fields.parent,
                pathstring: String::new(),
                level: 0,
                structural: fields.structural.unwrap_or(false),
                external: false,
                icon: fields.icon,
            };
            state.locations.insert(pk, location);
            rebuild_location_paths(&mut state.locations, pk);

            Ok(state.locations[&pk].clone())
        }
    }

    fn update_location(
        &self,
        id: i64,
        fields: LocationUpdate,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<StockLocation, Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if !state.locations.contains_key(&id) {
                return Err(ProviderError::not_found("Stock location", id));
            }

            if let Some(parent) = fields.parent {
                if !state.locations.contains_key(&parent) {
                    return Err(ProviderError::invalid_reference(format!(
                        "Stock location {} does not exist",
                        parent
                    )));
                }
                if location_cycle(&state.locations, id, parent) {
                    return Err(ProviderError::constraint(format!(
                        "Stock location {} cannot be parented to its own descendant",
                        id
                    )));
                }
            }

            {
                let location = state
                    .locations
                    .get_mut(&id)
                    .ok_or_else(|| ProviderError::not_found("Stock location", id))?;
                if let Some(name) = fields.name {
                    location.name = name;
                }
                if let Some(description) = fields.description {
                    location.description = Some(description);
                }
                if let Some(parent) = fields.parent {
                    location.parent = Some(parent);
                }
                if let Some(icon) = fields.icon {
                    location.icon = icon;
                }
            }
            rebuild_location_paths(&mut state.locations, id);

            Ok(state.locations[&id].clone())
        }
    }

    fn delete_location(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;

            if !state.locations.contains_key(&id) {
                return Err(ProviderError::not_found("Stock location", id));
            }
            if state
                .locations
                .values()
                .any(|location| location.parent == Some(id))
            {
                return Err(ProviderError::constraint(format!(
                    "Stock location {} still has sublocations",
                    id
                )));
            }
            if state.stock.values().any(|item| item.location == Some(id)) {
                return Err(ProviderError::constraint(format!(
                    "Stock location {} still has stock items",
                    id
                )));
            }

            state.locations.remove(&id);
            Ok(())
        }
    }

    fn count_location_items(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            if !state.locations.contains_key(&id) {
                return Err(ProviderError::not_found("Stock location", id));
            }
            Ok(state
                .stock
                .values()
                .filter(|item| item.location == Some(id))
                .count() as u64)
        }
    }

    fn count_sublocations(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            if !state.locations.contains_key(&id) {
                return Err(ProviderError::not_found("Stock location", id));
            }
            Ok(state
                .locations
                .values()
                .filter(|location| location.parent == Some(id))
                .count() as u64)
        }
    }

    fn list_stock(
        &self,
        part: Option<i64>,
        location: Option<i64>,
        limit: usize,
        offset: usize,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(u64, Vec<StockItem>), Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            let matching: Vec<&StockItem> = state
                .stock
                .values()
                .filter(|item| part.is_none_or(|p| item.part == p))
                .filter(|item| location.is_none_or(|l| item.location == Some(l)))
                .collect();
            let total = matching.len() as u64;
            let page = matching
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect();
            Ok((total, page))
        }
    }

    fn get_stock_item(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<Option<StockItem>, Self::Error>> + Send {
        async move {
            let state = self.state.read().await;
            Ok(state.stock.get(&id).cloned())
        }
    }

    fn create_stock_item(
        &self,
        fields: StockItemCreate,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send {
        let user = context.actor_name().map(str::to_string);
        async move {
            let mut state = self.state.write().await;

            if fields.quantity < 0.0 {
                return Err(ProviderError::invalid_data(
                    "Stock quantity cannot be negative",
                ));
            }
            if !state.parts.contains_key(&fields.part) {
                return Err(ProviderError::invalid_reference(format!(
                    "Part {} does not exist",
                    fields.part
                )));
            }
            if let Some(location) = fields.location {
                let node = state
                    .locations
                    .get(&location)
                    .ok_or_else(|| ProviderError::invalid_reference(format!(
                        "Stock location {} does not exist",
                        location
                    )))?;
                if node.structural {
                    return Err(ProviderError::constraint(format!(
                        "Stock location {} is structural and cannot directly hold stock",
                        location
                    )));
                }
            }

            let now = Utc::now();
            let pk = next_pk(&mut state.next_stock);
            let item = StockItem {
                pk,
                part: fields.part,
                quantity: fields.quantity,
                serial: fields.serial,
                batch: fields.batch,
                location: fields.location,
                status: 10,
                status_label: Some("OK".to_string()),
                notes: fields.notes.clone(),
                updated: Some(now),
                in_stock: None,
            };
            state.stock.insert(pk, item.clone());
            state.history.push(StockHistoryEntry {
                item: pk,
                action: StockAction::Created,
                quantity: fields.quantity,
                user,
                notes: fields.notes,
                at: now,
            });

            Ok(item)
        }
    }

    fn delete_stock_item(
        &self,
        id: i64,
        _context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let mut state = self.state.write().await;
            if state.stock.remove(&id).is_none() {
                return Err(ProviderError::not_found("Stock item", id));
            }
            Ok(())
        }
    }

    fn add_stock(
        &self,
        item: i64,
        quantity: f64,
        notes: Option<&str>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send {
        let user = context.actor_name().map(str::to_string);
        let notes = notes.map(str::to_string);
        async move {
            if quantity <= 0.0 {
                return Err(ProviderError::invalid_data(
                    "Stock quantity must be positive",
                ));
            }

            let mut state = self.state.write().await;
            let now = Utc::now();
            let record = state
                .stock
                .get_mut(&item)
                .ok_or_else(|| ProviderError::not_found("Stock item", item))?;
            record.quantity += quantity;
            record.updated = Some(now);
            let snapshot = record.clone();

            state.history.push(StockHistoryEntry {
                item,
                action: StockAction::Added,
                quantity,
                user,
                notes,
                at: now,
            });

            Ok(snapshot)
        }
    }

    fn take_stock(
        &self,
        item: i64,
        quantity: f64,
        notes: Option<&str>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send {
        let user = context.actor_name().map(str::to_string);
        let notes = notes.map(str::to_string);
        async move {
            if quantity <= 0.0 {
                return Err(ProviderError::invalid_data(
                    "Stock quantity must be positive",
                ));
            }

            let mut state = self.state.write().await;
            let now = Utc::now();
            let record = state
                .stock
                .get_mut(&item)
                .ok_or_else(|| ProviderError::not_found("Stock item", item))?;
            if quantity > record.quantity {
                return Err(ProviderError::constraint(format!(
                    "Stock item {} holds {}, cannot remove {}",
                    item, record.quantity, quantity
                )));
            }
            record.quantity -= quantity;
            record.updated = Some(now);
            let snapshot = record.clone();

            state.history.push(StockHistoryEntry {
                item,
                action: StockAction::Removed,
                quantity,
                user,
                notes,
                at: now,
            });

            Ok(snapshot)
        }
    }

    fn move_stock(
        &self,
        item: i64,
        location: i64,
        notes: Option<&str>,
        context: &RequestContext,
    ) -> impl Future<Output = Result<StockItem, Self::Error>> + Send {
        let user = context.actor_name().map(str::to_string);
        let notes = notes.map(str::to_string);
        async move {
            let mut state = self.state.write().await;

            let destination = state
                .locations
                .get(&location)
                .ok_or_else(|| ProviderError::invalid_reference(format!(
                    "Stock location {} does not exist",
                    location
                )))?;
            if destination.structural {
                return Err(ProviderError::constraint(format!(
                    "Stock location {} is structural and cannot directly hold stock",
                    location
                )));
            }

            let now = Utc::now();
            let record = state
                .stock
                .get_mut(&item)
                .ok_or_else(|| ProviderError::not_found("Stock item", item))?;
            record.location = Some(location);
            record.updated = Some(now);
            let moved_quantity = record.quantity;
            let snapshot = record.clone();

            state.history.push(StockHistoryEntry {
                item,
                action: StockAction::Moved,
                quantity: moved_quantity,
                user,
                notes,
                at: now,
            });

            Ok(snapshot)
        }
    }
}
