//! Tabler icon validation.
//!
//! Locations and categories may carry an icon identifier of the form
//! `ti:<name>:<variant>`. The [`IconRegistry`] knows every valid name and its
//! variants, loaded once from a bundled `icons.json` at server construction
//! and immutable afterwards. Validation is fail-open: when no registry file
//! can be found, every icon is accepted rather than blocking writes.

use log::{info, warn};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Candidate locations for `icons.json`, checked in order; first hit wins.
const DEFAULT_ICON_PATHS: &[&str] = &[
    "data/tabler-icons/icons.json",
    "/usr/local/share/tabler-icons/icons.json",
    "/usr/share/tabler-icons/icons.json",
];

/// Errors while loading an icon registry file.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Failed to read icon registry: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse icon registry: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Registry of valid icon names and their variants.
///
/// Stored as sorted maps so suggestion lists and variant listings are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: BTreeMap<String, BTreeSet<String>>,
}

impl IconRegistry {
    /// An empty registry. Validation against it accepts everything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan the default candidate paths for a registry file.
    ///
    /// Unreadable or unparseable candidates are logged and skipped; if no
    /// candidate works the registry is empty and validation is disabled.
    pub fn discover() -> Self {
        Self::from_path_list(DEFAULT_ICON_PATHS)
    }

    /// Scan an explicit candidate path list, first readable file wins.
    pub fn from_path_list<P: AsRef<Path>>(paths: &[P]) -> Self {
        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            match Self::from_file(path) {
                Ok(registry) => {
                    info!(
                        "Loaded {} Tabler icons from {}",
                        registry.len(),
                        path.display()
                    );
                    return registry;
                }
                Err(e) => {
                    warn!("Failed to load icons from {}: {}", path.display(), e);
                }
            }
        }

        warn!("Could not find tabler-icons icons.json - icon validation disabled");
        Self::empty()
    }

    /// Load a registry from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let raw = std::fs::read_to_string(path)?;
        let data: serde_json::Map<String, Value> = serde_json::from_str(&raw)?;
        Ok(Self::from_entries(&data))
    }

    /// Build a registry from already-parsed JSON.
    ///
    /// The expected shape is a top-level object of
    /// `name -> {"variants": {variant -> ...}}`. A missing or non-object
    /// `variants` yields an icon with no valid variants.
    pub fn from_json(data: Value) -> Result<Self, IconError> {
        let map: serde_json::Map<String, Value> = serde_json::from_value(data)?;
        Ok(Self::from_entries(&map))
    }

    fn from_entries(data: &serde_json::Map<String, Value>) -> Self {
        let mut icons = BTreeMap::new();
        for (name, info) in data {
            let variants = match info.get("variants").and_then(Value::as_object) {
                Some(variants) => variants.keys().cloned().collect(),
                None => BTreeSet::new(),
            };
            icons.insert(name.clone(), variants);
        }
        Self { icons }
    }

    /// Number of icon names in the registry.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// True when no registry file was loaded.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Validate an icon identifier like `ti:tool:outline`.
    ///
    /// `Ok(())` means valid; `Err` carries an advisory message for the caller.
    /// Empty strings and any case-folding of `none` are always valid (meaning
    /// "no icon"), and an empty registry accepts everything.
    pub fn validate(&self, icon: &str) -> Result<(), String> {
        if icon.is_empty() || icon.eq_ignore_ascii_case("none") {
            return Ok(());
        }

        if self.icons.is_empty() {
            // Can't validate, accept anything
            return Ok(());
        }

        let segments: Vec<&str> = icon.split(':').collect();
        if segments.len() != 3 || segments[0] != "ti" {
            return Err(format!(
                "Invalid icon format '{}'. Expected 'ti:<name>:<variant>' (e.g. 'ti:tool:outline').",
                icon
            ));
        }

        let name = segments[1];
        let variant = segments[2];

        let Some(variants) = self.icons.get(name) else {
            let suggestions: Vec<&str> = self
                .icons
                .keys()
                .filter(|candidate| candidate.contains(name) || name.contains(candidate.as_str()))
                .take(5)
                .map(String::as_str)
                .collect();

            let mut message = format!("Unknown Tabler icon '{}'.", name);
            if !suggestions.is_empty() {
                let formatted: Vec<String> = suggestions
                    .iter()
                    .map(|s| format!("ti:{}:outline", s))
                    .collect();
                message.push_str(&format!(" Similar: {}", formatted.join(", ")));
            }
            return Err(message);
        };

        if !variants.contains(variant) {
            let valid: Vec<&str> = variants.iter().map(String::as_str).collect();
            return Err(format!(
                "Icon '{}' exists but variant '{}' is invalid. Valid variants: {}",
                name,
                variant,
                valid.join(", ")
            ));
        }

        Ok(())
    }
}
