//! # Inventory Store
//!
//! The data source every view reads from and writes to. Products live in an
//! ordered `Vec` and are persisted to a single JSON file after each mutation.
//!
//! Loading never fails the process: a missing file is an empty inventory,
//! and a corrupt or unreadable file is moved aside to `<name>.corrupt` and
//! treated the same way, so the next save cannot overwrite it.
//! All writes use atomic rename (write `.tmp`, then `rename()`).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::product::Product;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
    /// No product with the given ID.
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "inventory I/O error: {e}"),
            StoreError::Serialize(e) => write!(f, "inventory format error: {e}"),
            StoreError::NotFound(id) => write!(f, "no product with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialize(e)
    }
}

// ============================================================================
// Data Source Contract
// ============================================================================

/// Everything the UI needs from the inventory.
///
/// Mutations apply in memory first; an `Err` means the change could not be
/// persisted (or the target product does not exist), never that the UI
/// state is inconsistent.
pub trait DataSource {
    fn list(&self) -> Vec<Product>;
    /// Case-insensitive substring match over name and SKU.
    /// A blank term returns the full list.
    fn search(&self, term: &str) -> Vec<Product>;
    fn get(&self, id: &str) -> Option<Product>;
    fn add(&mut self, product: Product) -> Result<(), StoreError>;
    fn update(&mut self, product: Product) -> Result<(), StoreError>;
    /// Adjust stock by `delta`, clamped at zero.
    fn update_quantity(&mut self, id: &str, delta: i64) -> Result<(), StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// On-disk layout of the inventory file.
#[derive(Serialize, Deserialize, Default, Debug)]
struct InventoryFile {
    products: Vec<Product>,
}

pub struct Inventory {
    products: Vec<Product>,
    path: Option<PathBuf>,
}

impl Inventory {
    /// Open the inventory stored at `path`, creating nothing until the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let products = load_products(&path);
        Self {
            products,
            path: Some(path),
        }
    }

    /// Inventory that never touches disk.
    pub fn in_memory(products: Vec<Product>) -> Self {
        Self {
            products,
            path: None,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = InventoryFile {
            products: self.products.clone(),
        };
        atomic_write_json(path, &data).inspect_err(|e| {
            warn!("Failed to save inventory to {}: {}", path.display(), e);
        })?;
        debug!("Saved {} products to {}", self.products.len(), path.display());
        Ok(())
    }
}

impl DataSource for Inventory {
    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn search(&self, term: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.matches(term))
            .cloned()
            .collect()
    }

    fn get(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn add(&mut self, product: Product) -> Result<(), StoreError> {
        info!("Adding product {} ({})", product.id, product.name);
        self.products.push(product);
        self.persist()
    }

    fn update(&mut self, product: Product) -> Result<(), StoreError> {
        let idx = self.position(&product.id)?;
        info!("Updating product {}", product.id);
        self.products[idx] = product;
        self.persist()
    }

    fn update_quantity(&mut self, id: &str, delta: i64) -> Result<(), StoreError> {
        let idx = self.position(id)?;
        let product = &mut self.products[idx];
        let next = (i64::from(product.quantity) + delta).clamp(0, i64::from(u32::MAX));
        product.quantity = next as u32;
        debug!("Quantity of {} is now {}", id, product.quantity);
        self.persist()
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        info!("Deleted product {}", id);
        self.persist()
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Read the product list. Every failure degrades to an empty inventory.
fn load_products(path: &Path) -> Vec<Product> {
    if !path.exists() {
        info!("No inventory file at {}, starting empty", path.display());
        return Vec::new();
    }
    match read_file(path) {
        Ok(file) => {
            info!("Loaded {} products from {}", file.products.len(), path.display());
            file.products
        }
        Err(e) => {
            warn!("Could not load inventory from {}: {}", path.display(), e);
            let aside = corrupt_path(path);
            match fs::rename(path, &aside) {
                Ok(()) => warn!("Moved unreadable inventory to {}", aside.display()),
                Err(e) => warn!("Could not move {} aside: {}", path.display(), e),
            }
            Vec::new()
        }
    }
}

/// `inventory.json` -> `inventory.json.corrupt`
fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

fn read_file(path: &Path) -> Result<InventoryFile, StoreError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_products;

    #[test]
    fn test_search_blank_returns_everything() {
        let inv = Inventory::in_memory(sample_products(10));
        assert_eq!(inv.search("").len(), 10);
        assert_eq!(inv.search("  ").len(), 10);
    }

    #[test]
    fn test_search_matches_name_and_sku() {
        let inv = Inventory::in_memory(sample_products(10));
        // sample_products names "abc" into one name and one SKU
        let hits = inv.search("ABC");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_update_quantity_clamps_at_zero() {
        let mut inv = Inventory::in_memory(sample_products(1));
        let id = inv.list()[0].id.clone();
        inv.update_quantity(&id, -1_000).unwrap();
        assert_eq!(inv.get(&id).unwrap().quantity, 0);
        inv.update_quantity(&id, 3).unwrap();
        assert_eq!(inv.get(&id).unwrap().quantity, 3);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut inv = Inventory::in_memory(sample_products(3));
        let mut p = inv.list()[1].clone();
        p.name = "Renamed".to_string();
        inv.update(p.clone()).unwrap();
        assert_eq!(inv.list()[1], p);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut inv = Inventory::in_memory(sample_products(2));
        assert!(matches!(inv.delete("nope"), Err(StoreError::NotFound(_))));
        assert!(matches!(inv.update_quantity("nope", 1), Err(StoreError::NotFound(_))));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut inv = Inventory::open(&path);
        assert!(inv.is_empty());
        for p in sample_products(3) {
            inv.add(p).unwrap();
        }
        let id = inv.list()[0].id.clone();
        inv.delete(&id).unwrap();

        let reloaded = Inventory::open(&path);
        assert_eq!(reloaded.list(), inv.list());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let inv = Inventory::open(&path);
        assert!(inv.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_kept_aside_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let mut inv = Inventory::open(&path);
        let aside = dir.path().join("inventory.json.corrupt");
        assert_eq!(fs::read_to_string(&aside).unwrap(), "{ not json");
        assert!(!path.exists());

        inv.add(sample_products(1).remove(0)).unwrap();
        assert_eq!(fs::read_to_string(&aside).unwrap(), "{ not json");
        assert_eq!(Inventory::open(&path).len(), 1);
    }
}
