//! # Product Record
//!
//! The single domain entity managed by the inventory. Views treat it as an
//! immutable value: edits produce a new `Product` that replaces the old one
//! in the data source.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub min_quantity: u32,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Empty product carrying only a freshly generated ID.
    pub fn blank() -> Self {
        Self {
            id: new_product_id(),
            sku: String::new(),
            name: String::new(),
            quantity: 0,
            category: String::new(),
            min_quantity: 0,
            description: String::new(),
            price: 0.0,
        }
    }

    /// At or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// Stock value of this line (`quantity * price`).
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Case-insensitive substring match over name and SKU. A blank term
    /// matches everything; any other term is matched as typed, spaces
    /// included.
    pub fn matches(&self, term: &str) -> bool {
        if term.trim().is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.sku.to_lowercase().contains(&needle)
    }
}

/// Short upper-case ID: the first 8 hex digits of a v4 UUID.
pub fn new_product_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id.to_uppercase()
}

/// Render a price with the given currency symbol and two decimals.
pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{symbol}{price:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, sku: &str) -> Product {
        Product {
            name: name.to_string(),
            sku: sku.to_string(),
            ..Product::blank()
        }
    }

    #[test]
    fn test_new_product_id_shape() {
        let id = new_product_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_matches_name_or_sku_case_insensitive() {
        let p = product("Tornillo ABC", "TR-001");
        assert!(p.matches("abc"));
        assert!(p.matches("tr-0"));
        assert!(!p.matches("xyz"));
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let p = product("Clavo", "CL-1");
        assert!(p.matches(""));
        assert!(p.matches("   "));
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_term() {
        let p = product("Bolt", "BT-1");
        assert!(p.matches("bolt"));
        assert!(!p.matches("bolt "));
        assert!(!p.matches(" bolt"));
        assert!(product("Hex bolt", "HB-1").matches(" bolt"));
    }

    #[test]
    fn test_low_stock_boundary() {
        let mut p = product("Clavo", "CL-1");
        p.quantity = 5;
        p.min_quantity = 5;
        assert!(p.is_low_stock());
        p.quantity = 6;
        assert!(!p.is_low_stock());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("$", 12.5), "$12.50");
        assert_eq!(format_price("₡", 0.0), "₡0.00");
    }
}
