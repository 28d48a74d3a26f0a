//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::inventory::Inventory;
use crate::core::product::Product;

/// `count` deterministic products. When `count >= 10`, exactly two of them
/// match the term "abc": one by name, one by SKU.
pub fn sample_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let name = if i == 3 {
                "Cable ABC".to_string()
            } else {
                format!("Product {i:02}")
            };
            let sku = if i == 7 {
                "abc-777".to_string()
            } else {
                format!("SKU-{i:03}")
            };
            Product {
                id: format!("ID{i:06}"),
                sku,
                name,
                quantity: (i as u32) * 2,
                category: "General".to_string(),
                min_quantity: 4,
                description: format!("Item number {i}"),
                price: 1.5 + i as f64,
            }
        })
        .collect()
}

pub fn test_inventory(count: usize) -> Inventory {
    Inventory::in_memory(sample_products(count))
}
