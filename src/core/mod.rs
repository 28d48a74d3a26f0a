//! # Core Application Logic
//!
//! The inventory domain. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Product (record)     │
//!                    │  • DataSource (trait)   │
//!                    │  • Inventory (JSON)     │
//!                    │  • Config               │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`]: The `Product` record
//! - [`inventory`]: The `DataSource` contract and its file-backed implementation
//! - [`config`]: Config file loading and resolution

pub mod config;
pub mod inventory;
pub mod product;
