//! Synthetic inventory dataset generator.
//!
//! This crate produces CSV fixture files of inventory records with plausible
//! category-based patterns: per-category units, quantity ranges,
//! replenishment times, and a seasonal demand adjustment pass. The generator
//! uses a seeded RNG to ensure reproducibility across runs with the same seed.
//!
//! # Architecture
//!
//! ```text
//! Catalog (category tables)
//!        │
//!        ▼
//! ┌────────────────────┐
//! │ InventoryGenerator │
//! │                    │
//! │  - catalog         │
//! │  - rng (StdRng)    │
//! └─────────┬──────────┘
//!           │ batch
//!           ▼
//!   seasonal adjustment pass
//!           │
//!           ▼
//!      CsvExporter ──▶ name,quantity,unit,category,orderDate,replenishmentTime
//! ```
//!
//! # Example
//!
//! ```rust
//! use inventory_fixtures::{Catalog, InventoryGenerator};
//!
//! let mut generator = InventoryGenerator::new(Catalog::default(), 42);
//! let records = generator.generate(90, 10, 0.1).unwrap();
//! assert_eq!(records.len(), 10);
//! ```

pub mod args;
pub mod catalog;
mod error;
pub mod generator;
pub mod record;
pub mod samplers;
pub mod seasonal;
pub mod writer;

// Re-exports for convenience
pub use catalog::{Catalog, Category};
pub use error::FixtureError;
pub use generator::InventoryGenerator;
pub use record::InventoryRecord;
pub use writer::{CsvExporter, ExportMetrics};
