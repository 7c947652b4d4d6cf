//! Record generator producing synthetic inventory batches.

use crate::catalog::Catalog;
use crate::error::FixtureError;
use crate::record::InventoryRecord;
use crate::samplers::{sample_order_date, sample_quantity, sample_replenishment};
use crate::seasonal::apply_seasonal_adjustments;
use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator that produces batches of inventory records.
///
/// The generator uses a seeded random number generator so the same seed,
/// catalog, and parameters reproduce the same batch.
pub struct InventoryGenerator {
    catalog: Catalog,
    rng: StdRng,
}

impl InventoryGenerator {
    /// Create a new generator over the given catalog and seed.
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate a batch of records with order dates in `[today - days, today]`,
    /// using the current UTC date as `today`.
    pub fn generate(
        &mut self,
        days: u32,
        num_records: u64,
        out_of_stock_rate: f64,
    ) -> Result<Vec<InventoryRecord>, FixtureError> {
        self.generate_at(Utc::now().date_naive(), days, num_records, out_of_stock_rate)
    }

    /// Generate a batch of records relative to an explicit reference date.
    ///
    /// Each record picks a product uniformly at random, resolves its category,
    /// and samples unit, quantity, order date, and replenishment time from the
    /// category's tables. With probability `out_of_stock_rate` the quantity is
    /// forced to zero. The seasonal adjustment pass runs over the finished
    /// batch before it is returned.
    pub fn generate_at(
        &mut self,
        today: NaiveDate,
        days: u32,
        num_records: u64,
        out_of_stock_rate: f64,
    ) -> Result<Vec<InventoryRecord>, FixtureError> {
        if !(0.0..=1.0).contains(&out_of_stock_rate) {
            return Err(FixtureError::InvalidParameter(format!(
                "out-of-stock rate must be within [0, 1], got {out_of_stock_rate}"
            )));
        }
        if self.catalog.products().is_empty() {
            return Err(FixtureError::EmptyCatalog);
        }

        let mut records = Vec::with_capacity(num_records as usize);

        for _ in 0..num_records {
            records.push(self.next_record(today, days, out_of_stock_rate));
        }

        apply_seasonal_adjustments(&mut records);

        Ok(records)
    }

    /// Generate a single record. Callers must have validated the parameters.
    fn next_record(&mut self, today: NaiveDate, days: u32, out_of_stock_rate: f64) -> InventoryRecord {
        let products = self.catalog.products();
        let name = products[self.rng.gen_range(0..products.len())].clone();

        // Product names come from the catalog, so resolution cannot fail.
        let category = self
            .catalog
            .category_of(&name)
            .expect("catalog product without category")
            .clone();

        let unit = category.units[self.rng.gen_range(0..category.units.len())].clone();

        let (min_qty, max_qty) = category.quantity_range;
        let mut quantity = sample_quantity(&mut self.rng, min_qty, max_qty);
        if self.rng.gen_bool(out_of_stock_rate) {
            quantity = 0;
        }

        let order_date = sample_order_date(&mut self.rng, today, days);

        let (min_time, max_time) = category.replenishment_range;
        let replenishment_time = sample_replenishment(&mut self.rng, min_time, max_time);

        InventoryRecord {
            name,
            quantity,
            unit,
            category: category.name,
            order_date,
            replenishment_time,
        }
    }
}
