//! Seasonal post-adjustment pass over a generated batch.
//!
//! Products in higher demand during a season get their stock scaled down and
//! their replenishment sped up. The item lists are fixed and intentionally
//! kept as found in the source data model, even though none of them appear in
//! the default catalog, so the pass does not fire on default-catalog batches.

use crate::record::InventoryRecord;
use chrono::Datelike;

/// Products with elevated summer demand.
pub const SUMMER_ITEMS: [&str; 3] = ["Ice Cream", "Watermelon", "Soda"];

/// Products with elevated winter demand.
pub const WINTER_ITEMS: [&str; 3] = ["Soup", "Hot Chocolate", "Tea"];

const SUMMER_MONTHS: [u32; 3] = [6, 7, 8];
const WINTER_MONTHS: [u32; 3] = [12, 1, 2];

/// Scale factor applied to quantity and replenishment time of in-season rows.
const DEMAND_FACTOR: f64 = 0.7;

/// Adjust a batch of records for seasonal demand.
///
/// Rows ordered in June-August for a summer item, or December-February for a
/// winter item, get quantity scaled by 0.7 (truncated, stays >= 0) and
/// replenishment time scaled by 0.7 (truncated, floored at 2 days).
pub fn apply_seasonal_adjustments(records: &mut [InventoryRecord]) {
    for record in records.iter_mut() {
        let month = record.order_date.month();

        let in_season = (SUMMER_MONTHS.contains(&month)
            && SUMMER_ITEMS.contains(&record.name.as_str()))
            || (WINTER_MONTHS.contains(&month) && WINTER_ITEMS.contains(&record.name.as_str()));

        if in_season {
            record.quantity = (f64::from(record.quantity) * DEMAND_FACTOR).trunc() as u32;
            record.replenishment_time =
                ((f64::from(record.replenishment_time) * DEMAND_FACTOR).trunc() as u32).max(2);
        }
    }
}
