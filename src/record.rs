//! The inventory record type shared by the generator and the CSV writer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single synthetic inventory row.
///
/// Serde field names match the CSV columns, so serializing through the `csv`
/// crate yields the header
/// `name,quantity,unit,category,orderDate,replenishmentTime` with dates in
/// `YYYY-MM-DD` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Product name.
    pub name: String,
    /// Units in stock. Zero means out of stock.
    pub quantity: u32,
    /// Unit of measure, drawn from the product category's unit list.
    pub unit: String,
    /// Category the product belongs to.
    pub category: String,
    /// Date the stock was last ordered.
    #[serde(rename = "orderDate")]
    pub order_date: NaiveDate,
    /// Days expected until restock after depletion.
    #[serde(rename = "replenishmentTime")]
    pub replenishment_time: u32,
}
