//! End-to-end tests: generate a batch, export it, parse it back.

use chrono::NaiveDate;
use inventory_fixtures::{Catalog, CsvExporter, InventoryGenerator, InventoryRecord};
use tempfile::TempDir;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn test_csv_roundtrip_preserves_fields() {
    let mut generator = InventoryGenerator::new(Catalog::default(), 42);
    let records = generator
        .generate_at(reference_date(), 90, 50, 0.1)
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory.csv");
    CsvExporter::new().export(&records, &output_path).unwrap();

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    let parsed: Vec<InventoryRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(parsed, records);
}

#[test]
fn test_csv_header_and_date_format() {
    let mut generator = InventoryGenerator::new(Catalog::default(), 42);
    let records = generator
        .generate_at(reference_date(), 90, 5, 0.1)
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory.csv");
    CsvExporter::new().export(&records, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "name,quantity,unit,category,orderDate,replenishmentTime"
    );

    // Each data row carries a YYYY-MM-DD date in the fifth column.
    for line in &lines[1..] {
        let date_field = line.split(',').nth(4).unwrap();
        NaiveDate::parse_from_str(date_field, "%Y-%m-%d").unwrap();
    }
}

#[test]
fn test_same_seed_produces_identical_files() {
    let temp_dir = TempDir::new().unwrap();

    let mut gen1 = InventoryGenerator::new(Catalog::default(), 42);
    let batch1 = gen1.generate_at(reference_date(), 90, 100, 0.1).unwrap();
    let path1 = temp_dir.path().join("run1.csv");
    CsvExporter::new().export(&batch1, &path1).unwrap();

    let mut gen2 = InventoryGenerator::new(Catalog::default(), 42);
    let batch2 = gen2.generate_at(reference_date(), 90, 100, 0.1).unwrap();
    let path2 = temp_dir.path().join("run2.csv");
    CsvExporter::new().export(&batch2, &path2).unwrap();

    let content1 = std::fs::read_to_string(&path1).unwrap();
    let content2 = std::fs::read_to_string(&path2).unwrap();
    assert_eq!(content1, content2);
}

#[test]
fn test_all_out_of_stock_dataset() {
    let mut generator = InventoryGenerator::new(Catalog::default(), 42);
    let records = generator
        .generate_at(reference_date(), 90, 30, 1.0)
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("inventory.csv");
    CsvExporter::new().export(&records, &output_path).unwrap();

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    for result in reader.deserialize::<InventoryRecord>() {
        assert_eq!(result.unwrap().quantity, 0);
    }
}
