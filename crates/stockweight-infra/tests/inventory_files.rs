//! Loading inventory files from disk

use std::fs;

use stockweight_domain::repository::InventoryRepository;
use stockweight_infra::load_stock_items;
use stockweight_infra::persistence::{MemoryDashboardRepository, MemoryInventoryRepository};
use stockweight_infra::seed::seed_if_empty;
use stockweight_types::Error;
use tempfile::tempdir;

#[test]
fn test_load_windows_1252_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("estoque.csv");
    // "VERGALHÃO" saved by a pt-BR spreadsheet: Ã is 0xC3 in Windows-1252
    let mut bytes = b"code,type,description,currentBalance,orderPoint\n".to_vec();
    bytes.extend_from_slice(b"10.02.0589,VERGALH\xC3O,VERGALHAO INOX 201,5,2\n");
    fs::write(&path, bytes).unwrap();

    let items = load_stock_items(&path).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, "VERGALHÃO");
    assert!(items[0].current_balance > items[0].order_point);
}

#[test]
fn test_load_toml() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("inventory.toml");
    fs::write(
        &path,
        "[[items]]\ncode = \"A1\"\ntype = \"CHAPA\"\ndescription = \"CHAPA 2MM\"\n",
    )
    .unwrap();

    let items = load_stock_items(&path).unwrap();
    assert_eq!(items[0].code, "A1");
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("inventory.json");
    fs::write(&path, "[]").unwrap();

    assert!(matches!(load_stock_items(&path), Err(Error::InventorySource(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nope.csv");
    assert!(matches!(load_stock_items(&path), Err(Error::FileNotFound(_))));
}

#[test]
fn test_loaded_rows_suppress_seed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("inventory.csv");
    fs::write(&path, "code,type,description\nA1,CHAPA,CHAPA 2MM\nA2,CHAPA,CHAPA 3MM\n").unwrap();

    let mut inventory = MemoryInventoryRepository::new();
    let mut dashboard = MemoryDashboardRepository::new();
    inventory.insert_many(load_stock_items(&path).unwrap()).unwrap();
    seed_if_empty(&mut inventory, &mut dashboard).unwrap();

    assert_eq!(inventory.find_all().unwrap().len(), 2);
}
