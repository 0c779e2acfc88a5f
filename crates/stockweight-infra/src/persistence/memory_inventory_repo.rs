//! In-memory implementation of InventoryRepository

use stockweight_domain::model::StockItem;
use stockweight_domain::repository::InventoryRepository;
use stockweight_types::Error;

/// Inventory rows held in insertion order
#[derive(Debug, Default)]
pub struct MemoryInventoryRepository {
    items: Vec<StockItem>,
}

impl MemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}

impl InventoryRepository for MemoryInventoryRepository {
    fn find_all(&self) -> Result<Vec<StockItem>, Error> {
        Ok(self.items.clone())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<StockItem>, Error> {
        let code = code.trim();
        Ok(self.items.iter().find(|item| item.code == code).cloned())
    }

    fn insert_many(&mut self, items: Vec<StockItem>) -> Result<usize, Error> {
        let mut inserted = 0;
        for item in items {
            if self.items.iter().any(|existing| existing.code == item.code) {
                continue;
            }
            self.items.push(item);
            inserted += 1;
        }
        Ok(inserted)
    }

    fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_stock_items;

    #[test]
    fn test_insert_and_find() {
        let mut repo = MemoryInventoryRepository::new();
        assert!(repo.is_empty().unwrap());
        let inserted = repo.insert_many(default_stock_items()).unwrap();
        assert_eq!(inserted, 8);

        let item = repo.find_by_code("10.06.0019").unwrap().unwrap();
        assert_eq!(item.item_type, "TARUGO");
        assert_eq!(item.order_point, 6);
        assert!(repo.find_by_code("99.99.9999").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_codes_are_skipped() {
        let mut repo = MemoryInventoryRepository::new();
        repo.insert_many(default_stock_items()).unwrap();
        let again = repo.insert_many(default_stock_items()).unwrap();
        assert_eq!(again, 0);
        assert_eq!(repo.count(), 8);
    }

    #[test]
    fn test_find_all_keeps_insertion_order() {
        let mut repo = MemoryInventoryRepository::new();
        repo.insert_many(default_stock_items()).unwrap();
        let codes: Vec<_> = repo.find_all().unwrap().into_iter().map(|i| i.code).collect();
        assert_eq!(codes.first().map(String::as_str), Some("10.01.0155"));
        assert_eq!(codes.last().map(String::as_str), Some("0000008679"));
    }
}
