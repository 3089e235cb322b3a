use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use std::path::PathBuf;

/// In-memory store for testing command logic without filesystem I/O.
///
/// Counts saves so tests can assert that a rejected operation never wrote.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    saves: usize,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `save_products` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        if self.simulate_read_error {
            return Err(ShelfError::Store("Simulated read error".to_string()));
        }
        Ok(self.products.clone())
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.products = products.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://products.json")
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.load_products().unwrap().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_replaces_collection() {
        let mut store = StoreFixture::new().with_products(3).store;
        let mut products = store.load_products().unwrap();
        products.truncate(1);

        store.save_products(&products).unwrap();
        assert_eq!(store.load_products().unwrap().len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn simulated_errors() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(matches!(store.save_products(&[]), Err(ShelfError::Store(_))));
        assert_eq!(store.save_count(), 0);

        store.set_simulate_read_error(true);
        assert!(matches!(store.load_products(), Err(ShelfError::Store(_))));
    }

    #[test]
    fn fixture_ids_continue_from_maximum() {
        let fixture = StoreFixture::default().with_products(2).with_products(1);
        let ids: Vec<u64> = fixture
            .store
            .load_products()
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(fixture.store.save_count(), 0);
    }
}
