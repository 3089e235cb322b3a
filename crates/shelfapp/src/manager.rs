//! # Product Manager
//!
//! [`ProductManager`] exposes the six catalog operations with a "never bother the
//! caller" contract: every failure (unreadable file, malformed content, missing
//! fields, duplicate code, unknown id) is logged through `tracing::error!` and
//! turned into a no-op return.
//!
//! | Operation | On failure returns |
//! |-----------|--------------------|
//! | [`load`](ProductManager::load) | empty `Vec` |
//! | [`save`](ProductManager::save) | `()` |
//! | [`add`](ProductManager::add) | `()`, nothing written |
//! | [`get_by_id`](ProductManager::get_by_id) | `None` |
//! | [`update`](ProductManager::update) | `()`, nothing written |
//! | [`delete`](ProductManager::delete) | `()`, nothing written |
//!
//! `load` failing open means a corrupt file reads as an empty catalog. `add`,
//! `update` and `delete` load first, so they keep failing (and logging) until
//! the file is repaired or replaced through `save`. Callers that need to tell these
//! cases apart should use [`ShelfApi`] directly, which this type wraps.

use crate::api::ShelfApi;
use crate::error::ShelfError;
use crate::model::{NewProduct, Product, ProductPatch};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::path::PathBuf;
use tracing::error;

pub struct ProductManager<S: DataStore> {
    api: ShelfApi<S>,
}

impl ProductManager<FileStore> {
    /// A manager over a JSON file at `path`. The file need not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(path))
    }
}

impl<S: DataStore> ProductManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            api: ShelfApi::new(store),
        }
    }

    pub fn api(&self) -> &ShelfApi<S> {
        &self.api
    }

    pub fn into_api(self) -> ShelfApi<S> {
        self.api
    }

    pub fn load(&self) -> Vec<Product> {
        match self.api.list_products() {
            Ok(result) => result.listed_products,
            Err(e) => {
                let location = self.api.location();
                error!(error = %e, location = %location.display(), "failed to read products");
                Vec::new()
            }
        }
    }

    pub fn save(&mut self, products: &[Product]) {
        if let Err(e) = self.api.save_products(products) {
            let location = self.api.location();
            error!(error = %e, location = %location.display(), "failed to save products");
        }
    }

    pub fn add(&mut self, candidate: NewProduct) {
        match self.api.add_product(candidate) {
            Ok(_) => {}
            Err(ShelfError::Validation { missing }) => {
                error!(?missing, "all fields are required, product not added");
            }
            Err(ShelfError::DuplicateCode(code)) => {
                error!(%code, "product code already exists, product not added");
            }
            Err(e) => error!(error = %e, "failed to add product"),
        }
    }

    pub fn get_by_id(&self, id: u64) -> Option<Product> {
        match self.api.get_product(id) {
            Ok(result) => result.listed_products.into_iter().next(),
            Err(ShelfError::NotFound(_)) => {
                error!(id, "product not found");
                None
            }
            Err(e) => {
                error!(id, error = %e, "failed to look up product");
                None
            }
        }
    }

    pub fn update(&mut self, id: u64, patch: ProductPatch) {
        match self.api.update_product(id, patch) {
            Ok(_) => {}
            Err(ShelfError::NotFound(_)) => error!(id, "product not found, nothing updated"),
            Err(e) => error!(id, error = %e, "failed to update product"),
        }
    }

    pub fn delete(&mut self, id: u64) {
        match self.api.delete_product(id) {
            Ok(_) => {}
            Err(ShelfError::NotFound(_)) => error!(id, "product not found, nothing removed"),
            Err(e) => error!(id, error = %e, "failed to remove product"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn manager_with(count: usize) -> ProductManager<InMemoryStore> {
        ProductManager::new(StoreFixture::new().with_products(count).store)
    }

    #[test]
    fn load_fails_open_on_read_error() {
        let mut store = StoreFixture::new().with_products(2).store;
        store.set_simulate_read_error(true);
        let manager = ProductManager::new(store);
        assert!(manager.load().is_empty());
    }

    #[test]
    fn save_swallows_write_errors() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut manager = ProductManager::new(store);
        manager.save(&[]);
        assert_eq!(manager.api().store().save_count(), 0);
    }

    #[test]
    fn add_swallows_rejections() {
        let mut manager = manager_with(1);
        manager.add(NewProduct::default());
        manager.add(NewProduct::new("A", "d", 1.0, "t", "CODE-1", 1));
        assert_eq!(manager.load().len(), 1);
        assert_eq!(manager.api().store().save_count(), 0);
    }

    #[test]
    fn get_by_id_returns_none_when_missing() {
        let manager = manager_with(1);
        assert!(manager.get_by_id(1).is_some());
        assert!(manager.get_by_id(2).is_none());
    }

    #[test]
    fn update_and_delete_of_unknown_id_are_noops() {
        let mut manager = manager_with(2);
        let before = manager.load();

        manager.update(5, ProductPatch::new().price(1.0));
        manager.delete(5);

        assert_eq!(manager.load(), before);
        assert_eq!(manager.api().store().save_count(), 0);
    }

    #[test]
    fn update_applies_patch() {
        let mut manager = manager_with(1);
        manager.update(1, ProductPatch::new().price(15.0));
        let product = manager.get_by_id(1).unwrap();
        assert_eq!(product.price(), Some(15.0));
        assert_eq!(product.id, 1);
    }

    #[test]
    fn into_api_hands_back_the_store() {
        let manager = manager_with(3);
        let api = manager.into_api();
        assert_eq!(api.list_products().unwrap().listed_products.len(), 3);
    }
}
