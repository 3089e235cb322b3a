use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;
use tracing::info;

/// Replaces the whole collection with `products`, as given. No validation,
/// no id assignment.
pub fn run<S: DataStore>(store: &mut S, products: &[Product]) -> Result<CmdResult> {
    store.save_products(products)?;
    let location = store.location();
    info!(count = products.len(), location = %location.display(), "products saved");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} product(s)",
        products.len()
    )));
    Ok(result.with_affected_products(products.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn replaces_collection_verbatim() {
        let source = StoreFixture::new().with_products(2).store;
        let products = source.load_products().unwrap();

        let mut store = InMemoryStore::new();
        run(&mut store, &products).unwrap();
        assert_eq!(store.load_products().unwrap(), products);
    }

    #[test]
    fn saving_empty_clears_store() {
        let mut store = StoreFixture::new().with_products(2).store;
        run(&mut store, &[]).unwrap();
        assert!(store.load_products().unwrap().is_empty());
    }

    #[test]
    fn write_failure_is_propagated() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(matches!(run(&mut store, &[]), Err(ShelfError::Store(_))));
    }
}
