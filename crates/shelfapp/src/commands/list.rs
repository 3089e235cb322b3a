use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let products = store.load_products()?;
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products found."));
    }
    Ok(result.with_listed_products(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_stored_order() {
        let store = StoreFixture::new().with_products(3).store;
        let ids: Vec<u64> = run(&store)
            .unwrap()
            .listed_products
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_store_reports_info() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
