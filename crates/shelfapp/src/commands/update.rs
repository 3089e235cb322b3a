use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::ProductPatch;
use crate::store::DataStore;
use tracing::info;

/// Merges `patch` onto the product with `id` and saves the collection.
///
/// No presence validation and no code uniqueness check happen here: both are
/// insert-time rules.
pub fn run<S: DataStore>(store: &mut S, id: u64, patch: ProductPatch) -> Result<CmdResult> {
    let mut products = store.load_products()?;
    let index = products
        .iter()
        .position(|p| p.id == id)
        .ok_or(ShelfError::NotFound(id))?;

    let nothing_to_apply = patch.is_empty();
    products[index].apply(patch);
    store.save_products(&products)?;

    let product = products.swap_remove(index);
    info!(id = product.id, product = ?product, "product updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        product.id,
        product.title().unwrap_or_default()
    )));
    if nothing_to_apply {
        result.add_message(CmdMessage::warning("No fields given, product left as it was"));
    }
    result.affected_products.push(product);
    Ok(result)
}
