use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::Product;
use crate::store::DataStore;
use tracing::info;

/// Removes every record with `id` (normally exactly one) and saves the rest in
/// their original order.
pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let products = store.load_products()?;
    let (removed, kept): (Vec<Product>, Vec<Product>) =
        products.into_iter().partition(|p| p.id == id);

    if removed.is_empty() {
        return Err(ShelfError::NotFound(id));
    }

    store.save_products(&kept)?;
    info!(id, "product removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Product removed ({})", id)));
    Ok(result.with_affected_products(removed))
}
