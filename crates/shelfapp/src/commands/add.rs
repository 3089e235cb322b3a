use crate::commands::{next_id, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::NewProduct;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, candidate: NewProduct) -> Result<CmdResult> {
    let mut products = store.load_products()?;

    candidate.validate()?;

    if let Some(code) = candidate.code.as_deref() {
        if products.iter().any(|p| p.code() == Some(code)) {
            return Err(ShelfError::DuplicateCode(code.to_string()));
        }
    }

    let id = next_id(&products)?;
    let product = candidate.into_product(id)?;
    products.push(product.clone());
    store.save_products(&products)?;

    let title = product.title().unwrap_or_default();
    info!(id = product.id, code = product.code(), product = ?product, "product added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, title
    )));
    result.affected_products.push(product);
    Ok(result)
}
