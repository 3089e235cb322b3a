use crate::commands::CmdResult;
use crate::error::{Result, ShelfError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let products = store.load_products()?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(ShelfError::NotFound(id))?;

    Ok(CmdResult::default().with_listed_products(vec![product]))
}
