use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Product;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_INDENT: usize = 2;

pub struct FileStore {
    path: PathBuf,
    indent: usize,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }

    fn render(&self, products: &[Product]) -> Result<Vec<u8>> {
        let indent = vec![b' '; self.indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        products.serialize(&mut ser)?;
        Ok(buf)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("products.json");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "backing file missing, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        debug!(path = %self.path.display(), count = products.len(), "loaded products");
        Ok(products)
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = self.render(products)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }

        debug!(path = %self.path.display(), count = products.len(), "saved products");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;
    use tempfile::TempDir;

    fn product(id: u64, code: &str) -> Product {
        NewProduct::new("Title", "Desc", 9.5, "thumb.png", code, 3)
            .into_product(id)
            .unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("products.json"));
        assert!(store.load_products().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("products.json");
        let mut store = FileStore::new(&path);

        store.save_products(&[product(1, "A")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_is_pretty_printed_with_two_spaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        let mut store = FileStore::new(&path);

        store.save_products(&[product(1, "A")]).unwrap();
        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn custom_indent_is_honored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        let mut store = FileStore::new(&path).with_indent(4);

        store.save_products(&[product(1, "A")]).unwrap();
        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with("[\n    {\n        \"id\": 1,"));
    }

    #[test]
    fn empty_collection_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("products.json"));

        store.save_products(&[]).unwrap();
        assert!(store.load_products().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load_products(),
            Err(ShelfError::Serialization(_))
        ));
    }

    #[test]
    fn directory_in_place_of_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        fs::create_dir(&path).unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load_products(), Err(ShelfError::Io(_))));
    }

    #[test]
    fn location_is_the_configured_path() {
        let store = FileStore::new("/tmp/catalog.json");
        assert_eq!(store.location(), PathBuf::from("/tmp/catalog.json"));
        assert_eq!(store.indent(), DEFAULT_INDENT);
    }
}
