//! # Domain Model: Products, Candidates and Patches
//!
//! Shelf manages exactly one entity, the [`Product`]. Three shapes of it travel
//! through the system:
//!
//! - [`Product`]: a stored record. It has an `id` assigned by the store and a
//!   bag of attributes kept exactly as found in the backing file.
//! - [`NewProduct`]: a candidate handed to `add`. Every attribute is optional so
//!   that "not provided" can be told apart from a falsy value.
//! - [`ProductPatch`]: a partial update. Only the attributes that are set get
//!   written; it has no `id` and can never change one.
//!
//! ## Required Attributes
//!
//! | Field | Type | Presence rule |
//! |-------|------|---------------|
//! | `title` | text | non-empty |
//! | `description` | text | non-empty |
//! | `price` | number | non-zero, not NaN |
//! | `thumbnail` | text | non-empty |
//! | `code` | text | non-empty, unique at insert |
//! | `stock` | number | present (zero and `null` count as given) |
//!
//! Presence is checked on creation only. Updates are trusted as given, and
//! stored records are never checked at all: a record whose `stock` is `2.5`,
//! whose `price` is `null` or which has no `thumbnail` loads like any other.
//! The typed accessors on [`Product`] return `None` for such values.
//!
//! ## Extra Attributes
//!
//! Records may carry keys shelf does not know about. Those are written back
//! untouched, in their original order. They never satisfy a required
//! attribute: a record spelled `{"titulo": "..."}` still lacks a `title`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ShelfError};

/// The field names validated on creation, in reporting order.
pub const REQUIRED_FIELDS: [&str; 6] = ["title", "description", "price", "thumbnail", "code", "stock"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.text("thumbnail")
    }

    pub fn code(&self) -> Option<&str> {
        self.text("code")
    }

    pub fn price(&self) -> Option<f64> {
        self.get("price").and_then(Value::as_f64)
    }

    pub fn stock(&self) -> Option<f64> {
        self.get("stock").and_then(Value::as_f64)
    }

    /// Attributes outside the required set, in stored order.
    pub fn extras(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.attributes
            .iter()
            .filter(|(key, _)| !REQUIRED_FIELDS.contains(&key.as_str()))
    }

    /// Applies a patch in place. The `id` is left untouched whatever the patch
    /// carried.
    pub fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
            extra,
        } = patch;

        let known = [
            ("title", title.map(Value::String)),
            ("description", description.map(Value::String)),
            ("price", price.map(number_value)),
            ("thumbnail", thumbnail.map(Value::String)),
            ("code", code.map(Value::String)),
            ("stock", stock.map(number_value)),
        ];
        for (key, value) in known {
            if let Some(value) = value {
                self.attributes.insert(key.to_string(), value);
            }
        }
        for (key, value) in extra {
            if key != "id" {
                self.attributes.insert(key, value);
            }
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock: Option<Option<f64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewProduct {
    /// Builds a fully populated candidate.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: impl Into<f64>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            price: Some(price),
            thumbnail: Some(thumbnail.into()),
            code: Some(code.into()),
            stock: Some(Some(stock.into())),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Names of the required fields that are absent or falsy.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            is_filled(&self.title),
            is_filled(&self.description),
            self.price.is_some_and(|p| p != 0.0 && !p.is_nan()),
            is_filled(&self.thumbnail),
            is_filled(&self.code),
            self.stock.is_some(),
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ShelfError::Validation { missing })
        }
    }

    /// Turns a validated candidate into a stored record with the given id.
    /// A caller-supplied `id` among the extra attributes is discarded.
    pub fn into_product(self, id: u64) -> Result<Product> {
        self.validate()?;
        let (Some(title), Some(description), Some(price), Some(thumbnail), Some(code), Some(stock)) = (
            self.title,
            self.description,
            self.price,
            self.thumbnail,
            self.code,
            self.stock,
        ) else {
            return Err(ShelfError::Validation {
                missing: REQUIRED_FIELDS.to_vec(),
            });
        };

        let mut attributes = Map::new();
        attributes.insert("title".into(), Value::String(title));
        attributes.insert("description".into(), Value::String(description));
        attributes.insert("price".into(), number_value(price));
        attributes.insert("thumbnail".into(), Value::String(thumbnail));
        attributes.insert("code".into(), Value::String(code));
        attributes.insert("stock".into(), stock.map_or(Value::Null, number_value));
        for (key, value) in self.extra {
            if key != "id" && !attributes.contains_key(&key) {
                attributes.insert(key, value);
            }
        }
        Ok(Product { id, attributes })
    }
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Whole numbers are written as JSON integers, everything else as floats.
/// Non-finite values become `null`.
fn number_value(n: f64) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn stock(mut self, stock: impl Into<f64>) -> Self {
        self.stock = Some(stock.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
            && self.extra.keys().all(|k| k == "id")
    }
}
