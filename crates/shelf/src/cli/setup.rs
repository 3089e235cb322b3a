use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use shelfapp::model::{NewProduct, ProductPatch};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Flat-file JSON product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backing JSON file (overrides the configured data_file)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print records as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(display_order = 1)]
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Show a single product
    #[command(alias = "show", display_order = 2)]
    Get {
        /// Product id
        id: u64,
    },

    /// List all products
    #[command(alias = "ls", display_order = 3)]
    List,

    /// Update fields of an existing product
    #[command(alias = "edit", display_order = 4)]
    Update {
        /// Product id
        id: u64,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Product id
        id: u64,
    },

    /// Show the resolved configuration
    #[command(display_order = 10)]
    Config,
}

/// Product attributes shared by `add` and `update`.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product title
    #[arg(long)]
    pub title: Option<String>,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Unit price
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Thumbnail path or URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Unique product code
    #[arg(long)]
    pub code: Option<String>,

    /// Units in stock (may be negative or fractional)
    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<f64>,

    /// Additional attribute (repeatable, e.g. --attr category=lamps)
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, Value)>,
}

impl ProductFields {
    pub fn into_new_product(self) -> NewProduct {
        let mut candidate = NewProduct {
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock.map(Some),
            ..Default::default()
        };
        for (key, value) in self.attrs {
            candidate = candidate.with_extra(key, value);
        }
        candidate
    }

    pub fn into_patch(self) -> ProductPatch {
        let mut patch = ProductPatch {
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
            ..Default::default()
        };
        for (key, value) in self.attrs {
            patch = patch.extra(key, value);
        }
        patch
    }
}

/// Parses `key=value`. The value is read as JSON when possible, else kept as a string.
pub fn parse_attr(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid attribute `{}`: expected KEY=VALUE", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid attribute `{}`: empty key", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
