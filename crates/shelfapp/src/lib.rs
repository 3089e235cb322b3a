//! # Shelf Architecture
//!
//! Shelf is a **flat-file product catalog library**. One JSON file holds the whole
//! collection; every read loads all of it and every write rewrites all of it.
//! There is no index, no cache and no query language.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ProductManager (manager.rs)                                │
//! │  - load / save / add / get_by_id / update / delete          │
//! │  - Logs every failure and returns a no-op value             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin typed facade, returns Result<CmdResult>             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, code uniqueness, id assignment, merging      │
//! │  - load full → mutate in memory → save full                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library never prints and never installs a log subscriber. Events are
//! emitted through `tracing`; the binary decides where they go.
//!
//! ## Quick Start
//!
//! ```no_run
//! use shelfapp::manager::ProductManager;
//! use shelfapp::model::{NewProduct, ProductPatch};
//!
//! let mut manager = ProductManager::open("products.json");
//! manager.add(NewProduct::new("Lamp", "Desk lamp", 25.0, "lamp.png", "LAMP-1", 4));
//! manager.update(1, ProductPatch::new().price(19.9));
//! let lamp = manager.get_by_id(1);
//! manager.delete(1);
//! ```
//!
//! ## Module Overview
//!
//! - [`model`]: `Product`, `NewProduct`, `ProductPatch` and presence rules
//! - [`store`]: the `DataStore` trait and its file/memory implementations
//! - [`commands`]: business logic per operation
//! - [`api`]: typed facade
//! - [`manager`]: log-and-swallow facade
//! - [`config`], [`init`]: configuration and context setup
//! - [`error`]: the `ShelfError` taxonomy

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod manager;
pub mod model;
pub mod store;
