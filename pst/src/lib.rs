//! PromptStore - slot-backed personal prompt template store
//!
//! Holds user-authored prompt templates in a single persisted key-value
//! slot and round-trips them through JSON and Markdown export.
//!
//! # Architecture
//!
//! ```text
//! .promptstore/
//! └── my-templates.json    # the whole collection, one JSON array
//! ```
//!
//! The store never touches the filesystem directly: it goes through the
//! [`KvSlot`] trait, so the same operations run against a directory on disk
//! ([`FileSlot`]) or an in-memory map ([`MemSlot`]).
//!
//! # Example
//!
//! ```ignore
//! use promptstore::{CustomTemplate, TemplateStore};
//!
//! let store = TemplateStore::open(".promptstore")?;
//! let mut templates = store.load();
//! templates.insert(0, CustomTemplate::blank());
//! store.save(&templates)?;
//! ```

pub mod cli;
pub mod config;
mod slot;
mod store;
mod template;

pub use slot::{FileSlot, KvSlot, MemSlot};
pub use store::{TemplateStore, export_to_json, export_to_markdown, find_template, parse_import};
pub use template::{CustomTemplate, TemplateMetadata};

/// Slot key holding the whole template collection
pub const STORAGE_KEY: &str = "my-templates.json";
