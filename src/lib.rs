//! # GBADs Data API
//!
//! Public HTTP API over the Global Burden of Animal Diseases data stores:
//! catalog-validated SELECT queries against the Postgres warehouse, S3 file
//! access, dashboard comment moderation, and dataset metadata from the
//! knowledge graph.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Query validation and assembly (catalog, query spec, comments)
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: Postgres, S3, and Neo4j adapters
//! - **API**: HTTP handlers, rendering, and middleware

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{dto, ports, use_cases};
pub use config::Config;
