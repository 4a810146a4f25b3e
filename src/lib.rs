//! minilink - a digest-based URL shortener
//!
//! Every distinct URL gets exactly one short code, derived from a digest of the
//! URL itself. Codes that collide with another URL's code are lengthened one
//! character at a time until a free one is found.
//!
//! # Architecture
//! - `utils`: code generation and URL validation
//! - `storage`: the `MappingStore` abstraction with SeaORM and in-memory backends
//! - `services`: get-or-create, lookup and click resolution
//! - `interfaces`: command-line front end
//! - `config`: TOML + environment configuration
//! - `system`: logging setup

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
