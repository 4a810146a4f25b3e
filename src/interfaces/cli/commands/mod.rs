//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod lookup;
mod shorten;
mod visit;

pub use config_gen::config_generate;
pub use lookup::lookup_code;
pub use shorten::shorten_url;
pub use visit::visit_code;
