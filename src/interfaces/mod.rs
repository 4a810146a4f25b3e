//! User-facing interfaces built on top of the resolution service

pub mod cli;
